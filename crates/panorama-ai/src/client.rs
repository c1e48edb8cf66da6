//! Gemini `generateContent` client.

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use tracing::warn;

use panorama_core::models::Project;

/// Environment variable holding the Gemini API key. When unset the
/// client still constructs, but every call returns the not-configured
/// placeholder.
pub const ENV_AI_KEY: &str = "PANORAMA_AI_KEY";

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const NOT_CONFIGURED: &str = "API Key not configured.";
const ANALYSIS_UNAVAILABLE: &str = "Unable to generate analysis at this time.";
const REPORT_UNAVAILABLE: &str = "Unable to generate report.";
const ANALYSIS_EMPTY: &str = "No analysis generated.";
const REPORT_EMPTY: &str = "No report generated.";

pub struct AiClient {
    http: Client,
    api_key: Option<String>,
    endpoint: String,
}

impl AiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_default(),
            api_key: api_key.filter(|k| !k.is_empty()),
            endpoint: GEMINI_ENDPOINT.to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var(ENV_AI_KEY).ok())
    }

    /// Executive summary of the whole portfolio: health, at-risk
    /// high-value projects, financial outlook.
    pub async fn portfolio_analysis(&self, projects: &[Project]) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return NOT_CONFIGURED.to_string();
        };

        // Only the fields the summary needs; the rest stays out of the
        // prompt to keep it small.
        let summary: Vec<Value> = projects
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "status": p.status.as_str(),
                    "value": p.value,
                    "notes": p.notes,
                })
            })
            .collect();

        let prompt = format!(
            "You are an executive assistant to a General Manager.\n\
             Analyze the following project portfolio data and provide a concise executive summary.\n\
             Focus on:\n\
             1. Overall health of the portfolio.\n\
             2. Any high-value projects that might be at risk (based on notes or status).\n\
             3. A quick financial outlook.\n\n\
             Keep it professional, brief (under 150 words), and actionable. Use bullet points.\n\n\
             Data: {}",
            Value::Array(summary)
        );

        match self.generate(key, &prompt).await {
            Ok(text) if text.is_empty() => ANALYSIS_EMPTY.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "portfolio analysis request failed");
                ANALYSIS_UNAVAILABLE.to_string()
            }
        }
    }

    /// A short status-update email draft for one project.
    pub async fn project_report(&self, project: &Project) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return NOT_CONFIGURED.to_string();
        };

        let prompt = format!(
            "Draft a short, professional status update email for the project \"{}\".\n\n\
             Project Details:\n\
             - Customer: {}\n\
             - Status: {}\n\
             - Value: {}\n\
             - Current Notes: {}\n\n\
             The email should be addressed to the stakeholders. Highlight progress and any blockers.",
            project.name,
            project.customer_name,
            project.status.as_str(),
            project.value,
            project.notes,
        );

        match self.generate(key, &prompt).await {
            Ok(text) if text.is_empty() => REPORT_EMPTY.to_string(),
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "project report request failed");
                REPORT_UNAVAILABLE.to_string()
            }
        }
    }

    async fn generate(&self, key: &str, prompt: &str) -> Result<String, String> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint.trim_end_matches('/'),
            MODEL,
            key
        );

        let payload = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let response = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("upstream error {status}: {body}"));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| format!("invalid response: {e}"))?;

        let text = body["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["text"].as_str())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        Ok(text.trim().to_string())
    }
}
