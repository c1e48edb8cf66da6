//! Panorama console — application entry point.
//!
//! Backend selection happens here, once, at startup: when both remote
//! environment variables are present the console runs against the
//! remote store, otherwise it opens the local fallback store and seeds
//! it on first use. Everything downstream of this choice works through
//! the same gateway.

use tracing_subscriber::EnvFilter;

use panorama_ai::AiClient;
use panorama_core::stats::DashboardStats;
use panorama_core::store::Backend;
use panorama_db::{DbConfig, Gateway, LocalBackend, RemoteBackend};

const ENV_DATA_DIR: &str = "PANORAMA_DATA_DIR";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("panorama=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting Panorama console...");

    match DbConfig::from_env() {
        Some(config) => {
            let backend = match RemoteBackend::connect(config).await {
                Ok(backend) => backend,
                Err(err) => {
                    tracing::error!(error = %err, "failed to connect to the remote backend");
                    std::process::exit(1);
                }
            };
            run(Gateway::new(backend)).await;
        }
        None => {
            let dir = std::env::var(ENV_DATA_DIR).unwrap_or_else(|_| "./data".into());
            tracing::info!(dir = %dir, "remote backend not configured, using local fallback store");

            let backend = match LocalBackend::open(dir) {
                Ok(backend) => backend,
                Err(err) => {
                    tracing::error!(error = %err, "failed to open the local fallback store");
                    std::process::exit(1);
                }
            };
            if let Err(err) = backend.ensure_seeded() {
                tracing::error!(error = %err, "failed to seed the local fallback store");
                std::process::exit(1);
            }
            run(Gateway::new(backend)).await;
        }
    }

    tracing::info!("Panorama console stopped.");
}

/// The read path degrades to empty collections: a fetch failure has
/// already been logged by the gateway, and an empty dashboard beats a
/// dead console.
async fn run<B: Backend>(gateway: Gateway<B>) {
    let projects = gateway.fetch_projects().await.unwrap_or_default();
    let customers = gateway.fetch_customers().await.unwrap_or_default();
    let employees = gateway.fetch_employees().await.unwrap_or_default();

    let stats = DashboardStats::compute(&projects);
    tracing::info!(
        total_projects = stats.total_projects,
        total_value = stats.total_value,
        customers = customers.len(),
        employees = employees.len(),
        "Dashboard ready"
    );
    for slice in &stats.status_distribution {
        tracing::info!(status = %slice.name, count = slice.count, "Status distribution");
    }
    for slice in &stats.top_customers {
        tracing::info!(
            customer = %slice.name,
            projects = slice.count,
            value = slice.value,
            "Top customer"
        );
    }

    let ai = AiClient::from_env();
    let analysis = ai.portfolio_analysis(&projects).await;
    tracing::info!(analysis = %analysis, "Portfolio analysis");
}
