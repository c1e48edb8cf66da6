//! Project model with embedded team snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::employee::EmployeeRole;
use super::identity::Identity;

/// Project lifecycle status. Unknown strings from external data pass
/// through as [`ProjectStatus::Other`] rather than failing the read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Planning,
    OnProgress,
    Done,
    OnHold,
    Other(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::OnProgress => "On Progress",
            ProjectStatus::Done => "Done",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Planning" => ProjectStatus::Planning,
            "On Progress" => ProjectStatus::OnProgress,
            "Done" => ProjectStatus::Done,
            "On Hold" => ProjectStatus::OnHold,
            _ => ProjectStatus::Other(raw),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Denormalized snapshot of a staff assignment, taken at assignment
/// time. Role and name may drift from the Employee master record
/// afterwards; that drift is historical fidelity, not staleness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub role: EmployeeRole,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: Identity,
    pub name: String,
    /// Owning reference. Not enforced at the storage layer; dangling
    /// references after a customer delete are tolerated.
    #[serde(default)]
    pub customer_id: String,
    /// Denormalized copy for display without a join.
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub status: ProjectStatus,
    /// Monetary value. Non-negative by convention, not enforced.
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    /// Refreshed to "now" by the gateway on every save, regardless of
    /// the caller-supplied value.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_strings_round_trip() {
        for raw in ["Planning", "On Progress", "Done", "On Hold"] {
            let status = ProjectStatus::from(raw.to_string());
            assert_eq!(status.as_str(), raw);
            assert!(!matches!(status, ProjectStatus::Other(_)));
        }
    }

    #[test]
    fn unknown_status_passes_through() {
        let status = ProjectStatus::from("Cancelled".to_string());
        assert_eq!(status, ProjectStatus::Other("Cancelled".into()));
        assert_eq!(status.as_str(), "Cancelled");
    }

    #[test]
    fn project_deserializes_with_missing_optionals() {
        let project: Project = serde_json::from_str(
            r#"{"name":"Bare","status":"Planning","updated_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(project.id, Identity::Unassigned);
        assert_eq!(project.customer_id, "");
        assert!(project.team.is_empty());
        assert_eq!(project.value, 0.0);
        assert_eq!(project.end_date, None);
    }
}
