//! Employee master-data model.

use serde::{Deserialize, Serialize};

use super::identity::Identity;

/// Closed role set plus a pass-through variant for values arriving from
/// external data. Display layers switching on this must keep a default
/// arm rather than assume exhaustiveness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeRole {
    Pm,
    Sales,
    Presales,
    Engineer,
    Other(String),
}

impl EmployeeRole {
    pub fn as_str(&self) -> &str {
        match self {
            EmployeeRole::Pm => "PM",
            EmployeeRole::Sales => "Sales",
            EmployeeRole::Presales => "Presales",
            EmployeeRole::Engineer => "Engineer",
            EmployeeRole::Other(raw) => raw,
        }
    }
}

impl From<String> for EmployeeRole {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PM" => EmployeeRole::Pm,
            "Sales" => EmployeeRole::Sales,
            "Presales" => EmployeeRole::Presales,
            "Engineer" => EmployeeRole::Engineer,
            _ => EmployeeRole::Other(raw),
        }
    }
}

impl From<EmployeeRole> for String {
    fn from(role: EmployeeRole) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EmployeeStatus {
    Active,
    Inactive,
    Other(String),
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::Inactive => "Inactive",
            EmployeeStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for EmployeeStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Active" => EmployeeStatus::Active,
            "Inactive" => EmployeeStatus::Inactive,
            _ => EmployeeStatus::Other(raw),
        }
    }
}

impl From<EmployeeStatus> for String {
    fn from(status: EmployeeStatus) -> Self {
        status.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Identity,
    pub name: String,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_round_trip() {
        for raw in ["PM", "Sales", "Presales", "Engineer"] {
            let role = EmployeeRole::from(raw.to_string());
            assert_eq!(role.as_str(), raw);
            assert!(!matches!(role, EmployeeRole::Other(_)));
        }
    }

    #[test]
    fn unknown_role_passes_through_uninterpreted() {
        let role = EmployeeRole::from("Architect".to_string());
        assert_eq!(role, EmployeeRole::Other("Architect".into()));
        assert_eq!(String::from(role), "Architect");
    }
}
