//! Field mapping between storage rows and domain entities.
//!
//! Write-side `*Record` structs never carry an identity field — the
//! repository decides the record id, so an unassigned entity lets the
//! backend generate one. Read-side `*RowWithId` structs select the id
//! via `meta::id(id) AS record_id`. Conversions are total: missing
//! optional fields default to empty strings or empty sequences, the
//! monetary value coerces from text, and enum strings pass through
//! without membership validation.

use chrono::{DateTime, Utc};
use surrealdb_types::SurrealValue;

use panorama_core::models::{
    Customer, Employee, EmployeeRole, EmployeeStatus, Identity, NewActivity, Project,
    ProjectStatus, TeamMember,
};

// -----------------------------------------------------------------------
// Team member snapshots (embedded in project rows)
// -----------------------------------------------------------------------

#[derive(Debug, Clone, SurrealValue)]
pub(crate) struct TeamMemberRecord {
    pub role: String,
    pub name: String,
    pub employee_id: Option<String>,
}

impl TeamMemberRecord {
    fn from_member(member: &TeamMember) -> Self {
        Self {
            role: member.role.as_str().to_string(),
            name: member.name.clone(),
            employee_id: member.employee_id.clone(),
        }
    }

    fn into_member(self) -> TeamMember {
        TeamMember {
            role: EmployeeRole::from(self.role),
            name: self.name,
            employee_id: self.employee_id,
        }
    }
}

// -----------------------------------------------------------------------
// Projects
// -----------------------------------------------------------------------

/// Storage-side project record, identity omitted.
#[derive(Debug, Clone, SurrealValue)]
pub(crate) struct ProjectRecord {
    pub name: String,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub value: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub team: Option<Vec<TeamMemberRecord>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProjectRecord {
    pub(crate) fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            customer_id: Some(project.customer_id.clone()),
            customer_name: Some(project.customer_name.clone()),
            location: Some(project.location.clone()),
            start_date: Some(project.start_date.clone()),
            end_date: project.end_date.clone(),
            status: Some(project.status.as_str().to_string()),
            value: Some(project.value.to_string()),
            project_type: Some(project.project_type.clone()),
            description: Some(project.description.clone()),
            notes: Some(project.notes.clone()),
            team: Some(project.team.iter().map(TeamMemberRecord::from_member).collect()),
            updated_at: Some(project.updated_at),
        }
    }

    pub(crate) fn into_project(self, id: Identity) -> Project {
        Project {
            id,
            name: self.name,
            customer_id: self.customer_id.unwrap_or_default(),
            customer_name: self.customer_name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            start_date: self.start_date.unwrap_or_default(),
            end_date: self.end_date,
            status: ProjectStatus::from(self.status.unwrap_or_default()),
            // The remote store may hand the monetary value back as text.
            value: self
                .value
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0),
            project_type: self.project_type.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            notes: self.notes.unwrap_or_default(),
            team: self
                .team
                .unwrap_or_default()
                .into_iter()
                .map(TeamMemberRecord::into_member)
                .collect(),
            updated_at: self.updated_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        }
    }
}

/// Project row including the record id via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
pub(crate) struct ProjectRowWithId {
    pub record_id: String,
    pub name: String,
    pub customer_id: Option<String>,
    pub customer_name: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub status: Option<String>,
    pub value: Option<String>,
    pub project_type: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub team: Option<Vec<TeamMemberRecord>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProjectRowWithId {
    pub(crate) fn into_project(self) -> Project {
        let id = Identity::parse(&self.record_id);
        ProjectRecord {
            name: self.name,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            location: self.location,
            start_date: self.start_date,
            end_date: self.end_date,
            status: self.status,
            value: self.value,
            project_type: self.project_type,
            description: self.description,
            notes: self.notes,
            team: self.team,
            updated_at: self.updated_at,
        }
        .into_project(id)
    }
}

// -----------------------------------------------------------------------
// Customers
// -----------------------------------------------------------------------

#[derive(Debug, Clone, SurrealValue)]
pub(crate) struct CustomerRecord {
    pub name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CustomerRecord {
    pub(crate) fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            address: Some(customer.address.clone()),
            contact_person: customer.contact_person.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
        }
    }

    pub(crate) fn into_customer(self, id: Identity) -> Customer {
        Customer {
            id,
            name: self.name,
            address: self.address.unwrap_or_default(),
            contact_person: self.contact_person,
            phone: self.phone,
            email: self.email,
        }
    }
}

#[derive(Debug, SurrealValue)]
pub(crate) struct CustomerRowWithId {
    pub record_id: String,
    pub name: String,
    pub address: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl CustomerRowWithId {
    pub(crate) fn into_customer(self) -> Customer {
        let id = Identity::parse(&self.record_id);
        CustomerRecord {
            name: self.name,
            address: self.address,
            contact_person: self.contact_person,
            phone: self.phone,
            email: self.email,
        }
        .into_customer(id)
    }
}

// -----------------------------------------------------------------------
// Employees
// -----------------------------------------------------------------------

#[derive(Debug, Clone, SurrealValue)]
pub(crate) struct EmployeeRecord {
    pub name: String,
    pub role: Option<String>,
    pub status: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EmployeeRecord {
    pub(crate) fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            role: Some(employee.role.as_str().to_string()),
            status: Some(employee.status.as_str().to_string()),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
        }
    }

    pub(crate) fn into_employee(self, id: Identity) -> Employee {
        Employee {
            id,
            name: self.name,
            role: EmployeeRole::from(self.role.unwrap_or_default()),
            status: EmployeeStatus::from(self.status.unwrap_or_default()),
            email: self.email,
            phone: self.phone,
        }
    }
}

#[derive(Debug, SurrealValue)]
pub(crate) struct EmployeeRowWithId {
    pub record_id: String,
    pub name: String,
    pub role: Option<String>,
    pub status: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl EmployeeRowWithId {
    pub(crate) fn into_employee(self) -> Employee {
        let id = Identity::parse(&self.record_id);
        EmployeeRecord {
            name: self.name,
            role: self.role,
            status: self.status,
            email: self.email,
            phone: self.phone,
        }
        .into_employee(id)
    }
}

// -----------------------------------------------------------------------
// Audit trail
// -----------------------------------------------------------------------

#[derive(Debug, Clone, SurrealValue)]
pub(crate) struct ActivityRecord {
    pub user_email: String,
    pub action: String,
    pub details: String,
}

impl ActivityRecord {
    pub(crate) fn from_activity(entry: &NewActivity) -> Self {
        Self {
            user_email: entry.user_email.clone(),
            action: entry.action.as_str().to_string(),
            details: entry.details.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn sample_project() -> Project {
        Project {
            id: Identity::Persisted(Uuid::new_v4()),
            name: "ERP Migration".into(),
            customer_id: "c1".into(),
            customer_name: "Acme Corp".into(),
            location: "Jakarta".into(),
            start_date: "2024-01-15".into(),
            end_date: Some("2024-12-31".into()),
            status: ProjectStatus::OnProgress,
            value: 150_000_000.0,
            project_type: "Software".into(),
            description: "Cloud migration".into(),
            notes: "Waiting on client".into(),
            team: vec![TeamMember {
                role: EmployeeRole::Pm,
                name: "Alice PM".into(),
                employee_id: Some("e1".into()),
            }],
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn project_round_trips_every_populated_field() {
        let project = sample_project();
        let record = ProjectRecord::from_project(&project);
        let back = record.into_project(project.id.clone());
        assert_eq!(back, project);
    }

    #[test]
    fn absent_optionals_default_on_read() {
        let record = ProjectRecord {
            name: "Bare".into(),
            customer_id: None,
            customer_name: None,
            location: None,
            start_date: None,
            end_date: None,
            status: None,
            value: None,
            project_type: None,
            description: None,
            notes: None,
            team: None,
            updated_at: None,
        };
        let project = record.into_project(Identity::Unassigned);
        assert_eq!(project.customer_id, "");
        assert_eq!(project.value, 0.0);
        assert!(project.team.is_empty());
        assert_eq!(project.end_date, None);
    }

    #[test]
    fn value_coerces_from_text() {
        let mut record = ProjectRecord::from_project(&sample_project());
        record.value = Some("150000000".into());
        let project = record.into_project(Identity::Unassigned);
        assert_eq!(project.value, 150_000_000.0);
    }

    #[test]
    fn unknown_status_survives_the_round_trip() {
        let mut record = ProjectRecord::from_project(&sample_project());
        record.status = Some("Cancelled".into());
        let project = record.into_project(Identity::Unassigned);
        assert_eq!(project.status, ProjectStatus::Other("Cancelled".into()));
        let again = ProjectRecord::from_project(&project);
        assert_eq!(again.status.as_deref(), Some("Cancelled"));
    }

    #[test]
    fn customer_round_trips_with_defaults() {
        let customer = Customer {
            id: Identity::LocalPending("c1".into()),
            name: "Acme Corp".into(),
            address: "123 Tech Blvd".into(),
            contact_person: Some("John Doe".into()),
            phone: None,
            email: None,
        };
        let back = CustomerRecord::from_customer(&customer).into_customer(customer.id.clone());
        assert_eq!(back, customer);

        let bare = CustomerRecord {
            name: "Bare".into(),
            address: None,
            contact_person: None,
            phone: None,
            email: None,
        }
        .into_customer(Identity::Unassigned);
        assert_eq!(bare.address, "");
        assert_eq!(bare.contact_person, None);
    }

    #[test]
    fn employee_round_trips() {
        let employee = Employee {
            id: Identity::Persisted(Uuid::new_v4()),
            name: "Alice PM".into(),
            role: EmployeeRole::Pm,
            status: EmployeeStatus::Active,
            email: Some("alice@example.com".into()),
            phone: None,
        };
        let back = EmployeeRecord::from_employee(&employee).into_employee(employee.id.clone());
        assert_eq!(back, employee);
    }
}
