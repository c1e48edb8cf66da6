//! Example data for a fresh fallback store.

use chrono::Utc;

use panorama_core::PanoramaResult;
use panorama_core::models::{
    Customer, Employee, EmployeeRole, EmployeeStatus, Identity, Project, ProjectStatus,
    TeamMember,
};

use super::backend::LocalBackend;
use super::blob::{CUSTOMERS, EMPLOYEES, PROJECTS};

impl LocalBackend {
    /// Seed the store with example data if it has never held projects.
    ///
    /// Called explicitly by the composition root, exactly once, and
    /// only in fallback mode — never as a load-time side effect.
    pub fn ensure_seeded(&self) -> PanoramaResult<()> {
        if self.blobs.exists(PROJECTS) {
            return Ok(());
        }

        let customers = vec![
            Customer {
                id: Identity::LocalPending("c1".into()),
                name: "Acme Corp".into(),
                address: "123 Tech Blvd".into(),
                contact_person: Some("John Doe".into()),
                phone: None,
                email: None,
            },
            Customer {
                id: Identity::LocalPending("c2".into()),
                name: "Global Industries".into(),
                address: "456 Biz Way".into(),
                contact_person: Some("Jane Smith".into()),
                phone: None,
                email: None,
            },
        ];

        let employees = vec![
            Employee {
                id: Identity::LocalPending("e1".into()),
                name: "Alice PM".into(),
                role: EmployeeRole::Pm,
                status: EmployeeStatus::Active,
                email: None,
                phone: None,
            },
            Employee {
                id: Identity::LocalPending("e2".into()),
                name: "Bob Sales".into(),
                role: EmployeeRole::Sales,
                status: EmployeeStatus::Active,
                email: None,
                phone: None,
            },
            Employee {
                id: Identity::LocalPending("e3".into()),
                name: "Charlie Tech".into(),
                role: EmployeeRole::Engineer,
                status: EmployeeStatus::Active,
                email: None,
                phone: None,
            },
        ];

        let projects = vec![Project {
            id: Identity::LocalPending("p1".into()),
            name: "ERP Migration 2024".into(),
            customer_id: "c1".into(),
            customer_name: "Acme Corp".into(),
            location: "Jakarta".into(),
            start_date: "2024-01-15".into(),
            end_date: None,
            status: ProjectStatus::OnProgress,
            value: 150_000_000.0,
            project_type: "Software".into(),
            description: "Migrating legacy ERP to Cloud.".into(),
            notes: "Waiting for final data validation from client side.".into(),
            team: vec![
                TeamMember {
                    role: EmployeeRole::Pm,
                    name: "Alice PM".into(),
                    employee_id: Some("e1".into()),
                },
                TeamMember {
                    role: EmployeeRole::Engineer,
                    name: "Charlie Tech".into(),
                    employee_id: Some("e3".into()),
                },
            ],
            updated_at: Utc::now(),
        }];

        self.blobs.write_vec(CUSTOMERS, &customers)?;
        self.blobs.write_vec(EMPLOYEES, &employees)?;
        self.blobs.write_vec(PROJECTS, &projects)?;

        Ok(())
    }
}
