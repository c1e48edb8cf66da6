//! Local fallback implementations of the core store traits.
//!
//! Saves match by exact identity equality: replace on a hit, append on
//! a miss. No auto-id generation exists on this path — callers supply
//! a locally-unique id when creating, as the seed data does. This
//! asymmetry with the remote path is deliberate and documented.

use std::path::PathBuf;

use panorama_core::error::{PanoramaError, PanoramaResult};
use panorama_core::models::{Customer, Employee, Identity, NewActivity, Project, Session};
use panorama_core::store::{
    ActivityLog, AuthStore, CustomerStore, EmployeeStore, ProjectStore,
};

use super::blob::{BlobStore, CUSTOMERS, EMPLOYEES, PROJECTS, SESSION};
use crate::error::DbError;

/// The single accepted fallback credential pair.
pub const FALLBACK_EMAIL: &str = "admin@company.com";
pub const FALLBACK_PASSWORD: &str = "admin";

/// The local fallback backend.
#[derive(Debug, Clone)]
pub struct LocalBackend {
    pub(crate) blobs: BlobStore,
}

impl LocalBackend {
    /// Open (creating if needed) the blob directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, DbError> {
        Ok(Self {
            blobs: BlobStore::open(dir)?,
        })
    }
}

impl ProjectStore for LocalBackend {
    async fn fetch_projects(&self) -> PanoramaResult<Vec<Project>> {
        // Persisted sequence verbatim; no implicit sort.
        Ok(self.blobs.read_vec(PROJECTS)?)
    }

    async fn save_project(&self, project: Project) -> PanoramaResult<Project> {
        let mut projects: Vec<Project> = self.blobs.read_vec(PROJECTS)?;
        match projects.iter_mut().find(|p| p.id == project.id) {
            Some(existing) => *existing = project.clone(),
            None => projects.push(project.clone()),
        }
        self.blobs.write_vec(PROJECTS, &projects)?;
        Ok(project)
    }

    async fn delete_project(&self, id: &Identity) -> PanoramaResult<()> {
        let mut projects: Vec<Project> = self.blobs.read_vec(PROJECTS)?;
        projects.retain(|p| p.id != *id);
        self.blobs.write_vec(PROJECTS, &projects)?;
        Ok(())
    }
}

impl CustomerStore for LocalBackend {
    async fn fetch_customers(&self) -> PanoramaResult<Vec<Customer>> {
        Ok(self.blobs.read_vec(CUSTOMERS)?)
    }

    async fn save_customer(&self, customer: Customer) -> PanoramaResult<Customer> {
        let mut customers: Vec<Customer> = self.blobs.read_vec(CUSTOMERS)?;
        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer.clone(),
            None => customers.push(customer.clone()),
        }
        self.blobs.write_vec(CUSTOMERS, &customers)?;
        Ok(customer)
    }

    async fn delete_customer(&self, id: &Identity) -> PanoramaResult<()> {
        let mut customers: Vec<Customer> = self.blobs.read_vec(CUSTOMERS)?;
        customers.retain(|c| c.id != *id);
        self.blobs.write_vec(CUSTOMERS, &customers)?;
        Ok(())
    }
}

impl EmployeeStore for LocalBackend {
    async fn fetch_employees(&self) -> PanoramaResult<Vec<Employee>> {
        Ok(self.blobs.read_vec(EMPLOYEES)?)
    }

    async fn save_employee(&self, employee: Employee) -> PanoramaResult<Employee> {
        let mut employees: Vec<Employee> = self.blobs.read_vec(EMPLOYEES)?;
        match employees.iter_mut().find(|e| e.id == employee.id) {
            Some(existing) => *existing = employee.clone(),
            None => employees.push(employee.clone()),
        }
        self.blobs.write_vec(EMPLOYEES, &employees)?;
        Ok(employee)
    }

    async fn delete_employee(&self, id: &Identity) -> PanoramaResult<()> {
        let mut employees: Vec<Employee> = self.blobs.read_vec(EMPLOYEES)?;
        employees.retain(|e| e.id != *id);
        self.blobs.write_vec(EMPLOYEES, &employees)?;
        Ok(())
    }
}

impl AuthStore for LocalBackend {
    async fn sign_in(&self, email: &str, password: &str) -> PanoramaResult<Session> {
        if email != FALLBACK_EMAIL || password != FALLBACK_PASSWORD {
            return Err(PanoramaError::InvalidCredentials);
        }

        let session = Session {
            user_id: "local-admin".into(),
            email: email.to_string(),
            access_token: "local-token".into(),
        };
        self.blobs.write_one(SESSION, &session)?;
        Ok(session)
    }

    async fn sign_up(&self, _email: &str, _password: &str) -> PanoramaResult<()> {
        // Known gap: account creation needs the remote backend.
        Err(PanoramaError::Unsupported("sign-up"))
    }

    async fn sign_out(&self) -> PanoramaResult<()> {
        self.blobs.remove(SESSION)?;
        Ok(())
    }

    async fn session(&self) -> PanoramaResult<Option<Session>> {
        Ok(self.blobs.read_one(SESSION)?)
    }
}

impl ActivityLog for LocalBackend {
    async fn record(&self, _entry: NewActivity) -> PanoramaResult<()> {
        // Fallback mode keeps no audit trail.
        Ok(())
    }
}
