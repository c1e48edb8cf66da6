//! The storage gateway: one CRUD surface over whichever backend the
//! composition root injected.
//!
//! The gateway owns persistence bookkeeping the backends do not:
//! `updated_at` is refreshed on every save regardless of the caller's
//! value, saves are classified CREATE vs UPDATE from the entity's
//! identity before dispatch, and audit records are appended
//! best-effort — a logging failure is warned about and swallowed,
//! never failing the operation it describes.

use chrono::Utc;
use tracing::{error, warn};

use panorama_core::PanoramaResult;
use panorama_core::models::{
    ActivityAction, Customer, Employee, Identity, NewActivity, Project, Session,
};
use panorama_core::store::Backend;

pub struct Gateway<B: Backend> {
    backend: B,
}

impl<B: Backend> Gateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Append an audit record for the current user. Skipped when no
    /// session exists; failures are swallowed.
    async fn log_activity(&self, action: ActivityAction, details: String) {
        let session = match self.backend.session().await {
            Ok(Some(session)) => session,
            _ => return,
        };

        let entry = NewActivity {
            user_email: session.email,
            action,
            details,
        };
        if let Err(err) = self.backend.record(entry).await {
            warn!(error = %err, action = action.as_str(), "failed to record activity");
        }
    }

    // -------------------------------------------------------------------
    // Projects
    // -------------------------------------------------------------------

    pub async fn fetch_projects(&self) -> PanoramaResult<Vec<Project>> {
        self.backend
            .fetch_projects()
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch projects"))
    }

    pub async fn save_project(&self, mut project: Project) -> PanoramaResult<Project> {
        project.updated_at = Utc::now();

        let action = if project.id.is_persisted() {
            ActivityAction::UpdateProject
        } else {
            ActivityAction::CreateProject
        };

        let saved = self
            .backend
            .save_project(project)
            .await
            .inspect_err(|err| error!(error = %err, "failed to save project"))?;

        self.log_activity(action, format!("Project: {}", saved.name))
            .await;
        Ok(saved)
    }

    pub async fn delete_project(&self, id: &Identity) -> PanoramaResult<()> {
        self.backend
            .delete_project(id)
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete project"))?;

        let key = id.key().unwrap_or_default();
        self.log_activity(ActivityAction::DeleteProject, format!("Project ID: {key}"))
            .await;
        Ok(())
    }

    // -------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------

    pub async fn fetch_customers(&self) -> PanoramaResult<Vec<Customer>> {
        self.backend
            .fetch_customers()
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch customers"))
    }

    pub async fn save_customer(&self, customer: Customer) -> PanoramaResult<Customer> {
        let saved = self
            .backend
            .save_customer(customer)
            .await
            .inspect_err(|err| error!(error = %err, "failed to save customer"))?;

        self.log_activity(
            ActivityAction::UpdateCustomer,
            format!("Customer: {}", saved.name),
        )
        .await;
        Ok(saved)
    }

    /// Never cascades: projects referencing the customer keep their
    /// (now dangling) `customer_id` and denormalized name.
    pub async fn delete_customer(&self, id: &Identity) -> PanoramaResult<()> {
        self.backend
            .delete_customer(id)
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete customer"))
    }

    // -------------------------------------------------------------------
    // Employees
    // -------------------------------------------------------------------

    pub async fn fetch_employees(&self) -> PanoramaResult<Vec<Employee>> {
        self.backend
            .fetch_employees()
            .await
            .inspect_err(|err| error!(error = %err, "failed to fetch employees"))
    }

    pub async fn save_employee(&self, employee: Employee) -> PanoramaResult<Employee> {
        self.backend
            .save_employee(employee)
            .await
            .inspect_err(|err| error!(error = %err, "failed to save employee"))
    }

    pub async fn delete_employee(&self, id: &Identity) -> PanoramaResult<()> {
        self.backend
            .delete_employee(id)
            .await
            .inspect_err(|err| error!(error = %err, "failed to delete employee"))
    }

    // -------------------------------------------------------------------
    // Authentication — failures propagate to the caller
    // -------------------------------------------------------------------

    pub async fn sign_in(&self, email: &str, password: &str) -> PanoramaResult<Session> {
        let session = self.backend.sign_in(email, password).await?;
        self.log_activity(ActivityAction::Login, "User signed in successfully".into())
            .await;
        Ok(session)
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> PanoramaResult<()> {
        self.backend.sign_up(email, password).await
    }

    pub async fn sign_out(&self) -> PanoramaResult<()> {
        // Recorded before invalidation: the audit write needs the
        // session that is about to go away.
        self.log_activity(ActivityAction::Logout, "User signed out".into())
            .await;
        self.backend.sign_out().await
    }

    pub async fn session(&self) -> PanoramaResult<Option<Session>> {
        self.backend.session().await
    }
}
