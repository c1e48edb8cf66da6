//! Store trait definitions for data access abstraction.
//!
//! All operations are async and return structured results; callers that
//! want the degrade-to-empty behavior discard the failure themselves.
//! Exactly two implementations exist — the remote SurrealDB backend and
//! the local fallback store — and the composition root injects one of
//! them for the lifetime of the process. No runtime backend switching.

use crate::error::PanoramaResult;
use crate::models::{Customer, Employee, Identity, NewActivity, Project, Session};

pub trait ProjectStore: Send + Sync {
    /// Remote path: sorted by `updated_at` descending. Fallback path:
    /// the persisted sequence verbatim — consumers must not assume
    /// ordering.
    fn fetch_projects(&self) -> impl Future<Output = PanoramaResult<Vec<Project>>> + Send;

    /// Upsert. Returns the saved project carrying its assigned
    /// identity.
    fn save_project(&self, project: Project) -> impl Future<Output = PanoramaResult<Project>> + Send;

    /// Idempotent: deleting an absent id is a no-op, not an error.
    fn delete_project(&self, id: &Identity) -> impl Future<Output = PanoramaResult<()>> + Send;
}

pub trait CustomerStore: Send + Sync {
    /// Remote path: sorted by name. Fallback path: unsorted.
    fn fetch_customers(&self) -> impl Future<Output = PanoramaResult<Vec<Customer>>> + Send;

    fn save_customer(
        &self,
        customer: Customer,
    ) -> impl Future<Output = PanoramaResult<Customer>> + Send;

    /// Never cascades to projects referencing the customer.
    fn delete_customer(&self, id: &Identity) -> impl Future<Output = PanoramaResult<()>> + Send;
}

pub trait EmployeeStore: Send + Sync {
    /// Remote path: sorted by name. Fallback path: unsorted.
    fn fetch_employees(&self) -> impl Future<Output = PanoramaResult<Vec<Employee>>> + Send;

    fn save_employee(
        &self,
        employee: Employee,
    ) -> impl Future<Output = PanoramaResult<Employee>> + Send;

    /// Historical project team snapshots are left untouched.
    fn delete_employee(&self, id: &Identity) -> impl Future<Output = PanoramaResult<()>> + Send;
}

pub trait AuthStore: Send + Sync {
    /// Failures propagate verbatim — the caller shows the message.
    fn sign_in(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = PanoramaResult<Session>> + Send;

    /// Remote-only; the fallback store reports it as unsupported.
    fn sign_up(&self, email: &str, password: &str)
    -> impl Future<Output = PanoramaResult<()>> + Send;

    fn sign_out(&self) -> impl Future<Output = PanoramaResult<()>> + Send;

    /// Safe to call before any sign-in: returns `None`, not an error.
    fn session(&self) -> impl Future<Output = PanoramaResult<Option<Session>>> + Send;
}

pub trait ActivityLog: Send + Sync {
    /// Append one audit record. The fallback store keeps no audit
    /// trail and implements this as a no-op.
    fn record(&self, entry: NewActivity) -> impl Future<Output = PanoramaResult<()>> + Send;
}

/// The full backend contract the gateway is composed over.
pub trait Backend:
    ProjectStore + CustomerStore + EmployeeStore + AuthStore + ActivityLog
{
}

impl<T> Backend for T where
    T: ProjectStore + CustomerStore + EmployeeStore + AuthStore + ActivityLog
{
}
