//! Audit trail model.

use serde::{Deserialize, Serialize};

/// Action tag of an audit record. Deletes of customers and employees
/// are deliberately not audited; neither is any employee save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityAction {
    Login,
    Logout,
    CreateProject,
    UpdateProject,
    DeleteProject,
    UpdateCustomer,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::Login => "LOGIN",
            ActivityAction::Logout => "LOGOUT",
            ActivityAction::CreateProject => "CREATE_PROJECT",
            ActivityAction::UpdateProject => "UPDATE_PROJECT",
            ActivityAction::DeleteProject => "DELETE_PROJECT",
            ActivityAction::UpdateCustomer => "UPDATE_CUSTOMER",
        }
    }
}

/// Input for one append-only audit record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActivity {
    pub user_email: String,
    pub action: ActivityAction,
    pub details: String,
}
