//! Signed-in session state.

use serde::{Deserialize, Serialize};

/// A signed-in session. The only states are signed-out (no session) and
/// signed-in (a session exists); token refresh, if any, belongs to the
/// remote backend and is invisible here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub access_token: String,
}
