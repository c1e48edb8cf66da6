//! Remote authentication, delegated to SurrealDB record access.
//!
//! Unlike the data operations, authentication failures propagate to
//! the caller — a failed sign-in needs a visible message, not a
//! degraded default.

use surrealdb::Connection;
use surrealdb::opt::auth::Record;
use surrealdb_types::SurrealValue;
use tracing::info;

use panorama_core::PanoramaResult;
use panorama_core::models::Session;
use panorama_core::store::AuthStore;

use crate::connection::RemoteBackend;
use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct Credentials {
    email: String,
    password: String,
}

#[derive(Debug, SurrealValue)]
struct AuthRow {
    record_id: String,
}

impl<C: Connection> AuthStore for RemoteBackend<C> {
    async fn sign_in(&self, email: &str, password: &str) -> PanoramaResult<Session> {
        let token = self
            .db
            .signin(Record {
                namespace: self.config.namespace.clone(),
                database: self.config.database.clone(),
                access: self.config.access.clone(),
                params: Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            })
            .await
            .map_err(DbError::from)?;

        // Resolve the signed-in record id; fall back to the email if
        // the lookup fails.
        let user_id = match self
            .db
            .query("SELECT meta::id(id) AS record_id FROM $auth")
            .await
        {
            Ok(mut result) => result
                .take::<Vec<AuthRow>>(0)
                .ok()
                .and_then(|rows| rows.into_iter().next())
                .map(|row| row.record_id)
                .unwrap_or_else(|| email.to_string()),
            Err(_) => email.to_string(),
        };

        let session = Session {
            user_id,
            email: email.to_string(),
            access_token: token.access.into_insecure_token(),
        };

        *self.session.write().await = Some(session.clone());
        info!(email = %session.email, "remote sign-in succeeded");

        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str) -> PanoramaResult<()> {
        self.db
            .signup(Record {
                namespace: self.config.namespace.clone(),
                database: self.config.database.clone(),
                access: self.config.access.clone(),
                params: Credentials {
                    email: email.to_string(),
                    password: password.to_string(),
                },
            })
            .await
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn sign_out(&self) -> PanoramaResult<()> {
        self.db.invalidate().await.map_err(DbError::from)?;
        *self.session.write().await = None;
        Ok(())
    }

    async fn session(&self) -> PanoramaResult<Option<Session>> {
        Ok(self.session.read().await.clone())
    }
}
