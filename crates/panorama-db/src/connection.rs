//! Remote backend connection management.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use tokio::sync::RwLock;
use tracing::info;

use panorama_core::models::Session;

use crate::error::DbError;
use crate::schema::run_migrations;

/// Environment variables gating remote mode. Both must be non-empty;
/// otherwise the console runs against the local fallback store.
pub const ENV_DB_URL: &str = "PANORAMA_DB_URL";
pub const ENV_DB_KEY: &str = "PANORAMA_DB_KEY";

/// Configuration for connecting to the remote SurrealDB backend.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket URL (e.g., `127.0.0.1:8000`).
    pub url: String,
    /// Access key token applied to the connection.
    pub key: String,
    /// SurrealDB namespace.
    pub namespace: String,
    /// SurrealDB database name.
    pub database: String,
    /// Record-access method used for user sign-in and sign-up.
    pub access: String,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: "127.0.0.1:8000".into(),
            key: String::new(),
            namespace: "panorama".into(),
            database: "main".into(),
            access: "account".into(),
        }
    }
}

impl DbConfig {
    /// Read the remote configuration from the environment. Returns
    /// `None` unless both the URL and the access key are present and
    /// non-empty; the caller treats that as fallback mode. This
    /// decision is made once, at process start.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var(ENV_DB_URL).ok().filter(|v| !v.is_empty())?;
        let key = std::env::var(ENV_DB_KEY).ok().filter(|v| !v.is_empty())?;
        let defaults = Self::default();
        Some(Self {
            url,
            key,
            namespace: std::env::var("PANORAMA_DB_NS").unwrap_or(defaults.namespace),
            database: std::env::var("PANORAMA_DB_NAME").unwrap_or(defaults.database),
            access: std::env::var("PANORAMA_DB_ACCESS").unwrap_or(defaults.access),
        })
    }
}

/// The remote storage backend: one SurrealDB connection plus the
/// current signed-in session.
#[derive(Clone)]
pub struct RemoteBackend<C: surrealdb::Connection> {
    pub(crate) db: Surreal<C>,
    pub(crate) config: DbConfig,
    pub(crate) session: Arc<RwLock<Option<Session>>>,
}

impl RemoteBackend<Client> {
    /// Connect to the remote backend, select the configured namespace
    /// and database, apply the access key, and run pending migrations.
    pub async fn connect(config: DbConfig) -> Result<Self, DbError> {
        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "Connecting to remote backend"
        );

        let db = Surreal::new::<Ws>(&config.url).await?;
        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;
        db.authenticate(config.key.clone()).await?;

        run_migrations(&db).await?;

        info!("Remote backend ready");

        Ok(Self {
            db,
            config,
            session: Arc::new(RwLock::new(None)),
        })
    }
}

impl<C: surrealdb::Connection> RemoteBackend<C> {
    /// Wrap an already-connected client. Used by tests running against
    /// an embedded engine.
    pub fn from_client(db: Surreal<C>, config: DbConfig) -> Self {
        Self {
            db,
            config,
            session: Arc::new(RwLock::new(None)),
        }
    }
}
