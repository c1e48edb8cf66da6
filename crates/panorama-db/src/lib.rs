//! Panorama DB — the dual-backend storage layer.
//!
//! This crate provides:
//! - Remote backend connection management ([`DbConfig`],
//!   [`RemoteBackend`]) with schema migrations ([`run_migrations`])
//! - The local fallback store ([`LocalBackend`]) and its explicit
//!   seeding entry point
//! - The storage gateway ([`Gateway`]) wrapping whichever backend the
//!   composition root selected
//! - Error types ([`DbError`])

mod connection;
mod error;
mod gateway;
mod local;
mod mapper;
mod repository;
mod schema;

pub use connection::{DbConfig, ENV_DB_KEY, ENV_DB_URL, RemoteBackend};
pub use error::DbError;
pub use gateway::Gateway;
pub use local::{FALLBACK_EMAIL, FALLBACK_PASSWORD, LocalBackend};
pub use schema::run_migrations;
