//! Local fallback store: keyed JSON blobs on disk.

mod backend;
mod blob;
mod seed;

pub use backend::{FALLBACK_EMAIL, FALLBACK_PASSWORD, LocalBackend};
