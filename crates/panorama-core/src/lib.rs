//! Panorama Core — domain models, store contracts, and portfolio
//! statistics shared across all crates.

pub mod error;
pub mod models;
pub mod stats;
pub mod store;

pub use error::{PanoramaError, PanoramaResult};
