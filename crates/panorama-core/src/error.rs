//! Error types for the Panorama system.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanoramaError {
    /// Surfaced verbatim to the sign-in caller for user display.
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("backend error: {0}")]
    Backend(String),

    #[error("local storage error: {0}")]
    Storage(String),

    #[error("unsupported in fallback mode: {0}")]
    Unsupported(&'static str),
}

pub type PanoramaResult<T> = Result<T, PanoramaError>;
