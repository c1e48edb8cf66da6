//! AI summarization for the Panorama console.
//!
//! A thin client over the Gemini `generateContent` REST API. Every
//! entry point returns displayable text: when the key is missing or
//! the request fails, the caller gets a placeholder sentence instead
//! of an error.

mod client;

pub use client::{AiClient, ENV_AI_KEY};
