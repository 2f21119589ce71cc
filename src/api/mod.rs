//! HTTP adapter for the RAG email backend.
//!
//! Each operation issues exactly one network call and either returns a
//! typed payload or fails with a normalized [`ApiError`]. No retries,
//! no client-side timeouts.

mod client;
mod error;
pub mod types;

pub use client::ApiClient;
pub use error::ApiError;
