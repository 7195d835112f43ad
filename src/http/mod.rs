//! Blocking HTTP client and the transport error it reports.

mod client;
mod error;

pub use client::{GITHUB_JSON, HttpClient};
pub use error::TransportError;
