//! Client for the REST API a running Tropy instance serves locally.

mod client;
mod error;

pub use client::TropyClient;
pub use error::ApiError;
