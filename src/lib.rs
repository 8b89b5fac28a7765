pub mod api;
pub mod cli;
pub mod config;
pub mod models;

pub use api::{ApiError, TropyClient};
pub use config::Config;
