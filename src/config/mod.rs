//! Configuration
//!
//! Defines the structure of `.ragterm.toml` and its loader.

mod loader;
mod types;

pub use loader::{load_config, ConfigError};
pub use types::{ApiConfig, Config};
