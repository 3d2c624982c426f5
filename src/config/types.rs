//! Configuration types

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the document-QA backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}
