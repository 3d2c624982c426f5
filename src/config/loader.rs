//! Configuration loader with environment variable expansion
//!
//! Loads configuration from `.ragterm.toml` in the working directory or the
//! user config directory.

use super::types::Config;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Configuration loading error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from various sources
///
/// Priority order:
/// 1. Project-level `.ragterm.toml`
/// 2. User-level `~/.config/ragterm/config.toml`
/// 3. Default configuration
///
/// `RAGTERM_API_URL` overrides the base URL regardless of source.
pub fn load_config(cwd: &Path) -> Result<Config, ConfigError> {
    let project_config = cwd.join(".ragterm.toml");
    if project_config.exists() {
        return load_from_file(&project_config);
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            return load_from_file(&user_config);
        }
    }

    Ok(apply_env_overrides(Config::default()))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ragterm").join("config.toml"))
}

fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&content)?;

    expand_env_vars(&mut config);
    config = apply_env_overrides(config);

    Ok(config)
}

/// Expand ${VAR} patterns in string values
fn expand_env_vars(config: &mut Config) {
    if let Ok(env_regex) = Regex::new(r"\$\{([^}]+)\}") {
        config.api.base_url = expand_string(&config.api.base_url, &env_regex);
    }
}

/// Expand environment variables in a single string
fn expand_string(s: &str, regex: &Regex) -> String {
    regex
        .replace_all(s, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
}

/// Apply environment variable overrides
fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(url) = std::env::var("RAGTERM_API_URL") {
        if !url.is_empty() {
            config.api.base_url = url;
        }
    }
    config
}
