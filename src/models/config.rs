//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::middleware::DEFAULT_EXCLUDED_PATHS;

pub const DEFAULT_USERS_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

fn default_users_api_url() -> String {
    DEFAULT_USERS_API_URL.to_string()
}

fn default_excluded_paths() -> Vec<String> {
    DEFAULT_EXCLUDED_PATHS.map(String::from).to_vec()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    #[serde(default = "default_users_api_url")]
    pub users_api_url: String,
    /// Path prefixes served without a locale prefix.
    #[serde(default = "default_excluded_paths")]
    pub excluded_paths: Vec<String>,
    /// Timeout for calls to the users API; unset keeps the client default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}
