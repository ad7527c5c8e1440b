use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub app: AppConfig,
}

/// Where remote tasks come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning a JSON array of objects with a `title` field.
    #[serde(default = "default_url")]
    pub url: String,
    /// Number of items requested (sent as `_limit`).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Behaviour of the terminal front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Fetch remote tasks as soon as the app starts.
    #[serde(default = "default_fetch_on_start")]
    pub fetch_on_start: bool,
}

fn default_url() -> String {
    "https://jsonplaceholder.typicode.com/todos".to_string()
}

fn default_limit() -> u32 {
    5
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_fetch_on_start() -> bool {
    true
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            limit: default_limit(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch_on_start: default_fetch_on_start(),
        }
    }
}
