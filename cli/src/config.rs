use std::env;

const BASE_URL_ENV: &str = "TODOLIST_BASE_URL";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Host configuration. The only knob is where the remote todo resource
/// lives: `TODOLIST_BASE_URL` if set, a local default otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(&base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
