/// Default base URL of the jobs API (local development backend).
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/jobs";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the jobs collection, without a trailing slash.
    pub api_url: String,
}

impl ClientConfig {
    /// Build a configuration for an explicit base URL.
    ///
    /// Surrounding whitespace and trailing slashes are stripped so paths
    /// can be appended uniformly.
    pub fn new(api_url: impl AsRef<str>) -> Self {
        Self {
            api_url: api_url.as_ref().trim().trim_end_matches('/').to_string(),
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                           |
    /// |----------------|-----------------------------------|
    /// | `JOBS_API_URL` | `http://localhost:5000/api/jobs`  |
    pub fn from_env() -> Self {
        let api_url = std::env::var("JOBS_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Self::new(api_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
