use anyhow::{anyhow, Result};
use tracing::debug;
use url::Url;

pub const DEFAULT_API_HOST: &str = "localhost";
pub const DEFAULT_API_PORT: &str = "4000";
pub const DEFAULT_LOGIN_PATH: &str = "/api/login";
pub const DEFAULT_PING_PATH: &str = "/api/refresh_session";

/// Where the API lives, fixed for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
    pub api_host: String,
    pub api_port: String,
    pub login_path: String,
    pub ping_path: String,
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            api_port: DEFAULT_API_PORT.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            ping_path: DEFAULT_PING_PATH.to_string(),
        }
    }
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_host: String, api_port: String) -> Self {
        Self {
            api_host,
            api_port,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_paths(mut self, login_path: String, ping_path: String) -> Self {
        self.login_path = login_path;
        self.ping_path = ping_path;
        self
    }

    /// # Errors
    /// Returns an error if host, port and login path do not form a valid URL
    pub fn login_url(&self) -> Result<Url> {
        self.endpoint_url(&self.login_path)
    }

    /// # Errors
    /// Returns an error if host, port and ping path do not form a valid URL
    pub fn ping_url(&self) -> Result<Url> {
        self.endpoint_url(&self.ping_path)
    }

    fn endpoint_url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');

        let endpoint_url = format!("http://{}:{}/{path}", self.api_host, self.api_port);

        let url = Url::parse(&endpoint_url)
            .map_err(|e| anyhow!("Error parsing URL {endpoint_url}: {e}"))?;

        if url.host_str().map_or(true, str::is_empty) {
            return Err(anyhow!("Error parsing URL {endpoint_url}: no host specified"));
        }

        debug!("endpoint URL: {}", url);

        Ok(url)
    }
}
