//! API client configuration

use serde::{Deserialize, Serialize};

/// Production backend used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://api.trivesha.com/api";

/// Route the browser is sent to after a 401
pub const LOGIN_ROUTE: &str = "/admin/login";

/// Configuration for [`ApiClient`](crate::ApiClient)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL; endpoint paths are appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Keep and resend cookies set by the backend
    #[serde(default = "default_with_credentials")]
    pub with_credentials: bool,

    /// Route handed to the navigator after a 401
    #[serde(default = "default_login_route")]
    pub login_route: String,

    /// Endpoint paths whose 401 responses do not trigger the global logout
    #[serde(default)]
    pub unauthorized_exempt_paths: Vec<String>,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_connect_timeout_secs() -> u64 {
    10
}

const fn default_with_credentials() -> bool {
    true
}

fn default_login_route() -> String {
    LOGIN_ROUTE.to_string()
}

fn default_user_agent() -> String {
    format!("trivesha-api-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            with_credentials: default_with_credentials(),
            login_route: default_login_route(),
            unauthorized_exempt_paths: Vec::new(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Create a configuration pointing at the given base URL
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing against a mock server
    #[must_use]
    pub fn for_testing(base_url: impl Into<String>) -> Self {
        Self {
            timeout_secs: 5,
            connect_timeout_secs: 2,
            ..Self::with_base_url(base_url)
        }
    }

    /// Exempt a path from the global 401 logout
    #[must_use]
    pub fn exempt_from_unauthorized(mut self, path: impl Into<String>) -> Self {
        self.unauthorized_exempt_paths.push(path.into());
        self
    }

    /// Whether a 401 on this path triggers the global logout
    #[must_use]
    pub fn triggers_logout(&self, path: &str) -> bool {
        !self.unauthorized_exempt_paths.iter().any(|p| p == path)
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(format!(
                "base_url must start with http:// or https://, got {}",
                self.base_url
            ));
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.connect_timeout_secs == 0 {
            return Err("connect_timeout_secs must be greater than 0".to_string());
        }

        if !self.login_route.starts_with('/') {
            return Err("login_route must be an absolute path".to_string());
        }

        Ok(())
    }
}
