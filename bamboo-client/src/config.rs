//! Client configuration

use crate::{ClientError, ClientResult, ReqwestExecutor};

/// Public API gateway; the company subdomain and API version follow it
pub const DEFAULT_GATEWAY: &str = "https://api.bamboohr.com/api/gateway.php";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the BambooHR API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "https://api.bamboohr.com/api/gateway.php/acme/v1")
    pub base_url: String,

    /// API key, sent as the Basic auth user name
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration for an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create a configuration for a company subdomain on the public gateway
    pub fn for_company(subdomain: &str) -> Self {
        Self::new(format!("{DEFAULT_GATEWAY}/{subdomain}/v1"))
    }

    /// Load configuration from environment variables
    ///
    /// `BAMBOOHR_BASE_URL` wins over `BAMBOOHR_COMPANY`; one of them must be set.
    /// `BAMBOOHR_API_KEY` and `BAMBOOHR_TIMEOUT_SECS` are optional.
    pub fn from_env() -> ClientResult<Self> {
        let base_url = std::env::var("BAMBOOHR_BASE_URL")
            .ok()
            .filter(|s| !s.is_empty());
        let company = std::env::var("BAMBOOHR_COMPANY")
            .ok()
            .filter(|s| !s.is_empty());

        let mut config = match (base_url, company) {
            (Some(url), _) => Self::new(url),
            (None, Some(company)) => Self::for_company(&company),
            (None, None) => {
                return Err(ClientError::Config(
                    "BAMBOOHR_BASE_URL or BAMBOOHR_COMPANY must be set".into(),
                ));
            }
        };

        config.api_key = std::env::var("BAMBOOHR_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        if let Ok(raw) = std::env::var("BAMBOOHR_TIMEOUT_SECS") {
            config.timeout = raw.parse().map_err(|_| {
                ClientError::Config(format!("BAMBOOHR_TIMEOUT_SECS is not a number: {raw}"))
            })?;
        }

        Ok(config)
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create the network executor from this configuration
    pub fn build_executor(&self) -> ClientResult<ReqwestExecutor> {
        ReqwestExecutor::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
