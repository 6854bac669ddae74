//! Client configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HESHIMA_API_BASE_URL` | `http://localhost:8080` |
//! | `HESHIMA_REQUEST_TIMEOUT_SECS` | `10` |
//! | `HESHIMA_ADMIN_USERNAME` / `HESHIMA_ADMIN_PASSWORD` | unset (admin list unavailable) |
//! | `HESHIMA_LOCALE` | `en_US` |

use std::env;
use std::fmt;
use std::time::Duration;

use chrono::Locale;
use heshima_core::admin::parse_locale;
use tracing::debug;
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Admin credential pair for `GET /api/inquiries`.
///
/// Provisioned outside this client; `Debug` never prints the password.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        AdminCredentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Fully-qualified API base, always ending in `/`.
    pub base_url: Url,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Admin credentials; `None` leaves the admin list unavailable.
    pub admin: Option<AdminCredentials>,

    /// Locale for admin timestamps.
    pub locale: Locale,
}

impl ClientConfig {
    /// Creates a config for `base_url` with default timeout and locale.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(ClientConfig {
            base_url: parse_base_url(base_url)?,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            admin: None,
            locale: heshima_core::DEFAULT_LOCALE,
        })
    }

    pub fn with_admin(mut self, credentials: AdminCredentials) -> Self {
        self.admin = Some(credentials);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("HESHIMA_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = match lookup("HESHIMA_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue("HESHIMA_REQUEST_TIMEOUT_SECS".to_string()))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let admin = match (lookup("HESHIMA_ADMIN_USERNAME"), lookup("HESHIMA_ADMIN_PASSWORD")) {
            (Some(username), Some(password)) => Some(AdminCredentials::new(username, password)),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingRequired("HESHIMA_ADMIN_PASSWORD".to_string()))
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingRequired("HESHIMA_ADMIN_USERNAME".to_string()))
            }
        };

        let locale = match lookup("HESHIMA_LOCALE") {
            Some(name) => parse_locale(&name)
                .ok_or_else(|| ConfigError::InvalidValue("HESHIMA_LOCALE".to_string()))?,
            None => heshima_core::DEFAULT_LOCALE,
        };

        let config = ClientConfig {
            base_url: parse_base_url(&base_url)?,
            request_timeout: Duration::from_secs(timeout_secs),
            admin,
            locale,
        };

        debug!(
            base_url = %config.base_url,
            timeout_secs,
            admin_configured = config.admin.is_some(),
            "Client configuration loaded"
        );
        Ok(config)
    }
}

/// Parses and normalises the API base so relative joins keep its path.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https".to_string()));
    }
    if url.cannot_be_a_base() || url.host().is_none() {
        return Err(invalid("must include a host".to_string()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
