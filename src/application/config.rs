use crate::constants::{
    DEFAULT_APP_ID_HEADER, DEFAULT_CMS_BASE_URL, DEFAULT_CONNECT_BASE_URL,
    DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SECRET_HEADER,
};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_string_or};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Connection settings for one PAM back-end
pub struct ConnectorConfig {
    /// Base URL every request path is appended to
    pub base_url: String,
    /// Header carrying the application identifier
    pub app_id_header: String,
    /// Header carrying the application secret
    pub secret_header: String,
    /// Application identifier
    pub app_id: String,
    /// Application secret, never serialized
    #[serde(skip_serializing, default)]
    pub app_secret: String,
    /// Per-request timeout in seconds
    pub timeout: u64,
}

impl ConnectorConfig {
    /// Creates a connector with the default header names and timeout
    pub fn new(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            app_id_header: DEFAULT_APP_ID_HEADER.to_string(),
            secret_header: DEFAULT_SECRET_HEADER.to_string(),
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            timeout: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Overrides the credential header names
    pub fn with_headers(
        mut self,
        app_id_header: impl Into<String>,
        secret_header: impl Into<String>,
    ) -> Self {
        self.app_id_header = app_id_header.into();
        self.secret_header = secret_header.into();
        self
    }

    /// Overrides the timeout, in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout = timeout_secs;
        self
    }

    /// Timeout applied to each request
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
/// Logger settings, fixed when a logger is built
pub struct LoggerConfig {
    /// Emit debug lines
    pub debug: bool,
    /// Use the timestamped, request-annotated output format
    pub contextual: bool,
}

impl LoggerConfig {
    /// Reads the `DEBUG` toggle (case-insensitive `true`) once
    pub fn from_env() -> Self {
        Self {
            debug: get_env_flag("DEBUG"),
            contextual: false,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the PAM client
pub struct Config {
    /// Tracking, recommendation and contact back-end
    pub connect: ConnectorConfig,
    /// Segment, campaign and message administration back-end
    pub cms: ConnectorConfig,
    /// Logger settings
    pub logger: LoggerConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from environment variables, loading `.env` first
    ///
    /// cms credentials fall back to the connect ones when unset.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let app_id = get_env_or_default("PAM_CONNECT_APP_ID", String::new());
        let app_secret = get_env_or_default("PAM_CONNECT_APP_SECRET", String::new());
        if app_id.is_empty() {
            error!("PAM_CONNECT_APP_ID not found in environment variables or .env file");
        }
        if app_secret.is_empty() {
            error!("PAM_CONNECT_APP_SECRET not found in environment variables or .env file");
        }

        let app_id_header = get_env_string_or("PAM_APP_ID_HEADER", DEFAULT_APP_ID_HEADER);
        let secret_header = get_env_string_or("PAM_SECRET_HEADER", DEFAULT_SECRET_HEADER);
        let timeout = get_env_or_default("PAM_REQUEST_TIMEOUT", DEFAULT_REQUEST_TIMEOUT_SECS);

        let connect = ConnectorConfig::new(
            get_env_string_or("PAM_CONNECT_BASE_URL", DEFAULT_CONNECT_BASE_URL),
            app_id.clone(),
            app_secret.clone(),
        )
        .with_headers(app_id_header.clone(), secret_header.clone())
        .with_timeout(timeout);

        let cms = ConnectorConfig::new(
            get_env_string_or("PAM_CMS_BASE_URL", DEFAULT_CMS_BASE_URL),
            get_env_string_or("PAM_CMS_APP_ID", &app_id),
            get_env_string_or("PAM_CMS_APP_SECRET", &app_secret),
        )
        .with_headers(app_id_header, secret_header)
        .with_timeout(timeout);

        Config {
            connect,
            cms,
            logger: LoggerConfig::from_env(),
        }
    }

    /// Both back-ends on one base URL with the same credentials
    pub fn single(
        base_url: impl Into<String>,
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Self {
        let connector = ConnectorConfig::new(base_url, app_id, app_secret);
        Config {
            connect: connector.clone(),
            cms: connector,
            logger: LoggerConfig::from_env(),
        }
    }
}
