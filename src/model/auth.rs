use crate::application::config::ConnectorConfig;
use crate::error::AppError;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// Credential headers injected into every outgoing request
///
/// A pair is only sent when both its header name and its value are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pairs: Vec<(String, String)>,
}

impl Credentials {
    /// Derives the app-id and secret headers from a connector configuration
    pub fn from_config(config: &ConnectorConfig) -> Self {
        let pairs = [
            (&config.app_id_header, &config.app_id),
            (&config.secret_header, &config.app_secret),
        ]
        .into_iter()
        .filter(|(name, value)| !name.is_empty() && !value.is_empty())
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

        Self { pairs }
    }

    /// Header name/value pairs, app id first
    pub fn headers(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Inserts the credential headers into `headers`, replacing existing values
    pub fn apply(&self, headers: &mut HeaderMap) -> Result<(), AppError> {
        for (name, value) in &self.pairs {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| AppError::Config(format!("credential header {name}: {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| AppError::Config(format!("credential value for {name}: {e}")))?;
            headers.insert(name, value);
        }
        Ok(())
    }
}
