use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

/// The parts of a Google service-account key file the sync needs.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    #[serde(rename = "type", default)]
    pub key_type: String,
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"[REDACTED]")
            .field("token_uri", &self.token_uri)
            .finish()
    }
}

impl ServiceAccountKey {
    pub fn from_json(content: &str) -> AppResult<Self> {
        let key: Self = serde_json::from_str(content)
            .map_err(|e| AppError::Credentials(format!("not a service-account key: {e}")))?;

        if !key.key_type.is_empty() && key.key_type != "service_account" {
            return Err(AppError::Credentials(format!(
                "expected a service_account key, found '{}'",
                key.key_type
            )));
        }
        if key.client_email.trim().is_empty() {
            return Err(AppError::Credentials("client_email is empty".into()));
        }
        if !key.private_key.contains("PRIVATE KEY") {
            return Err(AppError::Credentials("private_key is not a PEM key".into()));
        }

        Ok(key)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Credentials(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_json(&content)
    }
}
