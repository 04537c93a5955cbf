use std::path::PathBuf;

use crate::application::ports::ClassificationSpec;

pub const DEFAULT_CALLBACK_PATH: &str = "/hooks/operations";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {detail}")]
    Invalid { var: &'static str, detail: String },
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub media: MediaSettings,
    pub webhook: WebhookSettings,
    pub classification: ClassificationSettings,
    pub storage: StorageSettings,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            server: ServerSettings::from_env()?,
            media: MediaSettings::from_env()?,
            webhook: WebhookSettings::from_env()?,
            classification: ClassificationSettings::from_env(),
            storage: StorageSettings::from_env(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        let host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().map_err(|_| SettingsError::Invalid {
                var: "SERVER_PORT",
                detail: format!("not a port number: {}", raw),
            })?,
            Err(_) => 3000,
        };
        Ok(Self { host, port })
    }
}

#[derive(Debug, Clone)]
pub struct MediaSettings {
    pub base_url: String,
    pub api_token: String,
}

impl MediaSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            base_url: require("MEDIA_API_URL")?,
            api_token: require("MEDIA_API_TOKEN")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WebhookSettings {
    pub callback_url: String,
    pub secret: String,
}

impl WebhookSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Ok(Self {
            callback_url: require("WEBHOOK_CALLBACK_URL")?,
            secret: require("WEBHOOK_SECRET")?,
        })
    }

    /// Local route the callback URL resolves to.
    pub fn callback_path(&self) -> String {
        derive_callback_path(&self.callback_url)
    }
}

#[derive(Debug, Clone)]
pub struct ClassificationSettings {
    pub language: String,
    pub redact_pii: bool,
}

impl ClassificationSettings {
    pub fn from_env() -> Self {
        Self {
            language: std::env::var("CLASSIFY_LANGUAGE").unwrap_or_else(|_| "en-US".to_string()),
            redact_pii: std::env::var("CLASSIFY_REDACT_PII")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(false),
        }
    }

    pub fn to_spec(&self) -> ClassificationSpec {
        ClassificationSpec {
            language: self.language.clone(),
            redact_pii: self.redact_pii,
        }
    }
}

/// Deployment-mode switch: without a transcript directory the downloader
/// logs transient links instead of fetching them.
#[derive(Debug, Clone, Default)]
pub struct StorageSettings {
    pub transcript_dir: Option<PathBuf>,
}

impl StorageSettings {
    pub fn from_env() -> Self {
        Self {
            transcript_dir: std::env::var("TRANSCRIPT_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }
}

/// Extracts the path component of the configured callback URL so the
/// router serves the same route the remote service will call.
pub fn derive_callback_path(url: &str) -> String {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);

    let Some(slash) = without_scheme.find('/') else {
        return DEFAULT_CALLBACK_PATH.to_string();
    };

    let path = &without_scheme[slash..];
    let path = match path.find(['?', '#']) {
        Some(end) => &path[..end],
        None => path,
    };

    if path.len() > 1 {
        path.to_string()
    } else {
        DEFAULT_CALLBACK_PATH.to_string()
    }
}

fn require(var: &'static str) -> Result<String, SettingsError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(SettingsError::MissingVar(var)),
    }
}
