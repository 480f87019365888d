//! Configuration module
//!
//! Configuration is read once at startup from the environment (and an optional `.env`
//! file). The storage root is not configured directly: it is always the `media`
//! directory inside the configured web root.

use std::env;
use std::path::{Path, PathBuf};

use crate::constants::{MAX_UPLOAD_BYTES, MEDIA_DIR_NAME};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_WEB_ROOT: &str = "wwwroot";

/// Log output format for the console subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

/// Server-level settings
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub log_format: LogFormat,
}

/// Catalogue configuration
#[derive(Clone, Debug)]
pub struct CatalogueConfig {
    pub base: BaseConfig,
    /// Directory served as static assets; the storage root lives inside it.
    pub web_root: PathBuf,
    /// Ceiling for the whole upload request body.
    pub max_upload_bytes: usize,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<CatalogueConfig>);

impl Config {
    fn as_catalogue(&self) -> &CatalogueConfig {
        &self.0
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = CatalogueConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_catalogue().validate()
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_name(&self.as_catalogue().base.environment)
    }

    pub fn server_port(&self) -> u16 {
        self.as_catalogue().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_catalogue().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_catalogue().base.environment
    }

    pub fn log_format(&self) -> LogFormat {
        self.as_catalogue().base.log_format
    }

    pub fn web_root(&self) -> &Path {
        &self.as_catalogue().web_root
    }

    /// `<web_root>/media`
    pub fn storage_root(&self) -> PathBuf {
        self.as_catalogue().web_root.join(MEDIA_DIR_NAME)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.as_catalogue().max_upload_bytes
    }
}

fn is_production_name(environment: &str) -> bool {
    let environment = environment.to_lowercase();
    environment == "production" || environment == "prod"
}

/// Reads `LOG_FORMAT` before the rest of the configuration so telemetry can start first.
pub fn log_format_from_env() -> LogFormat {
    dotenvy::dotenv().ok();
    match env::var("LOG_FORMAT").map(|s| s.to_lowercase()).as_deref() {
        Ok("json") => LogFormat::Json,
        _ => LogFormat::Compact,
    }
}

impl CatalogueConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        if is_production_name(&environment) && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            cors_origins,
            environment,
            log_format: log_format_from_env(),
        };

        let config = CatalogueConfig {
            base,
            web_root: env::var("WEB_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_WEB_ROOT)),
            max_upload_bytes: MAX_UPLOAD_BYTES,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base.server_port == 0 {
            return Err(anyhow::anyhow!("PORT must be greater than zero"));
        }

        if self.web_root.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("WEB_ROOT must not be empty"));
        }

        if self.max_upload_bytes == 0 {
            return Err(anyhow::anyhow!("Upload ceiling must be greater than zero"));
        }

        Ok(())
    }
}
