// Start of file: /src/config/environment.rs

// * Environment configuration with a singleton pattern.
// * Every variable is optional; malformed numbers abort the boot.

use std::{borrow::Cow, sync::Arc};
// * anyhow for convenient error handling
use anyhow::{anyhow, Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PROTOCOL: &str = "http";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
pub const DEFAULT_TIMEOUT: u64 = 3; // 3 seconds

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub protocol: Cow<'static, str>,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            protocol: Cow::Borrowed(DEFAULT_PROTOCOL),
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
        }
    }
}

impl EnvironmentVariables {
    // * Reads the process environment.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // * Builds the configuration from any key lookup, providing defaults if missing
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            environment: lookup("ENVIRONMENT")
                .map(Cow::Owned)
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: lookup("HOST")
                .map(Cow::Owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: lookup("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            protocol: lookup("PROTOCOL")
                .map(Cow::Owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_PROTOCOL)),

            max_request_body_size: lookup("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: lookup("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),
        })
    }

    // * Returns the lazily-initialized configuration shared by the whole process.
    // * The environment is read once; later calls hand out the same Arc.
    pub fn try_instance() -> Result<Arc<Self>> {
        static INSTANCE: Lazy<Result<Arc<EnvironmentVariables>, anyhow::Error>> =
            Lazy::new(|| EnvironmentVariables::load().map(Arc::new));

        INSTANCE
            .as_ref()
            .map(Arc::clone)
            .map_err(|err| anyhow!("Failed to load environment configuration: {err:#}"))
    }

    // * Same as `try_instance` for callers that cannot continue without configuration
    pub fn instance() -> Arc<Self> {
        // ! Panics if loading fails
        Self::try_instance().expect("Failed to load environment configuration")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}


// End of file: /src/config/environment.rs
