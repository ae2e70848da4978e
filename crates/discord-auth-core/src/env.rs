// Environment detection and tracing subscriber setup.

use std::sync::OnceLock;

use crate::error::{AuthError, Result};

/// Cached environment mode.
static ENV_MODE: OnceLock<EnvMode> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvMode {
    Production,
    Development,
    Test,
}

impl EnvMode {
    /// Map an environment value like `"prod"` or `"testing"` to a mode.
    /// Anything unrecognised is development.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => EnvMode::Production,
            "test" | "testing" => EnvMode::Test,
            _ => EnvMode::Development,
        }
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is not set.
    pub fn default_filter(&self) -> &'static str {
        match self {
            EnvMode::Production => "discord_auth=info",
            EnvMode::Development | EnvMode::Test => "discord_auth=debug",
        }
    }
}

/// Detect the current environment mode from environment variables.
/// Checks `DISCORD_AUTH_ENV` then `RUST_ENV`.
pub fn detect_env_mode() -> EnvMode {
    *ENV_MODE.get_or_init(|| {
        let env_val = std::env::var("DISCORD_AUTH_ENV")
            .or_else(|_| std::env::var("RUST_ENV"))
            .unwrap_or_default();
        EnvMode::parse(&env_val)
    })
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise the filter depends on the
/// environment mode. Calling this twice returns [`AuthError::Tracing`].
pub fn init_tracing() -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(detect_env_mode().default_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .try_init()
        .map_err(|e| AuthError::Tracing(e.to_string()))
}
