//! Configuration loading from environment.

use std::env;
use std::fmt;

use relay_types::SecretKey;

/// Port the relay listens on when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 4242;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub stripe_secret_key: SecretKey,
    pub stripe_api_base: Option<String>,
    pub otlp_endpoint: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got {:?}", raw))?,
            None => DEFAULT_PORT,
        };

        let stripe_secret_key = lookup("STRIPE_SECRET_KEY")
            .and_then(SecretKey::new)
            .ok_or_else(|| anyhow::anyhow!("STRIPE_SECRET_KEY environment variable is required"))?;

        let non_blank = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            port,
            stripe_secret_key,
            stripe_api_base: non_blank("STRIPE_API_BASE"),
            otlp_endpoint: non_blank("OTEL_EXPORTER_OTLP_ENDPOINT"),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("stripe_secret_key", &self.stripe_secret_key)
            .field("stripe_api_base", &self.stripe_api_base)
            .field("otlp_endpoint", &self.otlp_endpoint)
            .finish()
    }
}
