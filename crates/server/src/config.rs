use std::{io, net::SocketAddr};
use thiserror::Error;
use tokio::net::lookup_host;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },

    #[error("could not resolve {host}: {source}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },
}

/// Server settings, read from the environment (and `.env`, if present)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// IP address or host name to listen on
    pub host: String,
    pub port: u16,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let host = match lookup("HOST") {
            Some(value) if value.trim().is_empty() => {
                return Err(ConfigError::Invalid { name: "HOST", value });
            }
            Some(value) => value,
            None => "0.0.0.0".to_string(),
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::Invalid { name: "PORT", value })?,
            None => 3000,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::Invalid {
                name: "RUN_MIGRATIONS",
                value,
            })?,
            None => true,
        };

        Ok(Self {
            database_url,
            host,
            port,
            run_migrations,
        })
    }

    /// Resolves `HOST` to the first address it names, so `localhost` works too
    pub async fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let resolve_err = |source| ConfigError::Resolve {
            host: self.host.clone(),
            source,
        };

        lookup_host((self.host.as_str(), self.port))
            .await
            .map_err(resolve_err)?
            .next()
            .ok_or_else(|| {
                resolve_err(io::Error::new(
                    io::ErrorKind::NotFound,
                    "no addresses found",
                ))
            })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
