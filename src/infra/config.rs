//! Centralized configuration (environment variables + defaults).

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value '{value}': {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Which record store backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub store: StoreBackend,
    /// Pool size for the PostgreSQL store (at least 1).
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
}

impl Config {
    /// Reads configuration from the process environment, after loading `.env` if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("PLANT_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL")
                    .filter(|v| !v.trim().is_empty())
                    .ok_or(ConfigError::Missing("DATABASE_URL"))?,
            },
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    name: "PLANT_STORE",
                    value: other.to_string(),
                    reason: "expected 'postgres' or 'memory'".to_string(),
                })
            }
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::Invalid {
                    name: "DB_MAX_CONNECTIONS",
                    value: v.clone(),
                    reason: e.to_string(),
                })?
                .max(1),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            store,
            max_connections,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn postgres_is_the_default_and_needs_a_url() {
        let err = config_from(&[]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));

        let cfg = config_from(&[("DATABASE_URL", "postgres://localhost/plants")]).unwrap();
        assert_eq!(
            cfg.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/plants".to_string()
            }
        );
        assert_eq!(cfg.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR.parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn memory_store_needs_no_url() {
        let cfg = config_from(&[("PLANT_STORE", "memory"), ("BIND_ADDR", "127.0.0.1:8080")])
            .unwrap();
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.bind_addr.port(), 8080);
    }

    #[test]
    fn max_connections_is_clamped_to_one() {
        let cfg = config_from(&[("PLANT_STORE", "memory"), ("DB_MAX_CONNECTIONS", "0")]).unwrap();
        assert_eq!(cfg.max_connections, 1);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert!(matches!(
            config_from(&[("PLANT_STORE", "mongo")]).unwrap_err(),
            ConfigError::Invalid { name: "PLANT_STORE", .. }
        ));
        assert!(matches!(
            config_from(&[("PLANT_STORE", "memory"), ("DB_MAX_CONNECTIONS", "lots")]).unwrap_err(),
            ConfigError::Invalid { name: "DB_MAX_CONNECTIONS", .. }
        ));
        assert!(matches!(
            config_from(&[("PLANT_STORE", "memory"), ("BIND_ADDR", "nowhere")]).unwrap_err(),
            ConfigError::Invalid { name: "BIND_ADDR", .. }
        ));
    }
}
