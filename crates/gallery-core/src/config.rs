//! Configuration module
//!
//! This module provides configuration structures for the gallery API,
//! including server, database and seeding settings.

use std::env;

use crate::store_types::StoreBackend;

// Common constants
const SERVER_PORT: u16 = 5000;
const MAX_CONNECTIONS: u32 = 20;
const CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Base configuration shared by every binary
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    pub environment: String,
}

/// Gallery service configuration
#[derive(Clone, Debug)]
pub struct GalleryConfig {
    pub base: BaseConfig,
    pub store_backend: StoreBackend,
    /// Required for the postgres backend, ignored for the in-memory one.
    pub database_url: Option<String>,
    pub seed_on_startup: bool,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config(pub Box<GalleryConfig>);

impl Config {
    fn as_gallery(&self) -> &GalleryConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        is_production_env(&self.as_gallery().base.environment)
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let config = GalleryConfig::from_source(|key| env::var(key).ok())?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.as_gallery().validate()
    }

    pub fn server_port(&self) -> u16 {
        self.as_gallery().base.server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.as_gallery().base.cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.as_gallery().base.environment
    }

    pub fn db_max_connections(&self) -> u32 {
        self.as_gallery().base.db_max_connections
    }

    pub fn db_timeout_seconds(&self) -> u64 {
        self.as_gallery().base.db_timeout_seconds
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.as_gallery().store_backend
    }

    pub fn database_url(&self) -> Option<&str> {
        self.as_gallery().database_url.as_deref()
    }

    pub fn seed_on_startup(&self) -> bool {
        self.as_gallery().seed_on_startup
    }
}

fn is_production_env(environment: &str) -> bool {
    let environment = environment.to_lowercase();
    environment == "production" || environment == "prod"
}

fn parse_bool(value: Option<String>, default: bool) -> bool {
    value
        .map(|v| v.trim().to_lowercase())
        .and_then(|v| match v.as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

impl GalleryConfig {
    /// Build the configuration from a key lookup (the process environment in production).
    pub fn from_source<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let base = BaseConfig {
            server_port: match lookup("PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
                None => SERVER_PORT,
            },
            cors_origins,
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(MAX_CONNECTIONS),
            db_timeout_seconds: lookup("DB_TIMEOUT_SECONDS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(CONNECTION_TIMEOUT_SECS),
            environment,
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(value) => value.parse::<StoreBackend>()?,
            None => StoreBackend::Postgres,
        };

        let config = GalleryConfig {
            base,
            store_backend,
            database_url: lookup("DATABASE_URL").filter(|s| !s.is_empty()),
            seed_on_startup: parse_bool(lookup("SEED_ON_STARTUP"), true),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.base.db_max_connections == 0 {
            return Err(anyhow::anyhow!("DB_MAX_CONNECTIONS cannot be 0"));
        }

        if self.base.db_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("DB_TIMEOUT_SECONDS cannot be 0"));
        }

        if is_production_env(&self.base.environment)
            && self.base.cors_origins.iter().any(|o| o == "*")
        {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        if self.store_backend == StoreBackend::Postgres {
            match self.database_url.as_deref() {
                None => {
                    return Err(anyhow::anyhow!(
                        "DATABASE_URL must be set when using the postgres store backend"
                    ))
                }
                Some(url)
                    if !(url.starts_with("postgresql://") || url.starts_with("postgres://")) =>
                {
                    return Err(anyhow::anyhow!(
                        "DATABASE_URL must be a valid PostgreSQL connection string"
                    ))
                }
                Some(_) => {}
            }
        }

        Ok(())
    }
}
