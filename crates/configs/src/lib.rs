use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8000 }

/// Connection settings for the PostgreSQL record store.
///
/// `url` wins when non-empty; otherwise the URL is assembled from the
/// individual `user`/`password`/`host`/`port`/`name` parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub acquire_timeout_secs: u64,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            user: "postgres".into(),
            password: "postgres".into(),
            name: "cheque_db".into(),
            host: "localhost".into(),
            port: 5432,
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 3600,
            acquire_timeout_secs: 30,
            sqlx_logging: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Result<Option<T>> {
    match raw {
        Some(v) if !v.trim().is_empty() => v
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| anyhow!("{name} has an invalid value: {v}")),
        _ => Ok(None),
    }
}

impl AppConfig {
    /// Load from `CONFIG_PATH` (default `config.toml`) when that file exists,
    /// otherwise from process environment variables. The result is validated.
    pub fn load() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = if Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            Self::from_env()?
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (environment-shaped keys).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_defaults = ServerConfig::default();
        let server = ServerConfig {
            host: lookup("SERVER_HOST").unwrap_or(server_defaults.host),
            port: parse_var("SERVER_PORT", lookup("SERVER_PORT"))?.unwrap_or(server_defaults.port),
            worker_threads: parse_var("TOKIO_WORKER_THREADS", lookup("TOKIO_WORKER_THREADS"))?,
        };
        let logging = LoggingConfig {
            format: match lookup("LOG_FORMAT").as_deref().map(str::trim) {
                Some("json") => LogFormat::Json,
                _ => LogFormat::Compact,
            },
        };
        Ok(Self { server, database: DatabaseConfig::from_lookup(&lookup)?, logging })
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            url: lookup("DATABASE_URL").unwrap_or_default(),
            user: lookup("POSTGRES_USER").unwrap_or_else(|| defaults.user.clone()),
            password: lookup("POSTGRES_PASSWORD").unwrap_or_else(|| defaults.password.clone()),
            name: lookup("POSTGRES_DB").unwrap_or_else(|| defaults.name.clone()),
            host: lookup("POSTGRES_HOST").unwrap_or_else(|| defaults.host.clone()),
            port: parse_var("POSTGRES_PORT", lookup("POSTGRES_PORT"))?.unwrap_or(defaults.port),
            ..defaults
        })
    }

    /// Fill an empty `url` from `DATABASE_URL` when the file left it out.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn connection_url(&self) -> String {
        if !self.url.trim().is_empty() {
            return self.url.trim().to_string();
        }
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.name
        )
    }

    pub fn validate(&self) -> Result<()> {
        let lower = self.connection_url().to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database url must start with postgresql:// or postgres://"));
        }
        if self.url.trim().is_empty() && (self.host.trim().is_empty() || self.name.trim().is_empty()) {
            return Err(anyhow!("database host and name are required when no url is given"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}
