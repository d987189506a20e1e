//! Connection configuration.
//!
//! Settings come from the process environment (a `.env` file is loaded first
//! when present). `DATABASE_URL` takes precedence over the individual `PG*`
//! variables.

use crate::error::{DbError, DbResult};
use std::time::Duration;

/// Default maximum number of pooled connections.
pub const DEFAULT_POOL_SIZE: usize = 16;

/// Database connection and pool settings.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// Full connection string; overrides the discrete fields when set.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub dbname: String,
    pub user: String,
    pub password: Option<String>,
    /// Maximum pooled connections.
    pub pool_size: usize,
    /// How long to wait for a pooled connection. `None` waits indefinitely.
    pub pool_timeout: Option<Duration>,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: 5432,
            dbname: "lightbnb".to_string(),
            user: "postgres".to_string(),
            password: None,
            pool_size: DEFAULT_POOL_SIZE,
            pool_timeout: None,
        }
    }
}

impl DbConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the environment, reading `.env` first if it exists.
    pub fn from_env() -> DbResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded environment file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using `lookup` as the variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DbResult<Self> {
        let mut config = Self::default();

        config.url = lookup("DATABASE_URL").filter(|v| !v.is_empty());
        if let Some(host) = lookup("PGHOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PGPORT") {
            config.port = port
                .parse()
                .map_err(|_| DbError::config(format!("PGPORT is not a port number: {port}")))?;
        }
        if let Some(dbname) = lookup("PGDATABASE") {
            config.dbname = dbname;
        }
        if let Some(user) = lookup("PGUSER") {
            config.user = user;
        }
        config.password = lookup("PGPASSWORD");

        if let Some(size) = lookup("LIGHTBNB_POOL_SIZE") {
            config.pool_size = size.parse().map_err(|_| {
                DbError::config(format!("LIGHTBNB_POOL_SIZE is not a number: {size}"))
            })?;
        }
        if let Some(secs) = lookup("LIGHTBNB_POOL_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                DbError::config(format!("LIGHTBNB_POOL_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config.pool_timeout = Some(Duration::from_secs(secs));
        }

        if config.pool_size == 0 {
            return Err(DbError::config("LIGHTBNB_POOL_SIZE must be at least 1"));
        }
        Ok(config)
    }

    /// Use a full connection string.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn dbname(mut self, dbname: impl Into<String>) -> Self {
        self.dbname = dbname.into();
        self
    }

    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn pool_timeout(mut self, timeout: Duration) -> Self {
        self.pool_timeout = Some(timeout);
        self
    }

    /// Driver configuration for these settings.
    pub fn pg_config(&self) -> DbResult<tokio_postgres::Config> {
        if let Some(url) = &self.url {
            return url
                .parse()
                .map_err(|e: tokio_postgres::Error| DbError::Connection(e.to_string()));
        }

        let mut pg = tokio_postgres::Config::new();
        pg.host(&self.host)
            .port(self.port)
            .dbname(&self.dbname)
            .user(&self.user);
        if let Some(password) = &self.password {
            pg.password(password);
        }
        Ok(pg)
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("pool_size", &self.pool_size)
            .field("pool_timeout", &self.pool_timeout)
            .finish()
    }
}
