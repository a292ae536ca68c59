use std::net::SocketAddr;

use anyhow::{bail, Context, Result};

pub const DEFAULT_DB_PATH: &str = "database.db";
pub const DEFAULT_BIND: &str = "127.0.0.1:5000";

/// Server configuration, passed explicitly to [`crate::server::Server::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// SQLite database file, created with the initial schema if missing.
    pub db_path: String,
    /// Listen address, `host:port`.
    pub bind: String,
    /// Verbose logging.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.into(),
            bind: DEFAULT_BIND.into(),
            debug: false,
        }
    }
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", self.bind))
    }

    pub fn validate(&self) -> Result<()> {
        if self.db_path.is_empty() {
            bail!("database path must not be empty");
        }
        self.socket_addr()?;
        Ok(())
    }
}
