//! Environment loading and store configuration flags
//!
//! Priority order (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables already set
//! 3. Current directory .env
//! 4. ~/.clinic/.env

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use clinic_server::db::PoolSettings;
use clinic_server::DbConfig;

/// Load `.env` files from the current directory and `~/.clinic`.
///
/// dotenvy never overwrites variables that are already set, so loading the
/// current directory first gives it priority over the home file. Returns
/// the files that were loaded; logging happens later, once tracing is up.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if load_env_file(&env_file) {
            loaded.push(env_file);
        }
    }

    loaded
}

fn load_env_file(path: &Path) -> bool {
    path.exists() && dotenvy::from_path(path).is_ok()
}

/// Get the clinic config directory path (~/.clinic)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".clinic"))
}

/// Store connection flags shared by every command that talks to MySQL
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Store host (overrides DB_HOST)
    #[arg(long)]
    pub db_host: Option<String>,

    /// Store port (overrides DB_PORT)
    #[arg(long)]
    pub db_port: Option<u16>,

    /// Store user (overrides DB_USER / DB_USERNAME)
    #[arg(long)]
    pub db_user: Option<String>,

    /// Schema name (overrides DB_NAME)
    #[arg(long)]
    pub db_name: Option<String>,

    /// Maximum pooled connections
    #[arg(long, default_value_t = 5)]
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection before a query fails
    #[arg(long, default_value_t = 5)]
    pub acquire_timeout: u64,
}

impl DbArgs {
    /// Resolve the store configuration, flags first, then the environment.
    pub fn resolve(&self) -> Result<DbConfig> {
        self.resolve_with(|var| std::env::var(var).ok())
    }

    fn resolve_with<F>(&self, env: F) -> Result<DbConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides = [
            ("DB_HOST", self.db_host.clone()),
            ("DB_PORT", self.db_port.map(|p| p.to_string())),
            ("DB_USER", self.db_user.clone()),
            ("DB_NAME", self.db_name.clone()),
        ];

        DbConfig::from_lookup(|var| {
            overrides
                .iter()
                .find(|(name, _)| *name == var)
                .and_then(|(_, value)| value.clone())
                .or_else(|| env(var))
        })
        .context("Invalid database configuration (set DB_NAME and friends in the environment or .env)")
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.max_connections,
            acquire_timeout: std::time::Duration::from_secs(self.acquire_timeout),
        }
    }
}
