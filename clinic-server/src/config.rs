//! Store connection configuration
//!
//! Values come from the process environment. Two spellings are accepted
//! for the credentials (`DB_USER`/`DB_USERNAME`, `DB_PASS`/`DB_PASSWORD`);
//! the first non-empty one wins.

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;

/// Default store host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default MySQL port
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Default store user
pub const DEFAULT_DB_USER: &str = "root";

const HOST_VARS: &[&str] = &["DB_HOST"];
const PORT_VARS: &[&str] = &["DB_PORT"];
const USER_VARS: &[&str] = &["DB_USER", "DB_USERNAME"];
const PASSWORD_VARS: &[&str] = &["DB_PASS", "DB_PASSWORD"];
const NAME_VARS: &[&str] = &["DB_NAME"];

/// Configuration error
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Connection settings for the relational store
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
}

impl DbConfig {
    /// Resolve configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first = |vars: &[&str]| {
            vars.iter()
                .filter_map(|var| lookup(*var))
                .find(|value| !value.is_empty())
        };

        let port = match first(PORT_VARS) {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "DB_PORT",
                value: raw,
            })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            host: first(HOST_VARS).unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port,
            user: first(USER_VARS).unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: first(PASSWORD_VARS),
            database: first(NAME_VARS).ok_or(ConfigError::Missing("DB_NAME"))?,
        })
    }

    /// Build sqlx connect options for this configuration.
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        match &self.password {
            Some(password) => options.password(password),
            None => options,
        }
    }
}

// Password stays out of logs
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .finish()
    }
}
