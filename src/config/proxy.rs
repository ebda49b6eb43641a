// src/config/proxy.rs
//! Proxy credentials, read once from the environment.
//!
//! Variables (prefix `OSCARS_PROXY_`):
//! - `USERNAME`, `PASSWORD` – required
//! - `HOST` – defaults to [`DEFAULT_PROXY_HOST`]
//! - `PORT` – defaults to [`DEFAULT_PROXY_PORT`]

use std::collections::HashMap;
use std::fmt;

use config::{Config, Environment};
use serde::Deserialize;

use super::consts::{DEFAULT_PROXY_HOST, DEFAULT_PROXY_PORT, PROXY_ENV_PREFIX};
use crate::error::ConfigError;

#[derive(Deserialize)]
struct RawProxyEnv {
    username: Option<String>,
    password: Option<String>,
    host: String,
    port: u16,
}

#[derive(Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

// Keep the password out of logs.
impl fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl ProxyConfig {
    /// Read from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(PROXY_ENV_PREFIX))
    }

    /// Read from an explicit variable map (keys as they would appear in the
    /// environment, e.g. `OSCARS_PROXY_USERNAME`).
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(PROXY_ENV_PREFIX).source(Some(vars)))
    }

    fn load(env: Environment) -> Result<Self, ConfigError> {
        let raw: RawProxyEnv = Config::builder()
            .set_default("host", DEFAULT_PROXY_HOST)?
            .set_default("port", i64::from(DEFAULT_PROXY_PORT))?
            .add_source(env)
            .build()?
            .try_deserialize()?;

        let username = raw.username.filter(|s| !s.trim().is_empty());
        let password = raw.password.filter(|s| !s.trim().is_empty());
        match (username, password) {
            (Some(username), Some(password)) => Ok(Self {
                username,
                password,
                host: raw.host,
                port: raw.port,
            }),
            _ => Err(ConfigError::MissingCredentials(format!(
                "{PROXY_ENV_PREFIX}_USERNAME and {PROXY_ENV_PREFIX}_PASSWORD"
            ))),
        }
    }

    /// Forward-proxy URL without credentials; those go in `Proxy-Authorization`.
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
