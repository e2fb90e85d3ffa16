use log::LevelFilter;
use std::{env, error, net::IpAddr};

#[derive(Debug, Clone)]
pub struct Configuration {
    host: IpAddr,
    port: u16,
    max_body_size: usize,
    max_positional_size: usize,
    log_level: LevelFilter,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|_| format!("Invalid {} value {}", key, value)),
        Err(err) => default.ok_or(err),
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            max_body_size: 16 * 1024 * 1024,
            max_positional_size: 16 * 1024,
            log_level: LevelFilter::Info,
        }
    }
}

impl Configuration {
    /// Reads the environment, falling back to [`Configuration::default`].
    pub fn new() -> Result<Self, String> {
        let default = Self::default();
        let host = var_map("HOST", |host| host.parse(), Some(default.host))?;
        let port = var_map("PORT", |port| port.parse(), Some(default.port))?;
        let max_body_size = var_map("MAX_BODY_SIZE", |size| size.parse(), Some(default.max_body_size))?;
        let max_positional_size = var_map("MAX_POSITIONAL_SIZE", |size| size.parse(), Some(default.max_positional_size))?;
        let log_level = var_map("LOG_LEVEL", |level| level.parse(), Some(default.log_level))?;
        Ok(Self {
            host,
            port,
            max_body_size,
            max_positional_size,
            log_level,
        })
    }

    pub fn host(&self) -> IpAddr {
        self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn max_body_size(&self) -> usize {
        self.max_body_size
    }

    /// Body limit for base58, base58check and base62, whose running time grows
    /// with the square of the input length.
    pub fn max_positional_size(&self) -> usize {
        self.max_positional_size
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
