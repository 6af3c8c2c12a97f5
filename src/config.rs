//! Server configuration and environment variable handling.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 10040;
pub const DEFAULT_BASE_PATH: &str = "/sun-pos";
pub const DEFAULT_GEOLOCATION_URL: &str = "http://ip-api.com/json";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Bind host
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Prefix every route is mounted under, without a trailing slash
    pub base_path: String,
    /// Geolocation endpoint; the client IP is appended as a path segment
    pub geolocation_url: String,
    pub geolocation_timeout: Duration,
    /// When false, client addresses are never looked up
    pub geolocation_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            base_path: DEFAULT_BASE_PATH.to_string(),
            geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
            geolocation_timeout: Duration::from_secs(5),
            geolocation_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Create a configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (default: 0.0.0.0)
    /// - `PORT` (default: 10040)
    /// - `BASE_PATH` (default: /sun-pos)
    /// - `GEOLOCATION_URL` (default: http://ip-api.com/json)
    /// - `GEOLOCATION_TIMEOUT_SECS` (default: 5)
    /// - `GEOLOCATION_ENABLED` (default: true)
    ///
    /// # Errors
    /// Returns `Error::Config` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a caller supplied lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| Error::Config(format!("PORT must be a valid port number, got {:?}", v)))?,
            None => defaults.port,
        };
        let base_path = match lookup("BASE_PATH") {
            Some(v) => normalize_base_path(&v),
            None => defaults.base_path,
        };
        let geolocation_url = lookup("GEOLOCATION_URL").unwrap_or(defaults.geolocation_url);
        let geolocation_timeout = match lookup("GEOLOCATION_TIMEOUT_SECS") {
            Some(v) => Duration::from_secs(v.trim().parse().map_err(|_| {
                Error::Config(format!("GEOLOCATION_TIMEOUT_SECS must be a whole number, got {:?}", v))
            })?),
            None => defaults.geolocation_timeout,
        };
        let geolocation_enabled = match lookup("GEOLOCATION_ENABLED") {
            Some(v) => parse_bool(&v)
                .ok_or_else(|| Error::Config(format!("GEOLOCATION_ENABLED must be true or false, got {:?}", v)))?,
            None => defaults.geolocation_enabled,
        };

        Ok(Self {
            host,
            port,
            base_path,
            geolocation_url,
            geolocation_timeout,
            geolocation_enabled,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| Error::Config(format!("invalid bind address {}:{}", self.host, self.port)))
    }
}

fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 10040);
        assert_eq!(config.base_path, "/sun-pos");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("BASE_PATH", "solar/"),
            ("GEOLOCATION_TIMEOUT_SECS", "2"),
            ("GEOLOCATION_ENABLED", "false"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.base_path, "/solar");
        assert_eq!(config.geolocation_timeout, Duration::from_secs(2));
        assert!(!config.geolocation_enabled);
    }

    #[test]
    fn test_root_base_path() {
        assert_eq!(config_from(&[("BASE_PATH", "/")]).unwrap().base_path, "");
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(config_from(&[("PORT", "http")]), Err(Error::Config(_))));
        assert!(matches!(config_from(&[("PORT", "70000")]), Err(Error::Config(_))));
    }

    #[test]
    fn test_invalid_flag() {
        assert!(matches!(
            config_from(&[("GEOLOCATION_ENABLED", "maybe")]),
            Err(Error::Config(_))
        ));
    }
}
