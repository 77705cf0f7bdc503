//! Server configuration management.
//!
//! Configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{IpAddr, Ipv4Addr};

use jiff::tz::TimeZone;
use tracing::Level;

use crate::error::{Result, ServerError};

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server bind address
    pub http_host: IpAddr,
    /// HTTP server port (default: 5000)
    pub http_port: u16,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// IANA time zone used as local time; the system zone when unset
    pub time_zone: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_host: IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)),
            http_port: 5000,
            log_level: String::from("info"),
            time_zone: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `QUACK_HTTP_HOST`: HTTP bind address (default: 127.0.0.1)
    /// - `QUACK_HTTP_PORT`: HTTP port (default: 5000)
    /// - `QUACK_LOG_LEVEL`: Logging level
    /// - `QUACK_TIME_ZONE`: IANA time zone name (default: system time zone)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(val) = lookup("QUACK_HTTP_HOST") {
            config.http_host = val
                .parse()
                .map_err(|_| ServerError::config(format!("Invalid HTTP host: {}", val)))?;
        }

        if let Some(val) = lookup("QUACK_HTTP_PORT") {
            config.http_port = val
                .parse()
                .map_err(|_| ServerError::config(format!("Invalid HTTP port: {}", val)))?;
        }

        if let Some(val) = lookup("QUACK_LOG_LEVEL") {
            config.log_level = val;
        }

        if let Some(val) = lookup("QUACK_TIME_ZONE") {
            if !val.is_empty() {
                config.time_zone = Some(val);
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        self.resolve_time_zone().map(|_| ())
    }

    /// Map the configured log level onto a tracing level; unknown names
    /// fall back to `INFO`.
    pub fn tracing_level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        }
    }

    /// Resolve the configured time zone.
    pub fn resolve_time_zone(&self) -> Result<TimeZone> {
        match &self.time_zone {
            Some(name) => TimeZone::get(name)
                .map_err(|e| ServerError::config(format!("Invalid time zone {}: {}", name, e))),
            None => Ok(TimeZone::system()),
        }
    }

    /// Get the HTTP socket address.
    pub fn http_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.http_host, self.http_port)
    }
}
