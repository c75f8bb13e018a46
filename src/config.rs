//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to
    pub server_host: IpAddr,
    /// HTTP server port
    pub server_port: u16,
    /// Start with the two sample resources instead of an empty store
    pub seed_sample_data: bool,
    /// Title rendered on the index page
    pub app_title: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SEED_SAMPLE_DATA` - Seed the store with sample resources (default: false)
    /// - `APP_TITLE` - Index page title (default: "Resource API")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_host: parse_var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            seed_sample_data: parse_var("SEED_SAMPLE_DATA").unwrap_or(defaults.seed_sample_data),
            app_title: env::var("APP_TITLE")
                .ok()
                .filter(|title| !title.trim().is_empty())
                .unwrap_or(defaults.app_title),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 3000,
            seed_sample_data: false,
            app_title: "Resource API".to_string(),
        }
    }
}
