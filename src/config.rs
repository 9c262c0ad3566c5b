//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

use crate::cache::{DEFAULT_SWEEP_INTERVAL_MS, DEFAULT_TTL_MS};

/// TTL for cached category responses (3 minutes)
pub const CATEGORY_CACHE_TTL_MS: u64 = 180_000;

/// TTL for cached product responses (5 minutes)
pub const PRODUCT_CACHE_TTL_MS: u64 = 300_000;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Interval between cache sweeps in milliseconds
    pub sweep_interval_ms: u64,
    /// TTL used by the cache when none is given
    pub default_cache_ttl_ms: u64,
    /// TTL applied to `/api/v1/category` responses
    pub category_cache_ttl_ms: u64,
    /// TTL applied to `/api/v1/product` responses
    pub product_cache_ttl_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `SWEEP_INTERVAL_MS` - Cache sweep frequency (default: 600000)
    /// - `DEFAULT_CACHE_TTL_MS` - Fallback TTL (default: 300000)
    /// - `CATEGORY_CACHE_TTL_MS` - Category route TTL (default: 180000)
    /// - `PRODUCT_CACHE_TTL_MS` - Product route TTL (default: 300000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env_or("SERVER_PORT", defaults.server_port),
            sweep_interval_ms: env_or("SWEEP_INTERVAL_MS", defaults.sweep_interval_ms),
            default_cache_ttl_ms: env_or("DEFAULT_CACHE_TTL_MS", defaults.default_cache_ttl_ms),
            category_cache_ttl_ms: env_or("CATEGORY_CACHE_TTL_MS", defaults.category_cache_ttl_ms),
            product_cache_ttl_ms: env_or("PRODUCT_CACHE_TTL_MS", defaults.product_cache_ttl_ms),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL_MS,
            default_cache_ttl_ms: DEFAULT_TTL_MS,
            category_cache_ttl_ms: CATEGORY_CACHE_TTL_MS,
            product_cache_ttl_ms: PRODUCT_CACHE_TTL_MS,
        }
    }
}
