//! Environment-driven configuration.
//!
//! Loaded once at startup into an immutable [`Config`] and injected into the
//! components that need it; nothing reads the environment after init.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

fn env_required(key: &'static str) -> Result<String, ConfigError> {
    env_opt(key).ok_or(ConfigError::MissingVar(key))
}

fn env_u16(key: &str, default: u16) -> u16 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_u64(key: &str, default: u64) -> u64 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_i32(key: &str, default: i32) -> i32 {
    env_opt(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_bool(key: &str, default: bool) -> bool {
    env_opt(key)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub routing: RoutingConfig,
    pub scheduler: SchedulerConfig,
    pub smtp: SmtpConfig,
    pub postgres: PostgresConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    ///
    /// Fails only when a required key (`ROUTING_BASE_URI`, `ROUTING_API_KEY`)
    /// is absent; every other key falls back to its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            routing: RoutingConfig::from_env()?,
            scheduler: SchedulerConfig::from_env(),
            smtp: SmtpConfig::from_env(),
            postgres: PostgresConfig::from_env(),
        })
    }
}

// ── HTTP server ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Allowed CORS origin for the browser frontend. `None` = permissive.
    pub cors_origin: Option<String>,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("SERVER_HOST", "0.0.0.0"),
            port: env_u16("SERVER_PORT", 8080),
            cors_origin: env_opt("CORS_ORIGIN"),
        }
    }
}

// ── Routing service ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URI of the distance-matrix endpoint.
    pub base_uri: String,
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// Per-call HTTP timeout in seconds.
    pub timeout_secs: u64,
}

impl RoutingConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            base_uri: env_required("ROUTING_BASE_URI")?,
            api_key: env_required("ROUTING_API_KEY")?,
            timeout_secs: env_u64("ROUTING_TIMEOUT_SECS", 5),
        })
    }
}

// ── Alert scheduler ───────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds between evaluation ticks. Must be at most 60 to guarantee
    /// no `HH:MM` alert time is skipped.
    pub tick_interval_secs: u64,
    /// Fixed offset from UTC, in minutes, used to compute the wall-clock
    /// `HH:MM` string each tick. Default is +330 (+5:30).
    pub tz_offset_minutes: i32,
}

impl SchedulerConfig {
    pub fn from_env() -> Self {
        Self {
            tick_interval_secs: env_u64("TICK_INTERVAL_SECS", 60),
            tz_offset_minutes: env_i32("TZ_OFFSET_MINUTES", 330),
        }
    }
}

// ── SMTP delivery ─────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub tls: bool,
    /// Sender address. When unset, alert delivery is disabled and the
    /// scheduler logs rendered notifications instead of sending them.
    pub from: Option<String>,
}

impl SmtpConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("SMTP_HOST", "localhost"),
            port: env_u16("SMTP_PORT", 587),
            tls: env_bool("SMTP_TLS", true),
            from: env_opt("SMTP_FROM"),
        }
    }
}

// ── PostgreSQL ────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostgresConfig {
    /// Connection URL. When unset, the server runs with the in-memory store.
    pub url: Option<String>,
}

impl PostgresConfig {
    pub fn from_env() -> Self {
        Self {
            url: env_opt("PG_URL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheduler_defaults() {
        std::env::remove_var("TICK_INTERVAL_SECS");
        std::env::remove_var("TZ_OFFSET_MINUTES");
        let cfg = SchedulerConfig::from_env();
        assert_eq!(cfg.tick_interval_secs, 60);
        assert_eq!(cfg.tz_offset_minutes, 330);
    }

    #[test]
    fn routing_requires_base_uri_and_key() {
        std::env::remove_var("ROUTING_BASE_URI");
        std::env::remove_var("ROUTING_API_KEY");
        let err = RoutingConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("ROUTING_BASE_URI"));
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        std::env::set_var("SERVER_PORT_TEST_KEY", "not-a-port");
        assert_eq!(env_u16("SERVER_PORT_TEST_KEY", 8080), 8080);
        std::env::remove_var("SERVER_PORT_TEST_KEY");
    }

    #[test]
    fn env_bool_accepts_common_spellings() {
        std::env::set_var("SMTP_TLS_TEST_KEY", "TRUE");
        assert!(env_bool("SMTP_TLS_TEST_KEY", false));
        std::env::set_var("SMTP_TLS_TEST_KEY", "0");
        assert!(!env_bool("SMTP_TLS_TEST_KEY", true));
        std::env::remove_var("SMTP_TLS_TEST_KEY");
    }
}
