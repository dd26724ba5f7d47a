//! Configuration types
//!
//! Deserialized from `config.toml` plus `SERVER_*` environment overrides.
//! Every section has serde defaults so the server runs with no config file
//! at all, which is the common case for a local demo.

use crate::routing::RewriteRule;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub http: HttpConfig,
    pub routes: RoutesConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory static files are resolved against.
    pub document_root: String,
    /// Retry once on `port + 1` when the configured port is taken.
    pub port_fallback: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            document_root: ".".to_string(),
            port_fallback: true,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub access_log: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { access_log: true }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct HttpConfig {
    pub server_name: String,
    /// Value of `Access-Control-Allow-Headers`; the hosted deployment also
    /// lists `Authorization` here.
    pub cors_allow_headers: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            server_name: "CalibDemo/0.1".to_string(),
            cors_allow_headers: "Content-Type".to_string(),
        }
    }
}

/// Route table: exact-match rewrites plus the reserved API prefix.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RoutesConfig {
    /// Ordered rewrite rules, first exact match wins.
    pub rewrites: Vec<RewriteRule>,
    /// Paths under this prefix never reach static serving.
    pub api_prefix: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            rewrites: vec![
                RewriteRule {
                    path: "/".to_string(),
                    target: "/modern-login.html".to_string(),
                },
                RewriteRule {
                    path: "/dashboard".to_string(),
                    target: "/modern-dashboard.html".to_string(),
                },
            ],
            api_prefix: "/api/".to_string(),
        }
    }
}
