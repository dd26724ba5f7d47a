//! Configuration loading
//!
//! Layers an optional `config.toml` file and `SERVER_*` environment
//! variables over coded defaults.

mod types;

pub use types::{Config, HttpConfig, LoggingConfig, RoutesConfig, ServerConfig};

use std::net::SocketAddr;

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("SERVER")
                    .separator("__")
                    .ignore_empty(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}
