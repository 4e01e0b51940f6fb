// Configuration module entry point
// Layered loading: optional config file, environment, built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, CorsConfig, FilesConfig, LoggingConfig, ServerConfig};

/// Port used when neither the CLI, the environment, nor a config file says otherwise.
pub const DEFAULT_PORT: u16 = 8000;

impl Config {
    /// Load configuration from the default "corserve.toml" location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("corserve")
    }

    /// Load configuration from the specified file path (without extension).
    /// The file is optional; defaults cover every key.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("CORSERVE"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", i64::from(DEFAULT_PORT))?
            .set_default("files.root", ".")?
            .set_default(
                "files.index",
                vec!["index.html".to_string(), "index.htm".to_string()],
            )?
            .set_default("files.directory_listing", true)?
            .set_default("cors.allow_origin", "*")?
            .set_default("cors.allow_methods", "GET, POST, OPTIONS")?
            .set_default("cors.allow_headers", "Content-Type")?
            .set_default("logging.access_log", true)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
