// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub files: FilesConfig,
    pub cors: CorsConfig,
    pub logging: LoggingConfig,
}

/// Listener configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Static file serving configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FilesConfig {
    /// Root directory all servable files must reside under.
    /// Resolved to an absolute path once at startup.
    pub root: String,
    /// Default documents tried for directory requests, in order.
    pub index: Vec<String>,
    /// Serve an auto-generated HTML listing for directories with no index file.
    pub directory_listing: bool,
}

/// CORS header values attached to every response
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}
