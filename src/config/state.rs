// Shared application state
// Everything here is fixed at startup and immutable for the process lifetime.

use std::path::{Path, PathBuf};

use super::types::Config;
use crate::http::cors::CorsHeaders;

/// Immutable state shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Canonicalized root directory; all file resolution stays under it.
    pub root: PathBuf,
    /// CORS header values, validated once at startup.
    pub cors: CorsHeaders,
    pub config: Config,
}

impl AppState {
    /// Resolve the root directory and validate the configured CORS values.
    ///
    /// Both failures are startup errors: a server without a readable root or
    /// with unusable header values has nothing correct to serve.
    pub fn new(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let root = Path::new(&config.files.root).canonicalize().map_err(|e| {
            format!(
                "Root directory '{}' is not accessible: {e}",
                config.files.root
            )
        })?;

        let cors = CorsHeaders::from_config(&config.cors)
            .map_err(|e| format!("Invalid CORS header value in configuration: {e}"))?;

        Ok(Self { root, cors, config })
    }
}
