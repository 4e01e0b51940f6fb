// Server accept loop module
// Accepts connections one after another until the shutdown signal fires

use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Run the accept loop until shutdown is signalled.
///
/// Accept errors are logged and the loop keeps going; a failed accept must
/// never take the server down. Only the shutdown notify ends the loop, at
/// which point the listener is dropped and the function returns cleanly.
#[allow(clippy::ignored_unit_patterns)]
pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = shutdown.notified() => {
                logger::log_server_stop();
                return Ok(());
            }
        }
    }
}
