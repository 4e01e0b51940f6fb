// Signal handling module
//
// Supported signals:
// - SIGINT:  shutdown (Ctrl+C)
// - SIGTERM: shutdown
//
// In-flight requests get no special cancellation handling; process exit
// tears them down along with their sockets.

use std::sync::Arc;
use tokio::sync::Notify;

/// Signal handler state
pub struct SignalHandler {
    /// Shutdown signal (SIGTERM, SIGINT)
    pub shutdown: Arc<Notify>,
}

impl SignalHandler {
    pub fn new() -> Self {
        Self {
            shutdown: Arc::new(Notify::new()),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the signal handler task (Unix).
///
/// Whichever of SIGINT/SIGTERM arrives first triggers the shutdown notify;
/// `notify_one` stores a permit so the accept loop sees it even if it is
/// between select iterations.
#[cfg(unix)]
#[allow(clippy::ignored_unit_patterns)]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut sigterm =
            signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
        let mut sigint =
            signal(SignalKind::interrupt()).expect("Failed to register SIGINT handler");

        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }

        handler.shutdown.notify_one();
    });
}

/// Windows fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(handler: Arc<SignalHandler>) {
    tokio::spawn(async move {
        if let Ok(()) = tokio::signal::ctrl_c().await {
            handler.shutdown.notify_one();
        }
    });
}
