use std::sync::Arc;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut cfg = config::Config::load()?;

    if let Some(port) = port_from_args(std::env::args().nth(1).as_deref(), cfg.server.port) {
        cfg.server.port = port;
    }

    // Single runtime thread: connections are served via spawn_local on a
    // LocalSet, so requests never run in parallel.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(config::AppState::new(cfg)?);
    let addr = state.config.socket_addr()?;

    // A bind failure (port in use, privileged port) is fatal: no retry.
    let listener = server::bind_listener(addr)?;

    let signals = Arc::new(server::signal::SignalHandler::new());
    server::signal::start_signal_handler(Arc::clone(&signals));

    logger::log_server_start(&addr, &state.root);

    let local = tokio::task::LocalSet::new();
    let shutdown = Arc::clone(&signals.shutdown);
    local.run_until(server::run(listener, state, shutdown)).await
}

/// Parse the optional positional port argument.
///
/// A value that does not parse as a TCP port yields a warning and `None`,
/// leaving the configured default in place.
fn port_from_args(arg: Option<&str>, fallback: u16) -> Option<u16> {
    let raw = arg?;
    match raw.parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            println!("Invalid port number '{raw}'. Using default port {fallback}.");
            None
        }
    }
}
