// Connection handling module
// Serves a single accepted TCP connection

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection and serve it in a task on the current thread.
///
/// The runtime is single-threaded, so spawned connections interleave
/// cooperatively rather than run in parallel.
pub fn accept_connection(stream: TcpStream, peer_addr: SocketAddr, state: &Arc<AppState>) {
    if state.config.logging.access_log {
        logger::log_connection_accepted(&peer_addr);
    }

    let state = Arc::clone(state);
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        // HTTP/1.1 with default keep-alive; the client decides when to close.
        let conn = http1::Builder::new().keep_alive(true).serve_connection(
            io,
            service_fn(move |req| {
                let state = Arc::clone(&state);
                async move { handler::handle_request(req, state).await }
            }),
        );

        // A transport error abandons this connection only; the accept loop
        // is unaffected.
        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
