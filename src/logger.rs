use std::net::SocketAddr;
use std::path::Path;

use hyper::{Method, StatusCode, Uri, Version};

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("======================================");
    println!("corserve started");
    println!("Serving {} at http://{}", root.display(), addr);
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    println!("[Connection] Accepted from: {peer_addr}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    println!("[Request] {method} {uri} {version:?}");
}

pub fn log_response(status: StatusCode) {
    println!("[Response] {status}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_server_stop() {
    println!("\nServer stopped.");
}
