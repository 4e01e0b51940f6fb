// Server module entry point
// Listener creation, signal handling and the accept loop

pub mod connection;
pub mod listener;
pub mod signal;

// `loop` is a keyword, so the module is named server_loop
#[path = "loop.rs"]
pub mod server_loop;

// Re-export commonly used items
pub use listener::bind_listener;
pub use server_loop::run;
