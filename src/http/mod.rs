//! HTTP protocol layer module
//!
//! Protocol-level building blocks, decoupled from request dispatch: response
//! builders, MIME lookup, CORS decoration, path decoding, directory listings.

pub mod cors;
pub mod listing;
pub mod mime;
pub mod path;
pub mod response;

// Re-export commonly used items
pub use response::{
    append_standard_headers, build_404_response, build_405_response, build_file_response,
    build_html_response, build_options_response, build_redirect_response, format_http_date,
};
