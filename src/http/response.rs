//! HTTP response building module
//!
//! Builders for the status codes the server produces, decoupled from request
//! dispatch. CORS decoration happens in the handler, after these run.

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{HeaderValue, DATE, SERVER};
use hyper::Response;

use crate::logger;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = concat!("corserve/", env!("CARGO_PKG_VERSION"));

/// Build 200 response for a file's bytes.
///
/// HEAD requests keep `Content-Length` but omit the body.
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    last_modified: Option<String>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    let mut builder = Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length);

    if let Some(modified) = last_modified {
        builder = builder.header("Last-Modified", modified);
    }

    builder.body(Full::new(body)).unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build generic HTML response (directory listings)
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build OPTIONS response (preflight request): 200 with an empty body.
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(200)
        .header("Allow", "GET, HEAD, OPTIONS")
        .header("Content-Length", 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 301 redirect response (directory paths without a trailing slash)
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Append the `Server` and `Date` headers every response carries.
pub fn append_standard_headers(response: &mut Response<Full<Bytes>>) {
    let headers = response.headers_mut();
    headers.insert(SERVER, HeaderValue::from_static(SERVER_NAME));
    if let Ok(date) = HeaderValue::from_str(&format_http_date(SystemTime::now())) {
        headers.insert(DATE, date);
    }
}

/// Format a timestamp as an RFC 7231 HTTP date.
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}
