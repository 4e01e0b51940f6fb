//! Request dispatch module
//!
//! Entry point for HTTP request processing: method dispatch plus the
//! decoration every response gets on the way out.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling.
///
/// GET/HEAD resolve against the root directory, OPTIONS answers the CORS
/// preflight with an empty 200, everything else gets 405. Whatever the
/// outcome, the response leaves with the CORS headers and the standard
/// `Server`/`Date` pair. Generic over the body type because the request body
/// is never read.
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let request_path = req.uri().path();
    let is_head = *method == Method::HEAD;

    if state.config.logging.access_log {
        logger::log_request(method, req.uri(), req.version());
    }

    let mut response = match method {
        &Method::GET | &Method::HEAD => {
            static_files::serve_path(&state, request_path, is_head).await
        }
        // Preflight succeeds for any path; the CORS headers below carry the answer.
        &Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    };

    // Every response gets the CORS headers, whatever its method or status.
    state.cors.apply(&mut response);
    http::append_standard_headers(&mut response);

    if state.config.logging.access_log {
        logger::log_response(response.status());
    }

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use http_body_util::BodyExt;
    use hyper::header::{
        ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
        CONTENT_LENGTH, CONTENT_TYPE, LOCATION,
    };
    use std::fs as std_fs;
    use std::path::{Path, PathBuf};

    fn fixture_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "corserve-router-{name}-{}",
            std::process::id()
        ));
        let _ = std_fs::remove_dir_all(&root);
        std_fs::create_dir_all(root.join("docs")).expect("create fixture dirs");
        std_fs::write(root.join("hello.txt"), b"hello world").expect("write fixture");
        std_fs::write(root.join("docs/index.html"), b"<h1>docs</h1>").expect("write fixture");
        root
    }

    fn test_state(root: &Path) -> Arc<AppState> {
        let mut cfg = Config::load_from("no-such-config-file").expect("defaults should load");
        cfg.files.root = root.to_string_lossy().into_owned();
        cfg.logging.access_log = false;
        Arc::new(AppState::new(cfg).expect("fixture root is accessible"))
    }

    async fn send(state: &Arc<AppState>, method: Method, uri: &str) -> Response<Full<Bytes>> {
        let req = Request::builder()
            .method(method)
            .uri(uri)
            .body(Full::new(Bytes::new()))
            .expect("valid request");
        handle_request(req, Arc::clone(state))
            .await
            .expect("handler is infallible")
    }

    async fn body_bytes(response: Response<Full<Bytes>>) -> Bytes {
        response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes()
    }

    fn assert_cors_headers(response: &Response<Full<Bytes>>) {
        let headers = response.headers();
        assert_eq!(headers.get(ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            headers.get(ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, POST, OPTIONS"
        );
        assert_eq!(
            headers.get(ACCESS_CONTROL_ALLOW_HEADERS).unwrap(),
            "Content-Type"
        );
    }

    #[tokio::test]
    async fn test_get_existing_file() {
        let state = test_state(&fixture_root("get"));
        let response = send(&state, Method::GET, "/hello.txt").await;

        assert_eq!(response.status(), 200);
        assert_cors_headers(&response);
        assert_eq!(response.headers().get(CONTENT_LENGTH).unwrap(), "11");
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(&body_bytes(response).await[..], b"hello world");
    }

    #[tokio::test]
    async fn test_head_omits_body_keeps_length() {
        let state = test_state(&fixture_root("head"));
        let response = send(&state, Method::HEAD, "/hello.txt").await;

        assert_eq!(response.status(), 200);
        assert_cors_headers(&response);
        assert_eq!(response.headers().get(CONTENT_LENGTH).unwrap(), "11");
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_options_any_path() {
        let state = test_state(&fixture_root("options"));
        let response = send(&state, Method::OPTIONS, "/no/such/path/at/all").await;

        assert_eq!(response.status(), 200);
        assert_cors_headers(&response);
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_404_with_cors() {
        let state = test_state(&fixture_root("missing"));
        let response = send(&state, Method::GET, "/nope.txt").await;

        assert_eq!(response.status(), 404);
        assert_cors_headers(&response);
    }

    #[tokio::test]
    async fn test_traversal_is_404() {
        let state = test_state(&fixture_root("traversal"));
        let response = send(&state, Method::GET, "/../../../etc/passwd").await;

        assert_eq!(response.status(), 404);
        assert_cors_headers(&response);
    }

    #[tokio::test]
    async fn test_directory_index_document() {
        let state = test_state(&fixture_root("index"));
        let response = send(&state, Method::GET, "/docs/").await;

        assert_eq!(response.status(), 200);
        assert_cors_headers(&response);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "text/html; charset=utf-8"
        );
        assert_eq!(&body_bytes(response).await[..], b"<h1>docs</h1>");
    }

    #[tokio::test]
    async fn test_directory_without_slash_redirects() {
        let state = test_state(&fixture_root("redirect"));
        let response = send(&state, Method::GET, "/docs").await;

        assert_eq!(response.status(), 301);
        assert_cors_headers(&response);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/docs/");
    }

    #[tokio::test]
    async fn test_directory_listing_for_root() {
        let state = test_state(&fixture_root("listing"));
        let response = send(&state, Method::GET, "/").await;

        assert_eq!(response.status(), 200);
        assert_cors_headers(&response);
        let html = String::from_utf8(body_bytes(response).await.to_vec()).expect("utf-8 html");
        assert!(html.contains("hello.txt"));
        assert!(html.contains("docs/"));
    }

    #[tokio::test]
    async fn test_post_is_405_with_cors() {
        let state = test_state(&fixture_root("post"));
        let response = send(&state, Method::POST, "/hello.txt").await;

        assert_eq!(response.status(), 405);
        assert_cors_headers(&response);
        assert_eq!(response.headers().get("Allow").unwrap(), "GET, HEAD, OPTIONS");
    }

    #[tokio::test]
    async fn test_standard_headers_present() {
        let state = test_state(&fixture_root("standard"));
        let response = send(&state, Method::GET, "/hello.txt").await;

        assert_eq!(
            response.headers().get("Server").unwrap(),
            http::response::SERVER_NAME
        );
        assert!(response.headers().contains_key("Date"));
        assert!(response.headers().contains_key("Last-Modified"));
    }
}
