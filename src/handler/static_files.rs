//! Static file serving module
//!
//! Resolves request paths against the root directory and builds the file,
//! listing, redirect, or 404 response.

use std::path::{Path, PathBuf};

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

use crate::config::AppState;
use crate::http::{self, listing, mime, path};
use crate::logger;

/// Outcome of resolving a request path against the root directory.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A readable file (possibly an index document).
    File(PathBuf),
    /// A directory to render a listing for.
    Listing(PathBuf),
    /// Directory requested without a trailing slash; redirect target.
    Redirect(String),
    NotFound,
}

/// Serve a GET/HEAD request path.
pub async fn serve_path(state: &AppState, request_path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let files = &state.config.files;
    match resolve(&state.root, request_path, &files.index, files.directory_listing).await {
        Resolved::File(file_path) => serve_file(&file_path, is_head).await,
        Resolved::Listing(dir) => match listing::render(&dir, request_path).await {
            Some(html) => http::build_html_response(html, is_head),
            None => http::build_404_response(),
        },
        Resolved::Redirect(target) => http::build_redirect_response(&target),
        Resolved::NotFound => http::build_404_response(),
    }
}

/// Resolve a request path to a filesystem target.
///
/// `root` must already be canonical. The decoded path is joined under it and
/// canonicalized; anything that lands outside the root (traversal sequences,
/// symlinks pointing out) is answered with `NotFound`, never served.
pub async fn resolve(
    root: &Path,
    request_path: &str,
    index_files: &[String],
    directory_listing: bool,
) -> Resolved {
    let Some(decoded) = path::percent_decode(request_path) else {
        logger::log_warning(&format!("Undecodable request path: {request_path}"));
        return Resolved::NotFound;
    };

    let relative = decoded.trim_start_matches('/');
    let joined = root.join(relative);

    // Missing files fail canonicalization; that is the common 404, not worth logging.
    let Ok(resolved) = joined.canonicalize() else {
        return Resolved::NotFound;
    };

    if !resolved.starts_with(root) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            resolved.display()
        ));
        return Resolved::NotFound;
    }

    let Ok(metadata) = fs::metadata(&resolved).await else {
        return Resolved::NotFound;
    };

    if metadata.is_dir() {
        // Relative links in listings and index documents only work with a
        // trailing slash, so redirect first.
        if !decoded.ends_with('/') {
            return Resolved::Redirect(format!("{request_path}/"));
        }

        for index in index_files {
            let candidate = resolved.join(index);
            if fs::metadata(&candidate).await.is_ok_and(|m| m.is_file()) {
                return Resolved::File(candidate);
            }
        }

        if directory_listing {
            return Resolved::Listing(resolved);
        }
        return Resolved::NotFound;
    }

    Resolved::File(resolved)
}

/// Read a resolved file and build the 200 response.
async fn serve_file(file_path: &Path, is_head: bool) -> Response<Full<Bytes>> {
    let content = match fs::read(file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_path.display()
            ));
            return http::build_404_response();
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
    let last_modified = fs::metadata(file_path)
        .await
        .ok()
        .and_then(|m| m.modified().ok())
        .map(http::format_http_date);

    http::build_file_response(content, content_type, last_modified, is_head)
}
