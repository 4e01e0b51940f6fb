//! Directory listing module
//!
//! Renders the HTML index page served for directories that have no default
//! document. Entries are sorted by name, directories get a trailing slash,
//! names are HTML-escaped and hrefs percent-encoded.

use std::path::Path;
use tokio::fs;

use crate::http::path::{percent_decode, percent_encode};

/// Render a directory listing for `dir`, shown under `request_path`.
///
/// Returns `None` if the directory cannot be read.
pub async fn render(dir: &Path, request_path: &str) -> Option<String> {
    let mut read_dir = fs::read_dir(dir).await.ok()?;

    let mut entries: Vec<(String, bool)> = Vec::new();
    while let Ok(Some(entry)) = read_dir.next_entry().await {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_dir = entry.file_type().await.is_ok_and(|t| t.is_dir());
        entries.push((name, is_dir));
    }
    entries.sort();

    let display_path =
        percent_decode(request_path).unwrap_or_else(|| request_path.to_string());
    let title = escape_html(&display_path);

    let mut items = String::new();
    for (name, is_dir) in entries {
        let display_name = if is_dir { format!("{name}/") } else { name };
        items.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            percent_encode(&display_name),
            escape_html(&display_name)
        ));
    }

    Some(format!(
        "<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>Directory listing for {title}</title>\n</head>\n<body>\n\
         <h1>Directory listing for {title}</h1>\n<hr>\n<ul>\n{items}</ul>\n<hr>\n\
         </body>\n</html>\n"
    ))
}

/// Escape a string for embedding in HTML text or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
