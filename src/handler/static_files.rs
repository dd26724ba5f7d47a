//! Static file serving
//!
//! Resolves request paths against the configured document root and serves
//! the file bytes with a Content-Type inferred from the extension. Unknown
//! paths get the standard 404.

use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a file below `document_root` for the given request path.
pub async fn serve(ctx: &RequestContext<'_>, document_root: &str, path: &str) -> Response<Full<Bytes>> {
    match load(document_root, path).await {
        Some((content, content_type)) => {
            if ctx.access_log {
                logger::log_response(200, content.len());
            }
            http::build_static_file_response(content, content_type, ctx.is_head)
        }
        None => {
            if ctx.access_log {
                logger::log_response(404, 0);
            }
            http::build_404_response()
        }
    }
}

/// Load a file below the document root, or `None` when absent.
async fn load(document_root: &str, path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and strip any traversal components
    let clean_path = path.trim_start_matches('/').replace("..", "");
    let mut file_path = Path::new(document_root).join(&clean_path);

    let root_canonical = match Path::new(document_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{document_root}': {e}"
            ));
            return None;
        }
    };

    // Directory requests resolve to their index document
    if file_path.is_dir() || clean_path.is_empty() || clean_path.ends_with('/') {
        file_path = file_path.join("index.html");
    }

    // File not found is common (404), no need to log at warning level
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type = mime::content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}
