//! Static file fallback
//!
//! Serves verbatim file bytes from the root directory for every path the
//! route table does not special-case. Resolved paths are canonicalized and
//! checked against the canonical root before any read happens.

use crate::config::AppState;
use crate::error::ServeError;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve the file a request path resolves to under the root.
pub async fn serve_path(state: &AppState, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match load_file(state.root(), path).await {
        Ok((content, content_type)) => {
            http::response::build_static_file_response(content, content_type, is_head)
        }
        Err(e) => http::build_error_response(&e),
    }
}

/// Resolve a request path under `root` and read its bytes.
pub async fn load_file(root: &Path, request_path: &str) -> Result<(Vec<u8>, &'static str), ServeError> {
    let file_path = resolve_path(root, request_path)?;

    match fs::read(&file_path).await {
        Ok(content) => {
            let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));
            Ok((content, content_type))
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(ServeError::Forbidden(request_path.to_string()))
        }
        Err(e) => Err(ServeError::Internal(format!(
            "cannot read {request_path}: {e}"
        ))),
    }
}

/// Map a request path onto a file under `root`, rejecting traversal.
///
/// `root` must already be canonical. The path is percent-decoded first so
/// names like `my%20file.css` find the file on disk; canonicalization of
/// the candidate then resolves `..` segments and symlinks (encoded or not)
/// before the containment check, so a path escaping the root is refused no
/// matter how it is spelled. Escapes answer 404 rather than 403 to avoid
/// disclosing what exists outside.
pub fn resolve_path(root: &Path, request_path: &str) -> Result<PathBuf, ServeError> {
    let decoded = match urlencoding::decode(request_path) {
        Ok(p) => p,
        // Decoding to invalid UTF-8 cannot name a served file
        Err(_) => return Err(ServeError::NotFound(request_path.to_string())),
    };
    let relative = decoded.trim_start_matches('/');
    let candidate = root.join(relative);

    let canonical = match candidate.canonicalize() {
        Ok(p) => p,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ServeError::NotFound(request_path.to_string()));
        }
        Err(_) => return Err(ServeError::Forbidden(request_path.to_string())),
    };

    if !canonical.starts_with(root) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return Err(ServeError::NotFound(request_path.to_string()));
    }

    // Directory listing is not offered
    if canonical.is_dir() {
        return Err(ServeError::Forbidden(request_path.to_string()));
    }

    Ok(canonical)
}
