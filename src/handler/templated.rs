//! Templated file serving
//!
//! Reads `index.html` and `scripts/config.js` from the served root on every
//! request and applies the credential transformation before responding.
//! There is no cache: repeated requests re-read and re-transform the file.

use crate::config::AppState;
use crate::error::ServeError;
use crate::handler::inject;
use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

const INDEX_FILE: &str = "index.html";
const CONFIG_JS_FILE: &str = "scripts/config.js";

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const JS_CONTENT_TYPE: &str = "application/javascript; charset=utf-8";

/// Serve the index page with window globals injected into its head.
pub async fn serve_index(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    match load_index(state).await {
        Ok(html) => http::response::build_templated_response(html, HTML_CONTENT_TYPE, is_head),
        Err(e) => http::build_error_response(&e),
    }
}

/// Serve the runtime config script with placeholder tokens substituted.
pub async fn serve_config_js(state: &AppState, is_head: bool) -> Response<Full<Bytes>> {
    match load_config_js(state).await {
        Ok(js) => http::response::build_templated_response(js, JS_CONTENT_TYPE, is_head),
        Err(e) => http::build_error_response(&e),
    }
}

/// Read and transform `index.html`.
pub async fn load_index(state: &AppState) -> Result<String, ServeError> {
    let content = read_utf8(&state.root().join(INDEX_FILE), INDEX_FILE).await?;
    Ok(inject::inject_into_head(&content, state.inject()))
}

/// Read and transform `scripts/config.js`.
pub async fn load_config_js(state: &AppState) -> Result<String, ServeError> {
    let content = read_utf8(&state.root().join(CONFIG_JS_FILE), CONFIG_JS_FILE).await?;
    Ok(inject::substitute_tokens(&content, state.inject()))
}

/// Read a file as UTF-8 text, mapping failures onto the serve taxonomy.
///
/// Only a missing file is a 404; permission and encoding failures are
/// internal errors and surface as a 500 with the description.
async fn read_utf8(path: &Path, label: &str) -> Result<String, ServeError> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == ErrorKind::NotFound => Err(ServeError::NotFound(label.to_string())),
        Err(e) => Err(ServeError::Internal(format!("cannot read {label}: {e}"))),
    }
}
