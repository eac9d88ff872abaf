//! HTTP response building module
//!
//! Builders for every status the server emits, decoupled from handler logic.
//! All bodies carry an explicit Content-Length so the access log can report
//! exact byte counts.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use crate::error::ServeError;

/// Build a 200 response for templated text content.
///
/// Content-Length is the exact UTF-8 byte length of the transformed text,
/// which is what the templating contract requires.
pub fn build_templated_response(
    content: String,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let bytes = Bytes::from(content);
    let content_length = bytes.len();
    let body = if is_head { Bytes::new() } else { bytes };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 200 response with verbatim file bytes.
pub fn build_static_file_response(
    data: Vec<u8>,
    content_type: &'static str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(data) };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response(message: &str) -> Response<Full<Bytes>> {
    build_plain_response(404, format!("404 Not Found: {message}"))
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<Full<Bytes>> {
    build_plain_response(403, "403 Forbidden".to_string())
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    let mut resp = build_plain_response(405, "405 Method Not Allowed".to_string());
    resp.headers_mut()
        .insert("Allow", hyper::header::HeaderValue::from_static("GET, HEAD"));
    resp
}

/// Build 500 Internal Server Error response with the failure description
pub fn build_500_response(description: &str) -> Response<Full<Bytes>> {
    build_plain_response(500, format!("Server error: {description}"))
}

/// Map a serve error onto its status-coded response.
pub fn build_error_response(err: &ServeError) -> Response<Full<Bytes>> {
    match err {
        ServeError::NotFound(what) => build_404_response(what),
        ServeError::Forbidden(_) => build_403_response(),
        ServeError::Internal(description) => build_500_response(description),
    }
}

fn build_plain_response(status: u16, body: String) -> Response<Full<Bytes>> {
    let content_length = body.len();
    Response::builder()
        .status(status)
        .header("Content-Type", "text/plain; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(Bytes::from(body)))
        .unwrap_or_else(|e| {
            log_build_error(&status.to_string(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
