//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route matching
//! and dispatch to the templated or static handlers.

use crate::config::AppState;
use crate::handler::{static_files, templated};
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Resolved route for a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` or `/index.html`: index page with injected window globals
    IndexHtml,
    /// Exactly `/scripts/config.js`: placeholder substitution
    ConfigJs,
    /// Everything else: plain file under the served root
    StaticFile,
}

/// Match a request path against the fixed route table. First match wins.
pub fn match_route(path: &str) -> Route {
    match path {
        "/" | "/index.html" => Route::IndexHtml,
        "/scripts/config.js" => Route::ConfigJs,
        _ => Route::StaticFile,
    }
}

/// Main entry point for HTTP request handling.
///
/// Every failure is converted into a status-coded response here; this
/// function never hands an error back to the connection layer.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let response = if let Some(resp) = check_http_method(&method) {
        resp
    } else {
        match match_route(&path) {
            Route::IndexHtml => templated::serve_index(&state, is_head).await,
            Route::ConfigJs => templated::serve_config_js(&state, is_head).await,
            Route::StaticFile => static_files::serve_path(&state, &path, is_head).await,
        }
    };

    if state.config.logging.access_log {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        let entry = AccessLogEntry::new(
            peer_addr,
            method.as_str(),
            &path,
            response.status().as_u16(),
            body_bytes,
        );
        logger::log_access(&entry);
    }

    Ok(response)
}

/// Reject anything other than GET/HEAD with a 405 carrying an Allow header.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not supported: {method}"));
            Some(http::build_405_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_index_share_a_route() {
        assert_eq!(match_route("/"), Route::IndexHtml);
        assert_eq!(match_route("/index.html"), Route::IndexHtml);
    }

    #[test]
    fn config_js_is_exact_match_only() {
        assert_eq!(match_route("/scripts/config.js"), Route::ConfigJs);
        assert_eq!(match_route("/scripts/config.js.bak"), Route::StaticFile);
        assert_eq!(match_route("/scripts/other.js"), Route::StaticFile);
    }

    #[test]
    fn everything_else_falls_back_to_static() {
        assert_eq!(match_route("/styles/app.css"), Route::StaticFile);
        assert_eq!(match_route("/index.htm"), Route::StaticFile);
        assert_eq!(match_route("/../secret.txt"), Route::StaticFile);
    }

    #[test]
    fn non_get_methods_are_rejected() {
        assert!(check_http_method(&Method::GET).is_none());
        assert!(check_http_method(&Method::HEAD).is_none());

        let resp = check_http_method(&Method::POST).unwrap();
        assert_eq!(resp.status(), 405);
        let resp = check_http_method(&Method::DELETE).unwrap();
        assert_eq!(resp.status(), 405);
    }
}
