//! End-to-end serving behavior against real files on disk.
//!
//! Exercises the handlers through the same entry points the router uses,
//! with a scratch root directory per test.

use envserve::config::{AppState, Config, InjectConfig, LoggingConfig, ServerConfig};
use envserve::handler::{static_files, templated};
use http_body_util::BodyExt;
use tempfile::TempDir;

fn state_for(root: &TempDir, url: &str, key: &str) -> AppState {
    AppState::new(Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_dir: root.path().display().to_string(),
            workers: None,
        },
        logging: LoggingConfig { access_log: false },
        inject: InjectConfig {
            supabase_url: url.to_string(),
            supabase_anon_key: key.to_string(),
        },
    })
    .unwrap()
}

async fn body_bytes(resp: hyper::Response<http_body_util::Full<hyper::body::Bytes>>) -> Vec<u8> {
    resp.into_body().collect().await.unwrap().to_bytes().to_vec()
}

fn header<'a>(
    resp: &'a hyper::Response<http_body_util::Full<hyper::body::Bytes>>,
    name: &str,
) -> &'a str {
    resp.headers().get(name).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn index_response_injects_globals_and_reports_exact_length() {
    let root = TempDir::new().unwrap();
    std::fs::write(
        root.path().join("index.html"),
        "<html><head><title>café</title></head><body></body></html>",
    )
    .unwrap();
    let state = state_for(&root, "https://x.test", "abc");

    let resp = templated::serve_index(&state, false).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/html; charset=utf-8");

    let declared: usize = header(&resp, "Content-Length").parse().unwrap();
    let body = body_bytes(resp).await;
    assert_eq!(declared, body.len());

    let text = String::from_utf8(body).unwrap();
    assert!(text.contains("window.SUPABASE_URL = 'https://x.test';"));
    assert!(text.contains("window.SUPABASE_ANON_KEY = 'abc';"));
    // Marker stays unique and follows the injected block
    assert_eq!(text.matches("</head>").count(), 1);
    assert!(text.find("window.SUPABASE_URL").unwrap() < text.find("</head>").unwrap());
}

#[tokio::test]
async fn index_without_marker_is_served_unmodified() {
    let root = TempDir::new().unwrap();
    let original = "<html><body>no head marker</body></html>";
    std::fs::write(root.path().join("index.html"), original).unwrap();
    let state = state_for(&root, "https://x.test", "abc");

    let resp = templated::serve_index(&state, false).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_bytes(resp).await, original.as_bytes());
}

#[tokio::test]
async fn missing_index_yields_404() {
    let root = TempDir::new().unwrap();
    let state = state_for(&root, "u", "k");

    let resp = templated::serve_index(&state, false).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn config_js_substitutes_all_occurrences() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("scripts")).unwrap();
    std::fs::write(
        root.path().join("scripts/config.js"),
        "window.cfg = { url: '{{SUPABASE_URL}}', key: '{{SUPABASE_ANON_KEY}}' };\n\
         console.debug('{{SUPABASE_URL}}');\n",
    )
    .unwrap();
    let state = state_for(&root, "https://x.test", "abc");

    let resp = templated::serve_config_js(&state, false).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(
        header(&resp, "Content-Type"),
        "application/javascript; charset=utf-8"
    );

    let declared: usize = header(&resp, "Content-Length").parse().unwrap();
    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert_eq!(declared, body.len());
    assert!(!body.contains("{{SUPABASE_URL}}"));
    assert!(!body.contains("{{SUPABASE_ANON_KEY}}"));
    assert_eq!(body.matches("https://x.test").count(), 2);
}

#[tokio::test]
async fn empty_credentials_still_serve() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("scripts")).unwrap();
    std::fs::write(
        root.path().join("scripts/config.js"),
        "const url = '{{SUPABASE_URL}}';",
    )
    .unwrap();
    let state = state_for(&root, "", "");

    let resp = templated::serve_config_js(&state, false).await;
    assert_eq!(resp.status(), 200);
    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert_eq!(body, "const url = '';");
}

#[tokio::test]
async fn missing_config_js_yields_404() {
    let root = TempDir::new().unwrap();
    let state = state_for(&root, "u", "k");

    let resp = templated::serve_config_js(&state, false).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn static_file_is_byte_identical_with_inferred_mime() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("styles")).unwrap();
    let css = "body { color: rebeccapurple; }";
    std::fs::write(root.path().join("styles/app.css"), css).unwrap();
    let state = state_for(&root, "u", "k");

    let resp = static_files::serve_path(&state, "/styles/app.css", false).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/css");
    assert_eq!(body_bytes(resp).await, css.as_bytes());
}

#[tokio::test]
async fn percent_encoded_path_serves_existing_file() {
    let root = TempDir::new().unwrap();
    let css = "h1 { margin: 0; }";
    std::fs::write(root.path().join("my file.css"), css).unwrap();
    let state = state_for(&root, "u", "k");

    let resp = static_files::serve_path(&state, "/my%20file.css", false).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(header(&resp, "Content-Type"), "text/css");
    assert_eq!(body_bytes(resp).await, css.as_bytes());
}

#[tokio::test]
async fn traversal_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let root_dir = tmp.path().join("root");
    std::fs::create_dir(&root_dir).unwrap();
    std::fs::write(tmp.path().join("secret.txt"), "top secret").unwrap();

    let state = AppState::new(Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_dir: root_dir.display().to_string(),
            workers: None,
        },
        logging: LoggingConfig { access_log: false },
        inject: InjectConfig {
            supabase_url: String::new(),
            supabase_anon_key: String::new(),
        },
    })
    .unwrap();

    let resp = static_files::serve_path(&state, "/../secret.txt", false).await;
    assert_eq!(resp.status(), 404);
    let body = String::from_utf8(body_bytes(resp).await).unwrap();
    assert!(!body.contains("top secret"));
}

#[tokio::test]
async fn unknown_static_path_yields_404() {
    let root = TempDir::new().unwrap();
    let state = state_for(&root, "u", "k");

    let resp = static_files::serve_path(&state, "/no/such/file.png", false).await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn directory_request_yields_403() {
    let root = TempDir::new().unwrap();
    std::fs::create_dir(root.path().join("assets")).unwrap();
    let state = state_for(&root, "u", "k");

    let resp = static_files::serve_path(&state, "/assets", false).await;
    assert_eq!(resp.status(), 403);
}

#[tokio::test]
async fn head_requests_carry_headers_without_body() {
    let root = TempDir::new().unwrap();
    std::fs::write(root.path().join("index.html"), "<head></head>").unwrap();
    let state = state_for(&root, "u", "k");

    let resp = templated::serve_index(&state, true).await;
    assert_eq!(resp.status(), 200);
    let declared: usize = header(&resp, "Content-Length").parse().unwrap();
    assert!(declared > "<head></head>".len());
    assert!(body_bytes(resp).await.is_empty());
}
