//! Logger module
//!
//! Console logging for the server: startup diagnostics, per-request access
//! lines, warnings and errors. Info goes to stdout, problems to stderr.

mod format;

pub use format::AccessLogEntry;

use crate::config::Config;
use std::net::SocketAddr;
use std::path::Path;

/// How many characters of the credential URL the startup banner reveals.
const URL_PREVIEW_LEN: usize = 30;

pub fn log_server_start(addr: &SocketAddr, root: &Path, config: &Config) {
    println!("======================================");
    println!("envserve started");
    println!("Listening on: http://{addr}");
    println!("Serving root: {}", root.display());
    if let Some(workers) = config.server.workers {
        println!("Worker threads: {workers}");
    }
    log_credential_status("SUPABASE_URL", &config.inject.supabase_url, true);
    log_credential_status("SUPABASE_ANON_KEY", &config.inject.supabase_anon_key, false);
    println!("Press Ctrl+C to stop");
    println!("======================================\n");
}

/// Report whether a credential resolved, previewing only the URL value.
/// The key itself is never printed.
fn log_credential_status(name: &str, value: &str, show_preview: bool) {
    if value.is_empty() {
        log_warning(&format!("{name} environment variable not set"));
    } else if show_preview {
        println!("{name} configured: {}...", truncate_chars(value, URL_PREVIEW_LEN));
    } else {
        println!("{name} configured");
    }
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_common());
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_shutdown() {
    println!("\nShutdown signal received, stopping server");
}

/// Character-boundary-safe prefix truncation.
fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
