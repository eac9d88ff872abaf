//! Access log format module
//!
//! Renders one line per handled request in Common Log Format.

use chrono::Local;
use std::net::SocketAddr;

/// Access log entry for a single handled request
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    /// Client socket address
    pub remote_addr: SocketAddr,
    /// Request timestamp
    pub time: chrono::DateTime<Local>,
    /// HTTP method
    pub method: String,
    /// Request URI path
    pub path: String,
    /// Response status code
    pub status: u16,
    /// Response body size in bytes
    pub body_bytes: u64,
}

impl AccessLogEntry {
    pub fn new(
        remote_addr: SocketAddr,
        method: &str,
        path: &str,
        status: u16,
        body_bytes: u64,
    ) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method: method.to_string(),
            path: path.to_string(),
            status,
            body_bytes,
        }
    }

    /// Common Log Format:
    /// `$remote_addr - - [$time_local] "$method $path HTTP/1.1" $status $body_bytes`
    pub fn format_common(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.remote_addr.ip(),
            self.time.format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes
        )
    }
}
