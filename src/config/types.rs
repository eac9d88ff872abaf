// Configuration type definitions

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub inject: InjectConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory the server serves files from
    pub root_dir: String,
    /// Tokio worker thread count, defaults to the CPU core count
    pub workers: Option<usize>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
}

/// Credential values substituted into served HTML and JS.
///
/// Both default to the empty string when unset; the server still starts and
/// serves, it just injects empty values.
#[derive(Debug, Deserialize, Clone)]
pub struct InjectConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}
