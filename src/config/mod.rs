// Configuration module entry point
// Resolves the process configuration once at startup; handlers never read
// the environment directly.

mod state;
mod types;

use std::env;
use std::net::SocketAddr;

pub use state::AppState;
pub use types::{Config, InjectConfig, LoggingConfig, ServerConfig};

impl Config {
    /// Load configuration from the optional `config.toml` and the environment.
    ///
    /// Environment variables consumed: `SUPABASE_URL` and `SUPABASE_ANON_KEY`
    /// (both optional, empty string when unset) and `PORT` (default 5000).
    /// A non-numeric `PORT` is a deserialization error and aborts startup.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load from a named config file path (without extension).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.root_dir", ".")?
            .set_default("logging.access_log", true)?
            .set_default("inject.supabase_url", "")?
            .set_default("inject.supabase_anon_key", "")?
            .set_override_option("server.port", env::var("PORT").ok())?
            .set_override_option("inject.supabase_url", env::var("SUPABASE_URL").ok())?
            .set_override_option("inject.supabase_anon_key", env::var("SUPABASE_ANON_KEY").ok())?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid listen address: {e}"))
    }
}
