// Application state module
// Immutable process-wide state shared by every request handler

use std::path::{Path, PathBuf};

use super::types::{Config, InjectConfig};

/// Shared application state.
///
/// Built once at startup and never mutated afterwards, so any number of
/// concurrent handler tasks read it through a plain `Arc` without locks.
pub struct AppState {
    pub config: Config,
    root: PathBuf,
}

impl AppState {
    /// Create the state, canonicalizing the served root directory.
    ///
    /// Fails if the root does not exist; the canonical form is what the
    /// static handler checks resolved paths against.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let root = PathBuf::from(&config.server.root_dir).canonicalize()?;
        Ok(Self { config, root })
    }

    /// Canonical root directory files are served from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn inject(&self) -> &InjectConfig {
        &self.config.inject
    }
}
