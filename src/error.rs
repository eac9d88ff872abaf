//! Request-serving error taxonomy
//!
//! Every failure during request handling maps onto one of these variants and
//! is converted to a status-coded response at the handler boundary; nothing
//! propagates far enough to take the process down.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServeError {
    /// The requested or templated file does not exist (404).
    #[error("{0} not found")]
    NotFound(String),

    /// Directory targets and permission-denied reads on static paths (403).
    #[error("access to {0} is forbidden")]
    Forbidden(String),

    /// Any other read or transform failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ServeError {
    pub fn status(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Forbidden(_) => 403,
            Self::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert_eq!(ServeError::NotFound("index.html".into()).status(), 404);
        assert_eq!(ServeError::Forbidden("/etc".into()).status(), 403);
        assert_eq!(ServeError::Internal("boom".into()).status(), 500);
    }

    #[test]
    fn messages_name_the_subject() {
        let err = ServeError::NotFound("scripts/config.js".into());
        assert_eq!(err.to_string(), "scripts/config.js not found");
    }
}
