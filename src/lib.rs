//! envserve - a minimal static file server with runtime credential injection
//!
//! Serves files from a root directory over HTTP. Two paths are special-cased:
//! `index.html` gets a `<script>` block with window globals spliced in before
//! its closing head tag, and `scripts/config.js` gets literal placeholder
//! tokens replaced with the configured credential values. Everything else is
//! plain static file serving.

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
