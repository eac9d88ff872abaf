// Request handling module entry point
// Routing, content templating and the static file fallback

pub mod inject;
pub mod router;
pub mod static_files;
pub mod templated;

pub use router::handle_request;
