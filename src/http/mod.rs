//! HTTP protocol helpers
//!
//! Content type inference and response builders shared across handlers.

pub mod mime;
pub mod response;

pub use response::{
    build_403_response, build_404_response, build_405_response, build_500_response,
    build_error_response,
};
