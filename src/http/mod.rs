//! HTTP protocol layer module
//!
//! Content-type mapping and response building, decoupled from request
//! handling.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_file_response, build_not_found_response, build_options_response,
    build_server_error_response,
};
