//! Domain Layer
//!
//! Header parsing without any framework or runtime dependencies beyond
//! the `http` types re-exported by axum.

pub mod api_key;
pub mod errors;

// Re-exports for convenience
pub use api_key::*;
pub use errors::*;
