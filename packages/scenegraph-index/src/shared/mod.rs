//! Shared module - Common types and constants
//!
//! Types used by every feature. No parsing or I/O lives here.

pub mod constants;
pub mod models;

// Re-exports for convenience
pub use models::*;
