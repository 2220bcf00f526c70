//! Scene Source - where scene text comes from and how fresh it is
//!
//! ## Architecture
//! - Ports: `SceneSource` (staleness oracle + line cursor factory)
//! - Infrastructure: `FileSystemSource` (mtime + size), `InMemorySource` (revision counter)

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{FileSystemSource, InMemorySource};
pub use ports::SceneSource;
