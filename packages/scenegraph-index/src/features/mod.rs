//! Feature modules
//!
//! Bottom-up: graph_store ← parsing ← asset_cache, with scene_source
//! supplying input text and staleness tokens.

pub mod asset_cache;
pub mod graph_store;
pub mod parsing;
pub mod scene_source;
