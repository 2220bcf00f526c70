//! Common test utilities for scenegraph-index
//!
//! Shared scene fixtures and a builder for generated scenes.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
