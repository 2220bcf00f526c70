//! Parsing domain - pure functions over single lines

pub mod markers;
