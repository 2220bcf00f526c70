//! Shared models

mod identity;

pub use identity::{InputIdentity, LocalId, StalenessToken};
