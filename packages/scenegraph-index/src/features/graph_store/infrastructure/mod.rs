// Graph Store Infrastructure

pub mod store;
pub mod validation;

pub use store::{GraphStats, GraphStore};
pub use validation::{ValidationIssue, ValidationReport};
