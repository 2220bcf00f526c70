//! Well-formedness diagnostic for a built store
//!
//! A store is well-formed when it is finished, every container owns at least
//! one component and every entity has a declared type. Queries never enforce
//! this; hosts call it to sanity-check an input.

use std::fmt;

use super::store::GraphStore;
use crate::shared::models::LocalId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// `finish()` was never called
    NotFinished,
    /// Container without components
    EmptyContainer(LocalId),
    /// Entity referenced but never declared
    UnspecifiedType(LocalId),
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::NotFinished => write!(f, "store was not finished"),
            ValidationIssue::EmptyContainer(id) => write!(f, "container {} has no components", id),
            ValidationIssue::UnspecifiedType(id) => write!(f, "entity {} has no declared type", id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

impl GraphStore {
    /// Run the well-formedness diagnostic. Issues are ordered by entity id.
    pub fn validate(&self) -> ValidationReport {
        let mut entities: Vec<_> = self.entities().collect();
        entities.sort_unstable_by_key(|entity| entity.id());

        let mut issues = Vec::new();
        if !self.is_complete() {
            issues.push(ValidationIssue::NotFinished);
        }

        for entity in entities {
            if entity.components().is_some_and(|c| c.is_empty()) {
                issues.push(ValidationIssue::EmptyContainer(entity.id()));
            }
            if !entity.is_type_specified() {
                issues.push(ValidationIssue::UnspecifiedType(entity.id()));
            }
        }

        ValidationReport { issues }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }
}
