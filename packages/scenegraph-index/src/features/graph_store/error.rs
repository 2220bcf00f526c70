//! Error types for the graph store

use thiserror::Error;

use crate::shared::models::LocalId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphStoreError {
    #[error("Entity {0} is not in the store")]
    UnknownEntity(LocalId),

    #[error("Entity {id} is already declared as '{existing}', cannot redeclare as '{requested}'")]
    TypeConflict {
        id: LocalId,
        existing: String,
        requested: String,
    },

    #[error("Declaration line of entity {id} has no type delimiter: {line:?}")]
    MissingTypeDelimiter { id: LocalId, line: String },
}

pub type GraphStoreResult<T> = Result<T, GraphStoreError>;
