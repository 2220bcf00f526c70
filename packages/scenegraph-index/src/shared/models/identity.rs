//! Identifiers of scene objects and of build inputs

use std::path::{Path, PathBuf};

/// Local identifier of an object inside one scene file.
///
/// The same numeric space is also used for the declared type marker of
/// external assets, so a value alone does not say which of the two it names.
pub type LocalId = u64;

/// Opaque change marker of an input.
///
/// Two tokens compare equal only if the input is believed unchanged. The
/// filesystem source packs modification time and size; in-memory sources use
/// a revision counter in `stamp` and leave `size` at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StalenessToken {
    stamp: u128,
    size: u64,
}

impl StalenessToken {
    pub fn new(stamp: u128, size: u64) -> Self {
        Self { stamp, size }
    }

    /// Token for a monotonically increasing revision number
    pub fn from_revision(revision: u64) -> Self {
        Self {
            stamp: u128::from(revision),
            size: 0,
        }
    }

    pub fn stamp(&self) -> u128 {
        self.stamp
    }

    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Input identity of a build: where the scene came from and how fresh it was.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputIdentity {
    pub path: PathBuf,
    pub token: StalenessToken,
}

impl InputIdentity {
    pub fn new(path: impl Into<PathBuf>, token: StalenessToken) -> Self {
        Self {
            path: path.into(),
            token,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
