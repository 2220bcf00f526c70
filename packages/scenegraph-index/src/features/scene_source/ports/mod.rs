//! Ports - Interface definitions for scene sources

use std::path::Path;

use crate::errors::Result;
use crate::features::parsing::LineReader;
use crate::shared::models::{InputIdentity, StalenessToken};

/// Input provider consulted by the asset cache before every build.
pub trait SceneSource {
    /// Current change marker of `path`.
    ///
    /// Equal tokens promise unchanged content; a build holding an equal token
    /// resumes instead of restarting.
    fn staleness(&self, path: &Path) -> Result<StalenessToken>;

    /// Fresh cursor positioned at the first line of `path`
    fn open(&self, path: &Path) -> Result<Box<dyn LineReader>>;

    /// Path paired with its current token
    fn identify(&self, path: &Path) -> Result<InputIdentity> {
        Ok(InputIdentity::new(path, self.staleness(path)?))
    }
}
