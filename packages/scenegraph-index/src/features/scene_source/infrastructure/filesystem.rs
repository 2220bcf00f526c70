//! Scene files on disk

use std::io;
use std::path::Path;
use std::time::SystemTime;

use crate::errors::Result;
use crate::features::parsing::{BufLineReader, LineReader};
use crate::features::scene_source::ports::SceneSource;
use crate::shared::models::StalenessToken;

/// Reads scenes from the local file system.
///
/// The staleness token is the fast-path file fingerprint: modification time
/// (ns since the Unix epoch) and size. Content is never hashed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileSystemSource;

impl FileSystemSource {
    pub fn new() -> Self {
        Self
    }
}

impl SceneSource for FileSystemSource {
    fn staleness(&self, path: &Path) -> Result<StalenessToken> {
        let metadata = path.metadata()?;

        let mtime_ns = metadata
            .modified()?
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid mtime: {e}")))?
            .as_nanos();

        Ok(StalenessToken::new(mtime_ns, metadata.len()))
    }

    fn open(&self, path: &Path) -> Result<Box<dyn LineReader>> {
        Ok(Box::new(BufLineReader::open(path)?))
    }
}
