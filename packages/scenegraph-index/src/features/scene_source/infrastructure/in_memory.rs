//! Scene text held in memory

use std::io;
use std::path::{Path, PathBuf};

use ahash::AHashMap;

use crate::errors::Result;
use crate::features::parsing::{BufLineReader, LineReader};
use crate::features::scene_source::ports::SceneSource;
use crate::shared::models::StalenessToken;

#[derive(Debug, Clone)]
struct Document {
    text: String,
    revision: u64,
}

/// Path-keyed scene texts for hosts that keep documents in memory.
///
/// Every `insert` bumps the revision of that path, which is what the staleness
/// token reports.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: AHashMap<PathBuf, Document>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or replace the text of `path`; returns its new revision
    pub fn insert(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) -> u64 {
        let text = text.into();
        let document = self
            .documents
            .entry(path.into())
            .and_modify(|doc| doc.revision += 1)
            .or_insert_with(|| Document {
                text: String::new(),
                revision: 1,
            });
        document.text = text;
        document.revision
    }

    pub fn remove(&mut self, path: &Path) -> bool {
        self.documents.remove(path).is_some()
    }

    pub fn revision(&self, path: &Path) -> Option<u64> {
        self.documents.get(path).map(|doc| doc.revision)
    }

    fn document(&self, path: &Path) -> io::Result<&Document> {
        self.documents.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no scene text for {}", path.display()),
            )
        })
    }
}

impl SceneSource for InMemorySource {
    fn staleness(&self, path: &Path) -> Result<StalenessToken> {
        let document = self.document(path)?;
        Ok(StalenessToken::from_revision(document.revision))
    }

    fn open(&self, path: &Path) -> Result<Box<dyn LineReader>> {
        let document = self.document(path)?;
        Ok(Box::new(BufLineReader::from_text(document.text.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_insert_bumps_revision() {
        let mut source = InMemorySource::new();
        assert_eq!(source.insert("a.unity", "x"), 1);
        assert_eq!(source.insert("a.unity", "y"), 2);
        assert_eq!(source.insert("b.unity", "z"), 1);

        let path = Path::new("a.unity");
        assert_eq!(source.revision(path), Some(2));
        assert_eq!(
            source.staleness(path).unwrap(),
            StalenessToken::from_revision(2)
        );
    }

    #[test]
    fn test_open_returns_latest_text() {
        let mut source = InMemorySource::new();
        source.insert("a.unity", "old");
        source.insert("a.unity", "new\nlines");

        let mut reader = source.open(Path::new("a.unity")).unwrap();
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("new"));
        assert_eq!(reader.read_line().unwrap().as_deref(), Some("lines"));
        assert_eq!(reader.read_line().unwrap(), None);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let mut source = InMemorySource::new();
        source.insert("a.unity", "x");
        assert!(source.remove(Path::new("a.unity")));

        let err = source.staleness(Path::new("a.unity")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IO);
        assert!(source.open(Path::new("a.unity")).is_err());
    }
}
