// Incremental Parser - resumable object-record scanner
//
// Drives GraphStore mutations from a LineReader. The parser keeps its cursor,
// pending line and partially built store between calls:
//
//   Idle ──(new/changed input)──▶ Reading ──(end of input)──▶ Exhausted
//                                   │  ▲
//                                   └──┘ Cancelled (state kept, resumable)
//
// Any other failure drops the state back to Idle so the next call restarts.

use std::sync::Arc;

use tracing::{debug, info, trace};

use crate::errors::{Result, SceneCacheError};
use crate::features::graph_store::{GraphStore, GraphStoreError};
use crate::features::parsing::domain::markers::{self, LineKind, MalformedField};
use crate::features::parsing::ports::{InterruptCheck, LineReader};
use crate::shared::models::{InputIdentity, LocalId};

/// Externally visible parser state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserPhase {
    /// No open cursor
    Idle,
    /// Cursor open, input partially consumed
    Reading,
    /// Input fully consumed, store finished
    Exhausted,
}

enum ParsePhase {
    Idle,
    Reading {
        identity: InputIdentity,
        state: Box<ReadingState>,
    },
    Exhausted {
        identity: InputIdentity,
        store: Arc<GraphStore>,
    },
}

/// Resumable parser over one input at a time.
pub struct IncrementalParser {
    phase: ParsePhase,

    /// Object dispatches between interruption checks
    interrupt_batch: usize,
}

impl IncrementalParser {
    pub fn new(interrupt_batch: usize) -> Self {
        Self {
            phase: ParsePhase::Idle,
            interrupt_batch: interrupt_batch.max(1),
        }
    }

    pub fn phase(&self) -> ParserPhase {
        match self.phase {
            ParsePhase::Idle => ParserPhase::Idle,
            ParsePhase::Reading { .. } => ParserPhase::Reading,
            ParsePhase::Exhausted { .. } => ParserPhase::Exhausted,
        }
    }

    /// Identity of the input currently held, if any
    pub fn identity(&self) -> Option<&InputIdentity> {
        match &self.phase {
            ParsePhase::Idle => None,
            ParsePhase::Reading { identity, .. } | ParsePhase::Exhausted { identity, .. } => {
                Some(identity)
            }
        }
    }

    /// Drop the cursor and any partial store
    pub fn reset(&mut self) {
        self.phase = ParsePhase::Idle;
    }

    /// Parse `identity` to completion, resuming earlier progress when the
    /// identity is unchanged.
    ///
    /// `open` is called only when a fresh cursor is needed. On `Cancelled`
    /// the state is kept; on any other error the parser returns to Idle.
    pub fn run<F>(
        &mut self,
        identity: InputIdentity,
        open: F,
        interrupt: &mut dyn InterruptCheck,
    ) -> Result<Arc<GraphStore>>
    where
        F: FnOnce() -> Result<Box<dyn LineReader>>,
    {
        let mut state = match std::mem::replace(&mut self.phase, ParsePhase::Idle) {
            ParsePhase::Exhausted {
                identity: held,
                store,
            } if held == identity => {
                debug!(path = ?held.path, "build already complete");
                self.phase = ParsePhase::Exhausted {
                    identity: held,
                    store: Arc::clone(&store),
                };
                return Ok(store);
            }
            ParsePhase::Reading {
                identity: held,
                state,
            } if held == identity => {
                debug!(
                    path = ?held.path,
                    line = state.reader.line_number(),
                    "resuming build"
                );
                state
            }
            stale => {
                if let ParsePhase::Reading { identity: held, .. }
                | ParsePhase::Exhausted { identity: held, .. } = &stale
                {
                    debug!(path = ?held.path, "discarding stale build state");
                }
                drop(stale);

                debug!(path = ?identity.path, "starting fresh build");
                Box::new(ReadingState::new(open()?, GraphStore::new(identity.path.clone())))
            }
        };

        match state.advance(self.interrupt_batch, interrupt) {
            Ok(()) => {
                let ReadingState {
                    mut store,
                    objects_parsed,
                    ..
                } = *state;
                store.finish();
                let stats = store.stats();
                info!(
                    path = ?identity.path,
                    objects = objects_parsed,
                    entities = stats.entities,
                    containers = stats.containers,
                    assets = stats.assets,
                    "build complete"
                );

                let store = Arc::new(store);
                self.phase = ParsePhase::Exhausted {
                    identity,
                    store: Arc::clone(&store),
                };
                Ok(store)
            }
            Err(SceneCacheError::Cancelled) => {
                debug!(
                    path = ?identity.path,
                    objects = state.objects_parsed,
                    "build cancelled"
                );
                self.phase = ParsePhase::Reading { identity, state };
                Err(SceneCacheError::Cancelled)
            }
            Err(err) => Err(err),
        }
    }
}

// ============================================================
// Reading State
// ============================================================

/// Everything that must survive a suspension point.
struct ReadingState {
    reader: Box<dyn LineReader>,

    /// Last line read but not yet consumed
    pending: Option<String>,

    store: GraphStore,

    objects_parsed: usize,
}

impl ReadingState {
    fn new(reader: Box<dyn LineReader>, store: GraphStore) -> Self {
        Self {
            reader,
            pending: None,
            store,
            objects_parsed: 0,
        }
    }

    /// Consume input until exhausted, polling `interrupt` after every
    /// `batch` objects.
    ///
    /// The check runs only between objects, when `pending` holds the next
    /// object-start line (or nothing at end of input).
    fn advance(&mut self, batch: usize, interrupt: &mut dyn InterruptCheck) -> Result<()> {
        let mut dispatched = 0usize;

        loop {
            match self.pending.take() {
                Some(line) if markers::is_object_start(&line) => {
                    self.parse_object(&line)?;
                    self.objects_parsed += 1;
                    dispatched += 1;

                    if dispatched % batch == 0 {
                        interrupt.check()?;
                    }
                }
                _ => match self.reader.read_line()? {
                    Some(line) => self.pending = Some(line),
                    None => return Ok(()),
                },
            }
        }
    }

    /// Parse one object record starting at `header`.
    ///
    /// Leaves the next object-start line in `pending`, or nothing at end of input.
    fn parse_object(&mut self, header: &str) -> Result<()> {
        let id = markers::object_id(header).map_err(|e| self.malformed(e, header))?;
        trace!(id, "object");
        self.store.ensure_entity(id);

        let declaration = self.reader.read_line()?.ok_or_else(|| {
            SceneCacheError::malformed(self.reader.line_number(), "type declaration", header)
        })?;
        self.store
            .set_entity_type(id, &declaration)
            .map_err(|err| match err {
                GraphStoreError::MissingTypeDelimiter { line, .. } => {
                    SceneCacheError::malformed(self.reader.line_number(), "type declaration", line)
                }
                other => other.into(),
            })?;

        let mut next = self.reader.read_line()?;
        while let Some(line) = next.take() {
            match markers::classify(&line) {
                LineKind::ObjectStart => {
                    self.pending = Some(line);
                    return Ok(());
                }
                LineKind::ComponentArray => {
                    // the line ending the array is examined like any other
                    next = self.read_components(id)?;
                    continue;
                }
                LineKind::AssetReference => {
                    let (type_marker, guid) =
                        markers::asset_reference(&line).map_err(|e| self.malformed(e, &line))?;
                    self.store.add_asset_reference(guid, id, type_marker);
                }
                LineKind::Reference => {
                    let target =
                        markers::reference_id(&line).map_err(|e| self.malformed(e, &line))?;
                    if target != 0 {
                        self.store.add_reference(id, target);
                    }
                }
                LineKind::Other => {}
            }
            next = self.reader.read_line()?;
        }

        self.pending = None;
        Ok(())
    }

    /// Read component entries of `container`; returns the first line that is
    /// not an entry.
    fn read_components(&mut self, container: LocalId) -> Result<Option<String>> {
        loop {
            match self.reader.read_line()? {
                Some(line) if markers::is_component_entry(&line) => {
                    let component =
                        markers::reference_id(&line).map_err(|e| self.malformed(e, &line))?;
                    self.store.add_component(container, component);
                }
                other => return Ok(other),
            }
        }
    }

    fn malformed(&self, err: MalformedField, line: &str) -> SceneCacheError {
        SceneCacheError::malformed(self.reader.line_number(), err.field, line)
    }
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::features::parsing::infrastructure::BufLineReader;
    use crate::features::parsing::ports::{Cancelled, NoInterrupt};
    use crate::shared::models::StalenessToken;

    const SCENE: &str = "\
%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!1 &10
GameObject:
  m_ObjectHideFlags: 0
  m_Component:
  - component: {fileID: 11}
  - component: {fileID: 12}
  m_Layer: 0
  m_Name: Player
--- !u!4 &11
Transform:
  m_GameObject: {fileID: 10}
  m_Children: []
  m_Father: {fileID: 0}
--- !u!114 &12
MonoBehaviour:
  m_GameObject: {fileID: 10}
  m_Script: {fileID: 11500000, guid: 801a0a604e828724da83b96f51cee06d, type: 3}
";

    fn identity(revision: u64) -> InputIdentity {
        InputIdentity::new("scene.unity", StalenessToken::from_revision(revision))
    }

    fn opener(text: &'static str) -> impl FnOnce() -> Result<Box<dyn LineReader>> {
        move || Ok(Box::new(BufLineReader::from_text(text)) as Box<dyn LineReader>)
    }

    fn build(text: &'static str) -> Result<Arc<GraphStore>> {
        IncrementalParser::new(1000).run(identity(1), opener(text), &mut NoInterrupt)
    }

    #[test]
    fn test_parses_objects_components_and_references() {
        let store = build(SCENE).unwrap();

        assert!(store.is_complete());
        assert!(store.is_container(10));
        assert_eq!(store.components_of(10), Some(&[11, 12][..]));
        assert_eq!(store.entity(11).unwrap().type_name(), "Transform");
        assert_eq!(store.entity(12).unwrap().type_name(), "MonoBehaviour");
        assert_eq!(store.references_of(11), &[10]);
        assert_eq!(store.references_of(12), &[10]);
        assert_eq!(store.count_references(10), 2);
        assert_eq!(store.guid_usage("801a0a604e828724da83b96f51cee06d"), 1);
        assert_eq!(
            store.asset_type_marker("801a0a604e828724da83b96f51cee06d"),
            Some(11500000)
        );
    }

    #[test]
    fn test_component_entries_are_not_references() {
        let store = build(SCENE).unwrap();
        assert!(store.references_of(10).is_empty());
        assert_eq!(store.count_references(11), 0);
    }

    #[test]
    fn test_component_array_followed_by_object_start() {
        let text = "\
--- !u!1 &1
GameObject:
  m_Component:
  - component: {fileID: 2}
--- !u!4 &2
Transform:
  m_GameObject: {fileID: 1}
";
        let store = build(text).unwrap();
        assert_eq!(store.components_of(1), Some(&[2][..]));
        assert_eq!(store.entity(2).unwrap().type_name(), "Transform");
        assert_eq!(store.references_of(2), &[1]);
    }

    #[test]
    fn test_line_after_component_array_is_examined() {
        let text = "\
--- !u!1 &1
GameObject:
  m_Component:
  - component: {fileID: 2}
  m_Prefab: {fileID: 7}
";
        let store = build(text).unwrap();
        assert_eq!(store.references_of(1), &[7]);
    }

    #[test]
    fn test_forward_component_gets_placeholder() {
        let text = "\
--- !u!1 &1
GameObject:
  m_Component:
  - component: {fileID: 2}
  - component: {fileID: 3}
--- !u!4 &2
Transform:
  m_GameObject: {fileID: 1}
";
        let store = build(text).unwrap();
        assert!(store.contains_entity(3));
        assert!(!store.entity(3).unwrap().is_type_specified());
    }

    #[test]
    fn test_last_line_is_processed_without_trailing_newline() {
        let store = build("--- !u!4 &2\nTransform:\n  m_GameObject: {fileID: 1}").unwrap();
        assert_eq!(store.references_of(2), &[1]);
    }

    #[test]
    fn test_empty_input() {
        let store = build("").unwrap();
        assert!(store.is_complete());
        assert_eq!(store.entity_ids().count(), 0);
    }

    #[test]
    fn test_malformed_object_id_reports_line() {
        let err = build("%YAML 1.1\n--- !u!1 &abc\nGameObject:\n").unwrap_err();
        match err {
            SceneCacheError::MalformedInput { line, field, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, "object id");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_reference() {
        let err = build("--- !u!4 &2\nTransform:\n  m_Father: {fileID: 1x}\n").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
    }

    #[test]
    fn test_header_at_end_of_input_is_malformed() {
        let err = build("--- !u!4 &2\n").unwrap_err();
        assert!(matches!(
            err,
            SceneCacheError::MalformedInput {
                field: "type declaration",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_type_delimiter_is_malformed() {
        let err = build("--- !u!4 &2\nTransform\n").unwrap_err();
        assert!(matches!(err, SceneCacheError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_failure_resets_to_idle() {
        let mut parser = IncrementalParser::new(1000);
        let result = parser.run(identity(1), opener("--- !u!4 &x\n"), &mut NoInterrupt);
        assert!(result.is_err());
        assert_eq!(parser.phase(), ParserPhase::Idle);
        assert!(parser.identity().is_none());
    }

    #[test]
    fn test_exhausted_same_identity_returns_same_store() {
        let mut parser = IncrementalParser::new(1000);
        let first = parser.run(identity(1), opener(SCENE), &mut NoInterrupt).unwrap();
        assert_eq!(parser.phase(), ParserPhase::Exhausted);

        let second = parser
            .run(
                identity(1),
                || panic!("input must not be reopened"),
                &mut NoInterrupt,
            )
            .unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_changed_token_restarts() {
        let mut parser = IncrementalParser::new(1000);
        let first = parser.run(identity(1), opener(SCENE), &mut NoInterrupt).unwrap();
        let second = parser.run(identity(2), opener(SCENE), &mut NoInterrupt).unwrap();

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*first, *second);
        assert_eq!(parser.identity(), Some(&identity(2)));
    }

    #[test]
    fn test_cancel_then_resume_matches_uninterrupted() {
        let expected = build(SCENE).unwrap();

        let mut parser = IncrementalParser::new(1);
        let mut cancel = || -> std::result::Result<(), Cancelled> { Err(Cancelled) };
        let err = parser.run(identity(1), opener(SCENE), &mut cancel).unwrap_err();
        assert!(err.is_resumable());
        assert_eq!(parser.phase(), ParserPhase::Reading);

        // every call parses one object before cancelling again
        let mut attempts = 1;
        let store = loop {
            match parser.run(identity(1), || panic!("cursor must be reused"), &mut cancel) {
                Ok(store) => break store,
                Err(SceneCacheError::Cancelled) => attempts += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        };

        assert_eq!(attempts, 3);
        assert_eq!(*store, *expected);
    }

    #[test]
    fn test_interrupt_polled_once_per_batch() {
        let mut calls = 0;
        let mut count = || -> std::result::Result<(), Cancelled> {
            calls += 1;
            Ok(())
        };
        IncrementalParser::new(2)
            .run(identity(1), opener(SCENE), &mut count)
            .unwrap();
        // three objects, batch of two
        assert_eq!(calls, 1);
    }
}
