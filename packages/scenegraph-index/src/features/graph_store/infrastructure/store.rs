// Graph Store - mutable index built by the parser, read by the asset cache
//
// Entities are keyed by local identifier, assets by GUID. Forward references
// are legal: any mutation that names an unseen entity creates a placeholder.

use std::path::{Path, PathBuf};

use ahash::AHashMap;
use tracing::trace;

use crate::features::graph_store::domain::{AssetReference, SceneEntity};
use crate::features::graph_store::error::{GraphStoreError, GraphStoreResult};
use crate::shared::constants::{build::INITIAL_ENTITY_CAPACITY, entity_types, markers};
use crate::shared::models::LocalId;

/// Index of one scene file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphStore {
    /// Input the store was built from
    path: PathBuf,

    entities: AHashMap<LocalId, SceneEntity>,

    assets: AHashMap<String, AssetReference>,

    /// Set once the whole input has been consumed
    complete: bool,
}

impl GraphStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entities: AHashMap::with_capacity(INITIAL_ENTITY_CAPACITY),
            assets: AHashMap::new(),
            complete: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // ============================================================
    // Building
    // ============================================================

    /// Insert a placeholder entity if `id` is unseen
    pub fn ensure_entity(&mut self, id: LocalId) {
        self.entities
            .entry(id)
            .or_insert_with(|| SceneEntity::new(id));
    }

    /// Insert a container, or promote an existing placeholder in place
    pub fn ensure_container(&mut self, id: LocalId) {
        self.entities
            .entry(id)
            .or_insert_with(|| SceneEntity::container(id))
            .promote();
    }

    /// Record the type declared on `raw_line` (the text before the first `:`).
    ///
    /// The container sentinel promotes the entity; any other token becomes its
    /// type label. `id` must already exist.
    pub fn set_entity_type(&mut self, id: LocalId, raw_line: &str) -> GraphStoreResult<()> {
        let delimiter = raw_line.find(markers::TYPE_DELIMITER).ok_or_else(|| {
            GraphStoreError::MissingTypeDelimiter {
                id,
                line: raw_line.to_string(),
            }
        })?;
        let type_token = &raw_line[..delimiter];

        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(GraphStoreError::UnknownEntity(id))?;

        if type_token == entity_types::CONTAINER {
            entity.promote();
            return Ok(());
        }

        entity
            .specify_type(type_token)
            .map_err(|existing| GraphStoreError::TypeConflict {
                id,
                existing,
                requested: type_token.to_string(),
            })
    }

    /// Append `to` to the outgoing references of `from`
    pub fn add_reference(&mut self, from: LocalId, to: LocalId) {
        self.entities
            .entry(from)
            .or_insert_with(|| SceneEntity::new(from))
            .add_reference(to);
    }

    /// Attach `component` to `container`, creating either side as needed
    pub fn add_component(&mut self, container: LocalId, component: LocalId) {
        self.ensure_container(container);
        self.ensure_entity(component);

        if let Some(entity) = self.entities.get_mut(&container) {
            entity.push_component(component);
        }
    }

    /// Count one more occurrence of the asset `guid`.
    ///
    /// The type marker is taken from the first occurrence only.
    pub fn add_asset_reference(&mut self, guid: &str, referenced_by: LocalId, type_marker: LocalId) {
        trace!(guid, referenced_by, type_marker, "asset reference");

        match self.assets.get_mut(guid) {
            Some(asset) => asset.record_usage(),
            None => {
                self.assets
                    .insert(guid.to_string(), AssetReference::new(guid, type_marker));
            }
        }
    }

    /// Mark the store as fully built. Irreversible.
    pub fn finish(&mut self) {
        self.complete = true;
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn entity_ids(&self) -> impl Iterator<Item = LocalId> + '_ {
        self.entities.keys().copied()
    }

    pub fn entities(&self) -> impl Iterator<Item = &SceneEntity> + '_ {
        self.entities.values()
    }

    pub fn entity(&self, id: LocalId) -> Option<&SceneEntity> {
        self.entities.get(&id)
    }

    pub fn contains_entity(&self, id: LocalId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn guids(&self) -> impl Iterator<Item = &str> + '_ {
        self.assets.keys().map(String::as_str)
    }

    pub fn assets(&self) -> impl Iterator<Item = &AssetReference> + '_ {
        self.assets.values()
    }

    /// False for unknown ids
    pub fn is_container(&self, id: LocalId) -> bool {
        self.entities.get(&id).is_some_and(SceneEntity::is_container)
    }

    pub fn container_has_component(&self, container: LocalId, component: LocalId) -> bool {
        self.entities
            .get(&container)
            .is_some_and(|entity| entity.has_component(component))
    }

    /// Occurrences of `id` across every entity's reference list (full scan)
    pub fn count_references(&self, id: LocalId) -> usize {
        self.entities
            .values()
            .map(|entity| entity.count_references(id))
            .sum()
    }

    /// 0 for unknown GUIDs
    pub fn guid_usage(&self, guid: &str) -> usize {
        self.assets.get(guid).map_or(0, AssetReference::usage_count)
    }

    pub fn asset_type_marker(&self, guid: &str) -> Option<LocalId> {
        self.assets.get(guid).map(AssetReference::type_marker)
    }

    /// Outgoing references of `id`; empty for unknown ids
    pub fn references_of(&self, id: LocalId) -> &[LocalId] {
        self.entities
            .get(&id)
            .map_or(&[][..], SceneEntity::references)
    }

    /// Components of a container; `None` if `id` is not a container
    pub fn components_of(&self, id: LocalId) -> Option<&[LocalId]> {
        self.entities.get(&id).and_then(SceneEntity::components)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            entities: self.entities.len(),
            containers: self.entities.values().filter(|e| e.is_container()).count(),
            assets: self.assets.len(),
            references: self.entities.values().map(|e| e.references().len()).sum(),
        }
    }
}

// ============================================================
// Statistics
// ============================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphStats {
    pub entities: usize,
    pub containers: usize,
    pub assets: usize,
    pub references: usize,
}

// ============================================================
// Tests
// ============================================================
