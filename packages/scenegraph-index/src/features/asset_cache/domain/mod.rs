// Asset Cache Domain Models

use std::fmt;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};

use crate::features::graph_store::GraphStore;
use crate::shared::models::LocalId;

// ============================================================
// Cache State
// ============================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    /// Nothing built or merged yet
    NotReady,
    /// A finished build exists but has not been merged
    Built,
    /// Queries are answered
    Ready,
}

impl CacheState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheState::NotReady => "not_ready",
            CacheState::Built => "built",
            CacheState::Ready => "ready",
        }
    }
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// Merged Index
// ============================================================

/// Finished store plus the lookups derived from it at merge time.
#[derive(Debug, Clone)]
pub struct MergedIndex {
    store: Arc<GraphStore>,

    containers: AHashSet<LocalId>,

    others: AHashSet<LocalId>,

    /// Type marker -> usage summed over every GUID declaring it
    type_marker_usage: AHashMap<LocalId, usize>,

    /// Entity -> occurrences in all reference lists. `None` means full scan.
    inbound: Option<AHashMap<LocalId, usize>>,
}

impl MergedIndex {
    pub fn new(store: Arc<GraphStore>, reverse_index: bool) -> Self {
        let (containers, others): (AHashSet<_>, AHashSet<_>) =
            store.entity_ids().partition(|&id| store.is_container(id));

        let mut type_marker_usage = AHashMap::new();
        for asset in store.assets() {
            *type_marker_usage.entry(asset.type_marker()).or_insert(0) += asset.usage_count();
        }

        let inbound = reverse_index.then(|| {
            let mut inbound = AHashMap::new();
            for target in store.entities().flat_map(|e| e.references()) {
                *inbound.entry(*target).or_insert(0) += 1;
            }
            inbound
        });

        Self {
            store,
            containers,
            others,
            type_marker_usage,
            inbound,
        }
    }

    pub fn store(&self) -> &Arc<GraphStore> {
        &self.store
    }

    pub fn is_container(&self, id: LocalId) -> bool {
        self.containers.contains(&id)
    }

    pub fn container_count(&self) -> usize {
        self.containers.len()
    }

    pub fn other_count(&self) -> usize {
        self.others.len()
    }

    pub fn type_marker_count(&self) -> usize {
        self.type_marker_usage.len()
    }

    pub fn has_reverse_index(&self) -> bool {
        self.inbound.is_some()
    }

    /// Usage of `anchor`.
    ///
    /// A known type marker answers with its aggregated asset usage before
    /// entity semantics are considered, even if an entity shares the number.
    /// A non-container additionally counts once for the first container it
    /// references, provided that container lists it as a component.
    pub fn reference_count(&self, anchor: LocalId) -> usize {
        if let Some(&total) = self.type_marker_usage.get(&anchor) {
            return total;
        }

        if self.containers.contains(&anchor) {
            self.direct_references(anchor)
        } else if self.others.contains(&anchor) {
            self.direct_references(anchor) + self.owner_credit(anchor)
        } else {
            0
        }
    }

    /// 0 for unknown GUIDs
    pub fn guid_usage(&self, guid: &str) -> usize {
        self.store.guid_usage(guid)
    }

    /// Components of a container; empty for anything else
    pub fn components(&self, id: LocalId) -> &[LocalId] {
        if !self.containers.contains(&id) {
            return &[];
        }
        self.store.components_of(id).unwrap_or(&[])
    }

    fn direct_references(&self, id: LocalId) -> usize {
        match &self.inbound {
            Some(inbound) => inbound.get(&id).copied().unwrap_or(0),
            None => self.store.count_references(id),
        }
    }

    fn owner_credit(&self, id: LocalId) -> usize {
        self.store
            .references_of(id)
            .iter()
            .find(|target| self.containers.contains(*target))
            .map_or(0, |&owner| {
                usize::from(self.store.container_has_component(owner, id))
            })
    }
}

// ============================================================
// Tests
// ============================================================
