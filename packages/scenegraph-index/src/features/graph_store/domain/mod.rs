// Graph Store Domain Models
//
// Pure domain models: no parsing, no I/O.

use crate::shared::constants::entity_types;
use crate::shared::models::LocalId;

// ============================================================
// Scene Entity
// ============================================================

/// What an entity is, as far as the store knows.
///
/// `Plain` starts without a type label; the label is filled in once the
/// declaration line has been read. `Container` is terminal: a container is
/// never demoted back to `Plain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Plain { type_label: Option<String> },
    Container { components: Vec<LocalId> },
}

/// Object of one scene file, keyed by its local identifier.
///
/// The outgoing reference list lives next to the kind so that promoting a
/// placeholder to a container keeps every reference recorded so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneEntity {
    id: LocalId,
    references: Vec<LocalId>,
    kind: EntityKind,
}

impl SceneEntity {
    /// Placeholder entity with unspecified type
    pub fn new(id: LocalId) -> Self {
        Self {
            id,
            references: Vec::new(),
            kind: EntityKind::Plain { type_label: None },
        }
    }

    /// Container entity with no components yet
    pub fn container(id: LocalId) -> Self {
        Self {
            id,
            references: Vec::new(),
            kind: EntityKind::Container {
                components: Vec::new(),
            },
        }
    }

    pub fn id(&self) -> LocalId {
        self.id
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn is_container(&self) -> bool {
        matches!(self.kind, EntityKind::Container { .. })
    }

    /// Declared type, or the `Unspecified` sentinel
    pub fn type_name(&self) -> &str {
        match &self.kind {
            EntityKind::Plain {
                type_label: Some(label),
            } => label,
            EntityKind::Plain { type_label: None } => entity_types::UNSPECIFIED,
            EntityKind::Container { .. } => entity_types::CONTAINER,
        }
    }

    pub fn is_type_specified(&self) -> bool {
        !matches!(self.kind, EntityKind::Plain { type_label: None })
    }

    /// Turn a plain entity into a container in place. No-op for containers.
    pub fn promote(&mut self) {
        if let EntityKind::Plain { .. } = self.kind {
            self.kind = EntityKind::Container {
                components: Vec::new(),
            };
        }
    }

    /// Record the declared type of a plain entity.
    ///
    /// Returns the label already held if it differs from `label`.
    pub(crate) fn specify_type(&mut self, label: &str) -> Result<(), String> {
        match &mut self.kind {
            EntityKind::Plain { type_label } => match type_label {
                None => {
                    *type_label = Some(label.to_string());
                    Ok(())
                }
                Some(existing) if existing == label => Ok(()),
                Some(existing) => Err(existing.clone()),
            },
            EntityKind::Container { .. } => Err(entity_types::CONTAINER.to_string()),
        }
    }

    pub fn add_reference(&mut self, target: LocalId) {
        self.references.push(target);
    }

    /// Outgoing references in insertion order (duplicates kept)
    pub fn references(&self) -> &[LocalId] {
        &self.references
    }

    /// Occurrences of `target` in the outgoing reference list
    pub fn count_references(&self, target: LocalId) -> usize {
        self.references.iter().filter(|&&r| r == target).count()
    }

    /// Component list; `None` for plain entities
    pub fn components(&self) -> Option<&[LocalId]> {
        match &self.kind {
            EntityKind::Container { components } => Some(components),
            EntityKind::Plain { .. } => None,
        }
    }

    pub fn has_component(&self, component: LocalId) -> bool {
        self.components()
            .is_some_and(|components| components.contains(&component))
    }

    /// Append a component; returns false if this entity is not a container
    pub(crate) fn push_component(&mut self, component: LocalId) -> bool {
        match &mut self.kind {
            EntityKind::Container { components } => {
                components.push(component);
                true
            }
            EntityKind::Plain { .. } => false,
        }
    }
}

// ============================================================
// Asset Reference
// ============================================================

/// External asset referenced from the scene, keyed by GUID.
///
/// Only the number of referencing occurrences is kept, not who referenced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetReference {
    guid: String,
    type_marker: LocalId,
    usage_count: usize,
}

impl AssetReference {
    /// First occurrence of an asset
    pub fn new(guid: impl Into<String>, type_marker: LocalId) -> Self {
        Self {
            guid: guid.into(),
            type_marker,
            usage_count: 1,
        }
    }

    pub fn guid(&self) -> &str {
        &self.guid
    }

    /// Type marker recorded by the first occurrence
    pub fn type_marker(&self) -> LocalId {
        self.type_marker
    }

    pub fn usage_count(&self) -> usize {
        self.usage_count
    }

    pub(crate) fn record_usage(&mut self) {
        self.usage_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entity_is_unspecified_placeholder() {
        let entity = SceneEntity::new(7);
        assert_eq!(entity.id(), 7);
        assert!(!entity.is_container());
        assert!(!entity.is_type_specified());
        assert_eq!(entity.type_name(), "Unspecified");
        assert!(entity.components().is_none());
    }

    #[test]
    fn test_promote_keeps_references() {
        let mut entity = SceneEntity::new(1);
        entity.add_reference(2);
        entity.add_reference(3);
        entity.add_reference(2);

        entity.promote();

        assert!(entity.is_container());
        assert_eq!(entity.references(), &[2, 3, 2]);
        assert_eq!(entity.count_references(2), 2);
        assert_eq!(entity.components(), Some(&[][..]));
        assert_eq!(entity.type_name(), "GameObject");
    }

    #[test]
    fn test_promote_container_is_noop() {
        let mut entity = SceneEntity::container(1);
        assert!(entity.push_component(5));
        entity.promote();
        assert_eq!(entity.components(), Some(&[5][..]));
    }

    #[test]
    fn test_specify_type_once() {
        let mut entity = SceneEntity::new(1);
        assert!(entity.specify_type("Transform").is_ok());
        assert!(entity.specify_type("Transform").is_ok());
        assert_eq!(entity.specify_type("Camera"), Err("Transform".to_string()));
        assert_eq!(entity.type_name(), "Transform");
    }

    #[test]
    fn test_plain_entity_rejects_components() {
        let mut entity = SceneEntity::new(1);
        assert!(!entity.push_component(2));
        assert!(!entity.has_component(2));
    }

    #[test]
    fn test_asset_usage_counting() {
        let mut asset = AssetReference::new("abc", 11500000);
        asset.record_usage();
        asset.record_usage();
        assert_eq!(asset.usage_count(), 3);
        assert_eq!(asset.type_marker(), 11500000);
        assert_eq!(asset.guid(), "abc");
    }
}
