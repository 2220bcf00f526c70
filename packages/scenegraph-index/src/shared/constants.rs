//! Centralized constants
//!
//! Lexical markers of the scene format and tunable defaults live here so the
//! parser, the store and the configuration agree on a single definition.

/// Lexical markers recognised by the line scanner.
///
/// The scanner is substring-based: a line "matches" a marker when it contains it.
pub mod markers {
    /// Starts every object record, e.g. `--- !u!1 &705507993`
    pub const OBJECT_START: &str = "--- !u!";

    /// Separates the class tag from the local identifier on an object-start line
    pub const OBJECT_ID_DELIMITER: char = '&';

    /// Field-id marker inside an inline reference, e.g. `{fileID: 4}`
    pub const FILE_ID: &str = "fileID:";

    /// GUID field inside an asset reference (surrounding comma/space included)
    pub const GUID: &str = ", guid: ";

    /// Header line of a container's component array
    pub const COMPONENT_ARRAY: &str = "m_Component:";

    /// Prefix token of every component entry line, e.g. `- component: {fileID: 4}`
    pub const COMPONENT_ENTRY: &str = "component";

    /// Inline empty array literal
    pub const EMPTY_ARRAY: &str = "[]";

    /// Terminates the type token on a declaration line, e.g. `GameObject:`
    pub const TYPE_DELIMITER: char = ':';

    /// Closes an inline reference mapping
    pub const REFERENCE_CLOSE: char = '}';

    /// Separates trailing fields of an asset reference
    pub const FIELD_SEPARATOR: char = ',';
}

/// Entity type labels
pub mod entity_types {
    /// Declared type of entities that own a component array
    pub const CONTAINER: &str = "GameObject";

    /// Type label of an entity whose declaration line has not been seen yet
    pub const UNSPECIFIED: &str = "Unspecified";
}

/// Build loop defaults
pub mod build {
    /// Object dispatches between two interruption checks
    pub const DEFAULT_INTERRUPT_BATCH: usize = 1000;

    /// Initial capacity hint for the entity map (reduces rehashing on large scenes)
    pub const INITIAL_ENTITY_CAPACITY: usize = 1024;
}
