//! Line classification and field extraction
//!
//! The scene format is scanned with substring heuristics, not a grammar.
//! Extraction is strict: a numeric token that does not parse as `u64` is an
//! error, never skipped.

use crate::shared::constants::markers;
use crate::shared::models::LocalId;

/// Field that could not be extracted from a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedField {
    pub field: &'static str,
}

impl MalformedField {
    const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

/// What a single line means to the object parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `--- !u!<class> &<id>`
    ObjectStart,
    /// Non-empty `m_Component:` header; entries follow on the next lines
    ComponentArray,
    /// `{fileID: <type>, guid: <guid>, ...}`
    AssetReference,
    /// `{fileID: <id>}`
    Reference,
    Other,
}

pub fn classify(line: &str) -> LineKind {
    if is_object_start(line) {
        LineKind::ObjectStart
    } else if is_component_array(line) {
        LineKind::ComponentArray
    } else if line.contains(markers::FILE_ID) {
        if line.contains(markers::GUID) {
            LineKind::AssetReference
        } else {
            LineKind::Reference
        }
    } else {
        LineKind::Other
    }
}

#[inline]
pub fn is_object_start(line: &str) -> bool {
    line.contains(markers::OBJECT_START)
}

/// Component array header with at least one entry
#[inline]
pub fn is_component_array(line: &str) -> bool {
    line.contains(markers::COMPONENT_ARRAY) && !line.contains(markers::EMPTY_ARRAY)
}

#[inline]
pub fn is_component_entry(line: &str) -> bool {
    line.contains(markers::COMPONENT_ENTRY)
}

/// Local identifier of an object-start line: the token after the first `&`.
///
/// Trailing words such as `stripped` are ignored.
pub fn object_id(line: &str) -> Result<LocalId, MalformedField> {
    const FIELD: MalformedField = MalformedField::new("object id");

    let start = line.find(markers::OBJECT_ID_DELIMITER).ok_or(FIELD)? + 1;
    let token = line[start..].split_whitespace().next().ok_or(FIELD)?;
    parse_local_id(token).ok_or(FIELD)
}

/// Referenced identifier: the text between the last `:` and the last `}`.
pub fn reference_id(line: &str) -> Result<LocalId, MalformedField> {
    const FIELD: MalformedField = MalformedField::new("reference");

    let start = line.rfind(':').ok_or(FIELD)? + 1;
    let end = line.rfind(markers::REFERENCE_CLOSE).ok_or(FIELD)?;
    if end < start {
        return Err(FIELD);
    }
    parse_local_id(&line[start..end]).ok_or(FIELD)
}

/// `(type marker, guid)` of an asset reference line.
///
/// The type marker sits between the last `fileID:` and the last `, guid: `;
/// the GUID runs from there to the next `,` (or `}` when no field follows).
pub fn asset_reference(line: &str) -> Result<(LocalId, &str), MalformedField> {
    const TYPE_FIELD: MalformedField = MalformedField::new("asset type id");
    const GUID_FIELD: MalformedField = MalformedField::new("guid");

    let type_start = line.rfind(markers::FILE_ID).ok_or(TYPE_FIELD)? + markers::FILE_ID.len();
    let type_end = line.rfind(markers::GUID).ok_or(GUID_FIELD)?;
    if type_end < type_start {
        return Err(TYPE_FIELD);
    }
    let type_marker = parse_local_id(&line[type_start..type_end]).ok_or(TYPE_FIELD)?;

    let guid_start = type_end + markers::GUID.len();
    let rest = &line[guid_start..];
    let guid_end = rest
        .rfind(markers::FIELD_SEPARATOR)
        .or_else(|| rest.rfind(markers::REFERENCE_CLOSE))
        .ok_or(GUID_FIELD)?;
    let guid = rest[..guid_end].trim();
    if guid.is_empty() {
        return Err(GUID_FIELD);
    }

    Ok((type_marker, guid))
}

fn parse_local_id(token: &str) -> Option<LocalId> {
    token.trim().parse().ok()
}
