// libemv/src/tags/mod.rs

//! Tag metadata and the process-wide tag catalog.
//!
//! The catalog is built lazily on first lookup from the static table in
//! [`catalog`] and never mutated afterwards. Lookups for identifiers that
//! are not in the table return a placeholder descriptor so decoding never
//! aborts on an unrecognised tag.

mod catalog;

use crate::types::{TagClass, TagStructure, ValueType};
use crate::utils::{bytes_to_hex, parse_hex};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Name given to tags that are not in the catalog.
pub const UNKNOWN_TAG_NAME: &str = "[UNKNOWN TAG]";

/// Application Identifier (AID) - card
pub const AID_CARD: &[u8] = &[0x4F];
/// Short File Identifier (SFI)
pub const SFI: &[u8] = &[0x88];
/// Track 2 Equivalent Data
pub const TRACK_2_EQV_DATA: &[u8] = &[0x57];
/// Response Message Template Format 1
pub const RESPONSE_MESSAGE_TEMPLATE_1: &[u8] = &[0x80];
/// Command Template
pub const COMMAND_TEMPLATE: &[u8] = &[0x83];
/// Application File Locator (AFL)
pub const APPLICATION_FILE_LOCATOR: &[u8] = &[0x94];
/// Processing Options Data Object List (PDOL)
pub const PDOL: &[u8] = &[0x9F, 0x38];
/// Cardholder Name
pub const CARDHOLDER_NAME: &[u8] = &[0x5F, 0x20];
/// Terminal Transaction Qualifiers (TTQ)
pub const TERMINAL_TRANSACTION_QUALIFIERS: &[u8] = &[0x9F, 0x66];
/// Track 2 Data
pub const TRACK_2_DATA: &[u8] = &[0x9F, 0x6B];
/// Kernel Identifier
pub const KERNEL_IDENTIFIER: &[u8] = &[0x9F, 0x2A];

/// Metadata for one BER-TLV tag identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagDescriptor {
    id: Vec<u8>,
    value_type: ValueType,
    name: &'static str,
    description: &'static str,
}

impl TagDescriptor {
    /// Placeholder for an identifier the catalog does not know.
    pub fn unknown(id: &[u8]) -> Self {
        Self {
            id: id.to_vec(),
            value_type: ValueType::Binary,
            name: UNKNOWN_TAG_NAME,
            description: "",
        }
    }

    /// Identifier bytes.
    pub fn id(&self) -> &[u8] {
        &self.id
    }

    /// Identifier as upper-case hex, e.g. `"9F38"`.
    pub fn id_hex(&self) -> String {
        bytes_to_hex(&self.id)
    }

    /// Class from bits 8-7 of the first byte.
    pub fn class(&self) -> TagClass {
        TagClass::from_first_byte(self.first_byte())
    }

    /// Primitive or constructed, from bit 6 of the first byte.
    pub fn structure(&self) -> TagStructure {
        TagStructure::from_first_byte(self.first_byte())
    }

    /// The value holds nested objects.
    pub fn is_constructed(&self) -> bool {
        self.structure() == TagStructure::Constructed
    }

    /// How the value bytes are formatted.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Short name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Longer description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// The tag is not in the catalog.
    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_TAG_NAME
    }

    /// True when this descriptor has the identifier `id`.
    pub fn matches(&self, id: &[u8]) -> bool {
        self.id == id
    }

    fn first_byte(&self) -> u8 {
        self.id.first().copied().unwrap_or(0)
    }
}

impl std::fmt::Display for TagDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.id_hex(), self.name)
    }
}

static CATALOG: Lazy<HashMap<Vec<u8>, TagDescriptor>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(catalog::ENTRIES.len());
    for &(hex_id, value_type, name, description) in catalog::ENTRIES {
        let Ok(id) = parse_hex(hex_id) else {
            continue;
        };
        map.entry(id.clone()).or_insert(TagDescriptor {
            id,
            value_type,
            name,
            description,
        });
    }
    map
});

/// Read-only lookup over the known tag table.
pub struct TagCatalog;

impl TagCatalog {
    /// Look up a tag by its identifier bytes. Never fails: unknown
    /// identifiers yield [`TagDescriptor::unknown`].
    pub fn find(id: &[u8]) -> TagDescriptor {
        CATALOG
            .get(id)
            .cloned()
            .unwrap_or_else(|| TagDescriptor::unknown(id))
    }

    /// Look up a tag by its hex identifier, ignoring case and whitespace.
    pub fn find_by_hex(hex_id: &str) -> crate::Result<TagDescriptor> {
        Ok(Self::find(&parse_hex(hex_id)?))
    }

    /// `id` is catalogued.
    pub fn contains(id: &[u8]) -> bool {
        CATALOG.contains_key(id)
    }

    /// Number of catalogued tags.
    pub fn len() -> usize {
        CATALOG.len()
    }
}
