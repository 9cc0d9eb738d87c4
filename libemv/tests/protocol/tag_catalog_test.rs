#[path = "../common/mod.rs"]
mod common;

use libemv::prelude::*;
use libemv::types::{TagClass, TagStructure, ValueType};

#[test]
fn known_tags() {
    let pdol = TagCatalog::find(&[0x9F, 0x38]);
    assert_eq!(pdol.name(), "Processing Options Data Object List (PDOL)");
    assert_eq!(pdol.value_type(), ValueType::Dol);
    assert_eq!(pdol.class(), TagClass::ContextSpecific);
    assert_eq!(pdol.structure(), TagStructure::Primitive);

    let name = TagCatalog::find(&[0x5F, 0x20]);
    assert_eq!(name.value_type(), ValueType::Text);
    assert_eq!(name.class(), TagClass::Application);
}

#[test]
fn hex_lookup_ignores_case_and_spaces() {
    let a = TagCatalog::find_by_hex("bf0c").unwrap();
    let b = TagCatalog::find_by_hex("BF 0C").unwrap();
    assert_eq!(a, b);
    assert!(a.is_constructed());
    assert!(!a.is_unknown());
}

#[test]
fn unknown_tag_is_a_placeholder() {
    let t = TagCatalog::find(&[0x9F, 0x7F, 0x01]);
    assert!(t.is_unknown());
    assert_eq!(t.id(), &[0x9F, 0x7F, 0x01]);
    assert_eq!(t.id_hex(), "9F7F01");
    assert!(!TagCatalog::contains(&[0x9F, 0x7F, 0x01]));
}

#[test]
fn bad_hex_is_rejected() {
    match TagCatalog::find_by_hex("9G") {
        Err(Error::InvalidHex(_)) => {}
        other => panic!("expected InvalidHex, got: {:?}", other),
    }
}
