#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libemv::prelude::*;
use libemv::test_support::*;
use libemv::transport::MockTransport;

const MASTERCARD_RID: &[u8] = &[0xA0, 0x00, 0x00, 0x00, 0x04];

#[test]
fn scheme_aids_are_tried_in_table_order() {
    let mut card = SimulatedCard::new().with_application(
        MASTERCARD_RID,
        None,
        gpo_with_track2(&mastercard_track2()),
    );

    let record = read_outcome(&mut card, ReaderConfig::default()).into_result().unwrap();
    assert_eq!(record.card_number().as_str(), MASTERCARD_PAN);
    assert!(!record.is_locked());
    assert_eq!(record.scheme().map(|s| s.name), Some("Master card"));

    let selected: Vec<&[u8]> = card
        .received
        .iter()
        .filter(|a| a[1] == 0xA4)
        .map(|a| &a[5..a.len() - 1])
        .collect();
    let position = SchemeCatalog::all()
        .iter()
        .position(|s| s.id == "MASTER_CARD")
        .unwrap();
    // both directories, then every scheme up to and including the match
    assert_eq!(selected.len(), 2 + position + 1);
    assert_eq!(selected[2], SchemeCatalog::all()[0].aid);
    assert_eq!(*selected.last().unwrap(), MASTERCARD_RID);
}

#[test]
fn disabled_fallback_reports_transient() {
    let mut card = SimulatedCard::new().with_application(
        MASTERCARD_RID,
        None,
        gpo_with_track2(&mastercard_track2()),
    );
    let mut cb = common::RecordingCallback::default();
    read_card(
        &mut card,
        ReaderConfig::default().with_scheme_fallback(false),
        &mut cb,
    );
    assert_eq!((cb.transient, cb.calls()), (1, 1));
    assert_eq!(card.received.len(), 2);
}

#[test]
fn unknown_directory_application_falls_through_to_schemes() {
    let mut card = SimulatedCard::new()
        .with_ppse(&[UNKNOWN_AID])
        .with_application(MASTERCARD_RID, None, gpo_with_track2(&mastercard_track2()));
    let record = read_outcome(&mut card, ReaderConfig::default()).into_result().unwrap();
    assert_eq!(record.card_number().as_str(), MASTERCARD_PAN);
}

#[test]
fn card_that_never_answers_is_transient() {
    let mut m = MockTransport::new();
    let mut cb = common::RecordingCallback::default();
    read_card(&mut m, ReaderConfig::default(), &mut cb);
    assert_eq!((cb.transient, cb.calls()), (1, 1));
    // two directories plus every scheme AID, one command each
    assert_eq!(m.sent.len(), 2 + SchemeCatalog::all().len());
}
