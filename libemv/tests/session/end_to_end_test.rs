#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libemv::constants::{PPSE_DIRECTORY, PSE_DIRECTORY};
use libemv::prelude::*;
use libemv::protocol::encode_tlv;
use libemv::test_support::*;

#[test]
fn pse_after_failed_ppse_reports_ready() {
    common::init_logging();
    let mut m = mock_with_responses(vec![
        sw(0x6A, 0x82),
        ok(&directory_fci(PSE_DIRECTORY, &[VISA_CREDIT])),
        ok(&application_fci(VISA_CREDIT, None)),
        ok(&gpo_with_track2(&visa_track2())),
    ]);
    let mut cb = common::RecordingCallback::default();

    read_card(&mut m, ReaderConfig::default(), &mut cb);

    assert_eq!(cb.calls(), 1);
    let card = &cb.ready[0];
    assert_eq!(card.card_number().as_str(), VISA_PAN);
    assert_eq!(card.expiry_month(), "12");
    assert_eq!(card.expiry_year(), "25");
    assert_eq!(card.second_card_number(), None);
    assert!(!card.is_locked());

    let mut ppse_select = vec![0x00, 0xA4, 0x04, 0x00, 0x0E];
    ppse_select.extend_from_slice(PPSE_DIRECTORY);
    ppse_select.push(0x00);
    assert_eq!(m.sent[0], ppse_select);
    assert_eq!(&m.sent[1][5..19], PSE_DIRECTORY);
    assert!(m.is_drained());
    assert_eq!(m.close_calls, 1);
}

fn dual_application_card() -> SimulatedCard {
    SimulatedCard::new()
        .with_ppse(&[VISA_CREDIT, MASTERCARD])
        .with_application(
            VISA_CREDIT,
            Some(&[0x9F, 0x66, 0x04, 0x9F, 0x02, 0x06]),
            gpo_with_afl(&afl_sfi1_two_records()),
        )
        .with_record(1, 1, visa_record())
        .with_application(MASTERCARD, None, gpo_with_track2(&mastercard_track2()))
}

#[test]
fn second_application_fills_secondary_card() {
    let mut card = dual_application_card();
    let outcome = read_outcome(&mut card, ReaderConfig::default());

    let record = match outcome {
        ReadOutcome::Ready(r) => r,
        other => panic!("expected Ready, got: {:?}", other),
    };
    assert_eq!(record.card_number().as_str(), VISA_PAN);
    assert_eq!(record.holder_name(), Some("CARDHOLDER/VISA"));
    assert_eq!(record.service_code().map(|s| s.code()), Some("121"));
    assert_eq!(record.second_card_number().map(|n| n.as_str()), Some(MASTERCARD_PAN));
    assert_eq!(record.second_expiry_month(), "01");
    assert_eq!(record.second_expiry_year(), "27");
    assert_eq!(record.aid().map(|a| a.as_bytes()), Some(VISA_CREDIT));
    assert_eq!(record.scheme().map(|s| s.name), Some("VISA"));
    assert!(!card.connected);
}

#[test]
fn first_success_is_enough_without_second_card_capture() {
    let mut card = dual_application_card();
    let config = ReaderConfig::default().with_second_card_capture(false);
    let record = read_outcome(&mut card, config).into_result().unwrap();

    assert_eq!(record.second_card_number(), None);
    let selected_mastercard = card
        .received
        .iter()
        .any(|apdu| apdu[1] == 0xA4 && apdu.get(5..12) == Some(MASTERCARD));
    assert!(!selected_mastercard);
}

#[test]
fn record_without_track2_moves_to_next_record() {
    let mut card = SimulatedCard::new()
        .with_ppse(&[VISA_CREDIT])
        .with_application(VISA_CREDIT, None, gpo_with_afl(&afl_sfi1_two_records()))
        .with_record(1, 1, encode_tlv(&[0x70], &encode_tlv(&[0x5F, 0x20], b"ONLY/NAME")))
        .with_record(1, 2, record_with_track2(&visa_track2(), None));

    let record = read_outcome(&mut card, ReaderConfig::default()).into_result().unwrap();
    assert_eq!(record.card_number().as_str(), VISA_PAN);
    assert_eq!(record.holder_name(), Some("ONLY/NAME"));
    let reads: Vec<&Vec<u8>> = card.received.iter().filter(|a| a[1] == 0xB2).collect();
    assert_eq!(reads.len(), 2);
    assert_eq!(reads[1][..4], [0x00, 0xB2, 0x02, 0x0C]);
}

#[test]
fn format1_answer_is_stripped_to_the_afl() {
    // framing byte, AFL (SFI 1, record 1), framing byte
    let format1 = encode_tlv(&[0x80], &[0xFF, 0x08, 0x01, 0x01, 0x00, 0xFF]);
    let mut card = SimulatedCard::new()
        .with_ppse(&[VISA_CREDIT])
        .with_application(VISA_CREDIT, None, format1)
        .with_record(1, 1, visa_record());

    let record = read_outcome(&mut card, ReaderConfig::default()).into_result().unwrap();
    assert_eq!(record.card_number().as_str(), VISA_PAN);
    let last = card.received.last().unwrap();
    assert_eq!(last, &vec![0x00, 0xB2, 0x01, 0x0C, 0x00]);
}

#[test]
fn status_6c_retries_with_corrected_le() {
    let mut m = mock_with_responses(vec![
        ok(&directory_fci(PPSE_DIRECTORY, &[VISA_CREDIT])),
        ok(&application_fci(VISA_CREDIT, None)),
        ok(&gpo_with_afl(&[0x08, 0x01, 0x01, 0x00])),
        sw(0x6C, 0x04),
        ok(&visa_record()),
    ]);
    let record = read_outcome(&mut m, ReaderConfig::default()).into_result().unwrap();
    assert!(record.is_ready());
    assert_eq!(m.sent[3], vec![0x00, 0xB2, 0x01, 0x0C, 0x00]);
    assert_eq!(m.sent[4], vec![0x00, 0xB2, 0x01, 0x0C, 0x04]);
    assert_eq!(m.sent.len(), 5);
}

fn was_selected(card: &SimulatedCard, aid: &[u8]) -> bool {
    card.received.iter().any(|apdu| {
        apdu[1] == 0xA4 && apdu[4] as usize == aid.len() && apdu.get(5..5 + aid.len()) == Some(aid)
    })
}

#[test]
fn contactless_directory_stops_after_two_distinct_cards() {
    let mut card = SimulatedCard::new()
        .with_ppse(&[VISA_CREDIT, MASTERCARD, MAESTRO])
        .with_application(VISA_CREDIT, None, gpo_with_track2(&visa_track2()))
        .with_application(MASTERCARD, None, gpo_with_track2(&mastercard_track2()))
        .with_application(MAESTRO, None, gpo_with_track2(&maestro_track2()));

    let record = read_outcome(&mut card, ReaderConfig::default()).into_result().unwrap();
    assert_eq!(record.card_number().as_str(), VISA_PAN);
    assert_eq!(record.second_card_number().map(|n| n.as_str()), Some(MASTERCARD_PAN));
    assert!(was_selected(&card, VISA_CREDIT));
    assert!(was_selected(&card, MASTERCARD));
    assert!(!was_selected(&card, MAESTRO));
}

#[test]
fn contactless_directory_keeps_going_while_the_same_card_repeats() {
    // the second application reports the primary card again
    let mut card = SimulatedCard::new()
        .with_ppse(&[VISA_CREDIT, MASTERCARD, MAESTRO])
        .with_application(VISA_CREDIT, None, gpo_with_track2(&visa_track2()))
        .with_application(MASTERCARD, None, gpo_with_track2(&visa_track2()))
        .with_application(MAESTRO, None, gpo_with_track2(&maestro_track2()));

    let record = read_outcome(&mut card, ReaderConfig::default()).into_result().unwrap();
    assert_eq!(record.second_card_number().map(|n| n.as_str()), Some(MAESTRO_PAN));
    assert!(was_selected(&card, MAESTRO));
}

#[test]
fn contact_directory_stops_at_first_readable_application() {
    let mut card = SimulatedCard::new()
        .with_pse(&[VISA_CREDIT, MASTERCARD])
        .with_application(VISA_CREDIT, None, gpo_with_track2(&visa_track2()))
        .with_application(MASTERCARD, None, gpo_with_track2(&mastercard_track2()));

    let record = read_outcome(&mut card, ReaderConfig::default()).into_result().unwrap();
    assert_eq!(record.card_number().as_str(), VISA_PAN);
    assert_eq!(record.second_card_number(), None);
    assert!(!record.is_locked());
    assert!(was_selected(&card, VISA_CREDIT));
    assert!(!was_selected(&card, MASTERCARD));
}
