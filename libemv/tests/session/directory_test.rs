#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libemv::constants::PPSE_DIRECTORY;
use libemv::prelude::*;
use libemv::protocol::encode_tlv;
use libemv::tags;
use libemv::test_support::*;

fn entry(aid: &[u8], kernel: Option<&[u8]>) -> Vec<u8> {
    let mut body = encode_tlv(tags::AID_CARD, aid);
    if let Some(k) = kernel {
        body.extend(encode_tlv(tags::KERNEL_IDENTIFIER, k));
    }
    encode_tlv(&[0x61], &body)
}

fn ppse_answer(entries: &[Vec<u8>]) -> Vec<u8> {
    let issuer = encode_tlv(&[0xBF, 0x0C], &entries.concat());
    let mut body = encode_tlv(&[0x84], PPSE_DIRECTORY);
    body.extend(encode_tlv(&[0xA5], &issuer));
    ok(&encode_tlv(&[0x6F], &body))
}

fn selected_names(sent: &[Vec<u8>]) -> Vec<Vec<u8>> {
    sent.iter()
        .filter(|a| a[1] == 0xA4)
        .map(|a| a[5..a.len() - 1].to_vec())
        .collect()
}

fn ppse_only() -> ReaderConfig {
    ReaderConfig::default()
        .with_pse(false)
        .with_scheme_fallback(false)
}

#[test]
fn kernel_identifier_joins_aid_once_two_are_listed() {
    let mut m = mock_with_responses(vec![
        ppse_answer(&[entry(VISA_CREDIT, None), entry(MASTERCARD, Some(&[0x02]))]),
        sw(0x6A, 0x82),
        sw(0x6A, 0x82),
    ]);
    read_outcome(&mut m, ppse_only());

    let mut joined = MASTERCARD.to_vec();
    joined.push(0x02);
    assert_eq!(
        selected_names(&m.sent),
        vec![PPSE_DIRECTORY.to_vec(), VISA_CREDIT.to_vec(), joined]
    );
}

#[test]
fn kernel_identifier_after_single_aid_is_tried_separately() {
    let mut m = mock_with_responses(vec![
        ppse_answer(&[entry(VISA_CREDIT, Some(&[0x03]))]),
        sw(0x6A, 0x82),
        sw(0x6A, 0x82),
    ]);
    read_outcome(&mut m, ppse_only());

    assert_eq!(
        selected_names(&m.sent),
        vec![PPSE_DIRECTORY.to_vec(), VISA_CREDIT.to_vec(), vec![0x03]]
    );
}

#[test]
fn directory_record_is_read_through_its_sfi() {
    let listing = encode_tlv(&[0x70], &entry(VISA_CREDIT, None));
    let mut m = mock_with_responses(vec![
        ok(&directory_fci_with_sfi(PPSE_DIRECTORY, 2)),
        ok(&listing),
        ok(&application_fci(VISA_CREDIT, None)),
        ok(&gpo_with_track2(&visa_track2())),
    ]);
    let record = read_outcome(&mut m, ppse_only()).into_result().unwrap();
    assert_eq!(record.card_number().as_str(), VISA_PAN);
    // P1 carries the SFI, P2 = SFI << 3 | 4
    assert_eq!(m.sent[1], vec![0x00, 0xB2, 0x02, 0x14, 0x00]);
}

#[test]
fn refused_directory_record_lists_nothing() {
    let mut m = mock_with_responses(vec![
        ok(&directory_fci_with_sfi(PPSE_DIRECTORY, 1)),
        sw(0x6A, 0x83),
    ]);
    match read_outcome(&mut m, ppse_only()) {
        ReadOutcome::Transient => {}
        other => panic!("expected Transient, got: {:?}", other),
    }
    assert_eq!(m.sent.len(), 2);
}
