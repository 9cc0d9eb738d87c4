#[path = "../common/mod.rs"]
mod common;

use libemv::prelude::*;

#[test]
fn success_response_splits_data_and_status() {
    let resp = ApduResponse::parse(&[0x6F, 0x00, 0x90, 0x00]).unwrap();
    assert!(resp.is_success());
    assert_eq!(resp.data, vec![0x6F, 0x00]);
    assert_eq!(resp.status, StatusWord::SUCCESS);
    assert_eq!(resp.into_result().unwrap(), vec![0x6F, 0x00]);
}

#[test]
fn wrong_le_reports_corrected_length() {
    let resp = ApduResponse::parse(&[0x6C, 0x04]).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.wrong_length(), Some(0x04));
    assert_eq!(resp.status.to_string(), "6C04 (Wrong Le field)");
}

#[test]
fn rejection_becomes_status_error() {
    let resp = ApduResponse::parse(&[0x6A, 0x82]).unwrap();
    assert_eq!(resp.wrong_length(), None);
    match resp.into_result() {
        Err(Error::StatusWord {
            sw1: 0x6A,
            sw2: 0x82,
        }) => {}
        other => panic!("expected StatusWord, got: {:?}", other),
    }
}

#[test]
fn too_short_response_is_an_error() {
    assert!(ApduResponse::parse(&[]).is_err());
    assert!(ApduResponse::parse(&[0x90]).is_err());
}
