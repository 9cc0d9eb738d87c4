#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libemv::constants::PPSE_DIRECTORY;
use libemv::prelude::*;
use libemv::session::EmvSession;
use libemv::test_support::*;
use libemv::transport::MockTransport;

fn ppse_only() -> ReaderConfig {
    ReaderConfig::default()
        .with_pse(false)
        .with_scheme_fallback(false)
}

#[test]
fn failure_during_gpo_moves_to_next_application() {
    let mut m = MockTransport::new();
    m.push_response(ok(&directory_fci(PPSE_DIRECTORY, &[VISA_CREDIT, MASTERCARD])));
    m.push_response(ok(&application_fci(VISA_CREDIT, None)));
    m.push_failure("tag was lost");
    m.push_response(ok(&application_fci(MASTERCARD, None)));
    m.push_response(ok(&gpo_with_track2(&mastercard_track2())));

    let mut session = EmvSession::open(&mut m, ppse_only()).unwrap();
    assert!(session.run());
    assert_eq!(session.transport_failures(), 1);
    assert_eq!(session.state(), SessionState::Done);
    let record = session.finish();
    assert_eq!(record.card_number().as_str(), MASTERCARD_PAN);
    assert_eq!(record.aid().map(|a| a.as_bytes()), Some(MASTERCARD));
}

#[test]
fn failure_during_record_read_skips_remaining_records() {
    let mut m = MockTransport::new();
    m.push_response(ok(&directory_fci(PPSE_DIRECTORY, &[VISA_CREDIT])));
    m.push_response(ok(&application_fci(VISA_CREDIT, None)));
    m.push_response(ok(&gpo_with_afl(&afl_sfi1_two_records())));
    m.push_failure("tag was lost");
    m.push_response(ok(&visa_record()));

    let outcome = read_outcome(&mut m, ppse_only());
    assert_eq!(outcome, ReadOutcome::Transient);
    // record 2 was never requested, so its answer is still queued
    assert_eq!(m.sent.len(), 4);
    assert!(!m.is_drained());
    assert_eq!(m.close_calls, 1);
}

#[test]
fn truncated_answer_is_not_a_crash() {
    let mut m = mock_with_responses(vec![vec![0x90]]);
    let outcome = read_outcome(&mut m, ppse_only());
    assert_eq!(outcome, ReadOutcome::Transient);
}
