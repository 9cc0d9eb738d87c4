#[path = "../common/mod.rs"]
mod common;

use common::fixtures::*;
use libemv::constants::PPSE_DIRECTORY;
use libemv::prelude::*;
use libemv::test_support::*;
use libemv::transport::MockTransport;

fn readable() -> MockTransport {
    mock_with_responses(vec![
        ok(&directory_fci(PPSE_DIRECTORY, &[VISA_CREDIT])),
        ok(&application_fci(VISA_CREDIT, None)),
        ok(&gpo_with_track2(&visa_track2())),
    ])
}

#[test]
fn closed_once_after_success() {
    let mut m = readable();
    assert!(read_outcome(&mut m, ReaderConfig::default()).is_ready());
    assert_eq!((m.connect_calls, m.close_calls), (1, 1));
}

#[test]
fn closed_once_after_no_data() {
    let mut m = mock_with_responses(vec![sw(0x6A, 0x82), sw(0x6A, 0x82)]);
    let outcome = read_outcome(&mut m, ReaderConfig::default().with_scheme_fallback(false));
    assert_eq!(outcome, ReadOutcome::Transient);
    assert_eq!((m.connect_calls, m.close_calls), (1, 1));
}

#[test]
fn close_failure_does_not_change_the_outcome() {
    let mut m = readable();
    m.fail_close = true;
    let mut cb = common::RecordingCallback::default();
    read_card(&mut m, ReaderConfig::default(), &mut cb);
    assert_eq!((cb.ready.len(), cb.calls()), (1, 1));
    assert_eq!(m.close_calls, 1);
}

#[test]
fn connect_failure_sends_nothing() {
    let mut m = MockTransport {
        fail_connect: true,
        ..Default::default()
    };
    let mut cb = common::RecordingCallback::default();
    read_card(&mut m, ReaderConfig::default(), &mut cb);
    assert_eq!((cb.permanent, cb.calls()), (1, 1));
    assert!(m.sent.is_empty());
    assert_eq!(m.close_calls, 0);
}

#[test]
fn boxed_transport_through_reader() {
    let mut reader = CardReader::builder()
        .with_transport(Box::new(readable()))
        .build()
        .unwrap();
    let mut cb = common::RecordingCallback::default();
    reader.read_with(&mut cb);
    assert_eq!(cb.ready.len(), 1);
    // queue is empty now: the next tap finds nothing
    assert_eq!(reader.read(), ReadOutcome::Transient);
}
