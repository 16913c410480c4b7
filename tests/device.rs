use ::multitouch_decoder::protocol::*;
use ::multitouch_decoder::{DecoderError, EventDecoder, RawEvent, Slot};
use ::nix::errno::Errno;
use ::std::io::Write;
use ::tempfile::{tempdir, NamedTempFile};

fn recording(events: Vec<RawEvent>) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    for event in events {
        file.write_all(&event.to_bytes()).unwrap();
    }
    file.flush().unwrap();
    file
}

#[test]
fn open_fails_for_missing_devices() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("event99");
    match EventDecoder::open(&path, false) {
        Err(error @ DecoderError::Open { .. }) => {
            assert_eq!(error.errno(), Some(Errno::ENOENT as i32))
        }
        result => panic!("expected an open error, got {:?}", result),
    }
}

#[test]
fn grabbing_fails_for_files_that_are_no_input_devices() {
    let file = recording(vec![]);
    match EventDecoder::open(file.path(), true) {
        Err(error @ DecoderError::Grab { .. }) => assert!(error.errno().is_some()),
        result => panic!("expected a grab error, got {:?}", result),
    }
}

#[test]
fn decodes_recorded_streams() {
    let file = recording(vec![
        RawEvent::new(EV_ABS, ABS_MT_SLOT, 1),
        RawEvent::new(EV_ABS, ABS_MT_TRACKING_ID, 12),
        RawEvent::new(EV_ABS, ABS_MT_POSITION_X, 10),
        RawEvent::new(EV_ABS, ABS_MT_POSITION_Y, 20),
        RawEvent::new(EV_ABS, ABS_MT_PRESSURE, 30),
        RawEvent::new(EV_SYN, SYN_REPORT, 0),
    ]);
    let mut decoder = EventDecoder::open(file.path(), false).unwrap();
    assert!(decoder.fetch_events().unwrap());
    assert_eq!(
        decoder.slots_state().get(&1),
        Some(&Slot {
            x: 10,
            y: 20,
            pressure: 30,
            orientation: 0,
        })
    );
    assert!(decoder.previous_slots_state().is_empty());
    assert!(!decoder.fetch_events().unwrap());
}
