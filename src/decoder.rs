use crate::device::Device;
use crate::error::DecoderError;
use crate::protocol::{Field, RawEvent, INPUT_EVENT_SIZE, SYN_DROPPED, SYN_REPORT, TRACKING_ID_NONE};
use crate::slots::{SlotIndex, SlotTable};
use ::std::io::{self, Read};
use ::std::path::Path;
use ::tracing::{debug, trace, warn};

/// Decodes a multi-touch event stream into slot tables.
///
/// Data records are buffered until the next synchronization marker and only
/// then applied, in arrival order, to the current table. The table as it was
/// before the first change of the latest change-bearing [`fetch_events`] call
/// is kept as the previous table.
///
/// [`fetch_events`]: EventDecoder::fetch_events
#[derive(Debug)]
pub struct EventDecoder<R = Device> {
    stream: R,
    slots: SlotTable,
    previous_slots: SlotTable,
    pending: Vec<RawEvent>,
    // starts at slot 0 until the device selects one explicitly
    current_slot: SlotIndex,
    // set by SYN_DROPPED, everything up to the next SYN_REPORT is discarded
    dropping: bool,
}

impl EventDecoder<Device> {
    pub fn open(path: impl AsRef<Path>, grab: bool) -> Result<EventDecoder<Device>, DecoderError> {
        Ok(EventDecoder::from_stream(Device::open(path.as_ref(), grab)?))
    }
}

impl<R: Read> EventDecoder<R> {
    /// Decodes from any reader. The reader should behave like a non-blocking
    /// device: `WouldBlock` or end of stream when no more records are available.
    pub fn from_stream(stream: R) -> EventDecoder<R> {
        EventDecoder {
            stream,
            slots: SlotTable::new(),
            previous_slots: SlotTable::new(),
            pending: Vec::with_capacity(8),
            current_slot: 0,
            dropping: false,
        }
    }

    /// Drains all records that are currently available and applies them.
    /// Returns whether the slot table changed.
    pub fn fetch_events(&mut self) -> Result<bool, DecoderError> {
        let mut has_changes = false;
        while let Some(event) = self.read_event()? {
            if event.is_sync() {
                self.synchronize(event, &mut has_changes);
            } else if !self.dropping {
                self.pending.push(event);
            }
        }
        if has_changes {
            debug!(slots = self.slots.len(), "slot table changed");
        }
        Ok(has_changes)
    }

    /// The table as of the last completed fetch.
    pub fn slots_state(&self) -> &SlotTable {
        &self.slots
    }

    /// The table before the most recent change-bearing fetch.
    pub fn previous_slots_state(&self) -> &SlotTable {
        &self.previous_slots
    }

    fn read_event(&mut self) -> Result<Option<RawEvent>, DecoderError> {
        let mut buffer = [0; INPUT_EVENT_SIZE];
        match self.stream.read(&mut buffer) {
            Ok(0) => Ok(None),
            Ok(length) if length == INPUT_EVENT_SIZE => Ok(Some(RawEvent::from_bytes(&buffer))),
            Ok(length) => Err(DecoderError::Read(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("short read: {} of {} bytes", length, INPUT_EVENT_SIZE),
            ))),
            Err(ref error) if error.kind() == io::ErrorKind::WouldBlock => Ok(None),
            Err(error) => Err(DecoderError::Read(error)),
        }
    }

    fn synchronize(&mut self, marker: RawEvent, has_changes: &mut bool) {
        if marker.code == SYN_DROPPED {
            warn!(
                discarded = self.pending.len(),
                "device dropped events, skipping to the next report"
            );
            self.pending.clear();
            self.dropping = true;
            return;
        }
        if self.dropping {
            if marker.code == SYN_REPORT {
                self.dropping = false;
            }
            return;
        }
        if !*has_changes {
            *has_changes = true;
            self.previous_slots = self.slots.clone();
        }
        let EventDecoder {
            slots,
            pending,
            current_slot,
            ..
        } = self;
        for event in pending.drain(..) {
            apply(slots, current_slot, &event);
        }
    }
}

fn apply(slots: &mut SlotTable, current_slot: &mut SlotIndex, event: &RawEvent) {
    let field = match Field::from_event(event) {
        Some(field) => field,
        None => return,
    };
    trace!(?field, slot = *current_slot, value = event.value, "applying");
    match field {
        Field::Slot => *current_slot = event.value,
        Field::TrackingId => {
            if event.value == TRACKING_ID_NONE {
                slots.remove(&*current_slot);
            } else {
                slots.insert(*current_slot, Default::default());
            }
        }
        Field::PositionX => slots.entry(*current_slot).or_default().x = event.value,
        Field::PositionY => slots.entry(*current_slot).or_default().y = event.value,
        Field::Pressure => slots.entry(*current_slot).or_default().pressure = event.value,
        Field::Orientation => slots.entry(*current_slot).or_default().orientation = event.value,
    }
}
