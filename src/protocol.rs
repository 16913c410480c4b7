use ::nix::libc;
use ::std::mem::size_of;

/// Size of `struct input_event` on this platform (timestamp + type + code + value).
pub const INPUT_EVENT_SIZE: usize = size_of::<libc::input_event>();

// type, code and value always occupy the last 8 bytes, whatever the width of the timestamp
const PAYLOAD_OFFSET: usize = INPUT_EVENT_SIZE - 8;

pub const EV_SYN: u16 = 0x00;
pub const EV_KEY: u16 = 0x01;
pub const EV_ABS: u16 = 0x03;

pub const SYN_REPORT: u16 = 0;
pub const SYN_CONFIG: u16 = 1;
pub const SYN_MT_REPORT: u16 = 2;
pub const SYN_DROPPED: u16 = 3;

pub const ABS_MT_SLOT: u16 = 0x2f;
pub const ABS_MT_ORIENTATION: u16 = 0x34;
pub const ABS_MT_POSITION_X: u16 = 0x35;
pub const ABS_MT_POSITION_Y: u16 = 0x36;
pub const ABS_MT_TRACKING_ID: u16 = 0x39;
pub const ABS_MT_PRESSURE: u16 = 0x3a;

/// `ABS_MT_TRACKING_ID` value that destroys the selected slot.
pub const TRACKING_ID_NONE: i32 = -1;

/// One `struct input_event` with the timestamp dropped.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct RawEvent {
    pub event_type: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    pub fn new(event_type: u16, code: u16, value: i32) -> RawEvent {
        RawEvent {
            event_type,
            code,
            value,
        }
    }

    pub fn from_bytes(buffer: &[u8; INPUT_EVENT_SIZE]) -> RawEvent {
        let payload = &buffer[PAYLOAD_OFFSET..];
        RawEvent {
            event_type: u16::from_ne_bytes([payload[0], payload[1]]),
            code: u16::from_ne_bytes([payload[2], payload[3]]),
            value: i32::from_ne_bytes([payload[4], payload[5], payload[6], payload[7]]),
        }
    }

    /// Encodes the record in the kernel's layout with a zeroed timestamp.
    pub fn to_bytes(&self) -> [u8; INPUT_EVENT_SIZE] {
        let mut buffer = [0; INPUT_EVENT_SIZE];
        buffer[PAYLOAD_OFFSET..PAYLOAD_OFFSET + 2].copy_from_slice(&self.event_type.to_ne_bytes());
        buffer[PAYLOAD_OFFSET + 2..PAYLOAD_OFFSET + 4].copy_from_slice(&self.code.to_ne_bytes());
        buffer[PAYLOAD_OFFSET + 4..].copy_from_slice(&self.value.to_ne_bytes());
        buffer
    }

    pub fn is_sync(&self) -> bool {
        self.event_type == EV_SYN
    }
}

/// The slot fields a data record can address.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Field {
    Slot,
    TrackingId,
    PositionX,
    PositionY,
    Pressure,
    Orientation,
}

impl Field {
    pub fn from_event(event: &RawEvent) -> Option<Field> {
        // keys and misc records reuse these code numbers, only EV_ABS carries slot fields
        if event.event_type != EV_ABS {
            return None;
        }
        match event.code {
            ABS_MT_SLOT => Some(Field::Slot),
            ABS_MT_TRACKING_ID => Some(Field::TrackingId),
            ABS_MT_POSITION_X => Some(Field::PositionX),
            ABS_MT_POSITION_Y => Some(Field::PositionY),
            ABS_MT_PRESSURE => Some(Field::Pressure),
            ABS_MT_ORIENTATION => Some(Field::Orientation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_size_matches_the_platform_layout() {
        if cfg!(target_pointer_width = "64") {
            assert_eq!(INPUT_EVENT_SIZE, 24);
        } else {
            assert_eq!(INPUT_EVENT_SIZE, 16);
        }
    }

    #[test]
    fn from_bytes_ignores_the_timestamp() {
        let mut buffer = RawEvent::new(EV_ABS, ABS_MT_POSITION_X, 1404).to_bytes();
        for byte in buffer[..PAYLOAD_OFFSET].iter_mut() {
            *byte = 0xff;
        }
        assert_eq!(
            RawEvent::from_bytes(&buffer),
            RawEvent::new(EV_ABS, ABS_MT_POSITION_X, 1404)
        );
    }

    #[test]
    fn from_bytes_reads_negative_values() {
        let buffer = RawEvent::new(EV_ABS, ABS_MT_TRACKING_ID, TRACKING_ID_NONE).to_bytes();
        assert_eq!(RawEvent::from_bytes(&buffer).value, -1);
    }

    #[test]
    fn sync_markers_are_recognized_by_type() {
        assert!(RawEvent::new(EV_SYN, SYN_REPORT, 0).is_sync());
        assert!(RawEvent::new(EV_SYN, SYN_DROPPED, 0).is_sync());
        assert!(!RawEvent::new(EV_ABS, ABS_MT_SLOT, 0).is_sync());
    }

    mod fields {
        use super::*;

        #[test]
        fn maps_multi_touch_codes() {
            let expected = vec![
                (ABS_MT_SLOT, Field::Slot),
                (ABS_MT_TRACKING_ID, Field::TrackingId),
                (ABS_MT_POSITION_X, Field::PositionX),
                (ABS_MT_POSITION_Y, Field::PositionY),
                (ABS_MT_PRESSURE, Field::Pressure),
                (ABS_MT_ORIENTATION, Field::Orientation),
            ];
            for (code, field) in expected {
                assert_eq!(
                    Field::from_event(&RawEvent::new(EV_ABS, code, 0)),
                    Some(field)
                );
            }
        }

        #[test]
        fn ignores_unknown_absolute_codes() {
            // ABS_MT_TOUCH_MAJOR
            assert_eq!(Field::from_event(&RawEvent::new(EV_ABS, 0x30, 7)), None);
        }

        #[test]
        fn ignores_codes_of_other_event_types() {
            assert_eq!(
                Field::from_event(&RawEvent::new(EV_KEY, ABS_MT_POSITION_X, 1)),
                None
            );
        }
    }
}
