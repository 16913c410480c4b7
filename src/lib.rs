//! Decoder for the Linux multi-touch slot protocol.
//!
//! An [`EventDecoder`] drains `struct input_event` records from a
//! non-blocking digitizer device, applies them at every synchronization
//! marker and keeps the current and the previous slot table around, so
//! callers can diff them once per polling cycle.
//!
//! See <https://www.kernel.org/doc/Documentation/input/multi-touch-protocol.txt>.

pub mod decoder;
pub mod device;
pub mod error;
pub mod protocol;
pub mod slots;

pub use crate::decoder::EventDecoder;
pub use crate::device::Device;
pub use crate::error::DecoderError;
pub use crate::protocol::{Field, RawEvent};
pub use crate::slots::{changes, Slot, SlotIndex, SlotTable, TouchChange};
