use ::std::collections::{BTreeMap, BTreeSet};
use ::std::fmt;

/// Slot numbers as selected by `ABS_MT_SLOT`.
pub type SlotIndex = i32;

/// State of one touch contact.
#[derive(PartialEq, Eq, Debug, Default, Clone, Copy)]
pub struct Slot {
    pub x: i32,
    pub y: i32,
    pub pressure: i32,
    pub orientation: i32,
}

/// All active contacts of one frame, keyed by slot.
pub type SlotTable = BTreeMap<SlotIndex, Slot>;

#[derive(PartialEq, Debug, Clone)]
pub enum TouchChange {
    Down { slot: SlotIndex, state: Slot },
    Moved { slot: SlotIndex, from: Slot, to: Slot },
    Up { slot: SlotIndex },
}

impl fmt::Display for TouchChange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TouchChange::Down { slot, state } => write!(f, "down  slot {}: {:?}", slot, state),
            TouchChange::Moved { slot, to, .. } => write!(f, "moved slot {}: {:?}", slot, to),
            TouchChange::Up { slot } => write!(f, "up    slot {}", slot),
        }
    }
}

/// Contacts that appeared, disappeared or changed between two tables, in slot order.
pub fn changes(previous: &SlotTable, current: &SlotTable) -> Vec<TouchChange> {
    let slots: BTreeSet<SlotIndex> = previous.keys().chain(current.keys()).cloned().collect();
    slots
        .into_iter()
        .filter_map(|slot| match (previous.get(&slot), current.get(&slot)) {
            (None, Some(&state)) => Some(TouchChange::Down { slot, state }),
            (Some(_), None) => Some(TouchChange::Up { slot }),
            (Some(&from), Some(&to)) if from != to => Some(TouchChange::Moved { slot, from, to }),
            _ => None,
        })
        .collect()
}
