//! Event to LED range mapping
//!
//! A consumed event carries a block of parameter bytes made of four-byte
//! groups: `{action, start, end, pair}`. Each group names a contiguous LED
//! range and the index pair to write into it. The action mask decides whether
//! the group applies to the ON or the OFF form of the event.

use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::index::IndexPair;
use crate::state::LedStateTable;

/// Parameter bytes per event
pub const PARAMS_PER_EVENT: usize = 248;
/// Parameter bytes per range update
pub const UPDATE_LEN: usize = 4;
/// Range updates per event
pub const MAX_UPDATES: usize = PARAMS_PER_EVENT / UPDATE_LEN;

const ACTION_ON_MASK: u8 = 0x01;
const ACTION_OFF_MASK: u8 = 0x02;

/// Direction of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Polarity {
    On,
    Off,
}

impl Polarity {
    /// Even opcodes are ON events, odd opcodes OFF events
    pub const fn from_opcode(opcode: u8) -> Self {
        if opcode & 1 == 0 { Self::On } else { Self::Off }
    }
}

/// Which event polarities a range update applies to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActionMask(u8);

impl ActionMask {
    pub const NONE: Self = Self(0);
    pub const ON: Self = Self(ACTION_ON_MASK);
    pub const OFF: Self = Self(ACTION_OFF_MASK);
    pub const BOTH: Self = Self(ACTION_ON_MASK | ACTION_OFF_MASK);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn applies_to(self, polarity: Polarity) -> bool {
        let mask = match polarity {
            Polarity::On => ACTION_ON_MASK,
            Polarity::Off => ACTION_OFF_MASK,
        };
        self.0 & mask != 0
    }
}

/// One `{action, start, end, pair}` group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RangeUpdate {
    pub action: ActionMask,
    pub start: u8,
    pub end: u8,
    pub pair: IndexPair,
}

impl RangeUpdate {
    pub const fn from_bytes(bytes: [u8; UPDATE_LEN]) -> Self {
        let [action, start, end, pair] = bytes;
        Self {
            action: ActionMask::from_bits(action),
            start,
            end,
            pair: IndexPair::from_byte(pair),
        }
    }

    pub const fn to_bytes(self) -> [u8; UPDATE_LEN] {
        [self.action.bits(), self.start, self.end, self.pair.to_byte()]
    }

    /// Apply to `table` if the action mask matches `polarity`.
    ///
    /// Returns the number of LEDs written.
    pub fn apply<const N: usize>(&self, polarity: Polarity, table: &mut LedStateTable<N>) -> usize {
        if !self.action.applies_to(polarity) {
            return 0;
        }
        table.update_range(usize::from(self.start), usize::from(self.end), self.pair)
    }
}

/// Error reported by the event layer when an event's parameters are unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeError;

/// Decoded event ready to be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedEvent {
    polarity: Polarity,
    updates: Vec<RangeUpdate, MAX_UPDATES>,
}

impl LedEvent {
    pub const fn new(polarity: Polarity) -> Self {
        Self {
            polarity,
            updates: Vec::new(),
        }
    }

    /// Split a parameter block into range updates.
    ///
    /// Groups beyond [`MAX_UPDATES`] and a trailing incomplete group are ignored.
    pub fn decode(opcode: u8, params: &[u8]) -> Self {
        let mut event = Self::new(Polarity::from_opcode(opcode));
        for chunk in params.chunks_exact(UPDATE_LEN).take(MAX_UPDATES) {
            let Ok(bytes) = <[u8; UPDATE_LEN]>::try_from(chunk) else {
                continue;
            };
            if event.push(RangeUpdate::from_bytes(bytes)).is_err() {
                break;
            }
        }
        event
    }

    /// Append an update, handing it back if the event is full
    pub fn push(&mut self, update: RangeUpdate) -> Result<(), RangeUpdate> {
        self.updates.push(update)
    }

    pub const fn polarity(&self) -> Polarity {
        self.polarity
    }

    pub fn updates(&self) -> &[RangeUpdate] {
        &self.updates
    }

    /// Apply every matching update in order, later updates win on overlap.
    ///
    /// Returns the number of updates that matched the polarity.
    pub fn apply<const N: usize>(&self, table: &mut LedStateTable<N>) -> usize {
        let mut matched = 0;
        for update in &self.updates {
            if update.action.applies_to(self.polarity) {
                update.apply(self.polarity, table);
                matched += 1;
            }
        }
        matched
    }
}

/// Result of handling a consumed event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event was applied; `updates` groups matched its polarity
    Applied { updates: usize },
    /// The parameters could not be read, nothing changed
    NoEffect,
}

/// Build an event from what the event layer delivered.
///
/// Decode failures are logged and turned into `None`; they are never
/// reported further.
pub fn decode_delivery(opcode: u8, params: Result<&[u8], DecodeError>) -> Option<LedEvent> {
    match params {
        Ok(params) => Some(LedEvent::decode(opcode, params)),
        Err(DecodeError) => {
            #[cfg(feature = "esp32-log")]
            println!("[event] opcode {:#04x}: parameters unreadable, ignored", opcode);
            None
        }
    }
}
