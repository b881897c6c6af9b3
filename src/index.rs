//! Palette index types
//!
//! Every LED stores two palette indices packed into a single byte: the
//! low nibble is rendered during the ON phase, the high nibble during the
//! OFF phase.

use crate::flash::Phase;

/// Number of palette slots
pub const PALETTE_SIZE: usize = 16;

const NIBBLE_MASK: u8 = 0x0F;

/// Index into the 16-entry palette, always in `0..=15`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct PaletteIndex(u8);

impl PaletteIndex {
    pub const BLACK: Self = Self(0);

    /// Returns `None` if `value` does not fit the palette
    pub const fn new(value: u8) -> Option<Self> {
        if value as usize >= PALETTE_SIZE {
            return None;
        }
        Some(Self(value))
    }

    /// Keep the low four bits of `value`
    pub const fn from_nibble(value: u8) -> Self {
        Self(value & NIBBLE_MASK)
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Palette indices rendered in the ON and OFF flash phases
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndexPair {
    on: PaletteIndex,
    off: PaletteIndex,
}

impl IndexPair {
    /// Both phases black
    pub const OFF: Self = Self {
        on: PaletteIndex::BLACK,
        off: PaletteIndex::BLACK,
    };

    pub const fn new(on: PaletteIndex, off: PaletteIndex) -> Self {
        Self { on, off }
    }

    /// Same index in both phases, i.e. a steady colour
    pub const fn steady(index: PaletteIndex) -> Self {
        Self::new(index, index)
    }

    /// Unpack the wire/event representation
    pub const fn from_byte(value: u8) -> Self {
        Self {
            on: PaletteIndex::from_nibble(value),
            off: PaletteIndex::from_nibble(value >> 4),
        }
    }

    pub const fn to_byte(self) -> u8 {
        (self.off.get() << 4) | self.on.get()
    }

    pub const fn on(self) -> PaletteIndex {
        self.on
    }

    pub const fn off(self) -> PaletteIndex {
        self.off
    }

    pub const fn for_phase(self, phase: Phase) -> PaletteIndex {
        match phase {
            Phase::On => self.on,
            Phase::Off => self.off,
        }
    }
}

impl From<u8> for IndexPair {
    fn from(value: u8) -> Self {
        Self::from_byte(value)
    }
}

impl From<IndexPair> for u8 {
    fn from(pair: IndexPair) -> Self {
        pair.to_byte()
    }
}
