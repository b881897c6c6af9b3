//! Palette and channel order, read through from node configuration
//!
//! The configuration is a flat key→byte store owned by the surrounding
//! firmware. Keys `1..=48` hold the sixteen palette colours as consecutive
//! red/green/blue bytes, key `49` holds the channel order.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{ChannelOrder, DEFAULT_CHANNEL_ORDER, Rgb};
use crate::index::{PALETTE_SIZE, PaletteIndex};

/// First palette key (red channel of colour 0)
pub const KEY_PALETTE_BASE: u8 = 1;
/// Channel order key
pub const KEY_CHANNEL_ORDER: u8 = 49;
/// Number of configuration keys, keys are `1..=KEY_COUNT`
pub const KEY_COUNT: u8 = KEY_CHANNEL_ORDER;

/// Factory palette
pub const DEFAULT_PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb { r: 0x00, g: 0x00, b: 0x00 }, // black
    Rgb { r: 0x07, g: 0x07, b: 0x07 }, // dark grey
    Rgb { r: 0x07, g: 0x00, b: 0x00 }, // dark red
    Rgb { r: 0x00, g: 0x07, b: 0x00 }, // dark green
    Rgb { r: 0x00, g: 0x00, b: 0x07 }, // dark blue
    Rgb { r: 0x3F, g: 0x1F, b: 0x00 }, // orange
    Rgb { r: 0x27, g: 0x00, b: 0x27 }, // dark magenta
    Rgb { r: 0x00, g: 0x27, b: 0x27 }, // dark cyan
    Rgb { r: 0x0F, g: 0x0F, b: 0x0F }, // grey
    Rgb { r: 0xFF, g: 0x00, b: 0x00 }, // red
    Rgb { r: 0x00, g: 0xFF, b: 0x00 }, // green
    Rgb { r: 0x00, g: 0x00, b: 0xFF }, // blue
    Rgb { r: 0xFF, g: 0xFF, b: 0x00 }, // yellow
    Rgb { r: 0xFF, g: 0x00, b: 0xFF }, // magenta
    Rgb { r: 0x00, g: 0xFF, b: 0xFF }, // cyan
    Rgb { r: 0xFF, g: 0xFF, b: 0xFF }, // white
];

/// Read access to node configuration.
///
/// Returns `None` when the value cannot be read; callers fall back to the
/// factory default for that key.
pub trait ConfigSource {
    fn read(&self, key: u8) -> Option<u8>;
}

impl<T: ConfigSource + ?Sized> ConfigSource for &T {
    fn read(&self, key: u8) -> Option<u8> {
        (**self).read(key)
    }
}

/// Colour channel of a palette slot, in key order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ColorChannel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl ColorChannel {
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Pick this channel out of a colour
    pub const fn of(self, color: Rgb) -> u8 {
        match self {
            Self::Red => color.r,
            Self::Green => color.g,
            Self::Blue => color.b,
        }
    }
}

/// Key holding `channel` of palette slot `index`
pub const fn palette_key(index: PaletteIndex, channel: ColorChannel) -> u8 {
    KEY_PALETTE_BASE + index.get() * 3 + channel as u8
}

/// Factory default value of a configuration key. Unknown keys read as zero.
#[allow(clippy::cast_possible_truncation)]
pub const fn default_value(key: u8) -> u8 {
    if key == KEY_CHANNEL_ORDER {
        return DEFAULT_CHANNEL_ORDER.as_raw();
    }
    if key < KEY_PALETTE_BASE || key > KEY_CHANNEL_ORDER {
        return 0;
    }
    let offset = key - KEY_PALETTE_BASE;
    let color = DEFAULT_PALETTE[(offset / 3) as usize];
    match offset % 3 {
        0 => color.r,
        1 => color.g,
        _ => color.b,
    }
}

/// Pass-through view of the palette stored in a [`ConfigSource`].
///
/// Nothing is cached: a configuration write is visible on the next read.
pub struct Palette<'a, C: ConfigSource> {
    source: &'a C,
}

impl<'a, C: ConfigSource> Palette<'a, C> {
    pub const fn new(source: &'a C) -> Self {
        Self { source }
    }

    /// Resolve a palette slot to its configured colour
    pub fn color(&self, index: PaletteIndex) -> Rgb {
        Rgb {
            r: self.read(palette_key(index, ColorChannel::Red)),
            g: self.read(palette_key(index, ColorChannel::Green)),
            b: self.read(palette_key(index, ColorChannel::Blue)),
        }
    }

    /// Configured channel order, unknown values use the default order
    pub fn channel_order(&self) -> ChannelOrder {
        ChannelOrder::from_raw_or_default(self.read(KEY_CHANNEL_ORDER))
    }

    fn read(&self, key: u8) -> u8 {
        self.source.read(key).unwrap_or_else(|| {
            #[cfg(feature = "esp32-log")]
            println!("[Palette.read] key {} unreadable, using default", key);
            default_value(key)
        })
    }
}

/// Error returned when writing a key outside `1..=KEY_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKey(pub u8);

/// In-memory configuration image.
///
/// Mirrors the persisted node variables so the palette can be read without
/// touching non-volatile memory. Any byte value is accepted.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    values: [u8; KEY_COUNT as usize],
}

impl ConfigStore {
    /// Create a store holding the factory defaults
    pub const fn new() -> Self {
        let mut values = [0u8; KEY_COUNT as usize];
        let mut i = 0;
        while i < values.len() {
            #[allow(clippy::cast_possible_truncation)]
            let key = KEY_PALETTE_BASE + i as u8;
            values[i] = default_value(key);
            i += 1;
        }
        Self { values }
    }

    /// Write a raw value, as received from a configuration update
    pub fn write(&mut self, key: u8, value: u8) -> Result<(), InvalidKey> {
        let slot = Self::slot(key)
            .and_then(|slot| self.values.get_mut(slot))
            .ok_or(InvalidKey(key))?;
        *slot = value;
        Ok(())
    }

    /// Store a palette colour
    pub fn set_color(&mut self, index: PaletteIndex, color: Rgb) {
        let base = index.as_usize() * 3;
        for channel in ColorChannel::ALL {
            self.values[base + channel as usize] = channel.of(color);
        }
    }

    /// Store the channel order
    pub fn set_channel_order(&mut self, order: ChannelOrder) {
        self.values[usize::from(KEY_CHANNEL_ORDER - KEY_PALETTE_BASE)] = order.as_raw();
    }

    /// Restore the factory defaults
    pub fn factory_reset(&mut self) {
        *self = Self::new();
    }

    fn slot(key: u8) -> Option<usize> {
        key.checked_sub(KEY_PALETTE_BASE).map(usize::from)
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigSource for ConfigStore {
    fn read(&self, key: u8) -> Option<u8> {
        Self::slot(key).and_then(|slot| self.values.get(slot)).copied()
    }
}
