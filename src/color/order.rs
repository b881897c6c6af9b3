//! Channel order table
//!
//! Strips disagree on the byte order they expect per LED. Each order is a
//! fixed permutation: output slot `i` takes source channel `permutation()[i]`,
//! where channel 0 is red, 1 is green and 2 is blue.

use super::Rgb;

const ORDER_RGB: u8 = 1;
const ORDER_RBG: u8 = 2;
const ORDER_GRB: u8 = 3;
const ORDER_GBR: u8 = 4;
const ORDER_BGR: u8 = 5;
const ORDER_BRG: u8 = 6;

/// Order used for unknown configuration values and by factory defaults.
pub const DEFAULT_CHANNEL_ORDER: ChannelOrder = ChannelOrder::Grb;

/// Byte order on the wire. The variant name spells the transmitted order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelOrder {
    Rgb = ORDER_RGB,
    Rbg = ORDER_RBG,
    Grb = ORDER_GRB,
    Gbr = ORDER_GBR,
    Bgr = ORDER_BGR,
    Brg = ORDER_BRG,
}

impl ChannelOrder {
    pub const ALL: [Self; 6] = [
        Self::Rgb,
        Self::Rbg,
        Self::Grb,
        Self::Gbr,
        Self::Bgr,
        Self::Brg,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            ORDER_RGB => Self::Rgb,
            ORDER_RBG => Self::Rbg,
            ORDER_GRB => Self::Grb,
            ORDER_GBR => Self::Gbr,
            ORDER_BGR => Self::Bgr,
            ORDER_BRG => Self::Brg,
            _ => return None,
        })
    }

    /// Decode a configuration byte, falling back to [`DEFAULT_CHANNEL_ORDER`]
    pub const fn from_raw_or_default(value: u8) -> Self {
        match Self::from_raw(value) {
            Some(order) => order,
            None => DEFAULT_CHANNEL_ORDER,
        }
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Source channel for each output slot
    pub const fn permutation(self) -> [usize; 3] {
        match self {
            Self::Rgb => [0, 1, 2],
            Self::Rbg => [0, 2, 1],
            Self::Grb => [1, 0, 2],
            Self::Gbr => [1, 2, 0],
            Self::Bgr => [2, 1, 0],
            Self::Brg => [2, 0, 1],
        }
    }

    /// Order that undoes this one: `o.inverse().apply(o.apply(c)) == c`
    pub const fn inverse(self) -> Self {
        match self {
            Self::Gbr => Self::Brg,
            Self::Brg => Self::Gbr,
            other => other,
        }
    }

    /// Rearrange a resolved colour into wire order
    pub fn apply(self, color: Rgb) -> Rgb {
        let source = [color.r, color.g, color.b];
        let mut slots = [0u8; 3];
        for (slot, channel) in slots.iter_mut().zip(self.permutation()) {
            *slot = source.get(channel).copied().unwrap_or_default();
        }
        let [r, g, b] = slots;
        Rgb { r, g, b }
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        DEFAULT_CHANNEL_ORDER
    }
}
