//! Bit timing contract of single-wire LED strips
//!
//! Every bit occupies one fixed period and starts high. A `1` stays high for
//! roughly two thirds of the period, a `0` for roughly one third. After the
//! last bit the line stays low for at least the reset time, which the strip
//! takes as end of frame.
//!
//! The SPI encoding splits each period into three sub-bits: `110` for a `1`
//! and `100` for a `0`. At `3 / period` the data line then reproduces the
//! waveform without further help, and a run of zero bytes is the reset gap.

use crate::color::Rgb;

/// Data bytes per LED
pub const BYTES_PER_LED: usize = 3;
/// SPI bytes per data byte with the three sub-bit encoding
pub const SPI_BYTES_PER_BYTE: usize = 3;
/// SPI bytes per LED
pub const SPI_BYTES_PER_LED: usize = BYTES_PER_LED * SPI_BYTES_PER_BYTE;

const SUB_BITS: u32 = 3;
const PATTERN_ONE: u32 = 0b110;
const PATTERN_ZERO: u32 = 0b100;

/// High/low split of one transmitted bit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub high_ns: u32,
    pub low_ns: u32,
}

impl Pulse {
    pub const fn period_ns(self) -> u32 {
        self.high_ns + self.low_ns
    }
}

/// Timing constants of the strip protocol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitTiming {
    /// Length of one bit
    pub period_ns: u32,
    /// High time of a `1` bit
    pub one_high_ns: u32,
    /// High time of a `0` bit
    pub zero_high_ns: u32,
    /// Minimum low time that ends a frame
    pub reset_ns: u32,
    /// Deviation the strip decoder accepts on each high time
    pub tolerance_ns: u32,
}

impl BitTiming {
    /// WS2811/WS2812 at 800 kHz
    pub const WS2812: Self = Self {
        period_ns: 1250,
        one_high_ns: 800,
        zero_high_ns: 400,
        reset_ns: 50_000,
        tolerance_ns: 150,
    };

    /// Nominal pulse of a single bit
    pub const fn pulse(&self, bit: bool) -> Pulse {
        let high_ns = if bit {
            self.one_high_ns
        } else {
            self.zero_high_ns
        };
        Pulse {
            high_ns,
            low_ns: self.period_ns.saturating_sub(high_ns),
        }
    }

    /// Pulse produced by the SPI sub-bit encoding
    pub const fn spi_pulse(&self, bit: bool) -> Pulse {
        let sub_bit_ns = self.period_ns / SUB_BITS;
        let high_ns = if bit { 2 * sub_bit_ns } else { sub_bit_ns };
        Pulse {
            high_ns,
            low_ns: self.period_ns.saturating_sub(high_ns),
        }
    }

    /// Whether a strip decoder reads `pulse` as `bit`
    pub const fn accepts(&self, bit: bool, pulse: Pulse) -> bool {
        let nominal = self.pulse(bit);
        pulse.high_ns.abs_diff(nominal.high_ns) <= self.tolerance_ns
            && pulse.period_ns().abs_diff(self.period_ns) <= self.tolerance_ns
    }

    /// SPI clock that makes one sub-bit a third of a period
    pub const fn spi_clock_hz(&self) -> u32 {
        if self.period_ns == 0 {
            return 0;
        }
        SUB_BITS * 1_000_000_000 / self.period_ns
    }

    /// Zero SPI bytes needed to hold the line low for the reset time
    #[allow(clippy::cast_possible_truncation)]
    pub const fn reset_bytes(&self) -> usize {
        if self.period_ns == 0 {
            return 0;
        }
        let sub_bits = (self.reset_ns * SUB_BITS).div_ceil(self.period_ns);
        sub_bits.div_ceil(8) as usize
    }

    /// SPI bytes for a whole frame including the reset gap
    pub const fn spi_frame_len(&self, leds: usize) -> usize {
        leds * SPI_BYTES_PER_LED + self.reset_bytes()
    }
}

impl Default for BitTiming {
    fn default() -> Self {
        Self::WS2812
    }
}

/// Transmitted bytes of a wire-ordered frame, LED 0 first
pub fn frame_bytes(frame: &[Rgb]) -> impl Iterator<Item = u8> + '_ {
    frame
        .iter()
        .flat_map(|pixel| [pixel.r, pixel.g, pixel.b])
}

/// Bits of a byte stream, most significant bit first
pub fn bits(bytes: impl IntoIterator<Item = u8>) -> impl Iterator<Item = bool> {
    bytes
        .into_iter()
        .flat_map(|byte| (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1))
}

/// Pulse train of a byte stream, for pulse-table peripherals
pub fn pulses(
    timing: BitTiming,
    bytes: impl IntoIterator<Item = u8>,
) -> impl Iterator<Item = Pulse> {
    bits(bytes).map(move |bit| timing.pulse(bit))
}

/// Encode one data byte as three SPI bytes, MSB first
#[allow(clippy::cast_possible_truncation)]
pub const fn encode_byte(byte: u8) -> [u8; SPI_BYTES_PER_BYTE] {
    let mut acc: u32 = 0;
    let mut shift = 8;
    while shift > 0 {
        shift -= 1;
        let pattern = if (byte >> shift) & 1 == 1 {
            PATTERN_ONE
        } else {
            PATTERN_ZERO
        };
        acc = (acc << SUB_BITS) | pattern;
    }
    [(acc >> 16) as u8, (acc >> 8) as u8, acc as u8]
}

/// Encode one wire-ordered pixel
pub const fn encode_pixel(pixel: Rgb) -> [u8; SPI_BYTES_PER_LED] {
    let [r0, r1, r2] = encode_byte(pixel.r);
    let [g0, g1, g2] = encode_byte(pixel.g);
    let [b0, b1, b2] = encode_byte(pixel.b);
    [r0, r1, r2, g0, g1, g2, b0, b1, b2]
}

/// Encode as many whole LEDs of `frame` as fit into `buffer`, followed by
/// the reset gap. Returns the number of bytes to transmit and the number of
/// LEDs encoded.
pub fn encode_frame(timing: &BitTiming, frame: &[Rgb], buffer: &mut [u8]) -> (usize, usize) {
    let reset = timing.reset_bytes();
    let room = buffer.len().saturating_sub(reset) / SPI_BYTES_PER_LED;
    let leds = frame.len().min(room);

    let mut chunks = buffer.chunks_exact_mut(SPI_BYTES_PER_LED);
    for (pixel, chunk) in frame.iter().take(leds).zip(&mut chunks) {
        chunk.copy_from_slice(&encode_pixel(*pixel));
    }

    let data_len = leds * SPI_BYTES_PER_LED;
    let total = (data_len + reset).min(buffer.len());
    if let Some(gap) = buffer.get_mut(data_len..total) {
        gap.fill(0);
    }
    (total, leds)
}
