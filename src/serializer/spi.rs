use embedded_hal::spi::SpiBus;

use super::timing::{BitTiming, encode_pixel};
use super::{TransmitError, Transmitter};
use crate::color::Rgb;

const ZEROS: [u8; 16] = [0; 16];

/// Blocking transmitter writing the sub-bit encoding to an SPI bus.
///
/// The bus must run at [`BitTiming::spi_clock_hz`], MSB first, with the data
/// line idling low. Pixels are written one at a time, so the bus has to keep
/// up with the wire; a stall longer than the reset time splits the frame.
#[derive(Debug)]
pub struct SpiTransmitter<S> {
    spi: S,
    timing: BitTiming,
}

impl<S: SpiBus<u8>> SpiTransmitter<S> {
    pub const fn new(spi: S, timing: BitTiming) -> Self {
        Self { spi, timing }
    }

    pub const fn timing(&self) -> BitTiming {
        self.timing
    }

    /// Give the bus back
    pub fn release(self) -> S {
        self.spi
    }

    fn write_frame(&mut self, frame: &[Rgb]) -> Result<(), S::Error> {
        for pixel in frame {
            self.spi.write(&encode_pixel(*pixel))?;
        }
        let mut remaining = self.timing.reset_bytes();
        while remaining > 0 {
            let chunk = remaining.min(ZEROS.len());
            self.spi.write(ZEROS.get(..chunk).unwrap_or(&ZEROS))?;
            remaining -= chunk;
        }
        self.spi.flush()
    }
}

impl<S: SpiBus<u8>> Transmitter for SpiTransmitter<S> {
    fn transmit(&mut self, frame: &[Rgb]) -> Result<(), TransmitError> {
        self.write_frame(frame).map_err(|_| TransmitError)
    }

    fn is_busy(&self) -> bool {
        false
    }
}
