#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::timing::{BitTiming, encode_frame};
use super::{TransmitError, Transmitter};
use crate::color::Rgb;

/// Autonomous transfer engine, e.g. DMA feeding an SPI peripheral.
///
/// The engine owns the buffer it streams from, so the frame buffer can be
/// rebuilt while a transfer is running.
pub trait TransferEngine {
    /// Buffer the next transfer is read from
    fn buffer(&mut self) -> &mut [u8];

    /// Stream the first `len` bytes of the buffer to the data line
    fn start(&mut self, len: usize);

    /// Whether a transfer is still running
    fn is_active(&self) -> bool;
}

/// Transmitter that hands the encoded frame to a [`TransferEngine`].
///
/// Size the engine buffer with [`BitTiming::spi_frame_len`]. A frame that
/// does not fit together with its reset gap is refused as a whole.
#[derive(Debug)]
pub struct EngineTransmitter<E: TransferEngine> {
    engine: E,
    timing: BitTiming,
}

impl<E: TransferEngine> EngineTransmitter<E> {
    pub const fn new(engine: E, timing: BitTiming) -> Self {
        Self { engine, timing }
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub const fn timing(&self) -> BitTiming {
        self.timing
    }
}

impl<E: TransferEngine> Transmitter for EngineTransmitter<E> {
    fn transmit(&mut self, frame: &[Rgb]) -> Result<(), TransmitError> {
        // The engine may still be streaming from the buffer
        if self.engine.is_active() {
            return Err(TransmitError);
        }
        let needed = self.timing.spi_frame_len(frame.len());
        let buffer = self.engine.buffer();
        if buffer.len() < needed {
            #[cfg(feature = "esp32-log")]
            println!(
                "[EngineTransmitter.transmit] buffer of {} bytes, frame needs {}",
                buffer.len(),
                needed
            );
            return Err(TransmitError);
        }
        let (len, _) = encode_frame(&self.timing, frame, buffer);
        self.engine.start(len);
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.engine.is_active()
    }
}
