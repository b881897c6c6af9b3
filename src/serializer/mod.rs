//! Frame serialization to the strip
//!
//! [`FrameSerializer`] decides *when* a frame goes out; a [`Transmitter`]
//! decides *how*. Two transmitters are provided and one is picked when the
//! controller is built:
//!
//! - [`EngineTransmitter`] encodes the frame into the buffer of an autonomous
//!   transfer engine (DMA fed SPI, RMT, PIO) and returns immediately. The
//!   engine reports busy until the reset gap has been sent.
//! - [`SpiTransmitter`] feeds an SPI bus byte by byte and returns once the
//!   frame and reset gap are out.

mod engine;
mod spi;
pub mod timing;

pub use engine::{EngineTransmitter, TransferEngine};
pub use spi::SpiTransmitter;
pub use timing::{BitTiming, Pulse};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Rgb;

/// Error reported by a transmitter that could not put the frame on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransmitError;

/// Sends a wire-ordered frame to the strip
pub trait Transmitter {
    /// Start sending `frame`.
    ///
    /// The frame is copied or fully sent before this returns, so the caller
    /// may rebuild it right away.
    fn transmit(&mut self, frame: &[Rgb]) -> Result<(), TransmitError>;

    /// Whether a previous frame is still on the wire
    fn is_busy(&self) -> bool;
}

impl<T: Transmitter + ?Sized> Transmitter for &mut T {
    fn transmit(&mut self, frame: &[Rgb]) -> Result<(), TransmitError> {
        (**self).transmit(frame)
    }

    fn is_busy(&self) -> bool {
        (**self).is_busy()
    }
}

/// Reason a frame was not sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendError {
    /// The previous frame is still on the wire
    Busy,
    /// The transmitter failed, the frame should be retried
    Transport,
}

/// Frame serializer with overlap protection
#[derive(Debug)]
pub struct FrameSerializer<T: Transmitter> {
    transmitter: T,
    frames_sent: u32,
    deferred: u32,
}

impl<T: Transmitter> FrameSerializer<T> {
    pub const fn new(transmitter: T) -> Self {
        Self {
            transmitter,
            frames_sent: 0,
            deferred: 0,
        }
    }

    /// Whether a transmission is in flight
    pub fn busy(&self) -> bool {
        self.transmitter.is_busy()
    }

    /// Send `frame` unless a transmission is in flight
    pub fn try_send(&mut self, frame: &[Rgb]) -> Result<(), SendError> {
        if self.transmitter.is_busy() {
            self.deferred = self.deferred.wrapping_add(1);
            return Err(SendError::Busy);
        }
        self.transmitter.transmit(frame).map_err(|TransmitError| {
            #[cfg(feature = "esp32-log")]
            println!("[FrameSerializer.try_send] transmit failed, frame kept dirty");
            SendError::Transport
        })?;
        self.frames_sent = self.frames_sent.wrapping_add(1);
        Ok(())
    }

    /// Frames handed to the transmitter since creation
    pub const fn frames_sent(&self) -> u32 {
        self.frames_sent
    }

    /// Attempts skipped because the transmitter was busy
    pub const fn deferred(&self) -> u32 {
        self.deferred
    }

    pub const fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn transmitter_mut(&mut self) -> &mut T {
        &mut self.transmitter
    }
}
