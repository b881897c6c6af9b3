#![no_std]

pub mod channel;
pub mod color;
pub mod controller;
pub mod event;
pub mod flash;
pub mod index;
pub mod palette;
pub mod scheduler;
pub mod serializer;
pub mod state;

pub use channel::{CommandQueue, CommandReceiver, CommandSender, StripCommand};
pub use controller::{BOOT_PAIR, RefreshOutcome, StripController};
pub use event::{DecodeError, EventOutcome, LedEvent, Polarity, RangeUpdate};
pub use flash::{FlashScheduler, Phase};
pub use index::{IndexPair, PaletteIndex};
pub use palette::{ConfigSource, ConfigStore, Palette};
pub use scheduler::{DEFAULT_FLASH_PERIOD, SchedulerConfig, StripScheduler};
pub use self_test::{SelfTest, TestStep};
pub use serializer::{
    BitTiming, EngineTransmitter, FrameSerializer, SpiTransmitter, TransferEngine, Transmitter,
};
pub use state::LedStateTable;

pub use color::{ChannelOrder, Rgb};
pub use embassy_time::{Duration, Instant};
