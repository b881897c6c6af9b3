#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::{CommandReceiver, StripCommand};
use crate::color::{BLACK, Rgb};
use crate::event::{DecodeError, EventOutcome, LedEvent, decode_delivery};
use crate::flash::{FlashScheduler, Phase};
use crate::index::IndexPair;
use crate::palette::{ConfigSource, Palette};
use crate::serializer::{FrameSerializer, SendError, Transmitter};
use crate::state::LedStateTable;

/// Pair shown on every LED after boot: dark grey flashing with black
pub const BOOT_PAIR: IndexPair = IndexPair::from_byte(0x01);

/// What a refresh attempt did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Nothing changed since the last frame
    Idle,
    /// The frame was handed to the transmitter
    Sent,
    /// The transmitter was busy or failed, the frame stays dirty
    Deferred,
}

/// Strip controller - owns all strip state
///
/// Holds the LED table, flash phase, frame buffer, dirty flag and the
/// transmitter. Everything runs on the caller's loop; the only overlap is an
/// autonomous transfer started by the transmitter.
pub struct StripController<C: ConfigSource, T: Transmitter, const N: usize> {
    // External dependencies
    config: C,
    serializer: FrameSerializer<T>,

    // Internal state
    table: LedStateTable<N>,
    flash: FlashScheduler,
    frame: [Rgb; N],
    dirty: bool,
}

impl<C: ConfigSource, T: Transmitter, const N: usize> StripController<C, T, N> {
    /// Create a controller with every LED showing [`BOOT_PAIR`]
    pub fn new(config: C, transmitter: T) -> Self {
        let mut controller = Self::blank(config, transmitter);
        controller.update_led_range(0, N.saturating_sub(1), BOOT_PAIR);
        controller
    }

    /// Create a controller with every LED off
    pub fn blank(config: C, transmitter: T) -> Self {
        Self {
            config,
            serializer: FrameSerializer::new(transmitter),
            table: LedStateTable::new(),
            flash: FlashScheduler::new(),
            frame: [BLACK; N],
            dirty: true,
        }
    }

    /// Overwrite the pair of every LED in `start..=end`, clamped to the strip
    pub fn update_led_range(&mut self, start: usize, end: usize, pair: IndexPair) {
        self.table.update_range(start, end, pair);
        self.dirty = true;
    }

    /// Set one LED
    pub fn set_led(&mut self, position: usize, pair: IndexPair) {
        self.table.set(position, pair);
        self.dirty = true;
    }

    /// Request a redraw without changing LED data
    pub fn trigger_refresh(&mut self) {
        self.dirty = true;
    }

    /// Apply a consumed event delivered by the event layer.
    ///
    /// Unreadable parameters leave the strip unchanged and are reported as
    /// [`EventOutcome::NoEffect`].
    pub fn handle_event(&mut self, opcode: u8, params: Result<&[u8], DecodeError>) -> EventOutcome {
        match decode_delivery(opcode, params) {
            Some(event) => self.apply_event(&event),
            None => EventOutcome::NoEffect,
        }
    }

    /// Apply a decoded event
    pub fn apply_event(&mut self, event: &LedEvent) -> EventOutcome {
        let updates = event.apply(&mut self.table);
        self.dirty = true;
        EventOutcome::Applied { updates }
    }

    /// Drain queued commands (non-blocking)
    pub fn process_pending<const SIZE: usize>(&mut self, commands: &CommandReceiver<'_, SIZE>) -> usize {
        let mut processed = 0;
        while let Some(command) = commands.try_receive() {
            self.process_command(command);
            processed += 1;
        }
        processed
    }

    fn process_command(&mut self, command: StripCommand) {
        match command {
            StripCommand::Event(event) => {
                self.apply_event(&event);
            }
            StripCommand::UpdateRange { start, end, pair } => {
                self.update_led_range(usize::from(start), usize::from(end), pair);
            }
            StripCommand::Refresh => self.trigger_refresh(),
            StripCommand::FactoryReset => self.factory_reset(),
        }
    }

    /// Toggle the flash phase and rebuild the frame
    pub fn flash(&mut self) -> Phase {
        let palette = Palette::new(&self.config);
        let phase = self.flash.tick(&self.table, &palette, &mut self.frame);
        self.dirty = true;
        phase
    }

    /// Send the frame if it changed and the wire is free
    pub fn refresh(&mut self) -> RefreshOutcome {
        if !self.dirty {
            return RefreshOutcome::Idle;
        }
        match self.serializer.try_send(&self.frame) {
            Ok(()) => {
                self.dirty = false;
                RefreshOutcome::Sent
            }
            Err(SendError::Busy | SendError::Transport) => RefreshOutcome::Deferred,
        }
    }

    /// Whether a frame is on the wire
    pub fn busy(&self) -> bool {
        self.serializer.busy()
    }

    /// Non-volatile writes stall the CPU, keep them out of active transfers
    pub fn is_suitable_time_to_write_flash(&self) -> bool {
        !self.busy()
    }

    /// Clear every LED to black in both phases
    pub fn factory_reset(&mut self) {
        #[cfg(feature = "esp32-log")]
        println!("[StripController.factory_reset] clearing {} LEDs", N);
        self.table.clear();
        self.dirty = true;
    }

    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub const fn phase(&self) -> Phase {
        self.flash.phase()
    }

    /// Last rendered frame, in wire order
    pub fn frame(&self) -> &[Rgb; N] {
        &self.frame
    }

    pub fn table(&self) -> &LedStateTable<N> {
        &self.table
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Configuration changes show up on the next flash
    pub fn config_mut(&mut self) -> &mut C {
        &mut self.config
    }

    pub fn serializer(&self) -> &FrameSerializer<T> {
        &self.serializer
    }

    pub fn serializer_mut(&mut self) -> &mut FrameSerializer<T> {
        &mut self.serializer
    }
}
