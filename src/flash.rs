//! Two-phase flash rendering
//!
//! Every tick flips the phase and rebuilds the whole frame from the LED
//! table. LEDs whose two indices are equal render a steady colour; all
//! others alternate between the two palette entries.

use crate::color::Rgb;
use crate::palette::{ConfigSource, Palette};
use crate::state::LedStateTable;

/// Which index of a LED's pair is currently shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    On,
    Off,
}

impl Phase {
    pub const fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }

    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

/// Flash state machine.
///
/// Starts in [`Phase::Off`] so the first [`FlashScheduler::tick`] renders the
/// ON phase.
#[derive(Debug, Clone)]
pub struct FlashScheduler {
    phase: Phase,
}

impl FlashScheduler {
    pub const fn new() -> Self {
        Self { phase: Phase::Off }
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Toggle the phase and recompute `frame` in wire order.
    ///
    /// The channel order is read once per pass, palette colours per LED.
    pub fn tick<C: ConfigSource, const N: usize>(
        &mut self,
        table: &LedStateTable<N>,
        palette: &Palette<'_, C>,
        frame: &mut [Rgb; N],
    ) -> Phase {
        self.phase = self.phase.toggled();
        render(self.phase, table, palette, frame);
        self.phase
    }

    /// Return to the boot phase
    pub fn reset(&mut self) {
        self.phase = Phase::Off;
    }
}

impl Default for FlashScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Render one phase of the table into `frame`
pub fn render<C: ConfigSource, const N: usize>(
    phase: Phase,
    table: &LedStateTable<N>,
    palette: &Palette<'_, C>,
    frame: &mut [Rgb; N],
) {
    let order = palette.channel_order();
    for (pixel, pair) in frame.iter_mut().zip(table.iter()) {
        let color = palette.color(pair.for_phase(phase));
        *pixel = order.apply(color);
    }
}
