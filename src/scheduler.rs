//! Main loop pacing.
//!
//! Provides portable flash timing without async/await or platform-specific
//! timers. The caller polls with the current time as often as it likes; the
//! flash runs at a fixed cadence and the frame is pushed out on every poll.

use embassy_time::{Duration, Instant};

use crate::controller::{RefreshOutcome, StripController};
use crate::flash::Phase;
use crate::palette::ConfigSource;
use crate::serializer::Transmitter;

/// Default flash period (twice per second).
pub const DEFAULT_FLASH_PERIOD: Duration = Duration::from_millis(500);

/// Configuration for the strip scheduler
#[derive(Debug, Clone, Copy)]
pub struct SchedulerConfig {
    /// Time between phase toggles
    pub flash_period: Duration,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            flash_period: DEFAULT_FLASH_PERIOD,
        }
    }
}

/// Result of one poll.
#[derive(Debug, Clone, Copy)]
pub struct PollResult {
    /// Phase entered by this poll, if the flash ran
    pub flashed: Option<Phase>,
    /// What the refresh did
    pub refresh: RefreshOutcome,
    /// When the next flash is due
    pub next_flash: Instant,
}

/// Loop driver owning a [`StripController`].
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = StripScheduler::new(controller, Instant::from_millis(now_ms()));
///
/// loop {
///     scheduler.poll(Instant::from_millis(now_ms()));
///     // other node work
/// }
/// ```
pub struct StripScheduler<C: ConfigSource, T: Transmitter, const N: usize> {
    controller: StripController<C, T, N>,
    next_flash: Instant,
    flash_period: Duration,
}

impl<C: ConfigSource, T: Transmitter, const N: usize> StripScheduler<C, T, N> {
    /// Create a scheduler using [`DEFAULT_FLASH_PERIOD`]. The first flash is
    /// due one period after `now`.
    pub fn new(controller: StripController<C, T, N>, now: Instant) -> Self {
        Self::with_config(controller, now, SchedulerConfig::default())
    }

    pub fn with_config(
        controller: StripController<C, T, N>,
        now: Instant,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            controller,
            next_flash: now + config.flash_period,
            flash_period: config.flash_period,
        }
    }

    /// Run one loop iteration.
    ///
    /// 1. Toggles the flash phase if the period has elapsed
    /// 2. Sends the frame if it is dirty and the wire is free
    pub fn poll(&mut self, now: Instant) -> PollResult {
        let flashed = if now >= self.next_flash {
            // Skip missed periods instead of flashing in a burst
            if now.as_millis() > self.next_flash.as_millis() + self.flash_period.as_millis() {
                self.next_flash = now;
            }
            self.next_flash += self.flash_period;
            Some(self.controller.flash())
        } else {
            None
        };

        let refresh = self.controller.refresh();

        PollResult {
            flashed,
            refresh,
            next_flash: self.next_flash,
        }
    }

    /// Time left until the next flash, zero if overdue
    pub fn time_until_flash(&self, now: Instant) -> Duration {
        self.next_flash
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0))
    }

    pub fn controller(&self) -> &StripController<C, T, N> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut StripController<C, T, N> {
        &mut self.controller
    }

    /// Hand back the controller
    pub fn into_controller(self) -> StripController<C, T, N> {
        self.controller
    }
}
