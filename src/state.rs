use crate::index::IndexPair;

/// Per-LED palette index pairs, position 0 nearest the controller
#[derive(Debug, Clone)]
pub struct LedStateTable<const N: usize> {
    leds: [IndexPair; N],
}

impl<const N: usize> LedStateTable<N> {
    /// Create a table with every LED off
    pub const fn new() -> Self {
        Self {
            leds: [IndexPair::OFF; N],
        }
    }

    /// Number of LEDs
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Overwrite the pair of every LED in `start..=end`.
    ///
    /// `end` is clamped to the last LED. An inverted range is a no-op.
    /// Returns the number of LEDs written.
    pub fn update_range(&mut self, start: usize, end: usize, pair: IndexPair) -> usize {
        let Some(last) = N.checked_sub(1) else {
            return 0;
        };
        let end = end.min(last);
        if start > end {
            return 0;
        }
        let Some(range) = self.leds.get_mut(start..=end) else {
            return 0;
        };
        range.fill(pair);
        range.len()
    }

    /// Set a single LED, out of range positions are ignored
    pub fn set(&mut self, position: usize, pair: IndexPair) {
        if let Some(led) = self.leds.get_mut(position) {
            *led = pair;
        }
    }

    pub fn get(&self, position: usize) -> Option<IndexPair> {
        self.leds.get(position).copied()
    }

    /// Reset every LED to black in both phases
    pub fn clear(&mut self) {
        self.leds.fill(IndexPair::OFF);
    }

    pub fn iter(&self) -> impl Iterator<Item = IndexPair> + '_ {
        self.leds.iter().copied()
    }

    pub fn as_slice(&self) -> &[IndexPair] {
        &self.leds
    }
}

impl<const N: usize> Default for LedStateTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
