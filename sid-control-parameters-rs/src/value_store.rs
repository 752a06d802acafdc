//! Last-known absolute value for every control-change number.
//!
//! One global store is shared by all pages: a control number keeps its value
//! when the user switches pages.

/// Number of addressable control-change numbers.
pub const CONTROL_COUNT: usize = 128;

/// Largest value a control-change message can carry.
pub const MAX_VALUE: u8 = 127;

/// Start-up value for every control. Mid-scale, so the first touch of an
/// unconfigured parameter does not read as a misleading 0.
pub const DEFAULT_VALUE: u8 = 64;

/// Absolute values (0–127) indexed by control number.
///
/// Control numbers are 7-bit; the high bit of a `cc` argument is ignored.
///
/// # Examples
///
/// ```
/// use sid_control::ValueStore;
///
/// let mut store = ValueStore::new();
/// assert_eq!(store.get(7), 64);
///
/// store.set(7, 200);
/// assert_eq!(store.get(7), 127);
///
/// assert_eq!(store.apply_delta(7, -27), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueStore {
    values: [u8; CONTROL_COUNT],
}

impl Default for ValueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueStore {
    /// Create a store with every control at [`DEFAULT_VALUE`].
    pub const fn new() -> Self {
        Self {
            values: [DEFAULT_VALUE; CONTROL_COUNT],
        }
    }

    /// Current value of control `cc`.
    pub fn get(&self, cc: u8) -> u8 {
        self.values[Self::index(cc)]
    }

    /// Store `value` for control `cc`, clamped to `[0, MAX_VALUE]`.
    pub fn set(&mut self, cc: u8, value: i32) {
        // The clamp keeps the cast lossless.
        self.values[Self::index(cc)] = value.clamp(0, MAX_VALUE as i32) as u8;
    }

    /// Add `delta` to control `cc`, clamp, store, and return the new value.
    pub fn apply_delta(&mut self, cc: u8, delta: i32) -> u8 {
        let old = self.get(cc) as i32;
        self.set(cc, old.saturating_add(delta));
        self.get(cc)
    }

    /// Put every control back to [`DEFAULT_VALUE`].
    pub fn reset(&mut self) {
        self.values = [DEFAULT_VALUE; CONTROL_COUNT];
    }

    fn index(cc: u8) -> usize {
        (cc & 0x7F) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_mid_scale() {
        let store = ValueStore::new();
        for cc in 0..CONTROL_COUNT as u8 {
            assert_eq!(store.get(cc), DEFAULT_VALUE);
        }
    }

    #[test]
    fn set_clamps_to_midi_range() {
        let mut store = ValueStore::new();
        for (input, expected) in [(-1000, 0), (-1, 0), (0, 0), (69, 69), (127, 127), (128, 127), (i32::MAX, 127)] {
            store.set(12, input);
            assert_eq!(store.get(12), expected, "set({})", input);
        }
    }

    #[test]
    fn apply_delta_clamps_at_both_ends() {
        let mut store = ValueStore::new();
        assert_eq!(store.apply_delta(7, 5), 69);
        assert_eq!(store.apply_delta(7, 100), 127);
        assert_eq!(store.apply_delta(7, -500), 0);
        assert_eq!(store.apply_delta(7, i32::MIN), 0);
    }

    #[test]
    fn controls_are_independent() {
        let mut store = ValueStore::new();
        store.set(16, 0);
        store.set(32, 127);
        assert_eq!(store.get(16), 0);
        assert_eq!(store.get(32), 127);
        assert_eq!(store.get(48), DEFAULT_VALUE);
    }

    #[test]
    fn high_bit_is_ignored() {
        let mut store = ValueStore::new();
        store.set(0x80 | 7, 10);
        assert_eq!(store.get(7), 10);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut store = ValueStore::new();
        store.set(1, 0);
        store.set(127, 0);
        store.reset();
        assert_eq!(store, ValueStore::new());
    }
}
