//! Per-knob accelerated delta decoding.
//!
//! [`AcceleratedDecoder`] keeps the time of each knob's previous turn and
//! multiplies the decoded step count when turns arrive in quick succession,
//! so a fast spin covers the full 0–127 range in a fraction of a rotation.

use crate::codes::decode_relative;
use crate::error::DecoderError;

/// Timing windows and multipliers for knob acceleration.
///
/// Windows are measured in host ticks between two turns of the same knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelerationConfig {
    /// Turns at most this many ticks apart use `fast_multiplier`. Default: 4.
    pub fast_window_ticks: u32,
    /// Step multiplier for fast turns. Default: 4.
    pub fast_multiplier: i32,
    /// Turns at most this many ticks apart use `medium_multiplier`. Default: 12.
    pub medium_window_ticks: u32,
    /// Step multiplier for medium-speed turns. Default: 2.
    pub medium_multiplier: i32,
}

impl Default for AccelerationConfig {
    fn default() -> Self {
        Self {
            fast_window_ticks: 4,
            fast_multiplier: 4,
            medium_window_ticks: 12,
            medium_multiplier: 2,
        }
    }
}

impl AccelerationConfig {
    /// Multiplier for a turn `elapsed` ticks after the previous one.
    pub fn multiplier(&self, elapsed: u32) -> i32 {
        if elapsed <= self.fast_window_ticks {
            self.fast_multiplier
        } else if elapsed <= self.medium_window_ticks {
            self.medium_multiplier
        } else {
            1
        }
    }
}

/// Stateful relative-code decoder for `N` knobs.
///
/// Each knob has its own slot in a fixed array, so decoding never searches
/// a keyed map. Timestamps are supplied by the caller as a wrapping tick
/// count.
///
/// # Example
///
/// ```
/// use knob_decoder::AcceleratedDecoder;
///
/// let mut decoder: AcceleratedDecoder<8> = AcceleratedDecoder::new();
///
/// // First turn of a knob is never accelerated.
/// assert_eq!(decoder.decode(1, 3, 10), Ok(1));
/// // One tick later the same knob is spinning fast.
/// assert_eq!(decoder.decode(1, 3, 11), Ok(4));
/// // Other knobs keep their own history.
/// assert_eq!(decoder.decode(1, 4, 11), Ok(1));
/// ```
#[derive(Debug, Clone)]
pub struct AcceleratedDecoder<const N: usize> {
    last_turn: [Option<u32>; N],
    config: AccelerationConfig,
}

impl<const N: usize> Default for AcceleratedDecoder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> AcceleratedDecoder<N> {
    /// Create a decoder with the default [`AccelerationConfig`].
    pub fn new() -> Self {
        Self::with_config(AccelerationConfig::default())
    }

    pub fn with_config(config: AccelerationConfig) -> Self {
        Self {
            last_turn: [None; N],
            config,
        }
    }

    /// Decode `code` from knob `knob` received at tick `now`.
    ///
    /// Returns the signed step count scaled by turn speed. A code carrying
    /// no movement returns `0` and leaves the knob's history untouched.
    ///
    /// # Errors
    /// * [`DecoderError::InvalidKnob`] if `knob >= N`
    pub fn decode(&mut self, code: u8, knob: usize, now: u32) -> Result<i32, DecoderError> {
        let last = self.last_turn.get_mut(knob).ok_or(DecoderError::InvalidKnob)?;

        let steps = decode_relative(code);
        if steps == 0 {
            return Ok(0);
        }

        let multiplier = match *last {
            Some(previous) => self.config.multiplier(now.wrapping_sub(previous)),
            None => 1,
        };
        *last = Some(now);

        #[cfg(feature = "defmt")]
        defmt::trace!("knob {}: code={} steps={} x{}", knob, code, steps, multiplier);

        Ok(steps.saturating_mul(multiplier))
    }

    /// Forget all turn history; the next turn of every knob is unaccelerated.
    pub fn reset(&mut self) {
        self.last_turn = [None; N];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Acceleration curve ───────────────────────────────────────────

    #[test]
    fn first_turn_is_unaccelerated() {
        let mut decoder: AcceleratedDecoder<8> = AcceleratedDecoder::new();
        assert_eq!(decoder.decode(5, 0, 0), Ok(5));
        assert_eq!(decoder.decode(123, 1, 0), Ok(-5));
    }

    #[test]
    fn multiplier_follows_elapsed_ticks() {
        let mut decoder: AcceleratedDecoder<1> = AcceleratedDecoder::new();
        decoder.decode(1, 0, 1000).unwrap();

        // fast window
        assert_eq!(decoder.decode(1, 0, 1004), Ok(4));
        // medium window
        assert_eq!(decoder.decode(1, 0, 1016), Ok(2));
        // slow
        assert_eq!(decoder.decode(127, 0, 1029), Ok(-1));
    }

    #[test]
    fn same_tick_counts_as_fast() {
        let mut decoder: AcceleratedDecoder<1> = AcceleratedDecoder::new();
        decoder.decode(1, 0, 7).unwrap();
        assert_eq!(decoder.decode(127, 0, 7), Ok(-4));
    }

    #[test]
    fn tick_counter_wraparound() {
        let mut decoder: AcceleratedDecoder<1> = AcceleratedDecoder::new();
        decoder.decode(1, 0, u32::MAX).unwrap();
        assert_eq!(decoder.decode(1, 0, 1), Ok(4));
    }

    #[test]
    fn custom_config() {
        let config = AccelerationConfig {
            fast_window_ticks: 0,
            fast_multiplier: 10,
            medium_window_ticks: 0,
            medium_multiplier: 1,
        };
        let mut decoder: AcceleratedDecoder<2> = AcceleratedDecoder::with_config(config);
        decoder.decode(1, 0, 0).unwrap();
        assert_eq!(decoder.decode(1, 0, 0), Ok(10));
        assert_eq!(decoder.decode(1, 0, 1), Ok(1));
    }

    #[test]
    fn huge_multiplier_saturates() {
        let config = AccelerationConfig {
            fast_multiplier: i32::MAX,
            ..AccelerationConfig::default()
        };
        let mut decoder: AcceleratedDecoder<1> = AcceleratedDecoder::with_config(config);
        decoder.decode(1, 0, 0).unwrap();
        assert_eq!(decoder.decode(63, 0, 1), Ok(i32::MAX));
        assert_eq!(decoder.decode(65, 0, 2), Ok(i32::MIN));
    }

    // ── State handling ───────────────────────────────────────────────

    #[test]
    fn knobs_have_independent_history() {
        let mut decoder: AcceleratedDecoder<8> = AcceleratedDecoder::new();
        decoder.decode(1, 0, 50).unwrap();
        assert_eq!(decoder.decode(1, 7, 51), Ok(1));
        assert_eq!(decoder.decode(1, 0, 51), Ok(4));
    }

    #[test]
    fn no_movement_does_not_touch_history() {
        let mut decoder: AcceleratedDecoder<1> = AcceleratedDecoder::new();
        assert_eq!(decoder.decode(64, 0, 0), Ok(0));
        assert_eq!(decoder.decode(1, 0, 1), Ok(1));
    }

    #[test]
    fn reset_clears_history() {
        let mut decoder: AcceleratedDecoder<1> = AcceleratedDecoder::new();
        decoder.decode(1, 0, 0).unwrap();
        decoder.reset();
        assert_eq!(decoder.decode(1, 0, 1), Ok(1));
    }

    #[test]
    fn invalid_knob() {
        let mut decoder: AcceleratedDecoder<8> = AcceleratedDecoder::new();
        assert_eq!(decoder.decode(1, 8, 0), Err(DecoderError::InvalidKnob));
        assert_eq!(decoder.decode(1, usize::MAX, 0), Err(DecoderError::InvalidKnob));
    }
}
