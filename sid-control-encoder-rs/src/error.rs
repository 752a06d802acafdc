//! Error types for the knob decoder.

use core::fmt;

/// Errors that can occur when decoding a knob turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderError {
    /// Knob index outside the decoder's state array.
    InvalidKnob,
}

impl fmt::Display for DecoderError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DecoderError::InvalidKnob => write!(f, "Invalid knob index"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecoderError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            DecoderError::InvalidKnob => defmt::write!(f, "Invalid knob index"),
        }
    }
}
