//! Relative control-change encoding used by endless knobs.
//!
//! The data byte is a 7-bit two's-complement step count:
//! - `1..=63`   — clockwise, `code` steps
//! - `65..=127` — anticlockwise, `128 - code` steps
//!
//! `0` and `64` carry no movement.

/// Code for "no movement".
pub const NO_MOVEMENT: u8 = 0;

/// Boundary between the clockwise and anticlockwise halves. Carries no
/// movement either.
pub const CENTER: u8 = 64;

/// Decode a raw relative code into a signed step count, without acceleration.
///
/// # Example
/// ```
/// use knob_decoder::decode_relative;
///
/// assert_eq!(decode_relative(3), 3);
/// assert_eq!(decode_relative(125), -3);
/// assert_eq!(decode_relative(64), 0);
/// ```
pub fn decode_relative(code: u8) -> i32 {
    let code = code & 0x7F;
    match code {
        NO_MOVEMENT | CENTER => 0,
        1..=63 => code as i32,
        _ => code as i32 - 128,
    }
}
