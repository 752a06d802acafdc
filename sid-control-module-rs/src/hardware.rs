//! Fixed MIDI identities of the Move controller surface.
//!
//! The controller reports every physical element as a note or control-change
//! number on its internal port, and lights LEDs by the same note numbers.

use sid_control::KNOBS_PER_PAGE;

// ---------------------------------------------------------------------------
// Status bytes (channel nibble masked off)
// ---------------------------------------------------------------------------

pub const STATUS_NOTE_OFF: u8 = 0x80;
pub const STATUS_NOTE_ON: u8 = 0x90;
pub const STATUS_CONTROL_CHANGE: u8 = 0xB0;

/// Largest 7-bit data value; a control change at this value means "held".
pub const DATA_MAX: u8 = 127;

// ---------------------------------------------------------------------------
// Knobs
// ---------------------------------------------------------------------------

/// Number of touch-sensitive endless knobs.
pub const KNOB_COUNT: usize = KNOBS_PER_PAGE;

/// Capacitive touch of knob `i` arrives as note `i`.
pub const KNOB_TOUCH_NOTES: [u8; KNOB_COUNT] = sequential(0);

/// Relative turn codes of knob `i` arrive on these control numbers.
pub const KNOB_CCS: [u8; KNOB_COUNT] = sequential(71);

/// Shift button control number.
pub const SHIFT_CC: u8 = 49;

// ---------------------------------------------------------------------------
// Buttons and pads
// ---------------------------------------------------------------------------

/// Number of step buttons used for page select.
pub const PAGE_BUTTON_COUNT: usize = 8;

/// Step buttons 1–8, used as page-select buttons and page indicators.
pub const PAGE_BUTTON_NOTES: [u8; PAGE_BUTTON_COUNT] = sequential(16);

/// Number of velocity-sensitive pads.
pub const PAD_COUNT: usize = 32;

/// Pad notes, bottom-left pad first, row by row.
pub const PAD_NOTES: [u8; PAD_COUNT] = sequential(68);

/// Note played by pad 0 (C2). Pad `i` plays `PAD_START_NOTE + i`.
pub const PAD_START_NOTE: u8 = 36;

/// Pads plus page indicators.
pub const LED_COUNT: usize = PAD_COUNT + PAGE_BUTTON_COUNT;

// ---------------------------------------------------------------------------
// LED palette
// ---------------------------------------------------------------------------

/// Index into the controller's LED colour palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedColor(pub u8);

impl LedColor {
    pub const BLACK: LedColor = LedColor(0);
    pub const WHITE: LedColor = LedColor(120);
    pub const ROSE: LedColor = LedColor(23);
    pub const BRIGHT_PINK: LedColor = LedColor(25);

    /// Pad held down.
    pub const PAD_ACTIVE: LedColor = LedColor::WHITE;
    /// Indicator of the selected page.
    pub const PAGE_SELECTED: LedColor = LedColor::WHITE;
    /// Indicator of every other page.
    pub const PAGE_IDLE: LedColor = LedColor::BLACK;
}

/// Resting colour of pad `pad`: C notes are accented so the octave layout is
/// visible.
pub fn pad_resting_color(pad: usize) -> LedColor {
    if pad_note(pad) % 12 == 0 {
        LedColor::BRIGHT_PINK
    } else {
        LedColor::ROSE
    }
}

/// Note played by pad `pad`.
pub fn pad_note(pad: usize) -> u8 {
    PAD_START_NOTE.wrapping_add(pad as u8)
}

/// Colour of the indicator for `page` while `current` is selected.
pub fn page_indicator_color(page: usize, current: usize) -> LedColor {
    if page == current {
        LedColor::PAGE_SELECTED
    } else {
        LedColor::PAGE_IDLE
    }
}

const fn sequential<const N: usize>(first: u8) -> [u8; N] {
    let mut notes = [0; N];
    let mut i = 0;
    while i < N {
        notes[i] = first + i as u8;
        i += 1;
    }
    notes
}
