//! Classification of inbound controller messages.
//!
//! [`classify`] maps a raw message to at most one [`InputEvent`]. Categories
//! are tried in a fixed priority order and the first match wins:
//!
//! 1. knob touch notes
//! 2. page-select notes (press edge only)
//! 3. pad notes
//! 4. shift control change
//! 5. knob control changes
//!
//! Anything else is dropped.

use crate::hardware::{
    DATA_MAX, KNOB_CCS, KNOB_TOUCH_NOTES, PAD_NOTES, PAGE_BUTTON_NOTES, SHIFT_CC,
    STATUS_CONTROL_CHANGE, STATUS_NOTE_OFF, STATUS_NOTE_ON,
};

/// A classified controller input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Knob touched (`pressed`) or released.
    KnobTouch { knob: usize, pressed: bool },
    /// Page-select button pressed.
    PageSelect { page: usize },
    PadPress { pad: usize, velocity: u8 },
    PadRelease { pad: usize },
    /// Shift button state changed.
    Shift { held: bool },
    /// Knob turned; `code` is the raw relative-encoder data byte.
    KnobTurn { knob: usize, code: u8 },
}

/// Classify a raw `[status, data1, data2]` message.
///
/// The channel nibble is ignored. A note-on with velocity 0 counts as a
/// release. Messages shorter than three bytes return `None`.
///
/// # Examples
///
/// ```
/// use sid_control_module::{classify, InputEvent};
///
/// assert_eq!(classify(&[0xB0, 71, 1]), Some(InputEvent::KnobTurn { knob: 0, code: 1 }));
/// assert_eq!(classify(&[0x90, 68, 100]), Some(InputEvent::PadPress { pad: 0, velocity: 100 }));
/// assert_eq!(classify(&[0x90, 16, 0]), None);
/// ```
pub fn classify(message: &[u8]) -> Option<InputEvent> {
    let [status, data1, data2] = match message {
        [status, data1, data2, ..] => [*status, *data1, *data2],
        _ => return None,
    };

    match status & 0xF0 {
        STATUS_NOTE_ON | STATUS_NOTE_OFF => {
            let pressed = status & 0xF0 == STATUS_NOTE_ON && data2 > 0;
            classify_note(data1, data2, pressed)
        }
        STATUS_CONTROL_CHANGE => classify_control(data1, data2),
        _ => None,
    }
}

fn classify_note(note: u8, velocity: u8, pressed: bool) -> Option<InputEvent> {
    if let Some(knob) = index_of(&KNOB_TOUCH_NOTES, note) {
        return Some(InputEvent::KnobTouch { knob, pressed });
    }

    if let Some(page) = index_of(&PAGE_BUTTON_NOTES, note) {
        // Releases of page buttons carry no action.
        return pressed.then_some(InputEvent::PageSelect { page });
    }

    let pad = index_of(&PAD_NOTES, note)?;
    Some(if pressed {
        InputEvent::PadPress { pad, velocity }
    } else {
        InputEvent::PadRelease { pad }
    })
}

fn classify_control(cc: u8, value: u8) -> Option<InputEvent> {
    if cc == SHIFT_CC {
        return Some(InputEvent::Shift {
            held: value == DATA_MAX,
        });
    }

    let knob = index_of(&KNOB_CCS, cc)?;
    Some(InputEvent::KnobTurn { knob, code: value })
}

fn index_of(table: &[u8], key: u8) -> Option<usize> {
    table.iter().position(|&k| k == key)
}
