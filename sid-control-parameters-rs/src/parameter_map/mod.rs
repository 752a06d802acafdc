//! SIDaster III parameter catalogue with page-based organization.
//!
//! Parameters are organized into **pages** of up to 8 slots, matching the 8
//! physical knobs. Each page is selected by one of the step buttons and each
//! bound slot addresses one control-change number on the synthesizer.
//!
//! ```text
//! Page 0 (Global): [Volume] [Ext In] [Mode] [LP] [BP] [Cutoff] [Resonance] [HP]
//! Page 1 (Tune):   [Tuning] [--] [--] [--] [--] [--] [--] [--]
//! Page 2 (OSC 1):  [Wave] [Coarse] [Fine] [Duty] [Ring] [Sync] [Attack] [Decay]
//! Page 3 (OSC 1+): [Sustain] [Release] [Output] [--] [--] [--] [--] [--]
//! ...             (OSC 2 / OSC 2+ / OSC 3 / OSC 3+ repeat the OSC 1 layout)
//! ```
//!
//! **Invariant:** a control number appears on at most one page. The value
//! store is global, so a duplicate would make two knobs share one value.

mod error;
mod map;
mod page;
mod parameter;

pub use error::ParameterError;
pub use map::ParameterMap;
pub use page::Page;
pub use parameter::{Parameter, ParameterSlot};

/// Number of parameter slots per page (matches the number of physical knobs).
pub const KNOBS_PER_PAGE: usize = 8;

/// Number of pages in the catalogue (one per page-select button).
pub const N_PAGES: usize = 8;

const EMPTY: ParameterSlot = ParameterSlot::Empty;

/// Oscillator page: waveform, pitch, pulse width, modulation and the first
/// half of the envelope. `base` is the control number of `Wave`.
const fn oscillator(name: &'static str, base: u8) -> Page {
    Page {
        name,
        params: [
            ParameterSlot::bound("Wave", base),
            ParameterSlot::bound("Coarse", base + 1),
            ParameterSlot::bound("Fine", base + 2),
            ParameterSlot::bound("Duty", base + 3),
            ParameterSlot::bound("Ring", base + 4),
            ParameterSlot::bound("Sync", base + 5),
            ParameterSlot::bound("Attack", base + 6),
            ParameterSlot::bound("Decay", base + 7),
        ],
    }
}

/// Oscillator extension page: the rest of the envelope and the output level.
/// `base` is the control number of `Sustain`.
const fn oscillator_extra(name: &'static str, base: u8) -> Page {
    Page {
        name,
        params: [
            ParameterSlot::bound("Sustain", base),
            ParameterSlot::bound("Release", base + 1),
            ParameterSlot::bound("Output", base + 2),
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    }
}

/// The page catalogue. Order defines the page-select button index.
pub const PAGES: [Page; N_PAGES] = [
    Page {
        name: "Global",
        params: [
            ParameterSlot::bound("Volume", 7),
            ParameterSlot::bound("Ext In", 8),
            ParameterSlot::bound("Mode", 9),
            ParameterSlot::bound("LP", 10),
            ParameterSlot::bound("BP", 11),
            ParameterSlot::bound("Cutoff", 12),
            ParameterSlot::bound("Resonance", 13),
            ParameterSlot::bound("HP", 14),
        ],
    },
    Page {
        name: "Tune",
        params: [
            ParameterSlot::bound("Tuning", 15),
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
            EMPTY,
        ],
    },
    oscillator("OSC 1", 16),
    oscillator_extra("OSC 1+", 24),
    oscillator("OSC 2", 32),
    oscillator_extra("OSC 2+", 40),
    oscillator("OSC 3", 48),
    oscillator_extra("OSC 3+", 56),
];
