/// A synthesizer parameter bound to a MIDI control-change number.
///
/// Parameters are immutable; their current value lives in the
/// [`ValueStore`](crate::ValueStore), keyed by `cc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Parameter {
    /// Short display label, e.g. `"Cutoff"`.
    pub name: &'static str,
    /// Control-change number (0–127) the synthesizer listens on.
    pub cc: u8,
}

impl Parameter {
    pub const fn new(name: &'static str, cc: u8) -> Self {
        Self { name, cc }
    }
}

/// A knob slot that is either bound to a [`Parameter`] or empty.
///
/// Pages always have [`KNOBS_PER_PAGE`](super::KNOBS_PER_PAGE) slots, but
/// not all may be in use. An `Empty` slot means the corresponding physical
/// knob has no effect on that page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterSlot {
    /// Slot is bound to a parameter.
    Bound(Parameter),
    /// Nothing bound — touches and turns are ignored, nothing is displayed.
    #[default]
    Empty,
}

impl ParameterSlot {
    /// Shorthand used by the page table.
    pub const fn bound(name: &'static str, cc: u8) -> Self {
        ParameterSlot::Bound(Parameter::new(name, cc))
    }

    /// Returns `true` if this slot holds a parameter.
    pub fn is_bound(&self) -> bool {
        matches!(self, ParameterSlot::Bound(_))
    }

    /// Returns the inner [`Parameter`], or `None` if this slot is
    /// [`Empty`](ParameterSlot::Empty).
    pub fn as_ref(&self) -> Option<&Parameter> {
        match self {
            ParameterSlot::Bound(param) => Some(param),
            ParameterSlot::Empty => None,
        }
    }
}
