/// Errors that can occur when looking up parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParameterError {
    /// Page index is out of bounds (must be < page count).
    InvalidPageIndex,
    /// Knob index is out of bounds (must be < KNOBS_PER_PAGE).
    InvalidKnobIndex,
    /// Lookup targeted an [`Empty`](super::ParameterSlot::Empty) slot.
    EmptySlot,
}
