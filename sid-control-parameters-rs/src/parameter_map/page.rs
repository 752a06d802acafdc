use super::parameter::ParameterSlot;
use super::KNOBS_PER_PAGE;

/// A named page of parameter slots mapped to the physical knobs.
///
/// Each page contains exactly [`KNOBS_PER_PAGE`] slots. Slot `i` is driven by
/// knob `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Page {
    /// Page name shown in the display header.
    pub name: &'static str,
    /// Parameter slots indexed by knob position (0–7).
    pub params: [ParameterSlot; KNOBS_PER_PAGE],
}

impl Page {
    /// Number of bound (non-empty) slots on this page.
    pub fn bound_count(&self) -> usize {
        self.params.iter().filter(|s| s.is_bound()).count()
    }
}
