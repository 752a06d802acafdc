use super::error::ParameterError;
use super::page::Page;
use super::parameter::{Parameter, ParameterSlot};
use super::{KNOBS_PER_PAGE, PAGES};

/// Read-only lookup over a page catalogue.
///
/// Every lookup is total: out-of-range page or knob indices resolve to
/// `None` (or a [`ParameterError`] from [`slot`](Self::slot)), never a panic.
///
/// # Examples
///
/// ```
/// use sid_control::ParameterMap;
///
/// let map = ParameterMap::new();
/// assert_eq!(map.page(0).unwrap().name, "Global");
/// assert_eq!(map.parameter_for_knob(0, 0).unwrap().cc, 7);
///
/// // Page "Tune" only binds knob 0.
/// assert!(map.parameter_for_knob(1, 5).is_none());
/// assert!(map.page(9).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ParameterMap {
    pages: &'static [Page],
}

impl Default for ParameterMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterMap {
    /// Map over the SIDaster III catalogue ([`PAGES`]).
    pub const fn new() -> Self {
        Self { pages: &PAGES }
    }

    /// Map over a custom catalogue.
    pub const fn from_pages(pages: &'static [Page]) -> Self {
        Self { pages }
    }

    /// Number of pages in the catalogue.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the page at `index`, or `None` if out of range.
    pub fn page(&self, index: usize) -> Option<&'static Page> {
        self.pages.get(index)
    }

    /// Look up the parameter bound to `knob` on page `page`.
    ///
    /// # Errors
    /// * [`ParameterError::InvalidPageIndex`] if `page >= page_count()`
    /// * [`ParameterError::InvalidKnobIndex`] if `knob >= KNOBS_PER_PAGE`
    /// * [`ParameterError::EmptySlot`] if nothing is bound to that knob
    pub fn slot(&self, page: usize, knob: usize) -> Result<&'static Parameter, ParameterError> {
        let page = self.page(page).ok_or(ParameterError::InvalidPageIndex)?;
        if knob >= KNOBS_PER_PAGE {
            return Err(ParameterError::InvalidKnobIndex);
        }
        match &page.params[knob] {
            ParameterSlot::Bound(param) => Ok(param),
            ParameterSlot::Empty => Err(ParameterError::EmptySlot),
        }
    }

    /// Total form of [`slot`](Self::slot): `None` for any failed lookup.
    pub fn parameter_for_knob(&self, page: usize, knob: usize) -> Option<&'static Parameter> {
        self.slot(page, knob).ok()
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::N_PAGES;

    // ── Catalogue shape ──────────────────────────────────────────────

    #[test]
    fn catalogue_has_eight_pages_in_button_order() {
        let map = ParameterMap::new();
        assert_eq!(map.page_count(), N_PAGES);

        let names: [&str; N_PAGES] = core::array::from_fn(|i| map.page(i).unwrap().name);
        assert_eq!(
            names,
            ["Global", "Tune", "OSC 1", "OSC 1+", "OSC 2", "OSC 2+", "OSC 3", "OSC 3+"]
        );
    }

    #[test]
    fn bound_counts_per_page() {
        let counts: [usize; N_PAGES] = core::array::from_fn(|i| PAGES[i].bound_count());
        assert_eq!(counts, [8, 1, 8, 3, 8, 3, 8, 3]);
    }

    #[test]
    fn control_numbers_are_unique_across_pages() {
        let mut seen = [false; 128];
        for page in &PAGES {
            for param in page.params.iter().filter_map(|s| s.as_ref()) {
                assert!(param.cc < 128, "{} has cc {}", param.name, param.cc);
                assert!(!seen[param.cc as usize], "cc {} bound twice", param.cc);
                seen[param.cc as usize] = true;
            }
        }
    }

    #[test]
    fn oscillator_pages_are_offset_by_sixteen() {
        let map = ParameterMap::new();
        assert_eq!(map.parameter_for_knob(2, 0).unwrap().cc, 16);
        assert_eq!(map.parameter_for_knob(4, 0).unwrap().cc, 32);
        assert_eq!(map.parameter_for_knob(6, 7).unwrap().cc, 55);
        assert_eq!(map.parameter_for_knob(7, 2).unwrap(), &Parameter::new("Output", 58));
    }

    // ── Lookups ──────────────────────────────────────────────────────

    #[test]
    fn slot_returns_bound_parameter() {
        let map = ParameterMap::new();
        assert_eq!(map.slot(0, 0), Ok(&Parameter::new("Volume", 7)));
        assert_eq!(map.slot(0, 6), Ok(&Parameter::new("Resonance", 13)));
    }

    #[test]
    fn slot_errors() {
        let map = ParameterMap::new();
        assert_eq!(map.slot(8, 0), Err(ParameterError::InvalidPageIndex));
        assert_eq!(map.slot(0, 8), Err(ParameterError::InvalidKnobIndex));
        assert_eq!(map.slot(1, 1), Err(ParameterError::EmptySlot));
    }

    #[test]
    fn out_of_range_lookups_are_absent() {
        let map = ParameterMap::new();
        assert!(map.page(N_PAGES).is_none());
        assert!(map.page(usize::MAX).is_none());
        assert!(map.parameter_for_knob(100, 0).is_none());
        assert!(map.parameter_for_knob(0, 100).is_none());
    }

    #[test]
    fn custom_catalogue() {
        static CUSTOM: [Page; 1] = [Page {
            name: "Solo",
            params: [
                ParameterSlot::Empty,
                ParameterSlot::bound("Gain", 100),
                ParameterSlot::Empty,
                ParameterSlot::Empty,
                ParameterSlot::Empty,
                ParameterSlot::Empty,
                ParameterSlot::Empty,
                ParameterSlot::Empty,
            ],
        }];
        let map = ParameterMap::from_pages(&CUSTOM);
        assert_eq!(map.page_count(), 1);
        assert!(map.parameter_for_knob(0, 0).is_none());
        assert_eq!(map.parameter_for_knob(0, 1).unwrap().name, "Gain");
        assert!(map.page(1).is_none());
    }

    // ── ParameterSlot helpers ────────────────────────────────────────

    #[test]
    fn parameter_slot_helpers() {
        let bound = ParameterSlot::bound("Wave", 16);
        assert!(bound.is_bound());
        assert_eq!(bound.as_ref().unwrap().cc, 16);

        let empty = ParameterSlot::default();
        assert!(!empty.is_bound());
        assert!(empty.as_ref().is_none());
    }
}
