//! Parameter grid layout and rendering.
//!
//! This module defines the [`DisplayConfig`] geometry, the immutable
//! [`GridState`] snapshot of one page, and the [`render_grid`] function that
//! draws a frame using `embedded-graphics`.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Baseline, Text},
};
use heapless::String;

use sid_control::{Page, ValueStore, KNOBS_PER_PAGE};

/// Product name drawn at the left of the header.
pub const PRODUCT_NAME: &str = "SIDControl";

/// Grid columns; knob `i` sits in row `i / 2`, column `i % 2`.
const GRID_COLUMNS: usize = 2;

// ── DisplayConfig ────────────────────────────────────────────────────────

/// Layout geometry for the parameter grid.
///
/// [`DisplayConfig::default()`] reproduces the Move screen layout (128×64,
/// header above a divider, 4 rows × 2 columns of `name:value` cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Total display width in pixels. Default: 128.
    pub display_width: u32,
    /// Total display height in pixels. Default: 64.
    pub display_height: u32,
    /// Horizontal advance of one glyph in pixels. Default: 6.
    pub glyph_width: u32,
    /// Inset of the header text from the top and side edges. Default: 2.
    pub header_margin: i32,
    /// Y coordinate of the one-pixel divider under the header. Default: 12.
    pub divider_y: i32,
    /// Y coordinate of the first grid row. Default: 15.
    pub grid_top: i32,
    /// Vertical distance between grid rows. Default: 12.
    pub row_height: i32,
    /// X coordinate of each grid column. Default: `[2, 66]`.
    pub column_x: [i32; GRID_COLUMNS],
    /// Maximum characters drawn per cell. Default: 10.
    pub label_chars: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            display_width: 128,
            display_height: 64,
            glyph_width: 6,
            header_margin: 2,
            divider_y: 12,
            grid_top: 15,
            row_height: 12,
            column_x: [2, 66],
            label_chars: 10,
        }
    }
}

impl DisplayConfig {
    /// Top-left corner of the cell driven by `knob`.
    pub fn cell_origin(&self, knob: usize) -> Point {
        let row = (knob / GRID_COLUMNS) as i32;
        let column = knob % GRID_COLUMNS;
        Point::new(self.column_x[column], self.grid_top + row * self.row_height)
    }

    /// X coordinate that right-aligns `chars` glyphs against the margin.
    pub fn right_aligned_x(&self, chars: usize) -> i32 {
        self.display_width as i32 - (chars as u32 * self.glyph_width) as i32 - self.header_margin
    }
}

// ── GridState ────────────────────────────────────────────────────────────

/// One bound parameter as shown in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridCell {
    pub name: &'static str,
    pub value: u8,
}

impl GridCell {
    /// Full `"<name>:<value>"` label, before truncation.
    pub fn label(&self) -> String<32> {
        let mut buf = String::new();
        // Names are short catalogue labels; overflow only drops characters.
        let _ = write!(buf, "{}:{}", self.name, self.value);
        buf
    }
}

/// Snapshot of everything the grid needs to render one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridState {
    /// Name of the active page.
    pub page_name: &'static str,
    /// One cell per knob; `None` for empty slots (drawn blank).
    pub cells: [Option<GridCell>; KNOBS_PER_PAGE],
}

impl GridState {
    /// Build from a page and the current control values.
    pub fn from_page(page: &Page, values: &ValueStore) -> Self {
        let cells = core::array::from_fn(|knob| {
            page.params[knob].as_ref().map(|param| GridCell {
                name: param.name,
                value: values.get(param.cc),
            })
        });

        Self {
            page_name: page.name,
            cells,
        }
    }
}

/// First `max_chars` characters of `text`.
pub(crate) fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

// ── Rendering ────────────────────────────────────────────────────────────

/// Clear `display` and draw `state` into it.
///
/// # Layout
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ SIDControl                          [Global] │
/// ├──────────────────────────────────────────────┤  ← divider_y
/// │ Volume:64              Ext In:64             │  ← grid_top
/// │ Mode:64                LP:64                 │
/// │ BP:64                  Cutoff:64             │
/// │ Resonance:             HP:64                 │
/// └──────────────────────────────────────────────┘
///   knobs 1,3,5,7          knobs 2,4,6,8
/// ```
///
/// Empty slots draw nothing.
pub fn render_grid<D>(
    display: &mut D,
    state: &GridState,
    config: &DisplayConfig,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    display.clear(BinaryColor::Off)?;

    // ── Header ───────────────────────────────────────────────────────
    let margin = config.header_margin;
    Text::with_baseline(PRODUCT_NAME, Point::new(margin, margin), text_style, Baseline::Top)
        .draw(display)?;

    let mut page_label: String<24> = String::new();
    let page_name = if state.page_name.is_empty() { "???" } else { state.page_name };
    let _ = write!(page_label, "[{}]", page_name);
    let x = config.right_aligned_x(page_label.chars().count());
    Text::with_baseline(page_label.as_str(), Point::new(x, margin), text_style, Baseline::Top)
        .draw(display)?;

    // ── Divider ──────────────────────────────────────────────────────
    Rectangle::new(Point::new(0, config.divider_y), Size::new(config.display_width, 1))
        .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
        .draw(display)?;

    // ── Cells ────────────────────────────────────────────────────────
    for (knob, cell) in state.cells.iter().enumerate() {
        let Some(cell) = cell else { continue };
        let label = cell.label();
        Text::with_baseline(
            truncate(&label, config.label_chars),
            config.cell_origin(knob),
            text_style,
            Baseline::Top,
        )
        .draw(display)?;
    }

    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FrameBuffer;
    use sid_control::PAGES;

    fn lit_in(frame: &FrameBuffer, origin: Point, size: Size) -> usize {
        let mut count = 0;
        for y in origin.y..origin.y + size.height as i32 {
            for x in origin.x..origin.x + size.width as i32 {
                if frame.pixel(x, y) == Some(true) {
                    count += 1;
                }
            }
        }
        count
    }

    fn render(state: &GridState) -> FrameBuffer {
        let mut frame = FrameBuffer::new();
        render_grid(&mut frame, state, &DisplayConfig::default()).unwrap();
        frame
    }

    // ── GridState ────────────────────────────────────────────────────

    #[test]
    fn from_page_reads_values_by_control_number() {
        let mut values = ValueStore::new();
        values.set(7, 69);

        let state = GridState::from_page(&PAGES[0], &values);
        assert_eq!(state.page_name, "Global");
        assert_eq!(state.cells[0], Some(GridCell { name: "Volume", value: 69 }));
        assert_eq!(state.cells[1], Some(GridCell { name: "Ext In", value: 64 }));
    }

    #[test]
    fn from_page_leaves_empty_slots_blank() {
        let state = GridState::from_page(&PAGES[1], &ValueStore::new());
        assert_eq!(state.cells[0].unwrap().name, "Tuning");
        assert!(state.cells[1..].iter().all(|c| c.is_none()));
    }

    #[test]
    fn cell_label_format() {
        let cell = GridCell { name: "Volume", value: 69 };
        assert_eq!(cell.label().as_str(), "Volume:69");
    }

    #[test]
    fn long_labels_truncate_to_budget() {
        let cell = GridCell { name: "Resonance", value: 127 };
        let label = cell.label();
        assert_eq!(label.as_str(), "Resonance:127");
        assert_eq!(truncate(&label, 10), "Resonance:");
        assert_eq!(truncate("LP:3", 10), "LP:3");
    }

    // ── Geometry ─────────────────────────────────────────────────────

    #[test]
    fn cell_origins_follow_two_column_grid() {
        let config = DisplayConfig::default();
        assert_eq!(config.cell_origin(0), Point::new(2, 15));
        assert_eq!(config.cell_origin(1), Point::new(66, 15));
        assert_eq!(config.cell_origin(6), Point::new(2, 51));
        assert_eq!(config.cell_origin(7), Point::new(66, 51));
    }

    #[test]
    fn page_name_is_right_aligned() {
        let config = DisplayConfig::default();
        // "[Global]" is 8 glyphs wide.
        assert_eq!(config.right_aligned_x(8), 128 - 48 - 2);
    }

    // ── Rendering ────────────────────────────────────────────────────

    #[test]
    fn divider_spans_full_width() {
        let frame = render(&GridState::from_page(&PAGES[0], &ValueStore::new()));
        for x in 0..128 {
            assert_eq!(frame.pixel(x, 12), Some(true), "divider pixel {}", x);
        }
        assert_eq!(frame.pixel(0, 13), Some(false));
    }

    #[test]
    fn empty_slots_render_nothing() {
        let frame = render(&GridState::from_page(&PAGES[1], &ValueStore::new()));
        let config = DisplayConfig::default();

        // Knob 0 (Tuning) is drawn; knob 1's cell stays dark.
        assert!(lit_in(&frame, config.cell_origin(0), Size::new(60, 10)) > 0);
        assert_eq!(lit_in(&frame, config.cell_origin(1), Size::new(60, 10)), 0);
        for knob in 2..KNOBS_PER_PAGE {
            assert_eq!(lit_in(&frame, config.cell_origin(knob), Size::new(60, 10)), 0);
        }
    }

    #[test]
    fn render_clears_previous_frame() {
        let mut frame = FrameBuffer::new();
        let config = DisplayConfig::default();
        render_grid(&mut frame, &GridState::from_page(&PAGES[0], &ValueStore::new()), &config).unwrap();
        render_grid(&mut frame, &GridState::from_page(&PAGES[1], &ValueStore::new()), &config).unwrap();

        assert_eq!(frame, render(&GridState::from_page(&PAGES[1], &ValueStore::new())));
    }

    #[test]
    fn value_change_changes_frame() {
        let mut values = ValueStore::new();
        let before = render(&GridState::from_page(&PAGES[0], &values));
        values.set(7, 0);
        let after = render(&GridState::from_page(&PAGES[0], &values));
        assert_ne!(before, after);
    }

    #[test]
    fn unnamed_page_falls_back_to_placeholder() {
        let frame = render(&GridState::default());
        let config = DisplayConfig::default();
        // "[???]" is 5 glyphs; something is drawn in the right header.
        let x = config.right_aligned_x(5);
        assert!(lit_in(&frame, Point::new(x, 2), Size::new(30, 10)) > 0);
    }
}
