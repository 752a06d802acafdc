//! Transient parameter readout drawn over the grid.
//!
//! [`Overlay`] is shown whenever a knob is touched or turned and hides itself
//! after [`OverlayConfig::timeout_ticks`] host ticks. Every `show` re-arms the
//! countdown, so a knob that keeps turning keeps its readout on screen.

use core::fmt::Write;

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

/// Longest label kept by the overlay, in bytes.
pub const LABEL_CAPACITY: usize = 16;

/// Timing and geometry of the overlay box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverlayConfig {
    /// Ticks the overlay stays visible after the last `show`. Default: 90.
    pub timeout_ticks: u16,
    /// Top-left corner of the box. Default: (14, 18).
    pub origin: (i32, i32),
    /// Box size in pixels. Default: 100 × 30.
    pub size: (u32, u32),
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            timeout_ticks: 90,
            origin: (14, 18),
            size: (100, 30),
        }
    }
}

/// Label/value popup with a tick-driven timeout.
///
/// # Example
///
/// ```
/// use sid_control_display::{Overlay, OverlayConfig};
///
/// let mut overlay = Overlay::new(OverlayConfig { timeout_ticks: 2, ..Default::default() });
/// overlay.show("Volume", 69);
/// assert!(overlay.is_active());
///
/// overlay.tick();
/// overlay.tick();
/// assert!(!overlay.is_active());
/// ```
#[derive(Debug, Clone)]
pub struct Overlay {
    label: String<LABEL_CAPACITY>,
    value: i32,
    /// Ticks left before the overlay hides; `0` means inactive.
    remaining: u16,
    config: OverlayConfig,
}

impl Default for Overlay {
    fn default() -> Self {
        Self::new(OverlayConfig::default())
    }
}

impl Overlay {
    pub fn new(config: OverlayConfig) -> Self {
        Self {
            label: String::new(),
            value: 0,
            remaining: 0,
            config,
        }
    }

    /// Show `label` and `value`, replacing any current content and
    /// restarting the timeout. Labels longer than [`LABEL_CAPACITY`] bytes
    /// are cut at the last whole character that fits.
    pub fn show(&mut self, label: &str, value: i32) {
        self.label.clear();
        for c in label.chars() {
            if self.label.push(c).is_err() {
                break;
            }
        }
        self.value = value;
        self.remaining = self.config.timeout_ticks;
    }

    /// Hide immediately.
    pub fn hide(&mut self) {
        self.remaining = 0;
    }

    /// Advance the timeout by one tick.
    pub fn tick(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    /// Label currently shown, or `None` when inactive.
    pub fn label(&self) -> Option<&str> {
        self.is_active().then_some(self.label.as_str())
    }

    /// Value currently shown, or `None` when inactive.
    pub fn value(&self) -> Option<i32> {
        self.is_active().then_some(self.value)
    }

    /// Composite the overlay onto `display`. Draws nothing when inactive.
    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        if !self.is_active() {
            return Ok(());
        }

        let (x, y) = self.config.origin;
        let (width, height) = self.config.size;

        // Filled background so the grid underneath does not show through.
        let frame_style = PrimitiveStyleBuilder::new()
            .stroke_color(BinaryColor::On)
            .stroke_width(1)
            .fill_color(BinaryColor::Off)
            .build();
        Rectangle::new(Point::new(x, y), Size::new(width, height))
            .into_styled(frame_style)
            .draw(display)?;

        let text_style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let centred = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let centre_x = x + width as i32 / 2;

        Text::with_text_style(&self.label, Point::new(centre_x, y + 4), text_style, centred)
            .draw(display)?;

        let mut value: String<12> = String::new();
        let _ = write!(value, "{}", self.value);
        Text::with_text_style(&value, Point::new(centre_x, y + 16), text_style, centred)
            .draw(display)?;

        Ok(())
    }
}
