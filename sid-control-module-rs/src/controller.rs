//! Page/overlay controller and module lifecycle.
//!
//! [`SidControl`] owns every piece of mutable module state and is driven by
//! the host through three entry points:
//!
//! 1. [`init()`](SidControl::init) once at load: reset values and queue the
//!    progressive LED paint.
//! 2. [`handle_midi()`](SidControl::handle_midi) for each message from the
//!    controller surface.
//! 3. [`tick()`](SidControl::tick) on a steady period: continue the LED paint,
//!    advance the overlay timer and redraw the screen.
//!
//! All three run to completion on the host's single callback thread, so no
//! state is shared or locked.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use knob_decoder::{AccelerationConfig, AcceleratedDecoder};
use sid_control::{Page, ParameterError, ParameterMap, ValueStore};
use sid_control_display::{render_grid, DisplayConfig, GridState, Overlay, OverlayConfig};

use crate::dispatch::{classify, InputEvent};
use crate::hardware::{pad_note, pad_resting_color, LedColor, KNOB_COUNT, PAD_NOTES};
use crate::host::Host;
use crate::leds::{paint_page_indicators, LedInitConfig, LedInitializer};
use crate::midi::OutboundMessage;

/// Tunables for every stage of the module.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleConfig {
    /// Page catalogue the knobs are routed through.
    pub map: ParameterMap,
    pub display: DisplayConfig,
    pub overlay: OverlayConfig,
    pub acceleration: AccelerationConfig,
    pub leds: LedInitConfig,
}

/// Page selection and modifier state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    current_page: usize,
    shift_held: bool,
}

impl Session {
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn shift_held(&self) -> bool {
        self.shift_held
    }

    /// Select `page` if it exists in `map`.
    ///
    /// Returns [`ParameterError::InvalidPageIndex`] and leaves the current
    /// page unchanged otherwise.
    pub fn set_page(&mut self, page: usize, map: &ParameterMap) -> Result<(), ParameterError> {
        if page >= map.page_count() {
            return Err(ParameterError::InvalidPageIndex);
        }
        self.current_page = page;
        Ok(())
    }

    /// Latch the shift modifier. Reserved: no handler consults it yet.
    pub fn set_shift(&mut self, held: bool) {
        self.shift_held = held;
    }
}

/// The SID Control module: routes the Move surface to the SIDaster III.
///
/// # Example
///
/// ```
/// use sid_control_display::FrameBuffer;
/// use sid_control_module::{Host, LedColor, OutboundMessage, SidControl};
///
/// #[derive(Default)]
/// struct Port(Option<OutboundMessage>);
/// impl Host for Port {
///     fn set_led(&mut self, _: u8, _: LedColor) {}
///     fn send_external(&mut self, message: OutboundMessage) { self.0 = Some(message); }
/// }
///
/// let mut module = SidControl::new(Port::default());
/// module.init();
///
/// // Knob 1 one detent clockwise: "Volume" (CC 7) goes from 64 to 65.
/// module.handle_midi(&[0xB0, 71, 1]);
/// assert_eq!(module.host().0, Some(OutboundMessage::ControlChange { cc: 7, value: 65 }));
///
/// let mut frame = FrameBuffer::new();
/// module.tick(&mut frame).unwrap();
/// ```
pub struct SidControl<H> {
    host: H,
    map: ParameterMap,
    values: ValueStore,
    session: Session,
    decoder: AcceleratedDecoder<KNOB_COUNT>,
    leds: LedInitializer,
    overlay: Overlay,
    display: DisplayConfig,
    /// Ticks since construction; the decoder's clock.
    ticks: u32,
}

impl<H: Host> SidControl<H> {
    /// Create the module with the SIDaster III catalogue and default tuning.
    pub fn new(host: H) -> Self {
        Self::with_config(host, ModuleConfig::default())
    }

    pub fn with_config(host: H, config: ModuleConfig) -> Self {
        Self {
            host,
            map: config.map,
            values: ValueStore::new(),
            session: Session::default(),
            decoder: AcceleratedDecoder::with_config(config.acceleration),
            leds: LedInitializer::new(config.leds),
            overlay: Overlay::new(config.overlay),
            display: config.display,
            ticks: 0,
        }
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// Load-time entry point: centre every value and queue the LED paint.
    ///
    /// The host clears the LEDs before loading the module; the paint itself
    /// happens over the following ticks.
    pub fn init(&mut self) {
        #[cfg(feature = "defmt")]
        defmt::info!("SID Control starting");

        self.values.reset();
        self.decoder.reset();
        self.leds.start();
    }

    /// Periodic entry point: one LED batch, one overlay tick, one frame.
    pub fn tick<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        self.ticks = self.ticks.wrapping_add(1);

        if self.leds.is_pending() {
            self.leds.step(&mut self.host, self.session.current_page());
        }

        self.overlay.tick();
        self.draw(display)
    }

    /// Render the current page and, on top, the overlay if it is active.
    pub fn draw<D>(&self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        let state = self
            .current_page()
            .map(|page| GridState::from_page(page, &self.values))
            .unwrap_or_default();
        render_grid(display, &state, &self.display)?;
        self.overlay.draw(display)
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Handle one message from the controller surface. Unrecognised
    /// messages are dropped.
    pub fn handle_midi(&mut self, message: &[u8]) {
        match classify(message) {
            Some(event) => self.handle_event(event),
            None => {
                #[cfg(feature = "defmt")]
                defmt::trace!("Dropped message {=[u8]:x}", message);
            }
        }
    }

    /// Messages arriving on the external port. The module only sends there.
    pub fn on_external_midi(&mut self, _message: &[u8]) {}

    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KnobTouch { knob, pressed } => self.on_knob_touch(knob, pressed),
            InputEvent::PageSelect { page } => {
                if let Err(_e) = self.select_page(page) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Page select {} ignored: {}", page, _e);
                }
            }
            InputEvent::PadPress { pad, velocity } => self.on_pad_press(pad, velocity),
            InputEvent::PadRelease { pad } => self.on_pad_release(pad),
            InputEvent::Shift { held } => self.session.set_shift(held),
            InputEvent::KnobTurn { knob, code } => self.on_knob_turn(knob, code),
        }
    }

    // ── Handlers ─────────────────────────────────────────────────────

    /// Touching a bound knob shows its current value. Releasing does
    /// nothing; the overlay times out on its own.
    pub fn on_knob_touch(&mut self, knob: usize, pressed: bool) {
        if !pressed {
            return;
        }
        let Some(param) = self.map.parameter_for_knob(self.session.current_page(), knob) else {
            return;
        };
        self.overlay.show(param.name, self.values.get(param.cc) as i32);
    }

    /// Apply a relative turn to the parameter under `knob`, send the new
    /// value to the synthesizer and show it.
    ///
    /// Turns of unbound knobs are ignored entirely: nothing is decoded,
    /// sent or shown.
    pub fn on_knob_turn(&mut self, knob: usize, code: u8) {
        let page = self.session.current_page();
        let param = match self.map.slot(page, knob) {
            Ok(param) => param,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Turn of knob {} on page {} ignored: {}", knob, page, _e);
                return;
            }
        };

        let delta = match self.decoder.decode(code, knob, self.ticks) {
            Ok(delta) => delta,
            Err(_e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Knob {} decode failed: {}", knob, _e);
                return;
            }
        };

        let value = self.values.apply_delta(param.cc, delta);

        #[cfg(feature = "defmt")]
        defmt::debug!("Knob {}: {} {=i32} -> {}", knob, param.name, delta, value);

        self.host.send_external(OutboundMessage::ControlChange { cc: param.cc, value });
        self.overlay.show(param.name, value as i32);
    }

    /// Switch to `page`, repaint the page indicators and dismiss the overlay.
    ///
    /// # Errors
    /// [`ParameterError::InvalidPageIndex`] if `page` is not in the
    /// catalogue; nothing changes and nothing is sent.
    pub fn select_page(&mut self, page: usize) -> Result<(), ParameterError> {
        self.session.set_page(page, &self.map)?;

        #[cfg(feature = "defmt")]
        defmt::info!("Page {}", page);

        paint_page_indicators(&mut self.host, page);
        self.overlay.hide();
        Ok(())
    }

    /// Light the pad and play its note with the received velocity.
    pub fn on_pad_press(&mut self, pad: usize, velocity: u8) {
        let Some(&identity) = PAD_NOTES.get(pad) else {
            return;
        };
        let note = pad_note(pad);

        #[cfg(feature = "defmt")]
        defmt::debug!("Pad {} on: note {} vel {}", pad, note, velocity);

        self.host.set_led(identity, LedColor::PAD_ACTIVE);
        self.host.send_external(OutboundMessage::NoteOn { note, velocity });
    }

    /// Restore the pad's resting colour and stop its note.
    pub fn on_pad_release(&mut self, pad: usize) {
        let Some(&identity) = PAD_NOTES.get(pad) else {
            return;
        };
        let note = pad_note(pad);

        #[cfg(feature = "defmt")]
        defmt::debug!("Pad {} off: note {}", pad, note);

        self.host.set_led(identity, pad_resting_color(pad));
        self.host.send_external(OutboundMessage::NoteOff { note });
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The active page, or `None` for an empty catalogue.
    pub fn current_page(&self) -> Option<&'static Page> {
        self.map.page(self.session.current_page())
    }

    pub fn values(&self) -> &ValueStore {
        &self.values
    }

    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    pub fn led_init(&self) -> &LedInitializer {
        &self.leds
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
