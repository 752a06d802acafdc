//! Progressive LED initialisation.
//!
//! The controller's LED input cannot absorb all 40 LED updates in one burst.
//! [`LedInitializer`] spreads the start-up paint over successive ticks,
//! painting at most [`LedInitConfig::leds_per_tick`] LEDs per tick.

use crate::hardware::{
    page_indicator_color, pad_resting_color, LedColor, LED_COUNT, PAD_COUNT, PAD_NOTES,
    PAGE_BUTTON_NOTES,
};
use crate::host::Host;

/// One LED update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedCommand {
    /// Note number addressing the LED.
    pub identity: u8,
    pub color: LedColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedInitConfig {
    /// Most LEDs painted in one tick. Default: 8. Values below 1 act as 1.
    pub leds_per_tick: usize,
}

impl Default for LedInitConfig {
    fn default() -> Self {
        Self { leds_per_tick: 8 }
    }
}

/// Every LED the module owns with its resting colour: the 32 pads first,
/// then the 8 page indicators.
pub fn full_led_set(current_page: usize) -> [LedCommand; LED_COUNT] {
    core::array::from_fn(|i| {
        if i < PAD_COUNT {
            LedCommand {
                identity: PAD_NOTES[i],
                color: pad_resting_color(i),
            }
        } else {
            let page = i - PAD_COUNT;
            LedCommand {
                identity: PAGE_BUTTON_NOTES[page],
                color: page_indicator_color(page, current_page),
            }
        }
    })
}

/// Paint every page indicator immediately.
pub fn paint_page_indicators<H: Host>(host: &mut H, current_page: usize) {
    for (page, &identity) in PAGE_BUTTON_NOTES.iter().enumerate() {
        host.set_led(identity, page_indicator_color(page, current_page));
    }
}

/// Cursor over [`full_led_set`], advanced one slice per tick.
///
/// # Example
///
/// ```
/// use sid_control_module::{Host, LedColor, LedInitializer, OutboundMessage};
///
/// struct Count(usize);
/// impl Host for Count {
///     fn set_led(&mut self, _: u8, _: LedColor) { self.0 += 1; }
///     fn send_external(&mut self, _: OutboundMessage) {}
/// }
///
/// let mut host = Count(0);
/// let mut leds = LedInitializer::default();
/// leds.start();
///
/// let mut ticks = 0;
/// while leds.is_pending() {
///     leds.step(&mut host, 0);
///     ticks += 1;
/// }
/// assert_eq!((ticks, host.0), (5, 40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LedInitializer {
    pending: bool,
    next_index: usize,
    config: LedInitConfig,
}

impl LedInitializer {
    pub fn new(config: LedInitConfig) -> Self {
        Self {
            pending: false,
            next_index: 0,
            config,
        }
    }

    /// Queue a full paint from the first LED.
    pub fn start(&mut self) {
        self.pending = true;
        self.next_index = 0;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Index of the next LED to paint.
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Paint the next slice and return how many LEDs were painted.
    ///
    /// Colours are taken for `current_page` at the time of each slice, so a
    /// page change during the pass never leaves a stale indicator behind.
    /// Once the last LED is painted the cursor rewinds and the pass ends.
    pub fn step<H: Host>(&mut self, host: &mut H, current_page: usize) -> usize {
        if !self.pending {
            return 0;
        }

        let leds = full_led_set(current_page);
        let start = self.next_index;
        let end = (start + self.config.leds_per_tick.max(1)).min(leds.len());

        for led in &leds[start..end] {
            host.set_led(led.identity, led.color);
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("LED init batch {}..{}", start, end);

        self.next_index = end;
        if self.next_index >= leds.len() {
            self.pending = false;
            self.next_index = 0;
        }

        end - start
    }
}
