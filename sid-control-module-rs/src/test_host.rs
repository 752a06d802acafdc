//! Recording [`Host`] used by the unit tests.

use heapless::Vec;

use crate::hardware::LedColor;
use crate::host::Host;
use crate::leds::LedCommand;
use crate::midi::OutboundMessage;

#[derive(Debug, Default)]
pub struct RecordingHost {
    pub leds: Vec<LedCommand, 256>,
    pub sent: Vec<OutboundMessage, 64>,
}

impl RecordingHost {
    /// Most recent colour set on `identity`.
    pub fn last_color(&self, identity: u8) -> Option<LedColor> {
        self.leds
            .iter()
            .rev()
            .find(|l| l.identity == identity)
            .map(|l| l.color)
    }

    pub fn clear(&mut self) {
        self.leds.clear();
        self.sent.clear();
    }
}

impl Host for RecordingHost {
    fn set_led(&mut self, identity: u8, color: LedColor) {
        self.leds
            .push(LedCommand { identity, color })
            .expect("LED log full");
    }

    fn send_external(&mut self, message: OutboundMessage) {
        self.sent.push(message).expect("message log full");
    }
}
