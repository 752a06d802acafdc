//! Collaborator interface provided by the host runtime.

use crate::hardware::LedColor;
use crate::midi::OutboundMessage;

/// Output side of the host: the controller's LEDs and the external MIDI port.
///
/// Calls are fire-and-forget. The host is responsible for delivering them;
/// the module never waits on either.
pub trait Host {
    /// Light the LED addressed by note `identity` with `color`.
    fn set_led(&mut self, identity: u8, color: LedColor);

    /// Send `message` to the synthesizer on the external port.
    fn send_external(&mut self, message: OutboundMessage);
}

impl<H: Host + ?Sized> Host for &mut H {
    fn set_led(&mut self, identity: u8, color: LedColor) {
        (**self).set_led(identity, color);
    }

    fn send_external(&mut self, message: OutboundMessage) {
        (**self).send_external(message);
    }
}
