//! SID Control: Ableton Move controller module for the SIDaster III.
//!
//! Maps the Move surface onto a SIDaster III connected to the external MIDI
//! port:
//!
//! - 8 touch-sensitive knobs edit the parameters of the selected page, sent as
//!   control changes. Touching a knob shows its value; turning it shows the
//!   new value.
//! - Step buttons 1–8 select one of 8 parameter pages.
//! - The 32 pads play chromatic notes from C2.
//! - The screen shows the page as a 4 × 2 grid of `name:value` cells.
//!
//! The host delivers inbound messages to [`SidControl::handle_midi`] and calls
//! [`SidControl::tick`] on a steady period. LED and external MIDI output goes
//! through the [`Host`] trait; drawing goes to any `embedded-graphics` target.
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].

#![no_std]

pub mod controller;
pub mod dispatch;
pub mod hardware;
pub mod host;
pub mod leds;
pub mod midi;

#[cfg(test)]
mod test_host;

pub use controller::{ModuleConfig, Session, SidControl};
pub use dispatch::{classify, InputEvent};
pub use hardware::LedColor;
pub use host::Host;
pub use leds::{LedCommand, LedInitConfig, LedInitializer};
pub use midi::OutboundMessage;
