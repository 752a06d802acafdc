//! Relative-encoder decoding with acceleration for MIDI knobs.
//!
//! Endless knobs report turns as relative control-change codes: each message
//! carries a signed step count rather than an absolute position. This crate
//! turns those codes into deltas and scales them by how quickly the knob is
//! being turned.
//!
//! # Architecture
//!
//! - **`codes`** — the 7-bit two's-complement relative encoding.
//! - **[`AcceleratedDecoder`]** — per-knob timing state and the speed
//!   multiplier, sized at compile time for the number of knobs.
//!
//! # Quick start
//!
//! ```
//! use knob_decoder::AcceleratedDecoder;
//!
//! let mut decoder: AcceleratedDecoder<8> = AcceleratedDecoder::new();
//!
//! // Knob 0 turned one detent clockwise at tick 100, then anticlockwise
//! // much later.
//! assert_eq!(decoder.decode(1, 0, 100), Ok(1));
//! assert_eq!(decoder.decode(127, 0, 500), Ok(-1));
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on the public
//!   types for embedded logging.

#![no_std]

pub use codes::{decode_relative, CENTER, NO_MOVEMENT};
pub use decoder::{AccelerationConfig, AcceleratedDecoder};
pub use error::DecoderError;

mod codes;
mod decoder;
mod error;
