//! Display composition for the SID Control module on a 128×64 monochrome
//! screen.
//!
//! This crate provides [`render_grid`], which draws the active page as a
//! header plus a 4 × 2 parameter grid, the transient value [`Overlay`]
//! composited on top of it, and [`FrameBuffer`], an in-memory target the
//! host blits to the screen.
//!
//! Everything renders into any `embedded-graphics`
//! [`DrawTarget`](embedded_graphics::draw_target::DrawTarget) with
//! [`BinaryColor`](embedded_graphics::pixelcolor::BinaryColor) pixels.
//!
//! # Quick Start
//!
//! ```
//! use sid_control::{ValueStore, PAGES};
//! use sid_control_display::{render_grid, DisplayConfig, FrameBuffer, GridState, Overlay};
//!
//! let values = ValueStore::new();
//! let config = DisplayConfig::default();
//! let mut overlay = Overlay::default();
//! let mut frame = FrameBuffer::new();
//!
//! overlay.show("Cutoff", 64);
//!
//! let state = GridState::from_page(&PAGES[0], &values);
//! render_grid(&mut frame, &state, &config).unwrap();
//! overlay.draw(&mut frame).unwrap();
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].

#![no_std]

pub mod frame;
pub mod layout;
pub mod overlay;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use frame::FrameBuffer;
pub use layout::{render_grid, DisplayConfig, GridCell, GridState, PRODUCT_NAME};
pub use overlay::{Overlay, OverlayConfig};
