//! Parameter catalogue and value storage for the SID Control module.
//!
//! - [`parameter_map`] — the static page catalogue binding the 8 physical
//!   knobs to SIDaster III control-change numbers.
//! - [`value_store`] — the last-known absolute value of every control number.
//!
//! # Features
//!
//! - **`defmt`** — derive [`defmt::Format`] on the public data types.

#![no_std]

pub mod parameter_map;
pub mod value_store;

pub use parameter_map::{
    Page, Parameter, ParameterError, ParameterMap, ParameterSlot, KNOBS_PER_PAGE, N_PAGES, PAGES,
};
pub use value_store::{ValueStore, CONTROL_COUNT, DEFAULT_VALUE, MAX_VALUE};
