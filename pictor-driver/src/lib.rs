//! Transport and flush engine for page-organized monochrome displays
//!
//! This crate moves frames built with `pictor-gfx` onto the panel:
//!
//! - A byte-transport trait with an I2C implementation using SSD1306
//!   control-byte framing
//! - The display handle: controller init, contrast/invert/power control
//! - The dirty-region flush engine, which transmits only changed columns
//!   as coalesced per-page bursts
//!
//! Everything is blocking and single-owner; callers that share a display
//! across tasks must serialize access themselves.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod cmd;
pub mod display;

pub use bus::{BusError, DisplayBus, I2cBus, DEFAULT_I2C_ADDR};
pub use display::{Display, DisplayConfig};
