//! Framebuffer graphics for page-organized monochrome displays
//!
//! This crate contains everything that happens before bytes hit a bus:
//!
//! - Page-organized framebuffer with per-byte dirty tracking
//! - Vector primitives (lines, rectangles, circles, triangles, bitmaps)
//! - Bitmap text with pluggable charsets and built-in glyph tables
//!
//! Canvas geometry is type-level: a [`size::DisplaySize`] marker fixes the
//! resolution and buffer layout at compile time, so there is no runtime
//! allocation and no dimension checks beyond pixel clipping.

#![no_std]
#![deny(unsafe_code)]

pub mod charset;
pub mod font;
pub mod frame;
pub mod raster;
pub mod size;
pub mod text;

pub use charset::{Charset, Latin1, Utf8, Win1251};
pub use frame::{Color, Frame};
pub use size::{DisplaySize, Size128x64, Size64x32, Size64x32Offset};
pub use text::{text_width, Font};
