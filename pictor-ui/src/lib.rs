//! Widget layer for pictor displays.
//!
//! Small retained widgets built on [`pictor_gfx`]'s rasterizer and text
//! pipeline and drawn through a [`pictor_driver::Display`]: a screen
//! [`Header`], a selection [`Menu`], a [`ProgressBar`] and a
//! [`Scrollbar`]. Widgets hold their own state (selection, offsets,
//! percentages); drawing paints into the display's frame and, when the
//! display is configured for it, presents the result immediately.

#![no_std]
#![deny(unsafe_code)]

pub mod header;
pub mod layout;
pub mod menu;
pub mod progress;
pub mod scrollbar;

pub use header::{Header, HeaderStyle};
pub use layout::{Margin, Padding, TextAlign};
pub use menu::Menu;
pub use progress::{PercentPosition, ProgressBar};
pub use scrollbar::{Orientation, Scrollbar};
