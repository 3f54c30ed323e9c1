//! Horizontal progress bar with an optional percent label.

use core::fmt::Write;

use heapless::String;
use pictor_driver::{Display, DisplayBus};
use pictor_gfx::{font, text_width, Charset, Color, DisplaySize};

use crate::layout::{clip_u8, Padding};

/// Where the percent label sits relative to the bar frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PercentPosition {
    #[default]
    None,
    Right,
    Bottom,
}

/// Outlined bar whose fill width tracks a 0..=100 percentage.
///
/// [`ProgressBar::set_progress`] clamps anything above 100, so a full
/// fill exactly meets the inside of the outline and never paints past
/// it. The percent label is rendered in the default font over a cleared
/// backing patch so successive values replace each other cleanly.
pub struct ProgressBar {
    x: u8,
    y: u8,
    width: u8,
    height: u8,
    percent_position: PercentPosition,
    inner_padding: bool,
    padding: Padding,
    progress: u8,
}

impl ProgressBar {
    pub fn new(
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        percent_position: PercentPosition,
        inner_padding: bool,
        padding: Padding,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            percent_position,
            inner_padding,
            padding,
            progress: 0,
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Sets the fill percentage, clamping values above 100.
    pub fn set_progress(&mut self, progress: u8) {
        self.progress = progress.min(100);
    }

    pub fn draw<S, B, C>(&self, display: &mut Display<S, B, C>)
    where
        S: DisplaySize,
        B: DisplayBus,
        C: Charset,
    {
        let outer_x = self.x as i16 + self.padding.left as i16;
        let outer_y = self.y as i16 + self.padding.top as i16;
        let outer_w = self.width as i16 - self.padding.left as i16 - self.padding.right as i16;
        let outer_h = self.height as i16 - self.padding.top as i16 - self.padding.bottom as i16;
        if outer_w <= 0 || outer_h <= 0 {
            return;
        }

        let frame = display.frame_mut();
        frame.fill_rect(outer_x, outer_y, outer_w, outer_h, Color::Off);
        frame.draw_rect(outer_x, outer_y, outer_w, outer_h, Color::On);

        let inset = if self.inner_padding { 1 } else { 0 };
        let fill_x = outer_x + 1 + inset;
        let fill_y = outer_y + 1 + inset;
        let fill_w = (outer_w - 2 * inset - 2) * self.progress as i16 / 100;
        let fill_h = outer_h - 2 * (1 + inset);
        frame.fill_rect(fill_x, fill_y, fill_w, fill_h, Color::On);

        if self.percent_position != PercentPosition::None {
            let mut label: String<8> = String::new();
            write!(label, "{}%", self.progress).ok();
            let label_font = &font::DEFAULT;
            let text_w = text_width::<C>(label.as_str(), label_font) as i16;

            let (label_x, label_y) = match self.percent_position {
                PercentPosition::Right => (
                    outer_x + outer_w + 3,
                    outer_y + (outer_h - label_font.height as i16) / 2,
                ),
                _ => (outer_x + (outer_w - text_w) / 2, outer_y + outer_h + 1),
            };

            frame.fill_rect(
                label_x - 1,
                label_y - 1,
                text_w + 2,
                label_font.height as i16 + 2,
                Color::Off,
            );
            frame.draw_str(
                clip_u8(label_x),
                clip_u8(label_y),
                label.as_str(),
                label_font,
                Color::On,
            );
        }
        display.flush_if_auto();
    }
}
