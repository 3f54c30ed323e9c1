//! Rail-and-slider scrollbar with end arrows.

use pictor_driver::{Display, DisplayBus};
use pictor_gfx::{Charset, Color, DisplaySize};

use crate::layout::Margin;

/// Direction the rail runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Scroll indicator for a list of `total_items` entries of which
/// `visible_items` fit on screen at once.
///
/// The slider length is proportional to the visible fraction, with a
/// floor so it never vanishes on long lists. Offset stays within
/// `[0, total_items - visible_items]`; the scroll operations saturate
/// at both ends.
pub struct Scrollbar {
    pub(crate) x: u8,
    pub(crate) y: u8,
    pub(crate) width: u8,
    pub(crate) height: u8,
    pub(crate) total_items: u8,
    pub(crate) visible_items: u8,
    pub(crate) offset: u8,
    orientation: Orientation,
    margin: Margin,
    pub(crate) enabled: bool,
}

impl Scrollbar {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: u8,
        y: u8,
        width: u8,
        height: u8,
        total_items: u8,
        visible_items: u8,
        orientation: Orientation,
        margin: Margin,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            total_items,
            visible_items,
            offset: 0,
            orientation,
            margin,
            enabled: true,
        }
    }

    /// A zero-sized bar that ignores scroll requests and draws nothing.
    pub fn disabled() -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            total_items: 0,
            visible_items: 0,
            offset: 0,
            orientation: Orientation::Vertical,
            margin: Margin::default(),
            enabled: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn offset(&self) -> u8 {
        self.offset
    }

    pub fn scroll_up(&mut self) {
        if !self.enabled {
            return;
        }
        if self.offset > 0 {
            self.offset -= 1;
        }
    }

    pub fn scroll_down(&mut self) {
        if !self.enabled {
            return;
        }
        if self.offset as u16 + (self.visible_items as u16) < self.total_items as u16 {
            self.offset += 1;
        }
    }

    pub fn draw<S, B, C>(&self, display: &mut Display<S, B, C>)
    where
        S: DisplaySize,
        B: DisplayBus,
        C: Charset,
    {
        if !self.enabled || self.width == 0 || self.height == 0 {
            return;
        }
        let x = self.x as i16;
        let y = self.y as i16;
        let inner_x = x + self.margin.left as i16;
        let inner_y = y + self.margin.top as i16;

        let frame = display.frame_mut();
        frame.fill_rect(x, y, self.width as i16, self.height as i16, Color::Off);

        match self.orientation {
            Orientation::Vertical => {
                let inner_height = self.height as i16;
                let center_x = inner_x + 2;
                frame.draw_line(center_x, inner_y, center_x, inner_y + inner_height - 1, Color::On);
                frame.fill_triangle(
                    center_x - 3,
                    inner_y + 5,
                    center_x + 3,
                    inner_y + 5,
                    center_x,
                    inner_y,
                    Color::On,
                );
                frame.fill_triangle(
                    center_x - 2,
                    inner_y + inner_height - 5,
                    center_x + 2,
                    inner_y + inner_height - 5,
                    center_x,
                    inner_y + inner_height - 1,
                    Color::On,
                );
                if self.total_items > 0 {
                    let usable_top = inner_y + 7;
                    let usable_height = inner_height - 14;
                    let mut slider_height =
                        usable_height * self.visible_items as i16 / self.total_items as i16;
                    if slider_height < 4 {
                        slider_height = 4;
                    }
                    let slider_y =
                        usable_top + usable_height * self.offset as i16 / self.total_items as i16;
                    frame.fill_rect(center_x - 1, slider_y, 3, slider_height, Color::On);
                }
            }
            Orientation::Horizontal => {
                let inner_width = self.width as i16;
                let center_y = inner_y + 2;
                frame.draw_line(inner_x, center_y, inner_x + inner_width - 1, center_y, Color::On);
                frame.fill_triangle(
                    inner_x + 3,
                    center_y - 2,
                    inner_x + 3,
                    center_y + 2,
                    inner_x - 1,
                    center_y,
                    Color::On,
                );
                frame.fill_triangle(
                    inner_x + inner_width - 5,
                    center_y - 2,
                    inner_x + inner_width - 5,
                    center_y + 2,
                    inner_x + inner_width,
                    center_y,
                    Color::On,
                );
                if self.total_items > 0 {
                    let usable_left = inner_x + 7;
                    let usable_width = inner_width - 14;
                    let mut slider_width =
                        usable_width * self.visible_items as i16 / self.total_items as i16;
                    if slider_width < 2 {
                        slider_width = 2;
                    }
                    let slider_x =
                        usable_left + usable_width * self.offset as i16 / self.total_items as i16;
                    frame.fill_rect(slider_x, center_y - 1, slider_width, 3, Color::On);
                }
            }
        }
        display.flush_if_auto();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::display;

    #[test]
    fn test_offset_saturates_at_both_ends() {
        let mut bar = Scrollbar::new(0, 0, 8, 64, 10, 3, Orientation::Vertical, Margin::default());
        for _ in 0..20 {
            bar.scroll_down();
        }
        assert_eq!(bar.offset(), 7);
        for _ in 0..20 {
            bar.scroll_up();
        }
        assert_eq!(bar.offset(), 0);
    }

    #[test]
    fn test_disabled_bar_is_inert() {
        let mut bar = Scrollbar::disabled();
        bar.scroll_down();
        assert_eq!(bar.offset(), 0);

        let mut d = display();
        bar.draw(&mut d);
        assert!(!d.frame().is_dirty());
    }

    #[test]
    fn test_vertical_geometry() {
        let margin = Margin {
            left: 1,
            ..Margin::default()
        };
        let bar = Scrollbar::new(120, 0, 8, 64, 10, 3, Orientation::Vertical, margin);
        let mut d = display();
        bar.draw(&mut d);

        // rail runs down the column centered in the 5px inner strip
        assert_eq!(d.frame().get_pixel(123, 0), Color::On);
        assert_eq!(d.frame().get_pixel(123, 40), Color::On);
        assert_eq!(d.frame().get_pixel(123, 63), Color::On);
        assert_eq!(d.frame().get_pixel(120, 40), Color::Off);

        // widest painted scanline of each arrow
        assert_eq!(d.frame().get_pixel(121, 4), Color::On);
        assert_eq!(d.frame().get_pixel(125, 4), Color::On);
        assert_eq!(d.frame().get_pixel(121, 59), Color::On);
        assert_eq!(d.frame().get_pixel(125, 59), Color::On);

        // slider: usable rows 7..57, 3 of 10 visible -> 15 rows at the top
        assert_eq!(d.frame().get_pixel(122, 7), Color::On);
        assert_eq!(d.frame().get_pixel(122, 21), Color::On);
        assert_eq!(d.frame().get_pixel(122, 22), Color::Off);
    }

    #[test]
    fn test_slider_tracks_offset() {
        let mut bar =
            Scrollbar::new(120, 0, 8, 64, 10, 3, Orientation::Vertical, Margin::default());
        for _ in 0..7 {
            bar.scroll_down();
        }
        let mut d = display();
        bar.draw(&mut d);

        // slider_y = 7 + 50 * 7 / 10 = 42
        assert_eq!(d.frame().get_pixel(121, 41), Color::Off);
        assert_eq!(d.frame().get_pixel(121, 42), Color::On);
        assert_eq!(d.frame().get_pixel(121, 56), Color::On);
    }

    #[test]
    fn test_slider_never_thinner_than_floor() {
        // 2 visible of 200 would round to a single row without the clamp
        let bar =
            Scrollbar::new(120, 0, 8, 64, 200, 2, Orientation::Vertical, Margin::default());
        let mut d = display();
        bar.draw(&mut d);

        for y in 7..11 {
            assert_eq!(d.frame().get_pixel(121, y), Color::On, "row {y}");
        }
        assert_eq!(d.frame().get_pixel(121, 11), Color::Off);
    }

    #[test]
    fn test_horizontal_geometry() {
        let bar =
            Scrollbar::new(0, 56, 128, 8, 8, 2, Orientation::Horizontal, Margin::default());
        let mut d = display();
        bar.draw(&mut d);

        // rail along the center row of the 5px strip
        assert_eq!(d.frame().get_pixel(0, 58), Color::On);
        assert_eq!(d.frame().get_pixel(64, 58), Color::On);
        assert_eq!(d.frame().get_pixel(127, 58), Color::On);

        // slider: usable cols 7..121, 2 of 8 visible -> 28 wide at the left
        assert_eq!(d.frame().get_pixel(7, 57), Color::On);
        assert_eq!(d.frame().get_pixel(34, 57), Color::On);
        assert_eq!(d.frame().get_pixel(35, 57), Color::Off);
    }
}
