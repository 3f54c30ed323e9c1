//! Scrollable selection menu with optional header and scrollbar.

use core::marker::PhantomData;

use pictor_driver::{Display, DisplayBus};
use pictor_gfx::{text_width, Charset, Color, DisplaySize, Font, Utf8};

use crate::header::Header;
use crate::layout::{clip_u8, Margin, Padding, TextAlign};
use crate::scrollbar::{Orientation, Scrollbar};

/// Vertical list of labels with one selected entry shown in inverse
/// video.
///
/// Layout is derived once at construction for the display size `S`: the
/// number of entries that fit comes from the screen height minus padding
/// and header, and a scrollbar is attached only when the list overflows.
/// Scrolling moves the selection first and drags the visible window
/// along when the selection reaches its edge; neither wraps around.
pub struct Menu<'a, S: DisplaySize, C: Charset = Utf8> {
    items: &'a [&'a str],
    font: &'a Font,
    header: Option<Header<'a, C>>,
    line_spacing: u8,
    alignment: TextAlign,
    padding: Padding,
    max_visible: u8,
    selected_index: u8,
    visible_offset: u8,
    scrollbar: Scrollbar,
    _size: PhantomData<S>,
}

impl<'a, S: DisplaySize, C: Charset> Menu<'a, S, C> {
    const SCROLLBAR_TRACK_WIDTH: u8 = 5;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        items: &'a [&'a str],
        font: &'a Font,
        header: Option<Header<'a, C>>,
        line_spacing: u8,
        alignment: TextAlign,
        padding: Padding,
        scrollbar_margin: Margin,
    ) -> Self {
        let count = items.len().min(u8::MAX as usize) as u8;
        let header_height = header.as_ref().map_or(0, |h| h.height()) as i16;
        let line_height = font.height as i16 + line_spacing as i16;
        let available =
            S::HEIGHT as i16 - padding.top as i16 - padding.bottom as i16 - header_height;
        let max_visible = if line_height > 0 && available > 0 {
            (available / line_height).min(u8::MAX as i16) as u8
        } else {
            0
        };

        let scrollbar = if count > max_visible {
            let bar_width = Self::SCROLLBAR_TRACK_WIDTH as i16
                + scrollbar_margin.left as i16
                + scrollbar_margin.right as i16;
            let bar_x = if alignment == TextAlign::Right {
                padding.left as i16
            } else {
                S::WIDTH as i16 - bar_width - padding.right as i16
            };
            Scrollbar::new(
                clip_u8(bar_x),
                clip_u8(padding.top as i16 + header_height),
                clip_u8(bar_width),
                clip_u8(line_height * max_visible as i16),
                count,
                max_visible,
                Orientation::Vertical,
                scrollbar_margin,
            )
        } else {
            Scrollbar::disabled()
        };

        Self {
            items,
            font,
            header,
            line_spacing,
            alignment,
            padding,
            max_visible,
            selected_index: 0,
            visible_offset: 0,
            scrollbar,
            _size: PhantomData,
        }
    }

    /// Index of the selected entry.
    pub fn selected(&self) -> u8 {
        self.selected_index
    }

    /// Index of the first entry currently on screen.
    pub fn visible_offset(&self) -> u8 {
        self.visible_offset
    }

    /// Entries that fit on screen at once.
    pub fn max_visible(&self) -> u8 {
        self.max_visible
    }

    pub fn has_scrollbar(&self) -> bool {
        self.scrollbar.is_enabled()
    }

    /// Moves the selection up one entry, pulling the visible window
    /// along when the selection leaves it. Saturates at the first entry.
    pub fn scroll_up(&mut self) {
        if self.selected_index == 0 {
            return;
        }
        self.selected_index -= 1;
        if self.selected_index < self.visible_offset {
            self.visible_offset -= 1;
            self.scrollbar.scroll_up();
        }
    }

    /// Moves the selection down one entry, pushing the visible window
    /// along past its last row. Saturates at the last entry.
    pub fn scroll_down(&mut self) {
        let count = self.items.len().min(u8::MAX as usize) as u8;
        if self.selected_index as u16 + 1 >= count as u16 {
            return;
        }
        self.selected_index += 1;
        if self.selected_index >= self.visible_offset + self.max_visible {
            self.visible_offset += 1;
            self.scrollbar.scroll_down();
        }
    }

    pub fn draw<B: DisplayBus>(&mut self, display: &mut Display<S, B, C>) {
        let line_height = self.font.height as i16 + self.line_spacing as i16;
        let header_height = self.header.as_ref().map_or(0, |h| h.height()) as i16;
        let y_offset = self.padding.top as i16 + header_height;
        let menu_height = line_height * self.max_visible as i16;

        let screen_width = S::WIDTH as i16;
        let menu_x = self.padding.left as i16;
        let menu_width = screen_width - self.padding.left as i16 - self.padding.right as i16;
        display
            .frame_mut()
            .fill_rect(menu_x, y_offset, menu_width, menu_height, Color::Off);

        let mut left_margin = self.padding.left as i16;
        let mut right_margin = screen_width - self.padding.right as i16;
        if self.scrollbar.enabled {
            if self.alignment == TextAlign::Right {
                left_margin += self.scrollbar.width as i16;
            } else {
                right_margin -= self.scrollbar.width as i16;
            }
        }

        for row in 0..self.max_visible {
            let index = self.visible_offset as usize + row as usize;
            if index >= self.items.len() {
                break;
            }
            let selected = index == self.selected_index as usize;
            let y = y_offset + row as i16 * line_height;
            self.draw_item(
                display,
                self.items[index],
                y,
                selected,
                left_margin,
                right_margin,
            );
        }

        if self.scrollbar.enabled {
            self.scrollbar.offset = self.visible_offset;
            self.scrollbar.draw(display);
        }
        if let Some(header) = &self.header {
            header.draw(display);
        }
        display.flush_if_auto();
    }

    fn draw_item<B: DisplayBus>(
        &self,
        display: &mut Display<S, B, C>,
        text: &str,
        y: i16,
        selected: bool,
        left_margin: i16,
        right_margin: i16,
    ) {
        if text.is_empty() {
            return;
        }
        let line_height = self.font.height as i16 + self.line_spacing as i16;
        let (fg, bg) = if selected {
            (Color::Off, Color::On)
        } else {
            (Color::On, Color::Off)
        };

        let frame = display.frame_mut();
        frame.fill_rect(left_margin, y, right_margin - left_margin, line_height, bg);

        let text_w = text_width::<C>(text, self.font) as i16;
        let x = match self.alignment {
            TextAlign::Center => (S::WIDTH as i16 - text_w) / 2,
            TextAlign::Right => right_margin - text_w - 1,
            TextAlign::Left => left_margin,
        };
        frame.draw_str(clip_u8(x), clip_u8(y), text, self.font, fg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::HeaderStyle;
    use crate::test_support::display;
    use pictor_gfx::font::FONT_7X14;
    use pictor_gfx::Size128x64;

    fn plain_menu<'a>(items: &'a [&'a str]) -> Menu<'a, Size128x64> {
        Menu::new(
            items,
            &FONT_7X14,
            None,
            2,
            TextAlign::Left,
            Padding::default(),
            Margin::default(),
        )
    }

    #[test]
    fn test_max_visible_from_screen_height() {
        // 64 rows / (14 + 2) per line = 4
        let items = ["a", "b"];
        let menu = plain_menu(&items);
        assert_eq!(menu.max_visible(), 4);
        assert!(!menu.has_scrollbar());
    }

    #[test]
    fn test_header_reduces_available_rows() {
        let header =
            Header::new("T", &FONT_7X14, TextAlign::Center, HeaderStyle::Line, Padding::uniform(1));
        // header is 1 + 14 + 1 + 2 = 18 rows; (64 - 18) / 16 = 2
        let items = ["a", "b", "c"];
        let menu: Menu<Size128x64> = Menu::new(
            &items,
            &FONT_7X14,
            Some(header),
            2,
            TextAlign::Left,
            Padding::default(),
            Margin::default(),
        );
        assert_eq!(menu.max_visible(), 2);
        assert!(menu.has_scrollbar());
    }

    #[test]
    fn test_scrollbar_only_when_overflowing() {
        let exact = ["a", "b", "c", "d"];
        assert!(!plain_menu(&exact).has_scrollbar());

        let overflowing = ["a", "b", "c", "d", "e"];
        assert!(plain_menu(&overflowing).has_scrollbar());
    }

    #[test]
    fn test_scroll_down_saturates_without_wrapping() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let mut menu = plain_menu(&items);

        for step in 1..=5 {
            menu.scroll_down();
            assert_eq!(menu.selected(), step);
        }
        assert_eq!(menu.selected(), 5);
        assert_eq!(menu.visible_offset(), 2);

        // further presses are no-ops at the last entry
        menu.scroll_down();
        assert_eq!(menu.selected(), 5);
        assert_eq!(menu.visible_offset(), 2);
    }

    #[test]
    fn test_scroll_up_saturates_without_wrapping() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let mut menu = plain_menu(&items);
        for _ in 0..10 {
            menu.scroll_down();
        }

        for _ in 0..5 {
            menu.scroll_up();
        }
        assert_eq!(menu.selected(), 0);
        assert_eq!(menu.visible_offset(), 0);

        menu.scroll_up();
        assert_eq!(menu.selected(), 0);
        assert_eq!(menu.visible_offset(), 0);
    }

    #[test]
    fn test_window_moves_only_at_its_edges() {
        let items = ["a", "b", "c", "d", "e", "f"];
        let mut menu = plain_menu(&items);

        // selection walks inside the window first
        menu.scroll_down();
        menu.scroll_down();
        menu.scroll_down();
        assert_eq!(menu.selected(), 3);
        assert_eq!(menu.visible_offset(), 0);

        // next step leaves the window, dragging it down
        menu.scroll_down();
        assert_eq!(menu.selected(), 4);
        assert_eq!(menu.visible_offset(), 1);

        // walking back up keeps the window until the top edge
        menu.scroll_up();
        menu.scroll_up();
        menu.scroll_up();
        assert_eq!(menu.selected(), 1);
        assert_eq!(menu.visible_offset(), 1);
        menu.scroll_up();
        assert_eq!(menu.selected(), 0);
        assert_eq!(menu.visible_offset(), 0);
    }

    #[test]
    fn test_selected_row_inverse_video() {
        let items = ["A", "B"];
        let mut menu: Menu<Size128x64> = Menu::new(
            &items,
            &FONT_7X14,
            None,
            0,
            TextAlign::Left,
            Padding::default(),
            Margin::default(),
        );
        let mut d = display();
        menu.draw(&mut d);

        // row 0 selected: background lit, glyph ink cleared
        assert_eq!(d.frame().get_pixel(127, 0), Color::On);
        assert_eq!(d.frame().get_pixel(1, 0), Color::Off);

        // row 1 unselected: background dark, 'B' stem lit at its top row
        assert_eq!(d.frame().get_pixel(127, 14), Color::Off);
        assert_eq!(d.frame().get_pixel(0, 14), Color::On);
    }

    #[test]
    fn test_redraw_after_scroll_moves_highlight() {
        let items = ["A", "B"];
        let mut menu: Menu<Size128x64> = Menu::new(
            &items,
            &FONT_7X14,
            None,
            0,
            TextAlign::Left,
            Padding::default(),
            Margin::default(),
        );
        let mut d = display();
        menu.draw(&mut d);
        assert_eq!(d.frame().get_pixel(127, 0), Color::On);

        menu.scroll_down();
        menu.draw(&mut d);
        assert_eq!(d.frame().get_pixel(127, 0), Color::Off);
        assert_eq!(d.frame().get_pixel(127, 14), Color::On);
    }

    #[test]
    fn test_scrollbar_column_reserved_for_items() {
        let items = ["a", "b", "c", "d", "e"];
        let mut menu = plain_menu(&items);
        assert!(menu.has_scrollbar());
        let mut d = display();
        menu.draw(&mut d);

        // selected row background stops where the scrollbar begins
        assert_eq!(d.frame().get_pixel(122, 0), Color::On);
        assert_eq!(d.frame().get_pixel(123, 0), Color::Off);
        // scrollbar rail centered in its 5px track
        assert_eq!(d.frame().get_pixel(125, 32), Color::On);
    }
}
