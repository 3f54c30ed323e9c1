//! Screen header with optional underline rules.

use core::marker::PhantomData;

use pictor_driver::{Display, DisplayBus};
use pictor_gfx::{text_width, Charset, Color, DisplaySize, Font, Utf8};

use crate::layout::{clip_u8, Padding, TextAlign};

/// Rule drawn under the header text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HeaderStyle {
    #[default]
    None,
    Line,
    DoubleLine,
}

/// A title pinned to the top rows of the screen.
///
/// Text width and overall height are derived once at construction, so
/// containers such as [`crate::Menu`] can reserve vertical space before
/// anything is drawn. An empty title collapses to zero height and
/// [`Header::draw`] becomes a no-op.
pub struct Header<'a, C: Charset = Utf8> {
    text: &'a str,
    font: &'a Font,
    alignment: TextAlign,
    style: HeaderStyle,
    padding: Padding,
    width: u16,
    height: u8,
    _charset: PhantomData<C>,
}

impl<'a, C: Charset> Header<'a, C> {
    pub fn new(
        text: &'a str,
        font: &'a Font,
        alignment: TextAlign,
        style: HeaderStyle,
        padding: Padding,
    ) -> Self {
        let mut width = 0;
        let mut height = 0;
        if !text.is_empty() {
            width = text_width::<C>(text, font);
            let extent = padding.top as u16
                + font.height as u16
                + padding.bottom as u16
                + match style {
                    HeaderStyle::None => 0,
                    HeaderStyle::Line => 2,
                    HeaderStyle::DoubleLine => 4,
                };
            height = extent.min(u8::MAX as u16) as u8;
        }
        Self {
            text,
            font,
            alignment,
            style,
            padding,
            width,
            height,
            _charset: PhantomData,
        }
    }

    /// Rendered text width in pixels, zero for an empty title.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Rows the header occupies, underline rules included.
    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn draw<S, B>(&self, display: &mut Display<S, B, C>)
    where
        S: DisplaySize,
        B: DisplayBus,
    {
        if self.text.is_empty() {
            return;
        }
        let screen_width = S::WIDTH as i16;
        let text_w = self.width as i16;
        let x = match self.alignment {
            TextAlign::Center => (screen_width - text_w) / 2,
            TextAlign::Right => screen_width - self.padding.right as i16 - text_w,
            TextAlign::Left => self.padding.left as i16,
        };
        let y = self.padding.top as i16;

        let frame = display.frame_mut();
        frame.draw_str(clip_u8(x), clip_u8(y), self.text, self.font, Color::On);

        let rule_y = y + self.font.height as i16;
        let left = self.padding.left as i16;
        let right = screen_width - self.padding.right as i16 - 1;
        match self.style {
            HeaderStyle::None => {}
            HeaderStyle::Line => {
                frame.draw_line(left, rule_y + 1, right, rule_y + 1, Color::On);
            }
            HeaderStyle::DoubleLine => {
                frame.draw_line(left, rule_y, right, rule_y, Color::On);
                frame.draw_line(left, rule_y + 2, right, rule_y + 2, Color::On);
            }
        }
        display.flush_if_auto();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::display;

    fn padded() -> Padding {
        Padding {
            top: 2,
            bottom: 1,
            left: 4,
            right: 4,
        }
    }

    #[test]
    fn test_height_accounts_for_style() {
        let font = &pictor_gfx::font::FONT_7X14;
        let plain: Header = Header::new("Title", font, TextAlign::Left, HeaderStyle::None, padded());
        let line: Header = Header::new("Title", font, TextAlign::Left, HeaderStyle::Line, padded());
        let double: Header = Header::new(
            "Title",
            font,
            TextAlign::Left,
            HeaderStyle::DoubleLine,
            padded(),
        );
        assert_eq!(plain.height(), 2 + 14 + 1);
        assert_eq!(line.height(), plain.height() + 2);
        assert_eq!(double.height(), plain.height() + 4);
    }

    #[test]
    fn test_empty_text_collapses_and_draws_nothing() {
        let font = &pictor_gfx::font::FONT_7X14;
        let header: Header = Header::new("", font, TextAlign::Center, HeaderStyle::Line, padded());
        assert_eq!(header.width(), 0);
        assert_eq!(header.height(), 0);

        let mut d = display();
        header.draw(&mut d);
        assert!(!d.frame().is_dirty());
    }

    #[test]
    fn test_left_aligned_text_and_rule() {
        let font = &pictor_gfx::font::FONT_7X14;
        let header: Header = Header::new("A", font, TextAlign::Left, HeaderStyle::Line, padded());
        let mut d = display();
        header.draw(&mut d);

        // 'A' leaves column 0 of its cell blank and lights column 1.
        assert_eq!(d.frame().get_pixel(4, 2), Color::Off);
        assert_eq!(d.frame().get_pixel(5, 2), Color::On);

        // rule sits one row under the glyph box, inside the side padding
        let rule_y = 2 + 14 + 1;
        assert_eq!(d.frame().get_pixel(4, rule_y), Color::On);
        assert_eq!(d.frame().get_pixel(123, rule_y), Color::On);
        assert_eq!(d.frame().get_pixel(3, rule_y), Color::Off);
        assert_eq!(d.frame().get_pixel(124, rule_y), Color::Off);
    }

    #[test]
    fn test_center_and_right_alignment() {
        let font = &pictor_gfx::font::FONT_7X14;
        let mut d = display();

        let centered: Header =
            Header::new("AB", font, TextAlign::Center, HeaderStyle::None, padded());
        assert_eq!(centered.width(), 14);
        centered.draw(&mut d);
        // centering ignores padding: x = (128 - 14) / 2 = 57
        assert_eq!(d.frame().get_pixel(58, 2), Color::On);

        d.fill_and_present(Color::Off);
        let right: Header = Header::new("AB", font, TextAlign::Right, HeaderStyle::None, padded());
        right.draw(&mut d);
        // x = 128 - 4 - 14 = 110, 'A' ink starts one column in
        assert_eq!(d.frame().get_pixel(110, 2), Color::Off);
        assert_eq!(d.frame().get_pixel(111, 2), Color::On);
    }

    #[test]
    fn test_double_line_rule_rows() {
        let font = &pictor_gfx::font::FONT_7X14;
        let header: Header = Header::new(
            "A",
            font,
            TextAlign::Left,
            HeaderStyle::DoubleLine,
            padded(),
        );
        let mut d = display();
        header.draw(&mut d);

        let base = 2 + 14;
        assert_eq!(d.frame().get_pixel(10, base), Color::On);
        assert_eq!(d.frame().get_pixel(10, base + 1), Color::Off);
        assert_eq!(d.frame().get_pixel(10, base + 2), Color::On);
    }
}
