//! Variable-size bitmap text rendering.
//!
//! Fonts are row-major glyph tables starting at code 32, each row packed
//! MSB-first into whole bytes. Rendering is opaque: set bits draw in the
//! requested color, clear bits in its inverse, so text repaints cleanly
//! over whatever was underneath without an explicit erase.

use crate::charset::Charset;
use crate::frame::{Color, Frame};
use crate::size::DisplaySize;

/// A fixed-cell bitmap font.
///
/// `data` holds `height * bytes_per_row` bytes per glyph for consecutive
/// codes from 32 up; codes below 32 have no glyphs.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Font {
    pub width: u8,
    pub height: u8,
    pub data: &'static [u8],
}

impl Font {
    /// Bytes holding one glyph row.
    pub const fn bytes_per_row(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// Row bytes for `code`, or `None` for control codes and codes past
    /// the end of the table.
    pub fn glyph(&self, code: u8) -> Option<&'static [u8]> {
        if code < 32 {
            return None;
        }
        let stride = self.height as usize * self.bytes_per_row();
        let start = (code as usize - 32) * stride;
        self.data.get(start..start + stride)
    }
}

impl<S: DisplaySize, C: Charset> Frame<S, C> {
    /// Draw one glyph with its top-left cell corner at `(x, y)`.
    ///
    /// The whole cell must fit on the canvas; a cell that would hang off
    /// any edge is not drawn at all. Every bit of each row byte is
    /// painted, padding bits included, so the cell background is always
    /// repainted. Returns whether the glyph was drawn.
    pub fn draw_char(&mut self, x: u8, y: u8, code: u8, font: &Font, color: Color) -> bool {
        let glyph = match font.glyph(code) {
            Some(g) => g,
            None => return false,
        };
        if x as usize + font.width as usize > S::WIDTH as usize
            || y as usize + font.height as usize > S::HEIGHT as usize
        {
            return false;
        }

        let bg = color.inverse();
        let bpr = font.bytes_per_row();

        for row in 0..font.height as usize {
            for (byte_idx, &bits) in glyph[row * bpr..(row + 1) * bpr].iter().enumerate() {
                for bit in 0..8 {
                    let px = x as usize + byte_idx * 8 + bit;
                    if px >= S::WIDTH as usize {
                        break;
                    }
                    let on = bits & (0x80 >> bit) != 0;
                    self.set_pixel(px as u8, y + row as u8, if on { color } else { bg });
                }
            }
        }
        true
    }

    /// Draw a string starting at `(x, y)`, decoded by the frame's charset.
    ///
    /// The cursor advances one cell width per decoded codepoint whether or
    /// not the glyph was drawable, so undecodable input leaves a
    /// fallback-sized gap instead of shifting the rest of the line.
    /// Rendering stops at the right edge; the string is never wrapped.
    pub fn draw_str(&mut self, x: u8, y: u8, text: impl AsRef<[u8]>, font: &Font, color: Color) {
        let mut bytes = text.as_ref();
        let mut cursor = x as u16;

        while !bytes.is_empty() {
            let (cp, n) = C::next_codepoint(bytes);
            if n == 0 {
                break;
            }
            bytes = &bytes[n..];

            if let Ok(cx) = u8::try_from(cursor) {
                self.draw_char(cx, y, C::map(cp), font, color);
            }
            cursor = cursor.saturating_add(font.width as u16);
        }
    }
}

/// Rendered width of `text` in pixels: decoded codepoint count times the
/// cell width. Undecodable bytes still count, matching how [`Frame::draw_str`]
/// advances.
pub fn text_width<C: Charset>(text: impl AsRef<[u8]>, font: &Font) -> u16 {
    let mut bytes = text.as_ref();
    let mut count: u16 = 0;

    while !bytes.is_empty() {
        let (_, n) = C::next_codepoint(bytes);
        if n == 0 {
            break;
        }
        bytes = &bytes[n..];
        count = count.saturating_add(1);
    }

    count.saturating_mul(font.width as u16)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::Utf8;
    use crate::size::Size128x64;

    type TestFrame = Frame<Size128x64>;

    // Two-glyph 8x2 font: ' ' is blank, '!' has a solid top row.
    static TEST_FONT_DATA: [u8; 4] = [0x00, 0x00, 0xFF, 0x00];
    const TEST_FONT: Font = Font {
        width: 8,
        height: 2,
        data: &TEST_FONT_DATA,
    };

    fn lit_pixels(frame: &TestFrame) -> usize {
        frame.buffer().iter().map(|b| b.count_ones() as usize).sum()
    }

    #[test]
    fn test_glyph_lookup() {
        assert_eq!(TEST_FONT.glyph(b' '), Some(&[0x00, 0x00][..]));
        assert_eq!(TEST_FONT.glyph(b'!'), Some(&[0xFF, 0x00][..]));
        // control codes and codes past the table end
        assert_eq!(TEST_FONT.glyph(31), None);
        assert_eq!(TEST_FONT.glyph(b'"'), None);
    }

    #[test]
    fn test_draw_char_control_code_is_noop() {
        let mut frame = TestFrame::new();
        assert!(!frame.draw_char(0, 0, b'\n', &TEST_FONT, Color::On));
        assert_eq!(lit_pixels(&frame), 0);
        assert!(!frame.is_dirty());
    }

    #[test]
    fn test_draw_char_is_opaque() {
        let mut frame = TestFrame::new();
        frame.fill(Color::On);
        // a blank glyph erases its whole cell
        frame.draw_char(0, 0, b' ', &TEST_FONT, Color::On);
        for x in 0..8 {
            assert_eq!(frame.get_pixel(x, 0), Color::Off);
            assert_eq!(frame.get_pixel(x, 1), Color::Off);
        }
        assert_eq!(frame.get_pixel(8, 0), Color::On);
    }

    #[test]
    fn test_draw_char_rejects_partial_cell() {
        let mut frame = TestFrame::new();
        assert!(!frame.draw_char(121, 0, b'!', &TEST_FONT, Color::On));
        assert!(!frame.draw_char(0, 63, b'!', &TEST_FONT, Color::On));
        assert_eq!(lit_pixels(&frame), 0);

        // one column to the left the cell fits exactly
        assert!(frame.draw_char(120, 0, b'!', &TEST_FONT, Color::On));
        assert_eq!(lit_pixels(&frame), 8);
        assert_eq!(frame.get_pixel(127, 0), Color::On);
    }

    #[test]
    fn test_draw_str_advances_per_codepoint() {
        let mut frame = TestFrame::new();
        frame.draw_str(0, 0, "!!", &TEST_FONT, Color::On);
        for x in 0..16 {
            assert_eq!(frame.get_pixel(x, 0), Color::On, "x={}", x);
        }
        assert_eq!(frame.get_pixel(16, 0), Color::Off);
    }

    #[test]
    fn test_draw_str_gap_for_unmapped_codepoint() {
        let mut frame = TestFrame::new();
        // the euro sign decodes fine but maps to '?', which this tiny
        // table cannot render; the cell advance must still happen
        frame.draw_str(0, 0, "!€!", &TEST_FONT, Color::On);
        for x in 0..8 {
            assert_eq!(frame.get_pixel(x, 0), Color::On);
        }
        for x in 8..16 {
            assert_eq!(frame.get_pixel(x, 0), Color::Off);
        }
        for x in 16..24 {
            assert_eq!(frame.get_pixel(x, 0), Color::On);
        }
    }

    #[test]
    fn test_draw_str_stops_at_right_edge_without_wrapping() {
        let mut long = TestFrame::new();
        let mut short = TestFrame::new();
        // 16 cells fill the row exactly; the rest must fall off the edge,
        // not come back around to column 0
        long.draw_str(0, 0, "!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!!", &TEST_FONT, Color::On);
        short.draw_str(0, 0, "!!!!!!!!!!!!!!!!", &TEST_FONT, Color::On);
        assert_eq!(long.buffer(), short.buffer());
    }

    #[test]
    fn test_text_width_counts_codepoints() {
        assert_eq!(text_width::<Utf8>("", &TEST_FONT), 0);
        assert_eq!(text_width::<Utf8>("abc", &TEST_FONT), 24);
        // two Cyrillic letters are four bytes but two cells
        assert_eq!(text_width::<Utf8>("АБ", &TEST_FONT), 16);
        // a malformed byte counts as one fallback cell
        assert_eq!(text_width::<Utf8>(&[0x41, 0x80][..], &TEST_FONT), 16);
    }
}
