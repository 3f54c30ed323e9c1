//! Owned framebuffer with per-byte dirty tracking.

use core::marker::PhantomData;

use crate::charset::{Charset, Utf8};
use crate::size::DisplaySize;

/// Pixel state on a monochrome panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Off,
    On,
}

impl Color {
    pub fn inverse(self) -> Color {
        match self {
            Color::Off => Color::On,
            Color::On => Color::Off,
        }
    }
}

/// Page-organized framebuffer plus its dirty map.
///
/// Each buffer byte holds 8 vertically stacked pixels of one page (bit n of
/// the byte at column x, page p is the pixel at row `p * 8 + n`). Each dirty
/// bit covers one buffer byte; a bit is set iff that byte differs from what
/// was last transmitted. All drawing funnels through [`Frame::set_pixel`],
/// which keeps the dirty map exact, so the flush engine can skip everything
/// that did not change.
///
/// The charset parameter selects how [`draw_str`](Frame::draw_str) decodes
/// text bytes; it defaults to UTF-8.
pub struct Frame<S: DisplaySize, C: Charset = Utf8> {
    buffer: S::Buffer,
    dirty: S::DirtyFlags,
    _charset: PhantomData<C>,
}

impl<S: DisplaySize, C: Charset> Frame<S, C> {
    pub fn new() -> Self {
        Frame {
            buffer: S::new_buffer(),
            dirty: S::new_dirty_flags(),
            _charset: PhantomData,
        }
    }

    pub fn width(&self) -> u8 {
        S::WIDTH
    }

    pub fn height(&self) -> u8 {
        S::HEIGHT
    }

    /// Write one pixel. Out-of-bounds coordinates are silently dropped.
    /// Writing the value already present touches neither the buffer nor the
    /// dirty map.
    pub fn set_pixel(&mut self, x: u8, y: u8, color: Color) {
        if x >= S::WIDTH || y >= S::HEIGHT {
            return;
        }

        let (index, mask) = S::buffer_address(x, y);
        let byte = &mut self.buffer.as_mut()[index];
        let lit = *byte & mask != 0;
        if lit == (color == Color::On) {
            return;
        }

        if color == Color::On {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }

        let (dindex, dmask) = S::dirty_address(x, y);
        self.dirty.as_mut()[dindex] |= dmask;
    }

    /// Read one pixel; `Off` outside the canvas.
    pub fn get_pixel(&self, x: u8, y: u8) -> Color {
        if x >= S::WIDTH || y >= S::HEIGHT {
            return Color::Off;
        }
        let (index, mask) = S::buffer_address(x, y);
        if self.buffer.as_ref()[index] & mask != 0 {
            Color::On
        } else {
            Color::Off
        }
    }

    /// Fill the whole canvas and mark every dirty bit, unconditionally.
    /// A fill always forces a full retransmit.
    pub fn fill(&mut self, color: Color) {
        let value = if color == Color::On { 0xFF } else { 0x00 };
        self.buffer.as_mut().fill(value);
        self.dirty.as_mut().fill(0xFF);
    }

    /// Raw framebuffer bytes, page-major.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    /// Raw dirty map, one bit per buffer byte.
    pub fn dirty_flags(&self) -> &[u8] {
        self.dirty.as_ref()
    }

    /// True if any dirty bit is set.
    pub fn is_dirty(&self) -> bool {
        self.dirty.as_ref().iter().any(|&b| b != 0)
    }

    /// Clear the dirty bits covering columns `[start, start + len)` of one
    /// page. Used by the flush engine after it hands a run to the transport.
    pub fn clear_dirty_range(&mut self, page: u8, start: u8, len: u16) {
        if page >= S::PAGES || start >= S::WIDTH || len == 0 {
            return;
        }
        let row = page as usize * S::WIDTH_BYTES as usize;
        let start = start as u16;
        let end = (start + len).min(S::WIDTH as u16);

        let flags = self.dirty.as_mut();
        let first = (start / 8) as usize;
        let last = ((end - 1) / 8) as usize;
        for i in first..=last {
            let base = i as u16 * 8;
            let lo = start.max(base) - base;
            let hi = end.min(base + 8) - base;
            let mask = (((1u16 << (hi - lo)) - 1) << lo) as u8;
            flags[row + i] &= !mask;
        }
    }
}

impl<S: DisplaySize, C: Charset> Default for Frame<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size::Size128x64;

    type TestFrame = Frame<Size128x64>;

    #[test]
    fn test_set_pixel_marks_dirty_once() {
        let mut frame = TestFrame::new();

        frame.set_pixel(10, 20, Color::On);
        assert_eq!(frame.get_pixel(10, 20), Color::On);
        let (dindex, dmask) = Size128x64::dirty_address(10, 20);
        assert_ne!(frame.dirty_flags()[dindex] & dmask, 0);

        // second write of the same value must not re-mark after a clear
        frame.clear_dirty_range(20 / 8, 10, 1);
        frame.set_pixel(10, 20, Color::On);
        assert_eq!(frame.dirty_flags()[dindex] & dmask, 0);
    }

    #[test]
    fn test_set_pixel_out_of_bounds_is_noop() {
        let mut frame = TestFrame::new();
        frame.set_pixel(128, 0, Color::On);
        frame.set_pixel(0, 64, Color::On);
        assert!(!frame.is_dirty());
        assert!(frame.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fill_marks_everything_dirty_both_times() {
        let mut frame = TestFrame::new();

        frame.fill(Color::On);
        assert!(frame.buffer().iter().all(|&b| b == 0xFF));
        assert!(frame.dirty_flags().iter().all(|&b| b == 0xFF));

        // drain the dirty map, then fill with the same color again:
        // the content is unchanged but the dirty map is full once more
        for page in 0..Size128x64::PAGES {
            frame.clear_dirty_range(page, 0, 128);
        }
        assert!(!frame.is_dirty());

        frame.fill(Color::On);
        assert!(frame.buffer().iter().all(|&b| b == 0xFF));
        assert!(frame.dirty_flags().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_clear_dirty_range_partial_bytes() {
        let mut frame = TestFrame::new();
        frame.fill(Color::On);

        // columns 3..=12 of page 0 span two flag bytes
        frame.clear_dirty_range(0, 3, 10);
        assert_eq!(frame.dirty_flags()[0], 0b0000_0111);
        assert_eq!(frame.dirty_flags()[1], 0b1110_0000);
        // the rest of the page row untouched
        assert_eq!(frame.dirty_flags()[2], 0xFF);
    }

    #[test]
    fn test_clear_dirty_range_clamps_at_width() {
        let mut frame = TestFrame::new();
        frame.fill(Color::On);
        frame.clear_dirty_range(7, 120, 100);
        let row = 7 * Size128x64::WIDTH_BYTES as usize;
        assert_eq!(frame.dirty_flags()[row + 15], 0x00);
        assert_eq!(frame.dirty_flags()[row + 14], 0xFF);
    }

    #[test]
    fn test_pixel_toggle_tracks_buffer_bit() {
        let mut frame = TestFrame::new();
        frame.set_pixel(5, 9, Color::On);
        let (index, mask) = Size128x64::buffer_address(5, 9);
        assert_ne!(frame.buffer()[index] & mask, 0);

        frame.set_pixel(5, 9, Color::Off);
        assert_eq!(frame.buffer()[index] & mask, 0);
    }
}
