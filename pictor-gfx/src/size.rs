//! Panel geometry variants.
//!
//! Each supported panel size is a zero-sized marker type carrying its
//! geometry as associated constants and its storage as associated array
//! types, so [`Frame`](crate::Frame) can own fixed-size buffers without
//! const-generic arithmetic. The pixel/dirty addressing arithmetic lives
//! here too, isolated from the drawing code: the rasterizer never does
//! packing math itself.

/// Geometry of a page-organized monochrome panel.
///
/// Width and height are multiples of 8. A page is a band of 8 pixel rows
/// stored one byte per column; the dirty map holds one bit per buffer byte.
pub trait DisplaySize {
    /// Panel width in pixels.
    const WIDTH: u8;
    /// Panel height in pixels.
    const HEIGHT: u8;
    /// Offset added to the column address on the wire. Non-zero for panels
    /// wired as a window into a wider controller RAM.
    const X_OFFSET: u8 = 0;
    /// Offset added to the page address on the wire.
    const PAGE_OFFSET: u8 = 0;

    /// Number of 8-row pages.
    const PAGES: u8 = Self::HEIGHT / 8;
    /// Dirty-map row stride in bytes (one bit per column).
    const WIDTH_BYTES: u8 = Self::WIDTH / 8;

    /// Multiplex ratio parameter for controller init. Windowed panels
    /// drive more COM lines than they show, so this is not always
    /// `HEIGHT - 1`.
    const MULTIPLEX: u8 = Self::HEIGHT - 1;
    /// COM pin hardware configuration parameter for controller init.
    const COM_PINS: u8 = 0x12;

    /// Framebuffer storage, `WIDTH * HEIGHT / 8` bytes.
    type Buffer: AsRef<[u8]> + AsMut<[u8]>;
    /// Dirty-map storage, `(WIDTH / 8) * (HEIGHT / 8)` bytes.
    type DirtyFlags: AsRef<[u8]> + AsMut<[u8]>;

    fn new_buffer() -> Self::Buffer;
    fn new_dirty_flags() -> Self::DirtyFlags;

    /// Framebuffer byte index and bit mask addressing pixel `(x, y)`.
    ///
    /// Callers must have bounds-checked `x < WIDTH`, `y < HEIGHT`.
    fn buffer_address(x: u8, y: u8) -> (usize, u8) {
        let page = (y / 8) as usize;
        (page * Self::WIDTH as usize + x as usize, 1 << (y % 8))
    }

    /// Dirty-map byte index and bit mask covering pixel `(x, y)`.
    fn dirty_address(x: u8, y: u8) -> (usize, u8) {
        let page = (y / 8) as usize;
        (page * Self::WIDTH_BYTES as usize + (x / 8) as usize, 1 << (x % 8))
    }
}

/// 128x64 panel, the common 0.96" module.
pub struct Size128x64;

impl DisplaySize for Size128x64 {
    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 64;

    type Buffer = [u8; 128 * 64 / 8];
    type DirtyFlags = [u8; (128 / 8) * (64 / 8)];

    fn new_buffer() -> Self::Buffer {
        [0; 128 * 64 / 8]
    }

    fn new_dirty_flags() -> Self::DirtyFlags {
        [0; (128 / 8) * (64 / 8)]
    }
}

/// 64x32 panel addressed from column 0.
pub struct Size64x32;

impl DisplaySize for Size64x32 {
    const WIDTH: u8 = 64;
    const HEIGHT: u8 = 32;
    const COM_PINS: u8 = 0x02;

    type Buffer = [u8; 64 * 32 / 8];
    type DirtyFlags = [u8; (64 / 8) * (32 / 8)];

    fn new_buffer() -> Self::Buffer {
        [0; 64 * 32 / 8]
    }

    fn new_dirty_flags() -> Self::DirtyFlags {
        [0; (64 / 8) * (32 / 8)]
    }
}

/// 64x32 panel that is a centered window into a 128x64 controller:
/// columns start at 32 and pages at 4.
pub struct Size64x32Offset;

impl DisplaySize for Size64x32Offset {
    const WIDTH: u8 = 64;
    const HEIGHT: u8 = 32;
    const X_OFFSET: u8 = 32;
    const PAGE_OFFSET: u8 = 4;
    // the glass is 128x64, so the controller still scans 64 lines
    const MULTIPLEX: u8 = 63;

    type Buffer = [u8; 64 * 32 / 8];
    type DirtyFlags = [u8; (64 / 8) * (32 / 8)];

    fn new_buffer() -> Self::Buffer {
        [0; 64 * 32 / 8]
    }

    fn new_dirty_flags() -> Self::DirtyFlags {
        [0; (64 / 8) * (32 / 8)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_derived_constants() {
        assert_eq!(Size128x64::PAGES, 8);
        assert_eq!(Size128x64::WIDTH_BYTES, 16);
        assert_eq!(Size64x32::PAGES, 4);
        assert_eq!(Size64x32::WIDTH_BYTES, 8);
        assert_eq!(Size64x32Offset::X_OFFSET, 32);
        assert_eq!(Size64x32Offset::PAGE_OFFSET, 4);
    }

    #[test]
    fn test_buffer_address_corners() {
        // top-left: first byte, bit 0
        assert_eq!(Size128x64::buffer_address(0, 0), (0, 0x01));
        // bottom of the first column still in page 0
        assert_eq!(Size128x64::buffer_address(0, 7), (0, 0x80));
        // row 8 starts page 1
        assert_eq!(Size128x64::buffer_address(0, 8), (128, 0x01));
        // bottom-right: last byte, top bit
        assert_eq!(Size128x64::buffer_address(127, 63), (1023, 0x80));
    }

    #[test]
    fn test_dirty_address_corners() {
        assert_eq!(Size128x64::dirty_address(0, 0), (0, 0x01));
        assert_eq!(Size128x64::dirty_address(7, 0), (0, 0x80));
        assert_eq!(Size128x64::dirty_address(8, 0), (1, 0x01));
        assert_eq!(Size128x64::dirty_address(127, 63), (127, 0x80));
    }

    proptest! {
        #[test]
        fn prop_buffer_address_in_range(x in 0u8..128, y in 0u8..64) {
            let (index, mask) = Size128x64::buffer_address(x, y);
            prop_assert!(index < 1024);
            prop_assert_eq!(mask.count_ones(), 1);
        }

        #[test]
        fn prop_dirty_address_in_range(x in 0u8..128, y in 0u8..64) {
            let (index, mask) = Size128x64::dirty_address(x, y);
            prop_assert!(index < 128);
            prop_assert_eq!(mask.count_ones(), 1);
        }

        // the dirty map is a bit-per-byte shadow of the framebuffer: the
        // global dirty bit number is exactly the buffer byte index
        #[test]
        fn prop_dirty_bit_number_equals_buffer_index(x in 0u8..128, y in 0u8..64) {
            let (buf_index, _) = Size128x64::buffer_address(x, y);
            let (dirty_index, dirty_mask) = Size128x64::dirty_address(x, y);
            let bit_number = dirty_index * 8 + dirty_mask.trailing_zeros() as usize;
            prop_assert_eq!(bit_number, buf_index);
        }
    }
}
