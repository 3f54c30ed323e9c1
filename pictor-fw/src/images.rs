//! 1bpp demo assets, rows packed MSB-first and padded to whole bytes.

/// Painter's easel with a three-star canvas, 32x32.
#[rustfmt::skip]
pub static EASEL_32X32: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x10, 0x00, 0x00, 0x00,
    0x38, 0x00, 0x00, 0x00,
    0x10, 0x00, 0x00, 0x00,
    0x03, 0xFF, 0xFF, 0xF0,
    0x03, 0xFF, 0xFF, 0xF0,
    0x03, 0x00, 0x00, 0x30,
    0x03, 0x00, 0x00, 0x30,
    0x03, 0x18, 0x00, 0x30,
    0x03, 0x3C, 0x00, 0x30,
    0x03, 0x18, 0x10, 0x30,
    0x03, 0x00, 0x38, 0x30,
    0x03, 0x00, 0x10, 0x30,
    0x03, 0x00, 0x00, 0x30,
    0x03, 0x01, 0x00, 0x30,
    0x03, 0x03, 0x80, 0x30,
    0x03, 0x01, 0x00, 0x30,
    0x03, 0x00, 0x00, 0x30,
    0x03, 0xFF, 0xFF, 0xF0,
    0x03, 0xFF, 0xFF, 0xF0,
    0x00, 0x04, 0x80, 0x00,
    0x00, 0x0C, 0xC0, 0x00,
    0x00, 0x18, 0x60, 0x00,
    0x00, 0x30, 0x30, 0x00,
    0x00, 0x60, 0x18, 0x00,
    0x00, 0xC0, 0x0C, 0x00,
    0x01, 0x80, 0x06, 0x00,
    0x03, 0x00, 0x03, 0x00,
    0x06, 0x00, 0x01, 0x80,
    0x0C, 0x00, 0x00, 0xC0,
    0x18, 0x00, 0x00, 0x60,
    0x30, 0x00, 0x00, 0x30,
];

pub const EASEL_WIDTH: i16 = 32;
pub const EASEL_HEIGHT: i16 = 32;
