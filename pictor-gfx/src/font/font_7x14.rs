//! 7x14 glyph table: the 8x8 letterforms stretched to double height.

use crate::text::Font;

/// 7x14 fixed-cell font, ASCII plus Cyrillic at 0xC0..=0xFF.
pub const FONT_7X14: Font = Font {
    width: 7,
    height: 14,
    data: &FONT_7X14_DATA,
};

#[rustfmt::skip]
static FONT_7X14_DATA: [u8; 224 * 14] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x20 ' '
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, 0x20, 0x00, // 0x21 '!'
    0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x22 '"'
    0x50, 0x50, 0x50, 0x50, 0xF8, 0xF8, 0x50, 0x50, 0xF8, 0xF8, 0x50, 0x50, 0x50, 0x00, // 0x23 '#'
    0x20, 0x20, 0x78, 0x78, 0xA0, 0xA0, 0x70, 0x70, 0x28, 0x28, 0xF0, 0xF0, 0x20, 0x00, // 0x24 '$'
    0xC0, 0xC0, 0xC8, 0xC8, 0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x98, 0x98, 0x18, 0x00, // 0x25 '%'
    0x60, 0x60, 0x90, 0x90, 0xA0, 0xA0, 0x40, 0x40, 0xA8, 0xA8, 0x90, 0x90, 0x68, 0x00, // 0x26 '&'
    0x20, 0x20, 0x20, 0x20, 0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x27 '''
    0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x20, 0x20, 0x10, 0x00, // 0x28 '('
    0x40, 0x40, 0x20, 0x20, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x20, 0x20, 0x40, 0x00, // 0x29 ')'
    0x00, 0x00, 0x20, 0x20, 0xA8, 0xA8, 0x70, 0x70, 0xA8, 0xA8, 0x20, 0x20, 0x00, 0x00, // 0x2A '*'
    0x00, 0x00, 0x20, 0x20, 0x20, 0x20, 0xF8, 0xF8, 0x20, 0x20, 0x20, 0x20, 0x00, 0x00, // 0x2B '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x20, 0x20, 0x40, 0x00, // 0x2C ','
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x2D '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x30, 0x00, // 0x2E '.'
    0x00, 0x00, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x80, 0x80, 0x00, 0x00, // 0x2F '/'
    0x70, 0x70, 0x88, 0x88, 0x98, 0x98, 0xA8, 0xA8, 0xC8, 0xC8, 0x88, 0x88, 0x70, 0x00, // 0x30 '0'
    0x20, 0x20, 0x60, 0x60, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, // 0x31 '1'
    0x70, 0x70, 0x88, 0x88, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0xF8, 0x00, // 0x32 '2'
    0xF8, 0xF8, 0x10, 0x10, 0x20, 0x20, 0x10, 0x10, 0x08, 0x08, 0x88, 0x88, 0x70, 0x00, // 0x33 '3'
    0x10, 0x10, 0x30, 0x30, 0x50, 0x50, 0x90, 0x90, 0xF8, 0xF8, 0x10, 0x10, 0x10, 0x00, // 0x34 '4'
    0xF8, 0xF8, 0x80, 0x80, 0xF0, 0xF0, 0x08, 0x08, 0x08, 0x08, 0x88, 0x88, 0x70, 0x00, // 0x35 '5'
    0x30, 0x30, 0x40, 0x40, 0x80, 0x80, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0x36 '6'
    0xF8, 0xF8, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, // 0x37 '7'
    0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0x38 '8'
    0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x08, 0x08, 0x10, 0x10, 0x60, 0x00, // 0x39 '9'
    0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, // 0x3A ':'
    0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x20, 0x20, 0x40, 0x00, // 0x3B ';'
    0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x80, 0x80, 0x40, 0x40, 0x20, 0x20, 0x10, 0x00, // 0x3C '<'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0x00, 0x00, 0xF8, 0xF8, 0x00, 0x00, 0x00, 0x00, // 0x3D '='
    0x40, 0x40, 0x20, 0x20, 0x10, 0x10, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x40, 0x00, // 0x3E '>'
    0x70, 0x70, 0x88, 0x88, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x00, 0x00, 0x20, 0x00, // 0x3F '?'
    0x70, 0x70, 0x88, 0x88, 0x08, 0x08, 0x68, 0x68, 0xA8, 0xA8, 0xA8, 0xA8, 0x70, 0x00, // 0x40 '@'
    0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0xF8, 0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0x41 'A'
    0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0x00, // 0x42 'B'
    0x70, 0x70, 0x88, 0x88, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x88, 0x88, 0x70, 0x00, // 0x43 'C'
    0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0xF0, 0x00, // 0x44 'D'
    0xF8, 0xF8, 0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00, // 0x45 'E'
    0xF8, 0xF8, 0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, // 0x46 'F'
    0x70, 0x70, 0x88, 0x88, 0x80, 0x80, 0xB8, 0xB8, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0x47 'G'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0xF8, 0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0x48 'H'
    0x70, 0x70, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, // 0x49 'I'
    0x38, 0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x90, 0x90, 0x60, 0x00, // 0x4A 'J'
    0x88, 0x88, 0x90, 0x90, 0xA0, 0xA0, 0xC0, 0xC0, 0xA0, 0xA0, 0x90, 0x90, 0x88, 0x00, // 0x4B 'K'
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00, // 0x4C 'L'
    0x88, 0x88, 0xD8, 0xD8, 0xA8, 0xA8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0x4D 'M'
    0x88, 0x88, 0xC8, 0xC8, 0xA8, 0xA8, 0x98, 0x98, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0x4E 'N'
    0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0x4F 'O'
    0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0xF0, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, // 0x50 'P'
    0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0xA8, 0xA8, 0x90, 0x90, 0x68, 0x00, // 0x51 'Q'
    0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0xF0, 0xA0, 0xA0, 0x90, 0x90, 0x88, 0x00, // 0x52 'R'
    0x78, 0x78, 0x80, 0x80, 0x80, 0x80, 0x70, 0x70, 0x08, 0x08, 0x08, 0x08, 0xF0, 0x00, // 0x53 'S'
    0xF8, 0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, // 0x54 'T'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0x55 'U'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x50, 0x20, 0x00, // 0x56 'V'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0xA8, 0xA8, 0xA8, 0xA8, 0xD8, 0xD8, 0x88, 0x00, // 0x57 'W'
    0x88, 0x88, 0x88, 0x88, 0x50, 0x50, 0x20, 0x20, 0x50, 0x50, 0x88, 0x88, 0x88, 0x00, // 0x58 'X'
    0x88, 0x88, 0x88, 0x88, 0x50, 0x50, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, // 0x59 'Y'
    0xF8, 0xF8, 0x08, 0x08, 0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0x80, 0x80, 0xF8, 0x00, // 0x5A 'Z'
    0x70, 0x70, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x70, 0x00, // 0x5B '['
    0x00, 0x00, 0x80, 0x80, 0x40, 0x40, 0x20, 0x20, 0x10, 0x10, 0x08, 0x08, 0x00, 0x00, // 0x5C '\'
    0x70, 0x70, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x70, 0x00, // 0x5D ']'
    0x20, 0x20, 0x50, 0x50, 0x88, 0x88, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x5E '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, // 0x5F '_'
    0x40, 0x40, 0x20, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x60 '`'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x08, 0x08, 0x78, 0x78, 0x88, 0x88, 0x78, 0x00, // 0x61 'a'
    0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0xF0, 0x00, // 0x62 'b'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x80, 0x80, 0x80, 0x80, 0x88, 0x88, 0x70, 0x00, // 0x63 'c'
    0x08, 0x08, 0x08, 0x08, 0x78, 0x78, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x78, 0x00, // 0x64 'd'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x88, 0x88, 0xF8, 0xF8, 0x80, 0x80, 0x70, 0x00, // 0x65 'e'
    0x30, 0x30, 0x48, 0x48, 0x40, 0x40, 0xE0, 0xE0, 0x40, 0x40, 0x40, 0x40, 0x40, 0x00, // 0x66 'f'
    0x00, 0x00, 0x78, 0x78, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x08, 0x08, 0x70, 0x00, // 0x67 'g'
    0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0x68 'h'
    0x20, 0x20, 0x00, 0x00, 0x60, 0x60, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, // 0x69 'i'
    0x10, 0x10, 0x00, 0x00, 0x30, 0x30, 0x10, 0x10, 0x10, 0x10, 0x90, 0x90, 0x60, 0x00, // 0x6A 'j'
    0x80, 0x80, 0x80, 0x80, 0x90, 0x90, 0xA0, 0xA0, 0xC0, 0xC0, 0xA0, 0xA0, 0x90, 0x00, // 0x6B 'k'
    0x60, 0x60, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x70, 0x00, // 0x6C 'l'
    0x00, 0x00, 0x00, 0x00, 0xD0, 0xD0, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0x00, // 0x6D 'm'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0x6E 'n'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0x6F 'o'
    0x00, 0x00, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0xF0, 0x80, 0x80, 0x80, 0x00, // 0x70 'p'
    0x00, 0x00, 0x78, 0x78, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x08, 0x08, 0x08, 0x00, // 0x71 'q'
    0x00, 0x00, 0x00, 0x00, 0xB0, 0xB0, 0xC8, 0xC8, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, // 0x72 'r'
    0x00, 0x00, 0x00, 0x00, 0x78, 0x78, 0x80, 0x80, 0x70, 0x70, 0x08, 0x08, 0xF0, 0x00, // 0x73 's'
    0x40, 0x40, 0x40, 0x40, 0xE0, 0xE0, 0x40, 0x40, 0x40, 0x40, 0x48, 0x48, 0x30, 0x00, // 0x74 't'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x98, 0x98, 0x68, 0x00, // 0x75 'u'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x50, 0x50, 0x20, 0x00, // 0x76 'v'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0xA8, 0xA8, 0xA8, 0xA8, 0x50, 0x00, // 0x77 'w'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x50, 0x50, 0x20, 0x20, 0x50, 0x50, 0x88, 0x00, // 0x78 'x'
    0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x08, 0x08, 0x70, 0x00, // 0x79 'y'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0x10, 0x10, 0x20, 0x20, 0x40, 0x40, 0xF8, 0x00, // 0x7A 'z'
    0x18, 0x18, 0x20, 0x20, 0x20, 0x20, 0x40, 0x40, 0x20, 0x20, 0x20, 0x20, 0x18, 0x00, // 0x7B '{'
    0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, // 0x7C '|'
    0xC0, 0xC0, 0x20, 0x20, 0x20, 0x20, 0x10, 0x10, 0x20, 0x20, 0x20, 0x20, 0xC0, 0x00, // 0x7D '}'
    0x00, 0x00, 0x40, 0x40, 0xA8, 0xA8, 0x10, 0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x7E '~'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x7F
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x80
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x81
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x82
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x83
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x84
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x85
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x86
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x87
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x88
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x89
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x8A
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x8B
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x8C
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x8D
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x8E
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x8F
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x90
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x91
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x92
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x93
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x94
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x95
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x96
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x97
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x98
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x99
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x9A
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x9B
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x9C
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x9D
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x9E
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0x9F
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA0
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA1
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA2
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA3
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA4
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA5
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA6
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA7
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA8
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xA9
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xAA
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xAB
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xAC
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xAD
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xAE
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xAF
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB0
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB1
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB2
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB3
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB4
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB5
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB6
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB7
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB8
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xB9
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xBA
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xBB
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xBC
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xBD
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xBE
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // 0xBF
    0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0xF8, 0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0xC0 'А'
    0xF8, 0xF8, 0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0x00, // 0xC1 'Б'
    0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0x00, // 0xC2 'В'
    0xF8, 0xF8, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, // 0xC3 'Г'
    0x30, 0x30, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0x50, 0xF8, 0xF8, 0x88, 0x00, // 0xC4 'Д'
    0xF8, 0xF8, 0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x80, 0x80, 0x80, 0x80, 0xF8, 0x00, // 0xC5 'Е'
    0xA8, 0xA8, 0xA8, 0xA8, 0x70, 0x70, 0x20, 0x20, 0x70, 0x70, 0xA8, 0xA8, 0xA8, 0x00, // 0xC6 'Ж'
    0x70, 0x70, 0x88, 0x88, 0x08, 0x08, 0x30, 0x30, 0x08, 0x08, 0x88, 0x88, 0x70, 0x00, // 0xC7 'З'
    0x88, 0x88, 0x98, 0x98, 0xA8, 0xA8, 0xC8, 0xC8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0xC8 'И'
    0x50, 0x50, 0x88, 0x88, 0x98, 0x98, 0xA8, 0xA8, 0xC8, 0xC8, 0x88, 0x88, 0x88, 0x00, // 0xC9 'Й'
    0x88, 0x88, 0x90, 0x90, 0xA0, 0xA0, 0xC0, 0xC0, 0xA0, 0xA0, 0x90, 0x90, 0x88, 0x00, // 0xCA 'К'
    0x38, 0x38, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x88, 0x00, // 0xCB 'Л'
    0x88, 0x88, 0xD8, 0xD8, 0xA8, 0xA8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0xCC 'М'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0xF8, 0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0xCD 'Н'
    0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0xCE 'О'
    0xF8, 0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0xCF 'П'
    0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0xF0, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, // 0xD0 'Р'
    0x70, 0x70, 0x88, 0x88, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x88, 0x88, 0x70, 0x00, // 0xD1 'С'
    0xF8, 0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, // 0xD2 'Т'
    0x88, 0x88, 0x88, 0x88, 0x50, 0x50, 0x20, 0x20, 0x20, 0x20, 0x40, 0x40, 0x80, 0x00, // 0xD3 'У'
    0x20, 0x20, 0x70, 0x70, 0xA8, 0xA8, 0xA8, 0xA8, 0x70, 0x70, 0x20, 0x20, 0x20, 0x00, // 0xD4 'Ф'
    0x88, 0x88, 0x88, 0x88, 0x50, 0x50, 0x20, 0x20, 0x50, 0x50, 0x88, 0x88, 0x88, 0x00, // 0xD5 'Х'
    0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0xF8, 0xF8, 0x08, 0x00, // 0xD6 'Ц'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x08, 0x08, 0x08, 0x08, 0x08, 0x00, // 0xD7 'Ч'
    0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xF8, 0x00, // 0xD8 'Ш'
    0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xF8, 0xF8, 0x08, 0x00, // 0xD9 'Щ'
    0xC0, 0xC0, 0x40, 0x40, 0x40, 0x40, 0x70, 0x70, 0x48, 0x48, 0x48, 0x48, 0x70, 0x00, // 0xDA 'Ъ'
    0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0xC8, 0xC8, 0xA8, 0xA8, 0xA8, 0xA8, 0xC8, 0x00, // 0xDB 'Ы'
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0x00, // 0xDC 'Ь'
    0x70, 0x70, 0x88, 0x88, 0x08, 0x08, 0x38, 0x38, 0x08, 0x08, 0x88, 0x88, 0x70, 0x00, // 0xDD 'Э'
    0x90, 0x90, 0xA8, 0xA8, 0xA8, 0xA8, 0xE8, 0xE8, 0xA8, 0xA8, 0xA8, 0xA8, 0x90, 0x00, // 0xDE 'Ю'
    0x78, 0x78, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x28, 0x28, 0x48, 0x48, 0x88, 0x00, // 0xDF 'Я'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x08, 0x08, 0x78, 0x78, 0x88, 0x88, 0x78, 0x00, // 0xE0 'а'
    0x38, 0x38, 0x40, 0x40, 0x80, 0x80, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0xE1 'б'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0x88, 0x88, 0xF0, 0xF0, 0x88, 0x88, 0xF0, 0x00, // 0xE2 'в'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x00, // 0xE3 'г'
    0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x50, 0x50, 0x50, 0x50, 0xF8, 0xF8, 0x88, 0x00, // 0xE4 'д'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x88, 0x88, 0xF8, 0xF8, 0x80, 0x80, 0x70, 0x00, // 0xE5 'е'
    0x00, 0x00, 0x00, 0x00, 0xA8, 0xA8, 0x70, 0x70, 0x20, 0x20, 0x70, 0x70, 0xA8, 0x00, // 0xE6 'ж'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x08, 0x08, 0x30, 0x30, 0x08, 0x08, 0x70, 0x00, // 0xE7 'з'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x98, 0x98, 0xA8, 0xA8, 0xC8, 0xC8, 0x88, 0x00, // 0xE8 'и'
    0x50, 0x50, 0x20, 0x20, 0x88, 0x88, 0x98, 0x98, 0xA8, 0xA8, 0xC8, 0xC8, 0x88, 0x00, // 0xE9 'й'
    0x00, 0x00, 0x00, 0x00, 0x90, 0x90, 0xA0, 0xA0, 0xC0, 0xC0, 0xA0, 0xA0, 0x90, 0x00, // 0xEA 'к'
    0x00, 0x00, 0x00, 0x00, 0x38, 0x38, 0x48, 0x48, 0x48, 0x48, 0x48, 0x48, 0x88, 0x00, // 0xEB 'л'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0xD8, 0xD8, 0xA8, 0xA8, 0x88, 0x88, 0x88, 0x00, // 0xEC 'м'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0xF8, 0xF8, 0x88, 0x88, 0x88, 0x00, // 0xED 'н'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x70, 0x00, // 0xEE 'о'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x00, // 0xEF 'п'
    0x00, 0x00, 0xF0, 0xF0, 0x88, 0x88, 0x88, 0x88, 0xF0, 0xF0, 0x80, 0x80, 0x80, 0x00, // 0xF0 'р'
    0x00, 0x00, 0x00, 0x00, 0x70, 0x70, 0x80, 0x80, 0x80, 0x80, 0x88, 0x88, 0x70, 0x00, // 0xF1 'с'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0xF8, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x20, 0x00, // 0xF2 'т'
    0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x08, 0x08, 0x70, 0x00, // 0xF3 'у'
    0x20, 0x20, 0x70, 0x70, 0xA8, 0xA8, 0xA8, 0xA8, 0x70, 0x70, 0x20, 0x20, 0x20, 0x00, // 0xF4 'ф'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x50, 0x50, 0x20, 0x20, 0x50, 0x50, 0x88, 0x00, // 0xF5 'х'
    0x00, 0x00, 0x00, 0x00, 0x90, 0x90, 0x90, 0x90, 0x90, 0x90, 0xF8, 0xF8, 0x08, 0x00, // 0xF6 'ц'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0x78, 0x78, 0x08, 0x08, 0x08, 0x00, // 0xF7 'ч'
    0x00, 0x00, 0x00, 0x00, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xF8, 0x00, // 0xF8 'ш'
    0x00, 0x00, 0x00, 0x00, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xA8, 0xF8, 0xF8, 0x08, 0x00, // 0xF9 'щ'
    0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0x40, 0x40, 0x70, 0x70, 0x48, 0x48, 0x70, 0x00, // 0xFA 'ъ'
    0x00, 0x00, 0x00, 0x00, 0x88, 0x88, 0x88, 0x88, 0xC8, 0xC8, 0xA8, 0xA8, 0xC8, 0x00, // 0xFB 'ы'
    0x00, 0x00, 0x00, 0x00, 0x80, 0x80, 0x80, 0x80, 0xF0, 0xF0, 0x88, 0x88, 0xF0, 0x00, // 0xFC 'ь'
    0x00, 0x00, 0x00, 0x00, 0xE0, 0xE0, 0x08, 0x08, 0x38, 0x38, 0x08, 0x08, 0xE0, 0x00, // 0xFD 'э'
    0x00, 0x00, 0x00, 0x00, 0x90, 0x90, 0xA8, 0xA8, 0xE8, 0xE8, 0xA8, 0xA8, 0x90, 0x00, // 0xFE 'ю'
    0x00, 0x00, 0x00, 0x00, 0x78, 0x78, 0x88, 0x88, 0x78, 0x78, 0x48, 0x48, 0x88, 0x00, // 0xFF 'я'
];
