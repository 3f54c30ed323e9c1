//! Text encodings for the string pipeline.
//!
//! A [`Charset`] turns raw string bytes into codepoints and codepoints into
//! glyph indices. Glyph tables cover indices 32..=255: ASCII in its usual
//! place and Cyrillic А..я at 0xC0..=0xFF. Anything a charset cannot
//! represent renders as [`FALLBACK`].

/// Glyph index substituted for undecodable or unmappable input.
pub const FALLBACK: u8 = b'?';

/// Decoding and glyph mapping for one text encoding.
///
/// Implementations are stateless markers; a decode error never aborts a
/// string, it yields [`FALLBACK`] and resynchronizes on the next byte.
pub trait Charset {
    /// Decode the next codepoint from `bytes`.
    ///
    /// Returns the codepoint and the number of bytes consumed, at least 1
    /// for non-empty input. Empty input returns `(0, 0)`.
    fn next_codepoint(bytes: &[u8]) -> (u16, usize);

    /// Map a decoded codepoint to a glyph index.
    fn map(codepoint: u16) -> u8;
}

/// UTF-8, restricted to the Basic Multilingual Plane.
///
/// Sequences of 1 to 3 bytes decode normally. A malformed byte (stray
/// continuation, truncated sequence, or a 4-byte lead) decodes as
/// [`FALLBACK`] and consumes exactly one byte.
pub struct Utf8;

impl Charset for Utf8 {
    fn next_codepoint(bytes: &[u8]) -> (u16, usize) {
        let b0 = match bytes.first() {
            Some(&b) => b,
            None => return (0, 0),
        };

        if b0 < 0x80 {
            return (b0 as u16, 1);
        }

        if b0 & 0xE0 == 0xC0 {
            if let Some(&b1) = bytes.get(1) {
                if b1 & 0xC0 == 0x80 {
                    let cp = ((b0 & 0x1F) as u16) << 6 | (b1 & 0x3F) as u16;
                    return (cp, 2);
                }
            }
            return (FALLBACK as u16, 1);
        }

        if b0 & 0xF0 == 0xE0 {
            if let (Some(&b1), Some(&b2)) = (bytes.get(1), bytes.get(2)) {
                if b1 & 0xC0 == 0x80 && b2 & 0xC0 == 0x80 {
                    let cp = ((b0 & 0x0F) as u16) << 12
                        | ((b1 & 0x3F) as u16) << 6
                        | (b2 & 0x3F) as u16;
                    return (cp, 3);
                }
            }
            return (FALLBACK as u16, 1);
        }

        // 4-byte leads and stray continuation bytes
        (FALLBACK as u16, 1)
    }

    fn map(codepoint: u16) -> u8 {
        match codepoint {
            0x0000..=0x007F => codepoint as u8,
            // Cyrillic А..я packs after the ASCII block
            0x0410..=0x044F => 0xC0 + (codepoint - 0x0410) as u8,
            _ => FALLBACK,
        }
    }
}

/// Windows-1251 single-byte encoding.
///
/// Bytes pass through unchanged; the 0xC0..=0xFF range lines up with the
/// glyph tables' Cyrillic block by construction.
pub struct Win1251;

impl Charset for Win1251 {
    fn next_codepoint(bytes: &[u8]) -> (u16, usize) {
        match bytes.first() {
            Some(&b) => (b as u16, 1),
            None => (0, 0),
        }
    }

    fn map(codepoint: u16) -> u8 {
        if codepoint < 0x100 {
            codepoint as u8
        } else {
            FALLBACK
        }
    }
}

/// Plain ASCII with Latin-1 input framing: one byte per codepoint, only
/// the printable 0x20..=0x7F range maps to glyphs.
pub struct Latin1;

impl Charset for Latin1 {
    fn next_codepoint(bytes: &[u8]) -> (u16, usize) {
        match bytes.first() {
            Some(&b) => (b as u16, 1),
            None => (0, 0),
        }
    }

    fn map(codepoint: u16) -> u8 {
        if (0x20..=0x7F).contains(&codepoint) {
            codepoint as u8
        } else {
            FALLBACK
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_ascii_passthrough() {
        assert_eq!(Utf8::next_codepoint(b"A"), (0x41, 1));
        assert_eq!(Utf8::next_codepoint(b"Az"), (0x41, 1));
        assert_eq!(Utf8::map(0x41), b'A');
        assert_eq!(Utf8::map(0x20), b' ');
    }

    #[test]
    fn test_utf8_two_byte_cyrillic() {
        // "А" U+0410
        assert_eq!(Utf8::next_codepoint(&[0xD0, 0x90]), (0x0410, 2));
        // "я" U+044F
        assert_eq!(Utf8::next_codepoint(&[0xD1, 0x8F]), (0x044F, 2));
        assert_eq!(Utf8::map(0x0410), 0xC0);
        assert_eq!(Utf8::map(0x044F), 0xFF);
    }

    #[test]
    fn test_utf8_three_byte_sequence() {
        // "€" U+20AC = E2 82 AC
        assert_eq!(Utf8::next_codepoint(&[0xE2, 0x82, 0xAC]), (0x20AC, 3));
        // no glyph for it though
        assert_eq!(Utf8::map(0x20AC), FALLBACK);
    }

    #[test]
    fn test_utf8_invalid_continuation_consumes_one() {
        // lead byte followed by ASCII instead of a continuation
        assert_eq!(Utf8::next_codepoint(&[0xD0, 0x41]), (FALLBACK as u16, 1));
        // the ASCII byte then decodes on its own
        assert_eq!(Utf8::next_codepoint(&[0x41]), (0x41, 1));
    }

    #[test]
    fn test_utf8_truncated_sequence() {
        assert_eq!(Utf8::next_codepoint(&[0xD0]), (FALLBACK as u16, 1));
        assert_eq!(Utf8::next_codepoint(&[0xE2, 0x82]), (FALLBACK as u16, 1));
    }

    #[test]
    fn test_utf8_stray_continuation() {
        assert_eq!(Utf8::next_codepoint(&[0x80]), (FALLBACK as u16, 1));
        assert_eq!(Utf8::next_codepoint(&[0xBF, 0x41]), (FALLBACK as u16, 1));
    }

    #[test]
    fn test_utf8_four_byte_lead_yields_per_byte_fallback() {
        // U+1F600 = F0 9F 98 80: outside the BMP, each byte falls back
        let mut bytes: &[u8] = &[0xF0, 0x9F, 0x98, 0x80];
        let mut decoded = 0;
        while !bytes.is_empty() {
            let (cp, n) = Utf8::next_codepoint(bytes);
            assert_eq!((cp, n), (FALLBACK as u16, 1));
            bytes = &bytes[n..];
            decoded += 1;
        }
        assert_eq!(decoded, 4);
    }

    #[test]
    fn test_utf8_empty_input() {
        assert_eq!(Utf8::next_codepoint(&[]), (0, 0));
    }

    #[test]
    fn test_utf8_map_outside_tables() {
        assert_eq!(Utf8::map(0x00E9), FALLBACK); // é
        assert_eq!(Utf8::map(0x0409), FALLBACK); // Љ, just below А
        assert_eq!(Utf8::map(0x0450), FALLBACK); // ѐ, just above я
    }

    #[test]
    fn test_win1251_byte_passthrough() {
        assert_eq!(Win1251::next_codepoint(&[0xC0]), (0xC0, 1));
        assert_eq!(Win1251::map(0xC0), 0xC0);
        assert_eq!(Win1251::map(0x41), 0x41);
        assert_eq!(Win1251::next_codepoint(&[]), (0, 0));
    }

    #[test]
    fn test_latin1_printable_range_only() {
        assert_eq!(Latin1::next_codepoint(&[0x41]), (0x41, 1));
        assert_eq!(Latin1::map(0x41), 0x41);
        assert_eq!(Latin1::map(0x7F), 0x7F);
        assert_eq!(Latin1::map(0x1F), FALLBACK);
        assert_eq!(Latin1::map(0x80), FALLBACK);
        assert_eq!(Latin1::map(0xFF), FALLBACK);
    }
}
