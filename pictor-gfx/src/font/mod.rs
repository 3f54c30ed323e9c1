//! Built-in glyph tables.
//!
//! Each table is behind its own feature so unused fonts stay out of
//! flash. All tables share the same layout: 224 glyphs for codes
//! 32..=255 with Cyrillic at 0xC0..=0xFF.

#[cfg(feature = "font-7x14")]
mod font_7x14;
#[cfg(feature = "font-8x8")]
mod font_8x8;

#[cfg(feature = "font-7x14")]
pub use font_7x14::FONT_7X14;
#[cfg(feature = "font-8x8")]
pub use font_8x8::FONT_8X8;

/// Font used by widgets that do not take an explicit one.
#[cfg(feature = "font-7x14")]
pub const DEFAULT: crate::text::Font = FONT_7X14;
#[cfg(all(feature = "font-8x8", not(feature = "font-7x14")))]
pub const DEFAULT: crate::text::Font = FONT_8X8;

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "font-7x14")]
    #[test]
    fn test_7x14_covers_full_code_range() {
        assert_eq!(FONT_7X14.data.len(), 224 * 14);
        assert_eq!(FONT_7X14.bytes_per_row(), 1);
        assert!(FONT_7X14.glyph(32).is_some());
        assert!(FONT_7X14.glyph(255).is_some());
        assert!(FONT_7X14.glyph(31).is_none());
    }

    #[cfg(feature = "font-8x8")]
    #[test]
    fn test_8x8_covers_full_code_range() {
        assert_eq!(FONT_8X8.data.len(), 224 * 8);
        assert!(FONT_8X8.glyph(32).is_some());
        assert!(FONT_8X8.glyph(255).is_some());
    }

    #[cfg(feature = "font-7x14")]
    #[test]
    fn test_space_glyph_is_blank() {
        let space = FONT_7X14.glyph(b' ').unwrap();
        assert!(space.iter().all(|&b| b == 0));
    }

    #[cfg(feature = "font-7x14")]
    #[test]
    fn test_letter_glyph_has_ink() {
        let a = FONT_7X14.glyph(b'A').unwrap();
        assert!(a.iter().any(|&b| b != 0));
        // Cyrillic А shares the Latin A letterform
        assert_eq!(FONT_7X14.glyph(0xC0), FONT_7X14.glyph(b'A'));
    }
}
