//! 5x7 bitmap glyphs.
//!
//! The font covers ASCII 32..=127. Each glyph is five column bytes; bit `r`
//! of a column byte lights pixel row `r` (row 0 at the top). Characters
//! outside the table have no glyph and are drawn as blank cells.

use embedded_graphics::prelude::Size;

/// Glyph cell width in pixels.
pub const GLYPH_WIDTH: u32 = 5;

/// Glyph cell height in pixels.
pub const GLYPH_HEIGHT: u32 = 7;

/// First character code in [`FONT_5X7`].
const FIRST_CHAR: u32 = 0x20;

/// Column bitmaps for ASCII 32..=127.
#[rustfmt::skip]
const FONT_5X7: [[u8; 5]; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x00, 0x00, 0x5F, 0x00, 0x00], // !
    [0x00, 0x07, 0x00, 0x07, 0x00], // "
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // #
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // $
    [0x23, 0x13, 0x08, 0x64, 0x62], // %
    [0x36, 0x49, 0x55, 0x22, 0x50], // &
    [0x00, 0x05, 0x03, 0x00, 0x00], // '
    [0x00, 0x1C, 0x22, 0x41, 0x00], // (
    [0x00, 0x41, 0x22, 0x1C, 0x00], // )
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // *
    [0x08, 0x08, 0x3E, 0x08, 0x08], // +
    [0x00, 0x50, 0x30, 0x00, 0x00], // ,
    [0x08, 0x08, 0x08, 0x08, 0x08], // -
    [0x00, 0x60, 0x60, 0x00, 0x00], // .
    [0x20, 0x10, 0x08, 0x04, 0x02], // /
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
    [0x00, 0x36, 0x36, 0x00, 0x00], // :
    [0x00, 0x56, 0x36, 0x00, 0x00], // ;
    [0x00, 0x08, 0x14, 0x22, 0x41], // <
    [0x14, 0x14, 0x14, 0x14, 0x14], // =
    [0x41, 0x22, 0x14, 0x08, 0x00], // >
    [0x02, 0x01, 0x51, 0x09, 0x06], // ?
    [0x32, 0x49, 0x79, 0x41, 0x3E], // @
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x01, 0x01], // F
    [0x3E, 0x41, 0x41, 0x51, 0x32], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x03, 0x04, 0x78, 0x04, 0x03], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
    [0x00, 0x00, 0x7F, 0x41, 0x41], // [
    [0x02, 0x04, 0x08, 0x10, 0x20], // backslash
    [0x41, 0x41, 0x7F, 0x00, 0x00], // ]
    [0x04, 0x02, 0x01, 0x02, 0x04], // ^
    [0x40, 0x40, 0x40, 0x40, 0x40], // _
    [0x00, 0x01, 0x02, 0x04, 0x00], // `
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x08, 0x14, 0x54, 0x54, 0x3C], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x20, 0x40, 0x44, 0x3D, 0x00], // j
    [0x00, 0x7F, 0x10, 0x28, 0x44], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0x7C, 0x14, 0x14, 0x14, 0x08], // p
    [0x08, 0x14, 0x14, 0x18, 0x7C], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
    [0x00, 0x08, 0x36, 0x41, 0x00], // {
    [0x00, 0x00, 0x7F, 0x00, 0x00], // |
    [0x00, 0x41, 0x36, 0x08, 0x00], // }
    [0x08, 0x04, 0x08, 0x10, 0x08], // ~
    [0x00, 0x00, 0x00, 0x00, 0x00], // DEL
];

/// Size of one glyph cell, excluding inter-character spacing.
#[inline]
pub const fn measure_glyph() -> Size { Size::new(GLYPH_WIDTH, GLYPH_HEIGHT) }

/// One rasterized character.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Glyph {
    columns: [u8; GLYPH_WIDTH as usize],
}

impl Glyph {
    /// Look up the glyph for `c`, or `None` if the font has no entry.
    pub fn for_char(c: char) -> Option<Self> {
        let index = (c as u32).checked_sub(FIRST_CHAR)? as usize;
        FONT_5X7.get(index).map(|columns| Self { columns: *columns })
    }

    /// Whether the pixel at (`col`, `row`) is lit. Out-of-cell positions are unlit.
    #[inline]
    pub fn is_set(
        &self,
        col: u32,
        row: u32,
    ) -> bool {
        if col >= GLYPH_WIDTH || row >= GLYPH_HEIGHT {
            return false;
        }
        self.columns[col as usize] & (1 << row) != 0
    }

    /// Lit pixels as `(col, row)` pairs, column by column.
    pub fn pixels(self) -> impl Iterator<Item = (u32, u32)> {
        (0..GLYPH_WIDTH).flat_map(move |col| (0..GLYPH_HEIGHT).filter_map(move |row| self.is_set(col, row).then_some((col, row))))
    }

    /// True for glyphs with no lit pixels (space, DEL).
    pub fn is_blank(&self) -> bool { self.columns.iter().all(|c| *c == 0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_glyph() {
        assert_eq!(measure_glyph(), Size::new(5, 7));
    }

    #[test]
    fn test_printable_ascii_has_glyphs() {
        for c in ' '..='~' {
            assert!(Glyph::for_char(c).is_some(), "missing glyph for {c:?}");
        }
    }

    #[test]
    fn test_control_and_unicode_have_no_glyph() {
        assert!(Glyph::for_char('\n').is_none());
        assert!(Glyph::for_char('\u{1F}').is_none());
        assert!(Glyph::for_char('\u{80}').is_none());
        assert!(Glyph::for_char('∞').is_none());
    }

    #[test]
    fn test_space_is_blank() {
        let space = Glyph::for_char(' ').unwrap();
        assert!(space.is_blank());
        assert_eq!(space.pixels().count(), 0);
    }

    #[test]
    fn test_letter_i_is_vertical_bar_with_serifs() {
        // I = 0x00, 0x41, 0x7F, 0x41, 0x00
        let glyph = Glyph::for_char('I').unwrap();
        for row in 0..GLYPH_HEIGHT {
            assert!(glyph.is_set(2, row), "centre column row {row}");
        }
        assert!(glyph.is_set(1, 0));
        assert!(glyph.is_set(1, 6));
        assert!(!glyph.is_set(1, 3));
        assert!(!glyph.is_set(0, 0));
    }

    #[test]
    fn test_pixels_match_is_set() {
        let glyph = Glyph::for_char('A').unwrap();
        let lit: Vec<(u32, u32)> = glyph.pixels().collect();
        let expected: u32 = [0x7Eu8, 0x11, 0x11, 0x11, 0x7E].iter().map(|b| b.count_ones()).sum();
        assert_eq!(lit.len() as u32, expected);
        assert!(lit.iter().all(|(c, r)| glyph.is_set(*c, *r)));
    }

    #[test]
    fn test_out_of_cell_is_unlit() {
        let glyph = Glyph::for_char('#').unwrap();
        assert!(!glyph.is_set(5, 0));
        assert!(!glyph.is_set(0, 7));
    }
}
