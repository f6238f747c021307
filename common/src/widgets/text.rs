//! Text drawing with the 5x7 glyph font.
//!
//! # Feature Flags
//!
//! - **`simple-outline`**: [`draw_outlined_text`] draws a 2-pass drop shadow
//!   instead of the full 8-pass outline, cutting draw calls from 9 to 3.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::config::{TEXT_ADVANCE, TEXT_LINE_HEIGHT};
use crate::glyph::{GLYPH_WIDTH, Glyph};
use crate::layout::{LayoutMetrics, WrapMode, layout};

/// Line pitch of scaled text, per unit of scale.
const SCALED_LINE_HEIGHT: i32 = 16;

/// Draw one character with its top-left corner at `origin`.
///
/// Each lit glyph pixel becomes a `scale` x `scale` block.
pub fn draw_char<D>(
    display: &mut D,
    origin: Point,
    c: char,
    color: Rgb565,
    scale: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(glyph) = Glyph::for_char(c) else {
        return;
    };
    if scale <= 1 {
        let pixels = glyph
            .pixels()
            .map(|(col, row)| Pixel(origin + Point::new(col as i32, row as i32), color));
        display.draw_iter(pixels).ok();
    } else {
        let block = Size::new(scale, scale);
        for (col, row) in glyph.pixels() {
            let top_left = origin + Point::new((col * scale) as i32, (row * scale) as i32);
            display.fill_solid(&Rectangle::new(top_left, block), color).ok();
        }
    }
}

/// Draw regular 5x7 text. `\n` returns to `origin.x` on the next line.
pub fn draw_text<D>(
    display: &mut D,
    origin: Point,
    text: &str,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut cursor = origin;
    for c in text.chars() {
        if c == '\n' {
            cursor = Point::new(origin.x, cursor.y + TEXT_LINE_HEIGHT as i32);
            continue;
        }
        draw_char(display, cursor, c, color, 1);
        cursor.x += TEXT_ADVANCE as i32;
    }
}

/// Draw large text: letters upper-cased, every glyph pixel `scale` pixels wide.
pub fn draw_text_scaled<D>(
    display: &mut D,
    origin: Point,
    text: &str,
    color: Rgb565,
    scale: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let advance = (TEXT_ADVANCE * scale) as i32;
    let mut cursor = origin;
    for c in text.chars() {
        if c == '\n' {
            cursor = Point::new(origin.x, cursor.y + SCALED_LINE_HEIGHT * scale as i32);
            continue;
        }
        draw_char(display, cursor, c.to_ascii_uppercase(), color, scale);
        cursor.x += advance;
    }
}

/// Width in pixels of a single line of text at `scale`, without trailing spacing.
pub fn text_width(
    text: &str,
    scale: u32,
) -> u32 {
    match text.chars().count() as u32 {
        0 => 0,
        n => ((n - 1) * TEXT_ADVANCE + GLYPH_WIDTH) * scale,
    }
}

/// Draw scaled text with a contrasting outline.
///
/// # Performance Modes
///
/// - **Default (simulator)**: Full 8-direction outline (9 draw calls per text)
/// - **`simple-outline` feature (firmware)**: 2-direction shadow (3 draw calls per text)
pub fn draw_outlined_text<D>(
    display: &mut D,
    origin: Point,
    text: &str,
    color: Rgb565,
    outline_color: Rgb565,
    scale: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    #[cfg(feature = "simple-outline")]
    const OFFSETS: [(i32, i32); 2] = [(1, 1), (1, 0)];

    #[cfg(not(feature = "simple-outline"))]
    const OFFSETS: [(i32, i32); 8] = [
        (-1, -1),
        (0, -1),
        (1, -1), // top row
        (-1, 0),
        (1, 0), // middle row (skip center)
        (-1, 1),
        (0, 1),
        (1, 1), // bottom row
    ];

    for (dx, dy) in OFFSETS {
        draw_text_scaled(display, origin + Point::new(dx, dy), text, outline_color, scale);
    }
    draw_text_scaled(display, origin, text, color, scale);
}

/// Draw rows `[start_line, start_line + max_lines)` of `text` laid out with
/// `mode` and `metrics`, the first shown row at `origin`.
///
/// The whole layout is walked regardless of the window, so the returned total
/// row count is exact.
#[allow(clippy::too_many_arguments)]
pub fn draw_lines<D>(
    display: &mut D,
    text: &str,
    mode: WrapMode,
    metrics: LayoutMetrics,
    origin: Point,
    start_line: usize,
    max_lines: usize,
    color: Rgb565,
) -> usize
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut total = 0;
    for (index, row) in layout(text, mode, metrics).enumerate() {
        total += 1;
        if index < start_line || index - start_line >= max_lines {
            continue;
        }
        let y = origin.y + metrics.row_offset(index - start_line);
        draw_row(display, row.text(text), mode, metrics, Point::new(origin.x, y), color);
    }
    total
}

/// Draw one already laid-out row.
pub fn draw_row<D>(
    display: &mut D,
    row: &str,
    mode: WrapMode,
    metrics: LayoutMetrics,
    origin: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let advance = metrics.glyph_width_px as i32;
    for (i, c) in row.chars().enumerate() {
        let position = origin + Point::new(i as i32 * advance, 0);
        draw_char(display, position, mode.display_char(c), color, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, HGTTG_BRIGHT};
    use crate::testing::FrameBuffer;

    #[test]
    fn test_draw_char_lights_glyph_pixels() {
        let mut fb = FrameBuffer::new();
        draw_char(&mut fb, Point::new(10, 20), 'I', HGTTG_BRIGHT, 1);
        assert_eq!(fb.count(HGTTG_BRIGHT), Glyph::for_char('I').unwrap().pixels().count());
        assert_eq!(fb.pixel(12, 20), Some(HGTTG_BRIGHT));
        assert_eq!(fb.pixel(10, 23), Some(BLACK));
    }

    #[test]
    fn test_scaled_char_fills_blocks() {
        let mut fb = FrameBuffer::new();
        draw_char(&mut fb, Point::zero(), '.', HGTTG_BRIGHT, 3);
        let lit = Glyph::for_char('.').unwrap().pixels().count();
        assert_eq!(fb.count(HGTTG_BRIGHT), lit * 9);
    }

    #[test]
    fn test_unknown_char_draws_nothing() {
        let mut fb = FrameBuffer::new();
        draw_text(&mut fb, Point::new(5, 5), "\u{7}", HGTTG_BRIGHT);
        assert_eq!(fb.count(HGTTG_BRIGHT), 0);
    }

    #[test]
    fn test_scaled_text_is_upper_case() {
        let mut lower = FrameBuffer::new();
        let mut upper = FrameBuffer::new();
        draw_text_scaled(&mut lower, Point::new(4, 4), "guide", HGTTG_BRIGHT, 2);
        draw_text_scaled(&mut upper, Point::new(4, 4), "GUIDE", HGTTG_BRIGHT, 2);
        assert!(lower == upper);
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("42", 4), 44);
    }

    #[test]
    fn test_outline_surrounds_text() {
        let mut fb = FrameBuffer::new();
        draw_outlined_text(&mut fb, Point::new(20, 20), "I", HGTTG_BRIGHT, crate::colors::AMBER, 1);
        assert!(fb.count(crate::colors::AMBER) > 0);
        // Centre column of the I stays in the foreground colour
        assert_eq!(fb.pixel(22, 23), Some(HGTTG_BRIGHT));
    }

    #[test]
    fn test_draw_lines_returns_total_and_clips_window() {
        let metrics = LayoutMetrics::new(64, 8, 10);
        let text = "ONE\nTWO\nTHREE\nFOUR";
        let mut fb = FrameBuffer::new();
        let total = draw_lines(&mut fb, text, WrapMode::Word, metrics, Point::new(0, 0), 1, 2, HGTTG_BRIGHT);
        assert_eq!(total, 4);
        assert!(fb.region_contains(Rectangle::new(Point::new(0, 0), Size::new(40, 8)), HGTTG_BRIGHT), "TWO on row 0");
        assert!(fb.region_contains(Rectangle::new(Point::new(0, 10), Size::new(40, 8)), HGTTG_BRIGHT), "THREE on row 1");
        assert!(!fb.region_contains(Rectangle::new(Point::new(0, 20), Size::new(60, 10)), HGTTG_BRIGHT), "FOUR is outside");
    }

    #[test]
    fn test_draw_lines_past_end_draws_nothing() {
        let metrics = LayoutMetrics::new(64, 8, 10);
        let mut fb = FrameBuffer::new();
        let total = draw_lines(&mut fb, "ALPHA BETA", WrapMode::Word, metrics, Point::zero(), 5, 3, HGTTG_BRIGHT);
        assert_eq!(total, 2);
        assert_eq!(fb.count(HGTTG_BRIGHT), 0);
    }
}
