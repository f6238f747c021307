//! Boot screen: "DON'T PANIC" banner and the loading spinner.
//!
//! The banner is static; only the footer band (version line and spinner)
//! changes between frames, so animation frames redraw just that band.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::Text;

use crate::animations::spinner_frame;
use crate::colors::{BLACK, HGTTG_BRIGHT, HGTTG_DARK};
use crate::styles::{BANNER_SHADOW_STYLE, BANNER_STYLE, CENTERED, SUBTITLE_STYLE};
use crate::widgets::{Gradient, draw_gradient_rect, draw_outlined_text, draw_spinner};

/// Version line shown in the boot footer.
pub const VERSION_LINE: &str = "v42.0 - PicoCalc Edition";

const BANNER_POS: Point = Point::new(160, 120);
const BANNER_SHADOW_POS: Point = Point::new(162, 122);
const SUBTITLE_LINE1_POS: Point = Point::new(160, 175);
const SUBTITLE_LINE2_POS: Point = Point::new(160, 195);

const FOOTER_BAND: Rectangle = Rectangle::new(Point::new(0, 280), Size::new(320, 40));
const VERSION_POS: Point = Point::new(20, 290);
const SPINNER_POS: Point = Point::new(270, 290);

/// Draw the whole boot screen for `elapsed_ms` since boot started.
pub fn draw_boot_screen<D>(
    display: &mut D,
    elapsed_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();

    Text::with_text_style("DON'T PANIC", BANNER_SHADOW_POS, BANNER_SHADOW_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("DON'T PANIC", BANNER_POS, BANNER_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("The Hitchhiker's Guide", SUBTITLE_LINE1_POS, SUBTITLE_STYLE, CENTERED)
        .draw(display)
        .ok();
    Text::with_text_style("to the Galaxy", SUBTITLE_LINE2_POS, SUBTITLE_STYLE, CENTERED)
        .draw(display)
        .ok();

    draw_boot_footer(display, elapsed_ms);
}

/// Redraw only the footer band: gradient, version line and spinner.
pub fn draw_boot_footer<D>(
    display: &mut D,
    elapsed_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gradient_rect(display, FOOTER_BAND, HGTTG_DARK, BLACK, Gradient::Horizontal);
    draw_outlined_text(display, VERSION_POS, VERSION_LINE, HGTTG_BRIGHT, BLACK, 1);
    draw_spinner(display, SPINNER_POS, spinner_frame(elapsed_ms));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FrameBuffer;

    #[test]
    fn test_boot_screen_draws_banner_and_footer() {
        let mut fb = FrameBuffer::new();
        draw_boot_screen(&mut fb, 0);
        assert!(fb.region_contains(Rectangle::new(Point::new(60, 100), Size::new(200, 40)), HGTTG_BRIGHT));
        assert_eq!(fb.pixel(0, 300), Some(HGTTG_DARK));
    }

    #[test]
    fn test_spinner_animates_between_frames() {
        let mut first = FrameBuffer::new();
        let mut second = FrameBuffer::new();
        draw_boot_footer(&mut first, 0);
        draw_boot_footer(&mut second, 100);
        assert!(first != second);
        let mut again = FrameBuffer::new();
        draw_boot_footer(&mut again, 99);
        assert!(first == again, "same frame within one spinner period");
    }
}
