//! About overlay, shown over the menu for a few seconds.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{ABOUT_BACKGROUND, AMBER, CYAN_MEDIUM, GRAY, HGTTG_BRIGHT};
use crate::config::{PARAGRAPH_ADVANCE, PARAGRAPH_LINE_HEIGHT, SCREEN_WIDTH};
use crate::layout::{LayoutMetrics, WrapMode};
use crate::widgets::{draw_lines, draw_text};

const BLURB: &str = "The Guide has already supplanted the great Encyclopaedia Galactica as the standard repository of all knowledge and wisdom.\nIt is slightly cheaper, and it has the words DON'T PANIC inscribed in large friendly letters on its cover.";
const BLURB_POS: Point = Point::new(10, 160);
const BLURB_METRICS: LayoutMetrics = LayoutMetrics::new(SCREEN_WIDTH - 20, PARAGRAPH_ADVANCE, PARAGRAPH_LINE_HEIGHT);
const BLURB_MAX_LINES: usize = 12;

pub fn draw_about_screen<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(ABOUT_BACKGROUND).ok();
    draw_text(display, Point::new(10, 50), "Hitchhiker's Guide", HGTTG_BRIGHT);
    draw_text(display, Point::new(10, 70), "PicoCalc Edition", AMBER);
    draw_text(display, Point::new(10, 100), "v42.0", GRAY);
    draw_text(display, Point::new(10, 130), "DON'T PANIC!", HGTTG_BRIGHT);
    draw_lines(display, BLURB, WrapMode::Word, BLURB_METRICS, BLURB_POS, 0, BLURB_MAX_LINES, CYAN_MEDIUM);
}
