//! Low-level drawing primitives shared across widgets.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, RoundedRectangle};
use heapless::String;

use super::text::{draw_text, draw_text_scaled};
use crate::animations::{SPINNER_DOTS, highlighted_dot, lerp_rgb565, orbit_point, spinner_char};
use crate::colors::{BLACK, GRAY, HGTTG_BRIGHT, HGTTG_DARK, HGTTG_MEDIUM};
use crate::config::{SCROLL_TRACK_HEIGHT, SCROLL_TRACK_WIDTH};
use crate::viewport::ViewportState;

/// Menu item box size.
const MENU_ITEM_SIZE: Size = Size::new(200, 25);
const MENU_ITEM_RADIUS: u32 = 8;

/// Gradient direction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Gradient {
    /// Colour changes from left to right.
    Horizontal,
    /// Colour changes from top to bottom.
    Vertical,
}

/// Fill a rectangle with rounded corners.
pub fn draw_rounded_rect<D>(
    display: &mut D,
    area: Rectangle,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Fill a rectangle with a two-colour linear gradient.
pub fn draw_gradient_rect<D>(
    display: &mut D,
    area: Rectangle,
    from: Rgb565,
    to: Rgb565,
    direction: Gradient,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Size { width, height } = area.size;
    let steps = match direction {
        Gradient::Horizontal => width,
        Gradient::Vertical => height,
    };
    for i in 0..steps {
        let color = lerp_rgb565(from, to, i, steps);
        let strip = match direction {
            Gradient::Horizontal => Rectangle::new(area.top_left + Point::new(i as i32, 0), Size::new(1, height)),
            Gradient::Vertical => Rectangle::new(area.top_left + Point::new(0, i as i32), Size::new(width, 1)),
        };
        display.fill_solid(&strip, color).ok();
    }
}

/// Draw a 1px rectangle outline.
pub fn draw_outline_rect<D>(
    display: &mut D,
    area: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    area.into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Fill a rectangle.
pub fn fill_rect<D>(
    display: &mut D,
    area: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.fill_solid(&area, color).ok();
}

/// Fill a circle of `radius` pixels around `center`.
pub fn fill_circle<D>(
    display: &mut D,
    center: Point,
    radius: u32,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Circle::with_center(center, radius * 2 + 1)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw a 1px line.
pub fn draw_line<D>(
    display: &mut D,
    start: Point,
    end: Point,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Line::new(start, end)
        .into_styled(PrimitiveStyle::with_stroke(color, 1))
        .draw(display)
        .ok();
}

/// Draw the vertical scroll indicator with its track top-left at `origin`.
///
/// Nothing is drawn when all rows fit.
pub fn draw_scroll_indicator<D>(
    display: &mut D,
    origin: Point,
    viewport: &ViewportState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(thumb) = viewport.thumb(SCROLL_TRACK_HEIGHT) else {
        return;
    };
    draw_outline_rect(display, Rectangle::new(origin, Size::new(SCROLL_TRACK_WIDTH, SCROLL_TRACK_HEIGHT)), GRAY);
    fill_rect(
        display,
        Rectangle::new(
            origin + Point::new(1, thumb.offset_px as i32),
            Size::new(SCROLL_TRACK_WIDTH - 2, thumb.length_px),
        ),
        HGTTG_BRIGHT,
    );
}

/// Draw the loading spinner for `frame` with the spinner glyph at `origin`.
pub fn draw_spinner<D>(
    display: &mut D,
    origin: Point,
    frame: u32,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let mut glyph: String<4> = String::new();
    glyph.push(spinner_char(frame)).ok();
    draw_text_scaled(display, origin, &glyph, HGTTG_BRIGHT, 2);

    let center = origin + Point::new(20, 10);
    let lit = highlighted_dot(frame);
    for i in 0..SPINNER_DOTS {
        let color = if i == lit { HGTTG_BRIGHT } else { HGTTG_DARK };
        fill_circle(display, orbit_point(center, 15, 15, i, SPINNER_DOTS), 2, color);
    }
}

/// Draw a numbered menu entry in a rounded box.
pub fn draw_menu_item<D>(
    display: &mut D,
    origin: Point,
    number: u8,
    label: &str,
    selected: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let (background, foreground) = if selected {
        (HGTTG_MEDIUM, BLACK)
    } else {
        (HGTTG_DARK, HGTTG_BRIGHT)
    };
    draw_rounded_rect(display, Rectangle::new(origin, MENU_ITEM_SIZE), MENU_ITEM_RADIUS, background);

    let mut number_str: String<4> = String::new();
    let _ = write!(number_str, "{number}.");
    draw_text(display, origin + Point::new(10, 8), &number_str, foreground);
    draw_text(display, origin + Point::new(25, 8), label, foreground);
}
