//! Article illustrations for the 300x100 diagram panel.
//!
//! Every [`DiagramKind`] has one drawing function; coordinates are relative to
//! the panel's inner origin. Articles without a bespoke illustration get the
//! generic "GUIDE ENTRY" panel.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::primitives::{Gradient, draw_gradient_rect, draw_line, draw_outline_rect, draw_rounded_rect, fill_circle, fill_rect};
use super::text::{draw_lines, draw_outlined_text, draw_text, draw_text_scaled};
use crate::animations::{orbit_point, wave_offset};
use crate::article::DiagramKind;
use crate::colors::{
    AMBER_BRIGHT,
    AMBER_DARK,
    AMBER_MEDIUM,
    BLACK,
    BLUE_BRIGHT,
    CYAN_BRIGHT,
    CYAN_MEDIUM,
    GRAY,
    HGTTG_BRIGHT,
    HGTTG_DARK,
    HGTTG_MEDIUM,
    MAGENTA_BRIGHT,
    ORANGE_BRIGHT,
    PURPLE_MEDIUM,
    RED_BRIGHT,
    YELLOW_BRIGHT,
};
use crate::config::{TEXT_ADVANCE, TEXT_LINE_HEIGHT};
use crate::layout::{LayoutMetrics, WrapMode};

const GENERIC_BLURB: &str = "No specific diagram available.\nContent follows below.";
const GENERIC_BLURB_METRICS: LayoutMetrics = LayoutMetrics::new(200, TEXT_ADVANCE, TEXT_LINE_HEIGHT);

/// Draw the illustration for `kind` with its top-left corner at `origin`.
pub fn draw_diagram<D>(
    display: &mut D,
    kind: DiagramKind,
    origin: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match kind {
        DiagramKind::BabelFish => draw_babel_fish(display, origin),
        DiagramKind::Earth => draw_earth(display, origin),
        DiagramKind::Towel => draw_towel(display, origin),
        DiagramKind::Vogons => draw_vogons(display, origin),
        DiagramKind::HeartOfGold => draw_heart_of_gold(display, origin),
        DiagramKind::Zaphod => draw_zaphod(display, origin),
        DiagramKind::Marvin => draw_marvin(display, origin),
        DiagramKind::TheAnswer => draw_the_answer(display, origin),
        DiagramKind::DontPanic => draw_dont_panic(display, origin),
        DiagramKind::PanGalactic => draw_pan_galactic(display, origin),
        DiagramKind::Generic => draw_generic(display, origin),
    }
}

#[inline]
fn rect(
    origin: Point,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
) -> Rectangle {
    Rectangle::new(origin + Point::new(x, y), Size::new(w, h))
}

#[inline]
fn at(
    origin: Point,
    x: i32,
    y: i32,
) -> Point {
    origin + Point::new(x, y)
}

fn draw_babel_fish<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Body, head, eye
    draw_gradient_rect(display, rect(o, 20, 30, 80, 25), YELLOW_BRIGHT, AMBER_BRIGHT, Gradient::Vertical);
    fill_circle(display, at(o, 15, 42), 8, YELLOW_BRIGHT);
    fill_circle(display, at(o, 12, 40), 3, BLACK);
    display.draw_iter([Pixel(at(o, 11, 39), CYAN_BRIGHT)]).ok();

    // Tail fins
    for i in 0..4 {
        draw_line(display, at(o, 100, 25 + i * 10), at(o, 115, 15 + i * 10), ORANGE_BRIGHT);
    }

    // Brain waves
    for i in 0..5 {
        let wave_y = 10 + i * 3;
        let pixels = (0..40).map(|wx| {
            let dy = wave_offset((wx + i * 10) as f32 * 0.3, 4.0);
            Pixel(at(o, 130 + wx, wave_y + dy), CYAN_BRIGHT)
        });
        display.draw_iter(pixels).ok();
    }

    draw_text(display, at(o, 130, 5), "TELEPATHIC", CYAN_MEDIUM);
    draw_text(display, at(o, 130, 15), "MATRIX", CYAN_MEDIUM);
    draw_text(display, at(o, 5, 65), "UNIVERSAL", AMBER_MEDIUM);
    draw_text(display, at(o, 5, 75), "TRANSLATOR", AMBER_MEDIUM);

    // Arrow towards the matrix
    draw_line(display, at(o, 120, 42), at(o, 140, 32), RED_BRIGHT);
    draw_line(display, at(o, 140, 32), at(o, 135, 35), RED_BRIGHT);
    draw_line(display, at(o, 140, 32), at(o, 137, 37), RED_BRIGHT);
}

fn draw_earth<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let center = at(o, 60, 40);
    fill_circle(display, center, 25, BLUE_BRIGHT);
    fill_circle(display, at(o, 55, 35), 8, HGTTG_MEDIUM);
    fill_circle(display, at(o, 65, 45), 6, HGTTG_MEDIUM);
    fill_circle(display, at(o, 50, 50), 4, HGTTG_MEDIUM);

    // Demolition blast
    for i in 0..8 {
        let end = orbit_point(center, 35, 35, i, 8);
        draw_line(display, center, end, RED_BRIGHT);
        fill_circle(display, end, 3, ORANGE_BRIGHT);
    }

    draw_rounded_rect(display, rect(o, 130, 20, 80, 25), 5, RED_BRIGHT);
    draw_text_scaled(display, at(o, 135, 27), "DEMOLISHED", YELLOW_BRIGHT, 1);

    draw_rounded_rect(display, rect(o, 20, 80, 120, 15), 3, YELLOW_BRIGHT);
    draw_text(display, at(o, 25, 85), "HYPERSPACE BYPASS", BLACK);

    draw_outline_rect(display, rect(o, 150, 50, 60, 40), CYAN_MEDIUM);
    draw_text(display, at(o, 155, 55), "ORGANIC\nCOMPUTER\nCORE", CYAN_BRIGHT);
}

fn draw_towel<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gradient_rect(display, rect(o, 30, 20, 100, 60), CYAN_MEDIUM, CYAN_BRIGHT, Gradient::Vertical);
    for ty in 0..6 {
        for tx in 0..10 {
            if (tx + ty) % 2 == 0 {
                fill_rect(display, rect(o, 30 + tx * 10, 20 + ty * 10, 5, 5), CYAN_BRIGHT);
            }
        }
    }

    let uses = [
        ("WARMTH", ORANGE_BRIGHT, 15, (130, 25), (115, 35)),
        ("BEACHES", YELLOW_BRIGHT, 35, (130, 45), (115, 50)),
        ("COMBAT", RED_BRIGHT, 55, (130, 65), (115, 65)),
    ];
    for (label, color, label_y, from, to) in uses {
        draw_text(display, at(o, 140, label_y), label, color);
        draw_line(display, at(o, from.0, from.1), at(o, to.0, to.1), color);
    }

    draw_text(display, at(o, 5, 90), "EMERGENCY SIGNAL", MAGENTA_BRIGHT);
    draw_line(display, at(o, 30, 80), at(o, 50, 85), MAGENTA_BRIGHT);

    draw_rounded_rect(display, rect(o, 150, 70, 80, 25), 5, PURPLE_MEDIUM);
    draw_text(display, at(o, 155, 77), "PSYCHOLOGICAL", YELLOW_BRIGHT);
    draw_text(display, at(o, 170, 87), "VALUE", YELLOW_BRIGHT);
}

fn draw_vogons<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Head
    fill_rect(display, rect(o, 40, 20, 40, 50), HGTTG_DARK);
    fill_circle(display, at(o, 50, 35), 3, RED_BRIGHT);
    fill_circle(display, at(o, 70, 35), 3, RED_BRIGHT);
    fill_rect(display, rect(o, 58, 45, 4, 10), HGTTG_MEDIUM);
    draw_line(display, at(o, 50, 60), at(o, 70, 60), RED_BRIGHT);

    // Paperwork
    for (i, form) in ["FORM 42B/7", "TRIPLICATE", "LOST & FOUND"].iter().enumerate() {
        let y = 15 + i as i32 * 25;
        draw_rounded_rect(display, rect(o, 90, y, 80, 20), 3, AMBER_DARK);
        draw_text(display, at(o, 95, y + 7), form, YELLOW_BRIGHT);
    }

    draw_rounded_rect(display, rect(o, 180, 15, 70, 30), 5, RED_BRIGHT);
    draw_text(display, at(o, 185, 22), "DANGER!\nVOGON\nPOETRY", YELLOW_BRIGHT);

    draw_outline_rect(display, rect(o, 20, 80, 100, 15), RED_BRIGHT);
    fill_rect(display, rect(o, 22, 82, 85, 11), RED_BRIGHT);
    draw_text(display, at(o, 25, 85), "UNPLEASANTNESS: MAX", YELLOW_BRIGHT);
}

fn draw_heart_of_gold<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_circle(display, at(o, 50, 30), 15, YELLOW_BRIGHT);
    fill_circle(display, at(o, 80, 30), 15, YELLOW_BRIGHT);
    fill_circle(display, at(o, 65, 50), 20, YELLOW_BRIGHT);

    // Improbability waves, each a little longer than the last
    let core = at(o, 65, 40);
    fill_circle(display, core, 8, CYAN_BRIGHT);
    for i in 0..6 {
        let length = 25 + i as i32 * 5;
        draw_line(display, core, orbit_point(core, length, length, i, 6), MAGENTA_BRIGHT);
    }

    draw_text(display, at(o, 120, 20), "INFINITE\nIMPROBABILITY\nDRIVE", CYAN_BRIGHT);

    draw_rounded_rect(display, rect(o, 20, 80, 120, 15), 3, PURPLE_MEDIUM);
    draw_text(display, at(o, 25, 85), "BAMBLEWEENY 57 SUB-MESON", YELLOW_BRIGHT);

    draw_text(display, at(o, 150, 60), "FACTOR:", AMBER_BRIGHT);
    draw_text(display, at(o, 150, 70), "2^276709:1\nAGAINST", RED_BRIGHT);
}

fn draw_zaphod<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    for head_x in [40, 70] {
        fill_circle(display, at(o, head_x, 25), 12, AMBER_MEDIUM);
        fill_circle(display, at(o, head_x - 2, 22), 2, BLACK);
        fill_circle(display, at(o, head_x + 2, 22), 2, BLACK);
        draw_line(display, at(o, head_x - 5, 30), at(o, head_x + 5, 30), RED_BRIGHT);
    }

    fill_rect(display, rect(o, 50, 40, 20, 30), PURPLE_MEDIUM);
    fill_rect(display, rect(o, 30, 45, 15, 5), AMBER_MEDIUM);
    fill_rect(display, rect(o, 50, 50, 15, 5), AMBER_MEDIUM);
    fill_rect(display, rect(o, 70, 45, 15, 5), AMBER_MEDIUM);

    draw_rounded_rect(display, rect(o, 100, 20, 70, 20), 5, CYAN_BRIGHT);
    draw_text(display, at(o, 105, 27), "EX-PRESIDENT", BLACK);

    draw_rounded_rect(display, rect(o, 100, 45, 50, 15), 3, ORANGE_BRIGHT);
    draw_text(display, at(o, 105, 50), "COOLNESS:", BLACK);

    for (i, width) in [40, 35, 45].into_iter().enumerate() {
        fill_rect(display, rect(o, 100, 65 + i as i32 * 7, width, 5), YELLOW_BRIGHT);
    }

    draw_text(display, at(o, 20, 85), "HOOPY FROOD", CYAN_BRIGHT);
}

fn draw_marvin<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    fill_circle(display, at(o, 60, 30), 18, GRAY);
    fill_circle(display, at(o, 55, 25), 3, RED_BRIGHT);
    fill_circle(display, at(o, 65, 25), 3, RED_BRIGHT);

    // Frown
    draw_line(display, at(o, 50, 40), at(o, 70, 40), RED_BRIGHT);
    draw_line(display, at(o, 50, 40), at(o, 55, 35), RED_BRIGHT);
    draw_line(display, at(o, 70, 40), at(o, 65, 35), RED_BRIGHT);

    fill_rect(display, rect(o, 50, 50, 20, 25), GRAY);

    draw_rounded_rect(display, rect(o, 90, 20, 80, 25), 5, BLUE_BRIGHT);
    draw_text(display, at(o, 95, 27), "DEPRESSION\nLEVEL: INF", BLACK);

    draw_rounded_rect(display, rect(o, 90, 50, 80, 15), 3, PURPLE_MEDIUM);
    draw_text(display, at(o, 95, 55), "BRAIN: PLANET-SIZE", YELLOW_BRIGHT);

    draw_text(display, at(o, 10, 50), "PAIN IN ALL\nDIODES DOWN\nLEFT SIDE", RED_BRIGHT);
    draw_text(display, at(o, 20, 85), "\"Life? Don't talk to me about life.\"", CYAN_MEDIUM);
}

fn draw_the_answer<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_outlined_text(display, at(o, 80, 25), "42", YELLOW_BRIGHT, PURPLE_MEDIUM, 4);

    draw_rounded_rect(display, rect(o, 20, 15, 40, 30), 5, CYAN_MEDIUM);
    draw_text(display, at(o, 25, 22), "DEEP\nTHOUGHT", BLACK);

    draw_text(display, at(o, 160, 20), "7.5 MILLION\nYEARS", AMBER_BRIGHT);

    // Unanswered questions circling the answer
    let center = at(o, 120, 50);
    for i in 0..8 {
        draw_text(display, orbit_point(center, 60, 30, i, 8), "?", RED_BRIGHT);
    }

    draw_rounded_rect(display, rect(o, 30, 75, 150, 20), 5, HGTTG_MEDIUM);
    draw_text(display, at(o, 35, 82), "ULTIMATE QUESTION: UNKNOWN", BLACK);

    draw_rounded_rect(display, rect(o, 200, 50, 60, 30), 8, MAGENTA_BRIGHT);
    draw_text(display, at(o, 205, 57), "MEANING:\nUNCLEAR", BLACK);
}

fn draw_dont_panic<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_outlined_text(display, at(o, 20, 20), "DON'T", HGTTG_BRIGHT, HGTTG_DARK, 3);
    draw_outlined_text(display, at(o, 20, 50), "PANIC", HGTTG_BRIGHT, HGTTG_DARK, 3);

    draw_rounded_rect(display, rect(o, 160, 15, 60, 40), 8, AMBER_BRIGHT);
    draw_text(display, at(o, 165, 22), "GUIDE\nTO THE\nGALAXY", BLACK);

    draw_text(display, at(o, 230, 25), "LARGE\nFRIENDLY\nLETTERS", CYAN_BRIGHT);

    draw_rounded_rect(display, rect(o, 40, 75, 100, 15), 5, CYAN_MEDIUM);
    draw_text(display, at(o, 45, 80), "ALWAYS KNOW WHERE YOUR TOWEL IS", BLACK);
}

fn draw_pan_galactic<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    // Glass and fizz
    draw_outline_rect(display, rect(o, 50, 30, 20, 30), CYAN_BRIGHT);
    fill_rect(display, rect(o, 52, 32, 16, 26), YELLOW_BRIGHT);
    for i in 0..8 {
        fill_circle(display, at(o, 55 + (i % 3) * 4, 35 + i * 3), 1, CYAN_BRIGHT);
    }

    // Lemon slice
    fill_circle(display, at(o, 60, 25), 4, YELLOW_BRIGHT);
    draw_line(display, at(o, 58, 25), at(o, 62, 25), ORANGE_BRIGHT);

    draw_rounded_rect(display, rect(o, 80, 40, 30, 15), 3, YELLOW_BRIGHT);
    draw_text(display, at(o, 85, 45), "GOLD", BLACK);
    draw_text(display, at(o, 85, 53), "BRICK", BLACK);

    let impact = at(o, 95, 47);
    for i in 0..6 {
        draw_line(display, impact, orbit_point(impact, 25, 15, i, 6), RED_BRIGHT);
    }

    draw_rounded_rect(display, rect(o, 120, 20, 80, 40), 5, RED_BRIGHT);
    draw_text(display, at(o, 125, 27), "DANGER!\nLIKE HAVING\nBRAINS SMASHED", YELLOW_BRIGHT);

    draw_text(display, at(o, 20, 70), "INGREDIENTS: OL' JANX SPIRIT +", AMBER_MEDIUM);
    draw_text(display, at(o, 20, 80), "SANTRAGINUS V WATER + MORE...", AMBER_MEDIUM);
}

fn draw_generic<D>(
    display: &mut D,
    o: Point,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gradient_rect(display, rect(o, 0, 0, 290, 90), PURPLE_MEDIUM, BLUE_BRIGHT, Gradient::Horizontal);
    draw_text_scaled(display, at(o, 35, 25), "GUIDE ENTRY", YELLOW_BRIGHT, 2);
    draw_lines(
        display,
        GENERIC_BLURB,
        WrapMode::Word,
        GENERIC_BLURB_METRICS,
        at(o, 65, 50),
        0,
        3,
        CYAN_BRIGHT,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FrameBuffer;

    const ALL: [DiagramKind; 11] = [
        DiagramKind::BabelFish,
        DiagramKind::Earth,
        DiagramKind::Towel,
        DiagramKind::Vogons,
        DiagramKind::HeartOfGold,
        DiagramKind::Zaphod,
        DiagramKind::Marvin,
        DiagramKind::TheAnswer,
        DiagramKind::DontPanic,
        DiagramKind::PanGalactic,
        DiagramKind::Generic,
    ];

    #[test]
    fn test_every_diagram_draws_something() {
        for kind in ALL {
            let mut fb = FrameBuffer::new();
            draw_diagram(&mut fb, kind, Point::new(15, 60));
            assert!(fb.lit() > 200, "{kind:?} drew only {} pixels", fb.lit());
        }
    }

    #[test]
    fn test_diagrams_are_distinct() {
        let mut frames: std::vec::Vec<FrameBuffer> = std::vec::Vec::new();
        for kind in ALL {
            let mut fb = FrameBuffer::new();
            draw_diagram(&mut fb, kind, Point::new(15, 60));
            assert!(!frames.contains(&fb), "{kind:?} duplicates another diagram");
            frames.push(fb);
        }
    }

    #[test]
    fn test_earth_is_blue_with_red_stamp() {
        let mut fb = FrameBuffer::new();
        draw_diagram(&mut fb, DiagramKind::Earth, Point::new(15, 60));
        assert!(fb.region_contains(Rectangle::new(Point::new(60, 85), Size::new(30, 30)), BLUE_BRIGHT));
        assert!(fb.region_contains(Rectangle::new(Point::new(145, 80), Size::new(80, 25)), RED_BRIGHT));
    }

    #[test]
    fn test_generic_panel_fills_gradient() {
        let mut fb = FrameBuffer::new();
        draw_diagram(&mut fb, DiagramKind::Generic, Point::new(15, 60));
        assert_eq!(fb.pixel(15, 60), Some(PURPLE_MEDIUM));
        assert!(fb.count(YELLOW_BRIGHT) > 0);
        assert!(fb.count(CYAN_BRIGHT) > 0);
    }
}
