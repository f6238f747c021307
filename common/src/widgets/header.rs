//! Title bars and footer hint bars.
//!
//! - Menu header: 60px gradient with the two-line Guide title
//! - Article header: 50px gradient, outlined title and an amber category badge
//! - Footer: rounded amber bar with a key hint

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::primitives::{Gradient, draw_gradient_rect, draw_rounded_rect};
use super::text::{draw_outlined_text, draw_text};
use crate::colors::{AMBER_BRIGHT, AMBER_DARK, AMBER_MEDIUM, BLACK, HGTTG_BRIGHT, HGTTG_DARK, HGTTG_MEDIUM, YELLOW_BRIGHT};
use crate::config::{SCREEN_WIDTH, TEXT_ADVANCE};

const MENU_HEADER_SIZE: Size = Size::new(SCREEN_WIDTH, 60);
const MENU_TITLE_POS: Point = Point::new(10, 10);
const MENU_SUBTITLE_POS: Point = Point::new(10, 35);

const ARTICLE_HEADER_SIZE: Size = Size::new(SCREEN_WIDTH, 50);
const ARTICLE_TITLE_POS: Point = Point::new(10, 10);

const BADGE_Y: i32 = 15;
const BADGE_HEIGHT: u32 = 20;
const BADGE_PADDING: u32 = 10;
const BADGE_MARGIN: u32 = 10;

/// Footer bar top edge.
pub const FOOTER_Y: i32 = 280;
const FOOTER_HEIGHT: u32 = 25;
const FOOTER_X: i32 = 10;

/// Draw the main menu header.
pub fn draw_menu_header<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gradient_rect(
        display,
        Rectangle::new(Point::zero(), MENU_HEADER_SIZE),
        HGTTG_DARK,
        HGTTG_MEDIUM,
        Gradient::Horizontal,
    );
    draw_outlined_text(display, MENU_TITLE_POS, "THE HITCHHIKER'S GUIDE", HGTTG_BRIGHT, BLACK, 2);
    draw_outlined_text(display, MENU_SUBTITLE_POS, "TO THE GALAXY", AMBER_BRIGHT, BLACK, 1);
}

/// Draw the header used by the Browse, Search and Article screens.
pub fn draw_article_header<D>(
    display: &mut D,
    title: &str,
    category: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_gradient_rect(
        display,
        Rectangle::new(Point::zero(), ARTICLE_HEADER_SIZE),
        HGTTG_DARK,
        HGTTG_MEDIUM,
        Gradient::Horizontal,
    );
    draw_outlined_text(display, ARTICLE_TITLE_POS, title, HGTTG_BRIGHT, BLACK, 2);

    let badge_width = category.chars().count() as u32 * TEXT_ADVANCE + BADGE_PADDING;
    let badge_x = SCREEN_WIDTH.saturating_sub(badge_width + BADGE_MARGIN) as i32;
    draw_rounded_rect(
        display,
        Rectangle::new(Point::new(badge_x, BADGE_Y), Size::new(badge_width, BADGE_HEIGHT)),
        BADGE_HEIGHT / 2,
        AMBER_MEDIUM,
    );
    draw_text(display, Point::new(badge_x + 5, BADGE_Y + 5), category, BLACK);
}

/// Draw a rounded footer bar `width` pixels wide with a key hint.
pub fn draw_footer<D>(
    display: &mut D,
    width: u32,
    hint: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_rounded_rect(
        display,
        Rectangle::new(Point::new(FOOTER_X, FOOTER_Y), Size::new(width, FOOTER_HEIGHT)),
        5,
        AMBER_DARK,
    );
    draw_text(display, Point::new(FOOTER_X + 5, FOOTER_Y + 8), hint, YELLOW_BRIGHT);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FrameBuffer;

    #[test]
    fn test_article_header_badge_is_right_aligned() {
        let mut fb = FrameBuffer::new();
        draw_article_header(&mut fb, "Towel", "Essential Items");
        // 15 chars: badge 100px wide ending 10px from the right edge
        assert!(fb.region_contains(Rectangle::new(Point::new(290, 20), Size::new(10, 10)), AMBER_MEDIUM));
        assert!(!fb.region_contains(Rectangle::new(Point::new(311, 15), Size::new(9, 20)), AMBER_MEDIUM));
        assert!(fb.region_contains(Rectangle::new(Point::new(10, 10), Size::new(60, 14)), HGTTG_BRIGHT));
    }

    #[test]
    fn test_long_category_badge_stays_on_screen() {
        let mut fb = FrameBuffer::new();
        draw_article_header(&mut fb, "X", "An Extremely Long Category Name That Overflows Everything");
        // Badge is pinned to the left edge and clipped on the right
        assert_eq!(fb.pixel(160, 33), Some(AMBER_MEDIUM));
    }

    #[test]
    fn test_footer_draws_hint() {
        let mut fb = FrameBuffer::new();
        draw_footer(&mut fb, 200, "Press number key to select");
        assert!(fb.count(AMBER_DARK) > 0);
        assert!(fb.region_contains(Rectangle::new(Point::new(15, 288), Size::new(150, 7)), YELLOW_BRIGHT));
    }
}
