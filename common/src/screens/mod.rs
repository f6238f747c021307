//! Full-screen renderers, one per screen.
//!
//! Each `draw_*_screen` function paints the whole 320x320 frame from scratch.
//! The caller decides when to call them (see [`crate::render`]).

mod about;
mod article;
mod boot;
mod browse;
mod menu;
mod search;

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

pub use about::draw_about_screen;
pub use article::draw_article_screen;
pub use boot::{VERSION_LINE, draw_boot_footer, draw_boot_screen};
pub use browse::draw_browse_screen;
pub use menu::{MENU_ITEMS, draw_menu_screen};
pub use search::draw_search_screen;

use crate::article::Article;
use crate::colors::{AMBER_MEDIUM, BLACK, HGTTG_BRIGHT, HGTTG_MEDIUM};
use crate::widgets::{draw_rounded_rect, draw_text, draw_text_scaled};

const ROW_HIGHLIGHT_SIZE: Size = Size::new(280, 22);
const CATEGORY_X: i32 = 200;

/// Draw one article row of the Browse or Search list with its top edge at `y`.
fn draw_article_row<D>(
    display: &mut D,
    y: i32,
    article: &Article,
    selected: bool,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let text_color = if selected {
        draw_rounded_rect(
            display,
            Rectangle::new(Point::new(10, y - 2), ROW_HIGHLIGHT_SIZE),
            5,
            HGTTG_MEDIUM,
        );
        BLACK
    } else {
        HGTTG_BRIGHT
    };

    let mut label: String<48> = String::new();
    let marker = if selected { '>' } else { ' ' };
    let _ = write!(label, "{marker} {}", article.title);
    draw_text_scaled(display, Point::new(15, y + 2), &label, text_color, 1);
    draw_text(display, Point::new(CATEGORY_X, y + 5), article.category, AMBER_MEDIUM);
}
