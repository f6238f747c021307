//! Main menu.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::colors::{BLACK, HGTTG_BRIGHT, HGTTG_DARK};
use crate::widgets::{draw_footer, draw_menu_header, draw_menu_item, draw_outlined_text};

/// Menu entries in key order: key `'1'` selects the first.
pub const MENU_ITEMS: [&str; 4] = ["Browse Articles", "Search Articles", "Random Article", "About"];

const FIRST_ITEM_POS: Point = Point::new(20, 80);
const ITEM_PITCH: i32 = 30;
const FOOTER_WIDTH: u32 = 200;
const REMINDER_TOP_POS: Point = Point::new(230, 250);
const REMINDER_BOTTOM_POS: Point = Point::new(230, 275);

pub fn draw_menu_screen<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_menu_header(display);

    for (i, label) in MENU_ITEMS.iter().enumerate() {
        let origin = FIRST_ITEM_POS + Point::new(0, i as i32 * ITEM_PITCH);
        draw_menu_item(display, origin, i as u8 + 1, label, false);
    }

    draw_footer(display, FOOTER_WIDTH, "Press number key to select");
    draw_outlined_text(display, REMINDER_TOP_POS, "DON'T", HGTTG_BRIGHT, HGTTG_DARK, 2);
    draw_outlined_text(display, REMINDER_BOTTOM_POS, "PANIC", HGTTG_BRIGHT, HGTTG_DARK, 2);
}
