//! Article browser: the whole corpus as a scrollable list.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use super::draw_article_row;
use crate::article::Article;
use crate::colors::BLACK;
use crate::config::LIST_ROW_HEIGHT;
use crate::viewport::ViewportState;
use crate::widgets::{draw_article_header, draw_footer, draw_scroll_indicator};

const LIST_TOP: i32 = 60;
const SCROLL_INDICATOR_POS: Point = Point::new(300, 60);
const FOOTER_WIDTH: u32 = 280;

pub fn draw_browse_screen<D>(
    display: &mut D,
    corpus: &[Article],
    selected: usize,
    viewport: &ViewportState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_article_header(display, "ARTICLE BROWSER", "Library");

    let range = viewport.visible_range();
    let first = range.start;
    for index in range {
        let Some(article) = corpus.get(index) else {
            break;
        };
        let y = LIST_TOP + (index - first) as i32 * LIST_ROW_HEIGHT;
        draw_article_row(display, y, article, index == selected);
    }

    draw_scroll_indicator(display, SCROLL_INDICATOR_POS, viewport);
    draw_footer(display, FOOTER_WIDTH, "UP/DN Navigate  ENTER Select  ESC Back");
}
