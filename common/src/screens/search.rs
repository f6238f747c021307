//! Search screen: query box, match count and the result list.

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use heapless::String;

use super::draw_article_row;
use crate::article::Article;
use crate::colors::{AMBER_DARK, BLACK, HGTTG_BRIGHT, HGTTG_DARK, RED_BRIGHT, YELLOW_BRIGHT};
use crate::config::LIST_ROW_HEIGHT;
use crate::search::SearchState;
use crate::viewport::ViewportState;
use crate::widgets::{draw_article_header, draw_footer, draw_outline_rect, draw_rounded_rect, draw_scroll_indicator, draw_text, draw_text_scaled};

const QUERY_BOX: Rectangle = Rectangle::new(Point::new(10, 60), Size::new(280, 25));
const QUERY_TEXT_POS: Point = Point::new(15, 67);
const COUNT_BADGE: Rectangle = Rectangle::new(Point::new(10, 90), Size::new(150, 18));
const COUNT_TEXT_POS: Point = Point::new(15, 95);
const RESULTS_TOP: i32 = 115;
const NO_MATCHES_POS: Point = Point::new(15, 125);
const SCROLL_INDICATOR_POS: Point = Point::new(300, 115);
const FOOTER_WIDTH: u32 = 280;

pub fn draw_search_screen<D>(
    display: &mut D,
    corpus: &[Article],
    search: &SearchState,
    viewport: &ViewportState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_article_header(display, "SEARCH ENGINE", "Query");

    draw_rounded_rect(display, QUERY_BOX, 5, HGTTG_DARK);
    draw_outline_rect(display, QUERY_BOX, HGTTG_BRIGHT);
    let mut prompt: String<40> = String::new();
    let _ = write!(prompt, "> {}_", search.query());
    draw_text_scaled(display, QUERY_TEXT_POS, &prompt, HGTTG_BRIGHT, 1);

    let results = search.results();
    draw_rounded_rect(display, COUNT_BADGE, 3, AMBER_DARK);
    let mut count: String<24> = String::new();
    let _ = write!(count, "Found: {} articles", results.len());
    draw_text(display, COUNT_TEXT_POS, &count, YELLOW_BRIGHT);

    if results.is_empty() && !search.query().is_empty() {
        draw_text(display, NO_MATCHES_POS, "No matches", RED_BRIGHT);
    }

    let range = viewport.visible_range();
    let first = range.start;
    for row in range {
        let Some(article) = results.get(row).and_then(|&index| corpus.get(index)) else {
            break;
        };
        let y = RESULTS_TOP + (row - first) as i32 * LIST_ROW_HEIGHT;
        draw_article_row(display, y, article, row == search.cursor());
    }

    draw_scroll_indicator(display, SCROLL_INDICATOR_POS, viewport);
    draw_footer(display, FOOTER_WIDTH, "Type/Del/Enter Select  ESC Back");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{GRAY, HGTTG_MEDIUM};
    use crate::config::SEARCH_VISIBLE_ROWS;
    use crate::corpus::ARTICLES;
    use crate::testing::FrameBuffer;

    fn render(search: &SearchState) -> FrameBuffer {
        let viewport = ViewportState::new(search.results().len(), SEARCH_VISIBLE_ROWS, 0);
        let mut fb = FrameBuffer::new();
        draw_search_screen(&mut fb, &ARTICLES, search, &viewport);
        fb
    }

    #[test]
    fn test_empty_query_lists_whole_corpus() {
        let search = SearchState::new(&ARTICLES);
        let fb = render(&search);
        // First result highlighted; more than seven results so the track shows
        assert!(fb.region_contains(Rectangle::new(Point::new(12, 115), Size::new(5, 15)), HGTTG_MEDIUM));
        assert!(fb.count(GRAY) > 0);
        assert_eq!(fb.count(RED_BRIGHT), 0);
    }

    #[test]
    fn test_no_matches_message() {
        let mut search = SearchState::new(&ARTICLES);
        for c in "zzqx".chars() {
            search.push_char(c, &ARTICLES);
        }
        assert!(search.results().is_empty());
        let fb = render(&search);
        assert!(fb.count(RED_BRIGHT) > 0);
        let list = Rectangle::new(Point::new(10, 113), Size::new(280, 160));
        assert!(!fb.region_contains(list, HGTTG_MEDIUM), "no selection highlight");
    }
}
