//! Article reader: header, diagram panel and the teleprinter-style body.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::article::Article;
use crate::colors::{BLACK, BODY_BLUE, CYAN_MEDIUM, LABEL_GREEN};
use crate::config::{ARTICLE_METRICS, ARTICLE_TEXT_X, ARTICLE_TEXT_Y};
use crate::layout::{LayoutLine, WrapMode};
use crate::viewport::ViewportState;
use crate::widgets::{draw_article_header, draw_diagram, draw_outline_rect, draw_rounded_rect, draw_row, draw_scroll_indicator, draw_text};

const DIAGRAM_PANEL: Rectangle = Rectangle::new(Point::new(10, 55), Size::new(300, 100));
const DIAGRAM_POS: Point = Point::new(15, 60);
const SCROLL_INDICATOR_POS: Point = Point::new(311, 160);
const HINT_POS: Point = Point::new(10, 300);

/// Draw `article` with the body rows in `lines` (already windowed by `viewport`).
pub fn draw_article_screen<D>(
    display: &mut D,
    article: &Article,
    viewport: &ViewportState,
    lines: &[LayoutLine],
) where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BLACK).ok();
    draw_article_header(display, article.title, article.category);

    draw_rounded_rect(display, DIAGRAM_PANEL, 8, BLACK);
    draw_outline_rect(display, DIAGRAM_PANEL, CYAN_MEDIUM);
    draw_diagram(display, article.diagram, DIAGRAM_POS);

    for (row, line) in lines.iter().enumerate() {
        let origin = Point::new(ARTICLE_TEXT_X, ARTICLE_TEXT_Y + ARTICLE_METRICS.row_offset(row));
        draw_row(display, line.text(article.body), WrapMode::Char, ARTICLE_METRICS, origin, BODY_BLUE);
    }

    draw_scroll_indicator(display, SCROLL_INDICATOR_POS, viewport);
    draw_text(display, HINT_POS, "UP/DOWN Scroll  ESC Back", LABEL_GREEN);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::GRAY;
    use crate::config::ARTICLE_VISIBLE_LINES;
    use crate::corpus::ARTICLES;
    use crate::layout::window;
    use crate::testing::FrameBuffer;

    fn render(
        article: &Article,
        offset: usize,
    ) -> FrameBuffer {
        let (lines, total) = window::<ARTICLE_VISIBLE_LINES>(article.body, WrapMode::Char, ARTICLE_METRICS, offset);
        let mut fb = FrameBuffer::new();
        draw_article_screen(&mut fb, article, &ViewportState::new(total, ARTICLE_VISIBLE_LINES, offset as isize), &lines);
        fb
    }

    #[test]
    fn test_article_body_and_chrome() {
        let fb = render(&ARTICLES[0], 0);
        assert!(fb.count(BODY_BLUE) > 0);
        assert!(fb.count(CYAN_MEDIUM) > 0);
        assert!(fb.count(LABEL_GREEN) > 0);
    }

    #[test]
    fn test_scrolling_changes_body() {
        let article = ARTICLES
            .iter()
            .find(|a| crate::layout::line_count(a.body, WrapMode::Char, ARTICLE_METRICS) > ARTICLE_VISIBLE_LINES)
            .expect("corpus has a long article");
        let top = render(article, 0);
        let scrolled = render(article, 1);
        assert!(top != scrolled);
        assert!(top.count(GRAY) > 0, "long article shows a scroll track");
    }

    #[test]
    fn test_empty_body_draws_no_text() {
        let article = Article::new("Empty", "Test", crate::article::DiagramKind::Generic, "");
        let fb = render(&article, 0);
        assert!(!fb.region_contains(Rectangle::new(Point::new(10, 160), Size::new(300, 120)), BODY_BLUE));
    }
}
