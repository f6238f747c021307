//! Widget components for the Guide display.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` for platform independence.

mod diagrams;
mod header;
mod primitives;
mod text;

pub use diagrams::draw_diagram;
pub use header::{FOOTER_Y, draw_article_header, draw_footer, draw_menu_header};
pub use primitives::{
    Gradient,
    draw_gradient_rect,
    draw_line,
    draw_menu_item,
    draw_outline_rect,
    draw_rounded_rect,
    draw_scroll_indicator,
    draw_spinner,
    fill_circle,
    fill_rect,
};
pub use text::{draw_char, draw_lines, draw_outlined_text, draw_row, draw_text, draw_text_scaled, text_width};
