//! Display geometry, layout metrics, bounds and timings.
//!
//! Everything here is a compile-time constant so the same values drive the
//! state machine (bounds, list sizes) and the presentation layer (pixel
//! positions). Platform-specific items such as pins and bus speeds live in the
//! firmware crate.

use crate::layout::LayoutMetrics;

// =============================================================================
// Display
// =============================================================================

/// Panel width in pixels.
pub const SCREEN_WIDTH: u32 = 320;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

// =============================================================================
// Text Metrics
// =============================================================================

/// Horizontal advance of regular 5x7 text (glyph + 1px gap).
pub const TEXT_ADVANCE: u32 = 6;

/// Line pitch of regular 5x7 text.
pub const TEXT_LINE_HEIGHT: u32 = 10;

/// Left edge of the teleprinter body text.
pub const ARTICLE_TEXT_X: i32 = 10;

/// Top edge of the teleprinter body text (just below the diagram panel).
pub const ARTICLE_TEXT_Y: i32 = 150;

/// Usable width of the teleprinter body: right margin of 5px.
pub const ARTICLE_TEXT_WIDTH: u32 = SCREEN_WIDTH - ARTICLE_TEXT_X as u32 - 5;

/// Teleprinter character advance.
pub const ARTICLE_ADVANCE: u32 = 7;

/// Teleprinter line pitch.
pub const ARTICLE_LINE_HEIGHT: u32 = 12;

/// Body text rows visible below the diagram panel.
pub const ARTICLE_VISIBLE_LINES: usize = 12;

/// Metrics used to lay out article bodies in character-wrap mode.
pub const ARTICLE_METRICS: LayoutMetrics = LayoutMetrics::new(ARTICLE_TEXT_WIDTH, ARTICLE_ADVANCE, ARTICLE_LINE_HEIGHT);

/// Paragraph (word-wrap) advance, one 8px cell per character.
pub const PARAGRAPH_ADVANCE: u32 = 8;

/// Paragraph line pitch.
pub const PARAGRAPH_LINE_HEIGHT: u32 = 10;

/// Longest word the word-wrap scanner buffers before forcing a break.
pub const WORD_BUFFER_CHARS: usize = 64;

// =============================================================================
// Lists
// =============================================================================

/// Rows shown at once in the Browse list.
pub const BROWSE_VISIBLE_ROWS: usize = 9;

/// Rows shown at once in the Search result list.
pub const SEARCH_VISIBLE_ROWS: usize = 7;

/// How far down the result list the search cursor may travel.
pub const SEARCH_SELECTABLE: usize = 8;

/// Pitch between list rows (Browse and Search).
pub const LIST_ROW_HEIGHT: i32 = 25;

/// Height of the scroll indicator track.
pub const SCROLL_TRACK_HEIGHT: u32 = 100;

/// Width of the scroll indicator track.
pub const SCROLL_TRACK_WIDTH: u32 = 8;

/// Smallest thumb drawn inside the scroll track.
pub const MIN_THUMB_PX: u32 = 4;

// =============================================================================
// Search Bounds
// =============================================================================

/// Maximum characters in a search query.
pub const QUERY_MAX_LEN: usize = 30;

/// Maximum number of search results kept (scanning stops once reached).
pub const SEARCH_RESULT_CAP: usize = 20;

// =============================================================================
// Timings
// =============================================================================

/// How long the boot screen stays up before the menu appears.
pub const BOOT_SCREEN_MS: u64 = 5000;

/// How long the About overlay stays up.
pub const ABOUT_SCREEN_MS: u64 = 3000;

/// Keyboard polling period of the main loop.
pub const POLL_INTERVAL_MS: u64 = 50;

/// Frame period of the boot spinner.
pub const SPINNER_FRAME_MS: u64 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teleprinter_line_holds_43_characters() {
        let per_line = ARTICLE_TEXT_WIDTH / ARTICLE_ADVANCE;
        assert_eq!(ARTICLE_TEXT_WIDTH, 305);
        assert_eq!(per_line, 43);
    }

    #[test]
    fn test_article_window_fits_on_screen() {
        let bottom = ARTICLE_TEXT_Y as u32 + ARTICLE_VISIBLE_LINES as u32 * ARTICLE_LINE_HEIGHT;
        assert!(bottom < SCREEN_HEIGHT, "body window must end above the footer");
    }

    #[test]
    fn test_search_selection_covers_visible_rows() {
        assert!(SEARCH_SELECTABLE >= SEARCH_VISIBLE_ROWS);
        assert!(SEARCH_SELECTABLE <= SEARCH_RESULT_CAP);
    }
}
