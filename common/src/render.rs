//! Render state tracking and screen dispatch.
//!
//! This module provides:
//! - [`Redraw`] - How much of the frame must be repainted
//! - [`RenderState`] - Tracks state changes and animation frames between loop iterations
//! - [`render_screen`] - Paints the whole frame for a [`RenderHints`] snapshot
//! - [`render_frame`] - Combines the two: repaints only what changed
//!
//! # Update Strategy
//!
//! | Element | Update Frequency | Strategy |
//! |---------|-----------------|----------|
//! | Any screen | On state change | Full clear and redraw |
//! | Boot footer | On spinner frame change | Redraw footer band only |
//! | Everything else | Never | Left on the display |
//!
//! The main loop calls [`RenderState::mark_dirty`] whenever
//! [`GuideApp::tick`](crate::app::GuideApp::tick) or
//! [`GuideApp::handle_input`](crate::app::GuideApp::handle_input) report a change.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::animations::spinner_frame;
use crate::app::RenderHints;
use crate::screens::{
    draw_about_screen,
    draw_article_screen,
    draw_boot_footer,
    draw_boot_screen,
    draw_browse_screen,
    draw_menu_screen,
    draw_search_screen,
};

/// Amount of repainting needed for the next frame.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Redraw {
    /// Display is up to date.
    None,
    /// Only the animated region changed.
    Animation,
    /// Clear and repaint everything.
    Full,
}

/// Tracks render state for conditional redraws.
pub struct RenderState {
    /// Whether this is the first frame (need full redraw).
    first_frame: bool,

    /// Whether the screen state changed since the last frame.
    dirty: bool,

    /// Spinner frame last drawn, while the boot screen is up.
    prev_spinner_frame: Option<u32>,
}

impl RenderState {
    /// Create a new render state for first frame.
    pub const fn new() -> Self {
        Self {
            first_frame: true,
            dirty: false,
            prev_spinner_frame: None,
        }
    }

    /// Force a full redraw on the next frame.
    #[inline]
    pub fn mark_dirty(&mut self) { self.dirty = true; }

    /// Decide what to repaint for `hints` at `anim_ms` and record it as drawn.
    pub fn check(
        &mut self,
        hints: &RenderHints<'_>,
        anim_ms: u64,
    ) -> Redraw {
        let spinner = matches!(hints, RenderHints::Boot).then(|| spinner_frame(anim_ms));
        let redraw = if self.first_frame || self.dirty {
            Redraw::Full
        } else if spinner.is_some() && spinner != self.prev_spinner_frame {
            Redraw::Animation
        } else {
            Redraw::None
        };

        self.first_frame = false;
        self.dirty = false;
        self.prev_spinner_frame = spinner;
        redraw
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

/// Paint the whole frame for `hints`.
///
/// `anim_ms` drives the boot spinner and is ignored by the other screens.
pub fn render_screen<D>(
    display: &mut D,
    hints: &RenderHints<'_>,
    anim_ms: u64,
) where
    D: DrawTarget<Color = Rgb565>,
{
    match hints {
        RenderHints::Boot => draw_boot_screen(display, anim_ms),
        RenderHints::Menu { about: true } => draw_about_screen(display),
        RenderHints::Menu { about: false } => draw_menu_screen(display),
        RenderHints::Browse {
            corpus,
            selected,
            viewport,
        } => draw_browse_screen(display, corpus, *selected, viewport),
        RenderHints::Article {
            article,
            viewport,
            lines,
        } => draw_article_screen(display, article, viewport, lines),
        RenderHints::Search {
            corpus,
            search,
            viewport,
        } => draw_search_screen(display, corpus, search, viewport),
    }
}

/// Repaint whatever `state` says is stale. Returns what was drawn.
pub fn render_frame<D>(
    display: &mut D,
    state: &mut RenderState,
    hints: &RenderHints<'_>,
    anim_ms: u64,
) -> Redraw
where
    D: DrawTarget<Color = Rgb565>,
{
    let redraw = state.check(hints, anim_ms);
    match redraw {
        Redraw::Full => render_screen(display, hints, anim_ms),
        Redraw::Animation => draw_boot_footer(display, anim_ms),
        Redraw::None => {}
    }
    redraw
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::GuideApp;
    use crate::colors::ABOUT_BACKGROUND;
    use crate::corpus::ARTICLES;
    use crate::input::Key;
    use crate::testing::{FrameBuffer, SequenceRng};

    #[test]
    fn test_first_frame_is_full() {
        let mut state = RenderState::new();
        assert_eq!(state.check(&RenderHints::Menu { about: false }, 0), Redraw::Full);
        assert_eq!(state.check(&RenderHints::Menu { about: false }, 0), Redraw::None);
    }

    #[test]
    fn test_boot_spinner_requests_animation() {
        let mut state = RenderState::new();
        assert_eq!(state.check(&RenderHints::Boot, 0), Redraw::Full);
        assert_eq!(state.check(&RenderHints::Boot, 50), Redraw::None);
        assert_eq!(state.check(&RenderHints::Boot, 100), Redraw::Animation);
        assert_eq!(state.check(&RenderHints::Boot, 150), Redraw::None);
    }

    #[test]
    fn test_static_screens_ignore_time() {
        let mut state = RenderState::new();
        state.check(&RenderHints::Menu { about: false }, 0);
        assert_eq!(state.check(&RenderHints::Menu { about: false }, 1_000), Redraw::None);
    }

    #[test]
    fn test_mark_dirty_forces_full_redraw() {
        let mut state = RenderState::new();
        state.check(&RenderHints::Boot, 0);
        state.mark_dirty();
        assert_eq!(state.check(&RenderHints::Menu { about: false }, 0), Redraw::Full);
    }

    #[test]
    fn test_render_frame_follows_app() {
        let mut app = GuideApp::new(&ARTICLES, SequenceRng::new(&[0]));
        let mut state = RenderState::new();
        let mut fb = FrameBuffer::new();

        app.tick(0);
        assert_eq!(render_frame(&mut fb, &mut state, &app.render_hints(), 0), Redraw::Full);
        assert!(app.tick(5_000));
        state.mark_dirty();

        assert!(app.handle_input(Key::Char('4')));
        state.mark_dirty();
        assert_eq!(render_frame(&mut fb, &mut state, &app.render_hints(), 5_000), Redraw::Full);
        assert_eq!(fb.pixel(319, 319), Some(ABOUT_BACKGROUND));
        assert_eq!(render_frame(&mut fb, &mut state, &app.render_hints(), 5_050), Redraw::None);
    }
}
