//! Screen state machine.
//!
//! [`GuideApp`] owns the one [`ScreenState`] of the viewer and mutates it in
//! response to decoded keys ([`GuideApp::handle_input`]) and elapsed time
//! ([`GuideApp::tick`]). Rendering never touches the state directly; it reads
//! a [`RenderHints`] snapshot instead.
//!
//! # Navigation
//!
//! ```text
//! Boot --(5 s)--> Menu --1--> Browse --ENTER--> Article
//!                  |  --2--> Search --ENTER--> Article
//!                  |  --3--> Article (random)
//!                  +  --4--> About overlay (3 s) --> Menu
//!
//! ESC: Browse -> Menu, Search -> Menu, Article -> Browse
//! ```
//!
//! Keys are ignored while the boot screen or the About overlay is shown.

use heapless::Vec;
use rand_core::RngCore;

use crate::article::Article;
use crate::config::{ABOUT_SCREEN_MS, ARTICLE_METRICS, ARTICLE_VISIBLE_LINES, BOOT_SCREEN_MS, BROWSE_VISIBLE_ROWS, SEARCH_VISIBLE_ROWS};
use crate::input::Key;
use crate::layout::{LayoutLine, WrapMode, line_count, window};
use crate::search::SearchState;
use crate::viewport::ViewportState;

// =============================================================================
// Screen State
// =============================================================================

/// The screen currently shown, with its per-screen data.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ScreenState {
    Boot,
    Menu,
    Browse {
        selected: usize,
        /// First visible list row.
        scroll: usize,
    },
    Article {
        selected: usize,
        scroll_offset: usize,
    },
    Search {
        search: SearchState,
        /// First visible result row.
        scroll: usize,
    },
}

impl ScreenState {
    /// Short name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Menu => "menu",
            Self::Browse { .. } => "browse",
            Self::Article { .. } => "article",
            Self::Search { .. } => "search",
        }
    }
}

/// Everything the presentation layer needs to draw the current screen.
#[derive(Clone, Debug)]
pub enum RenderHints<'s> {
    Boot,
    Menu {
        about: bool,
    },
    Browse {
        corpus: &'s [Article],
        selected: usize,
        viewport: ViewportState,
    },
    Article {
        article: &'s Article,
        viewport: ViewportState,
        /// Body rows inside the viewport, already laid out.
        lines: Vec<LayoutLine, ARTICLE_VISIBLE_LINES>,
    },
    Search {
        corpus: &'s [Article],
        search: &'s SearchState,
        viewport: ViewportState,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Timer {
    Stopped,
    /// Armed; starts counting at the next tick.
    Armed,
    Running { since_ms: u64 },
}

impl Timer {
    /// Whether `duration_ms` has passed, starting the timer if it is armed.
    fn elapsed(
        &mut self,
        now_ms: u64,
        duration_ms: u64,
    ) -> bool {
        match *self {
            Self::Stopped => false,
            Self::Armed => {
                *self = Self::Running { since_ms: now_ms };
                duration_ms == 0
            }
            Self::Running { since_ms } => now_ms.saturating_sub(since_ms) >= duration_ms,
        }
    }
}

// =============================================================================
// Application
// =============================================================================

/// The Guide viewer: corpus, navigation state and timers.
pub struct GuideApp<'a, R: RngCore> {
    corpus: &'a [Article],
    rng: R,
    screen: ScreenState,
    boot_timer: Timer,
    about_timer: Timer,
}

impl<'a, R: RngCore> GuideApp<'a, R> {
    /// Start on the boot screen. The boot timer starts at the first [`tick`](Self::tick).
    pub const fn new(
        corpus: &'a [Article],
        rng: R,
    ) -> Self {
        Self {
            corpus,
            rng,
            screen: ScreenState::Boot,
            boot_timer: Timer::Armed,
            about_timer: Timer::Stopped,
        }
    }

    #[inline]
    pub const fn current_screen(&self) -> &ScreenState { &self.screen }

    #[inline]
    pub const fn corpus(&self) -> &'a [Article] { self.corpus }

    /// Whether the About overlay is covering the menu.
    #[inline]
    pub const fn is_about_shown(&self) -> bool { !matches!(self.about_timer, Timer::Stopped) }

    /// Advance time-based transitions. Returns whether a re-render is needed.
    pub fn tick(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if self.screen == ScreenState::Boot && self.boot_timer.elapsed(now_ms, BOOT_SCREEN_MS) {
            self.boot_timer = Timer::Stopped;
            log::info!("boot complete, {} articles loaded", self.corpus.len());
            self.set_screen(ScreenState::Menu);
            return true;
        }
        if self.about_timer.elapsed(now_ms, ABOUT_SCREEN_MS) {
            self.about_timer = Timer::Stopped;
            log::debug!("about overlay closed");
            return true;
        }
        false
    }

    /// Apply one key press. Returns whether visible content changed.
    pub fn handle_input(
        &mut self,
        key: Key,
    ) -> bool {
        if self.is_about_shown() {
            return false;
        }
        match self.screen {
            ScreenState::Boot => false,
            ScreenState::Menu => self.on_menu_key(key),
            ScreenState::Browse { selected, scroll } => self.on_browse_key(key, selected, scroll),
            ScreenState::Article { selected, scroll_offset } => self.on_article_key(key, selected, scroll_offset),
            ScreenState::Search { .. } => self.on_search_key(key),
        }
    }

    /// Snapshot of what to draw for the current screen.
    pub fn render_hints(&self) -> RenderHints<'_> {
        match &self.screen {
            ScreenState::Boot => RenderHints::Boot,
            ScreenState::Menu => RenderHints::Menu {
                about: self.is_about_shown(),
            },
            ScreenState::Browse { selected, scroll } => RenderHints::Browse {
                corpus: self.corpus,
                selected: *selected,
                viewport: ViewportState::new(self.corpus.len(), BROWSE_VISIBLE_ROWS, *scroll as isize).clamped(),
            },
            ScreenState::Article { selected, scroll_offset } => {
                let article = &self.corpus[*selected];
                let (lines, total) = window::<ARTICLE_VISIBLE_LINES>(article.body, WrapMode::Char, ARTICLE_METRICS, *scroll_offset);
                RenderHints::Article {
                    article,
                    viewport: ViewportState::new(total, ARTICLE_VISIBLE_LINES, *scroll_offset as isize),
                    lines,
                }
            }
            ScreenState::Search { search, scroll } => RenderHints::Search {
                corpus: self.corpus,
                search,
                viewport: ViewportState::new(search.results().len(), SEARCH_VISIBLE_ROWS, *scroll as isize).clamped(),
            },
        }
    }

    // -------------------------------------------------------------------------
    // Per-screen key handling
    // -------------------------------------------------------------------------

    fn on_menu_key(
        &mut self,
        key: Key,
    ) -> bool {
        match key {
            Key::Char('1') => {
                self.set_screen(ScreenState::Browse { selected: 0, scroll: 0 });
                true
            }
            Key::Char('2') => {
                self.set_screen(ScreenState::Search {
                    search: SearchState::new(self.corpus),
                    scroll: 0,
                });
                true
            }
            Key::Char('3') => match self.random_index() {
                Some(selected) => {
                    log::debug!("random article: {}", self.corpus[selected].title);
                    self.open_article(selected);
                    true
                }
                None => false,
            },
            Key::Char('4') => {
                self.about_timer = Timer::Armed;
                log::debug!("about overlay opened");
                true
            }
            _ => false,
        }
    }

    fn on_browse_key(
        &mut self,
        key: Key,
        selected: usize,
        scroll: usize,
    ) -> bool {
        let count = self.corpus.len();
        let delta = match key {
            Key::Up | Key::Char('w' | 'k') => -1,
            Key::Down | Key::Char('s' | 'j') => 1,
            Key::Enter | Key::Char(' ') => {
                if selected >= count {
                    return false;
                }
                self.open_article(selected);
                return true;
            }
            Key::Esc => {
                self.set_screen(ScreenState::Menu);
                return true;
            }
            _ => return false,
        };

        let target = (selected as isize + delta).clamp(0, count.saturating_sub(1) as isize) as usize;
        if target == selected {
            return false;
        }
        let mut viewport = ViewportState::new(count, BROWSE_VISIBLE_ROWS, scroll as isize);
        viewport.reveal(target);
        self.screen = ScreenState::Browse {
            selected: target,
            scroll: viewport.effective_offset(),
        };
        true
    }

    fn on_article_key(
        &mut self,
        key: Key,
        selected: usize,
        scroll_offset: usize,
    ) -> bool {
        let delta = match key {
            Key::Up | Key::Char('w' | 'k') => -1,
            Key::Down | Key::Char('s' | 'j') => 1,
            Key::Esc => {
                let mut viewport = ViewportState::new(self.corpus.len(), BROWSE_VISIBLE_ROWS, 0);
                viewport.reveal(selected);
                self.set_screen(ScreenState::Browse {
                    selected,
                    scroll: viewport.effective_offset(),
                });
                return true;
            }
            _ => return false,
        };

        let total = line_count(self.corpus[selected].body, WrapMode::Char, ARTICLE_METRICS);
        let mut viewport = ViewportState::new(total, ARTICLE_VISIBLE_LINES, scroll_offset as isize);
        if !viewport.scroll_by(delta) {
            return false;
        }
        self.screen = ScreenState::Article {
            selected,
            scroll_offset: viewport.effective_offset(),
        };
        true
    }

    fn on_search_key(
        &mut self,
        key: Key,
    ) -> bool {
        let corpus = self.corpus;
        let ScreenState::Search { search, scroll } = &mut self.screen else {
            return false;
        };

        let changed = match key {
            Key::Char(c) => search.push_char(c, corpus),
            Key::Backspace => search.pop_char(corpus),
            Key::Up => search.move_cursor(-1),
            Key::Down => search.move_cursor(1),
            Key::Enter => {
                let Some(selected) = search.selected_article() else {
                    return false;
                };
                self.open_article(selected);
                return true;
            }
            Key::Esc => {
                self.set_screen(ScreenState::Menu);
                return true;
            }
        };

        if changed {
            let mut viewport = ViewportState::new(search.results().len(), SEARCH_VISIBLE_ROWS, *scroll as isize);
            viewport.reveal(search.cursor());
            *scroll = viewport.effective_offset();
        }
        changed
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn open_article(
        &mut self,
        selected: usize,
    ) {
        self.set_screen(ScreenState::Article {
            selected,
            scroll_offset: 0,
        });
    }

    fn set_screen(
        &mut self,
        next: ScreenState,
    ) {
        log::debug!("{} -> {}", self.screen.name(), next.name());
        self.screen = next;
    }

    /// Uniform index into the corpus, or `None` when it is empty.
    fn random_index(&mut self) -> Option<usize> {
        let len = self.corpus.len() as u64;
        if len == 0 {
            return None;
        }
        // Reject the top partial bucket so every index is equally likely.
        let zone = (1u64 << 32) / len * len;
        loop {
            let value = u64::from(self.rng.next_u32());
            if value < zone {
                return Some((value % len) as usize);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::DiagramKind;
    use crate::corpus::ARTICLES;
    use crate::testing::SequenceRng;

    const FIVE: [Article; 5] = [
        Article::new("Towel", "Essential Items", DiagramKind::Towel, "short"),
        Article::new("42", "Philosophy", DiagramKind::TheAnswer, "short"),
        Article::new("Marvin", "Personalities", DiagramKind::Marvin, "short"),
        Article::new("Earth", "Planets", DiagramKind::Earth, "short"),
        Article::new("Vogons", "Species", DiagramKind::Vogons, "short"),
    ];

    fn booted<'a>(
        corpus: &'a [Article],
        rng: SequenceRng,
    ) -> GuideApp<'a, SequenceRng> {
        let mut app = GuideApp::new(corpus, rng);
        app.tick(0);
        assert!(app.tick(BOOT_SCREEN_MS));
        assert_eq!(app.current_screen(), &ScreenState::Menu);
        app
    }

    fn press(
        app: &mut GuideApp<'_, SequenceRng>,
        keys: &str,
    ) {
        for c in keys.chars() {
            app.handle_input(Key::Char(c));
        }
    }

    #[test]
    fn test_boot_waits_for_timer() {
        let mut app = GuideApp::new(&FIVE, SequenceRng::new(&[0]));
        assert!(!app.tick(1000), "first tick only starts the timer");
        assert!(!app.tick(BOOT_SCREEN_MS + 999));
        assert_eq!(app.current_screen(), &ScreenState::Boot);
        assert!(app.tick(BOOT_SCREEN_MS + 1000));
        assert_eq!(app.current_screen(), &ScreenState::Menu);
    }

    #[test]
    fn test_keys_ignored_during_boot() {
        let mut app = GuideApp::new(&FIVE, SequenceRng::new(&[0]));
        assert!(!app.handle_input(Key::Char('1')));
        assert_eq!(app.current_screen(), &ScreenState::Boot);
    }

    #[test]
    fn test_menu_random_article() {
        let mut app = booted(&FIVE, SequenceRng::new(&[7]));
        assert!(app.handle_input(Key::Char('3')));
        match app.current_screen() {
            ScreenState::Article { selected, scroll_offset } => {
                assert!(*selected < 5);
                assert_eq!(*selected, 2);
                assert_eq!(*scroll_offset, 0);
            }
            other => panic!("expected article, got {other:?}"),
        }
    }

    #[test]
    fn test_random_rejects_biased_values() {
        // 2^32 / 5 * 5 = 4294967295 is the first rejected value
        let mut app = booted(&FIVE, SequenceRng::new(&[u32::MAX, 9]));
        app.handle_input(Key::Char('3'));
        assert_eq!(app.current_screen(), &ScreenState::Article { selected: 4, scroll_offset: 0 });
    }

    #[test]
    fn test_random_on_empty_corpus_is_noop() {
        let mut app = booted(&[], SequenceRng::new(&[3]));
        assert!(!app.handle_input(Key::Char('3')));
        assert_eq!(app.current_screen(), &ScreenState::Menu);
    }

    #[test]
    fn test_menu_unknown_key_is_noop() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        assert!(!app.handle_input(Key::Char('9')));
        assert!(!app.handle_input(Key::Esc));
        assert_eq!(app.current_screen(), &ScreenState::Menu);
    }

    #[test]
    fn test_about_overlay_times_out() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        assert!(app.handle_input(Key::Char('4')));
        assert!(app.is_about_shown());
        assert!(matches!(app.render_hints(), RenderHints::Menu { about: true }));
        assert!(!app.handle_input(Key::Char('1')), "keys are ignored under the overlay");

        assert!(!app.tick(10_000));
        assert!(!app.tick(12_999));
        assert!(app.tick(13_000));
        assert!(!app.is_about_shown());
        assert!(app.handle_input(Key::Char('1')));
    }

    #[test]
    fn test_browse_selection_is_clamped() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "1");
        assert!(!app.handle_input(Key::Up));
        for _ in 0..10 {
            app.handle_input(Key::Down);
        }
        assert_eq!(app.current_screen(), &ScreenState::Browse { selected: 4, scroll: 0 });
        assert!(app.handle_input(Key::Char('k')));
        assert_eq!(app.current_screen(), &ScreenState::Browse { selected: 3, scroll: 0 });
    }

    #[test]
    fn test_browse_list_follows_selection() {
        let mut app = booted(&ARTICLES, SequenceRng::new(&[0]));
        press(&mut app, "1");
        for _ in 0..BROWSE_VISIBLE_ROWS {
            app.handle_input(Key::Char('j'));
        }
        assert_eq!(app.current_screen(), &ScreenState::Browse { selected: 9, scroll: 1 });
        let RenderHints::Browse { viewport, .. } = app.render_hints() else {
            panic!("expected browse hints");
        };
        assert_eq!(viewport.visible_range(), 1..10);
    }

    #[test]
    fn test_browse_enter_and_escape_round_trip() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "1");
        app.handle_input(Key::Down);
        app.handle_input(Key::Down);
        assert!(app.handle_input(Key::Enter));
        assert_eq!(app.current_screen(), &ScreenState::Article { selected: 2, scroll_offset: 0 });
        assert!(app.handle_input(Key::Esc));
        assert_eq!(app.current_screen(), &ScreenState::Browse { selected: 2, scroll: 0 });
        assert!(app.handle_input(Key::Esc));
        assert_eq!(app.current_screen(), &ScreenState::Menu);
    }

    #[test]
    fn test_menu_one_resets_browse_selection() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "1");
        app.handle_input(Key::Down);
        app.handle_input(Key::Down);
        assert!(app.handle_input(Key::Esc));
        assert!(app.handle_input(Key::Char('1')));
        assert_eq!(app.current_screen(), &ScreenState::Browse { selected: 0, scroll: 0 });
    }

    #[test]
    fn test_menu_two_clears_previous_query() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "2zz");
        assert!(app.handle_input(Key::Esc));
        assert!(app.handle_input(Key::Char('2')));
        let ScreenState::Search { search, scroll } = app.current_screen() else {
            panic!("expected search");
        };
        assert_eq!(search.query(), "");
        assert_eq!(search.results(), &[0, 1, 2, 3, 4]);
        assert_eq!(search.cursor(), 0);
        assert_eq!(*scroll, 0);
    }

    #[test]
    fn test_browse_space_opens_article() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "1 ");
        assert_eq!(app.current_screen(), &ScreenState::Article { selected: 0, scroll_offset: 0 });
    }

    #[test]
    fn test_article_scroll_is_clamped() {
        let mut app = booted(&ARTICLES, SequenceRng::new(&[0]));
        press(&mut app, "1");
        for _ in 0..7 {
            app.handle_input(Key::Down);
        }
        app.handle_input(Key::Enter);
        let total = line_count(ARTICLES[7].body, WrapMode::Char, ARTICLE_METRICS);
        let max = total - ARTICLE_VISIBLE_LINES;
        assert!(max > 0, "long article needs scrolling");

        assert!(!app.handle_input(Key::Up), "already at the top");
        for _ in 0..total + 10 {
            app.handle_input(Key::Down);
        }
        assert_eq!(app.current_screen(), &ScreenState::Article { selected: 7, scroll_offset: max });
        assert!(!app.handle_input(Key::Down), "overscroll is absorbed");
        assert!(app.handle_input(Key::Char('w')));
        assert_eq!(app.current_screen(), &ScreenState::Article { selected: 7, scroll_offset: max - 1 });
    }

    #[test]
    fn test_article_hints_carry_visible_window() {
        let mut app = booted(&ARTICLES, SequenceRng::new(&[0]));
        press(&mut app, "1");
        for _ in 0..7 {
            app.handle_input(Key::Down);
        }
        app.handle_input(Key::Enter);
        app.handle_input(Key::Down);

        let RenderHints::Article { article, viewport, lines } = app.render_hints() else {
            panic!("expected article hints");
        };
        let (expected, total) = window::<ARTICLE_VISIBLE_LINES>(article.body, WrapMode::Char, ARTICLE_METRICS, 1);
        assert_eq!(lines, expected);
        assert_eq!(viewport.total_lines, total);
        assert_eq!(viewport.effective_offset(), 1);
    }

    #[test]
    fn test_search_no_match_enter_stays() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "2zz");
        assert!(!app.handle_input(Key::Enter));
        let ScreenState::Search { search, .. } = app.current_screen() else {
            panic!("expected search");
        };
        assert_eq!(search.query(), "zz");
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_search_typing_and_selection() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "2");
        assert!(app.handle_input(Key::Char('p')));
        // "p": Philosophy, Personalities, Planets, Species
        assert!(app.handle_input(Key::Down));
        assert!(app.handle_input(Key::Enter));
        assert_eq!(app.current_screen(), &ScreenState::Article { selected: 2, scroll_offset: 0 });
    }

    #[test]
    fn test_search_treats_aliases_as_text() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "2jk ");
        let ScreenState::Search { search, .. } = app.current_screen() else {
            panic!("expected search");
        };
        assert_eq!(search.query(), "jk ");
    }

    #[test]
    fn test_search_backspace_and_escape() {
        let mut app = booted(&FIVE, SequenceRng::new(&[0]));
        press(&mut app, "2zz");
        assert!(app.handle_input(Key::Backspace));
        assert!(app.handle_input(Key::Backspace));
        assert!(!app.handle_input(Key::Backspace), "empty query");
        let RenderHints::Search { search, .. } = app.render_hints() else {
            panic!("expected search hints");
        };
        assert_eq!(search.results().len(), 5);
        assert!(app.handle_input(Key::Esc));
        assert_eq!(app.current_screen(), &ScreenState::Menu);
    }

    #[test]
    fn test_search_list_follows_cursor() {
        let mut app = booted(&ARTICLES, SequenceRng::new(&[0]));
        press(&mut app, "2");
        for _ in 0..20 {
            app.handle_input(Key::Down);
        }
        let ScreenState::Search { search, scroll } = app.current_screen() else {
            panic!("expected search");
        };
        assert_eq!(search.cursor(), 7);
        assert_eq!(*scroll, 1);
    }
}
