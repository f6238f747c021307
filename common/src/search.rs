//! Keyword search over the corpus.
//!
//! Matching is a linear scan: an article matches when its title or its
//! category contains the query, ignoring ASCII case. An empty query matches
//! everything in corpus order.
//!
//! Results are capped at [`SEARCH_RESULT_CAP`] and the scan stops as soon as
//! the cap is reached. Later matches are dropped without any indication; the
//! cap bounds memory, it is not a relevance cut-off.

use heapless::{String, Vec};

use crate::article::Article;
use crate::config::{QUERY_MAX_LEN, SEARCH_RESULT_CAP, SEARCH_SELECTABLE};

/// Article indices matching a query, in corpus order.
pub type SearchResults = Vec<usize, SEARCH_RESULT_CAP>;

/// Whether `haystack` contains `needle`, ignoring ASCII case. Empty needles always match.
pub fn contains_ignore_ascii_case(
    haystack: &str,
    needle: &str,
) -> bool {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return true;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}

/// Indices of the articles whose title or category contains `query`.
pub fn search(
    corpus: &[Article],
    query: &str,
) -> SearchResults {
    let mut results = SearchResults::new();
    let matches = corpus
        .iter()
        .enumerate()
        .filter(|(_, article)| contains_ignore_ascii_case(article.title, query) || contains_ignore_ascii_case(article.category, query))
        .map(|(index, _)| index);

    for index in matches {
        if results.push(index).is_err() {
            break;
        }
    }
    results
}

/// Query, results and selection of the Search screen.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SearchState {
    query: String<QUERY_MAX_LEN>,
    results: SearchResults,
    cursor: usize,
}

impl SearchState {
    /// Empty query showing every article.
    pub fn new(corpus: &[Article]) -> Self {
        Self {
            query: String::new(),
            results: search(corpus, ""),
            cursor: 0,
        }
    }

    #[inline]
    pub fn query(&self) -> &str { self.query.as_str() }

    #[inline]
    pub fn results(&self) -> &[usize] { &self.results }

    #[inline]
    pub const fn cursor(&self) -> usize { self.cursor }

    /// Article index under the cursor, if there are any results.
    pub fn selected_article(&self) -> Option<usize> { self.results.get(self.cursor).copied() }

    /// Highest cursor position reachable with the current results.
    pub fn max_cursor(&self) -> usize { self.results.len().min(SEARCH_SELECTABLE).saturating_sub(1) }

    /// Append a printable ASCII character and re-run the search.
    ///
    /// Returns `false` (and leaves the query untouched) for non-printable
    /// characters or when the query is already at its length bound.
    pub fn push_char(
        &mut self,
        c: char,
        corpus: &[Article],
    ) -> bool {
        if !(' '..='~').contains(&c) || self.query.push(c).is_err() {
            return false;
        }
        self.refresh(corpus);
        true
    }

    /// Remove the last query character and re-run the search.
    pub fn pop_char(
        &mut self,
        corpus: &[Article],
    ) -> bool {
        if self.query.pop().is_none() {
            return false;
        }
        self.refresh(corpus);
        true
    }

    /// Move the cursor by `delta`, staying within `[0, max_cursor()]`.
    pub fn move_cursor(
        &mut self,
        delta: isize,
    ) -> bool {
        let target = (self.cursor as isize).saturating_add(delta).clamp(0, self.max_cursor() as isize) as usize;
        let changed = target != self.cursor;
        self.cursor = target;
        changed
    }

    fn refresh(
        &mut self,
        corpus: &[Article],
    ) {
        self.results = search(corpus, &self.query);
        self.cursor = 0;
        log::debug!("search {:?}: {} results", self.query.as_str(), self.results.len());
    }
}
