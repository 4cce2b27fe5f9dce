// Suggestion engine -- "did you mean" candidates for a missed lookup
//
// Every known item name is scored against the query: prefix matches score 0,
// everything else scores its Levenshtein distance. Candidates are ranked by
// score, then prefix-first, then exact name bytes, and non-prefix candidates
// further than `MAX_EDIT_DISTANCE` edits away are dropped.
//
// Architecture:
//   - `distance`: classic dynamic-programming edit distance
//   - `candidate`: scored candidate and its ranking order

pub mod candidate;
pub mod distance;

pub use candidate::Candidate;
pub use distance::levenshtein;

use crate::table::ItemCount;

/// Number of suggestions returned unless configured otherwise.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// Non-prefix candidates further away than this are never suggested.
pub const MAX_EDIT_DISTANCE: usize = 2;

/// Ranks known item names against a query that missed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggester {
    max_results: usize,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}

impl Suggester {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Every entry scored against `query`, in ranking order, unfiltered.
    pub fn rank<'a>(&self, query: &str, entries: &[ItemCount<'a>]) -> Vec<Candidate<'a>> {
        let query = query.to_ascii_lowercase();
        let mut ranked: Vec<Candidate<'a>> = entries
            .iter()
            .map(|entry| Candidate::score(&query, entry.name))
            .collect();
        ranked.sort();
        ranked
    }

    /// Up to `max_results` display names the user may have meant.
    ///
    /// Matching is ASCII case-insensitive; the returned names keep their
    /// display spelling.
    pub fn suggest(&self, query: &str, entries: &[ItemCount<'_>]) -> Vec<String> {
        self.rank(query, entries)
            .into_iter()
            .filter(|c| c.is_prefix || c.distance <= MAX_EDIT_DISTANCE)
            .take(self.max_results)
            .map(|c| c.name.to_string())
            .collect()
    }
}

/// Suggest with the default limit of [`DEFAULT_MAX_RESULTS`].
pub fn suggest(query: &str, entries: &[ItemCount<'_>]) -> Vec<String> {
    Suggester::default().suggest(query, entries)
}
