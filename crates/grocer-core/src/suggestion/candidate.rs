// Scored suggestion candidate and its ranking order

use std::cmp::Ordering;

use super::distance::levenshtein;

/// A known item name scored against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<'a> {
    /// Display name as stored in the table.
    pub name: &'a str,
    /// Edit distance between the lowercased query and lowercased name.
    pub distance: usize,
    /// Whether the query is a case-insensitive prefix of the name.
    pub is_prefix: bool,
}

impl<'a> Candidate<'a> {
    /// Score `name` against an already-lowercased query.
    pub fn score(query_lower: &str, name: &'a str) -> Self {
        let name_lower = name.to_ascii_lowercase();
        Self {
            name,
            distance: levenshtein(query_lower, &name_lower),
            is_prefix: name_lower.starts_with(query_lower),
        }
    }

    /// Ranking score: 0 for prefix matches, the edit distance otherwise.
    /// Lower is better.
    pub fn rank_score(&self) -> usize {
        if self.is_prefix { 0 } else { self.distance }
    }
}

/// Best candidate first: lower score, then prefix matches, then name bytes.
impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank_score()
            .cmp(&other.rank_score())
            .then_with(|| other.is_prefix.cmp(&self.is_prefix))
            .then_with(|| self.name.cmp(other.name))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_scores_zero() {
        let c = Candidate::score("cran", "Cranberries");
        assert!(c.is_prefix);
        assert_eq!(c.distance, 7);
        assert_eq!(c.rank_score(), 0);
    }

    #[test]
    fn non_prefix_scores_distance() {
        let c = Candidate::score("craneberries", "Cranberries");
        assert!(!c.is_prefix);
        assert_eq!(c.rank_score(), 1);
    }

    #[test]
    fn empty_query_is_prefix_of_everything() {
        assert!(Candidate::score("", "Peas").is_prefix);
    }

    #[test]
    fn prefix_first_on_equal_score() {
        // An exact match is always a prefix match, so build the tie by hand.
        let prefix = Candidate { name: "Zucchini", distance: 9, is_prefix: true };
        let other = Candidate { name: "Apples", distance: 0, is_prefix: false };
        assert_eq!(prefix.cmp(&other), Ordering::Less);
    }

    #[test]
    fn ties_broken_by_name_bytes() {
        let a = Candidate::score("pea", "Pears");
        let b = Candidate::score("pea", "Peas");
        let c = Candidate::score("pea", "Peaches");
        let mut ranked = vec![b, a, c];
        ranked.sort();
        let names: Vec<_> = ranked.iter().map(|c| c.name).collect();
        assert_eq!(names, ["Peaches", "Pears", "Peas"]);
    }

    #[test]
    fn lower_score_first() {
        let near = Candidate::score("peat", "Peas"); // 1
        let far = Candidate::score("peat", "Pears"); // 2
        assert!(near < far);
    }
}
