//! Frontier scan over a [`PatternIndex`].
//!
//! The engine keeps a *frontier*: the trie nodes of every walk that is still in
//! progress at the current query position, one walk per earlier start position
//! that has matched a pattern prefix so far. Each query symbol advances every
//! walk by one edge (dropping walks that cannot continue) and starts a fresh walk
//! at the root, so occurrences at all start positions are found, overlapping
//! ones included. There are no failure links; the cost per symbol is linear in
//! the frontier size, which is bounded by the longest pattern.

use symcount_common::{Result, verify_arg};

use crate::{config::EmptyPatternPolicy, index::PatternIndex, trie::TrieNode};

/// Counts pattern occurrences in query sequences.
///
/// An engine borrows its index immutably and owns two frontier buffers that are
/// reused across queries. Any number of engines may scan the same index
/// concurrently.
pub struct MatchEngine<'a> {
    index: &'a PatternIndex,
    frontier: Vec<&'a TrieNode>,
    next: Vec<&'a TrieNode>,
}

impl<'a> MatchEngine<'a> {
    pub fn new(index: &'a PatternIndex) -> MatchEngine<'a> {
        let capacity = index.max_depth() + 1;
        MatchEngine {
            index,
            frontier: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
        }
    }

    pub fn index(&self) -> &'a PatternIndex {
        self.index
    }

    /// Returns the occurrence count of every pattern in `query`, in pattern order.
    ///
    /// The result always has [`PatternIndex::pattern_count`] elements.
    pub fn search(&mut self, query: impl AsRef<[u8]>) -> Vec<u32> {
        let mut counts = vec![0; self.index.pattern_count()];
        self.accumulate(query.as_ref(), &mut counts);
        counts
    }

    /// Adds the occurrence counts of `query` to `counts`.
    ///
    /// The slice is not reset, which allows summing counts over several queries
    /// (e.g. the segments of one series). Slots saturate at `u32::MAX`.
    ///
    /// # Errors
    ///
    /// Fails if `counts.len()` differs from the pattern count of the index.
    pub fn search_into(&mut self, query: impl AsRef<[u8]>, counts: &mut [u32]) -> Result<()> {
        verify_arg!(counts, counts.len() == self.index.pattern_count());
        self.accumulate(query.as_ref(), counts);
        Ok(())
    }

    fn accumulate(&mut self, query: &[u8], counts: &mut [u32]) {
        let root = self.index.root();
        self.frontier.clear();
        self.frontier.push(root);

        for &symbol in query {
            self.next.clear();
            self.next.push(root);
            for &node in &self.frontier {
                if let Some(next) = node.child(symbol) {
                    for &feature in next.feature_indices() {
                        counts[feature] = counts[feature].saturating_add(1);
                    }
                    // Leaves cannot extend any further walk.
                    if next.child_count() != 0 {
                        self.next.push(next);
                    }
                }
            }
            std::mem::swap(&mut self.frontier, &mut self.next);
        }

        if self.index.config().empty_pattern == EmptyPatternPolicy::CountPerSymbol {
            let occurrences = u32::try_from(query.len()).unwrap_or(u32::MAX);
            for &feature in root.feature_indices() {
                counts[feature] = counts[feature].saturating_add(occurrences);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DuplicatePolicy, PatternIndexConfig};

    #[test]
    fn test_prefix_and_suffix_patterns() {
        let index = PatternIndex::new(["a", "ab", "b"]);
        assert_eq!(MatchEngine::new(&index).search("ab"), vec![1, 1, 1]);
    }

    #[test]
    fn test_overlapping_occurrences() {
        let index = PatternIndex::new(["aa"]);
        let mut engine = MatchEngine::new(&index);
        assert_eq!(engine.search("aaa"), vec![2]);
        assert_eq!(engine.search("aaaa"), vec![3]);
        assert_eq!(engine.search("aba"), vec![0]);
    }

    #[test]
    fn test_no_match() {
        let index = PatternIndex::new(["x"]);
        assert_eq!(index.search("abc"), vec![0]);
    }

    #[test]
    fn test_empty_pattern_list() {
        let index = PatternIndex::new(Vec::<&str>::new());
        assert_eq!(index.search("abc"), Vec::<u32>::new());
        assert_eq!(index.search(""), Vec::<u32>::new());
    }

    #[test]
    fn test_duplicate_patterns_last_wins() {
        let index = PatternIndex::new(["a", "a"]);
        assert_eq!(index.search("a"), vec![0, 1]);
    }

    #[test]
    fn test_duplicate_patterns_all_indices() {
        let config = PatternIndexConfig {
            duplicates: DuplicatePolicy::AllIndices,
            ..Default::default()
        };
        let index = PatternIndex::with_config(["a", "a", "b"], config).unwrap();
        assert_eq!(index.search("aba"), vec![2, 2, 1]);
    }

    #[test]
    fn test_empty_query() {
        let index = PatternIndex::new(["a", "bc"]);
        assert_eq!(index.search(""), vec![0, 0]);
    }

    #[test]
    fn test_pattern_longer_than_query() {
        let index = PatternIndex::new(["abcdef", "abc"]);
        assert_eq!(index.search("abc"), vec![0, 1]);
    }

    #[test]
    fn test_empty_pattern_policies() {
        let index = PatternIndex::new(["", "a"]);
        assert_eq!(index.search("aaa"), vec![0, 3]);

        let config = PatternIndexConfig {
            empty_pattern: EmptyPatternPolicy::CountPerSymbol,
            ..Default::default()
        };
        let index = PatternIndex::with_config(["", "a"], config).unwrap();
        assert_eq!(index.search("aaa"), vec![3, 3]);
        assert_eq!(index.search(""), vec![0, 0]);
    }

    #[test]
    fn test_search_into_accumulates() {
        let index = PatternIndex::new(["ab", "b"]);
        let mut engine = MatchEngine::new(&index);
        let mut counts = vec![0; 2];
        engine.search_into("abb", &mut counts).unwrap();
        engine.search_into("ab", &mut counts).unwrap();
        assert_eq!(counts, vec![2, 3]);

        let mut short = vec![0; 1];
        assert!(engine.search_into("ab", &mut short).is_err());
        assert_eq!(short, vec![0]);
    }

    #[test]
    fn test_search_into_saturates() {
        let index = PatternIndex::new(["a"]);
        let mut engine = MatchEngine::new(&index);
        let mut counts = vec![u32::MAX];
        engine.search_into("aa", &mut counts).unwrap();
        assert_eq!(counts, vec![u32::MAX]);

        let config = PatternIndexConfig {
            empty_pattern: EmptyPatternPolicy::CountPerSymbol,
            ..Default::default()
        };
        let index = PatternIndex::with_config(["", "b"], config).unwrap();
        let mut engine = MatchEngine::new(&index);
        let mut counts = vec![u32::MAX - 1, u32::MAX];
        engine.search_into("bbb", &mut counts).unwrap();
        assert_eq!(counts, vec![u32::MAX, u32::MAX]);
    }

    #[test]
    fn test_engine_reuse_is_stateless() {
        let index = PatternIndex::new(["abc", "bc", "c"]);
        let mut engine = MatchEngine::new(&index);
        let first = engine.search("abcabc");
        let _ = engine.search("ccccab");
        assert_eq!(engine.search("abcabc"), first);
        assert_eq!(first, vec![2, 2, 2]);
    }

    #[test]
    fn test_query_symbols_outside_alphabet() {
        let index = PatternIndex::new(["ab"]);
        assert_eq!(index.search("a#b\0ab"), vec![1]);
    }
}
