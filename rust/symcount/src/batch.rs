//! Feature matrix construction over a collection of queries.

use log::trace;
use rayon::prelude::*;

use crate::{engine::MatchEngine, index::PatternIndex};

impl PatternIndex {
    /// Counts every pattern in every query, returning one row per query.
    ///
    /// Rows are in query order and each has [`PatternIndex::pattern_count`]
    /// elements. Queries are processed in parallel on the rayon pool, with one
    /// [`MatchEngine`] per worker.
    pub fn count_matrix<Q>(&self, queries: &[Q]) -> Vec<Vec<u32>>
    where
        Q: AsRef<[u8]> + Sync,
    {
        trace!(
            "counting {} patterns over {} queries",
            self.pattern_count(),
            queries.len()
        );
        queries
            .par_iter()
            .map_init(|| MatchEngine::new(self), |engine, query| engine.search(query))
            .collect()
    }

    /// Single-threaded form of [`PatternIndex::count_matrix`].
    pub fn count_matrix_sequential<I, Q>(&self, queries: I) -> Vec<Vec<u32>>
    where
        I: IntoIterator<Item = Q>,
        Q: AsRef<[u8]>,
    {
        let mut engine = MatchEngine::new(self);
        queries.into_iter().map(|query| engine.search(query)).collect()
    }
}
