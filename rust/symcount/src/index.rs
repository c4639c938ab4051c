//! Pattern index construction.
//!
//! A [`PatternIndex`] is built once from an ordered collection of patterns and is
//! read-only afterwards. Every pattern contributes its character path to a shared
//! prefix trie, and the node at the end of the path is tagged with the pattern's
//! position in the input collection (its *feature index*).
//!
//! Construction is normally a single call:
//!
//! ```rust
//! use symcount::PatternIndex;
//!
//! let index = PatternIndex::new(["a", "ab", "b"]);
//! assert_eq!(index.pattern_count(), 3);
//! assert_eq!(index.search("ab"), vec![1, 1, 1]);
//! ```
//!
//! [`PatternIndexBuilder`] is available when patterns arrive incrementally or when
//! a non-default [`PatternIndexConfig`] is required.

use log::{debug, warn};
use symcount_common::{Result, error::Error};

use crate::{
    config::{DuplicatePolicy, PatternIndexConfig},
    engine::MatchEngine,
    trie::TrieNode,
};

/// An immutable prefix trie over a fixed, ordered set of patterns.
#[derive(Debug, Clone)]
pub struct PatternIndex {
    /// Root of the trie, standing for the empty prefix.
    root: TrieNode,
    /// Number of patterns supplied at construction. Fixes the length of every
    /// count vector produced against this index.
    pattern_count: usize,
    /// Total number of trie nodes, including the root.
    node_count: usize,
    /// Length of the longest pattern.
    max_depth: usize,
    config: PatternIndexConfig,
}

impl PatternIndex {
    /// Builds an index using the default configuration: a later duplicate pattern
    /// takes over the tag of an earlier identical one, and an empty pattern never
    /// matches.
    pub fn new<I, P>(patterns: I) -> PatternIndex
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut builder = PatternIndexBuilder::new(PatternIndexConfig::default());
        for pattern in patterns {
            builder.insert(pattern.as_ref());
        }
        builder.finish()
    }

    /// Builds an index with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::DuplicatePattern`](symcount_common::error::ErrorKind::DuplicatePattern)
    /// when `config.duplicates` is [`DuplicatePolicy::Reject`] and two patterns
    /// are identical.
    pub fn with_config<I, P>(patterns: I, config: PatternIndexConfig) -> Result<PatternIndex>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut builder = PatternIndexBuilder::new(config);
        for pattern in patterns {
            builder.push(pattern)?;
        }
        Ok(builder.finish())
    }

    /// Number of patterns supplied at construction, duplicates included.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    pub fn is_empty(&self) -> bool {
        self.pattern_count == 0
    }

    /// Number of trie nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Length of the longest pattern in symbols.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn config(&self) -> &PatternIndexConfig {
        &self.config
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Follows the path of `pattern` from the root without creating nodes.
    ///
    /// Returns `None` when `pattern` is not a prefix of any indexed pattern.
    pub fn lookup(&self, pattern: impl AsRef<[u8]>) -> Option<&TrieNode> {
        pattern
            .as_ref()
            .iter()
            .try_fold(&self.root, |node, &symbol| node.child(symbol))
    }

    /// Feature indices of the patterns equal to `pattern`. Empty when `pattern`
    /// was not indexed (or was shadowed by a later duplicate).
    pub fn feature_indices(&self, pattern: impl AsRef<[u8]>) -> &[usize] {
        self.lookup(pattern)
            .map(TrieNode::feature_indices)
            .unwrap_or_default()
    }

    /// Counts the occurrences of every pattern in `query`.
    ///
    /// Shorthand for a one-off [`MatchEngine::search`]. Prefer keeping a
    /// [`MatchEngine`] around when scanning many queries on one thread.
    pub fn search(&self, query: impl AsRef<[u8]>) -> Vec<u32> {
        MatchEngine::new(self).search(query)
    }
}

/// Incremental constructor of a [`PatternIndex`].
///
/// Patterns receive feature indices in the order they are pushed.
#[derive(Debug, Default)]
pub struct PatternIndexBuilder {
    root: TrieNode,
    pattern_count: usize,
    max_depth: usize,
    duplicate_count: usize,
    config: PatternIndexConfig,
}

impl PatternIndexBuilder {
    pub fn new(config: PatternIndexConfig) -> PatternIndexBuilder {
        PatternIndexBuilder {
            config,
            ..Default::default()
        }
    }

    /// Number of patterns accepted so far.
    pub fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Adds the next pattern and returns its feature index.
    ///
    /// # Errors
    ///
    /// Fails under [`DuplicatePolicy::Reject`] if an identical pattern was pushed
    /// before. The builder is left unchanged in that case.
    pub fn push(&mut self, pattern: impl AsRef<[u8]>) -> Result<usize> {
        let pattern = pattern.as_ref();
        if self.config.duplicates == DuplicatePolicy::Reject {
            if let Some(first) = self.existing_feature(pattern) {
                return Err(Error::duplicate_pattern(first, self.pattern_count));
            }
        }
        Ok(self.insert(pattern))
    }

    /// Inserts a pattern, resolving duplicates by the configured policy
    /// (`Reject` must already have been checked).
    fn insert(&mut self, pattern: &[u8]) -> usize {
        let index = self.pattern_count;
        let node = pattern
            .iter()
            .fold(&mut self.root, |node, &symbol| node.child_or_insert(symbol));

        match (node.feature_index(), self.config.duplicates) {
            (Some(first), DuplicatePolicy::AllIndices) => {
                node.add_feature(index);
                self.duplicate_count += 1;
                debug!("pattern #{index} duplicates pattern #{first}, both slots kept");
            }
            (Some(first), _) => {
                node.set_feature(index);
                self.duplicate_count += 1;
                warn!("pattern #{index} duplicates pattern #{first}; slot #{first} will stay zero");
            }
            (None, _) => {
                node.set_feature(index);
            }
        }

        self.pattern_count += 1;
        self.max_depth = self.max_depth.max(pattern.len());
        index
    }

    fn existing_feature(&self, pattern: &[u8]) -> Option<usize> {
        pattern
            .iter()
            .try_fold(&self.root, |node, &symbol| node.child(symbol))
            .and_then(TrieNode::feature_index)
    }

    /// Completes construction.
    pub fn finish(self) -> PatternIndex {
        let node_count = self.root.subtree_size();
        debug!(
            "pattern index built: {} patterns, {} nodes, max depth {}, {} duplicates",
            self.pattern_count, node_count, self.max_depth, self.duplicate_count
        );
        PatternIndex {
            root: self.root,
            pattern_count: self.pattern_count,
            node_count,
            max_depth: self.max_depth,
            config: self.config,
        }
    }
}
