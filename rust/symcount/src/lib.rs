//! Multi-pattern substring counting over symbolic sequences.
//!
//! This crate turns a discretized sequence (a string over a small symbol
//! alphabet, such as a SAX word) into a numeric feature vector: one occurrence
//! count per known pattern.
//!
//! # Overview
//!
//! - [`PatternIndex`] is built once from an ordered list of patterns. It stores
//!   a prefix trie whose terminal nodes carry the position of the pattern that
//!   ends there.
//! - [`MatchEngine`] scans a query against the index and produces the count
//!   vector, counting overlapping occurrences at every start position.
//! - [`PatternIndex::count_matrix`] applies the scan to a whole collection of
//!   queries in parallel.
//!
//! Symbols are single bytes; the alphabet size is not fixed.
//!
//! # Quick Start
//!
//! ```rust
//! use symcount::{MatchEngine, PatternIndex};
//!
//! let index = PatternIndex::new(["aa", "ab", "b"]);
//! let mut engine = MatchEngine::new(&index);
//!
//! assert_eq!(engine.search("aaab"), vec![2, 1, 1]);
//! assert_eq!(engine.search("bbb"), vec![0, 0, 3]);
//! ```

mod batch;
pub mod config;
pub mod engine;
pub mod index;
pub mod trie;

pub use config::{DuplicatePolicy, EmptyPatternPolicy, PatternIndexConfig};
pub use engine::MatchEngine;
pub use index::{PatternIndex, PatternIndexBuilder};
pub use trie::TrieNode;
