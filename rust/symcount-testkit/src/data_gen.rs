//! Data generation utilities for testing.
//!
//! Sequences are drawn over SAX-like alphabets (`a`, `b`, `c`, ...), which is the
//! shape of input the pattern index sees in practice.

use std::collections::HashSet;

/// Returns the first `size` lowercase letters, the usual SAX alphabet.
///
/// # Panics
///
/// Panics if `size` is zero or larger than 26.
pub fn sax_alphabet(size: usize) -> Vec<u8> {
    assert!((1..=26).contains(&size), "alphabet size {size} out of range");
    (b'a'..).take(size).collect()
}

/// Generates a random sequence of `len` symbols drawn uniformly from `alphabet`.
pub fn random_sequence(rng: &mut fastrand::Rng, alphabet: &[u8], len: usize) -> String {
    assert!(!alphabet.is_empty());
    (0..len)
        .map(|_| alphabet[rng.usize(..alphabet.len())] as char)
        .collect()
}

/// Generates `count` random queries with lengths in `min_len..=max_len`.
pub fn random_queries(
    rng: &mut fastrand::Rng,
    alphabet: &[u8],
    count: usize,
    min_len: usize,
    max_len: usize,
) -> Vec<String> {
    (0..count)
        .map(|_| {
            let len = rng.usize(min_len..=max_len);
            random_sequence(rng, alphabet, len)
        })
        .collect()
}

/// Generates up to `count` distinct non-empty patterns with lengths in
/// `1..=max_len`.
///
/// Fewer patterns are returned when the alphabet cannot supply `count` distinct
/// strings within a bounded number of attempts.
pub fn distinct_patterns(
    rng: &mut fastrand::Rng,
    alphabet: &[u8],
    count: usize,
    max_len: usize,
) -> Vec<String> {
    assert_ne!(max_len, 0);
    let mut seen = HashSet::new();
    let mut patterns = Vec::with_capacity(count);
    let mut attempts = 0;
    while patterns.len() < count && attempts < count * 20 {
        attempts += 1;
        let len = rng.usize(1..=max_len);
        let pattern = random_sequence(rng, alphabet, len);
        if seen.insert(pattern.clone()) {
            patterns.push(pattern);
        }
    }
    patterns
}

/// Picks random substrings of `source` to use as patterns, so that searches
/// against related queries produce non-zero counts.
pub fn sampled_patterns(
    rng: &mut fastrand::Rng,
    source: &str,
    count: usize,
    max_len: usize,
) -> Vec<String> {
    if source.is_empty() {
        return Vec::new();
    }
    let mut seen = HashSet::new();
    (0..count)
        .filter_map(|_| {
            let start = rng.usize(..source.len());
            let len = rng.usize(1..=max_len.min(source.len() - start));
            let pattern = &source[start..start + len];
            seen.insert(pattern.to_string()).then(|| pattern.to_string())
        })
        .collect()
}
