//! Brute-force occurrence counting, used as the reference result in tests.

/// Counts the (possibly overlapping) start positions at which `pattern` occurs
/// in `query`. The empty pattern is reported as zero occurrences.
pub fn count_occurrences(pattern: &[u8], query: &[u8]) -> u32 {
    if pattern.is_empty() || pattern.len() > query.len() {
        return 0;
    }
    query
        .windows(pattern.len())
        .filter(|window| *window == pattern)
        .count() as u32
}

/// Counts every pattern in `query`, in pattern order.
pub fn count_all<P: AsRef<[u8]>>(patterns: &[P], query: &[u8]) -> Vec<u32> {
    patterns
        .iter()
        .map(|pattern| count_occurrences(pattern.as_ref(), query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_occurrences() {
        assert_eq!(count_occurrences(b"aa", b"aaa"), 2);
        assert_eq!(count_occurrences(b"ab", b"abab"), 2);
        assert_eq!(count_occurrences(b"abc", b"ab"), 0);
        assert_eq!(count_occurrences(b"", b"abc"), 0);
    }

    #[test]
    fn test_count_all() {
        assert_eq!(count_all(&["a", "ab", "b"], b"ab"), vec![1, 1, 1]);
    }
}
