//! Character trie node.

use ahash::AHashMap;
use tinyvec::TinyVec;

/// A node of the pattern trie.
///
/// Every node corresponds to a prefix of at least one pattern. A node owns its
/// children exclusively; the whole tree is released together with the owning
/// [`PatternIndex`](crate::PatternIndex).
///
/// A node may be *terminal*, meaning one or more patterns end exactly here.
/// Under the default duplicate policy a terminal node carries exactly one
/// feature index. Only [`DuplicatePolicy::AllIndices`](crate::DuplicatePolicy::AllIndices)
/// produces nodes with several.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Positions of the patterns that end at this node, in insertion order.
    features: TinyVec<[usize; 1]>,
    /// Outgoing edges, keyed by symbol.
    children: AHashMap<u8, TrieNode>,
}

impl TrieNode {
    pub fn new() -> TrieNode {
        TrieNode::default()
    }

    /// Returns the child reached by `symbol`, or `None` when no pattern continues
    /// with that symbol. Never creates nodes.
    #[inline]
    pub fn child(&self, symbol: u8) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Returns the child reached by `symbol`, creating it if missing.
    pub(crate) fn child_or_insert(&mut self, symbol: u8) -> &mut TrieNode {
        self.children.entry(symbol).or_default()
    }

    /// Iterates over the outgoing edges in no particular order.
    pub fn children(&self) -> impl Iterator<Item = (u8, &TrieNode)> {
        self.children.iter().map(|(&symbol, node)| (symbol, node))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The feature index of the most recently inserted pattern ending here.
    #[inline]
    pub fn feature_index(&self) -> Option<usize> {
        self.features.last().copied()
    }

    /// All feature indices ending at this node.
    #[inline]
    pub fn feature_indices(&self) -> &[usize] {
        &self.features
    }

    pub fn is_terminal(&self) -> bool {
        !self.features.is_empty()
    }

    /// Replaces whatever tag the node had with `index`, returning the previous
    /// feature index.
    pub(crate) fn set_feature(&mut self, index: usize) -> Option<usize> {
        let previous = self.feature_index();
        self.features.clear();
        self.features.push(index);
        previous
    }

    /// Adds `index` next to any existing tags.
    pub(crate) fn add_feature(&mut self, index: usize) {
        self.features.push(index);
    }

    /// Number of nodes in the subtree rooted here, including this node.
    pub fn subtree_size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }
        count
    }

    /// Length of the longest path from this node to a leaf.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children.values().map(|child| (child, depth + 1)));
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_lookup_does_not_create() {
        let mut root = TrieNode::new();
        root.child_or_insert(b'a').child_or_insert(b'b');

        assert!(root.child(b'a').is_some());
        assert!(root.child(b'z').is_none());
        assert_eq!(root.child_count(), 1);
        assert_eq!(root.subtree_size(), 3);
        assert_eq!(root.height(), 2);
    }

    #[test]
    fn test_feature_tags() {
        let mut node = TrieNode::new();
        assert!(!node.is_terminal());
        assert_eq!(node.feature_index(), None);

        assert_eq!(node.set_feature(3), None);
        assert_eq!(node.set_feature(7), Some(3));
        assert_eq!(node.feature_indices(), &[7]);

        node.add_feature(9);
        assert_eq!(node.feature_index(), Some(9));
        assert_eq!(node.feature_indices(), &[7, 9]);
    }

    #[test]
    fn test_children_iteration() {
        let mut root = TrieNode::new();
        for symbol in [b'c', b'a', b'b'] {
            root.child_or_insert(symbol);
        }
        let mut symbols: Vec<u8> = root.children().map(|(s, _)| s).collect();
        symbols.sort_unstable();
        assert_eq!(symbols, b"abc");
    }
}
