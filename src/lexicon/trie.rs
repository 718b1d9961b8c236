//! Frequency-weighted prefix tree over Unicode code points.

use std::collections::BTreeMap;

/// A single node of the lexicon trie.
///
/// Each node owns its children (the tree has a single owner per node and no
/// back-edges) and carries a word-end marker with an associated popularity
/// weight. The weight is meaningful only when `is_word` is set; on interior
/// nodes it stays at the default of `0.0`.
///
/// Children are kept in a `BTreeMap` so traversal order is deterministic,
/// which makes tie-breaking in the engines reproducible across runs.
#[derive(Debug, Clone)]
pub struct TrieNode {
    /// Stable numeric identity assigned at construction, used by the
    /// correction engine as a dedup key instead of memory addresses.
    id: u32,
    children: BTreeMap<char, TrieNode>,
    is_word: bool,
    frequency: f64,
}

impl TrieNode {
    fn new(id: u32) -> Self {
        TrieNode {
            id,
            children: BTreeMap::new(),
            is_word: false,
            frequency: 0.0,
        }
    }

    /// Get the stable numeric identity of this node.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Check whether the path to this node spells a complete indexed word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Get the popularity weight stored on this node (`0.0` unless it is a
    /// word end).
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Get the child node for the given character, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Iterate over the children in ascending character order.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(ch, node)| (*ch, node))
    }

    /// Get the number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// A lexicon index mapping words to popularity weights.
///
/// The index is built once in a single sequential pass and is immutable
/// afterwards. It has no interior mutability, so a built index is `Send +
/// Sync` and can serve any number of concurrent readers without locks.
///
/// Words are expected to arrive already normalized (trimmed, lower-cased) by
/// the lexicon source; see the [`loader`](crate::lexicon::loader) module.
#[derive(Debug, Clone)]
pub struct LexiconIndex {
    root: TrieNode,
    node_count: u32,
    word_count: usize,
}

impl LexiconIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        LexiconIndex {
            root: TrieNode::new(0),
            node_count: 1,
            word_count: 0,
        }
    }

    /// Insert a word with the given frequency.
    ///
    /// Walks or creates one child per character of `word` and marks the final
    /// node as a word end. Re-inserting an existing word overwrites its
    /// frequency (last write wins). Cost is proportional to the word length.
    pub fn insert(&mut self, word: &str, frequency: f64) {
        let mut node = &mut self.root;
        for ch in word.chars() {
            let next_id = self.node_count;
            let mut created = false;
            node = node.children.entry(ch).or_insert_with(|| {
                created = true;
                TrieNode::new(next_id)
            });
            if created {
                self.node_count += 1;
            }
        }
        if !node.is_word {
            self.word_count += 1;
        }
        node.is_word = true;
        node.frequency = frequency;
    }

    /// Look up the stored frequency of a word.
    ///
    /// Returns `None` when no path exists for `word` or the terminal node is
    /// not a word end. Absence is an ordinary outcome, not an error.
    pub fn lookup_frequency(&self, word: &str) -> Option<f64> {
        let node = self.node_at(word)?;
        node.is_word.then_some(node.frequency)
    }

    /// Check whether a word is indexed.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup_frequency(word).is_some()
    }

    /// Walk the trie along `prefix` and return the node it ends at, if the
    /// full prefix exists.
    pub fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in prefix.chars() {
            node = node.child(ch)?;
        }
        Some(node)
    }

    /// Get the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Get the number of indexed words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Get the total number of trie nodes, including the root.
    pub fn node_count(&self) -> u32 {
        self.node_count
    }

    /// Check whether the index holds no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl Default for LexiconIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut index = LexiconIndex::new();

        assert!(!index.contains("hello"));
        assert_eq!(index.lookup_frequency("hello"), None);
        assert_eq!(index.word_count(), 0);
        assert!(index.is_empty());

        index.insert("hello", 500.0);
        assert!(index.contains("hello"));
        assert_eq!(index.lookup_frequency("hello"), Some(500.0));
        assert_eq!(index.word_count(), 1);
        assert!(!index.is_empty());

        index.insert("help", 300.0);
        assert_eq!(index.word_count(), 2);
        assert_eq!(index.lookup_frequency("help"), Some(300.0));
    }

    #[test]
    fn test_prefix_is_not_a_word() {
        let mut index = LexiconIndex::new();
        index.insert("hello", 500.0);

        // "hel" has a path but no word-end marker
        assert!(index.node_at("hel").is_some());
        assert_eq!(index.lookup_frequency("hel"), None);
        assert_eq!(index.lookup_frequency("hellos"), None);
    }

    #[test]
    fn test_duplicate_insert_last_write_wins() {
        let mut index = LexiconIndex::new();
        index.insert("hello", 500.0);
        index.insert("hello", 7.0);

        assert_eq!(index.lookup_frequency("hello"), Some(7.0));
        assert_eq!(index.word_count(), 1);
    }

    #[test]
    fn test_node_ids_are_unique_and_stable() {
        let mut index = LexiconIndex::new();
        index.insert("ab", 1.0);
        index.insert("ac", 2.0);

        // root + a + b + c
        assert_eq!(index.node_count(), 4);

        let a = index.node_at("a").unwrap();
        let b = index.node_at("ab").unwrap();
        let c = index.node_at("ac").unwrap();
        assert_eq!(index.root().id(), 0);
        let mut ids = vec![a.id(), b.id(), c.id()];
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&0));

        // Re-inserting must not allocate new nodes or change identities
        let a_id = a.id();
        index.insert("ab", 9.0);
        assert_eq!(index.node_count(), 4);
        assert_eq!(index.node_at("a").unwrap().id(), a_id);
    }

    #[test]
    fn test_children_iterate_in_character_order() {
        let mut index = LexiconIndex::new();
        index.insert("cb", 1.0);
        index.insert("ca", 2.0);
        index.insert("cc", 3.0);

        let node = index.node_at("c").unwrap();
        let chars: Vec<char> = node.children().map(|(ch, _)| ch).collect();
        assert_eq!(chars, vec!['a', 'b', 'c']);
        assert_eq!(node.child_count(), 3);
    }

    #[test]
    fn test_unicode_words() {
        let mut index = LexiconIndex::new();
        index.insert("héllo", 10.0);
        index.insert("héllos", 20.0);

        assert_eq!(index.lookup_frequency("héllo"), Some(10.0));
        assert!(index.node_at("hé").is_some());
        assert_eq!(index.lookup_frequency("hello"), None);
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut index = LexiconIndex::new();
        index.insert("", 5.0);

        assert_eq!(index.lookup_frequency(""), Some(5.0));
        assert_eq!(index.node_count(), 1);
    }
}
