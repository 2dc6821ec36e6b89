use std::fmt;

use tracing::trace;

use super::char_trait::TrieChar;
use super::children::TrieNode;
use super::walk::Words;
use super::word::IntoWord;

/// A prefix tree that owns all of its nodes.
///
/// Each node is owned by its parent and the root by the `Trie`, so the whole tree is
/// dropped with it. Words are sequences of symbols; for the default `char` symbol type each
/// Unicode code point is one edge.
///
/// Collecting queries ([`starts_with`](Trie::starts_with), [`autocomplete`](Trie::autocomplete),
/// [`ends_with`](Trie::ends_with)) return words in lexicographic order of their symbols.
/// A query that matches nothing returns `false` or an empty vector; no operation fails.
///
/// # Examples
///
/// ```
/// use libtrie::Trie;
///
/// let mut trie: Trie = Trie::new();
/// for word in ["apple", "banana", "cherry", "date"] {
///     trie.insert(word);
/// }
///
/// assert!(trie.search("banana"));
/// assert!(!trie.search("ban"));
/// assert_eq!(trie.starts_with("a"), vec!["apple"]);
/// assert_eq!(trie.ends_with("e"), vec!["apple", "date"]);
/// assert!(trie.starts_with("z").is_empty());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Trie<C: TrieChar = char> {
    root: TrieNode<C>,
    len: usize,
    nodes: usize,
}

impl<C: TrieChar> Default for Trie<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TrieChar> Trie<C> {
    /// Creates an empty trie: a root with no children that does not end a word.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::new(),
            len: 0,
            nodes: 1,
        }
    }

    /// Returns the number of distinct words in the trie.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes, including the root.
    pub fn node_count(&self) -> usize {
        self.nodes
    }

    /// Returns a reference to the root node.
    ///
    /// Use [`get()`](TrieNode::get), [`is_word()`](TrieNode::is_word) and
    /// [`children()`](TrieNode::children) to traverse the tree by hand.
    pub fn root(&self) -> &TrieNode<C> {
        &self.root
    }

    /// Inserts a word, creating the nodes along its path that don't exist yet.
    ///
    /// Returns `true` if the word was added, `false` if it was already present, in which
    /// case the trie is left unchanged. The empty word marks the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let mut trie: Trie = Trie::new();
    /// assert!(trie.insert("FAKE"));
    /// assert!(!trie.insert("FAKE")); // already present
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        let mut node = &mut self.root;
        for &ch in word.iter() {
            let (child, created) = node.child_or_insert(ch);
            self.nodes += usize::from(created);
            node = child;
        }
        let added = node.mark_word();
        self.len += usize::from(added);
        added
    }

    /// Returns true if `word` was inserted.
    ///
    /// A word that only exists as the prefix of a longer inserted word is not found.
    pub fn search(&self, word: impl IntoWord<C>) -> bool {
        self.find(word).is_some_and(TrieNode::is_word)
    }

    /// Returns true if at least one inserted word starts with `prefix`.
    ///
    /// Every prefix of an inserted word qualifies, including the empty prefix of a non-empty
    /// trie and the word itself.
    pub fn contains_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        self.find(prefix).is_some()
    }

    /// Returns the node reached by following `path` from the root.
    pub fn find(&self, path: impl IntoWord<C>) -> Option<&TrieNode<C>> {
        self.root.descend(path.collect_word())
    }

    /// Returns all inserted words that start with `prefix`, including `prefix` itself if it
    /// was inserted.
    ///
    /// If no word has that prefix, the result is empty.
    pub fn starts_with(&self, prefix: impl IntoWord<C>) -> Vec<C::Word> {
        self.iter_prefix(prefix).collect()
    }

    /// Completes `prefix` to every inserted word it begins. Same result as
    /// [`starts_with`](Trie::starts_with).
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::Trie;
    ///
    /// let trie: Trie = ["BAKE", "BAKED", "BAKER", "CAKE"].into_iter().collect();
    /// assert_eq!(trie.autocomplete("BAK"), vec!["BAKE", "BAKED", "BAKER"]);
    /// assert!(trie.autocomplete("M").is_empty());
    /// ```
    pub fn autocomplete(&self, prefix: impl IntoWord<C>) -> Vec<C::Word> {
        self.starts_with(prefix)
    }

    /// Returns all inserted words whose trailing symbols equal `suffix`.
    ///
    /// A prefix tree offers no shortcut for suffixes: this walks every word in the trie and
    /// filters, so the cost grows with the size of the whole trie rather than with the number
    /// of matches.
    pub fn ends_with(&self, suffix: impl IntoWord<C>) -> Vec<C::Word> {
        let suffix = suffix.collect_word();
        let mut words = self.iter();
        let mut matches = Vec::new();
        let mut scanned = 0usize;
        while words.advance() {
            scanned += 1;
            let word = words.current();
            if word.ends_with(&suffix) {
                matches.push(word.iter().copied().collect());
            }
        }
        trace!(scanned, matched = matches.len(), "suffix scan");
        matches
    }

    /// Iterates over every word in the trie in lexicographic order.
    pub fn iter(&self) -> Words<'_, C> {
        Words::new(Some(&self.root), Default::default())
    }

    /// Iterates lazily over the words that [`starts_with`](Trie::starts_with) would return.
    pub fn iter_prefix(&self, prefix: impl IntoWord<C>) -> Words<'_, C> {
        let prefix = prefix.collect_word();
        let start = self.root.descend(prefix.iter().copied());
        Words::new(start, prefix)
    }
}

// Lists words rather than nodes, so deep tries print without recursing.
impl<C: TrieChar> fmt::Debug for Trie<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("len", &self.len)
            .field("nodes", &self.nodes)
            .field("words", &WordList(self))
            .finish()
    }
}

struct WordList<'t, C: TrieChar>(&'t Trie<C>);

impl<C: TrieChar> fmt::Debug for WordList<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<'t, C: TrieChar> IntoIterator for &'t Trie<C> {
    type Item = C::Word;
    type IntoIter = Words<'t, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: TrieChar, W: IntoWord<C>> Extend<W> for Trie<C> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, words: I) {
        for word in words {
            self.insert(word);
        }
    }
}

impl<C: TrieChar, W: IntoWord<C>> FromIterator<W> for Trie<C> {
    fn from_iter<I: IntoIterator<Item = W>>(words: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(words);
        trie
    }
}
