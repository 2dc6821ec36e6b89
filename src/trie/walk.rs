use std::iter::FusedIterator;

use smallvec::SmallVec;

use super::char_trait::TrieChar;
use super::children::TrieNode;
use super::word::WordBuf;

/// A node waiting to be visited, with the edge that leads to it.
struct Frame<'t, C: TrieChar> {
    /// Length of the word buffer at the parent.
    depth: usize,
    /// Edge label from the parent, `None` for the node the walk starts at.
    label: Option<C>,
    node: &'t TrieNode<C>,
}

/// Depth-first iterator over the words stored below a node.
///
/// Children are visited in ascending letter order, so words come out in lexicographic
/// order of their symbols. The walk keeps its own stack instead of recursing, and reuses a
/// single symbol buffer for the word under construction.
///
/// Created by [`Trie::iter`](super::Trie::iter) and
/// [`Trie::iter_prefix`](super::Trie::iter_prefix).
pub struct Words<'t, C: TrieChar> {
    stack: SmallVec<[Frame<'t, C>; 16]>,
    word: WordBuf<C>,
}

impl<'t, C: TrieChar> Words<'t, C> {
    /// Starts a walk at `start`, whose path from the root is `prefix`.
    ///
    /// A missing start node yields an empty walk.
    pub(crate) fn new(start: Option<&'t TrieNode<C>>, prefix: WordBuf<C>) -> Self {
        let depth = prefix.len();
        Words {
            stack: start
                .map(|node| Frame {
                    depth,
                    label: None,
                    node,
                })
                .into_iter()
                .collect(),
            word: prefix,
        }
    }

    /// Moves to the next node that ends a word. Returns false when the walk is done.
    ///
    /// After a `true` return, [`current`](Self::current) holds that word.
    pub(crate) fn advance(&mut self) -> bool {
        while let Some(Frame { depth, label, node }) = self.stack.pop() {
            self.word.truncate(depth);
            if let Some(label) = label {
                self.word.push(label);
            }
            let depth = self.word.len();
            // Pushed in reverse so the smallest letter is popped first.
            self.stack.extend(node.children().rev().map(|(label, child)| Frame {
                depth,
                label: Some(label),
                node: child,
            }));
            if node.is_word() {
                return true;
            }
        }
        false
    }

    /// Symbols of the word most recently reached by [`advance`](Self::advance).
    pub(crate) fn current(&self) -> &[C] {
        &self.word
    }
}

impl<C: TrieChar> Iterator for Words<'_, C> {
    type Item = C::Word;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance()
            .then(|| self.word.iter().copied().collect())
    }
}

impl<C: TrieChar> FusedIterator for Words<'_, C> {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::IntoWord;

    fn node_with(words: &[&str]) -> TrieNode<char> {
        let mut root = TrieNode::new();
        for word in words {
            let mut node = &mut root;
            for ch in word.chars() {
                node = node.child_or_insert(ch).0;
            }
            node.mark_word();
        }
        root
    }

    #[test]
    fn missing_start_is_empty() {
        let mut words = Words::<char>::new(None, "abc".collect_word());
        assert!(!words.advance());
        assert_eq!(words.next(), None);
    }

    #[test]
    fn start_node_is_emitted_first() {
        let root = node_with(&["ab", "abc", "abd"]);
        let start = root.descend("ab".chars());
        let words: Vec<String> = Words::new(start, "ab".collect_word()).collect();
        assert_eq!(words, vec!["ab", "abc", "abd"]);
    }

    #[test]
    fn depth_first_lexicographic() {
        let root = node_with(&["b", "ab", "a", "ba", "aab", "c"]);
        let words: Vec<String> = Words::new(Some(&root), WordBuf::new()).collect();
        assert_eq!(words, vec!["a", "aab", "ab", "b", "ba", "c"]);
    }

    #[test]
    fn buffer_is_rewound_between_branches() {
        let root = node_with(&["abcdef", "ax"]);
        let mut walk = Words::new(Some(&root), WordBuf::new());
        assert!(walk.advance());
        assert_eq!(walk.current(), &['a', 'b', 'c', 'd', 'e', 'f']);
        assert!(walk.advance());
        assert_eq!(walk.current(), &['a', 'x']);
        assert!(!walk.advance());
    }

    #[test]
    fn empty_word_at_root() {
        let root = node_with(&[""]);
        let words: Vec<String> = Words::new(Some(&root), WordBuf::new()).collect();
        assert_eq!(words, vec![String::new()]);
    }
}
