use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::mem;

use super::char_trait::TrieChar;

/// A compact representation of the children of a TrieNode that doesn't allocate a vector
/// until there are at least two children.
///
/// Edges are kept sorted by label in every variant, so iteration order is the ascending
/// symbol order and two tries holding the same words compare equal.
pub(crate) enum Children<C: TrieChar> {
    /// No children.
    None,
    /// Exactly one child (letter, node).
    One(Box<(C, TrieNode<C>)>),
    /// Two or more children, sorted by letter.
    Many(Vec<(C, TrieNode<C>)>),
}

impl<C: TrieChar> Default for Children<C> {
    fn default() -> Self {
        Children::None
    }
}

impl<C: TrieChar> Children<C> {
    /// Gets the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, &TrieNode<C>)> {
        match self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some((child.0, &child.1)),
                _ => None,
            },
            Children::Many(children) => children.get(index).map(|(c, n)| (*c, n)),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Wraps edges that are already sorted by letter.
    fn from_sorted(mut edges: Vec<(C, TrieNode<C>)>) -> Self {
        match edges.len() {
            0 => Children::None,
            1 => edges
                .pop()
                .map_or(Children::None, |edge| Children::One(Box::new(edge))),
            _ => Children::Many(edges),
        }
    }

    /// Locates `letter`: `Ok(index)` if present, otherwise `Err(index)` where it would be
    /// inserted to keep the edges sorted.
    fn position(&self, letter: C) -> Result<usize, usize> {
        match self {
            Children::None => Err(0),
            Children::One(child) => match child.0.cmp(&letter) {
                Ordering::Equal => Ok(0),
                Ordering::Less => Err(1),
                Ordering::Greater => Err(0),
            },
            Children::Many(children) => children.binary_search_by(|(c, _)| c.cmp(&letter)),
        }
    }

    /// Inserts an edge at `pos`, which must come from a failed [`position`](Self::position).
    fn insert_at(&mut self, pos: usize, letter: C, node: TrieNode<C>) {
        *self = match mem::take(self) {
            Children::None => Children::One(Box::new((letter, node))),
            Children::One(child) => {
                let mut children = Vec::with_capacity(2);
                children.push(*child);
                children.insert(pos, (letter, node));
                Children::Many(children)
            }
            Children::Many(mut children) => {
                children.insert(pos, (letter, node));
                Children::Many(children)
            }
        };
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut TrieNode<C>> {
        match self {
            Children::None => None,
            Children::One(child) => (index == 0).then_some(&mut child.1),
            Children::Many(children) => children.get_mut(index).map(|(_, n)| n),
        }
    }
}

/// An iterator over the children of a TrieNode, in ascending letter order.
#[derive(Clone)]
pub struct ChildIter<'t, C: TrieChar> {
    children: &'t Children<C>,
    front: usize,
    back: usize,
}

impl<'t, C: TrieChar> Iterator for ChildIter<'t, C> {
    type Item = (C, &'t TrieNode<C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let next_child = self.children.get(self.front);
        self.front += 1;
        next_child
    }

    /// Since we know the exact size, we can do better than the default implementation.
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<C: TrieChar> DoubleEndedIterator for ChildIter<'_, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.children.get(self.back)
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}

impl<C: TrieChar> FusedIterator for ChildIter<'_, C> {}

/// A node in the prefix tree.
///
/// Every node is exclusively owned by its parent; the root is owned by the
/// [`Trie`](super::Trie).
///
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack, so they work
/// on arbitrarily deep trees. `Debug` only shows this node's flag and edge labels.
pub struct TrieNode<C: TrieChar> {
    children: Children<C>,
    word: bool,
}

impl<C: TrieChar> Default for TrieNode<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates an empty node that does not end a word.
    pub fn new() -> Self {
        TrieNode {
            children: Children::None,
            word: false,
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<&TrieNode<C>> {
        match &self.children {
            Children::None => None,
            Children::One(child) => (child.0 == letter).then_some(&child.1),
            Children::Many(children) => children
                .binary_search_by(|(c, _)| c.cmp(&letter))
                .ok()
                .map(|i| &children[i].1),
        }
    }

    /// Follows `path` from this node and returns the node it ends at, if every edge exists.
    #[inline]
    pub fn descend<I: IntoIterator<Item = C>>(&self, path: I) -> Option<&TrieNode<C>> {
        path.into_iter().try_fold(self, |node, ch| node.get(ch))
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        ChildIter {
            children: &self.children,
            front: 0,
            back: self.children.len(),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Returns the child for `letter`, creating an empty one if needed.
    ///
    /// The flag is true when a node was created.
    pub(crate) fn child_or_insert(&mut self, letter: C) -> (&mut TrieNode<C>, bool) {
        let (index, created) = match self.children.position(letter) {
            Ok(index) => (index, false),
            Err(index) => {
                self.children.insert_at(index, letter, TrieNode::new());
                (index, true)
            }
        };
        let child = self
            .children
            .get_mut(index)
            .expect("child was located or inserted at this index");
        (child, created)
    }

    /// Marks this node as the end of a word. Returns false if it already was.
    pub(crate) fn mark_word(&mut self) -> bool {
        !mem::replace(&mut self.word, true)
    }
}

/// A node being cloned, with the children still to visit and the clones finished so far.
struct CloneFrame<'t, C: TrieChar> {
    label: Option<C>,
    source: &'t TrieNode<C>,
    rest: ChildIter<'t, C>,
    done: Vec<(C, TrieNode<C>)>,
}

impl<'t, C: TrieChar> CloneFrame<'t, C> {
    fn new(label: Option<C>, source: &'t TrieNode<C>) -> Self {
        CloneFrame {
            label,
            source,
            rest: source.children(),
            done: Vec::with_capacity(source.child_count()),
        }
    }
}

// Post-order: a node is built once all of its children have been cloned.
impl<C: TrieChar> Clone for TrieNode<C> {
    fn clone(&self) -> Self {
        let mut stack = vec![CloneFrame::new(None, self)];
        loop {
            let frame = stack.last_mut().expect("root frame is the last to finish");
            if let Some((label, child)) = frame.rest.next() {
                stack.push(CloneFrame::new(Some(label), child));
                continue;
            }
            let CloneFrame {
                label,
                source,
                done,
                ..
            } = stack.pop().expect("frame was just inspected");
            let node = TrieNode {
                children: Children::from_sorted(done),
                word: source.word,
            };
            match (label, stack.last_mut()) {
                (Some(label), Some(parent)) => parent.done.push((label, node)),
                _ => return node,
            }
        }
    }
}

// Children are sorted, so equal tries have equal edges in the same positions.
impl<C: TrieChar> PartialEq for TrieNode<C> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.word != b.word || a.child_count() != b.child_count() {
                return false;
            }
            for ((ca, na), (cb, nb)) in a.children().zip(b.children()) {
                if ca != cb {
                    return false;
                }
                pending.push((na, nb));
            }
        }
        true
    }
}

impl<C: TrieChar> Eq for TrieNode<C> {}

impl<C: TrieChar> fmt::Debug for TrieNode<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<C> = self.children().map(|(c, _)| c).collect();
        f.debug_struct("TrieNode")
            .field("word", &self.word)
            .field("children", &labels)
            .finish()
    }
}

// Dropping the default way recurses once per level, so a single very long word could
// exhaust the stack. Detach children onto a heap stack instead.
impl<C: TrieChar> Drop for TrieNode<C> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending = vec![mem::take(&mut self.children)];
        while let Some(children) = pending.pop() {
            match children {
                Children::None => {}
                Children::One(child) => {
                    let (_, mut node) = *child;
                    pending.push(mem::take(&mut node.children));
                }
                Children::Many(nodes) => {
                    for (_, mut node) in nodes {
                        pending.push(mem::take(&mut node.children));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn labels(n: &TrieNode<char>) -> Vec<char> {
        n.children().map(|(c, _)| c).collect()
    }

    #[test]
    fn no_children() {
        let n = TrieNode::<char>::new();
        assert_eq!(n.children().next(), None);
        assert_eq!(n.child_count(), 0);
        assert!(!n.is_word());
    }

    #[test]
    fn one_child() {
        let mut n = TrieNode::new();
        let (_, created) = n.child_or_insert('a');
        assert!(created);
        let mut children = n.children();
        assert_eq!(children.next(), Some(('a', &TrieNode::new())));
        assert_eq!(children.next(), None);
        assert_eq!(n.child_count(), 1);
    }

    #[test]
    fn existing_child_is_reused() {
        let mut n = TrieNode::new();
        n.child_or_insert('a').0.mark_word();
        let (child, created) = n.child_or_insert('a');
        assert!(!created);
        assert!(child.is_word());
        assert_eq!(n.child_count(), 1);
    }

    #[test]
    fn children_stay_sorted() {
        let mut n = TrieNode::new();
        for ch in ['m', 'c', 'x', 'a', 'n'] {
            n.child_or_insert(ch);
        }
        assert_eq!(labels(&n), vec!['a', 'c', 'm', 'n', 'x']);
        assert_eq!(n.child_count(), 5);
    }

    #[test]
    fn second_child_before_first() {
        let mut n = TrieNode::new();
        n.child_or_insert('b');
        n.child_or_insert('a');
        assert_eq!(labels(&n), vec!['a', 'b']);
    }

    #[test]
    fn get_finds_every_child() {
        let mut n = TrieNode::new();
        for ch in "trie".chars() {
            n.child_or_insert(ch).0.mark_word();
        }
        for ch in "trie".chars() {
            assert!(n.get(ch).is_some_and(TrieNode::is_word));
        }
        assert_eq!(n.get('z'), None);
    }

    #[test]
    fn reverse_iteration() {
        let mut n = TrieNode::new();
        for ch in ['b', 'a', 'c'] {
            n.child_or_insert(ch);
        }
        let rev: Vec<char> = n.children().rev().map(|(c, _)| c).collect();
        assert_eq!(rev, vec!['c', 'b', 'a']);

        let mut it = n.children();
        assert_eq!(it.len(), 3);
        assert_eq!(it.next().map(|(c, _)| c), Some('a'));
        assert_eq!(it.next_back().map(|(c, _)| c), Some('c'));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next().map(|(c, _)| c), Some('b'));
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn mark_word_reports_change() {
        let mut n = TrieNode::<u8>::new();
        assert!(n.mark_word());
        assert!(!n.mark_word());
        assert!(n.is_word());
    }

    #[test]
    fn descend_follows_path() {
        let mut root = TrieNode::new();
        let (a, _) = root.child_or_insert('a');
        let (b, _) = a.child_or_insert('b');
        b.mark_word();
        assert!(root.descend(['a', 'b']).is_some_and(TrieNode::is_word));
        assert!(root.descend(['a']).is_some_and(|n| !n.is_word()));
        assert_eq!(root.descend(['b']), None);
        assert_eq!(root.descend([]), Some(&root));
    }

    #[test]
    fn a_thousand_children() {
        let mut n = TrieNode::new();
        let letters: Vec<char> = (0..).filter_map(std::char::from_u32).take(1000).collect();
        for &ch in letters.iter().rev() {
            n.child_or_insert(ch);
        }
        let mut children = n.children();
        let cmp_child = TrieNode::new();
        for ch in letters {
            assert_eq!(children.next(), Some((ch, &cmp_child)));
        }
        assert_eq!(children.next(), None);
        assert_eq!(n.child_count(), 1000);
    }

    #[test]
    fn clone_keeps_branches() {
        let mut root = TrieNode::new();
        for word in ["to", "tea", "ted", "ten", "i", "in", "inn"] {
            let mut node = &mut root;
            for ch in word.chars() {
                node = node.child_or_insert(ch).0;
            }
            node.mark_word();
        }
        let mut copy = root.clone();
        assert_eq!(copy, root);
        assert_eq!(labels(&copy), vec!['i', 't']);
        assert!(copy.descend("inn".chars()).is_some_and(TrieNode::is_word));
        assert!(copy.descend("te".chars()).is_some_and(|n| !n.is_word()));

        copy.child_or_insert('t').0.child_or_insert('e').0.mark_word();
        assert_ne!(copy, root);
    }

    #[test]
    fn nodes_differ_by_label_or_flag() {
        let mut a = TrieNode::new();
        a.child_or_insert('a');
        let mut b = TrieNode::new();
        b.child_or_insert('b');
        assert_ne!(a, b);

        let mut c = TrieNode::new();
        c.child_or_insert('a').0.mark_word();
        assert_ne!(a, c);
    }

    #[test]
    fn debug_shows_flag_and_labels() {
        let mut n = TrieNode::new();
        n.child_or_insert('b');
        n.child_or_insert('a');
        n.mark_word();
        assert_eq!(
            format!("{n:?}"),
            "TrieNode { word: true, children: ['a', 'b'] }"
        );
    }

    #[test]
    fn deep_chain_clones_and_compares() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..200_000 {
            node = node.child_or_insert(7u8).0;
        }
        node.mark_word();

        let copy = root.clone();
        assert!(copy == root);

        let mut other = root.clone();
        let mut node = &mut other;
        while node.child_count() > 0 {
            node = node.child_or_insert(7).0;
        }
        node.child_or_insert(8);
        assert!(other != root);
    }

    #[test]
    fn deep_chain_drops_without_overflow() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..200_000 {
            node = node.child_or_insert(0u8).0;
        }
        node.mark_word();
        drop(root);
    }
}
