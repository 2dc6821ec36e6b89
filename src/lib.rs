//! # libtrie
//!
//! An owned [trie](https://en.wikipedia.org/wiki/Trie) (prefix tree) for Rust, with exact
//! lookup, prefix queries, suffix queries and autocomplete.
//!
//! Every edge of the tree is labeled by one symbol, and the path from the root to a node
//! spells out a word prefix. Nodes are created on demand as words are inserted and are owned
//! by their parent, so the tree is freed together with the [`Trie`].
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char` (the default), `u8`, `u16` or `u32`;
//!   see [`TrieChar`](trie::TrieChar)
//! - **Deterministic**: children are kept sorted, so every query returns words in
//!   lexicographic order
//! - **Stack-safe**: traversal, clone, comparison, debug output and drop never recurse per
//!   tree level, so very long words are fine
//! - **Total**: no query fails; a miss is `false` or an empty vector
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::Trie;
//!
//! let trie: Trie = ["BAKE", "BAKED", "CAKE", "FAKE", "LAKE", "MAKE"].into_iter().collect();
//!
//! assert!(trie.search("CAKE"));
//! assert!(!trie.search("AKE"));
//! assert_eq!(trie.autocomplete("BAK"), vec!["BAKE", "BAKED"]);
//! assert_eq!(trie.ends_with("AKE"), vec!["BAKE", "CAKE", "FAKE", "LAKE", "MAKE"]);
//! ```
//!
//! ## Generic Usage
//!
//! The trie is generic over the edge label type:
//!
//! ```
//! use libtrie::Trie;
//!
//! let mut trie = Trie::<u8>::new();
//! trie.insert([1, 2, 3]);
//! trie.insert([1, 2, 4]);
//! trie.insert(vec![2, 3, 4]);
//!
//! assert!(trie.search([1, 2, 3]));
//! assert!(!trie.search([1, 2]));
//! assert_eq!(trie.starts_with([1, 2]), vec![vec![1, 2, 3], vec![1, 2, 4]]);
//! ```
//!
//! ## Word lists
//!
//! [`load_wordlist`] builds a `Trie<char>` from a text file with one word per line.

#![warn(missing_docs)]

pub mod error;
/// Core trie data structure: nodes, traversal and word lists.
pub mod trie;

pub use error::{Result, TrieError};
pub use trie::{load_wordlist, read_wordlist, IntoWord, Trie, TrieChar, TrieNode, Words};
