/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Trie node and the compact child storage it is built from.
pub mod children;
/// Owned trie and its query operations.
pub mod owned;
/// Depth-first word iterator shared by the collecting queries.
pub mod walk;
/// Conversion of strings and sequences into symbol buffers.
pub mod word;
/// Loading a trie from a word list.
pub mod wordlist;

pub use char_trait::TrieChar;
pub use children::{ChildIter, TrieNode};
pub use owned::Trie;
pub use walk::Words;
pub use word::IntoWord;
pub use wordlist::{load_wordlist, read_wordlist};
