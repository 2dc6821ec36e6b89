use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in a trie.
///
/// Implemented for `char`, `u8`, `u16` and `u32`.
///
/// - `Copy`: edges store labels by value
/// - `Eq + Ord`: comparing and ordering edge labels (children are kept sorted)
/// - `Hash`: lets callers put symbols and words in hashed collections
/// - `Debug`: debug printing of nodes
///
/// [`Word`](TrieChar::Word) is the owned type a path of symbols is collected into when
/// words are returned from a query: `String` for `char`, `Vec<Self>` for integer symbols.
pub trait TrieChar: Copy + Eq + Ord + Hash + Debug {
    /// Owned word type produced by collecting queries.
    type Word: FromIterator<Self> + Debug;
}

impl TrieChar for char {
    type Word = String;
}

macro_rules! impl_sequence_char {
    ($($t:ty),*) => {
        $(
            impl TrieChar for $t {
                type Word = Vec<$t>;
            }
        )*
    };
}

impl_sequence_char!(u8, u16, u32);
