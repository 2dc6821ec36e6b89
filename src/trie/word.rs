use smallvec::SmallVec;

use super::char_trait::TrieChar;

/// Inline capacity of a collected word before it spills to the heap.
pub(crate) const WORD_INLINE: usize = 32;

/// A word collected into a symbol buffer.
pub type WordBuf<C> = SmallVec<[C; WORD_INLINE]>;

/// Trait for types that can be used as a word, prefix or suffix in trie operations.
///
/// Implemented for common string and sequence types so that [`Trie::insert`](super::Trie::insert)
/// and the query methods accept them directly without manual conversion.
pub trait IntoWord<C: TrieChar> {
    /// Collects this word into a symbol buffer.
    fn collect_word(self) -> WordBuf<C>;
}

// String types → char

impl IntoWord<char> for &str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &&str {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> WordBuf<char> {
        self.chars().collect()
    }
}

// Generic sequence types → C

impl<C: TrieChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> WordBuf<C> {
        self.iter().copied().collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn str_splits_into_code_points() {
        let word = "naïve".collect_word();
        assert_eq!(word.as_slice(), &['n', 'a', 'ï', 'v', 'e']);
    }

    #[test]
    fn combining_marks_stay_separate_symbols() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT is two symbols
        let word = "e\u{301}".collect_word();
        assert_eq!(word.len(), 2);
    }

    #[test]
    fn long_words_spill_to_heap() {
        let long = "x".repeat(WORD_INLINE * 2);
        let word = long.as_str().collect_word();
        assert_eq!(word.len(), WORD_INLINE * 2);
        assert!(word.spilled());
    }

    #[test]
    fn sequences_keep_their_order() {
        assert_eq!([3u8, 1, 2].collect_word().as_slice(), &[3, 1, 2]);
        assert_eq!(vec![7u32, 8].collect_word().as_slice(), &[7, 8]);
        let empty: &[u16] = &[];
        assert!(empty.collect_word().is_empty());
    }
}
