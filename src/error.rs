//! Error types for loading word lists.
//!
//! Trie operations themselves never fail: a missing word is `false` and an unmatched
//! prefix or suffix is an empty vector. Errors only come from reading word lists, and are
//! represented by [`TrieError`].
//!
//! # Examples
//!
//! ```
//! use libtrie::{read_wordlist, TrieError};
//!
//! let err = read_wordlist(&b"good\n\xffbad\n"[..]).unwrap_err();
//! assert!(matches!(err, TrieError::Encoding { line: 2 }));
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a word list into a trie.
#[derive(Error, Debug)]
pub enum TrieError {
    /// The word-list file could not be opened.
    #[error("failed to open word list {}", .path.display())]
    Open {
        /// Path that was passed to the loader.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Reading from an opened source failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line is not valid UTF-8.
    #[error("word list line {line} is not valid UTF-8")]
    Encoding {
        /// 1-based line number.
        line: usize,
    },
}

/// Result type alias for word-list loading.
pub type Result<T> = std::result::Result<T, TrieError>;
