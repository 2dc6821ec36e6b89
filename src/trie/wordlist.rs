use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use super::owned::Trie;
use crate::error::{Result, TrieError};

/// Byte-order mark some editors write at the start of UTF-8 files.
const BOM: char = '\u{feff}';

/// Builds a trie from a word-list file.
///
/// Reads words from a UTF-8 text file (one word per line). A leading byte-order mark is
/// ignored, trailing whitespace is trimmed, empty lines are skipped and lines starting with
/// '#' are treated as comments. Words may appear in any order and more than once.
///
/// # Examples
///
/// ```no_run
/// use libtrie::load_wordlist;
///
/// let trie = load_wordlist("dictionary.txt").unwrap();
/// println!("{:?}", trie.autocomplete("tri"));
/// ```
pub fn load_wordlist(path: impl AsRef<Path>) -> Result<Trie<char>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TrieError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let trie = read_wordlist(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        words = trie.len(),
        nodes = trie.node_count(),
        "loaded word list"
    );
    Ok(trie)
}

/// Builds a trie from a buffered reader, with the same line rules as [`load_wordlist`].
///
/// # Examples
///
/// ```
/// use libtrie::read_wordlist;
///
/// let trie = read_wordlist("# fruit\napple\n\ncherry\n".as_bytes()).unwrap();
/// assert_eq!(trie.len(), 2);
/// assert!(trie.search("cherry"));
/// ```
pub fn read_wordlist<R: BufRead>(mut reader: R) -> Result<Trie<char>> {
    let mut trie = Trie::new();
    let mut lines = 0;
    let mut skipped = 0;

    // Reuse one buffer for every line. Lines are read as bytes so that an encoding error
    // can be reported with its line number.
    let mut buf = Vec::with_capacity(80);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lines += 1;
        let mut line =
            std::str::from_utf8(&buf).map_err(|_| TrieError::Encoding { line: lines })?;
        if lines == 1 {
            line = line.strip_prefix(BOM).unwrap_or(line);
        }
        let word = line.trim_end();
        if word.is_empty() || is_comment(word) {
            skipped += 1;
            continue;
        }
        trie.insert(word);
    }
    trace!(lines, skipped, words = trie.len(), "read word list");
    Ok(trie)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
