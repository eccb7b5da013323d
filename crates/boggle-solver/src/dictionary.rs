// Dictionary ingestion: newline-delimited word lists into a trie.
//
// A line survives only if every byte is an ASCII letter. Survivors are
// upper-cased. Lines are split on raw bytes, so a list in a legacy 8-bit
// encoding loads fine; its accented entries are simply dropped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use boggle_core::Trie;
use log::debug;

use crate::DictionaryError;

/// Returns `true` if `line` consists only of ASCII letters.
///
/// The empty line passes this check; callers skip it separately.
pub fn is_ascii_word(line: &[u8]) -> bool {
    line.iter().all(u8::is_ascii_alphabetic)
}

/// Turn one raw line into a dictionary word.
///
/// Strips a trailing `\r`, then returns the upper-cased word, or `None` if
/// the line is blank or holds anything but ASCII letters.
pub fn normalize_line(line: &[u8]) -> Option<String> {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.is_empty() || !is_ascii_word(line) {
        return None;
    }
    Some(
        line.iter()
            .map(|&b| char::from(b.to_ascii_uppercase()))
            .collect(),
    )
}

/// Read every accepted word from `reader`, in file order.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>, DictionaryError> {
    let mut words = Vec::new();
    let mut skipped = 0usize;
    for line in reader.split(b'\n') {
        match normalize_line(&line?) {
            Some(word) => words.push(word),
            None => skipped += 1,
        }
    }
    debug!("read {} word(s), skipped {} line(s)", words.len(), skipped);
    Ok(words)
}

/// Build a trie from the word list in `reader`.
pub fn load_trie<R: BufRead>(reader: R) -> Result<Trie, DictionaryError> {
    let trie: Trie = read_words(reader)?.into_iter().collect();
    debug!("dictionary trie holds {} distinct word(s)", trie.len());
    Ok(trie)
}

/// Build a trie from the word list at `path`.
pub fn load_file(path: impl AsRef<Path>) -> Result<Trie, DictionaryError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DictionaryError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading dictionary from {}", path.display());
    load_trie(BufReader::new(file))
}
