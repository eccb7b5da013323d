// Trie: append-only string set over uppercase ASCII letters.
//
// Each node has 27 child slots: one per letter A-Z plus a terminal slot
// whose occupancy marks that the path from the root spells a complete word.

use std::fmt;

/// Number of letter slots per node (A-Z).
const LETTER_COUNT: usize = 26;

/// Slot index marking the end of a complete word.
const TERMINAL: usize = LETTER_COUNT;

/// Total number of child slots per node.
const SLOT_COUNT: usize = LETTER_COUNT + 1;

#[derive(Default)]
struct Node {
    children: [Option<Box<Node>>; SLOT_COUNT],
}

impl Node {
    #[inline]
    fn child(&self, slot: usize) -> Option<&Node> {
        self.children[slot].as_deref()
    }

    #[inline]
    fn is_terminal(&self) -> bool {
        self.children[TERMINAL].is_some()
    }
}

/// Map an uppercase ASCII letter to its child slot.
///
/// The range check keeps bytes just past `Z` off the terminal slot.
#[inline]
fn slot(byte: u8) -> usize {
    let index = usize::from(byte.wrapping_sub(b'A'));
    assert!(
        index < LETTER_COUNT,
        "trie alphabet is A-Z, got byte {byte:#04x}"
    );
    index
}

/// A dynamic set of strings that can test membership of both strings and
/// their prefixes.
///
/// Only uppercase ASCII letters are supported; any other byte panics, on
/// insertion and on lookup alike.
///
/// A trie is expensive to duplicate, so it does not implement `Clone`; hand
/// it over by value when moving from the build phase to the search phase.
#[derive(Default)]
pub struct Trie {
    root: Node,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no child slot of the root is populated.
    ///
    /// Inserting the empty string occupies the root's terminal slot, so a
    /// trie holding only `""` is not empty.
    pub fn is_empty(&self) -> bool {
        self.root.children.iter().all(Option::is_none)
    }

    /// Number of distinct words inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert `word`, creating any missing nodes along its path.
    ///
    /// Inserting a word that is already present changes nothing.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for byte in word.bytes() {
            node = &mut **node.children[slot(byte)].get_or_insert_with(Box::default);
        }
        if !node.is_terminal() {
            node.children[TERMINAL] = Some(Box::default());
            self.len += 1;
        }
    }

    /// Returns `true` if `word` was inserted. A word that is only a prefix
    /// of inserted words does not count.
    pub fn has_string(&self, word: &str) -> bool {
        self.walk(word).is_some_and(Node::is_terminal)
    }

    /// Returns `true` if some inserted word starts with `prefix`.
    ///
    /// The empty prefix always matches, even on an empty trie.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Follow `path` from the root, returning the node it ends on.
    fn walk(&self, path: &str) -> Option<&Node> {
        let mut node = &self.root;
        for byte in path.bytes() {
            node = node.child(slot(byte))?;
        }
        Some(node)
    }
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie").field("len", &self.len).finish_non_exhaustive()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
