// Solver: the search-phase context.
//
// Owns the dictionary trie and a cache of neighbour tables keyed by grid
// dimensions. Construction ends the build phase: the trie is moved in and
// only ever handed out by shared reference, so the solver can be shared
// across threads and searched concurrently.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use boggle_core::{Board, NeighbourTable, Trie};
use hashbrown::HashMap;
use log::debug;

use crate::DictionaryError;
use crate::dictionary;
use crate::search::{self, MIN_WORD_LEN, SolveOptions, WordSet};

/// Search context owning a frozen dictionary.
///
/// Neighbour tables are built on first use for each board shape and reused
/// by later solves of the same shape.
pub struct Solver {
    trie: Trie,
    options: SolveOptions,
    tables: RwLock<HashMap<(usize, usize), Arc<NeighbourTable>>>,
}

impl Solver {
    /// Create a solver that searches against `trie`.
    pub fn new(trie: Trie) -> Self {
        Self {
            trie,
            options: SolveOptions::default(),
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Create a solver from already validated uppercase words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(words.into_iter().collect())
    }

    /// Create a solver from a newline-delimited word list on disk.
    ///
    /// See [`dictionary`] for which lines are accepted.
    pub fn from_dictionary_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        dictionary::load_file(path).map(Self::new)
    }

    /// The dictionary being searched.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Give the dictionary back, dropping the table cache.
    pub fn into_trie(self) -> Trie {
        self.trie
    }

    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Set the number of search threads. `None` uses the hardware parallelism.
    pub fn set_threads(&mut self, threads: Option<NonZeroUsize>) {
        self.options.threads = threads;
    }

    /// Set the shortest word length reported by later solves.
    ///
    /// Lengths below [`MIN_WORD_LEN`] are raised to it.
    pub fn set_min_word_len(&mut self, len: usize) {
        self.options.min_word_len = len.max(MIN_WORD_LEN);
    }

    /// Returns `true` if `word` is in the dictionary.
    pub fn is_word(&self, word: &str) -> bool {
        self.trie.has_string(word)
    }

    /// Returns `true` if some dictionary word starts with `prefix`.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.trie.has_prefix(prefix)
    }

    /// The neighbour table for a `rows` by `cols` grid, built on first request.
    pub fn neighbour_table(&self, rows: usize, cols: usize) -> Arc<NeighbourTable> {
        let key = (rows, cols);
        if let Some(table) = self
            .tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
        {
            return Arc::clone(table);
        }

        let mut tables = self.tables.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(tables.entry(key).or_insert_with(|| {
            debug!("building neighbour table for {rows}x{cols} grid");
            Arc::new(NeighbourTable::new(rows, cols))
        }))
    }

    /// Number of distinct board shapes with a cached neighbour table.
    pub fn cached_tables(&self) -> usize {
        self.tables
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Find every dictionary word on `board`.
    pub fn solve(&self, board: &Board) -> WordSet {
        let table = self.neighbour_table(board.rows(), board.cols());
        self.solve_with_table(board, &table)
    }

    /// Find every dictionary word on `board` using a caller-supplied table.
    ///
    /// # Panics
    ///
    /// Panics if `table` does not match the board's dimensions.
    pub fn solve_with_table(&self, board: &Board, table: &NeighbourTable) -> WordSet {
        search::solve_with(board, table, &self.trie, &self.options)
    }
}

impl std::fmt::Debug for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solver")
            .field("trie", &self.trie)
            .field("options", &self.options)
            .field("cached_tables", &self.cached_tables())
            .finish()
    }
}
