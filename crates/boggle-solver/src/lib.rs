//! Word search over Boggle boards.
//!
//! Dictionary words are loaded into a [`Trie`] once (the build phase), then
//! boards are searched against the frozen trie, possibly from several threads
//! at a time (the search phase). [`Solver`] ties the two phases together: it
//! takes ownership of the trie, so no insertion can race with a search.
//!
//! # Architecture
//!
//! - [`dictionary`] -- Word-list ingestion (ASCII filter, upper-casing)
//! - [`search`] -- Per-cell pruned DFS and the partitioned parallel driver
//! - [`handle`] -- [`Solver`], the context owning the trie and table cache
//!
//! ```
//! use boggle_solver::{Board, Solver};
//!
//! let solver = Solver::from_words(["QUIT", "QUITE", "TIE"]);
//! let board = Board::square("QITE").unwrap();
//! let words = solver.solve(&board);
//! assert!(words.contains("QUIT"));
//! assert!(words.contains("QUITE"));
//! assert!(words.contains("TIE"));
//! ```

use std::io;
use std::path::PathBuf;

pub mod dictionary;
pub mod handle;
pub mod search;

pub use boggle_core::{Board, NeighbourTable, Trie};
pub use handle::Solver;
pub use search::{MIN_WORD_LEN, SolveOptions, WordSet, solve, solve_with};

/// Error type for dictionary loading.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to open dictionary {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read dictionary: {0}")]
    Read(#[from] io::Error),
}
