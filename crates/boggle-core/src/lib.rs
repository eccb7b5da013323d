//! Core data structures for the Boggle solver.
//!
//! # Architecture
//!
//! - [`trie`] -- Append-only string set with membership and prefix queries
//! - [`neighbours`] -- Precomputed 8-neighbour adjacency for an N by M grid
//! - [`board`] -- Row-major tile buffer and the `Q` to `QU` rendering rule
//!
//! Everything here is plain data with no interior mutability, so a built
//! [`Trie`] and a [`NeighbourTable`] can be shared across search threads by
//! reference.

pub mod board;
pub mod neighbours;
pub mod trie;

pub use board::Board;
pub use neighbours::NeighbourTable;
pub use trie::Trie;
