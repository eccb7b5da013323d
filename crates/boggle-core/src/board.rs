// Board: a fixed-size grid of uppercase ASCII tiles in row-major order.
//
// The board carries tile data only. Search state lives in the solver.

use std::fmt;

/// Tile that renders as the two letters `QU`.
pub const QU_TILE: u8 = b'Q';

/// An N by M Boggle board.
///
/// Tiles must be uppercase ASCII letters; the `QU` die is stored as the
/// single byte `Q` and expanded by [`render`](Self::render). The board does
/// not validate its contents. Out-of-range accessors are a caller error that
/// debug builds report with an assertion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    tiles: Box<[u8]>,
}

impl Board {
    /// Build a `rows` by `cols` board from row-major tiles.
    ///
    /// `tiles` must hold exactly `rows * cols` uppercase letters.
    pub fn new(rows: usize, cols: usize, tiles: impl Into<Vec<u8>>) -> Self {
        let tiles = tiles.into().into_boxed_slice();
        debug_assert_eq!(
            tiles.len(),
            rows * cols,
            "a {rows}x{cols} board needs {} tiles",
            rows * cols
        );
        Self { rows, cols, tiles }
    }

    /// Build a square board, inferring the side from the number of tiles.
    ///
    /// Returns `None` if the tile count is not a perfect square.
    pub fn square(tiles: impl Into<Vec<u8>>) -> Option<Self> {
        let tiles = tiles.into();
        let side = tiles.len().isqrt();
        if side * side != tiles.len() {
            return None;
        }
        Some(Self::new(side, side, tiles))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of tiles on the board.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Tile at `row`, `col`.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        debug_assert!(
            row < self.rows && col < self.cols,
            "({row}, {col}) is outside a {}x{} board",
            self.rows,
            self.cols
        );
        self.tiles[row * self.cols + col]
    }

    /// Tile at row-major `index`.
    #[inline]
    pub fn cell_at(&self, index: usize) -> u8 {
        debug_assert!(
            index < self.tiles.len(),
            "index {index} is outside a {}x{} board",
            self.rows,
            self.cols
        );
        self.tiles[index]
    }

    /// Tiles of row `i`.
    pub fn row(&self, i: usize) -> &[u8] {
        debug_assert!(i < self.rows, "row {i} is outside a {}-row board", self.rows);
        &self.tiles[i * self.cols..(i + 1) * self.cols]
    }

    /// Spell out the word formed by following `path` across the board.
    ///
    /// Each `Q` tile contributes `QU`.
    pub fn render(&self, path: &[usize]) -> String {
        let mut word = String::with_capacity(path.len() + 2);
        for &index in path {
            let tile = self.cell_at(index);
            word.push(char::from(tile));
            if tile == QU_TILE {
                word.push('U');
            }
        }
        word
    }
}

impl fmt::Display for Board {
    /// One row per line, tiles separated by spaces, with `Q` shown as `Qu`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            if i > 0 {
                writeln!(f)?;
            }
            let row = self.row(i);
            for (j, &tile) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                let label = if tile == QU_TILE {
                    String::from("Qu")
                } else {
                    char::from(tile).to_string()
                };
                if j + 1 < row.len() {
                    write!(f, "{label:<2}")?;
                } else {
                    f.write_str(&label)?;
                }
            }
        }
        Ok(())
    }
}
