// Neighbour lookup table for an N by M grid.
//
// A pure function of the grid dimensions: the table never looks at tile
// contents, so one table serves every board with the same shape.

/// Most neighbours any cell can have (interior cells).
pub const MAX_NEIGHBOURS: usize = 8;

/// Neighbours of one cell, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Adjacent {
    cells: [usize; MAX_NEIGHBOURS],
    len: usize,
}

impl Adjacent {
    const EMPTY: Adjacent = Adjacent {
        cells: [0; MAX_NEIGHBOURS],
        len: 0,
    };

    #[inline]
    fn push(&mut self, cell: usize) {
        self.cells[self.len] = cell;
        self.len += 1;
    }

    #[inline]
    fn as_slice(&self) -> &[usize] {
        &self.cells[..self.len]
    }
}

/// Precomputed adjacency for an N by M grid under the 8-neighbour rule.
///
/// Cell indices are row-major (`row * cols + col`). Interior cells have 8
/// neighbours, edge cells 5 and corner cells 3; degenerate grids (a single
/// row or column) have fewer. Neighbours of each cell are listed in
/// row-major order.
///
/// The table is immutable once built and holds no per-board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighbourTable {
    rows: usize,
    cols: usize,
    adjacent: Vec<Adjacent>,
}

impl NeighbourTable {
    /// Build the table for a grid with `rows` rows and `cols` columns.
    ///
    /// For each cell, the 3 by 3 block of row/column offsets around it is
    /// clipped to the grid, and the cell itself is left out.
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut adjacent = vec![Adjacent::EMPTY; rows * cols];

        for (i, cell) in adjacent.iter_mut().enumerate() {
            let (row, col) = (i / cols, i % cols);
            let min_row = row.saturating_sub(1);
            let max_row = (row + 1).min(rows - 1);
            let min_col = col.saturating_sub(1);
            let max_col = (col + 1).min(cols - 1);

            for r in min_row..=max_row {
                for c in min_col..=max_col {
                    let index = r * cols + c;
                    if index != i {
                        cell.push(index);
                    }
                }
            }
        }

        Self {
            rows,
            cols,
            adjacent,
        }
    }

    /// Number of rows in the grid this table describes.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid this table describes.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells covered by the table.
    pub fn len(&self) -> usize {
        self.adjacent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacent.is_empty()
    }

    /// Neighbours of cell `index`.
    ///
    /// `index` must be below [`len`](Self::len); this is only checked in
    /// debug builds (release builds still panic on the slice access).
    #[inline]
    pub fn neighbours(&self, index: usize) -> &[usize] {
        debug_assert!(
            index < self.adjacent.len(),
            "cell {index} out of range for a {}x{} grid",
            self.rows,
            self.cols
        );
        self.adjacent[index].as_slice()
    }
}
