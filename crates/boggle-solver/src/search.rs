// Board search: trie-pruned DFS over paths, partitioned across threads.
//
// The per-cell search keeps an explicit stack of paths rather than
// recursing, so stack depth does not grow with board size. Each worker owns
// a contiguous range of start cells and a private output buffer; buffers are
// merged into the result set by the invoking thread after the join.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::thread;

use boggle_core::{Board, NeighbourTable, Trie};
use hashbrown::HashSet;
use log::{debug, trace};

/// Shortest word reported by a solve. Shorter dictionary entries are never
/// reported, even when they appear on the board.
pub const MIN_WORD_LEN: usize = 3;

/// Words found on a board. Order carries no meaning.
pub type WordSet = HashSet<String>;

/// Options controlling a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    /// Number of threads to search with. `None` uses the available hardware
    /// parallelism.
    pub threads: Option<NonZeroUsize>,
    /// Shortest word to report. Values below [`MIN_WORD_LEN`] are raised to
    /// it.
    pub min_word_len: usize,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            threads: None,
            min_word_len: MIN_WORD_LEN,
        }
    }
}

impl SolveOptions {
    /// Thread count these options ask for, before clamping to the board.
    pub fn requested_threads(&self) -> usize {
        self.threads
            .or_else(|| thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get)
    }
}

/// Find every word that starts on cell `start` and append it to `words`.
///
/// Duplicates are not removed: a word reachable along two different paths
/// from `start` is appended twice.
pub fn search_from(
    board: &Board,
    table: &NeighbourTable,
    trie: &Trie,
    start: usize,
    min_word_len: usize,
    words: &mut Vec<String>,
) {
    let mut paths: Vec<Vec<usize>> = vec![vec![start]];

    while let Some(path) = paths.pop() {
        let word = board.render(&path);
        if !trie.has_prefix(&word) {
            continue;
        }

        let Some(&last) = path.last() else {
            continue;
        };
        for &next in table.neighbours(last) {
            if !path.contains(&next) {
                let mut extended = Vec::with_capacity(path.len() + 1);
                extended.extend_from_slice(&path);
                extended.push(next);
                paths.push(extended);
            }
        }

        if word.len() >= min_word_len && trie.has_string(&word) {
            words.push(word);
        }
    }
}

/// Run [`search_from`] for every start cell in `cells`.
pub fn search_range(
    board: &Board,
    table: &NeighbourTable,
    trie: &Trie,
    cells: Range<usize>,
    min_word_len: usize,
    words: &mut Vec<String>,
) {
    for start in cells {
        search_from(board, table, trie, start, min_word_len, words);
    }
}

/// Split `cells` start cells into `threads` contiguous ranges.
///
/// Every range but the last holds `cells / threads` cells; the last range
/// absorbs the remainder. `threads` must be at least 1.
pub fn partition(cells: usize, threads: usize) -> Vec<Range<usize>> {
    debug_assert!(threads > 0, "cannot partition across zero threads");
    let per_thread = cells / threads;
    let mut ranges: Vec<Range<usize>> = (0..threads - 1)
        .map(|i| per_thread * i..per_thread * (i + 1))
        .collect();
    ranges.push(per_thread * (threads - 1)..cells);
    ranges
}

/// Find every dictionary word on `board`, using all available threads.
///
/// `table` must describe a grid with the board's dimensions. An empty trie
/// yields an empty set, as does a board too small to spell a word of
/// [`MIN_WORD_LEN`] letters (a `Q` tile counts for two).
pub fn solve(board: &Board, table: &NeighbourTable, trie: &Trie) -> WordSet {
    solve_with(board, table, trie, &SolveOptions::default())
}

/// Find every dictionary word on `board` with the given options.
///
/// Start cells are split into one contiguous range per thread. The calling
/// thread searches the last range itself while `threads - 1` scoped workers
/// search the rest; the thread count is clamped so that no worker gets an
/// empty range. There is no rebalancing between ranges.
///
/// # Panics
///
/// Panics if `table` was built for different dimensions than `board`, or if
/// a worker thread panics.
pub fn solve_with(
    board: &Board,
    table: &NeighbourTable,
    trie: &Trie,
    options: &SolveOptions,
) -> WordSet {
    assert!(
        board.rows() == table.rows() && board.cols() == table.cols(),
        "neighbour table is {}x{} but board is {}x{}",
        table.rows(),
        table.cols(),
        board.rows(),
        board.cols()
    );

    let cells = board.len();
    let threads = options.requested_threads().min(cells).max(1);
    let min_word_len = options.min_word_len.max(MIN_WORD_LEN);
    let ranges = partition(cells, threads);
    debug!(
        "solving {}x{} board on {} thread(s), {} start cell(s) per range",
        board.rows(),
        board.cols(),
        threads,
        cells / threads
    );

    let mut words = WordSet::new();
    let Some((own, delegated)) = ranges.split_last() else {
        return words;
    };

    thread::scope(|scope| {
        let workers: Vec<_> = delegated
            .iter()
            .cloned()
            .map(|range| {
                scope.spawn(move || {
                    let mut found = Vec::new();
                    search_range(board, table, trie, range.clone(), min_word_len, &mut found);
                    trace!("cells {range:?}: {} word(s)", found.len());
                    found
                })
            })
            .collect();

        let mut found = Vec::new();
        search_range(board, table, trie, own.clone(), min_word_len, &mut found);
        trace!("cells {own:?} (caller): {} word(s)", found.len());
        words.extend(found);

        for worker in workers {
            match worker.join() {
                Ok(found) => words.extend(found),
                Err(payload) => std::panic::resume_unwind(payload),
            }
        }
    });

    debug!("found {} distinct word(s)", words.len());
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie(words: &[&str]) -> Trie {
        words.iter().collect()
    }

    fn sorted(words: &WordSet) -> Vec<&str> {
        let mut v: Vec<&str> = words.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    fn single_threaded() -> SolveOptions {
        SolveOptions {
            threads: NonZeroUsize::new(1),
            ..SolveOptions::default()
        }
    }

    #[test]
    fn default_options() {
        let options = SolveOptions::default();
        assert_eq!(options.threads, None);
        assert_eq!(options.min_word_len, 3);
        assert!(options.requested_threads() >= 1);
    }

    #[test]
    fn partition_gives_remainder_to_last_range() {
        assert_eq!(partition(16, 3), vec![0..5, 5..10, 10..16]);
        assert_eq!(partition(16, 4), vec![0..4, 4..8, 8..12, 12..16]);
        assert_eq!(partition(16, 1), vec![0..16]);
        assert_eq!(partition(0, 1), vec![0..0]);
    }

    #[test]
    fn partition_covers_every_cell_once() {
        for cells in 0..40 {
            for threads in 1..=cells.max(1) {
                let ranges = partition(cells, threads);
                assert_eq!(ranges.len(), threads);
                let covered: Vec<usize> = ranges.into_iter().flatten().collect();
                assert_eq!(covered, (0..cells).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn search_from_reports_duplicates() {
        // Both B tiles lead from the first A to the second one.
        let board = Board::new(2, 2, *b"ABAB");
        let table = NeighbourTable::new(2, 2);
        let trie = trie(&["ABA"]);
        let mut words = Vec::new();
        search_from(&board, &table, &trie, 0, MIN_WORD_LEN, &mut words);
        assert_eq!(words, vec!["ABA", "ABA"]);
    }

    #[test]
    fn fully_connected_two_by_two() {
        // On a 2x2 grid every cell touches every other cell.
        let board = Board::new(2, 2, *b"ABCD");
        let table = NeighbourTable::new(2, 2);
        let trie = trie(&["AB", "ABC", "ABD"]);
        let words = solve_with(&board, &table, &trie, &single_threaded());
        assert_eq!(sorted(&words), vec!["ABC", "ABD"]);
    }

    #[test]
    fn line_limits_reachability() {
        // A-B-C-D in a row: D is not adjacent to B.
        let board = Board::new(1, 4, *b"ABCD");
        let table = NeighbourTable::new(1, 4);
        let trie = trie(&["AB", "ABC", "ABD", "DCB", "BCD"]);
        let words = solve(&board, &table, &trie);
        assert_eq!(sorted(&words), vec!["ABC", "BCD", "DCB"]);
    }

    #[test]
    fn short_words_are_never_reported() {
        let board = Board::new(2, 2, *b"ABCD");
        let table = NeighbourTable::new(2, 2);
        let trie = trie(&["A", "AB", "BA", "DC"]);
        assert!(solve(&board, &table, &trie).is_empty());
    }

    #[test]
    fn min_word_len_is_configurable() {
        let board = Board::new(2, 2, *b"ABCD");
        let table = NeighbourTable::new(2, 2);
        let trie = trie(&["AB", "ABC", "ABCD"]);
        let options = SolveOptions {
            min_word_len: 4,
            ..single_threaded()
        };
        let words = solve_with(&board, &table, &trie, &options);
        assert_eq!(sorted(&words), vec!["ABCD"]);
    }

    #[test]
    fn min_word_len_cannot_go_below_three() {
        let board = Board::new(2, 2, *b"ABCD");
        let table = NeighbourTable::new(2, 2);
        let trie = trie(&["A", "AB", "ABC"]);
        for min_word_len in [0, 1, 2] {
            let options = SolveOptions {
                min_word_len,
                ..single_threaded()
            };
            let words = solve_with(&board, &table, &trie, &options);
            assert_eq!(sorted(&words), vec!["ABC"], "min_word_len = {min_word_len}");
        }
    }

    #[test]
    fn tiles_are_not_reused() {
        let board = Board::new(1, 3, *b"ABC");
        let table = NeighbourTable::new(1, 3);
        let trie = trie(&["ABA", "CBC", "ABC"]);
        let words = solve(&board, &table, &trie);
        assert_eq!(sorted(&words), vec!["ABC"]);
    }

    #[test]
    fn qu_tile_renders_two_letters() {
        let board = Board::new(2, 2, *b"QITS");
        let table = NeighbourTable::new(2, 2);
        // "QIT" is not a word here; the Q tile always contributes "QU".
        let trie = trie(&["QUIT", "QUITS", "QIT", "SQUIT"]);
        let words = solve(&board, &table, &trie);
        assert_eq!(sorted(&words), vec!["QUIT", "QUITS", "SQUIT"]);
    }

    #[test]
    fn qu_alone_is_too_short() {
        let board = Board::new(1, 2, *b"QA");
        let table = NeighbourTable::new(1, 2);
        let trie = trie(&["QU", "QUA"]);
        let words = solve(&board, &table, &trie);
        assert_eq!(sorted(&words), vec!["QUA"]);
    }

    #[test]
    fn duplicates_across_start_cells_collapse() {
        // "ABA" starts on either A tile.
        let board = Board::new(1, 3, *b"ABA");
        let table = NeighbourTable::new(1, 3);
        let trie = trie(&["ABA"]);
        for threads in 1..=3 {
            let options = SolveOptions {
                threads: NonZeroUsize::new(threads),
                ..SolveOptions::default()
            };
            let words = solve_with(&board, &table, &trie, &options);
            assert_eq!(sorted(&words), vec!["ABA"], "threads = {threads}");
        }
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let board = Board::new(4, 4, *b"ABCDEFGHIJKLMNOP");
        let table = NeighbourTable::new(4, 4);
        assert!(solve(&board, &table, &Trie::new()).is_empty());
    }

    #[test]
    fn tiny_boards_find_nothing() {
        let trie = trie(&["A", "AB", "ABC"]);
        for (rows, cols, tiles) in [(0, 0, &b""[..]), (1, 1, &b"A"[..]), (1, 2, &b"AB"[..])] {
            let board = Board::new(rows, cols, tiles);
            let table = NeighbourTable::new(rows, cols);
            assert!(solve(&board, &table, &trie).is_empty());
        }
    }

    #[test]
    fn thread_counts_agree() {
        let board = Board::new(4, 4, *b"SERSPATGLINESERS");
        let table = NeighbourTable::new(4, 4);
        let trie = trie(&[
            "SEA", "SEAT", "PAT", "PATS", "TAP", "TAPS", "LINE", "LINES", "NET", "NETS",
            "SERS", "TEN", "PEA", "PEAS", "REST", "SET", "SETS", "GEL", "LEG", "ERA",
        ]);

        let expected = solve_with(&board, &table, &trie, &single_threaded());
        assert!(!expected.is_empty());
        for threads in [2, 3, 4, 7, 16, 64] {
            let options = SolveOptions {
                threads: NonZeroUsize::new(threads),
                ..SolveOptions::default()
            };
            assert_eq!(
                solve_with(&board, &table, &trie, &options),
                expected,
                "threads = {threads}"
            );
        }
    }

    #[test]
    #[should_panic(expected = "neighbour table is 3x3 but board is 2x2")]
    fn mismatched_table_panics() {
        let board = Board::new(2, 2, *b"ABCD");
        let table = NeighbourTable::new(3, 3);
        let _ = solve(&board, &table, &Trie::new());
    }
}
