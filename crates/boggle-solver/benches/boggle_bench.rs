// Criterion benchmarks for boggle-solver.
//
// Dictionary-backed benchmarks need a word list. Set BOGGLE_DICT_PATH to a
// newline-delimited file, or have /usr/share/dict/words installed. If neither
// is found those benchmarks print a message and run no-op iterations.
//
// Run:
//   cargo bench -p boggle-solver
//   BOGGLE_DICT_PATH=/path/to/words.txt cargo bench -p boggle-solver

use std::path::PathBuf;

use boggle_solver::{Board, Solver, Trie, dictionary};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn find_dictionary() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("BOGGLE_DICT_PATH") {
        let path = PathBuf::from(path);
        if path.is_file() {
            return Some(path);
        }
    }
    let system = PathBuf::from("/usr/share/dict/words");
    if system.is_file() {
        return Some(system);
    }
    None
}

fn load_words() -> Option<Vec<String>> {
    let path = find_dictionary()?;
    let file = std::fs::File::open(&path).ok()?;
    dictionary::read_words(std::io::BufReader::new(file)).ok()
}

/// Boards of uniformly random letters, seeded so runs are comparable.
fn random_boards(side: usize, count: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(0x5EED_B0661E);
    (0..count)
        .map(|_| {
            let tiles: Vec<u8> = (0..side * side).map(|_| b'A' + rng.gen_range(0..26u8)).collect();
            Board::new(side, side, tiles)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Create and drop an empty trie.
fn bench_trie_creation(c: &mut Criterion) {
    c.bench_function("trie_creation", |b| {
        b.iter(|| std::hint::black_box(Trie::new()));
    });
}

/// Insert a single word into a fresh trie.
fn bench_trie_single_insertion(c: &mut Criterion) {
    c.bench_function("trie_single_insertion", |b| {
        b.iter(|| {
            let mut trie = Trie::new();
            trie.insert(std::hint::black_box("HELLO"));
            trie
        });
    });
}

/// Build a trie from the whole dictionary.
fn bench_trie_dictionary_insertion(c: &mut Criterion) {
    let Some(words) = load_words() else {
        eprintln!("[bench_trie_dictionary_insertion] no dictionary found, skipping (set BOGGLE_DICT_PATH)");
        c.bench_function("trie_dictionary_insertion (skipped)", |b| b.iter(|| {}));
        return;
    };

    let mut group = c.benchmark_group("trie_dictionary_insertion");
    group.sample_size(10);
    group.bench_function(format!("{}_words", words.len()), |b| {
        b.iter(|| words.iter().collect::<Trie>());
    });
    group.finish();
}

/// Look up a short word, a long word, and every dictionary word.
fn bench_trie_lookup(c: &mut Criterion) {
    let Some(words) = load_words() else {
        eprintln!("[bench_trie_lookup] no dictionary found, skipping (set BOGGLE_DICT_PATH)");
        c.bench_function("trie_lookup (skipped)", |b| b.iter(|| {}));
        return;
    };
    let trie: Trie = words.iter().collect();

    c.bench_function("trie_short_lookup", |b| {
        b.iter(|| std::hint::black_box(trie.has_string(std::hint::black_box("THE"))));
    });
    c.bench_function("trie_long_lookup", |b| {
        b.iter(|| {
            std::hint::black_box(trie.has_string(std::hint::black_box("ELECTROENCEPHALOGRAPHS")))
        });
    });
    c.bench_function("trie_dictionary_lookup", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(trie.has_string(word));
            }
        });
    });
}

/// Solve random square boards of increasing size.
fn bench_solve_random(c: &mut Criterion) {
    let Some(words) = load_words() else {
        eprintln!("[bench_solve_random] no dictionary found, skipping (set BOGGLE_DICT_PATH)");
        c.bench_function("solve_random (skipped)", |b| b.iter(|| {}));
        return;
    };
    let solver = Solver::from_words(&words);

    let mut group = c.benchmark_group("solve_random");
    group.sample_size(20);
    for side in [2, 4, 8, 16, 32] {
        let boards = random_boards(side, 32);
        let mut next = 0;
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side}x{side}")),
            &boards,
            |b, boards| {
                b.iter(|| {
                    next = (next + 1) % boards.len();
                    std::hint::black_box(solver.solve(&boards[next]))
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_trie_creation,
    bench_trie_single_insertion,
    bench_trie_dictionary_insertion,
    bench_trie_lookup,
    bench_solve_random,
);
criterion_main!(benches);
