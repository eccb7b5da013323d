// boggle-cli: shared utilities for CLI tools.

use std::path::PathBuf;
use std::process;

use boggle_solver::{Board, DictionaryError, MIN_WORD_LEN, Solver, WordSet};
use log::{LevelFilter, info};
use serde::Serialize;

/// Environment variable naming a word list file.
const DICT_ENV: &str = "BOGGLE_DICT_PATH";

/// Word list file name looked up in the user's `~/.boggle` directory.
const USER_DICT: &str = "words.txt";

/// Word list file name looked up in the current directory.
const LOCAL_DICT: &str = "dict.list";

/// Initialize logging for the CLI tools.
///
/// Logs at `Info` by default and at `Debug` with `verbose`. `RUST_LOG`, when
/// set, overrides both.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (e.g. from tests) is harmless.
    let _ = builder.try_init();
}

/// Search for a word list and build a [`Solver`] from it.
///
/// Search order:
/// 1. `dict_path` argument (if provided)
/// 2. `BOGGLE_DICT_PATH` environment variable
/// 3. `~/.boggle/words.txt`
/// 4. `/usr/share/dict/words`
/// 5. `dict.list` in the current working directory
pub fn load_solver(dict_path: Option<&str>) -> Result<Solver, String> {
    let search_paths = build_search_paths(dict_path);

    for path in &search_paths {
        if path.is_file() {
            let solver = Solver::from_dictionary_file(path)
                .map_err(|e: DictionaryError| e.to_string())?;
            info!(
                "loaded {} words from {}",
                solver.trie().len(),
                path.display()
            );
            return Ok(solver);
        }
    }

    Err(format!(
        "could not find a word list in any of the search paths:\n{}",
        search_paths
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of files to try as the word list.
fn build_search_paths(dict_path: Option<&str>) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = dict_path {
        paths.push(PathBuf::from(p));
    }

    if let Ok(env_path) = std::env::var(DICT_ENV) {
        paths.push(PathBuf::from(env_path));
    }

    if let Some(home) = home_dir() {
        paths.push(home.join(".boggle").join(USER_DICT));
    }

    paths.push(PathBuf::from("/usr/share/dict/words"));

    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(LOCAL_DICT));
    }

    paths
}

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Remove `names` and the value following it from `args`.
///
/// Accepts both `--name VALUE` and `--name=VALUE` for long names. Returns
/// the last value given, or an error if a flag has no value.
pub fn take_option(args: &mut Vec<String>, names: &[&str]) -> Result<Option<String>, String> {
    let mut value = None;
    let mut remaining = Vec::with_capacity(args.len());
    let mut iter = std::mem::take(args).into_iter();

    while let Some(arg) = iter.next() {
        if names.contains(&arg.as_str()) {
            match iter.next() {
                Some(v) => value = Some(v),
                None => return Err(format!("{arg} requires a value")),
            }
        } else if let Some(v) = names
            .iter()
            .filter(|n| n.starts_with("--"))
            .find_map(|n| arg.strip_prefix(n).and_then(|rest| rest.strip_prefix('=')))
        {
            value = Some(v.to_string());
        } else {
            remaining.push(arg);
        }
    }

    *args = remaining;
    Ok(value)
}

/// Remove every occurrence of the boolean flag `names` from `args`,
/// returning whether any was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Parse a `--dict-path=PATH` or `-d PATH` argument from command line args.
///
/// Returns `(dict_path, remaining_args)`.
pub fn parse_dict_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut remaining = args.to_vec();
    match take_option(&mut remaining, &["--dict-path", "-d"]) {
        Ok(dict_path) => (dict_path, remaining),
        Err(e) => fatal(&e),
    }
}

/// Parse a positive integer option value.
pub fn parse_count(name: &str, value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{name} expects a positive integer, got {value:?}")),
    }
}

/// Parse a `--min-len` value. Words shorter than [`MIN_WORD_LEN`] are never
/// reported, so smaller values are rejected.
pub fn parse_min_len(value: &str) -> Result<usize, String> {
    let len = parse_count("--min-len", value)?;
    if len < MIN_WORD_LEN {
        return Err(format!("--min-len must be at least {MIN_WORD_LEN}, got {len}"));
    }
    Ok(len)
}

/// Build a board from user input.
///
/// Letters are upper-cased and whitespace is ignored, so `"abcd"`,
/// `"AB CD"` and `"ab\ncd"` all give the same 2x2 board. With no explicit
/// dimensions the board must be square.
pub fn parse_board(input: &str, rows: Option<usize>, cols: Option<usize>) -> Result<Board, String> {
    let tiles: Vec<u8> = input
        .bytes()
        .filter(|b| !b.is_ascii_whitespace())
        .map(|b| b.to_ascii_uppercase())
        .collect();

    if let Some(bad) = tiles.iter().find(|b| !b.is_ascii_uppercase()) {
        return Err(format!(
            "board {input:?} contains {:?}; only ASCII letters are allowed",
            char::from(*bad)
        ));
    }

    if tiles.is_empty() {
        return Err("board is empty".to_string());
    }

    let (rows, cols) = match (rows, cols) {
        (Some(r), Some(c)) => (r, c),
        (Some(r), None) if r > 0 && tiles.len() % r == 0 => (r, tiles.len() / r),
        (None, Some(c)) if c > 0 && tiles.len() % c == 0 => (tiles.len() / c, c),
        (None, None) => {
            return Board::square(tiles.clone()).ok_or_else(|| {
                format!(
                    "board {input:?} has {} letters, which is not a square; pass --rows/--cols",
                    tiles.len()
                )
            });
        }
        _ => {
            return Err(format!(
                "board {input:?} has {} letters, which does not fit the given dimensions",
                tiles.len()
            ));
        }
    };

    match rows.checked_mul(cols) {
        Some(cells) if cells == tiles.len() => {}
        Some(cells) => {
            return Err(format!(
                "board {input:?} has {} letters but a {rows}x{cols} board needs {cells}",
                tiles.len()
            ));
        }
        None => return Err(format!("a {rows}x{cols} board is too large")),
    }
    Ok(Board::new(rows, cols, tiles))
}

/// Order words longest first, then alphabetically.
pub fn sorted_words(words: WordSet) -> Vec<String> {
    let mut words: Vec<String> = words.into_iter().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words
}

/// JSON shape printed by `boggle-solve --json`.
#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub board: String,
    pub rows: usize,
    pub cols: usize,
    pub count: usize,
    pub words: Vec<String>,
}

impl SolveReport {
    pub fn new(board: &Board, words: Vec<String>) -> Self {
        Self {
            board: board.tiles().iter().map(|&b| char::from(b)).collect(),
            rows: board.rows(),
            cols: board.cols(),
            count: words.len(),
            words,
        }
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
