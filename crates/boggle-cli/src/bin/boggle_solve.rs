// boggle-solve: Find every dictionary word on Boggle boards.
//
// Boards are given as arguments, or read from stdin one per line. Each board
// is printed followed by its words, longest first:
//   S E R S
//   P A T G
//   ...
//   12 words
//   TAPERS
//   ...
//
// Usage:
//   boggle-solve [-d DICT_PATH] [OPTIONS] [BOARD...]
//
// Options:
//   -d, --dict-path PATH   Newline-delimited word list
//   -r, --rows N           Board rows (default: square board)
//   -c, --cols N           Board columns (default: square board)
//   -t, --threads N        Search threads (default: hardware parallelism)
//   -m, --min-len N        Shortest word to report (default: 3)
//   --json                 Print one JSON object per board
//   -v, --verbose          Debug logging
//   -h, --help             Print help

use std::io::{self, BufRead, Write};
use std::num::NonZeroUsize;

use boggle_solver::Solver;

fn print_help() {
    println!("boggle-solve: Find every dictionary word on Boggle boards.");
    println!();
    println!("Usage: boggle-solve [-d DICT_PATH] [OPTIONS] [BOARD...]");
    println!();
    println!("Boards are given as arguments or read from stdin, one per line.");
    println!("Letters are case-insensitive; Q stands for the QU tile.");
    println!();
    println!("Options:");
    println!("  -d, --dict-path PATH   Newline-delimited word list");
    println!("  -r, --rows N           Board rows (default: square board)");
    println!("  -c, --cols N           Board columns (default: square board)");
    println!("  -t, --threads N        Search threads (default: hardware parallelism)");
    println!("  -m, --min-len N        Shortest word to report (default: 3)");
    println!("  --json                 Print one JSON object per board");
    println!("  -v, --verbose          Debug logging");
    println!("  -h, --help             Print this help");
}

fn count_option(args: &mut Vec<String>, names: &[&str]) -> Option<usize> {
    let value = boggle_cli::take_option(args, names).unwrap_or_else(|e| boggle_cli::fatal(&e))?;
    Some(boggle_cli::parse_count(names[0], &value).unwrap_or_else(|e| boggle_cli::fatal(&e)))
}

fn solve_one(
    out: &mut impl Write,
    solver: &Solver,
    input: &str,
    rows: Option<usize>,
    cols: Option<usize>,
    json: bool,
) -> bool {
    let board = match boggle_cli::parse_board(input, rows, cols) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("error: {e}");
            return false;
        }
    };
    let words = boggle_cli::sorted_words(solver.solve(&board));

    if json {
        let report = boggle_cli::SolveReport::new(&board, words);
        match serde_json::to_string(&report) {
            Ok(line) => {
                let _ = writeln!(out, "{line}");
            }
            Err(e) => eprintln!("error: failed to encode result: {e}"),
        }
    } else {
        let _ = writeln!(out, "{board}");
        let _ = writeln!(out, "{} words", words.len());
        for word in &words {
            let _ = writeln!(out, "{word}");
        }
        let _ = writeln!(out);
    }
    true
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, mut args) = boggle_cli::parse_dict_path(&args);

    if boggle_cli::wants_help(&args) {
        print_help();
        return;
    }

    let json = boggle_cli::take_flag(&mut args, &["--json"]);
    let verbose = boggle_cli::take_flag(&mut args, &["-v", "--verbose"]);
    let rows = count_option(&mut args, &["--rows", "-r"]);
    let cols = count_option(&mut args, &["--cols", "-c"]);
    let threads = count_option(&mut args, &["--threads", "-t"]);
    let min_len = boggle_cli::take_option(&mut args, &["--min-len", "-m"])
        .and_then(|v| v.map(|v| boggle_cli::parse_min_len(&v)).transpose())
        .unwrap_or_else(|e| boggle_cli::fatal(&e));

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-')) {
        boggle_cli::fatal(&format!("unknown option {unknown} (see --help)"));
    }

    boggle_cli::init_logger(verbose);

    let mut solver =
        boggle_cli::load_solver(dict_path.as_deref()).unwrap_or_else(|e| boggle_cli::fatal(&e));
    solver.set_threads(threads.and_then(NonZeroUsize::new));
    if let Some(len) = min_len {
        solver.set_min_word_len(len);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut failed = false;

    if !args.is_empty() {
        for board in &args {
            failed |= !solve_one(&mut out, &solver, board, rows, cols, json);
        }
    } else {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    eprintln!("error reading stdin: {e}");
                    break;
                }
            };
            let board = line.trim();
            if board.is_empty() {
                continue;
            }
            failed |= !solve_one(&mut out, &solver, board, rows, cols, json);
        }
    }

    let _ = out.flush();
    if failed {
        std::process::exit(1);
    }
}
