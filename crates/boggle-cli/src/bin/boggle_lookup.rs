// boggle-lookup: Check words and prefixes against the dictionary.
//
// Reads words from stdin (one per line) and reports, for each:
//   W: word    (a dictionary word)
//   P: word    (not a word, but some word starts with it)
//   N: word    (neither)
//
// Input is upper-cased before the lookup. Lines with anything other than
// ASCII letters are reported as N.
//
// Usage:
//   boggle-lookup [-d DICT_PATH]

use std::io::{self, BufRead, Write};

use boggle_solver::dictionary;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (dict_path, mut args) = boggle_cli::parse_dict_path(&args);

    if boggle_cli::wants_help(&args) {
        println!("boggle-lookup: Check words and prefixes against the dictionary.");
        println!();
        println!("Usage: boggle-lookup [-d DICT_PATH]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  W: word    (dictionary word)");
        println!("  P: word    (prefix of a dictionary word)");
        println!("  N: word    (neither)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Newline-delimited word list");
        println!("  -v, --verbose          Debug logging");
        println!("  -h, --help             Print this help");
        return;
    }

    let verbose = boggle_cli::take_flag(&mut args, &["-v", "--verbose"]);
    boggle_cli::init_logger(verbose);

    let solver =
        boggle_cli::load_solver(dict_path.as_deref()).unwrap_or_else(|e| boggle_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let tag = match dictionary::normalize_line(word.as_bytes()) {
            Some(key) if solver.is_word(&key) => 'W',
            Some(key) if solver.is_prefix(&key) => 'P',
            _ => 'N',
        };
        let _ = writeln!(out, "{tag}: {word}");
    }
}
