// End-to-end run: load a word list, solve a handful of boards, print results.
use std::time::Instant;

use boggle_solver::{Board, Solver};

fn main() {
    let dict_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "/usr/share/dict/words".to_string());

    let started = Instant::now();
    let solver = Solver::from_dictionary_file(&dict_path).expect("Failed to load dictionary");
    println!(
        "Loaded {} words from {} in {:?}\n",
        solver.trie().len(),
        dict_path,
        started.elapsed()
    );

    let boards = [
        "SERSPATGLINESERS",
        "QESTUITSIETORTAE",
        "ABCDEFGHIJKLMNOP",
        "RSCLSDEIAEGNTRPIAESOLMIDC",
    ];

    for tiles in &boards {
        let board = Board::square(*tiles).expect("board must be square");
        let started = Instant::now();
        let mut words: Vec<String> = solver.solve(&board).into_iter().collect();
        let elapsed = started.elapsed();
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        println!("{board}");
        println!("  {} words in {:?}", words.len(), elapsed);
        for word in words.iter().take(10) {
            println!("    {word}");
        }
        if words.len() > 10 {
            println!("    ... ({} more)", words.len() - 10);
        }
        println!();
    }
}
