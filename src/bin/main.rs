use abstractness_core::persistence::{load_from_disk, save_to_disk};
use abstractness_core::sample::sample_taxonomy;
use abstractness_core::AbstractnessEstimator;
use crossterm::style::Stylize;
use std::io::{stdin, stdout, Write};
use std::path::Path;

const DICTIONARY_PATH: &str = "abstractness_dictionary.bin";

fn main() {
    let path = Path::new(DICTIONARY_PATH);
    let taxonomy = match load_from_disk(path) {
        Ok(taxonomy) => taxonomy,
        Err(_) => {
            // First launch: fall back to the bundled taxonomy and compile
            // it to disk for the next run.
            let taxonomy = sample_taxonomy();
            if let Err(e) = save_to_disk(&taxonomy, path) {
                eprintln!("[WARN] Could not save dictionary: {}", e);
            }
            taxonomy
        }
    };
    let estimator = AbstractnessEstimator::new(taxonomy);

    println!("Lexical Abstractness Estimator. Type a word, 'exit' to quit.");
    println!("--------------------------------------------------------------");
    println!("Scores run from 0.0 (fully concrete) to 1.0 (fully abstract).");

    loop {
        print!("\n> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break; // EOF
        }
        let word = input.trim();

        match word {
            "exit" => break,
            "" => continue,
            word => {
                let score = estimator.estimate(word);
                let styled = if score < 0.5 {
                    format!("{:.3}", score).green()
                } else {
                    format!("{:.3}", score).blue()
                };
                println!("  {} -> {}", word, styled);
            }
        }
    }
}
