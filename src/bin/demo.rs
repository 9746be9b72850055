// Scores the canned demonstration vocabulary against the bundled taxonomy.
// Run with: cargo run --bin abstractness_demo
// src/bin/demo.rs
use abstractness_core::sample::sample_taxonomy;
use abstractness_core::{AbstractnessEstimator, Taxonomy};

fn main() {
    let estimator = AbstractnessEstimator::new(sample_taxonomy());

    println!("=Usage example=\n");
    print_group(&estimator, "Concrete examples", &["dog", "cat", "cake"]);
    print_group(
        &estimator,
        "Semi-abstract examples",
        &["spring", "mountain", "line"],
    );
    print_group(
        &estimator,
        "Abstract examples",
        &["peace", "justice", "freedom"],
    );
    print_group(
        &estimator,
        "NOTE: unknown words are considered concrete",
        &["hoge", "dsfijf", "!!??"],
    );
}

fn print_group(estimator: &AbstractnessEstimator<Taxonomy>, title: &str, words: &[&str]) {
    println!("{}", title);
    for word in words {
        println!("  {} {:.3}", word, estimator.estimate(word));
    }
    println!();
}
