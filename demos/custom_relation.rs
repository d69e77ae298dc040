//! Example: plugging a different relation into the chain engine.
//!
//! Words chain when each one is a prefix of the next.
//!
//! Run with:
//! `cargo run --example custom_relation`

use divchain::{Bracketed, ChainEngine, ChainProblem};

struct PrefixChain {
    words: Vec<&'static str>,
}

impl PrefixChain {
    fn new(mut words: Vec<&'static str>) -> Self {
        // A prefix is never longer than the word it starts.
        words.sort_by_key(|w| w.len());
        Self { words }
    }
}

impl ChainProblem for PrefixChain {
    type Value = &'static str;

    fn num_layers(&self) -> usize {
        self.words.len()
    }

    fn value(&self, layer: usize) -> &Self::Value {
        &self.words[layer]
    }

    fn extends(&self, prev: usize, next: usize) -> bool {
        self.words[next].starts_with(self.words[prev])
    }
}

fn main() {
    let problem = PrefixChain::new(vec!["card", "ca", "cart", "c", "car", "cards", "dog"]);
    let engine = ChainEngine::new(problem);

    let (length, path) = engine.run();
    let words = engine.problem().values_along(&path);

    println!("Longest prefix chain has {length} words:");
    println!("  {}", Bracketed(words.as_slice()));
}
