//! Divisibility chains over a sorted working copy.
//!
//! Layers are the positions of the ascending-sorted input. Layer `j` may
//! precede layer `i > j` when `sorted[i]` is a multiple of `sorted[j]`.
//! Because divisibility is transitive and the copy is sorted, every chain the
//! engine reconstructs is pairwise divisible.

use crate::traits::ChainProblem;

/// Divisibility chain instance.
///
/// Values are expected to be positive. A zero anywhere but the first layer
/// panics on the modulo; negative values give unspecified chains.
#[derive(Clone, Debug)]
pub struct DivisibleChain {
    sorted: Vec<i64>,
}

impl DivisibleChain {
    /// Build the instance from `input`; the caller's slice is left untouched.
    pub fn new(input: &[i64]) -> Self {
        let mut sorted = input.to_vec();
        sorted.sort_unstable();
        Self { sorted }
    }

    /// The ascending working copy.
    pub fn sorted(&self) -> &[i64] {
        &self.sorted
    }
}

impl ChainProblem for DivisibleChain {
    type Value = i64;

    fn num_layers(&self) -> usize {
        self.sorted.len()
    }

    fn value(&self, layer: usize) -> &i64 {
        &self.sorted[layer]
    }

    fn extends(&self, prev: usize, next: usize) -> bool {
        self.sorted[next] % self.sorted[prev] == 0
    }
}

/// Whether `values`, taken in ascending order, form a divisibility chain.
///
/// Empty and single-element sequences are chains.
pub fn is_divisible_chain(values: &[i64]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .all(|w| w[0] != 0 && w[1] % w[0] == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChainEngine;

    #[test]
    fn sorts_a_copy() {
        let input = vec![8, 2, 4];
        let problem = DivisibleChain::new(&input);
        assert_eq!(problem.sorted(), &[2, 4, 8]);
        assert_eq!(input, vec![8, 2, 4]);
    }

    #[test]
    fn powers_of_two_form_one_chain() {
        let problem = DivisibleChain::new(&[16, 1, 4, 2, 8]);
        let engine = ChainEngine::new(problem);
        let (length, path) = engine.run();
        assert_eq!(length, 5);
        assert_eq!(engine.problem().values_along(&path), vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn first_maximal_end_is_chosen() {
        // Both {1,2} and {1,3} have length 2; the end at layer 1 (value 2) comes first.
        let engine = ChainEngine::new(DivisibleChain::new(&[1, 2, 3]));
        let (length, path) = engine.run();
        assert_eq!(length, 2);
        assert_eq!(path, vec![0, 1]);
    }

    #[test]
    fn chain_check() {
        assert!(is_divisible_chain(&[]));
        assert!(is_divisible_chain(&[7]));
        assert!(is_divisible_chain(&[8, 2, 4]));
        assert!(is_divisible_chain(&[3, 3, 9]));
        assert!(!is_divisible_chain(&[2, 3]));
        assert!(!is_divisible_chain(&[0, 4]));
    }
}
