//! Output orderings for a reconstructed chain.
//!
//! The engine hands back chain values in ascending order. Callers usually
//! want them laid out relative to the original input instead; see
//! [`OrderingPolicy::InputReversed`].

use std::collections::HashMap;

/// How the values of a chain are arranged in the returned sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderingPolicy {
    /// Walk the original input from last to first and keep each element that
    /// is still unclaimed in the chain's value multiset.
    #[default]
    InputReversed,
    /// Chain order as walked back from its end: largest value first.
    Chain,
    /// Smallest value first.
    Ascending,
}

impl OrderingPolicy {
    /// Arrange `ascending_chain` (as returned by the engine) for `input`.
    pub fn arrange(self, input: &[i64], ascending_chain: &[i64]) -> Vec<i64> {
        match self {
            OrderingPolicy::InputReversed => reverse_appearance(input, ascending_chain),
            OrderingPolicy::Chain => ascending_chain.iter().rev().copied().collect(),
            OrderingPolicy::Ascending => ascending_chain.to_vec(),
        }
    }
}

/// Members of `chain` in reverse order of their appearance in `input`.
///
/// Membership is by value and respects multiplicity: a value occurring `k`
/// times in `chain` claims at most `k` elements of `input`, taken from the
/// back.
pub fn reverse_appearance(input: &[i64], chain: &[i64]) -> Vec<i64> {
    let mut remaining: HashMap<i64, usize> = HashMap::with_capacity(chain.len());
    for &v in chain {
        *remaining.entry(v).or_insert(0) += 1;
    }
    let mut out = Vec::with_capacity(chain.len());
    for &v in input.iter().rev() {
        if let Some(count) = remaining.get_mut(&v) {
            if *count > 0 {
                *count -= 1;
                out.push(v);
            }
        }
    }
    out
}
