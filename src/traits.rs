//! Core trait definitions for layered chain problems.
//!
//! To run a "longest chain" DP through [`ChainEngine`](crate::ChainEngine),
//! implement [`ChainProblem`] for a struct that owns the instance data
//! (typically a sorted working copy of the input).
//!
//! The layering follows the usual table-filling order:
//! - Layers are positions `0..T` of the working sequence.
//! - Layer `i` may be preceded in a chain by any layer `j < i` for which
//!   [`ChainProblem::extends`] holds.
//! - The engine fills one length/predecessor entry per layer, so the work for
//!   layer `i` is `O(i)` relation checks.

/// Trait for a layered longest-chain instance.
///
/// Semantics:
/// - There are `T = num_layers()` layers, each holding one [`Self::Value`].
/// - `extends(prev, next)` is only ever asked with `prev < next`.
/// - A chain is a strictly increasing sequence of layers in which each
///   consecutive pair satisfies `extends`.
///
/// The relation does not have to be transitive for the engine to work, but
/// the result is only a *pairwise* valid chain when it is (divisibility over
/// an ascending sequence is).
pub trait ChainProblem {
    /// Value stored at each layer; the engine maps reconstructed layers back
    /// to these.
    type Value: Clone + PartialEq;

    /// Number of layers `T`.
    fn num_layers(&self) -> usize;

    /// Value held at `layer`.
    ///
    /// # Panics
    /// Implementations may panic when `layer >= num_layers()`.
    fn value(&self, layer: usize) -> &Self::Value;

    /// Whether the element at layer `next` may directly follow the element at
    /// layer `prev` in a chain.
    fn extends(&self, prev: usize, next: usize) -> bool;

    /// Map a reconstructed path of layers to their values.
    fn values_along(&self, path: &[usize]) -> Vec<Self::Value> {
        path.iter().map(|&layer| self.value(layer).clone()).collect()
    }
}
