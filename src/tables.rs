//! Length and predecessor tables filled by the engine.
//!
//! Both tables are indexed by layer. `length[i]` is the size of the longest
//! chain ending at layer `i`; `predecessor[i]` is the previous layer on that
//! chain, or `None` when the chain starts at `i`.

use crate::traits::ChainProblem;

/// The DP tables for one invocation.
///
/// Invariants maintained by [`ChainTables::forward_step`]:
/// - `length[i] >= 1`,
/// - `predecessor[i] = Some(j)` implies `j < i`, `extends(j, i)` and
///   `length[i] == length[j] + 1`,
///
/// so walking predecessors always terminates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainTables {
    length: Vec<usize>,
    predecessor: Vec<Option<usize>>,
}

impl ChainTables {
    /// Tables for `num_layers` layers, every entry a singleton chain.
    pub fn new(num_layers: usize) -> Self {
        Self {
            length: vec![1; num_layers],
            predecessor: vec![None; num_layers],
        }
    }

    /// Number of layers covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.length.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length.is_empty()
    }

    /// Longest chain length ending at `layer`.
    #[inline]
    pub fn length(&self, layer: usize) -> usize {
        self.length[layer]
    }

    /// Previous layer on the longest chain ending at `layer`.
    #[inline]
    pub fn predecessor(&self, layer: usize) -> Option<usize> {
        self.predecessor[layer]
    }

    pub fn lengths(&self) -> &[usize] {
        &self.length
    }

    pub fn predecessors(&self) -> &[Option<usize>] {
        &self.predecessor
    }

    /// Fill the entry for `layer` from all earlier layers.
    ///
    /// Only a strictly longer candidate replaces the current choice, so among
    /// equally long extensions the lowest `j` is kept.
    pub fn forward_step<P: ChainProblem + ?Sized>(&mut self, problem: &P, layer: usize) {
        for j in 0..layer {
            if problem.extends(j, layer) && self.length[j] + 1 > self.length[layer] {
                self.length[layer] = self.length[j] + 1;
                self.predecessor[layer] = Some(j);
            }
        }
    }

    /// Layers of the chain ending at `end`, from `end` back to its first
    /// element.
    pub fn walk_back(&self, end: usize) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.length[end]);
        let mut current = end;
        loop {
            path.push(current);
            match self.predecessor[current] {
                Some(prev) => current = prev,
                None => break,
            }
        }
        path
    }

    /// Layers of the chain ending at `end`, in ascending layer order.
    pub fn path_to(&self, end: usize) -> Vec<usize> {
        let mut path = self.walk_back(end);
        path.reverse();
        path
    }
}
