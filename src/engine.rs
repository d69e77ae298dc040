//! Generic chain DP engine.
//!
//! This module implements the two-phase algorithm:
//! 1. A forward pass that fills the length/predecessor tables block by block
//!    and records a [`BlockSummary`] per block.
//! 2. A reconstruction that folds the block summaries into the best chain end
//!    and walks predecessors back from it.
//!
//! The engine is completely generic over implementations of [`ChainProblem`].

use crate::blocks::BlockSummary;
use crate::tables::ChainTables;
use crate::traits::ChainProblem;
use crate::utils::default_block_size;

/// Chain DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use divchain::{problems::divisible::DivisibleChain, ChainEngine, ChainProblem};
///
/// let problem = DivisibleChain::new(&[4, 8, 2]);
/// let engine = ChainEngine::new(problem);
/// let (length, path) = engine.run();
/// assert_eq!(length, 3);
/// assert_eq!(engine.problem().values_along(&path), vec![2, 4, 8]);
/// ```
pub struct ChainEngine<P: ChainProblem> {
    problem: P,
    block_size: usize,
}

/// Everything the forward pass produces.
struct FillArtifacts {
    tables: ChainTables,
    blocks: Vec<BlockSummary>,
}

impl<P: ChainProblem> ChainEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let b = default_block_size(problem.num_layers());
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Phase I: fill the tables, one block of layers at a time.
    fn fill_tables(&self) -> FillArtifacts {
        let t = self.problem.num_layers();
        let b = self.block_size;
        let num_blocks = t.div_ceil(b);

        let mut tables = ChainTables::new(t);
        let mut blocks = Vec::with_capacity(num_blocks);

        for k in 0..num_blocks {
            let start = k * b;
            let end = ((k + 1) * b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("fill_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            // Layer 0 has no earlier layers; its singleton entry is already set.
            for layer in start.max(1)..end {
                tables.forward_step(&self.problem, layer);
            }
            blocks.push(BlockSummary::from_lengths(start, end, tables.lengths()));
        }

        FillArtifacts { tables, blocks }
    }

    /// Fill and return the tables without reconstructing a chain.
    pub fn tables(&self) -> ChainTables {
        self.fill_tables().tables
    }

    /// Fill the tables and return the per-block summaries.
    pub fn block_summaries(&self) -> Vec<BlockSummary> {
        self.fill_tables().blocks
    }

    /// Run the full chain DP.
    ///
    /// Returns `(chain_length, chain_layers)`. The layers are in ascending
    /// order and end at the lowest layer achieving the maximal length; each
    /// consecutive pair satisfies [`ChainProblem::extends`]. A problem with
    /// no layers yields `(0, vec![])`.
    pub fn run(&self) -> (usize, Vec<usize>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("chain_run", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let FillArtifacts { tables, blocks } = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("fill_tables", block_size = self.block_size);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.fill_tables()
        };

        let best = blocks
            .iter()
            .skip(1)
            .fold(blocks.first().cloned(), |acc, next| {
                acc.map(|summary| summary.merge(next))
            })
            .and_then(|summary| summary.best);

        let Some(best) = best else {
            return (0, Vec::new());
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(index = best.index, length = best.length, "best chain end");

        let path = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("reconstruct", end = best.index);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            tables.path_to(best.index)
        };
        debug_assert_eq!(path.len(), best.length);

        (best.length, path)
    }
}
