//! The subset builder: largest divisible subset of a sequence of integers.
//!
//! [`build_largest_divisible_subset`] is the entry point most callers want.
//! [`SubsetFinder`] exposes the knobs (output ordering, block size) and a
//! checked variant that rejects non-positive input.

use crate::builder::ChainEngineBuilder;
use crate::error::{validate_positive, SubsetError};
use crate::ordering::OrderingPolicy;
use crate::problems::divisible::DivisibleChain;
use crate::traits::ChainProblem;

/// Configurable largest-divisible-subset search.
///
/// ```
/// use divchain::{OrderingPolicy, SubsetFinder};
///
/// let finder = SubsetFinder::new().with_ordering(OrderingPolicy::Ascending);
/// assert_eq!(finder.find(&[4, 8, 2]), vec![2, 4, 8]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubsetFinder {
    ordering: OrderingPolicy,
    block_size: Option<usize>,
}

impl SubsetFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }

    /// Fill the DP tables in blocks of `block_size` layers. The result does
    /// not depend on this.
    ///
    /// # Panics
    /// [`find`](Self::find) panics later if `block_size == 0`.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    pub fn ordering(&self) -> OrderingPolicy {
        self.ordering
    }

    /// One largest divisible subset of `input`, arranged per the configured
    /// ordering.
    ///
    /// Values must be positive. A zero can panic with a division by zero and
    /// negative values give unspecified results; use
    /// [`try_find`](Self::try_find) to have them rejected instead.
    pub fn find(&self, input: &[i64]) -> Vec<i64> {
        if input.is_empty() {
            return Vec::new();
        }
        let engine = ChainEngineBuilder::new(DivisibleChain::new(input))
            .with_optional_block_size(self.block_size)
            .build();
        let (_length, path) = engine.run();
        let chain = engine.problem().values_along(&path);
        self.ordering.arrange(input, &chain)
    }

    /// Like [`find`](Self::find), but rejects zero and negative values.
    pub fn try_find(&self, input: &[i64]) -> Result<Vec<i64>, SubsetError> {
        validate_positive(input)?;
        Ok(self.find(input))
    }
}

/// One largest subset of `input` whose sorted order is a divisibility chain,
/// listed in reverse order of appearance in `input`.
///
/// ```
/// use divchain::build_largest_divisible_subset;
///
/// assert_eq!(build_largest_divisible_subset(&[4, 8, 2]), vec![2, 8, 4]);
/// assert_eq!(build_largest_divisible_subset(&[1, 2, 3]), vec![2, 1]);
/// assert!(build_largest_divisible_subset(&[]).is_empty());
/// ```
///
/// # Panics
/// May panic on a zero value (division by zero). Negative values are outside
/// the supported domain.
pub fn build_largest_divisible_subset(input: &[i64]) -> Vec<i64> {
    SubsetFinder::new().find(input)
}

/// Checked form of [`build_largest_divisible_subset`].
pub fn try_build_largest_divisible_subset(input: &[i64]) -> Result<Vec<i64>, SubsetError> {
    SubsetFinder::new().try_find(input)
}

/// The chain as reconstructed: largest value first, each element a multiple
/// of the next.
pub fn largest_divisible_chain(input: &[i64]) -> Vec<i64> {
    SubsetFinder::new()
        .with_ordering(OrderingPolicy::Chain)
        .find(input)
}
