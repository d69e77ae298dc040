//! Largest divisible subset as a layered chain DP (divchain)
//!
//! Given positive integers, find a largest subset whose elements, in sorted
//! order, each divide the next.
//!
//! ## Core idea
//! 1. Sort a working copy and treat each position as a *layer*.
//! 2. Model "may follow" between layers with the [`ChainProblem`] trait.
//! 3. Let [`ChainEngine`] fill the length/predecessor tables block by block,
//!    fold the block summaries into the best chain end, and walk back.
//!
//! The fill is the classic `O(n²)` table DP; ties are resolved towards the
//! lowest layer at every step, so the chosen subset is deterministic.
//!
//! ## Quick start
//! ```
//! use divchain::{build_largest_divisible_subset, format_sequence};
//!
//! let subset = build_largest_divisible_subset(&[4, 8, 2]);
//! assert_eq!(subset, vec![2, 8, 4]);
//! assert_eq!(format_sequence(&subset), "[2, 8, 4]");
//! ```
//!
//! The returned subset lists chain members in reverse order of their
//! appearance in the input. [`SubsetFinder`] selects other orderings and a
//! checked mode that rejects zero and negative values.

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod format;
pub mod ordering;
pub mod problems;
pub mod subset;
pub mod tables;
pub mod traits;
pub mod utils;

pub use crate::builder::ChainEngineBuilder;
pub use crate::engine::ChainEngine;
pub use crate::error::SubsetError;
pub use crate::format::{format_sequence, Bracketed};
pub use crate::ordering::OrderingPolicy;
pub use crate::subset::{
    build_largest_divisible_subset, largest_divisible_chain, try_build_largest_divisible_subset,
    SubsetFinder,
};
pub use crate::traits::ChainProblem;
