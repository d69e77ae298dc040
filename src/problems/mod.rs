//! Problem implementations for the chain engine.
//!
//! - [`divisible`] : divisibility chains over a sorted copy of the input.
//!
//! Other relations plug in the same way: implement
//! [`ChainProblem`](crate::traits::ChainProblem) for a struct owning the
//! layer values.

pub mod divisible;
