//! Concrete dynamic programs.
//!
//! - [`lis`]           : Longest Increasing Subsequence (length and witness).
//! - [`climb_stairs`]  : Ways to climb `n` stairs with steps of 1 or 2.

pub mod climb_stairs;
pub mod lis;
