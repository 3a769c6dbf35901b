//! Longest Increasing Subsequence via dynamic programming.
//!
//! The centrepiece is [`length_of_lis`], the classic O(n²) table-filling
//! routine: `dp[i]` holds the length of the longest strictly increasing
//! subsequence ending at `i`, and the answer is the largest entry.
//!
//! Around it sits a small layered-DP toolkit:
//! 1. Model a recurrence as a sequence of layers sharing one frontier.
//! 2. Implement the [`LayeredProblem`] trait for it.
//! 3. Let [`DpEngine`] sweep the layers in blocks, record checkpoints, and
//!    recover an optimal witness.
//!
//! ## Quick start
//! ```
//! use lis_dp::{length_of_lis, problems::lis::LisProblem, DpEngine};
//!
//! let nums = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9];
//! assert_eq!(length_of_lis(&nums), 4);
//!
//! let (len, indices) = DpEngine::new(LisProblem::new(&nums)).run();
//! assert_eq!(len, 4);
//! assert!(indices.windows(2).all(|w| nums[w[0]] < nums[w[1]]));
//! ```
//!
//! ## Built-in problems
//! - Longest Increasing Subsequence ([`problems::lis`])
//! - Climbing stairs ([`problems::climb_stairs`])
//!
//! ## Features
//! - `tracing`: emit spans and events from the engine through the `tracing`
//!   crate.
//! - `heavy`: enable long-running stress tests.

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::DpEngineBuilder;
pub use crate::engine::DpEngine;
pub use crate::problems::lis::length_of_lis;
pub use crate::traits::LayeredProblem;
