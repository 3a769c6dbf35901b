//! Longest Increasing Subsequence (LIS) via the quadratic DP table.
//!
//! `dp[i]` is the length of the longest strictly increasing subsequence that
//! ends exactly at index `i`. Every element is a subsequence of length 1 on its
//! own, and `dp[i] = 1 + max(dp[j])` over all `j < i` with `nums[j] < nums[i]`.
//! The answer is the largest entry of the table.
//!
//! Two entry points are provided:
//! - [`length_of_lis`]: the bare routine, returning only the length.
//! - [`LisProblem`]: the same recurrence as a [`LayeredProblem`], where layer
//!   `i` finalises `dp[i]`. It also keeps parent links so the engine can
//!   return the indices of one longest subsequence.
//!
//! Elements are compared only with `<`. For `PartialOrd` values with
//! incomparable pairs (such as `f64::NAN`) the comparison is simply false, so
//! such an element neither extends nor is extended by the other one.

use crate::engine::DpEngine;
use crate::traits::LayeredProblem;

/// Length of the longest strictly increasing subsequence of `nums`.
///
/// Returns 0 for an empty slice. O(n²) time, O(n) extra space.
///
/// ```
/// use lis_dp::length_of_lis;
///
/// assert_eq!(length_of_lis(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// assert_eq!(length_of_lis::<i32>(&[]), 0);
/// ```
pub fn length_of_lis<T: PartialOrd>(nums: &[T]) -> usize {
    if nums.is_empty() {
        return 0;
    }
    let mut dp = vec![1usize; nums.len()];
    let mut ans = 1;
    for i in 1..nums.len() {
        for j in 0..i {
            if nums[j] < nums[i] {
                dp[i] = dp[i].max(dp[j] + 1);
            }
        }
        ans = ans.max(dp[i]);
    }
    ans
}

/// Indices of one longest strictly increasing subsequence, in ascending order.
///
/// Ties are broken towards the earliest ending index and, at each step, the
/// earliest predecessor.
///
/// ```
/// use lis_dp::problems::lis::longest_increasing_subsequence;
///
/// let nums = [10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence(&nums), vec![2, 3, 5, 6]);
/// ```
pub fn longest_increasing_subsequence<T: PartialOrd>(nums: &[T]) -> Vec<usize> {
    let (_len, indices) = DpEngine::new(LisProblem::new(nums)).run();
    indices
}

#[derive(Clone, Debug)]
pub struct LisProblem<'a, T> {
    pub nums: &'a [T],
}

/// Frontier: the DP table plus what is needed to rebuild a witness.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LisTable {
    /// `lengths[i]`: longest increasing subsequence ending at `i`. Entries at
    /// layers not yet processed still hold their initial value of 1.
    pub lengths: Vec<usize>,
    /// First predecessor `j` that produced `lengths[i]`, if any.
    pub parents: Vec<Option<usize>>,
    /// Running maximum over finalised entries (0 only for empty input).
    pub best: usize,
    /// First index where `best` was reached.
    pub best_end: Option<usize>,
}

/// Witness element: an index into the input slice.
pub type LisState = usize;

impl<'a, T: PartialOrd> LisProblem<'a, T> {
    pub fn new(nums: &'a [T]) -> Self {
        Self { nums }
    }

    fn n(&self) -> usize {
        self.nums.len()
    }
}

impl<'a, T: PartialOrd> LayeredProblem for LisProblem<'a, T> {
    type State = LisState;
    type Frontier = LisTable;
    type Cost = usize;

    fn num_layers(&self) -> usize {
        self.n()
    }

    fn init_frontier(&self) -> Self::Frontier {
        let n = self.n();
        LisTable {
            lengths: vec![1; n],
            parents: vec![None; n],
            best: usize::from(n > 0),
            best_end: if n > 0 { Some(0) } else { None },
        }
    }

    fn forward_step(&self, layer: usize, table: &mut Self::Frontier) {
        let i = layer;
        debug_assert!(i < self.n());
        for j in 0..i {
            if self.nums[j] < self.nums[i] && table.lengths[j] + 1 > table.lengths[i] {
                table.lengths[i] = table.lengths[j] + 1;
                table.parents[i] = Some(j);
            }
        }
        if table.lengths[i] > table.best {
            table.best = table.lengths[i];
            table.best_end = Some(i);
        }
    }

    fn best_cost(&self, table: &Self::Frontier) -> Self::Cost {
        table.best
    }

    fn reconstruct(&self, table: &Self::Frontier) -> Vec<Self::State> {
        let mut rev = Vec::with_capacity(table.best);
        let mut cur = table.best_end;
        while let Some(i) = cur {
            rev.push(i);
            cur = table.parents[i];
        }
        rev.reverse();
        debug_assert_eq!(rev.len(), table.best);
        rev
    }
}
