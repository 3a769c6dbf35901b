//! Generic forward-sweep engine for layered DPs.
//!
//! The engine runs in two phases:
//! 1. A forward sweep that applies every layer in ascending order, grouped
//!    into blocks, recording a [`BlockSummary`] checkpoint per block.
//! 2. A reconstruction that asks the problem for one optimal witness from the
//!    final frontier.
//!
//! The engine is generic over implementations of [`LayeredProblem`].

use crate::blocks::BlockSummary;
use crate::traits::LayeredProblem;
use crate::utils::{block_count, default_block_size};

/// Layered DP engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use lis_dp::{DpEngine, problems::lis::LisProblem};
///
/// let nums = [10, 9, 2, 5, 3, 7, 101, 18];
/// let engine = DpEngine::new(LisProblem::new(&nums));
/// let (len, indices) = engine.run();
/// assert_eq!(len, 4);
/// assert_eq!(indices.len(), 4);
/// ```
pub struct DpEngine<P: LayeredProblem> {
    problem: P,
    block_size: usize,
}

/// Output of the forward sweep.
struct Sweep<P: LayeredProblem> {
    frontier: P::Frontier,
    blocks: Vec<BlockSummary<P::Cost>>,
}

impl<P: LayeredProblem> DpEngine<P> {
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

    pub fn problem(&self) -> &P {
        &self.problem
    }

    pub fn problem_mut(&mut self) -> &mut P {
        &mut self.problem
    }

    pub fn into_problem(self) -> P {
        self.problem
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Forward sweep only: the optimal cost without a witness.
    pub fn solve(&self) -> P::Cost {
        let sweep = self.sweep(false);
        self.problem.best_cost(&sweep.frontier)
    }

    /// Per-block checkpoints covering [0, T) in order.
    ///
    /// Empty when the problem has no layers.
    pub fn checkpoints(&self) -> Vec<BlockSummary<P::Cost>> {
        self.sweep(true).blocks
    }

    /// Run the full DP.
    ///
    /// Returns `(optimal_cost, witness)` where the witness is whatever
    /// [`LayeredProblem::reconstruct`] produces from the final frontier.
    pub fn run(&self) -> (P::Cost, Vec<P::State>) {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("dp_run", layers = self.problem.num_layers());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let Sweep { frontier, .. } = self.sweep(false);

        let witness = {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("reconstruct");
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            self.problem.reconstruct(&frontier)
        };
        let cost = self.problem.best_cost(&frontier);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            ?cost,
            blocks = block_count(self.problem.num_layers(), self.block_size),
            witness_len = witness.len(),
            "dp run finished"
        );

        (cost, witness)
    }

    /// Phase I: apply every layer, one block at a time.
    ///
    /// Checkpoints are only collected when `record` is set.
    fn sweep(&self, record: bool) -> Sweep<P> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("forward_sweep", block_size = self.block_size);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let t = self.problem.num_layers();
        let b = self.block_size;
        let num_blocks = block_count(t, b);

        let mut frontier = self.problem.init_frontier();
        let mut blocks = Vec::with_capacity(if record { num_blocks } else { 0 });

        for k in 0..num_blocks {
            let start = k * b;
            let end = start.saturating_add(b).min(t);
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("summarize_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            let summary = self.problem.summarize_block(start, end, &mut frontier);
            if record {
                blocks.push(BlockSummary {
                    start,
                    end,
                    summary,
                });
            }
        }

        debug_assert!(!record || blocks.last().map_or(0, |blk| blk.end) == t);
        Sweep { frontier, blocks }
    }
}
