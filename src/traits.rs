//! Core trait definitions for layered dynamic programs.
//!
//! To drive a recurrence with [`DpEngine`](crate::engine::DpEngine), implement
//! [`LayeredProblem`] for a struct that captures the instance (a borrowed input
//! sequence, a target count, etc.).
//!
//! The trait encodes a simple layered model:
//! - Layers 0..T, each consuming one unit of input.
//! - A frontier holding every DP value the remaining layers may read.
//! - A cost that can be read off any frontier (the best answer so far).
//! - A reconstruction step that recovers one optimal witness from the final
//!   frontier.

/// Trait for a layered dynamic program instance.
///
/// Semantics:
/// - There are `T = num_layers()` steps.
/// - `init_frontier()` is the state before any layer has run.
/// - `forward_step(i, frontier)` advances the frontier past layer `i`, in place.
/// - The engine calls `forward_step` for `i = 0..T` in ascending order, exactly
///   once each.
pub trait LayeredProblem {
    /// A single element of the reconstructed witness.
    /// For sequence DPs this is usually an index into the input.
    type State: Clone + PartialEq;

    /// DP state carried from one layer to the next (e.g. a DP table or row).
    type Frontier;

    /// Objective type. Must be ordered so checkpoints can be compared, and
    /// printable for the engine's trace events.
    type Cost: Copy + Ord + std::fmt::Debug;

    /// Number of layers `T`.
    fn num_layers(&self) -> usize;

    /// Frontier before layer 0 has been processed.
    fn init_frontier(&self) -> Self::Frontier;

    /// Advance `frontier` past `layer`.
    ///
    /// Requirements:
    /// - Must only depend on `frontier` and fixed problem data.
    /// - May assume every layer `< layer` has already been applied.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier);

    /// Apply layers `[a, b)` to `frontier` and report the best cost afterwards.
    ///
    /// The default implementation simply loops over [`forward_step`]; override
    /// it when a block can be processed more cheaply as a unit.
    ///
    /// [`forward_step`]: LayeredProblem::forward_step
    fn summarize_block(&self, a: usize, b: usize, frontier: &mut Self::Frontier) -> Self::Cost {
        for layer in a..b {
            self.forward_step(layer, frontier);
        }
        self.best_cost(frontier)
    }

    /// Best objective value recorded in `frontier`.
    fn best_cost(&self, frontier: &Self::Frontier) -> Self::Cost;

    /// Recover one optimal witness from the final frontier at layer `T`.
    fn reconstruct(&self, frontier_t: &Self::Frontier) -> Vec<Self::State>;
}
