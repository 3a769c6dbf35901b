//! Block-level checkpoints recorded by the engine.
//!
//! Each `BlockSummary` covers an interval [start, end) of layers and carries
//! whatever the engine recorded once the block finished (for [`DpEngine`], the
//! best cost seen so far).
//!
//! [`DpEngine`]: crate::engine::DpEngine

/// Checkpoint for a contiguous interval of layers [start, end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary<S> {
    /// Inclusive start layer.
    pub start: usize,
    /// Exclusive end layer.
    pub end: usize,
    /// Value recorded after layer `end - 1` was applied.
    pub summary: S,
}

impl<S> BlockSummary<S> {
    /// Length of the block in layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the block covers no layers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True if `layer` falls inside [start, end).
    #[inline]
    pub fn contains(&self, layer: usize) -> bool {
        (self.start..self.end).contains(&layer)
    }
}
