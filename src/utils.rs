//! Small helpers shared by the engine and builder.

/// Default checkpoint spacing for T layers: ⌈√T⌉, and 1 for T ≤ 1.
///
/// Gives roughly as many blocks as layers per block, so a sweep over
/// [`crate::engine::DpEngine::checkpoints`] stays short on long inputs.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        return 1;
    }
    let mut r = (num_layers as f64).sqrt() as usize;
    // Correct float rounding in either direction, then take the ceiling.
    // A square that overflows is larger than any `num_layers`.
    while r.checked_mul(r).map_or(true, |sq| sq > num_layers) {
        r -= 1;
    }
    while (r + 1)
        .checked_mul(r + 1)
        .is_some_and(|sq| sq <= num_layers)
    {
        r += 1;
    }
    if r * r == num_layers {
        r
    } else {
        r + 1
    }
}

/// Number of blocks of size `block_size` needed to cover `num_layers`.
#[inline]
pub fn block_count(num_layers: usize, block_size: usize) -> usize {
    debug_assert!(block_size > 0);
    num_layers.div_ceil(block_size)
}

#[cfg(test)]
mod tests {
    use super::{block_count, default_block_size};

    #[test]
    fn returns_one_for_small_t() {
        assert_eq!(default_block_size(0), 1);
        assert_eq!(default_block_size(1), 1);
    }

    #[test]
    fn ceil_sqrt_values() {
        assert_eq!(default_block_size(2), 2);
        assert_eq!(default_block_size(4), 2);
        assert_eq!(default_block_size(5), 3);
        assert_eq!(default_block_size(9), 3);
        assert_eq!(default_block_size(10), 4);
        assert_eq!(default_block_size(10_000), 100);
        assert_eq!(default_block_size(10_001), 101);
    }

    #[test]
    fn monotonic_non_decreasing() {
        let mut prev = 0;
        for t in 0..500 {
            let b = default_block_size(t);
            assert!(b >= prev, "block size decreased at t={t}: {b} < {prev}");
            prev = b;
        }
    }

    #[test]
    fn huge_layer_counts_do_not_overflow() {
        // ⌊√(2^64 - 1)⌋ = 2^32 - 1, and usize::MAX is not a perfect square.
        #[cfg(target_pointer_width = "64")]
        assert_eq!(default_block_size(usize::MAX), 1 << 32);
        let b = default_block_size(usize::MAX);
        assert!(b.checked_mul(b).is_none() || b * b >= usize::MAX);
        let r = (1usize << (usize::BITS / 2)) - 1;
        assert_eq!(default_block_size(r * r), r);
        assert_eq!(default_block_size(r * r + 1), r + 1);
    }

    #[test]
    fn block_count_covers_layers() {
        assert_eq!(block_count(0, 3), 0);
        assert_eq!(block_count(1, 3), 1);
        assert_eq!(block_count(6, 3), 2);
        assert_eq!(block_count(7, 3), 3);
    }
}
