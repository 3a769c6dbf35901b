use lis_dp::{length_of_lis, problems::lis::LisProblem, DpEngine};
use proptest::prelude::*;

/// Exponential reference: longest strictly increasing subsequence over all
/// index subsets.
fn brute_force_lis(nums: &[i32]) -> usize {
    let n = nums.len();
    let mut best = 0;
    for mask in 0u32..(1u32 << n) {
        let picked: Vec<i32> = (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .map(|i| nums[i])
            .collect();
        if picked.windows(2).all(|w| w[0] < w[1]) {
            best = best.max(picked.len());
        }
    }
    best
}

fn valid_witness(nums: &[i32], idx: &[usize]) -> bool {
    idx.iter().all(|&i| i < nums.len())
        && idx
            .windows(2)
            .all(|w| w[0] < w[1] && nums[w[0]] < nums[w[1]])
}

#[test]
fn brute_force_sanity() {
    assert_eq!(brute_force_lis(&[]), 0);
    assert_eq!(brute_force_lis(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
    assert_eq!(brute_force_lis(&[2, 2, 2]), 1);
}

proptest! {
    #[test]
    fn lis_matches_brute_force(nums in proptest::collection::vec(-5i32..5, 0..12)) {
        prop_assert_eq!(length_of_lis(&nums), brute_force_lis(&nums));
    }

    #[test]
    fn engine_matches_direct(
        nums in proptest::collection::vec(-20i32..20, 0..40),
        block in 1usize..8,
    ) {
        let engine = DpEngine::with_block_size(LisProblem::new(&nums), block);
        let (len, idx) = engine.run();
        prop_assert_eq!(len, length_of_lis(&nums));
        prop_assert_eq!(idx.len(), len);
        prop_assert!(valid_witness(&nums, &idx));
    }
}
