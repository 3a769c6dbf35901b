//! Example: Longest Increasing Subsequence via the layered DP engine.
//!
//! Run with:
//! `cargo run --example lis`

use lis_dp::{length_of_lis, problems::lis::LisProblem, DpEngine};

fn main() {
    let nums = [10, 9, 2, 5, 3, 7, 101, 18];

    println!("LIS length: {}", length_of_lis(&nums));

    let engine = DpEngine::new(LisProblem::new(&nums));
    let (cost, indices) = engine.run();
    let values: Vec<i32> = indices.iter().map(|&i| nums[i]).collect();

    println!("Engine length: {cost}");
    println!("Witness indices: {indices:?}");
    println!("Witness values: {values:?}");

    for block in engine.checkpoints() {
        println!(
            "layers [{}, {}): best so far {}",
            block.start, block.end, block.summary
        );
    }
}
