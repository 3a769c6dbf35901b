//! Example: counting ways to climb stairs.
//!
//! Run with:
//! `cargo run --example climb_stairs`

use lis_dp::problems::climb_stairs::climb_stairs;

fn main() {
    for n in [1usize, 2, 5, 10, 50, 185, 186] {
        match climb_stairs(n) {
            Some(ways) => println!("{n} stairs: {ways} ways"),
            None => println!("{n} stairs: count overflows u128"),
        }
    }
}
