//! Climbing stairs: distinct ways to reach step `n` taking 1 or 2 steps at a time.
//!
//! `ways(0) = ways(1) = 1` and `ways(i) = ways(i - 1) + ways(i - 2)`, so only
//! two rolling values are kept.

/// Number of distinct ways to climb `n` stairs, or `None` if it overflows `u128`.
///
/// ```
/// use lis_dp::problems::climb_stairs::climb_stairs;
///
/// assert_eq!(climb_stairs(3), Some(3));
/// assert_eq!(climb_stairs(10), Some(89));
/// ```
pub fn climb_stairs(n: usize) -> Option<u128> {
    let (mut a, mut b) = (1u128, 1u128);
    for _ in 2..=n {
        let c = a.checked_add(b)?;
        a = b;
        b = c;
    }
    Some(b)
}
