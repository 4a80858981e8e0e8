//! Bit-shifting loop strategy. Tests each of the 64 bit positions with a shifted mask. It always
//! takes 64 iterations, which makes it the slowest strategy, but it is simple enough to serve as
//! the baseline the other strategies are validated against.

/// Count the set bits of `word` by testing every bit position individually.
///
/// # Example
/// ```rust
/// use popcount_strategies::count_via_shifting_loop;
///
/// assert_eq!(count_via_shifting_loop(0x8000_0000_0000_0001), 2);
/// ```
#[must_use]
pub fn count_via_shifting_loop(word: u64) -> u32 {
    let mut count = 0;
    for i in 0..u64::BITS {
        if word & (1 << i) != 0 {
            count += 1;
        }
    }
    count
}
