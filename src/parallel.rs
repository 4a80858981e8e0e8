//! Parallel (SWAR) sum strategy from Hacker's Delight, figure 5-2. Adjacent bit fields are added
//! in place: first pairs of bits, then nibbles, then bytes, and finally the byte sums are folded
//! into the lowest byte. Constant time and branch-free.

/// Every other bit, starting at bit 0.
const PAIR_MASK: u64 = 0x5555_5555_5555_5555;

/// Low two bits of every nibble.
const NIBBLE_MASK: u64 = 0x3333_3333_3333_3333;

/// Low nibble of every byte.
const BYTE_MASK: u64 = 0x0f0f_0f0f_0f0f_0f0f;

/// The final sum is at most 64, which fits in seven bits.
const RESULT_MASK: u64 = 0x7f;

/// Count the set bits of `word` by summing bit fields of doubling width in parallel.
///
/// # Example
/// ```rust
/// use popcount_strategies::count_via_parallel_sum;
///
/// assert_eq!(count_via_parallel_sum(0xFF00_0000_0000_00FF), 16);
/// ```
#[inline]
#[must_use]
pub fn count_via_parallel_sum(word: u64) -> u32 {
    // each 2-bit field holds the count of its two bits
    let mut x = word - ((word >> 1) & PAIR_MASK);
    // each nibble holds the count of its four bits
    x = (x & NIBBLE_MASK) + ((x >> 2) & NIBBLE_MASK);
    // each byte holds the count of its eight bits
    x = (x + (x >> 4)) & BYTE_MASK;
    // the partial sums of the upper fields are garbage, only the lowest byte is valid
    x = x.wrapping_add(x >> 8);
    x = x.wrapping_add(x >> 16);
    x = x.wrapping_add(x >> 32);
    (x & RESULT_MASK) as u32
}
