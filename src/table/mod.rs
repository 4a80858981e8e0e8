//! Byte-wise lookup table strategy. A 64-bit word is split into eight bytes, and the population
//! count of each byte is read from a table holding the count of every possible byte value.
//! The table is computed at compile time, so lookups never touch mutable or lazily initialized
//! state.

use crate::util::unroll;

/// Number of bits looked up at once.
const LOOKUP_BLOCK_SIZE: u32 = 8;

/// Number of lookup blocks in a 64-bit word.
const BLOCKS_PER_WORD: usize = (u64::BITS / LOOKUP_BLOCK_SIZE) as usize;

/// Mask selecting the lowest lookup block of a word.
const BLOCK_MASK: u64 = (1 << LOOKUP_BLOCK_SIZE) - 1;

/// Population count of every byte value. Entry `i` holds the number of set bits in `i`.
///
/// The table is derived incrementally: `i` and `i >> 1` share all bits except the lowest bit of
/// `i`, so every entry is one earlier entry plus that bit.
pub const BYTE_POPCOUNT: [u8; 1 << LOOKUP_BLOCK_SIZE] = calculate_lookup_table();

const fn calculate_lookup_table() -> [u8; 1 << LOOKUP_BLOCK_SIZE] {
    let mut lookup = [0; 1 << LOOKUP_BLOCK_SIZE];
    let mut i = 1;
    while i < lookup.len() {
        lookup[i] = lookup[i >> 1] + (i & 1) as u8;
        i += 1;
    }

    lookup
}

/// Look up the population count of the `block`-th byte of `word`, counting from the least
/// significant byte.
#[inline(always)]
fn lookup_block(word: u64, block: usize) -> u32 {
    BYTE_POPCOUNT[((word >> (block as u32 * LOOKUP_BLOCK_SIZE)) & BLOCK_MASK) as usize] as u32
}

/// Count the set bits of `word` by summing the table entries of its eight bytes.
/// Always performs exactly eight lookups, independent of the word's content.
///
/// # Example
/// ```rust
/// use popcount_strategies::count_via_table;
///
/// assert_eq!(count_via_table(0), 0);
/// assert_eq!(count_via_table(0b1011), 3);
/// assert_eq!(count_via_table(u64::MAX), 64);
/// ```
#[inline]
#[must_use]
pub fn count_via_table(word: u64) -> u32 {
    let mut count = 0;
    debug_assert!(BLOCKS_PER_WORD == 8, "change unroll constant");
    unroll!(8, |block = {0}| {
            count += lookup_block(word, block);
        },
        block += 1);
    count
}

/// Count the set bits of `word` using the same table as [`count_via_table`], but decompose the
/// word into its bytes locally with a loop instead of unrolled shifts. Results are identical;
/// the function exists so both decompositions can be benchmarked.
#[inline]
#[must_use]
pub fn count_via_table_inline(word: u64) -> u32 {
    word.to_le_bytes()
        .iter()
        .map(|&byte| BYTE_POPCOUNT[byte as usize] as u32)
        .sum()
}

#[cfg(test)]
mod tests;
