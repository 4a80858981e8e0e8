//! Bit-clearing loop strategy. The identity `w & (w - 1)` clears exactly the lowest set bit of
//! `w`, so repeating it until the word is zero takes one iteration per set bit.
//! Unlike the other strategies, the cost of this one depends on the input: `0` takes no
//! iterations, `u64::MAX` takes 64.

use std::iter::FusedIterator;

/// Count the set bits of `word` by clearing the lowest set bit until the word is zero.
///
/// # Example
/// ```rust
/// use popcount_strategies::count_via_clearing_loop;
///
/// assert_eq!(count_via_clearing_loop(0b1010_0001), 3);
/// ```
#[inline]
#[must_use]
pub fn count_via_clearing_loop(word: u64) -> u32 {
    let mut count = 0;
    for _ in LowestBitClearing::new(word) {
        count += 1;
    }
    count
}

/// An iterator over the words produced by repeatedly clearing the lowest set bit of a word.
/// Each item is the previous word with one bit less, and the last item is always zero (unless the
/// starting word was already zero, in which case nothing is yielded).
///
/// The number of items is the population count of the starting word, which makes the iteration
/// count of [`count_via_clearing_loop`] observable.
///
/// # Example
/// ```rust
/// use popcount_strategies::LowestBitClearing;
///
/// let steps: Vec<u64> = LowestBitClearing::new(0b1011).collect();
/// assert_eq!(steps, vec![0b1010, 0b1000, 0]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LowestBitClearing {
    word: u64,
}

impl LowestBitClearing {
    /// Start clearing bits of `word`.
    #[must_use]
    pub fn new(word: u64) -> Self {
        Self { word }
    }

    /// The word as it is after the steps taken so far.
    #[must_use]
    pub fn remaining(&self) -> u64 {
        self.word
    }
}

impl Iterator for LowestBitClearing {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }
        // nonzero, so the subtraction cannot underflow
        self.word &= self.word - 1;
        Some(self.word)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.word.count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LowestBitClearing {}

impl FusedIterator for LowestBitClearing {}
