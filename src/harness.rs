//! Cross-strategy agreement checks. Every strategy must return the same count for the same word;
//! these functions evaluate the strategies side by side and report the first pair that disagrees
//! together with the input, so a failing test points directly at the broken strategy.

use std::error::Error;
use std::fmt;

use crate::Strategy;

/// Two strategies returned different counts for the same word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Disagreement {
    /// The input both strategies were evaluated on.
    pub word: u64,
    /// The strategy whose result is taken as reference.
    pub left: Strategy,
    /// Count returned by `left`.
    pub left_count: u32,
    /// The strategy that disagrees with `left`.
    pub right: Strategy,
    /// Count returned by `right`.
    pub right_count: u32,
}

impl fmt::Display for Disagreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {}, {} = {} for input {:#018x}",
            self.left, self.left_count, self.right, self.right_count, self.word
        )
    }
}

impl Error for Disagreement {}

/// Compare two strategies on `word`. Returns the common count, or the [`Disagreement`] if they
/// differ.
pub fn check_pair(word: u64, left: Strategy, right: Strategy) -> Result<u32, Disagreement> {
    compare(word, left, left.count(word), right, right.count(word))
}

/// Compare all strategies in [`Strategy::ALL`] on `word` against the first one. Returns the
/// common count, or the first [`Disagreement`] found.
///
/// # Example
/// ```rust
/// use popcount_strategies::{check_agreement, FIXTURE_WORD};
///
/// assert_eq!(check_agreement(FIXTURE_WORD), Ok(32));
/// ```
pub fn check_agreement(word: u64) -> Result<u32, Disagreement> {
    check_functions(
        word,
        Strategy::ALL
            .into_iter()
            .map(|strategy| (strategy, strategy.function())),
    )
}

/// Run [`check_agreement`] on every word of `words`, stopping at the first disagreement.
/// Returns how many words were checked.
pub fn check_all<I: IntoIterator<Item = u64>>(words: I) -> Result<usize, Disagreement> {
    let mut checked = 0;
    for word in words {
        check_agreement(word)?;
        checked += 1;
    }
    Ok(checked)
}

/// Compare arbitrary labelled counting functions on `word` against the first one. This is the
/// primitive behind [`check_agreement`]; it accepts functions that are not the ones registered
/// in [`Strategy`], which lets tests verify that a broken implementation is caught.
///
/// If `functions` is empty, the word is trivially in agreement and the returned count is zero.
pub fn check_functions<I>(word: u64, functions: I) -> Result<u32, Disagreement>
where
    I: IntoIterator<Item = (Strategy, fn(u64) -> u32)>,
{
    let mut functions = functions.into_iter();
    let Some(reference) = functions.next() else {
        return Ok(0);
    };

    let expected = (reference.1)(word);
    for (strategy, function) in functions {
        compare(word, reference.0, expected, strategy, function(word))?;
    }
    Ok(expected)
}

fn compare(
    word: u64,
    left: Strategy,
    left_count: u32,
    right: Strategy,
    right_count: u32,
) -> Result<u32, Disagreement> {
    if left_count == right_count {
        Ok(left_count)
    } else {
        Err(Disagreement {
            word,
            left,
            left_count,
            right,
            right_count,
        })
    }
}

/// Boundary inputs for the agreement checks: zero, all ones, every single bit, every word with a
/// single bit missing, alternating and nibble patterns, and [`FIXTURE_WORD`](crate::FIXTURE_WORD).
pub fn boundary_words() -> impl Iterator<Item = u64> {
    let fixed = [
        0,
        u64::MAX,
        0x5555_5555_5555_5555,
        0xAAAA_AAAA_AAAA_AAAA,
        0x0F0F_0F0F_0F0F_0F0F,
        0xF0F0_F0F0_F0F0_F0F0,
        0x0000_0000_FFFF_FFFF,
        0xFFFF_FFFF_0000_0000,
        crate::FIXTURE_WORD,
    ];
    let single_bits = (0..u64::BITS).map(|i| 1u64 << i);
    let missing_bits = (0..u64::BITS).map(|i| !(1u64 << i));
    fixed.into_iter().chain(single_bits).chain(missing_bits)
}
