//! Selection among the counting strategies. All strategies are free functions; [`Strategy`]
//! names them so callers, tests and benchmarks can iterate over or pick one without dynamic
//! dispatch.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::{
    count_via_clearing_loop, count_via_parallel_sum, count_via_shifting_loop, count_via_table,
    count_via_table_inline,
};

/// One of the population count strategies provided by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    /// Byte table lookups, unrolled. See [`count_via_table`].
    Table,
    /// Byte table lookups over the word's bytes in a loop. See [`count_via_table_inline`].
    TableInline,
    /// Clear the lowest set bit until zero. See [`count_via_clearing_loop`].
    ClearingLoop,
    /// Test all 64 positions. See [`count_via_shifting_loop`].
    ShiftingLoop,
    /// Parallel bit field sums. See [`count_via_parallel_sum`].
    ParallelSum,
    /// [`u64::count_ones`], which compiles to the `popcnt` instruction where the target has it.
    Native,
}

impl Strategy {
    /// All strategies, in the order they are reported by the agreement harness.
    pub const ALL: [Strategy; 6] = [
        Strategy::Table,
        Strategy::TableInline,
        Strategy::ClearingLoop,
        Strategy::ShiftingLoop,
        Strategy::ParallelSum,
        Strategy::Native,
    ];

    /// Count the set bits of `word` with this strategy.
    #[inline]
    #[must_use]
    pub fn count(self, word: u64) -> u32 {
        match self {
            Strategy::Table => count_via_table(word),
            Strategy::TableInline => count_via_table_inline(word),
            Strategy::ClearingLoop => count_via_clearing_loop(word),
            Strategy::ShiftingLoop => count_via_shifting_loop(word),
            Strategy::ParallelSum => count_via_parallel_sum(word),
            Strategy::Native => word.count_ones(),
        }
    }

    /// The counting function of this strategy.
    #[must_use]
    pub fn function(self) -> fn(u64) -> u32 {
        match self {
            Strategy::Table => count_via_table,
            Strategy::TableInline => count_via_table_inline,
            Strategy::ClearingLoop => count_via_clearing_loop,
            Strategy::ShiftingLoop => count_via_shifting_loop,
            Strategy::ParallelSum => count_via_parallel_sum,
            Strategy::Native => u64::count_ones,
        }
    }

    /// Stable name of the strategy, used for display, parsing and benchmark ids.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Table => "table",
            Strategy::TableInline => "table-inline",
            Strategy::ClearingLoop => "clearing-loop",
            Strategy::ShiftingLoop => "shifting-loop",
            Strategy::ParallelSum => "parallel-sum",
            Strategy::Native => "native",
        }
    }

    /// Whether the running time of the strategy depends on the input. Only the clearing loop
    /// does: it iterates once per set bit.
    #[must_use]
    pub fn is_data_dependent(self) -> bool {
        matches!(self, Strategy::ClearingLoop)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing a [`Strategy`] from an unknown name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseStrategyError {
    name: String,
}

impl ParseStrategyError {
    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown popcount strategy `{}`, expected one of: ", self.name)?;
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(strategy.name())?;
        }
        Ok(())
    }
}

impl Error for ParseStrategyError {}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Parse a strategy name. Case is ignored and `_` may be used in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == normalized)
            .ok_or_else(|| ParseStrategyError {
                name: s.to_string(),
            })
    }
}
