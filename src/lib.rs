#![warn(missing_docs)]

//! This crate provides several independent implementations of population count (the number of
//! set bits) for 64-bit words. They compute the same result with different algorithmic
//! strategies and different performance characteristics, and the crate ships a harness that
//! verifies they agree.
//!
//! # Strategies
//!  - [Table lookup][count_via_table]: eight lookups into a compile-time table of
//!    [byte population counts][BYTE_POPCOUNT], with an [inline variant][count_via_table_inline]
//!    that decomposes the word in a loop.
//!  - [Bit clearing][count_via_clearing_loop]: clears the lowest set bit until the word is zero.
//!    Its cost is proportional to the number of set bits.
//!  - [Bit shifting][count_via_shifting_loop]: tests all 64 positions. Slowest, but obviously
//!    correct, and used as the baseline.
//!  - [Parallel sum][count_via_parallel_sum]: adds bit fields of doubling width in place.
//!
//! [`Strategy`] names each of them (plus the native `u64::count_ones`) so they can be selected
//! or iterated over, and the [harness] module checks that they agree on any input.
//!
//! # Performance
//! The benchmarks in the repository compare all strategies on [`FIXTURE_WORD`], on random words,
//! and on the extreme inputs `0` and `u64::MAX`. The table and parallel-sum strategies are
//! constant time; the clearing loop is fast for sparse words and slow for dense ones; the shifting
//! loop always takes 64 iterations.
//!
//! # Thread safety
//! All functions are pure. The only shared state is the lookup table, which is a constant, so
//! no initialization or synchronization happens at runtime.

pub use crate::clearing::{count_via_clearing_loop, LowestBitClearing};
pub use crate::harness::{check_agreement, Disagreement};
pub use crate::parallel::count_via_parallel_sum;
pub use crate::shifting::count_via_shifting_loop;
pub use crate::strategy::{ParseStrategyError, Strategy};
pub use crate::table::{count_via_table, count_via_table_inline, BYTE_POPCOUNT};

pub mod clearing;
pub mod harness;
pub mod parallel;
pub mod shifting;
pub mod strategy;
pub mod table;

pub(crate) mod util;

/// Shared input for benchmarks and agreement tests. It has 32 set bits spread over all bytes.
pub const FIXTURE_WORD: u64 = 0x1234_5678_90AB_CDEF;
