//! # WindowAggregator
//!
//! Reduces all snapshots grouped under one key to a single averaged value.
//! Because every snapshot value was pre-divided by the window length at
//! partition time, summing one window's values yields the arithmetic mean of
//! its raw samples directly.

use crate::codec::{decode_snapshot, format_decimal};
use crate::error::ParseError;
use crate::types::WindowKey;

/// Group-by-key reduction stage. Stateless: safe to re-invoke with the same
/// key and snapshots (a substrate retry produces the identical output).
#[derive(Debug, Default)]
pub struct WindowAggregator;

impl WindowAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Sum every value in every snapshot delivered for `key` and return
    /// `(key, formatted_sum)`.
    ///
    /// Under correct upstream key assignment exactly one snapshot arrives
    /// per key and the sum is that window's moving average. If the substrate
    /// ever groups several snapshots under one key their sums are added
    /// together — the aggregator cannot tell the two cases apart, so key
    /// uniqueness is upstream's obligation.
    ///
    /// Any value that fails to parse aborts the whole key with a
    /// [`ParseError`].
    pub fn aggregate<S: AsRef<str>>(
        &self,
        key: WindowKey,
        snapshots: &[S],
    ) -> Result<(WindowKey, String), ParseError> {
        let mut sum = 0.0;
        for snapshot in snapshots {
            for value in decode_snapshot(snapshot.as_ref())?.values {
                sum += value;
            }
        }
        Ok((key, format_decimal(sum)))
    }
}

#[cfg(test)]
#[path = "tests/aggregate_tests.rs"]
mod tests;
