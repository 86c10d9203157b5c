//! # WindowPartitioner
//!
//! Converts an ordered stream of raw samples into keyed sliding-window
//! snapshots. One instance owns one logical stream: the accumulator state
//! (window buffer, key counter, initialized flag) lives in the struct and is
//! mutated through `&mut self`, so concurrent interleaving of two streams
//! through one partitioner is impossible by construction.

use std::collections::VecDeque;

use crate::codec::parse_decimal;
use crate::config::WindowConfig;
use crate::error::ParseError;
use crate::types::{WindowKey, WindowSnapshot};

/// Sliding-window partition stage.
///
/// Feed samples in arrival order via [`process_sample`](Self::process_sample).
/// For a stream of `N` samples and window length `W` (`N >= W`) it emits
/// exactly `N - W + 1` snapshots with strictly increasing, gap-free keys
/// starting at `⌊W/2⌋`. Streams shorter than one window emit nothing.
pub struct WindowPartitioner {
    config: WindowConfig,
    /// Current window contents, oldest at the front. Values are pre-divided
    /// by the window length.
    window: VecDeque<f64>,
    /// Key for the next emitted window.
    next_key: WindowKey,
    /// Whether the first full window has been emitted.
    initialized: bool,
}

impl WindowPartitioner {
    /// Create a fresh partitioner for one run over one ordered stream.
    pub fn new(config: WindowConfig) -> Self {
        let next_key = config.start_key();
        Self {
            config,
            window: VecDeque::with_capacity(config.capacity()),
            next_key,
            initialized: false,
        }
    }

    /// Process one raw record.
    ///
    /// Returns `Ok(None)` while the first window is still filling,
    /// `Ok(Some((key, snapshot)))` once per sample after that, and
    /// `Err(ParseError)` if the record is not a valid decimal. A parse
    /// failure aborts the record; the partitioner itself stays untouched,
    /// but the surrounding job treats the error as fatal.
    pub fn process_sample(
        &mut self,
        raw: &str,
    ) -> Result<Option<(WindowKey, WindowSnapshot)>, ParseError> {
        let value = parse_decimal(raw)?;
        let scaled = value / self.config.window_length();

        if !self.initialized {
            self.window.push_back(scaled);
            if self.window.len() == self.config.capacity() {
                self.initialized = true;
                return Ok(Some(self.emit()));
            }
            return Ok(None);
        }

        // Full and initialized: evict the oldest, append the newest.
        self.window.pop_front();
        self.window.push_back(scaled);
        Ok(Some(self.emit()))
    }

    /// Key the next emission will carry.
    pub fn next_key(&self) -> WindowKey {
        self.next_key
    }

    fn emit(&mut self) -> (WindowKey, WindowSnapshot) {
        let key = self.next_key;
        self.next_key += 1;
        let snapshot = WindowSnapshot::new(self.window.iter().copied().collect());
        (key, snapshot)
    }
}

#[cfg(test)]
#[path = "tests/partition_tests.rs"]
mod tests;
