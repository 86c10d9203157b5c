//! # winavg Core
//!
//! Sliding-window moving averages over an ordered stream of numeric samples,
//! computed as a map/partition stage followed by a group-by-key aggregation
//! stage.
//!
//! This crate provides:
//!
//! - [`config`] — [`WindowConfig`](config::WindowConfig): validated window
//!   length and the derived capacity / starting key.
//! - [`partition`] — [`WindowPartitioner`](partition::WindowPartitioner):
//!   turns the raw sample stream into keyed window snapshots.
//! - [`aggregate`] — [`WindowAggregator`](aggregate::WindowAggregator):
//!   reduces all snapshots grouped under one key to a single average.
//! - [`codec`] — the text wire format shared by both stages.
//! - [`runtime`] — [`MovingAverageJob`](runtime::MovingAverageJob): a local
//!   multi-threaded substrate wiring source → shuffle → reduce → collect.
//! - [`channel`], [`shuffle`] — bounded channels and hash routing used by
//!   the runtime.

pub mod aggregate;
pub mod channel;
pub mod codec;
pub mod config;
pub mod error;
pub mod partition;
pub mod runtime;
pub mod shuffle;
pub mod types;
