//! # Local runtime
//!
//! A thread-per-stage substrate that runs the moving-average pipeline:
//!
//! ```text
//! Source Task (1 thread, owns the WindowPartitioner)
//!     |
//!     | hash shuffle (by window key)
//!     v
//! Reduce Tasks (parallelism threads, group by key + aggregate)
//!     |
//!     v
//! Collector (caller thread)
//! ```
//!
//! Window correctness depends on one partitioner consuming the whole stream
//! in arrival order, so the source stage is never parallelized. The reduce
//! stage is: the shuffle guarantees all snapshots sharing a key reach the
//! same worker, which is the entire group-by-key contract the aggregator
//! needs.
//!
//! A parse failure anywhere aborts the job. The failing stage drops its
//! senders, downstream `recv` calls error out, and the first error is
//! surfaced to the caller; no partial result map is returned.

use std::collections::{BTreeMap, HashMap};
use std::thread;

use anyhow::Result;
use tracing::debug;

use crate::aggregate::WindowAggregator;
use crate::channel::local_channel;
use crate::codec::encode_snapshot;
use crate::config::WindowConfig;
use crate::partition::WindowPartitioner;
use crate::shuffle::{HashPartitioner, Partitioner};
use crate::types::{StreamElement, WindowKey};

/// Channel buffer size between stages (bounded for backpressure).
const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// A runnable moving-average job over one ordered record stream.
pub struct MovingAverageJob {
    config: WindowConfig,
}

impl MovingAverageJob {
    pub fn new(config: WindowConfig) -> Self {
        Self { config }
    }

    /// Run the pipeline with `parallelism` reduce workers.
    ///
    /// `records` is the raw input, one numeric sample per entry, in temporal
    /// order. Returns the averages keyed and sorted by window key. Streams
    /// shorter than one window produce an empty map.
    pub fn execute_with_parallelism(
        &self,
        records: Vec<String>,
        parallelism: usize,
    ) -> Result<BTreeMap<WindowKey, String>> {
        anyhow::ensure!(parallelism >= 1, "parallelism must be at least 1");

        // Channels: Source -> Reduce Tasks.
        let mut source_senders = Vec::with_capacity(parallelism);
        let mut source_receivers = Vec::with_capacity(parallelism);
        for _ in 0..parallelism {
            let (tx, rx) = local_channel::<(WindowKey, String)>(DEFAULT_CHANNEL_CAPACITY);
            source_senders.push(tx);
            source_receivers.push(rx);
        }

        // Channel: Reduce Tasks -> Collector (shared, one End per task).
        let (results_tx, results_rx) =
            local_channel::<(WindowKey, String)>(DEFAULT_CHANNEL_CAPACITY);

        // Spawn Source Task.
        let config = self.config;
        let source_handle = thread::spawn(move || -> Result<()> {
            let shuffle = HashPartitioner::new(|pair: &(WindowKey, String)| pair.0);
            let mut partitioner = WindowPartitioner::new(config);
            let record_count = records.len();
            let mut emitted = 0usize;

            for record in records {
                if let Some((key, snapshot)) = partitioner.process_sample(&record)? {
                    let pair = (key, encode_snapshot(&snapshot));
                    let target = shuffle.partition(&pair, parallelism);
                    source_senders[target].send(StreamElement::Record(pair))?;
                    emitted += 1;
                }
            }

            for sender in &source_senders {
                sender.send(StreamElement::End)?;
            }
            debug!(records = record_count, windows = emitted, "source drained");
            Ok(())
        });

        // Spawn Reduce Tasks.
        let mut reduce_handles = Vec::with_capacity(parallelism);
        for (task_id, receiver) in source_receivers.into_iter().enumerate() {
            let sender = results_tx.clone();
            let handle = thread::spawn(move || -> Result<()> {
                let aggregator = WindowAggregator::new();
                let mut groups: HashMap<WindowKey, Vec<String>> = HashMap::new();

                loop {
                    match receiver.recv()? {
                        StreamElement::Record((key, snapshot)) => {
                            groups.entry(key).or_default().push(snapshot);
                        }
                        StreamElement::End => break,
                    }
                }

                debug!(task_id, keys = groups.len(), "reduce task aggregating");
                for (key, snapshots) in groups {
                    let (key, average) = aggregator.aggregate(key, &snapshots)?;
                    sender.send(StreamElement::Record((key, average)))?;
                }
                sender.send(StreamElement::End)?;
                Ok(())
            });
            reduce_handles.push(handle);
        }
        // The collector loop below must see the channel close once every
        // reduce task is done, so the runtime's own clone goes away now.
        drop(results_tx);

        // Collect on the caller thread. A recv error means some stage died
        // without its End marker; fall through and let join surface why.
        let mut results = BTreeMap::new();
        let mut ended = 0usize;
        while ended < parallelism {
            match results_rx.recv() {
                Ok(StreamElement::Record((key, average))) => {
                    results.insert(key, average);
                }
                Ok(StreamElement::End) => ended += 1,
                Err(_) => break,
            }
        }

        source_handle.join().unwrap()?;
        for handle in reduce_handles {
            handle.join().unwrap()?;
        }

        debug!(windows = results.len(), "job completed");
        Ok(results)
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
