//! # Shuffle
//!
//! Key-based routing of emitted pairs to parallel reduce workers. The
//! group-by-key contract requires every pair sharing a key to land on the
//! same worker; hashing the key gives that plus an even spread.

use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use ahash::AHasher;

/// Routes a value to one of `num_partitions` reduce workers.
pub trait Partitioner<T>: Send + Sync {
    /// Partition index in `0..num_partitions` for this value.
    fn partition(&self, value: &T, num_partitions: usize) -> usize;
}

/// Hash-based partitioner using a key selector function.
pub struct HashPartitioner<K, F> {
    key_selector: F,
    _phantom: PhantomData<K>,
}

impl<K, F> HashPartitioner<K, F> {
    /// Create a new hash partitioner with the given key selector.
    pub fn new(key_selector: F) -> Self {
        Self {
            key_selector,
            _phantom: PhantomData,
        }
    }
}

impl<K, T, F> Partitioner<T> for HashPartitioner<K, F>
where
    K: Hash + Send + Sync,
    F: Fn(&T) -> K + Send + Sync,
{
    fn partition(&self, value: &T, num_partitions: usize) -> usize {
        let key = (self.key_selector)(value);
        let mut hasher = AHasher::default();
        key.hash(&mut hasher);
        (hasher.finish() as usize) % num_partitions
    }
}

#[cfg(test)]
#[path = "tests/shuffle_tests.rs"]
mod tests;
