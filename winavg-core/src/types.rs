use serde::{Deserialize, Serialize};

/// Synthetic ordering key assigned to each emitted window.
///
/// Keys are not derived from window content: they form a strictly
/// increasing, gap-free sequence starting at `⌊W/2⌋` so that the original
/// temporal order of windows survives an unordered shuffle.
pub type WindowKey = u64;

/// The ordered contents of one ready window, each element pre-divided by
/// the window length `W`.
///
/// Pre-dividing at partition time means the aggregator recovers the window's
/// arithmetic mean by plain summation, without needing `W` on its side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub values: Vec<f64>,
}

impl WindowSnapshot {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

/// The unit flowing through runtime channels: a data record or the
/// end-of-stream marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum StreamElement<T> {
    /// User data record.
    Record(T),
    /// End of bounded stream.
    End,
}
