//! Error taxonomy for the windowing core.
//!
//! There is exactly one recoverable-looking-but-not error here: a value that
//! fails to parse as a decimal. It aborts the processing unit that hit it
//! (the record in the partitioner, the key's whole group in the aggregator)
//! and propagates up through the job. Too few samples to fill a window is
//! deliberately NOT an error — a partial window produces no output.

use thiserror::Error;

/// An input record or intermediate snapshot value is not a valid decimal.
///
/// Fatal for the run: the core never retries, never skips the record and
/// never emits a degraded window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal value {text:?}")]
pub struct ParseError {
    /// The offending text, trimmed.
    pub text: String,
    #[source]
    pub source: std::num::ParseFloatError,
}

impl ParseError {
    pub fn new(text: &str, source: std::num::ParseFloatError) -> Self {
        Self {
            text: text.to_string(),
            source,
        }
    }
}
