//! Text wire format shared by the partition and aggregation stages.
//!
//! Keys travel as decimal integers, snapshots as a `", "`-joined list of
//! decimal values. Decoding tolerates arbitrary whitespace around each value.

use crate::error::ParseError;
use crate::types::{WindowKey, WindowSnapshot};

/// Render a float in shortest round-trip form: `6.0`, not `6`.
pub fn format_decimal(value: f64) -> String {
    format!("{value:?}")
}

/// Parse one decimal value, trimming surrounding whitespace.
pub fn parse_decimal(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<f64>()
        .map_err(|e| ParseError::new(trimmed, e))
}

/// Encode a window snapshot as a comma-separated list of decimals.
pub fn encode_snapshot(snapshot: &WindowSnapshot) -> String {
    snapshot
        .values
        .iter()
        .map(|v| format_decimal(*v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Decode a comma-separated list of decimals into a snapshot.
pub fn decode_snapshot(text: &str) -> Result<WindowSnapshot, ParseError> {
    let mut values = Vec::new();
    for piece in text.split(',') {
        values.push(parse_decimal(piece)?);
    }
    Ok(WindowSnapshot::new(values))
}

/// Render a window key as text.
pub fn format_key(key: WindowKey) -> String {
    key.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal_keeps_fraction() {
        assert_eq!(format_decimal(6.0), "6.0");
        assert_eq!(format_decimal(9.0), "9.0");
        assert_eq!(format_decimal(2.5), "2.5");
    }

    #[test]
    fn test_encode_snapshot() {
        let snap = WindowSnapshot::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(encode_snapshot(&snap), "1.0, 2.0, 3.0");
    }

    #[test]
    fn test_decode_snapshot_trims_whitespace() {
        let snap = decode_snapshot(" 1.0,  2.5 ,3.0 ").unwrap();
        assert_eq!(snap.values, vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let snap = WindowSnapshot::new(vec![0.1, 0.2, 0.30000000000000004]);
        let decoded = decode_snapshot(&encode_snapshot(&snap)).unwrap();
        assert_eq!(decoded, snap);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let err = decode_snapshot("1.0, abc, 3.0").unwrap_err();
        assert_eq!(err.text, "abc");
    }

    #[test]
    fn test_format_key() {
        assert_eq!(format_key(17), "17");
    }
}
