//! Window configuration.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::types::WindowKey;

/// Validated window length and the quantities derived from it.
///
/// The length may be fractional: the raw value is what every sample is
/// divided by, while capacity and the starting key truncate it. A length
/// whose truncation is zero would make every window empty, so construction
/// rejects anything below 1.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowConfig {
    window_length: f64,
}

impl WindowConfig {
    /// Create a config for windows of `window_length` samples.
    pub fn new(window_length: f64) -> Result<Self> {
        if !window_length.is_finite() || window_length < 1.0 {
            bail!("window length must be a finite number >= 1, got {window_length}");
        }
        Ok(Self { window_length })
    }

    /// The raw (possibly fractional) window length used for scaling.
    pub fn window_length(&self) -> f64 {
        self.window_length
    }

    /// Number of samples one window holds: `trunc(W)`.
    pub fn capacity(&self) -> usize {
        self.window_length as usize
    }

    /// Key assigned to the first emitted window: `⌊W/2⌋`.
    pub fn start_key(&self) -> WindowKey {
        (self.window_length / 2.0) as WindowKey
    }
}
