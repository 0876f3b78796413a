//! Parameters structure for the scan module

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the sector reduction.
#[derive(Debug, Deserialize)]
pub struct Params {
    /// The sensing ceiling. Range samples are clamped above by this value,
    /// and sectors with no samples default to it.
    ///
    /// Units: meters
    pub ceiling_m: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            ceiling_m: super::DEFAULT_CEILING_M,
        }
    }
}
