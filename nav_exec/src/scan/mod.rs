//! # Scan module
//!
//! Reduces the raw 360 degree range sample array delivered by the ranging
//! collaborator into four named minimum-distance sectors. Four coarse sectors
//! are enough for the reactive turn/forward action set of the navigation
//! control module, finer resolution would buy nothing.
//!
//! The sample array is indexed by degrees from robot-forward, so the sector
//! windows are fixed index ranges:
//!
//! | Sector | Window (deg) |
//! |--------|--------------|
//! | front1 | 330-359      |
//! | front2 | 0-29         |
//! | left   | 30-90        |
//! | right  | 260-329      |

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;

pub use params::Params;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::ops::RangeInclusive;

use util::maths::clamp;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Default sensing ceiling, used before the scan parameters are loaded.
///
/// Units: meters
pub const DEFAULT_CEILING_M: f64 = 10.0;

/// Sector window for `front1` (right-of-centre forward lane).
pub const FRONT_1_WINDOW_DEG: RangeInclusive<usize> = 330..=359;

/// Sector window for `front2` (left-of-centre forward lane).
pub const FRONT_2_WINDOW_DEG: RangeInclusive<usize> = 0..=29;

/// Sector window for `left`.
pub const LEFT_WINDOW_DEG: RangeInclusive<usize> = 30..=90;

/// Sector window for `right`.
pub const RIGHT_WINDOW_DEG: RangeInclusive<usize> = 260..=329;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The minimum distance seen in each of the four fixed sectors.
///
/// Each value is clamped into `[0, ceiling]`. A sector with no samples is set
/// to the ceiling, i.e. treated as "no obstacle".
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SectorScan {
    /// Minimum distance in the 330-359 deg window.
    ///
    /// Units: meters
    pub front1_m: f64,

    /// Minimum distance in the 0-29 deg window.
    ///
    /// Units: meters
    pub front2_m: f64,

    /// Minimum distance in the 30-90 deg window.
    ///
    /// Units: meters
    pub left_m: f64,

    /// Minimum distance in the 260-329 deg window.
    ///
    /// Units: meters
    pub right_m: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for SectorScan {
    fn default() -> Self {
        Self::open(DEFAULT_CEILING_M)
    }
}

impl SectorScan {
    /// A scan with every sector at the ceiling, i.e. nothing in sight.
    pub fn open(ceiling_m: f64) -> Self {
        Self {
            front1_m: ceiling_m,
            front2_m: ceiling_m,
            left_m: ceiling_m,
            right_m: ceiling_m,
        }
    }

    /// Reduce a raw degree-indexed range array into the four sectors.
    ///
    /// The previous sector values are always replaced wholesale, there is no
    /// incremental update. Arrays shorter than 360 samples simply leave the
    /// uncovered sectors at the ceiling.
    pub fn from_ranges(ranges_m: &[f64], ceiling_m: f64) -> Self {
        Self {
            front1_m: window_min(ranges_m, FRONT_1_WINDOW_DEG, ceiling_m),
            front2_m: window_min(ranges_m, FRONT_2_WINDOW_DEG, ceiling_m),
            left_m: window_min(ranges_m, LEFT_WINDOW_DEG, ceiling_m),
            right_m: window_min(ranges_m, RIGHT_WINDOW_DEG, ceiling_m),
        }
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the minimum sample within the given window, clamped into
/// `[0, ceiling]`. An empty window yields the ceiling.
fn window_min(ranges_m: &[f64], window_deg: RangeInclusive<usize>, ceiling_m: f64) -> f64 {
    ranges_m
        .iter()
        .enumerate()
        .filter(|(i, _)| window_deg.contains(i))
        .map(|(_, r)| clamp(r, &0.0, &ceiling_m))
        .fold(ceiling_m, f64::min)
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    /// Build a 360 sample array with everything open except the given
    /// (index, range) pairs.
    fn ranges_with(samples: &[(usize, f64)]) -> Vec<f64> {
        let mut ranges = vec![DEFAULT_CEILING_M; 360];
        for &(i, r) in samples {
            ranges[i] = r;
        }
        ranges
    }

    #[test]
    fn test_window_assignment() {
        let scan = SectorScan::from_ranges(
            &ranges_with(&[(345, 0.7), (10, 1.2), (60, 2.5), (300, 3.1)]),
            DEFAULT_CEILING_M,
        );

        assert_eq!(scan.front1_m, 0.7);
        assert_eq!(scan.front2_m, 1.2);
        assert_eq!(scan.left_m, 2.5);
        assert_eq!(scan.right_m, 3.1);
    }

    #[test]
    fn test_window_boundaries() {
        // Samples at the extreme indices of each window must land in that
        // window and nowhere else
        let scan = SectorScan::from_ranges(
            &ranges_with(&[(330, 0.5), (359, 0.6)]),
            DEFAULT_CEILING_M,
        );
        assert_eq!(scan.front1_m, 0.5);
        assert_eq!(scan.right_m, DEFAULT_CEILING_M);

        let scan = SectorScan::from_ranges(&ranges_with(&[(0, 0.4), (29, 0.9)]), DEFAULT_CEILING_M);
        assert_eq!(scan.front2_m, 0.4);
        assert_eq!(scan.left_m, DEFAULT_CEILING_M);

        let scan = SectorScan::from_ranges(&ranges_with(&[(30, 1.1), (90, 1.0)]), DEFAULT_CEILING_M);
        assert_eq!(scan.left_m, 1.0);
        assert_eq!(scan.front2_m, DEFAULT_CEILING_M);

        let scan =
            SectorScan::from_ranges(&ranges_with(&[(260, 0.8), (329, 0.3)]), DEFAULT_CEILING_M);
        assert_eq!(scan.right_m, 0.3);
        assert_eq!(scan.front1_m, DEFAULT_CEILING_M);
    }

    #[test]
    fn test_ceiling_clamp() {
        let scan = SectorScan::from_ranges(
            &ranges_with(&[(0, 55.0), (45, f64::INFINITY)]),
            DEFAULT_CEILING_M,
        );

        assert_eq!(scan.front2_m, DEFAULT_CEILING_M);
        assert_eq!(scan.left_m, DEFAULT_CEILING_M);
    }

    #[test]
    fn test_missing_samples_default_to_ceiling() {
        // An empty array means nothing in sight
        assert_eq!(
            SectorScan::from_ranges(&[], DEFAULT_CEILING_M),
            SectorScan::open(DEFAULT_CEILING_M)
        );

        // A short array leaves the uncovered sectors open
        let scan = SectorScan::from_ranges(&vec![0.5; 45], DEFAULT_CEILING_M);
        assert_eq!(scan.front2_m, 0.5);
        assert_eq!(scan.left_m, 0.5);
        assert_eq!(scan.front1_m, DEFAULT_CEILING_M);
        assert_eq!(scan.right_m, DEFAULT_CEILING_M);
    }
}
