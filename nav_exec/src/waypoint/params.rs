//! Parameters structure for the waypoint module

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the waypoint selection.
#[derive(Debug, Deserialize)]
pub struct Params {
    /// The final goal position in the WM frame.
    ///
    /// Units: meters
    pub final_goal_m_wm: Vector2<f64>,

    /// The override regions, tested in order. First match wins.
    pub regions: Vec<Region>,
}

/// A rectangular override region of the waypoint table.
///
/// A position matches the region when both its coordinates are strictly below
/// the region's limits.
#[derive(Debug, Deserialize)]
pub struct Region {
    /// Upper x limit of the region.
    ///
    /// Units: meters
    pub x_lim_m: f64,

    /// Upper y limit of the region.
    ///
    /// Units: meters
    pub y_lim_m: f64,

    /// The sub-goal steered at while inside this region.
    ///
    /// Units: meters
    pub target_m_wm: Vector2<f64>,
}
