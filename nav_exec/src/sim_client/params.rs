//! Parameters structure for the simulation client

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for the simulation.
#[derive(Debug, Deserialize)]
pub struct Params {
    /// Integration step period of the simulation thread.
    ///
    /// Units: seconds
    pub step_period_s: f64,

    /// A range scan is produced every this-many integration steps, the pose
    /// is produced every step.
    pub scan_decimation: u32,

    /// Maximum range of the simulated lidar. Rays hitting nothing closer
    /// report this value.
    ///
    /// Units: meters
    pub ceiling_m: f64,

    /// The robot's starting position in the WM frame.
    ///
    /// Units: meters
    pub start_position_m_wm: Vector2<f64>,

    /// The robot's starting heading.
    ///
    /// Units: radians
    pub start_heading_rad: f64,

    /// The box obstacles making up the world.
    pub boxes: Vec<BoxObstacle>,
}

/// An axis-aligned box obstacle.
#[derive(Debug, Deserialize)]
pub struct BoxObstacle {
    /// The corner with the smallest coordinates.
    ///
    /// Units: meters
    pub min_m_wm: Vector2<f64>,

    /// The corner with the largest coordinates.
    ///
    /// Units: meters
    pub max_m_wm: Vector2<f64>,
}
