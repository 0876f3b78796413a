//! Parameters structure for NavCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Deserialize;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for Navigation control.
#[derive(Debug, Default, Deserialize)]
pub struct Params {
    // ---- GOAL SEEKING ----

    /// Proportional gain applied to the (capped) distance to the active
    /// sub-goal to produce the linear speed demand.
    ///
    /// Units: 1/second
    pub kp_lin: f64,

    /// Proportional gain applied to the heading error to produce the angular
    /// rate demand.
    ///
    /// Units: 1/second
    pub kp_ang: f64,

    /// Cap on the distance term fed to `kp_lin`, and therefore
    /// `kp_lin * max_lin_vel_ms` is the highest linear speed ever demanded.
    ///
    /// Units: meters/second
    pub max_lin_vel_ms: f64,

    // ---- OBSTACLE DETECTION ----

    /// A sector reporting a minimum distance below this threshold is treated
    /// as blocked.
    ///
    /// Units: meters
    pub obstacle_dist_m: f64,

    // ---- WALL FOLLOWING ----

    /// The point turn rate used while the front sectors are blocked.
    ///
    /// Units: radians/second
    pub turn_rate_rads: f64,

    /// The forward creep speed used while following a wall.
    ///
    /// Units: meters/second
    pub wall_follow_speed_ms: f64,

    // ---- TERMINATION ----

    /// The robot is considered arrived once its distance to the final goal
    /// drops to or below this threshold.
    ///
    /// Units: meters
    pub arrival_thresh_m: f64,
}
