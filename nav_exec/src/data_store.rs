//! # Data Store
//!
//! Central struct holding the latest sensor values and all module state for
//! the executable. The pose and sector scan fields are "latest value" slots:
//! input handling overwrites them whenever a new sample has arrived, and the
//! control cycle simply reads whatever is current. If a collaborator goes
//! quiet the last known values are used indefinitely, stale data is neither
//! detected nor reported.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;

use crate::{loc::Pose, nav_ctrl, nav_ctrl::VelocityCmd, scan::SectorScan};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u128,

    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,

    // Latest-value input slots
    /// The latest pose estimate. Starts at the origin until the first pose
    /// sample arrives.
    pub pose_wm: Pose,

    /// The latest sector scan. Starts fully open (all sectors at the
    /// ceiling) until the first ranging sample arrives.
    pub sector_scan: SectorScan,

    // Waypoint selection
    /// The active sub-goal, re-derived from the position every cycle.
    pub active_goal_m_wm: Vector2<f64>,

    // NavCtrl
    pub nav_ctrl: nav_ctrl::NavCtrl,
    pub nav_ctrl_input: nav_ctrl::InputData,
    pub nav_ctrl_output: VelocityCmd,
    pub nav_ctrl_status_rpt: nav_ctrl::StatusReport,
}
