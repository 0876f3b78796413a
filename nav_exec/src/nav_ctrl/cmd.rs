//! Velocity command output by NavCtrl

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A velocity command for the drive train.
///
/// Transient output of the navigation control module: overwritten every
/// cycle and forwarded to the command sink immediately, no history is kept.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct VelocityCmd {
    /// The linear speed demand.
    ///
    /// Positive speeds are "forwards", negative speeds are "backwards".
    ///
    /// Units: meters/second
    pub lin_ms: f64,

    /// The angular rate demand.
    ///
    /// Follows the right hand rule about the robot's Z+ (upwards) axis, so
    /// that a positive rate turns the robot to the left.
    ///
    /// Units: radians/second
    pub ang_rads: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl VelocityCmd {
    /// The all-stop command.
    pub fn zero() -> Self {
        Self {
            lin_ms: 0.0,
            ang_rads: 0.0,
        }
    }
}
