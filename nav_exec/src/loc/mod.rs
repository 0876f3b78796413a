//! # Localisation module
//!
//! Converts the pose samples delivered by the pose collaborator (position
//! plus attitude quaternion) into the planar pose used by the navigation
//! modules. The robot is assumed planar so only the yaw component of the
//! attitude survives the conversion.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::{UnitQuaternion, Vector2};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A raw pose sample as delivered by the pose collaborator.
///
/// One sample wholesale-replaces the previous one, no history is kept.
#[derive(Debug, Copy, Clone)]
pub struct PoseSample {
    /// The position in the world map (WM) frame.
    ///
    /// Units: meters
    pub position_m_wm: Vector2<f64>,

    /// The attitude of the robot in the WM frame.
    pub attitude_q_wm: UnitQuaternion<f64>,
}

/// The current pose (position and heading in the WM frame) of the robot.
///
/// Written only by the pose estimation in [`Pose::from_sample`], read-only to
/// every other module.
#[derive(Debug, Copy, Clone, Default)]
pub struct Pose {
    /// The position in the WM frame.
    ///
    /// Units: meters
    pub position_m_wm: Vector2<f64>,

    /// The heading of the robot (angle to the positive WM_X axis).
    ///
    /// Units: radians, in the range [-pi, pi]
    pub heading_rad: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Pose {
    /// Estimate the planar pose from a raw pose sample.
    ///
    /// The heading is the yaw component of the attitude quaternion, roll and
    /// pitch are discarded. No validation is performed, non-unit quaternions
    /// are the collaborator's responsibility to avoid.
    pub fn from_sample(sample: &PoseSample) -> Self {
        Self {
            position_m_wm: sample.position_m_wm,
            heading_rad: sample.attitude_q_wm.euler_angles().2,
        }
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_yaw_extraction() {
        let sample = PoseSample {
            position_m_wm: Vector2::new(2.0, -1.5),
            attitude_q_wm: UnitQuaternion::from_euler_angles(0.0, 0.0, 1.0),
        };

        let pose = Pose::from_sample(&sample);

        assert_eq!(pose.position_m_wm, sample.position_m_wm);
        assert!((pose.heading_rad - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_roll_pitch_discarded() {
        // Non-zero roll and pitch must not disturb the extracted heading
        let sample = PoseSample {
            position_m_wm: Vector2::new(0.0, 0.0),
            attitude_q_wm: UnitQuaternion::from_euler_angles(0.3, -0.2, 0.75),
        };

        let pose = Pose::from_sample(&sample);

        assert!((pose.heading_rad - 0.75).abs() < 1e-9);
    }
}
