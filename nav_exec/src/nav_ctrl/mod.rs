//! # Navigation control module
//!
//! Navigation control is the Bug0 decision core. Each cycle it fuses the
//! current pose, the four proximity sectors and the active sub-goal into a
//! single velocity command, using a two-mode machine:
//!
//! - `SeekGoal`: proportional control of heading and speed straight towards
//!   the active sub-goal. As soon as both forward sectors report an obstacle
//!   inside the detection threshold the mode switches to `FollowWall`.
//! - `FollowWall`: hug the obstacle's boundary, keeping it on the robot's
//!   right, by alternating point turns to the left (front blocked) with slow
//!   straight creeps (front clear, wall on the right). Once the front and
//!   both sides are clear the mode switches back to `SeekGoal`.
//!
//! Bug0 carries no memory of the boundary it followed, so it can cycle on
//! concave obstacles. That is accepted: the waypoint table routes the robot
//! around the known pathological geometry in the world.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod cmd;
mod params;
mod state;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use cmd::*;
pub use params::Params;
pub use state::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during NavCtrl operation.
#[derive(Debug, thiserror::Error)]
pub enum NavCtrlError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(#[from] util::params::LoadError),
}
