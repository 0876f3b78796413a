//! # Simulation client
//!
//! Stands in for the pose, ranging and command collaborators when running
//! without real hardware: a kinematic unicycle model plus a 360-ray lidar
//! model ray-cast against a world of axis-aligned box obstacles.
//!
//! The simulation runs on its own thread and pushes samples over channels,
//! reproducing the push-style asynchronous delivery of the real
//! collaborators. The executable drains the channels each cycle keeping only
//! the latest sample, and the simulated drive train likewise only honours
//! the latest velocity command.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;

pub use params::{BoxObstacle, Params};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::info;
use nalgebra::{UnitQuaternion, Vector2};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;
use std::time::Duration;

// Internal
use crate::loc::PoseSample;
use crate::nav_ctrl::VelocityCmd;
use util::maths::wrap_pi;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Client end of the simulation.
///
/// Dropping the client stops the simulation thread.
pub struct SimClient {
    pose_rx: Receiver<PoseSample>,
    scan_rx: Receiver<Vec<f64>>,
    cmd_tx: Sender<VelocityCmd>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur during SimClient operation.
#[derive(Debug, thiserror::Error)]
pub enum SimClientError {
    #[error("Could not load parameters: {0}")]
    ParamLoadError(#[from] util::params::LoadError),

    #[error("The simulation thread has stopped")]
    ThreadStopped,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimClient {
    /// Initialise the simulation.
    ///
    /// Loads the world from the given parameter file and spawns the
    /// simulation thread.
    pub fn new(params_path: &str) -> Result<Self, SimClientError> {
        let params: Params = util::params::load(params_path)?;

        info!(
            "Simulated world: {} box obstacle(s), robot starting at ({:.2}, {:.2})",
            params.boxes.len(),
            params.start_position_m_wm.x,
            params.start_position_m_wm.y
        );

        let (pose_tx, pose_rx) = channel();
        let (scan_tx, scan_rx) = channel();
        let (cmd_tx, cmd_rx) = channel();

        thread::spawn(move || sim_thread(params, pose_tx, scan_tx, cmd_rx));

        Ok(Self {
            pose_rx,
            scan_rx,
            cmd_tx,
        })
    }

    /// Get the latest pose sample, or `None` if no sample has arrived since
    /// the last call. Older pending samples are discarded.
    pub fn latest_pose(&self) -> Option<PoseSample> {
        self.pose_rx.try_iter().last()
    }

    /// Get the latest raw range scan, or `None` if no scan has arrived since
    /// the last call. Older pending scans are discarded.
    pub fn latest_scan(&self) -> Option<Vec<f64>> {
        self.scan_rx.try_iter().last()
    }

    /// Send a velocity command to the simulated drive train.
    pub fn send_cmd(&self, cmd: &VelocityCmd) -> Result<(), SimClientError> {
        self.cmd_tx
            .send(*cmd)
            .map_err(|_| SimClientError::ThreadStopped)
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Simulation thread main function.
///
/// Integrates the unicycle model at the configured step period, pushing a
/// pose sample every step and a range scan every `scan_decimation` steps.
/// Exits when the executable drops its receivers.
fn sim_thread(
    params: Params,
    pose_tx: Sender<PoseSample>,
    scan_tx: Sender<Vec<f64>>,
    cmd_rx: Receiver<VelocityCmd>,
) {
    let mut position_m_wm = params.start_position_m_wm;
    let mut heading_rad = params.start_heading_rad;
    let mut cmd = VelocityCmd::zero();

    let dt_s = params.step_period_s;
    let mut step: u64 = 0;

    loop {
        // Latest command wins, the drive train keeps no queue
        if let Some(c) = cmd_rx.try_iter().last() {
            cmd = c;
        }

        // Unicycle integration
        heading_rad = wrap_pi(heading_rad + cmd.ang_rads * dt_s);
        position_m_wm += Vector2::new(heading_rad.cos(), heading_rad.sin()) * cmd.lin_ms * dt_s;

        let sample = PoseSample {
            position_m_wm,
            attitude_q_wm: UnitQuaternion::from_euler_angles(0.0, 0.0, heading_rad),
        };

        // A closed channel means the executable is gone, which is the
        // shutdown signal for the thread
        if pose_tx.send(sample).is_err() {
            break;
        }

        if step % u64::from(params.scan_decimation) == 0 {
            let scan = synth_scan(&position_m_wm, heading_rad, &params.boxes, params.ceiling_m);
            if scan_tx.send(scan).is_err() {
                break;
            }
        }

        step += 1;
        thread::sleep(Duration::from_secs_f64(dt_s));
    }
}

/// Synthesise a 360 sample range scan, one sample per degree starting at the
/// robot's forward direction.
fn synth_scan(
    origin_m_wm: &Vector2<f64>,
    heading_rad: f64,
    boxes: &[BoxObstacle],
    ceiling_m: f64,
) -> Vec<f64> {
    (0..360)
        .map(|deg| {
            let angle_rad = heading_rad + (deg as f64).to_radians();
            let dir = Vector2::new(angle_rad.cos(), angle_rad.sin());

            boxes
                .iter()
                .filter_map(|b| ray_box_distance(origin_m_wm, &dir, b))
                .fold(ceiling_m, f64::min)
        })
        .collect()
}

/// Get the distance along the ray at which it first hits the box, or `None`
/// if it misses. An origin inside the box yields zero.
///
/// Standard slab intersection, `dir` must be a unit vector.
fn ray_box_distance(
    origin_m_wm: &Vector2<f64>,
    dir: &Vector2<f64>,
    obstacle: &BoxObstacle,
) -> Option<f64> {
    let mut t_near = f64::NEG_INFINITY;
    let mut t_far = f64::INFINITY;

    for axis in 0..2 {
        if dir[axis].abs() < 1e-12 {
            // Ray parallel to this axis' slabs: either always inside them or
            // always outside
            if origin_m_wm[axis] < obstacle.min_m_wm[axis]
                || origin_m_wm[axis] > obstacle.max_m_wm[axis]
            {
                return None;
            }
        } else {
            let t_0 = (obstacle.min_m_wm[axis] - origin_m_wm[axis]) / dir[axis];
            let t_1 = (obstacle.max_m_wm[axis] - origin_m_wm[axis]) / dir[axis];

            t_near = t_near.max(t_0.min(t_1));
            t_far = t_far.min(t_0.max(t_1));
        }
    }

    if t_near <= t_far && t_far >= 0.0 {
        Some(t_near.max(0.0))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    fn unit_box() -> BoxObstacle {
        BoxObstacle {
            min_m_wm: Vector2::new(2.0, -1.0),
            max_m_wm: Vector2::new(3.0, 1.0),
        }
    }

    #[test]
    fn test_ray_hits_box() {
        let dist = ray_box_distance(
            &Vector2::new(0.0, 0.0),
            &Vector2::new(1.0, 0.0),
            &unit_box(),
        );
        assert_eq!(dist, Some(2.0));
    }

    #[test]
    fn test_ray_misses_box() {
        // Pointing away
        assert_eq!(
            ray_box_distance(
                &Vector2::new(0.0, 0.0),
                &Vector2::new(-1.0, 0.0),
                &unit_box()
            ),
            None
        );

        // Parallel to the box, offset above it
        assert_eq!(
            ray_box_distance(
                &Vector2::new(0.0, 2.0),
                &Vector2::new(1.0, 0.0),
                &unit_box()
            ),
            None
        );
    }

    #[test]
    fn test_origin_inside_box() {
        let dist = ray_box_distance(
            &Vector2::new(2.5, 0.0),
            &Vector2::new(1.0, 0.0),
            &unit_box(),
        );
        assert_eq!(dist, Some(0.0));
    }

    #[test]
    fn test_synth_scan_sees_box_ahead() {
        let scan = synth_scan(&Vector2::new(0.0, 0.0), 0.0, &[unit_box()], 10.0);

        assert_eq!(scan.len(), 360);

        // Straight ahead the box face is 2 m away
        assert!((scan[0] - 2.0).abs() < 1e-9);

        // Behind the robot the world is open
        assert_eq!(scan[180], 10.0);
    }

    #[test]
    fn test_synth_scan_rotates_with_heading() {
        // Facing +Y, the box now sits 90 deg to the robot's right
        let scan = synth_scan(
            &Vector2::new(0.0, 0.0),
            std::f64::consts::FRAC_PI_2,
            &[unit_box()],
            10.0,
        );

        assert_eq!(scan[0], 10.0);
        assert!((scan[270] - 2.0).abs() < 1e-9);
    }
}
