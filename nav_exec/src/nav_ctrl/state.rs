//! Implementations for the NavCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info};
use nalgebra::Vector2;

// Internal
use super::{NavCtrlError, Params, VelocityCmd};
use crate::loc::Pose;
use crate::scan::SectorScan;
use util::{module::State, params, session::Session};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Navigation control module state
#[derive(Default)]
pub struct NavCtrl {
    pub(crate) params: Params,

    /// Executing mode. This is the single piece of mutable navigation state
    /// in the system, and only the transitions below write it.
    mode: NavMode,

    /// The velocity command. Persistent between cycles: a cycle which takes
    /// no decision leaves the previous command standing.
    cmd: VelocityCmd,

    report: StatusReport,
}

/// Input data to Navigation control.
#[derive(Debug, Copy, Clone, Default)]
pub struct InputData {
    /// The current pose of the robot.
    pub pose: Pose,

    /// The latest sector scan.
    pub scan: SectorScan,

    /// The active sub-goal in the WM frame.
    ///
    /// Units: meters
    pub goal_m_wm: Vector2<f64>,
}

/// The status report containing monitoring quantities for the cycle.
#[derive(Debug, Copy, Clone, Default)]
pub struct StatusReport {
    /// The mode in force at the end of the cycle.
    pub mode: NavMode,

    /// Distance from the robot to the active sub-goal.
    ///
    /// Units: meters
    pub dist_to_goal_m: f64,

    /// The raw heading error to the active sub-goal. Deliberately not
    /// wrapped into [-pi, pi], see [`NavCtrl::mode_seek_goal`].
    ///
    /// Units: radians
    pub head_error_rad: f64,

    /// True if both forward sectors report an obstacle inside the detection
    /// threshold.
    pub blocked_ahead: bool,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The possible modes of execution of NavCtrl. Each mode is handled by a
/// `mode_xyz` function.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum NavMode {
    /// Drive straight at the active sub-goal under proportional control.
    SeekGoal,

    /// Hug a detected obstacle's boundary until the path ahead clears.
    FollowWall,
}

impl Default for NavMode {
    fn default() -> Self {
        NavMode::SeekGoal
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for NavCtrl {
    type InitData = &'static str;
    type InitError = NavCtrlError;

    type InputData = InputData;
    type OutputData = VelocityCmd;
    type StatusReport = StatusReport;
    type ProcError = NavCtrlError;

    /// Initialise the NavCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(&mut self, init_data: Self::InitData, _session: &Session)
        -> Result<(), Self::InitError>
    {
        self.params = params::load(init_data)?;

        self.mode = NavMode::SeekGoal;
        self.cmd = VelocityCmd::zero();

        Ok(())
    }

    /// Perform cyclic processing of Navigation control.
    ///
    /// Mode execution may mutate `self.cmd`, or leave it untouched so that
    /// the previous command persists for this cycle.
    fn proc(&mut self, input_data: &Self::InputData)
        -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError>
    {
        match self.mode {
            NavMode::SeekGoal => self.mode_seek_goal(input_data),
            NavMode::FollowWall => self.mode_follow_wall(input_data),
        }

        // Setup cycle report
        let to_goal = input_data.goal_m_wm - input_data.pose.position_m_wm;
        self.report = StatusReport {
            mode: self.mode,
            dist_to_goal_m: to_goal.norm(),
            head_error_rad: to_goal.y.atan2(to_goal.x) - input_data.pose.heading_rad,
            blocked_ahead: self.front_blocked(&input_data.scan),
        };

        Ok((self.cmd, self.report))
    }
}

impl NavCtrl {
    /// Get the arrival threshold on the distance to the final goal.
    ///
    /// Units: meters
    pub fn arrival_thresh_m(&self) -> f64 {
        self.params.arrival_thresh_m
    }

    /// Mode goal seeking.
    ///
    /// Proportional control straight at the active sub-goal: linear speed
    /// from the capped distance to the goal, angular rate from the heading
    /// error.
    ///
    /// The heading error is the raw subtraction of the current heading from
    /// the goal bearing, with no wrap into [-pi, pi]. Headings near +/-pi
    /// can therefore produce a large instantaneous turn demand. Inherited
    /// behaviour, kept as-is.
    fn mode_seek_goal(&mut self, input: &InputData) {
        let to_goal = input.goal_m_wm - input.pose.position_m_wm;

        self.cmd = VelocityCmd {
            lin_ms: self.params.kp_lin * to_goal.norm().min(self.params.max_lin_vel_ms),
            ang_rads: self.params.kp_ang
                * (to_goal.y.atan2(to_goal.x) - input.pose.heading_rad),
        };

        debug!(
            "Seeking goal ({:.2}, {:.2}), {:.2} m away",
            input.goal_m_wm.x,
            input.goal_m_wm.y,
            to_goal.norm()
        );

        // An obstacle across both forward lanes ends goal seeking. The
        // proportional command above still stands for this cycle, wall
        // following takes over on the next one.
        if self.front_blocked(&input.scan) {
            info!(
                "Obstacle ahead (front1 {:.2} m, front2 {:.2} m), switching to wall following",
                input.scan.front1_m, input.scan.front2_m
            );
            self.mode = NavMode::FollowWall;
        }
    }

    /// Mode wall following.
    ///
    /// Keeps the obstacle on the robot's right, in priority order:
    ///
    /// 1. front blocked: point turn to the left on the spot;
    /// 2. front and left clear, wall on the right: creep straight forward;
    /// 3. front and both sides clear: hand back to goal seeking. No command
    ///    is produced on this cycle, the previous one persists until goal
    ///    seeking recomputes it next cycle.
    ///
    /// Anything else (e.g. front clear but left blocked) takes no decision
    /// and also leaves the previous command standing.
    fn mode_follow_wall(&mut self, input: &InputData) {
        let scan = &input.scan;
        let thresh_m = self.params.obstacle_dist_m;

        if self.front_blocked(scan) {
            debug!("Wall ahead, turning left");
            self.cmd = VelocityCmd {
                lin_ms: 0.0,
                ang_rads: self.params.turn_rate_rads,
            };
        } else if scan.front1_m > thresh_m
            && scan.front2_m > thresh_m
            && scan.left_m > thresh_m
            && scan.right_m < thresh_m
        {
            debug!("Following the wall on the right ({:.2} m)", scan.right_m);
            self.cmd = VelocityCmd {
                lin_ms: self.params.wall_follow_speed_ms,
                ang_rads: 0.0,
            };
        } else if scan.front1_m > thresh_m
            && scan.front2_m > thresh_m
            && scan.left_m > thresh_m
            && scan.right_m > thresh_m
        {
            info!("Path clear, resuming goal seeking");
            self.mode = NavMode::SeekGoal;
        }
    }

    /// True if both forward sectors report an obstacle inside the detection
    /// threshold.
    fn front_blocked(&self, scan: &SectorScan) -> bool {
        scan.front1_m < self.params.obstacle_dist_m
            && scan.front2_m < self.params.obstacle_dist_m
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::scan::DEFAULT_CEILING_M;

    /// The gains and thresholds shipped in `params/nav_ctrl.toml`.
    fn test_params() -> Params {
        Params {
            kp_lin: 0.7,
            kp_ang: 3.0,
            max_lin_vel_ms: 1.0,
            obstacle_dist_m: 1.0,
            turn_rate_rads: 0.3,
            wall_follow_speed_ms: 0.3,
            arrival_thresh_m: 0.1,
        }
    }

    fn test_ctrl() -> NavCtrl {
        NavCtrl {
            params: test_params(),
            ..Default::default()
        }
    }

    fn scan(front1_m: f64, front2_m: f64, left_m: f64, right_m: f64) -> SectorScan {
        SectorScan {
            front1_m,
            front2_m,
            left_m,
            right_m,
        }
    }

    fn input(pose: Pose, scan: SectorScan, goal: (f64, f64)) -> InputData {
        InputData {
            pose,
            scan,
            goal_m_wm: Vector2::new(goal.0, goal.1),
        }
    }

    #[test]
    fn test_seek_goal_proportional_command() {
        let mut ctrl = test_ctrl();

        // At the origin, facing +X, final goal active, nothing in sight
        let (cmd, report) = ctrl
            .proc(&input(
                Pose::default(),
                SectorScan::open(DEFAULT_CEILING_M),
                (16.0, 7.5),
            ))
            .unwrap();

        assert_eq!(report.mode, NavMode::SeekGoal);
        assert!(!report.blocked_ahead);

        // Distance (~17.7 m) is well over the cap, so the linear demand
        // saturates at kp_lin * max_lin_vel
        assert!((cmd.lin_ms - 0.7).abs() < 1e-9);

        // Angular demand is kp_ang * atan2(7.5, 16)
        let expected_ang = 3.0 * 7.5f64.atan2(16.0);
        assert!((cmd.ang_rads - expected_ang).abs() < 1e-9);
        assert!((cmd.ang_rads - 1.31).abs() < 1e-2);
    }

    #[test]
    fn test_seek_goal_linear_speed_monotonic_and_capped() {
        let mut ctrl = test_ctrl();
        let open = SectorScan::open(DEFAULT_CEILING_M);

        let mut prev_lin_ms = 0.0;
        for dist_m in &[0.1, 0.4, 0.8, 1.0, 2.0, 50.0] {
            let (cmd, _) = ctrl
                .proc(&input(Pose::default(), open, (*dist_m, 0.0)))
                .unwrap();

            assert!(cmd.lin_ms >= prev_lin_ms);
            assert!(cmd.lin_ms <= 0.7 * 1.0 + 1e-9);
            prev_lin_ms = cmd.lin_ms;
        }
    }

    #[test]
    fn test_seek_goal_stays_with_one_lane_clear() {
        let mut ctrl = test_ctrl();

        // Only one forward lane blocked: keep seeking
        let (_, report) = ctrl
            .proc(&input(
                Pose::default(),
                scan(0.5, 5.0, 10.0, 10.0),
                (16.0, 7.5),
            ))
            .unwrap();
        assert_eq!(report.mode, NavMode::SeekGoal);

        let (_, report) = ctrl
            .proc(&input(
                Pose::default(),
                scan(5.0, 0.5, 10.0, 10.0),
                (16.0, 7.5),
            ))
            .unwrap();
        assert_eq!(report.mode, NavMode::SeekGoal);
    }

    #[test]
    fn test_seek_goal_enters_follow_wall() {
        let mut ctrl = test_ctrl();

        // Both forward lanes blocked inside the 1 m threshold
        let blocked = input(Pose::default(), scan(0.5, 0.5, 10.0, 10.0), (16.0, 7.5));

        let (_, report) = ctrl.proc(&blocked).unwrap();
        assert_eq!(report.mode, NavMode::FollowWall);
        assert!(report.blocked_ahead);

        // The next cycle is a stationary left turn
        let (cmd, _) = ctrl.proc(&blocked).unwrap();
        assert_eq!(cmd, VelocityCmd { lin_ms: 0.0, ang_rads: 0.3 });
    }

    #[test]
    fn test_follow_wall_keeps_wall_on_right() {
        let mut ctrl = test_ctrl();
        ctrl.mode = NavMode::FollowWall;

        // Front and left clear, wall on the right: creep forward
        let (cmd, report) = ctrl
            .proc(&input(Pose::default(), scan(2.0, 2.0, 2.0, 0.5), (16.0, 7.5)))
            .unwrap();

        assert_eq!(report.mode, NavMode::FollowWall);
        assert_eq!(cmd, VelocityCmd { lin_ms: 0.3, ang_rads: 0.0 });
    }

    #[test]
    fn test_follow_wall_resumes_seek_when_clear() {
        let mut ctrl = test_ctrl();
        ctrl.mode = NavMode::FollowWall;

        // Establish a turn command first
        let (turn_cmd, _) = ctrl
            .proc(&input(Pose::default(), scan(0.5, 0.5, 2.0, 0.5), (16.0, 7.5)))
            .unwrap();

        // All sectors clear: transition back to goal seeking, with the turn
        // command persisting for this cycle
        let (cmd, report) = ctrl
            .proc(&input(Pose::default(), scan(2.0, 2.0, 2.0, 2.0), (16.0, 7.5)))
            .unwrap();

        assert_eq!(report.mode, NavMode::SeekGoal);
        assert_eq!(cmd, turn_cmd);

        // And the cycle after that recomputes a proportional command
        let (cmd, report) = ctrl
            .proc(&input(
                Pose::default(),
                SectorScan::open(DEFAULT_CEILING_M),
                (16.0, 7.5),
            ))
            .unwrap();
        assert_eq!(report.mode, NavMode::SeekGoal);
        assert!(cmd.lin_ms > 0.0);
    }

    #[test]
    fn test_follow_wall_holds_with_wall_on_left() {
        let mut ctrl = test_ctrl();
        ctrl.mode = NavMode::FollowWall;

        // Establish a creep command
        let (creep_cmd, _) = ctrl
            .proc(&input(Pose::default(), scan(2.0, 2.0, 2.0, 0.5), (16.0, 7.5)))
            .unwrap();

        // Front clear but left blocked: no branch matches, the mode and the
        // previous command both stand
        let (cmd, report) = ctrl
            .proc(&input(Pose::default(), scan(2.0, 2.0, 0.5, 2.0), (16.0, 7.5)))
            .unwrap();

        assert_eq!(report.mode, NavMode::FollowWall);
        assert_eq!(cmd, creep_cmd);
    }
}
