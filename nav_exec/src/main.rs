//! Main navigation executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise all modules
//!     - Main loop (fixed 10 Hz cadence):
//!         - System input acquisition:
//!             - Latest pose sample
//!             - Latest range scan, reduced to sectors
//!         - Waypoint selection (active sub-goal from current position)
//!         - Arrival check against the final goal
//!         - Navigation control processing
//!         - Velocity command output
//!
//! The pose and ranging collaborators deliver asynchronously on their own
//! threads; each cycle simply reads the latest value of each. The loop exits
//! only when the robot is within the arrival threshold of the final goal, at
//! which point one final stop command is emitted.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use nav_lib::{
    data_store::DataStore, loc::Pose, nav_ctrl, nav_ctrl::VelocityCmd, scan,
    scan::SectorScan, sim_client::SimClient, waypoint::WaypointSelector,
};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{eyre::WrapErr, Report};
use log::{debug, info, warn};
use std::thread;
use std::time::{Duration, Instant};

// Internal
use util::{
    logger::{logger_init, LevelFilter},
    module::State,
    session::Session,
};

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Target period of one cycle.
const CYCLE_PERIOD_S: f64 = 0.10;

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session = Session::new("nav_exec", "sessions")
        .wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(LevelFilter::Trace, &session)
        .wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Bug0 Navigation Executable\n");
    info!("Session directory: {:?}\n", session.session_root);

    // ---- LOAD PARAMETERS ----

    let scan_params: scan::Params =
        util::params::load("scan.toml").wrap_err("Could not load scan params")?;

    let waypoints = WaypointSelector::init("waypoints.toml")
        .wrap_err("Failed to initialise the WaypointSelector")?;

    info!("Exec parameters loaded");

    // ---- INITIALISE DATASTORE ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    // ---- INITIALISE MODULES ----

    ds.nav_ctrl
        .init("nav_ctrl.toml", &session)
        .wrap_err("Failed to initialise NavCtrl")?;
    info!("NavCtrl init complete");

    info!("Module initialisation complete\n");

    // ---- INITIALISE DATA SOURCES ----

    let sim_client = {
        let c = SimClient::new("sim.toml").wrap_err("Failed to initialise SimClient")?;
        info!("SimClient initialised");
        c
    };

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // ---- DATA INPUT ----

        // Latest-value reads: anything older than the newest pending sample
        // is dropped, and with nothing pending the previous values stand
        if let Some(sample) = sim_client.latest_pose() {
            ds.pose_wm = Pose::from_sample(&sample);
        }

        if let Some(ranges_m) = sim_client.latest_scan() {
            ds.sector_scan = SectorScan::from_ranges(&ranges_m, scan_params.ceiling_m);
        }

        // ---- WAYPOINT SELECTION ----

        ds.active_goal_m_wm = waypoints.active_goal(&ds.pose_wm.position_m_wm);

        // ---- ARRIVAL CHECK ----

        let dist_to_final_m = (waypoints.final_goal() - ds.pose_wm.position_m_wm).norm();

        if dist_to_final_m <= ds.nav_ctrl.arrival_thresh_m() {
            info!(
                "The robot has arrived at the final goal ({:.3} m away)",
                dist_to_final_m
            );

            ds.nav_ctrl_output = VelocityCmd::zero();
            if let Err(e) = sim_client.send_cmd(&ds.nav_ctrl_output) {
                warn!("Could not send the final stop command: {}", e);
            }

            break;
        }

        // ---- CONTROL ALGORITHM PROCESSING ----

        ds.nav_ctrl_input = nav_ctrl::InputData {
            pose: ds.pose_wm,
            scan: ds.sector_scan,
            goal_m_wm: ds.active_goal_m_wm,
        };

        match ds.nav_ctrl.proc(&ds.nav_ctrl_input) {
            Ok((output, report)) => {
                ds.nav_ctrl_output = output;
                ds.nav_ctrl_status_rpt = report;
            }
            Err(e) => warn!("Error during NavCtrl processing: {}", e),
        }

        // ---- COMMAND OUTPUT ----

        if let Err(e) = sim_client.send_cmd(&ds.nav_ctrl_output) {
            warn!("Could not send the velocity command: {}", e);
        }

        // Status line on the 1 Hz
        if ds.num_cycles % 10 == 0 {
            debug!(
                "{:?}: position ({:.2}, {:.2}), active goal ({:.2}, {:.2}), \
                {:.2} m to final goal",
                ds.nav_ctrl_status_rpt.mode,
                ds.pose_wm.position_m_wm.x,
                ds.pose_wm.position_m_wm.y,
                ds.active_goal_m_wm.x,
                ds.active_goal_m_wm.y,
                dist_to_final_m
            );
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match Duration::from_secs_f64(CYCLE_PERIOD_S).checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            }
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - CYCLE_PERIOD_S
                );
                ds.num_consec_cycle_overruns += 1;
            }
        }

        // Increment cycle counter
        ds.num_cycles += 1;
    }

    // ---- SHUTDOWN ----

    info!("End of execution");

    Ok(())
}
