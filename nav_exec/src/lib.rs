//! # Navigation library.
//!
//! This library holds the modules making up the Bug0 navigation executable,
//! allowing them to be used by other crates in the workspace and by the unit
//! tests.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Data store - central struct holding the latest sensor values and all module state
pub mod data_store;

/// Localisation module - converts pose samples into the planar world-map pose
pub mod loc;

/// Navigation control module - the Bug0 mode machine producing velocity commands
pub mod nav_ctrl;

/// Scan module - reduces raw range samples into the four proximity sectors
pub mod scan;

/// Simulation client - provides pose/ranging data and accepts velocity commands
#[cfg(feature = "sim")]
pub mod sim_client;

/// Waypoint module - maps the current position to the active sub-goal
pub mod waypoint;
