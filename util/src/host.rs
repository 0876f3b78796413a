//! Host environment utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use std::env;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Name of the environment variable pointing at the root of the software
/// tree. Parameter and session paths are resolved relative to this root.
pub const SW_ROOT_ENV_VAR: &str = "BUGNAV_SW_ROOT";

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Get the root directory of the software tree.
///
/// Reads the `BUGNAV_SW_ROOT` environment variable. Returns `Err(())` if the
/// variable is unset or empty, in which case the caller should report a
/// configuration error to the user.
pub fn get_sw_root() -> Result<PathBuf, ()> {
    match env::var(SW_ROOT_ENV_VAR) {
        Ok(ref s) if !s.is_empty() => Ok(PathBuf::from(s)),
        _ => Err(())
    }
}
