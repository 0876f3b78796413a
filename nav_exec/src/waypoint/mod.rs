//! # Waypoint module
//!
//! Maps the robot's current position to the active sub-goal. The waypoint
//! table encodes prior knowledge of the fixed obstacles between the start
//! area and the final goal: while the robot is inside one of the table's
//! regions it is steered at an intermediate target that routes it around the
//! obstacle, otherwise it is steered at the final goal directly.
//!
//! The selection is a pure function of position. It carries no memory across
//! cycles and is re-evaluated from scratch every cycle, regardless of the
//! navigation mode.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod params;

pub use params::{Params, Region};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use nalgebra::Vector2;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Position-indexed waypoint table.
pub struct WaypointSelector {
    params: Params,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl WaypointSelector {
    /// Initialise the selector from the given parameter file.
    pub fn init(params_path: &str) -> Result<Self, util::params::LoadError> {
        Ok(Self {
            params: util::params::load(params_path)?,
        })
    }

    /// Build a selector directly from a parameter struct.
    pub fn from_params(params: Params) -> Self {
        Self { params }
    }

    /// Get the active sub-goal for the given position.
    ///
    /// The regions are tested in table order and the first match wins, so
    /// overlapping regions are resolved by their ordering in the parameter
    /// file. If no region matches the final goal is returned.
    pub fn active_goal(&self, position_m_wm: &Vector2<f64>) -> Vector2<f64> {
        for region in &self.params.regions {
            if position_m_wm.x < region.x_lim_m && position_m_wm.y < region.y_lim_m {
                return region.target_m_wm;
            }
        }

        self.params.final_goal_m_wm
    }

    /// Get the final goal position.
    pub fn final_goal(&self) -> Vector2<f64> {
        self.params.final_goal_m_wm
    }
}

// ---------------------------------------------------------------------------
// TESTS
// ---------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    /// The waypoint table shipped in `params/waypoints.toml`.
    fn test_selector() -> WaypointSelector {
        WaypointSelector::from_params(Params {
            final_goal_m_wm: Vector2::new(16.0, 7.5),
            regions: vec![
                Region {
                    x_lim_m: 1.0,
                    y_lim_m: 4.0,
                    target_m_wm: Vector2::new(1.0, 4.5),
                },
                Region {
                    x_lim_m: 8.1,
                    y_lim_m: 6.5,
                    target_m_wm: Vector2::new(8.5, 6.0),
                },
            ],
        })
    }

    #[test]
    fn test_first_matching_region_wins() {
        let sel = test_selector();

        // Inside the first region
        assert_eq!(
            sel.active_goal(&Vector2::new(0.5, 3.0)),
            Vector2::new(1.0, 4.5)
        );

        // Past the first region's y limit, still inside the second
        assert_eq!(
            sel.active_goal(&Vector2::new(0.5, 5.0)),
            Vector2::new(8.5, 6.0)
        );

        // Past both regions
        assert_eq!(
            sel.active_goal(&Vector2::new(12.0, 7.0)),
            Vector2::new(16.0, 7.5)
        );
    }

    #[test]
    fn test_selection_is_pure() {
        let sel = test_selector();
        let position = Vector2::new(4.2, 1.3);

        let first = sel.active_goal(&position);

        // Querying other positions in between must not affect the result
        sel.active_goal(&Vector2::new(20.0, 20.0));
        sel.active_goal(&Vector2::new(-3.0, -3.0));

        assert_eq!(sel.active_goal(&position), first);
    }
}
