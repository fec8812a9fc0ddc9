//! Land use, land-use change and forestry parameters

use serde::{Deserialize, Serialize};

/// Forest cover and tree-canopy sequestration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LandUseParameters {
    /// Forest cover in the year before the inventory year
    /// unit: acre
    /// default: 668,440
    pub forest_acres_prior: f64,

    /// Forest cover in the inventory year
    /// unit: acre
    /// default: 667,237
    pub forest_acres_current: f64,

    /// Annual sequestration per acre of standing forest (negative)
    /// unit: MMT CO₂e / acre
    /// default: -2.58e-6
    pub sequestration_mmt_per_acre: f64,

    /// Emissions released per acre of forest lost
    /// unit: MMT CO₂e / acre
    /// default: 1.5e-4
    pub loss_mmt_per_acre: f64,

    /// Annual sequestration by urban trees (negative)
    /// unit: MMT CO₂e
    /// default: -0.41527976
    pub urban_tree_sequestration_mmt: f64,
}

impl Default for LandUseParameters {
    fn default() -> Self {
        Self {
            forest_acres_prior: 668_440.0,
            forest_acres_current: 667_237.0,
            sequestration_mmt_per_acre: -2.58e-6,
            loss_mmt_per_acre: 1.5e-4,
            urban_tree_sequestration_mmt: -0.41527976,
        }
    }
}
