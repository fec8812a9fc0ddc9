use crate::errors::{GhgError, GhgResult};
use crate::inventory::LandUseParameters;
use serde::{Deserialize, Serialize};

/// Frozen land-use baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandUseBaseline {
    /// unit: acre
    pub forest_acres_prior: f64,
    /// unit: acre
    pub forest_acres_current: f64,
    /// Historical annual change in forest cover
    /// unit: %
    pub annual_forest_change_percent: f64,
    /// unit: MMT CO₂e / acre (negative)
    pub sequestration_mmt_per_acre: f64,
    /// unit: MMT CO₂e / acre
    pub loss_mmt_per_acre: f64,
    /// unit: MMT CO₂e (negative)
    pub urban_tree_sequestration_mmt: f64,
}

impl LandUseBaseline {
    pub fn derive(parameters: &LandUseParameters) -> GhgResult<Self> {
        if parameters.forest_acres_prior <= 0.0 {
            return Err(GhgError::ZeroBaseline {
                sector: "land use".to_string(),
                quantity: "forest cover".to_string(),
            });
        }
        let annual_forest_change_percent = (parameters.forest_acres_current
            - parameters.forest_acres_prior)
            / parameters.forest_acres_prior
            * 100.0;
        Ok(Self {
            forest_acres_prior: parameters.forest_acres_prior,
            forest_acres_current: parameters.forest_acres_current,
            annual_forest_change_percent,
            sequestration_mmt_per_acre: parameters.sequestration_mmt_per_acre,
            loss_mmt_per_acre: parameters.loss_mmt_per_acre,
            urban_tree_sequestration_mmt: parameters.urban_tree_sequestration_mmt,
        })
    }
}
