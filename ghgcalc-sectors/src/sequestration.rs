//! Sequestration and storage calculator
//!
//! Three non-positive terms:
//!
//! - land use: urban trees plus standing forest
//! - source capture: a share of the grid emissions of all electricity drawn
//!   by the scenario is captured at the power plant
//! - direct air capture: a share of the remaining net emissions, never below
//!   zero
//!
//! Direct air capture depends on gross emissions, so this calculator runs last.

use crate::engine::Engine;
use ghgcalc_core::units::{growth, pct};
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;

/// Sequestration terms, MMT CO₂e. Every term is ≤ 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SequestrationBreakdown {
    pub urban_trees: f64,
    pub forest: f64,
    /// `urban_trees + forest`
    pub lulucf: f64,
    pub source_capture: f64,
    pub direct_air_capture: f64,
    pub total: f64,
}

impl Engine {
    /// Land-use terms of the sequestration breakdown.
    ///
    /// Returns `(urban_trees, forest)`.
    pub fn land_use_sequestration(&self, inputs: &ScenarioInputs) -> (f64, f64) {
        let land_use = &self.baselines().land_use;
        let urban_trees = land_use.urban_tree_sequestration_mmt * growth(inputs.change_urban_trees);
        let forest = land_use.forest_acres_prior
            * growth(inputs.change_forest)
            * land_use.sequestration_mmt_per_acre;
        (urban_trees, forest)
    }

    /// Sequestration given the scenario's gross emissions and the electricity
    /// drawn by all sectors.
    pub fn sequestration_breakdown(
        &self,
        inputs: &ScenarioInputs,
        gross_emissions: f64,
        electricity_btu: f64,
    ) -> SequestrationBreakdown {
        let (urban_trees, forest) = self.land_use_sequestration(inputs);
        let lulucf = urban_trees + forest;
        let source_capture =
            -self.electricity_ghg(inputs, electricity_btu) * pct(inputs.ff_carbon_capture);
        let remaining = (gross_emissions + source_capture + lulucf).max(0.0);
        let direct_air_capture = -remaining * pct(inputs.air_capture);

        SequestrationBreakdown {
            urban_trees,
            forest,
            lulucf,
            source_capture,
            direct_air_capture,
            total: lulucf + source_capture + direct_air_capture,
        }
    }

    /// Total sequestration and storage, MMT CO₂e.
    ///
    /// Runs every emitting-sector calculator first.
    pub fn compute_sequestration(&self, inputs: &ScenarioInputs) -> f64 {
        self.summarize(inputs).sequestration.total
    }
}
