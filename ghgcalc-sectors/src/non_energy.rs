//! Non-energy GHG calculator
//!
//! Agriculture, solid waste, wastewater and industrial processes scale from
//! their inventory values. Natural-gas distribution leaks follow the natural
//! gas delivered to residential and commercial/industrial customers, and
//! forest cleared in the scenario releases its stored carbon here.

use crate::engine::Engine;
use ghgcalc_core::units::{growth, BTU_PER_CCF_NG, CF_PER_CCF, MMCF_PER_CF};
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;

/// Non-energy emissions by source, MMT CO₂e.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NonEnergyBreakdown {
    pub agriculture: f64,
    pub solid_waste: f64,
    pub wastewater: f64,
    pub industrial_processes: f64,
    pub natural_gas_fugitive: f64,
    pub forest_loss: f64,
    pub total: f64,
}

impl Engine {
    /// Emissions from forest cleared below the prior-year cover, MMT CO₂e.
    ///
    /// Zero when forest cover grows.
    pub fn forest_loss(&self, inputs: &ScenarioInputs) -> f64 {
        if inputs.change_forest >= 0.0 {
            return 0.0;
        }
        let land_use = &self.baselines().land_use;
        land_use.forest_acres_prior * (-inputs.change_forest / 100.0) * land_use.loss_mmt_per_acre
    }

    /// Non-energy breakdown given the natural gas delivered to buildings.
    pub fn non_energy_breakdown(
        &self,
        inputs: &ScenarioInputs,
        residential_natural_gas_btu: f64,
        ci_natural_gas_btu: f64,
    ) -> NonEnergyBreakdown {
        let parameters = &self.inventory().non_energy;
        let population_growth = growth(inputs.change_pop);

        let agriculture = parameters.agriculture_mmt * growth(inputs.change_ag);
        let solid_waste =
            parameters.solid_waste_mmt * growth(inputs.change_solid_waste) * population_growth;
        let wastewater =
            parameters.wastewater_mmt * growth(inputs.change_wastewater) * population_growth;
        let industrial_processes =
            parameters.industrial_processes_mmt * growth(inputs.change_industrial_processes);

        let natural_gas_mmcf = (residential_natural_gas_btu + ci_natural_gas_btu) / BTU_PER_CCF_NG
            * CF_PER_CCF
            * MMCF_PER_CF;
        let natural_gas_fugitive = natural_gas_mmcf
            * (parameters.ng_fugitive_ch4_mmt_per_mmcf + parameters.ng_fugitive_co2_mmt_per_mmcf);

        let forest_loss = self.forest_loss(inputs);

        NonEnergyBreakdown {
            agriculture,
            solid_waste,
            wastewater,
            industrial_processes,
            natural_gas_fugitive,
            forest_loss,
            total: agriculture
                + solid_waste
                + wastewater
                + industrial_processes
                + natural_gas_fugitive
                + forest_loss,
        }
    }

    /// Non-energy emissions, MMT CO₂e.
    ///
    /// Runs the residential and commercial/industrial calculators for their
    /// natural gas use.
    pub fn compute_non_energy(&self, inputs: &ScenarioInputs) -> f64 {
        let residential = self.compute_residential(inputs);
        let ci = self.compute_ci(inputs);
        self.non_energy_breakdown(inputs, residential.natural_gas_btu, ci.natural_gas_btu)
            .total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_forest_loss_only_when_clearing() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.change_forest = 5.0;
        assert_eq!(engine.forest_loss(&inputs), 0.0);

        inputs.change_forest = -100.0;
        let land_use = &engine.inventory().land_use;
        assert_relative_eq!(
            engine.forest_loss(&inputs),
            land_use.forest_acres_prior * land_use.loss_mmt_per_acre,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_fugitive_follows_natural_gas() {
        let engine = Engine::with_default_inventory().unwrap();
        let inputs = engine.baseline_scenario();
        let none = engine.non_energy_breakdown(&inputs, 0.0, 0.0);
        assert_eq!(none.natural_gas_fugitive, 0.0);

        // One MMcf of gas
        let btu = BTU_PER_CCF_NG * 1.0e4;
        let one = engine.non_energy_breakdown(&inputs, btu, 0.0);
        let parameters = &engine.inventory().non_energy;
        assert_relative_eq!(
            one.natural_gas_fugitive,
            parameters.ng_fugitive_ch4_mmt_per_mmcf + parameters.ng_fugitive_co2_mmt_per_mmcf,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_waste_follows_population() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        let base = engine.non_energy_breakdown(&inputs, 0.0, 0.0);
        inputs.change_pop = 10.0;
        let grown = engine.non_energy_breakdown(&inputs, 0.0, 0.0);
        assert_relative_eq!(grown.solid_waste, base.solid_waste * 1.1, max_relative = 1e-12);
        assert_relative_eq!(grown.wastewater, base.wastewater * 1.1, max_relative = 1e-12);
        assert_eq!(grown.agriculture, base.agriculture);
    }
}
