//! Commercial/industrial GHG calculator
//!
//! Ten combustion fuels plus electricity, priced through the shared fuel-mix
//! arithmetic in [`crate::fuel_mix`]. Useful energy scales with the sector's
//! energy-use change; the electrification target moves useful energy between
//! the fossil subtotal and electricity.

use crate::engine::Engine;
use crate::fuel_mix::fuel_mix_demand;
use ghgcalc_core::units::growth;
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;

/// Commercial/industrial results of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CommercialIndustrialEmissions {
    /// unit: MMT CO₂e
    pub ghg_mmt: f64,
    /// unit: Btu
    pub electricity_btu: f64,
    /// unit: Btu
    pub natural_gas_btu: f64,
}

impl Engine {
    pub fn compute_ci(&self, inputs: &ScenarioInputs) -> CommercialIndustrialEmissions {
        let demand = fuel_mix_demand(
            &self.baselines().commercial_industrial,
            growth(inputs.ci_energy_change),
            inputs.ci_energy_elec,
        );
        CommercialIndustrialEmissions {
            ghg_mmt: demand.fossil_ghg_mmt + self.electricity_ghg(inputs, demand.electricity_btu),
            electricity_btu: demand.electricity_btu,
            natural_gas_btu: demand.natural_gas_btu,
        }
    }
}
