//! Marine-port and off-road GHG calculator
//!
//! Both modes are fuel-mix sectors: see [`crate::fuel_mix`].

use crate::engine::Engine;
use crate::fuel_mix::fuel_mix_demand;
use crate::SectorEmissions;
use ghgcalc_core::baseline::FuelMixBaseline;
use ghgcalc_core::units::growth;
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;

/// Other-mobile results per mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OtherMobileEmissions {
    pub marine_port: SectorEmissions,
    pub off_road: SectorEmissions,
}

impl Engine {
    fn fuel_mix_mode(
        &self,
        inputs: &ScenarioInputs,
        baseline: &FuelMixBaseline,
        change_percent: f64,
        target_percent: f64,
    ) -> SectorEmissions {
        let demand = fuel_mix_demand(baseline, growth(change_percent), target_percent);
        SectorEmissions {
            ghg_mmt: demand.fossil_ghg_mmt + self.electricity_ghg(inputs, demand.electricity_btu),
            electricity_btu: demand.electricity_btu,
        }
    }

    pub fn compute_other_mobile_modes(&self, inputs: &ScenarioInputs) -> OtherMobileEmissions {
        let baselines = self.baselines();
        OtherMobileEmissions {
            marine_port: self.fuel_mix_mode(
                inputs,
                &baselines.marine_port,
                inputs.change_marine_port,
                inputs.mp_energy_elec_motion,
            ),
            off_road: self.fuel_mix_mode(
                inputs,
                &baselines.off_road,
                inputs.change_off_road,
                inputs.or_energy_elec_motion,
            ),
        }
    }

    pub fn compute_other_mobile(&self, inputs: &ScenarioInputs) -> SectorEmissions {
        let modes = self.compute_other_mobile_modes(inputs);
        SectorEmissions {
            ghg_mmt: modes.marine_port.ghg_mmt + modes.off_road.ghg_mmt,
            electricity_btu: modes.marine_port.electricity_btu + modes.off_road.electricity_btu,
        }
    }
}
