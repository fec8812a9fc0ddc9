//! Rail GHG calculator
//!
//! Each rail mode is priced from its Btu of motion. The electric motion share
//! is set by the scenario; electric and diesel inputs are recovered by
//! dividing by their energy-to-motion efficiencies.

use crate::engine::Engine;
use crate::SectorEmissions;
use ghgcalc_core::categories::Settlement;
use ghgcalc_core::units::{growth, pct, BTU_PER_BBTU, MMT_PER_MT};
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;

/// Rail results per mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RailEmissions {
    pub transit: SectorEmissions,
    pub freight: SectorEmissions,
    pub inter_city: SectorEmissions,
}

impl RailEmissions {
    /// unit: MMT CO₂e
    pub fn ghg_mmt(&self) -> f64 {
        self.transit.ghg_mmt + self.freight.ghg_mmt + self.inter_city.ghg_mmt
    }

    /// unit: Btu
    pub fn electricity_btu(&self) -> f64 {
        self.transit.electricity_btu + self.freight.electricity_btu + self.inter_city.electricity_btu
    }
}

impl Engine {
    /// Price `motion_btu` of traction split at `electric_percent`.
    fn rail_blend(
        &self,
        inputs: &ScenarioInputs,
        motion_btu: f64,
        electric_percent: f64,
        diesel_mt_co2e_per_bbtu: f64,
    ) -> SectorEmissions {
        let rail = &self.inventory().rail;
        let electricity_btu = motion_btu * pct(electric_percent) / rail.electric_motion_efficiency;
        let diesel_btu = motion_btu * (1.0 - pct(electric_percent)) / rail.diesel_motion_efficiency;
        SectorEmissions {
            ghg_mmt: self.electricity_ghg(inputs, electricity_btu)
                + diesel_btu / BTU_PER_BBTU * diesel_mt_co2e_per_bbtu * MMT_PER_MT,
            electricity_btu,
        }
    }

    pub fn compute_rail_modes(&self, inputs: &ScenarioInputs) -> RailEmissions {
        let baseline = &self.baselines().rail;
        let population = self.inventory().population.total * growth(inputs.change_pop);
        let shares = inputs.settlement_percent();

        let transit_motion: f64 = Settlement::ALL
            .iter()
            .map(|s| population * pct(*shares.get(*s)) * baseline.transit_motion_btu_per_capita.get(*s))
            .sum::<f64>()
            * growth(inputs.change_rail_transit);
        let freight_motion = baseline.freight.motion_btu * growth(inputs.change_freight_rail);
        let inter_city_motion = baseline.inter_city.motion_btu * growth(inputs.change_inter_city_rail);

        RailEmissions {
            transit: self.rail_blend(
                inputs,
                transit_motion,
                inputs.rt_energy_elec_motion,
                self.inventory().rail.transit_diesel_mt_co2e_per_bbtu,
            ),
            freight: self.rail_blend(
                inputs,
                freight_motion,
                inputs.f_energy_elec_motion,
                baseline.freight.diesel_mt_co2e_per_bbtu,
            ),
            inter_city: self.rail_blend(
                inputs,
                inter_city_motion,
                inputs.icr_energy_elec_motion,
                baseline.inter_city.diesel_mt_co2e_per_bbtu,
            ),
        }
    }

    pub fn compute_rail(&self, inputs: &ScenarioInputs) -> SectorEmissions {
        let modes = self.compute_rail_modes(inputs);
        SectorEmissions {
            ghg_mmt: modes.ghg_mmt(),
            electricity_btu: modes.electricity_btu(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ghgcalc_core::grid::{GridMix, GridSource};
    use ghgcalc_core::units::BTU_PER_KWH;

    #[test]
    fn test_identity_recovers_freight_inputs() {
        let engine = Engine::with_default_inventory().unwrap();
        let inputs = engine.baseline_scenario();
        let modes = engine.compute_rail_modes(&inputs);
        let freight = &engine.inventory().rail.freight;
        assert_relative_eq!(
            modes.freight.electricity_btu,
            freight.electricity_bbtu * BTU_PER_BBTU,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_identity_recovers_transit_electricity() {
        let engine = Engine::with_default_inventory().unwrap();
        let inputs = engine.baseline_scenario();
        let modes = engine.compute_rail_modes(&inputs);
        let inventory = engine.inventory();
        let expected: f64 = Settlement::ALL
            .iter()
            .map(|s| {
                inventory.population.in_settlement(*s)
                    * inventory.rail.transit_per_capita.get(*s).electricity_kwh
                    * BTU_PER_KWH
            })
            .sum();
        assert_relative_eq!(modes.transit.electricity_btu, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_electrified_rail_on_clean_grid_is_zero() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.set_grid_mix(&GridMix::only(GridSource::Nuclear));
        inputs.rt_energy_elec_motion = 100.0;
        inputs.f_energy_elec_motion = 100.0;
        inputs.icr_energy_elec_motion = 100.0;
        assert_eq!(engine.compute_rail(&inputs).ghg_mmt, 0.0);
    }
}
