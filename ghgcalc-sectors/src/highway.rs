//! On-road highway GHG calculator
//!
//! Vehicle-miles follow population and per-capita VMT by settlement class.
//! Combustion miles are priced by fleet fuel economy; electric miles by the
//! plug-level consumption on the scenario grid.

use crate::engine::Engine;
use crate::SectorEmissions;
use ghgcalc_core::categories::Settlement;
use ghgcalc_core::units::{growth, pct, BTU_PER_KWH, MMT_PER_LB, MWH_PER_KWH};
use ghgcalc_core::ScenarioInputs;

impl Engine {
    /// Regional vehicle-miles travelled in the scenario.
    pub fn vehicle_miles(&self, inputs: &ScenarioInputs) -> f64 {
        let inventory = self.inventory();
        let population = inventory.population.total * growth(inputs.change_pop);
        let shares = inputs.settlement_percent();
        let per_capita_miles: f64 = Settlement::ALL
            .iter()
            .map(|s| pct(*shares.get(*s)) * inventory.highway.vmt_per_capita.get(*s))
            .sum();
        population * per_capita_miles * growth(inputs.change_veh_miles)
    }

    pub fn compute_highway(&self, inputs: &ScenarioInputs) -> SectorEmissions {
        let highway = &self.inventory().highway;
        let vmt = self.vehicle_miles(inputs);
        let electric_vmt = vmt * pct(inputs.veh_miles_elec);

        let combustion_ghg = (vmt - electric_vmt) / inputs.reg_fleet_mpg
            * highway.lb_co2e_per_gal_gasoline
            * MMT_PER_LB;
        let electricity_btu = electric_vmt * highway.ev_kwh_per_mile * BTU_PER_KWH;
        let electric_ghg = {
            let grid = &self.inventory().grid;
            electric_vmt * highway.ev_kwh_per_mile * MWH_PER_KWH / (1.0 - grid.loss_fraction)
                * inputs.grid_mix().lb_co2e_per_mwh(&grid.factors)
                * MMT_PER_LB
        };

        SectorEmissions {
            ghg_mmt: combustion_ghg + electric_ghg,
            electricity_btu,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_electric_ghg_matches_grid_pricing() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.veh_miles_elec = 100.0;
        let result = engine.compute_highway(&inputs);
        assert_relative_eq!(
            result.ghg_mmt,
            engine.electricity_ghg(&inputs, result.electricity_btu),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_better_fuel_economy_lowers_emissions() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        let base = engine.compute_highway(&inputs).ghg_mmt;
        inputs.reg_fleet_mpg = 40.0;
        assert!(engine.compute_highway(&inputs).ghg_mmt < base);
    }

    #[test]
    fn test_settlement_shift_changes_miles() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        let base = engine.vehicle_miles(&inputs);
        // Moving people from rural to urban areas shortens trips
        inputs.rural_pop_percent -= 5.0;
        inputs.urban_pop_percent += 5.0;
        assert!(engine.vehicle_miles(&inputs) < base);
    }
}
