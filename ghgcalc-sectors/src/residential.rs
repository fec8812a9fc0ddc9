//! Residential GHG calculator
//!
//! # What This Calculator Does
//!
//! 1. Scales each settlement class's baseline useful Btu by population,
//!    settlement share and per-capita energy-use change
//! 2. Splits it into fuel × end-use cells using the frozen baseline shares
//! 3. Moves useful Btu between fossil fuels and electricity to meet the
//!    class's electrification target
//! 4. Converts useful Btu back to delivered Btu per fuel and prices it
//!
//! # Fuel switching
//!
//! The switch is keyed on the sign of `target - baseline` per class:
//!
//! - **Electrify**: the switched useful Btu is taken from every fossil cell in
//!   proportion to its share of fossil use. Switched space heat is divided by
//!   the heat-pump space divisor, switched water heat by the heat-pump water
//!   divisor, and switched OTHER use by the electric OTHER efficiency.
//! - **De-electrify**: the surrendered useful Btu comes out of electric
//!   heating first (split space/water by the class's electric heating shares)
//!   and is handed to the fossil fuels in proportion to their share of that
//!   end use. Anything beyond electric heating comes out of electric OTHER.
//!   Returned Btu is divided by ordinary fossil device efficiencies.

use crate::engine::Engine;
use ghgcalc_core::baseline::SettlementBaseline;
use ghgcalc_core::categories::{ByEndUse, ByResidentialFuel, EndUse, ResidentialFuel, Settlement};
use ghgcalc_core::inventory::ResidentialParameters;
use ghgcalc_core::units::{
    growth, pct, BTU_PER_CCF_NG, BTU_PER_GAL_FUEL_OIL, BTU_PER_GAL_LPG, GAL_PER_BBL, KCF_PER_CCF,
    MMT_PER_LB,
};
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;

/// Residential results of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResidentialEmissions {
    /// unit: MMT CO₂e
    pub ghg_mmt: f64,
    /// Delivered electricity
    /// unit: Btu
    pub electricity_btu: f64,
    /// unit: Btu
    pub natural_gas_btu: f64,
    /// unit: Btu
    pub fuel_oil_btu: f64,
    /// unit: Btu
    pub lpg_btu: f64,
}

/// Direction of the fuel switch for one settlement class.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Switching {
    /// Useful Btu moved from fossil fuels onto electricity
    Electrify { switched_btu: f64 },
    /// Useful Btu moved from electricity back onto fossil fuels
    Deelectrify { surrendered_btu: f64 },
}

impl Switching {
    fn from_target(baseline: &SettlementBaseline, useful_btu: f64, target_percent: f64) -> Self {
        let delta = target_percent - baseline.electric_percent();
        if delta >= 0.0 {
            Switching::Electrify {
                switched_btu: useful_btu * pct(delta),
            }
        } else {
            Switching::Deelectrify {
                surrendered_btu: useful_btu * pct(-delta),
            }
        }
    }
}

/// Divisor applied to useful Btu switched onto electricity for an end use.
fn switch_divisor(parameters: &ResidentialParameters, end_use: EndUse) -> f64 {
    match end_use {
        EndUse::SpaceHeat => parameters.heat_pump_space_divisor,
        EndUse::WaterHeat => parameters.heat_pump_water_divisor,
        EndUse::Other => parameters.efficiency.electricity.other,
    }
}

/// Delivered Btu per fuel for one settlement class.
///
/// # Arguments
///
/// * `baseline` - Frozen shares of the class
/// * `parameters` - Residential device efficiencies and heat-pump divisors
/// * `useful_btu` - Scenario useful Btu of the class
/// * `target_percent` - Electrification target of the class (%)
pub fn settlement_demand(
    baseline: &SettlementBaseline,
    parameters: &ResidentialParameters,
    useful_btu: f64,
    target_percent: f64,
) -> ByResidentialFuel<f64> {
    let cell = |fuel: ResidentialFuel, end_use: EndUse| {
        useful_btu * pct(baseline.cell_percent(fuel, end_use))
    };
    let efficiency = |fuel: ResidentialFuel, end_use: EndUse| {
        *parameters.efficiency.get(fuel).get(end_use)
    };
    let fossil_split = |fuel: ResidentialFuel, end_use: EndUse| {
        pct(*baseline.fossil_fuel_percent.get(end_use).get(fuel))
    };

    let mut demand = ByResidentialFuel::<f64>::default();
    match Switching::from_target(baseline, useful_btu, target_percent) {
        Switching::Electrify { switched_btu } => {
            for end_use in EndUse::ALL {
                let end_use_switched =
                    switched_btu * pct(*baseline.fossil_end_use_percent.get(end_use));
                for fuel in ResidentialFuel::FOSSIL {
                    let switched = end_use_switched * fossil_split(fuel, end_use);
                    *demand.get_mut(fuel) += (cell(fuel, end_use) - switched) / efficiency(fuel, end_use);
                }
                demand.electricity += cell(ResidentialFuel::Electricity, end_use)
                    / efficiency(ResidentialFuel::Electricity, end_use)
                    + end_use_switched / switch_divisor(parameters, end_use);
            }
        }
        Switching::Deelectrify { surrendered_btu } => {
            let electric_heating: f64 = EndUse::ALL
                .iter()
                .filter(|u| u.is_heating())
                .map(|u| cell(ResidentialFuel::Electricity, *u))
                .sum();
            let from_heating = surrendered_btu.min(electric_heating);
            let space_share = pct(baseline.electric_space_heat_percent);
            let surrendered = ByEndUse::new(
                from_heating * space_share,
                from_heating * (1.0 - space_share),
                surrendered_btu - from_heating,
            );
            for (end_use, returned) in surrendered.iter() {
                demand.electricity += (cell(ResidentialFuel::Electricity, end_use) - returned)
                    / efficiency(ResidentialFuel::Electricity, end_use);
                for fuel in ResidentialFuel::FOSSIL {
                    *demand.get_mut(fuel) += (cell(fuel, end_use)
                        + returned * fossil_split(fuel, end_use))
                        / efficiency(fuel, end_use);
                }
            }
        }
    }
    demand
}

impl Engine {
    /// Residential emissions plus the electricity and natural-gas Btu that
    /// downstream calculators consume.
    pub fn compute_residential(&self, inputs: &ScenarioInputs) -> ResidentialEmissions {
        let inventory = self.inventory();
        let parameters = &inventory.residential;
        let population = inventory.population.total * growth(inputs.change_pop);
        let energy_change = growth(inputs.res_energy_change);
        let shares = inputs.settlement_percent();
        let targets = inputs.residential_electrification();

        let mut total = ByResidentialFuel::<f64>::default();
        for settlement in Settlement::ALL {
            let baseline = self.baselines().residential.get(settlement);
            let useful_btu = population
                * pct(*shares.get(settlement))
                * baseline.useful_btu_per_capita
                * energy_change;
            let demand =
                settlement_demand(baseline, parameters, useful_btu, *targets.get(settlement));
            for (fuel, btu) in demand.iter() {
                *total.get_mut(fuel) += btu;
            }
        }

        let electricity_ghg = self.electricity_ghg(inputs, total.electricity);
        // Fossil terms apply the per-capita energy change a second time
        let natural_gas_ghg = total.natural_gas / BTU_PER_CCF_NG
            * energy_change
            * KCF_PER_CCF
            * parameters.lb_co2e_per_kcf_natural_gas
            * MMT_PER_LB;
        let fuel_oil_ghg = total.fuel_oil / BTU_PER_GAL_FUEL_OIL / GAL_PER_BBL
            * energy_change
            * parameters.lb_co2e_per_bbl_fuel_oil
            * MMT_PER_LB;
        let lpg_ghg = total.lpg / BTU_PER_GAL_LPG / GAL_PER_BBL
            * energy_change
            * parameters.lb_co2e_per_bbl_lpg
            * MMT_PER_LB;

        ResidentialEmissions {
            ghg_mmt: electricity_ghg + natural_gas_ghg + fuel_oil_ghg + lpg_ghg,
            electricity_btu: total.electricity,
            natural_gas_btu: total.natural_gas,
            fuel_oil_btu: total.fuel_oil,
            lpg_btu: total.lpg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ghgcalc_core::baseline::ResidentialBaseline;
    use ghgcalc_core::units::BTU_PER_MWH;

    fn suburban() -> (SettlementBaseline, ResidentialParameters) {
        let parameters = ResidentialParameters::default();
        let baseline = ResidentialBaseline::derive(&parameters).unwrap();
        (baseline.get(Settlement::Suburban).clone(), parameters)
    }

    #[test]
    fn test_identity_recovers_delivered_consumption() {
        let (baseline, parameters) = suburban();
        let useful = baseline.useful_btu_per_capita;
        let demand = settlement_demand(&baseline, &parameters, useful, baseline.electric_percent());

        let consumption = parameters.per_capita.suburban;
        assert_relative_eq!(
            demand.electricity,
            consumption.electricity_mwh * BTU_PER_MWH,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            demand.natural_gas,
            consumption.natural_gas_ccf * BTU_PER_CCF_NG,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_full_electrification_removes_fossil_fuels() {
        let (baseline, parameters) = suburban();
        let useful = baseline.useful_btu_per_capita;
        let demand = settlement_demand(&baseline, &parameters, useful, 100.0);
        assert!(demand.natural_gas.abs() < 1e-3);
        assert!(demand.fuel_oil.abs() < 1e-3);
        assert!(demand.lpg.abs() < 1e-3);
    }

    #[test]
    fn test_heat_pump_divisors_shrink_switched_demand() {
        let (baseline, parameters) = suburban();
        let useful = baseline.useful_btu_per_capita;
        let identity = settlement_demand(&baseline, &parameters, useful, baseline.electric_percent());
        let target = baseline.electric_percent() + 10.0;
        let electrified = settlement_demand(&baseline, &parameters, useful, target);

        let added_electricity = electrified.electricity - identity.electricity;
        let removed_fossil = (identity.natural_gas - electrified.natural_gas)
            + (identity.fuel_oil - electrified.fuel_oil)
            + (identity.lpg - electrified.lpg);
        assert!(added_electricity > 0.0);
        assert!(added_electricity < removed_fossil);
    }

    #[test]
    fn test_deelectrification_moves_heating_to_fossil() {
        let (baseline, parameters) = suburban();
        let useful = baseline.useful_btu_per_capita;
        let identity = settlement_demand(&baseline, &parameters, useful, baseline.electric_percent());
        let demand = settlement_demand(&baseline, &parameters, useful, baseline.min_electrification);

        assert!(demand.electricity < identity.electricity);
        assert!(demand.natural_gas > identity.natural_gas);
        assert!(demand.fuel_oil > identity.fuel_oil);
        assert!(demand.lpg > identity.lpg);

        // At the minimum only OTHER remains electric
        let other_only = useful
            * pct(baseline.cell_percent(ResidentialFuel::Electricity, EndUse::Other))
            / parameters.efficiency.electricity.other;
        assert_relative_eq!(demand.electricity, other_only, max_relative = 1e-9);
    }

    #[test]
    fn test_below_minimum_draws_on_electric_other() {
        let (baseline, parameters) = suburban();
        let useful = baseline.useful_btu_per_capita;
        let at_min = settlement_demand(&baseline, &parameters, useful, baseline.min_electrification);
        let below = settlement_demand(&baseline, &parameters, useful, 0.0);
        assert!(below.electricity.abs() < 1e-3);
        assert!(below.natural_gas > at_min.natural_gas);
    }

    #[test]
    fn test_switching_direction() {
        let (baseline, _) = suburban();
        let e = baseline.electric_percent();
        assert!(matches!(
            Switching::from_target(&baseline, 100.0, e),
            Switching::Electrify { switched_btu } if switched_btu == 0.0
        ));
        assert!(matches!(
            Switching::from_target(&baseline, 100.0, e - 1.0),
            Switching::Deelectrify { .. }
        ));
    }
}
