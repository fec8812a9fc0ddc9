//! Scenario inputs
//!
//! A scenario is a closed, flat record of driver values. Percent deltas are
//! signed changes relative to the inventory year; electrification and grid
//! values are absolute percentages.

use crate::baseline::Baselines;
use crate::categories::{BySettlement, Settlement};
use crate::errors::{GhgError, GhgResult};
use crate::grid::{GridMix, GridMixStatus};
use crate::inventory::Inventory;
use is_close::is_close;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Driver values for one scenario.
///
/// Unknown keys are rejected when deserialising so that typos in scenario
/// files surface as errors instead of silently falling back to a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioInputs {
    // Grid mix, %
    pub grid_coal: f64,
    pub grid_oil: f64,
    pub grid_ng: f64,
    pub grid_nuclear: f64,
    pub grid_solar: f64,
    pub grid_wind: f64,
    pub grid_bio: f64,
    pub grid_hydro: f64,
    pub grid_geo: f64,
    pub grid_other_ff: f64,

    // Population
    pub change_pop: f64,
    pub urban_pop_percent: f64,
    pub suburban_pop_percent: f64,
    pub rural_pop_percent: f64,

    // Residential
    pub urb_energy_elec: f64,
    pub sub_energy_elec: f64,
    pub rur_energy_elec: f64,
    pub res_energy_change: f64,

    // Commercial/industrial
    pub ci_energy_elec: f64,
    pub ci_energy_change: f64,
    pub change_industrial_processes: f64,

    // Highway
    pub reg_fleet_mpg: f64,
    pub change_veh_miles: f64,
    pub veh_miles_elec: f64,

    // Rail
    pub rt_energy_elec_motion: f64,
    pub f_energy_elec_motion: f64,
    pub icr_energy_elec_motion: f64,
    pub change_rail_transit: f64,
    pub change_freight_rail: f64,
    pub change_inter_city_rail: f64,

    // Marine, off-road, aviation
    pub mp_energy_elec_motion: f64,
    pub or_energy_elec_motion: f64,
    pub change_marine_port: f64,
    pub change_off_road: f64,
    pub change_air_travel: f64,

    // Non-energy
    pub change_ag: f64,
    pub change_solid_waste: f64,
    pub change_wastewater: f64,

    // Land use
    pub change_forest: f64,
    pub change_urban_trees: f64,

    // Carbon capture
    pub ff_carbon_capture: f64,
    pub air_capture: f64,
}

impl ScenarioInputs {
    /// The identity scenario of an inventory.
    ///
    /// Every delta is zero except `change_forest`, which keeps the historical
    /// annual change in forest cover. Electrification targets equal the
    /// derived baseline shares, so each calculator reproduces the inventory
    /// year.
    pub fn baseline(inventory: &Inventory, baselines: &Baselines) -> Self {
        let mix = &inventory.grid.mix;
        let shares = &inventory.population.settlement_percent;
        let residential = &baselines.residential;
        Self {
            grid_coal: mix.coal,
            grid_oil: mix.oil,
            grid_ng: mix.natural_gas,
            grid_nuclear: mix.nuclear,
            grid_solar: mix.solar,
            grid_wind: mix.wind,
            grid_bio: mix.biomass,
            grid_hydro: mix.hydro,
            grid_geo: mix.geothermal,
            grid_other_ff: mix.other_fossil,
            change_pop: 0.0,
            urban_pop_percent: shares.urban,
            suburban_pop_percent: shares.suburban,
            rural_pop_percent: shares.rural,
            urb_energy_elec: residential.get(Settlement::Urban).electric_percent(),
            sub_energy_elec: residential.get(Settlement::Suburban).electric_percent(),
            rur_energy_elec: residential.get(Settlement::Rural).electric_percent(),
            res_energy_change: 0.0,
            ci_energy_elec: baselines.commercial_industrial.electric_percent,
            ci_energy_change: 0.0,
            change_industrial_processes: 0.0,
            reg_fleet_mpg: inventory.highway.fleet_mpg,
            change_veh_miles: 0.0,
            veh_miles_elec: inventory.highway.electric_vmt_percent,
            rt_energy_elec_motion: baselines.rail.transit_electric_percent,
            f_energy_elec_motion: baselines.rail.freight.electric_percent,
            icr_energy_elec_motion: baselines.rail.inter_city.electric_percent,
            change_rail_transit: 0.0,
            change_freight_rail: 0.0,
            change_inter_city_rail: 0.0,
            mp_energy_elec_motion: baselines.marine_port.electric_percent,
            or_energy_elec_motion: baselines.off_road.electric_percent,
            change_marine_port: 0.0,
            change_off_road: 0.0,
            change_air_travel: 0.0,
            change_ag: 0.0,
            change_solid_waste: 0.0,
            change_wastewater: 0.0,
            change_forest: baselines.land_use.annual_forest_change_percent,
            change_urban_trees: 0.0,
            ff_carbon_capture: 0.0,
            air_capture: 0.0,
        }
    }

    pub fn grid_mix(&self) -> GridMix {
        GridMix {
            coal: self.grid_coal,
            oil: self.grid_oil,
            natural_gas: self.grid_ng,
            nuclear: self.grid_nuclear,
            solar: self.grid_solar,
            wind: self.grid_wind,
            biomass: self.grid_bio,
            hydro: self.grid_hydro,
            geothermal: self.grid_geo,
            other_fossil: self.grid_other_ff,
        }
    }

    pub fn set_grid_mix(&mut self, mix: &GridMix) {
        self.grid_coal = mix.coal;
        self.grid_oil = mix.oil;
        self.grid_ng = mix.natural_gas;
        self.grid_nuclear = mix.nuclear;
        self.grid_solar = mix.solar;
        self.grid_wind = mix.wind;
        self.grid_bio = mix.biomass;
        self.grid_hydro = mix.hydro;
        self.grid_geo = mix.geothermal;
        self.grid_other_ff = mix.other_fossil;
    }

    pub fn settlement_percent(&self) -> BySettlement<f64> {
        BySettlement::new(
            self.urban_pop_percent,
            self.suburban_pop_percent,
            self.rural_pop_percent,
        )
    }

    /// Residential electrification targets per settlement class
    pub fn residential_electrification(&self) -> BySettlement<f64> {
        BySettlement::new(
            self.urb_energy_elec,
            self.sub_energy_elec,
            self.rur_energy_elec,
        )
    }

    pub fn set_residential_electrification(&mut self, settlement: Settlement, percent: f64) {
        match settlement {
            Settlement::Urban => self.urb_energy_elec = percent,
            Settlement::Suburban => self.sub_energy_elec = percent,
            Settlement::Rural => self.rur_energy_elec = percent,
        }
    }

    /// Apply a partial TOML document on top of this scenario.
    ///
    /// ```
    /// # use ghgcalc_core::{Baselines, Inventory, ScenarioInputs};
    /// let inventory = Inventory::default();
    /// let baselines = Baselines::derive(&inventory).unwrap();
    /// let scenario = ScenarioInputs::baseline(&inventory, &baselines)
    ///     .with_overrides("change_pop = 10\nair_capture = 5.0")
    ///     .unwrap();
    /// assert_eq!(scenario.change_pop, 10.0);
    /// ```
    pub fn with_overrides(&self, toml_str: &str) -> GhgResult<Self> {
        let overrides: toml::Table = toml_str.parse()?;
        let mut merged = match toml::Value::try_from(self)? {
            toml::Value::Table(table) => table,
            _ => {
                return Err(GhgError::Error(
                    "Scenario did not serialise to a TOML table".to_string(),
                ))
            }
        };
        for (key, value) in overrides {
            merged.insert(key, value);
        }
        Ok(toml::Value::Table(merged).try_into()?)
    }

    /// Non-fatal problems with the inputs.
    ///
    /// The engine computes a defined result for every input; these are the
    /// conditions a driver is expected to surface to the user.
    pub fn warnings(&self, baselines: &Baselines) -> Vec<InputWarning> {
        let mut warnings = Vec::new();

        let grid = self.grid_mix();
        let status = grid.status();
        if status != GridMixStatus::Balanced {
            warnings.push(InputWarning::GridMixSum {
                sum: grid.sum(),
                status,
            });
        }

        let settlement_sum: f64 = self.settlement_percent().iter().map(|(_, v)| v).sum();
        if !is_close!(settlement_sum, 100.0) {
            warnings.push(InputWarning::SettlementSharesSum {
                sum: settlement_sum,
            });
        }

        let mut check = |slider: &'static str, value: f64, min: f64| {
            if value < min || value > 100.0 {
                warnings.push(InputWarning::ElectrificationOutOfRange {
                    slider,
                    value,
                    min,
                });
            }
        };
        let residential = &baselines.residential;
        check(
            "urb_energy_elec",
            self.urb_energy_elec,
            residential.get(Settlement::Urban).min_electrification,
        );
        check(
            "sub_energy_elec",
            self.sub_energy_elec,
            residential.get(Settlement::Suburban).min_electrification,
        );
        check(
            "rur_energy_elec",
            self.rur_energy_elec,
            residential.get(Settlement::Rural).min_electrification,
        );
        check(
            "ci_energy_elec",
            self.ci_energy_elec,
            baselines.commercial_industrial.min_electrification(),
        );
        check(
            "mp_energy_elec_motion",
            self.mp_energy_elec_motion,
            baselines.marine_port.min_electrification(),
        );
        check(
            "or_energy_elec_motion",
            self.or_energy_elec_motion,
            baselines.off_road.min_electrification(),
        );
        check("veh_miles_elec", self.veh_miles_elec, 0.0);
        check("rt_energy_elec_motion", self.rt_energy_elec_motion, 0.0);
        check("f_energy_elec_motion", self.f_energy_elec_motion, 0.0);
        check("icr_energy_elec_motion", self.icr_energy_elec_motion, 0.0);

        if self.reg_fleet_mpg <= 0.0 {
            warnings.push(InputWarning::NonPositiveFleetMpg {
                value: self.reg_fleet_mpg,
            });
        }

        warnings
    }
}

/// A non-fatal problem with scenario inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputWarning {
    /// The grid mix does not sum to 100 %; electricity emissions use the raw weights
    GridMixSum { sum: f64, status: GridMixStatus },
    /// Settlement population shares do not sum to 100 %
    SettlementSharesSum { sum: f64 },
    /// An electrification target is below its minimum or above 100 %
    ElectrificationOutOfRange {
        slider: &'static str,
        value: f64,
        min: f64,
    },
    NonPositiveFleetMpg { value: f64 },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::GridMixSum { sum, status } => {
                write!(f, "grid mix sums to {:.2}% ({:?})", sum, status)
            }
            InputWarning::SettlementSharesSum { sum } => {
                write!(f, "settlement shares sum to {:.2}%", sum)
            }
            InputWarning::ElectrificationOutOfRange { slider, value, min } => {
                write!(f, "{} = {:.2} is outside [{:.2}, 100]", slider, value, min)
            }
            InputWarning::NonPositiveFleetMpg { value } => {
                write!(f, "fleet fuel economy {} mpg is not positive", value)
            }
        }
    }
}
