//! Rail baseline decomposition
//!
//! Rail energy is compared in Btu of motion: electric and diesel inputs are
//! multiplied by their energy-to-motion efficiencies so that a change in the
//! electric motion share moves the same amount of traction between them.

use crate::categories::BySettlement;
use crate::errors::{GhgError, GhgResult};
use crate::inventory::{PopulationParameters, RailModeParameters, RailParameters};
use crate::units::{BTU_PER_BBTU, BTU_PER_GAL_DIESEL, BTU_PER_KWH};
use serde::{Deserialize, Serialize};

/// Baseline of a rail mode tabulated by regional totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailModeBaseline {
    /// unit: Btu
    pub motion_btu: f64,
    /// unit: %
    pub electric_percent: f64,
    /// unit: MT CO₂e / BBtu
    pub diesel_mt_co2e_per_bbtu: f64,
}

impl RailModeBaseline {
    fn derive(
        mode: &str,
        parameters: &RailModeParameters,
        electric_efficiency: f64,
        diesel_efficiency: f64,
    ) -> GhgResult<Self> {
        let electric = parameters.electricity_bbtu * BTU_PER_BBTU * electric_efficiency;
        let diesel = parameters.diesel_bbtu * BTU_PER_BBTU * diesel_efficiency;
        let motion_btu = electric + diesel;
        if motion_btu <= 0.0 {
            return Err(GhgError::ZeroBaseline {
                sector: format!("{} rail", mode),
                quantity: "energy use".to_string(),
            });
        }
        Ok(Self {
            motion_btu,
            electric_percent: electric / motion_btu * 100.0,
            diesel_mt_co2e_per_bbtu: parameters.diesel_mt_co2e_per_bbtu,
        })
    }
}

/// Frozen rail baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailBaseline {
    /// Btu of motion per capita for transit rail
    pub transit_motion_btu_per_capita: BySettlement<f64>,
    /// Population-weighted transit electric motion share
    /// unit: %
    pub transit_electric_percent: f64,
    pub freight: RailModeBaseline,
    pub inter_city: RailModeBaseline,
}

impl RailBaseline {
    pub fn derive(parameters: &RailParameters, population: &PopulationParameters) -> GhgResult<Self> {
        let electric_efficiency = parameters.electric_motion_efficiency;
        let diesel_efficiency = parameters.diesel_motion_efficiency;
        if electric_efficiency <= 0.0 || diesel_efficiency <= 0.0 {
            return Err(GhgError::invalid(
                "rail.*_motion_efficiency",
                "motion efficiencies must be positive",
            ));
        }

        let electric_per_capita = BySettlement::from_fn(|s| {
            parameters.transit_per_capita.get(s).electricity_kwh * BTU_PER_KWH * electric_efficiency
        });
        let transit_motion_btu_per_capita = BySettlement::from_fn(|s| {
            electric_per_capita.get(s)
                + parameters.transit_per_capita.get(s).diesel_gal
                    * BTU_PER_GAL_DIESEL
                    * diesel_efficiency
        });

        let mut electric = 0.0;
        let mut motion = 0.0;
        for (settlement, per_capita) in transit_motion_btu_per_capita.iter() {
            let people = population.in_settlement(settlement);
            electric += people * electric_per_capita.get(settlement);
            motion += people * per_capita;
        }
        if motion <= 0.0 {
            return Err(GhgError::ZeroBaseline {
                sector: "transit rail".to_string(),
                quantity: "energy use".to_string(),
            });
        }

        Ok(Self {
            transit_motion_btu_per_capita,
            transit_electric_percent: electric / motion * 100.0,
            freight: RailModeBaseline::derive(
                "freight",
                &parameters.freight,
                electric_efficiency,
                diesel_efficiency,
            )?,
            inter_city: RailModeBaseline::derive(
                "inter-city",
                &parameters.inter_city,
                electric_efficiency,
                diesel_efficiency,
            )?,
        })
    }
}
