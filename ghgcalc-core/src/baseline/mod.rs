//! Baseline decomposition
//!
//! Derives, once per inventory, the shares that every scenario is compared
//! against. Construction validates the inventory; a [`Baselines`] value is
//! never mutated afterwards, so calculators can divide by its subtotals
//! without further checks.

mod fuel_mix;
mod land_use;
mod rail;
mod residential;

pub use fuel_mix::{FossilShare, FuelMixBaseline};
pub use land_use::LandUseBaseline;
pub use rail::{RailBaseline, RailModeBaseline};
pub use residential::{ResidentialBaseline, SettlementBaseline};

use crate::errors::{GhgError, GhgResult};
use crate::inventory::Inventory;
use is_close::is_close;
use serde::{Deserialize, Serialize};

/// Every derived baseline of an inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Baselines {
    pub residential: ResidentialBaseline,
    pub commercial_industrial: FuelMixBaseline,
    pub rail: RailBaseline,
    pub marine_port: FuelMixBaseline,
    pub off_road: FuelMixBaseline,
    pub land_use: LandUseBaseline,
}

impl Baselines {
    pub fn derive(inventory: &Inventory) -> GhgResult<Self> {
        validate_shared(inventory)?;
        Ok(Self {
            residential: ResidentialBaseline::derive(&inventory.residential)?,
            commercial_industrial: FuelMixBaseline::derive(
                "commercial/industrial",
                &inventory.commercial_industrial.fuels,
            )?,
            rail: RailBaseline::derive(&inventory.rail, &inventory.population)?,
            marine_port: FuelMixBaseline::derive("marine port", &inventory.other_mobile.marine_port)?,
            off_road: FuelMixBaseline::derive("off-road", &inventory.other_mobile.off_road)?,
            land_use: LandUseBaseline::derive(&inventory.land_use)?,
        })
    }
}

/// Checks on values read by more than one sector.
fn validate_shared(inventory: &Inventory) -> GhgResult<()> {
    if inventory.population.total <= 0.0 {
        return Err(GhgError::ZeroBaseline {
            sector: "population".to_string(),
            quantity: "population".to_string(),
        });
    }
    let settlement_total: f64 = inventory
        .population
        .settlement_percent
        .iter()
        .map(|(_, v)| v)
        .sum();
    if !is_close!(settlement_total, 100.0) {
        return Err(GhgError::invalid(
            "population.settlement_percent",
            format!("settlement shares sum to {}, expected 100", settlement_total),
        ));
    }
    let loss = inventory.grid.loss_fraction;
    if !(0.0..1.0).contains(&loss) {
        return Err(GhgError::invalid(
            "grid.loss_fraction",
            format!("{} is outside [0, 1)", loss),
        ));
    }
    if inventory.highway.fleet_mpg <= 0.0 {
        return Err(GhgError::invalid("highway.fleet_mpg", "fuel economy must be positive"));
    }
    Ok(())
}
