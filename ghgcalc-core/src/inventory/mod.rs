//! Regional GHG inventory constants
//!
//! The inventory holds every fixed coefficient the calculators read: the 2015
//! activity data, emission factors and device efficiencies. Each parameter
//! struct defaults to the 2015 regional inventory, and `#[serde(default)]`
//! lets a configuration file override any subset of values.

mod commercial;
mod fuel_use;
mod land_use;
mod mobile;
mod non_energy;
mod population;
mod residential;

pub use commercial::CommercialIndustrialParameters;
pub use fuel_use::FuelUse;
pub use land_use::LandUseParameters;
pub use mobile::{
    AviationParameters, HighwayParameters, OtherMobileParameters, RailModeParameters,
    RailParameters, TransitRailConsumption,
};
pub use non_energy::NonEnergyParameters;
pub use population::PopulationParameters;
pub use residential::{ResidentialConsumption, ResidentialParameters};

use crate::categories::BySector;
use crate::errors::GhgResult;
use crate::grid::GridParameters;
use serde::{Deserialize, Deserializer, Serialize};

/// The complete set of inventory constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Inventory {
    /// Inventory year
    /// default: 2015
    pub year: i32,
    pub population: PopulationParameters,
    pub grid: GridParameters,
    pub residential: ResidentialParameters,
    pub commercial_industrial: CommercialIndustrialParameters,
    pub highway: HighwayParameters,
    pub aviation: AviationParameters,
    pub rail: RailParameters,
    pub other_mobile: OtherMobileParameters,
    pub non_energy: NonEnergyParameters,
    pub land_use: LandUseParameters,

    /// Published sector totals for the inventory year
    /// unit: MMT CO₂e
    #[serde(deserialize_with = "deserialize_reported")]
    pub reported: BySector<f64>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            year: 2015,
            population: PopulationParameters::default(),
            grid: GridParameters::default(),
            residential: ResidentialParameters::default(),
            commercial_industrial: CommercialIndustrialParameters::default(),
            highway: HighwayParameters::default(),
            aviation: AviationParameters::default(),
            rail: RailParameters::default(),
            other_mobile: OtherMobileParameters::default(),
            non_energy: NonEnergyParameters::default(),
            land_use: LandUseParameters::default(),
            reported: reported_2015(),
        }
    }
}

/// Published 2015 sector totals, MMT CO₂e.
fn reported_2015() -> BySector<f64> {
    BySector {
        residential: 15.201897046514373,
        commercial_industrial: 27.47829273576916,
        highway: 17.937509502305318,
        aviation: 3.9,
        rail: 0.4728063141496982,
        other_mobile: 0.8219187053797102,
        non_energy: 7.10780219120066,
        sequestration: -2.1367512166682836,
    }
}

/// Sectors missing from a `[reported]` table keep their 2015 value.
fn deserialize_reported<'de, D>(deserializer: D) -> Result<BySector<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let partial = BySector::<Option<f64>>::deserialize(deserializer)?;
    let defaults = reported_2015();
    Ok(BySector::from_fn(|sector| {
        partial.get(sector).unwrap_or(*defaults.get(sector))
    }))
}

impl Inventory {
    /// Parse an inventory from TOML. Missing values fall back to the defaults.
    pub fn from_toml_str(s: &str) -> GhgResult<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml_string(&self) -> GhgResult<String> {
        Ok(toml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{Fuel, Settlement};

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"aviation": {"baseline_mmt": 4.2}, "population": {"total": 6000000.0}}"#;
        let inventory: Inventory =
            serde_json::from_str(json).expect("Partial deserialization failed");

        assert!((inventory.aviation.baseline_mmt - 4.2).abs() < 1e-10);
        assert!((inventory.population.total - 6.0e6).abs() < 1e-6);

        // Nested defaults are kept
        assert!(
            (inventory.population.settlement_percent.get(Settlement::Suburban) - 58.4).abs()
                < 1e-10
        );
        assert!((inventory.highway.fleet_mpg - 23.6).abs() < 1e-10);
    }

    #[test]
    fn test_partial_reported_totals() {
        let inventory = Inventory::from_toml_str("[reported]\naviation = 4.1\n").unwrap();
        assert_eq!(inventory.reported.aviation, 4.1);
        assert_eq!(
            inventory.reported.residential,
            Inventory::default().reported.residential
        );
        assert_eq!(
            inventory.reported.sequestration,
            Inventory::default().reported.sequestration
        );
    }

    #[test]
    fn test_toml_roundtrip_preserves_fuel_tables() {
        let inventory = Inventory::default();
        let serialised = inventory.to_toml_string().unwrap();
        let deserialised = Inventory::from_toml_str(&serialised).unwrap();

        assert_eq!(
            deserialised.commercial_industrial.fuels,
            inventory.commercial_industrial.fuels
        );
        assert_eq!(deserialised.other_mobile.off_road, inventory.other_mobile.off_road);
    }

    #[test]
    fn test_toml_override_of_fuel_table() {
        let toml = r#"
            [[commercial_industrial.fuels]]
            fuel = "electricity"
            bbtu = 100.0
            efficiency = 1.0

            [[commercial_industrial.fuels]]
            fuel = "natural_gas"
            bbtu = 100.0
            efficiency = 0.5
            mt_co2e_per_bbtu = 53.11
        "#;
        let inventory = Inventory::from_toml_str(toml).unwrap();
        let fuels = &inventory.commercial_industrial.fuels;
        assert_eq!(fuels.len(), 2);
        assert_eq!(fuels[1].fuel, Fuel::NaturalGas);
        assert!((fuels[1].useful_bbtu() - 50.0).abs() < 1e-12);
    }

    #[test]
    fn test_settlement_shares_sum_to_100() {
        let population = PopulationParameters::default();
        let total: f64 = population.settlement_percent.iter().map(|(_, v)| v).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}
