//! Commercial and industrial energy parameters

use super::FuelUse;
use crate::categories::Fuel;
use serde::{Deserialize, Serialize};

/// Parameters of the combined commercial/industrial sector.
///
/// Combustion factors are MT CO₂e per BBtu including CH₄ and N₂O.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialIndustrialParameters {
    /// 2015 fuel use, one entry per fuel, electricity included
    pub fuels: Vec<FuelUse>,
}

impl Default for CommercialIndustrialParameters {
    fn default() -> Self {
        Self {
            fuels: vec![
                FuelUse::electric(112_000.0, 0.95),
                FuelUse::new(Fuel::NaturalGas, 190_401.38, 0.8, 53.11),
                FuelUse::new(Fuel::Coal, 4_000.0, 0.75, 95.52),
                FuelUse::new(Fuel::DistillateFuelOil, 16_000.0, 0.8, 74.21),
                FuelUse::new(Fuel::Kerosene, 300.0, 0.8, 75.44),
                FuelUse::new(Fuel::Lpg, 3_000.0, 0.8, 62.98),
                FuelUse::new(Fuel::MotorGasoline, 2_500.0, 0.25, 70.52),
                FuelUse::new(Fuel::ResidualFuelOil, 1_200.0, 0.75, 75.35),
                FuelUse::new(Fuel::PetroleumCoke, 9_000.0, 0.7, 102.41),
                FuelUse::new(Fuel::StillGas, 30_000.0, 0.7, 66.83),
                FuelUse::new(Fuel::Naphthas, 500.0, 0.7, 68.08),
            ],
        }
    }
}
