use crate::categories::Fuel;
use serde::{Deserialize, Serialize};

/// Annual use of one fuel by a sector or mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelUse {
    pub fuel: Fuel,

    /// Delivered energy
    /// unit: BBtu
    pub bbtu: f64,

    /// Fraction of delivered energy converted to useful energy (or motion)
    pub efficiency: f64,

    /// Direct combustion factor; ignored for electricity
    /// unit: MT CO₂e / BBtu
    #[serde(default)]
    pub mt_co2e_per_bbtu: f64,
}

impl FuelUse {
    pub fn new(fuel: Fuel, bbtu: f64, efficiency: f64, mt_co2e_per_bbtu: f64) -> Self {
        Self {
            fuel,
            bbtu,
            efficiency,
            mt_co2e_per_bbtu,
        }
    }

    pub fn electric(bbtu: f64, efficiency: f64) -> Self {
        Self::new(Fuel::Electricity, bbtu, efficiency, 0.0)
    }

    /// Useful energy delivered, BBtu
    pub fn useful_bbtu(&self) -> f64 {
        self.bbtu * self.efficiency
    }
}
