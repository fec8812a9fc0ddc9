//! Non-energy parameters

use serde::{Deserialize, Serialize};

/// 2015 non-energy emissions and natural-gas leakage factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NonEnergyParameters {
    /// unit: MMT CO₂e
    /// default: 0.38
    pub agriculture_mmt: f64,

    /// unit: MMT CO₂e
    /// default: 1.72
    pub solid_waste_mmt: f64,

    /// unit: MMT CO₂e
    /// default: 0.41
    pub wastewater_mmt: f64,

    /// unit: MMT CO₂e
    /// default: 3.564381
    pub industrial_processes_mmt: f64,

    /// Methane leaked from distribution per volume of gas delivered
    /// unit: MMT CO₂e / MMcf
    /// default: 2.83e-6
    pub ng_fugitive_ch4_mmt_per_mmcf: f64,

    /// CO₂ leaked from distribution per volume of gas delivered
    /// unit: MMT CO₂e / MMcf
    /// default: 2.0e-8
    pub ng_fugitive_co2_mmt_per_mmcf: f64,
}

impl Default for NonEnergyParameters {
    fn default() -> Self {
        Self {
            agriculture_mmt: 0.38,
            solid_waste_mmt: 1.72,
            wastewater_mmt: 0.41,
            industrial_processes_mmt: 3.564381,
            ng_fugitive_ch4_mmt_per_mmcf: 2.83e-6,
            ng_fugitive_co2_mmt_per_mmcf: 2.0e-8,
        }
    }
}
