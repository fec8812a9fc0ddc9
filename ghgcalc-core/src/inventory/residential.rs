//! Residential energy parameters
//!
//! Per-capita consumption is tabulated in each fuel's native unit and converted
//! to Btu during baseline decomposition.

use crate::categories::{ByEndUse, ByResidentialFuel, BySettlement};
use serde::{Deserialize, Serialize};

/// Annual per-capita residential consumption in native units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidentialConsumption {
    /// unit: MWh
    pub electricity_mwh: f64,
    /// unit: CCF
    pub natural_gas_ccf: f64,
    /// Fuel oil and kerosene
    /// unit: gal
    pub fuel_oil_gal: f64,
    /// unit: gal
    pub lpg_gal: f64,
}

/// Parameters of the residential sector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResidentialParameters {
    /// Annual consumption per capita by settlement class
    pub per_capita: BySettlement<ResidentialConsumption>,

    /// Share of each fuel's delivered energy going to each end use
    /// unit: %
    pub end_use_percent: ByResidentialFuel<ByEndUse<f64>>,

    /// Device efficiency for each fuel and end use (useful / delivered)
    /// unit: fraction
    pub efficiency: ByResidentialFuel<ByEndUse<f64>>,

    /// Divisor applied to useful space-heat Btu switched onto electricity.
    /// Models air-source heat pumps; values above 1 mean a switched Btu draws
    /// less electricity than the fossil Btu it displaces.
    /// default: 15.0
    pub heat_pump_space_divisor: f64,

    /// Divisor applied to useful water-heat Btu switched onto electricity.
    /// Models heat-pump water heaters.
    /// default: 25.0
    pub heat_pump_water_divisor: f64,

    /// unit: lb CO₂e / kCF
    /// default: 120.87
    pub lb_co2e_per_kcf_natural_gas: f64,

    /// unit: lb CO₂e / bbl
    /// default: 947.2
    pub lb_co2e_per_bbl_fuel_oil: f64,

    /// unit: lb CO₂e / bbl
    /// default: 526.0
    pub lb_co2e_per_bbl_lpg: f64,
}

impl Default for ResidentialParameters {
    fn default() -> Self {
        Self {
            per_capita: BySettlement::new(
                ResidentialConsumption {
                    electricity_mwh: 2.35,
                    natural_gas_ccf: 215.0,
                    fuel_oil_gal: 6.2,
                    lpg_gal: 1.4,
                },
                ResidentialConsumption {
                    electricity_mwh: 3.2,
                    natural_gas_ccf: 215.9406,
                    fuel_oil_gal: 31.5,
                    lpg_gal: 6.8,
                },
                ResidentialConsumption {
                    electricity_mwh: 4.0,
                    natural_gas_ccf: 120.0,
                    fuel_oil_gal: 92.0,
                    lpg_gal: 38.5,
                },
            ),
            end_use_percent: ByResidentialFuel {
                electricity: ByEndUse::new(14.0, 9.0, 77.0),
                natural_gas: ByEndUse::new(72.0, 22.0, 6.0),
                fuel_oil: ByEndUse::new(85.0, 13.0, 2.0),
                lpg: ByEndUse::new(68.0, 17.0, 15.0),
            },
            efficiency: ByResidentialFuel {
                electricity: ByEndUse::new(1.0, 0.93, 0.9),
                natural_gas: ByEndUse::new(0.8, 0.6, 0.4),
                fuel_oil: ByEndUse::new(0.78, 0.55, 0.4),
                lpg: ByEndUse::new(0.8, 0.6, 0.4),
            },
            heat_pump_space_divisor: 15.0,
            heat_pump_water_divisor: 25.0,
            lb_co2e_per_kcf_natural_gas: 120.87,
            lb_co2e_per_bbl_fuel_oil: 947.2,
            lb_co2e_per_bbl_lpg: 526.0,
        }
    }
}
