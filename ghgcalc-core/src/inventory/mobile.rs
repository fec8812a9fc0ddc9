//! Mobile-source parameters: highway, aviation, rail, marine port and off-road

use super::FuelUse;
use crate::categories::{BySettlement, Fuel};
use serde::{Deserialize, Serialize};

/// On-road highway parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighwayParameters {
    /// Annual vehicle-miles travelled per capita
    /// unit: mi
    pub vmt_per_capita: BySettlement<f64>,

    /// Baseline average fleet fuel economy
    /// unit: mpg
    /// default: 23.6
    pub fleet_mpg: f64,

    /// Baseline share of VMT driven electrically
    /// unit: %
    /// default: 0.22
    pub electric_vmt_percent: f64,

    /// unit: lb CO₂e / gal
    /// default: 19.6
    pub lb_co2e_per_gal_gasoline: f64,

    /// Electric-vehicle consumption at the plug
    /// unit: kWh / mi
    /// default: 0.33
    pub ev_kwh_per_mile: f64,
}

impl Default for HighwayParameters {
    fn default() -> Self {
        Self {
            vmt_per_capita: BySettlement::new(5_400.0, 8_722.485, 12_600.0),
            fleet_mpg: 23.6,
            electric_vmt_percent: 0.22,
            lb_co2e_per_gal_gasoline: 19.6,
            ev_kwh_per_mile: 0.33,
        }
    }
}

/// Aviation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AviationParameters {
    /// unit: MMT CO₂e
    /// default: 3.9
    pub baseline_mmt: f64,
}

impl Default for AviationParameters {
    fn default() -> Self {
        Self { baseline_mmt: 3.9 }
    }
}

/// Per-capita transit-rail consumption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitRailConsumption {
    /// unit: kWh
    pub electricity_kwh: f64,
    /// unit: gal
    pub diesel_gal: f64,
}

/// A rail mode tabulated by total regional energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RailModeParameters {
    /// unit: BBtu
    pub electricity_bbtu: f64,
    /// unit: BBtu
    pub diesel_bbtu: f64,
    /// unit: MT CO₂e / BBtu
    pub diesel_mt_co2e_per_bbtu: f64,
}

/// Rail parameters: transit rail per capita, freight and inter-city rail in total.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RailParameters {
    pub transit_per_capita: BySettlement<TransitRailConsumption>,

    /// unit: MT CO₂e / BBtu
    /// default: 74.21
    pub transit_diesel_mt_co2e_per_bbtu: f64,

    pub freight: RailModeParameters,

    pub inter_city: RailModeParameters,

    /// Fraction of electric input converted to motion
    /// default: 0.95
    pub electric_motion_efficiency: f64,

    /// Fraction of diesel input converted to motion
    /// default: 0.35
    pub diesel_motion_efficiency: f64,
}

impl Default for RailParameters {
    fn default() -> Self {
        Self {
            transit_per_capita: BySettlement::new(
                TransitRailConsumption {
                    electricity_kwh: 92.0,
                    diesel_gal: 0.9,
                },
                TransitRailConsumption {
                    electricity_kwh: 38.0,
                    diesel_gal: 1.6,
                },
                TransitRailConsumption {
                    electricity_kwh: 9.0,
                    diesel_gal: 0.7,
                },
            ),
            transit_diesel_mt_co2e_per_bbtu: 74.21,
            freight: RailModeParameters {
                electricity_bbtu: 150.0,
                diesel_bbtu: 2_324.867,
                diesel_mt_co2e_per_bbtu: 74.21,
            },
            inter_city: RailModeParameters {
                electricity_bbtu: 900.0,
                diesel_bbtu: 60.0,
                diesel_mt_co2e_per_bbtu: 74.21,
            },
            electric_motion_efficiency: 0.95,
            diesel_motion_efficiency: 0.35,
        }
    }
}

/// Marine-port and off-road parameters.
///
/// Fuel efficiencies are energy-to-motion efficiencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherMobileParameters {
    pub marine_port: Vec<FuelUse>,
    pub off_road: Vec<FuelUse>,
}

impl Default for OtherMobileParameters {
    fn default() -> Self {
        Self {
            marine_port: vec![
                FuelUse::electric(5.0, 1.0),
                FuelUse::new(Fuel::ResidualFuelOil, 3_369.269, 0.5, 75.35),
                FuelUse::new(Fuel::DistillateFuelOil, 2_200.0, 0.45, 74.21),
            ],
            off_road: vec![
                FuelUse::electric(180.0, 0.9),
                FuelUse::new(Fuel::MotorGasoline, 2_000.0, 0.2, 70.52),
                FuelUse::new(Fuel::DistillateFuelOil, 2_600.0, 0.35, 74.21),
                FuelUse::new(Fuel::Lpg, 800.0, 0.25, 62.98),
            ],
        }
    }
}
