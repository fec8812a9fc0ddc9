//! Baseline decomposition for sectors tabulated as a fuel mix
//!
//! Used for commercial/industrial energy and for the marine-port and off-road
//! modes, which share the same structure: total useful energy (or motion),
//! the electric share of it, and each fossil fuel's share of the fossil
//! subtotal.

use crate::categories::Fuel;
use crate::errors::{GhgError, GhgResult};
use crate::inventory::FuelUse;
use serde::{Deserialize, Serialize};

/// One fossil fuel's position within a sector's fossil subtotal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FossilShare {
    pub fuel: Fuel,
    /// Share of the fossil useful subtotal
    /// unit: %
    pub percent: f64,
    pub efficiency: f64,
    /// unit: MT CO₂e / BBtu
    pub mt_co2e_per_bbtu: f64,
}

/// Frozen baseline of a fuel-mix sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelMixBaseline {
    /// unit: BBtu
    pub useful_bbtu: f64,
    /// unit: %
    pub electric_percent: f64,
    pub electric_efficiency: f64,
    pub fossil: Vec<FossilShare>,
}

impl FuelMixBaseline {
    pub fn derive(sector: &str, fuels: &[FuelUse]) -> GhgResult<Self> {
        let mut electric: Option<&FuelUse> = None;
        for (i, entry) in fuels.iter().enumerate() {
            if entry.efficiency <= 0.0 {
                return Err(GhgError::invalid(
                    format!("{}[{}].efficiency", sector, i),
                    format!("{} efficiency must be positive", entry.fuel),
                ));
            }
            if entry.bbtu < 0.0 {
                return Err(GhgError::invalid(
                    format!("{}[{}].bbtu", sector, i),
                    format!("{} use cannot be negative", entry.fuel),
                ));
            }
            if fuels[..i].iter().any(|other| other.fuel == entry.fuel) {
                return Err(GhgError::invalid(
                    format!("{}[{}].fuel", sector, i),
                    format!("{} is listed more than once", entry.fuel),
                ));
            }
            if entry.fuel.is_electric() {
                electric = Some(entry);
            }
        }
        let electric = electric.ok_or_else(|| GhgError::MissingFuel {
            sector: sector.to_string(),
            fuel: Fuel::Electricity.to_string(),
        })?;

        let useful_bbtu: f64 = fuels.iter().map(FuelUse::useful_bbtu).sum();
        let fossil_useful = useful_bbtu - electric.useful_bbtu();
        if fossil_useful <= 0.0 {
            // Scenario deltas are measured relative to the fossil share
            return Err(GhgError::ZeroBaseline {
                sector: sector.to_string(),
                quantity: "fossil-fuel use".to_string(),
            });
        }

        let fossil = fuels
            .iter()
            .filter(|entry| !entry.fuel.is_electric())
            .map(|entry| FossilShare {
                fuel: entry.fuel,
                percent: entry.useful_bbtu() / fossil_useful * 100.0,
                efficiency: entry.efficiency,
                mt_co2e_per_bbtu: entry.mt_co2e_per_bbtu,
            })
            .collect();

        Ok(Self {
            useful_bbtu,
            electric_percent: electric.useful_bbtu() / useful_bbtu * 100.0,
            electric_efficiency: electric.efficiency,
            fossil,
        })
    }

    /// Baseline fossil-fuel share of useful energy
    pub fn fossil_percent(&self) -> f64 {
        100.0 - self.electric_percent
    }

    /// Lowest electrification target, equal to the baseline electric share
    pub fn min_electrification(&self) -> f64 {
        self.electric_percent
    }

    pub fn fossil_share(&self, fuel: Fuel) -> Option<&FossilShare> {
        self.fossil.iter().find(|share| share.fuel == fuel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn simple_mix() -> Vec<FuelUse> {
        vec![
            FuelUse::electric(100.0, 1.0),
            FuelUse::new(Fuel::NaturalGas, 200.0, 0.75, 53.11),
            FuelUse::new(Fuel::Coal, 50.0, 1.0, 95.52),
        ]
    }

    #[test]
    fn test_shares() {
        let baseline = FuelMixBaseline::derive("test", &simple_mix()).unwrap();
        // useful: 100 electric + 150 gas + 50 coal
        assert_relative_eq!(baseline.useful_bbtu, 300.0);
        assert_relative_eq!(baseline.electric_percent, 100.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(
            baseline.fossil_share(Fuel::NaturalGas).unwrap().percent,
            75.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            baseline.fossil_share(Fuel::Coal).unwrap().percent,
            25.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_missing_electricity() {
        let fuels = vec![FuelUse::new(Fuel::NaturalGas, 10.0, 0.8, 53.11)];
        let result = FuelMixBaseline::derive("test", &fuels);
        assert!(matches!(result, Err(GhgError::MissingFuel { .. })));
    }

    #[test]
    fn test_all_electric_baseline_is_rejected() {
        let fuels = vec![
            FuelUse::electric(10.0, 1.0),
            FuelUse::new(Fuel::NaturalGas, 0.0, 0.8, 53.11),
        ];
        let result = FuelMixBaseline::derive("test", &fuels);
        assert!(matches!(result, Err(GhgError::ZeroBaseline { .. })));
    }

    #[test]
    fn test_duplicate_fuel_is_rejected() {
        let mut fuels = simple_mix();
        fuels.push(FuelUse::new(Fuel::Coal, 1.0, 1.0, 95.52));
        let result = FuelMixBaseline::derive("test", &fuels);
        assert!(matches!(result, Err(GhgError::InvalidInventory { .. })));
    }
}
