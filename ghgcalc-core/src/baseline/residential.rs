//! Residential baseline decomposition
//!
//! Converts per-capita consumption into useful Btu per capita for each
//! settlement class, then into the shares that scenarios are measured
//! against:
//!
//! 1. useful Btu of each fuel × end-use cell
//!    ($consumption \cdot endUse\% \cdot \eta$)
//! 2. each fuel's share of the class's useful Btu
//! 3. within each fuel, each end use's share of that fuel's useful Btu
//! 4. across the fossil fuels, each end use's share of fossil useful Btu and,
//!    within each end use, each fossil fuel's share of the subtotal
//!
//! The electric OTHER end use cannot be de-electrified, so its share is the
//! lower bound of the electrification target.

use crate::categories::{ByEndUse, ByResidentialFuel, BySettlement, EndUse, ResidentialFuel, Settlement};
use crate::errors::{GhgError, GhgResult};
use crate::inventory::{ResidentialConsumption, ResidentialParameters};
use crate::units::{BTU_PER_CCF_NG, BTU_PER_GAL_FUEL_OIL, BTU_PER_GAL_LPG, BTU_PER_MWH};
use is_close::is_close;
use serde::{Deserialize, Serialize};

/// Frozen baseline shares for one settlement class. All shares are percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettlementBaseline {
    /// unit: Btu / capita
    pub useful_btu_per_capita: f64,

    /// Each fuel's share of useful Btu
    pub fuel_percent: ByResidentialFuel<f64>,

    /// Within each fuel, each end use's share of that fuel's useful Btu
    pub end_use_percent: ByResidentialFuel<ByEndUse<f64>>,

    /// Each end use's share of the fossil-fuel useful Btu
    pub fossil_end_use_percent: ByEndUse<f64>,

    /// Within each end use, each fossil fuel's share of the fossil subtotal.
    /// The electricity entry is always zero.
    pub fossil_fuel_percent: ByEndUse<ByResidentialFuel<f64>>,

    /// Share of electric heating useful Btu that is space heat (the rest is water heat)
    pub electric_space_heat_percent: f64,

    /// Lowest reachable electrification target
    pub min_electrification: f64,
}

impl SettlementBaseline {
    /// Baseline electrification share
    pub fn electric_percent(&self) -> f64 {
        self.fuel_percent.electricity
    }

    /// Share of one fuel × end-use cell in the class's useful Btu
    pub fn cell_percent(&self, fuel: ResidentialFuel, end_use: EndUse) -> f64 {
        self.fuel_percent.get(fuel) * self.end_use_percent.get(fuel).get(end_use) / 100.0
    }

    pub(crate) fn derive(
        settlement: Settlement,
        consumption: &ResidentialConsumption,
        parameters: &ResidentialParameters,
    ) -> GhgResult<Self> {
        let sector = format!("residential ({})", settlement);
        let delivered = ByResidentialFuel {
            electricity: consumption.electricity_mwh * BTU_PER_MWH,
            natural_gas: consumption.natural_gas_ccf * BTU_PER_CCF_NG,
            fuel_oil: consumption.fuel_oil_gal * BTU_PER_GAL_FUEL_OIL,
            lpg: consumption.lpg_gal * BTU_PER_GAL_LPG,
        };

        let cells = ByResidentialFuel::from_fn(|fuel| {
            let split = parameters.end_use_percent.get(fuel);
            let efficiency = parameters.efficiency.get(fuel);
            ByEndUse::from_fn(|u| {
                delivered.get(fuel) * split.get(u) / 100.0 * efficiency.get(u)
            })
        });
        let fuel_useful = ByResidentialFuel::from_fn(|fuel| cells.get(fuel).sum());
        let total: f64 = fuel_useful.iter().map(|(_, v)| v).sum();
        if total <= 0.0 {
            return Err(GhgError::ZeroBaseline {
                sector,
                quantity: "useful energy".to_string(),
            });
        }

        let fuel_percent = ByResidentialFuel::from_fn(|fuel| fuel_useful.get(fuel) / total * 100.0);
        let end_use_percent = ByResidentialFuel::from_fn(|fuel| {
            let useful = *fuel_useful.get(fuel);
            ByEndUse::from_fn(|u| {
                if useful > 0.0 {
                    cells.get(fuel).get(u) / useful * 100.0
                } else {
                    0.0
                }
            })
        });

        let fossil_by_end_use = ByEndUse::from_fn(|u| {
            ResidentialFuel::FOSSIL
                .iter()
                .map(|fuel| cells.get(*fuel).get(u))
                .sum::<f64>()
        });
        let fossil_total = fossil_by_end_use.sum();
        if fossil_total <= 0.0 {
            return Err(GhgError::ZeroBaseline {
                sector,
                quantity: "fossil-fuel use".to_string(),
            });
        }
        for u in EndUse::ALL {
            // Surrendered electric Btu has to land on some fossil fuel
            if *cells.electricity.get(u) > 0.0 && *fossil_by_end_use.get(u) <= 0.0 {
                return Err(GhgError::ZeroBaseline {
                    sector,
                    quantity: format!("fossil-fuel {:?} use", u),
                });
            }
        }

        let fossil_end_use_percent =
            ByEndUse::from_fn(|u| fossil_by_end_use.get(u) / fossil_total * 100.0);
        let fossil_fuel_percent = ByEndUse::from_fn(|u| {
            let subtotal = *fossil_by_end_use.get(u);
            ByResidentialFuel::from_fn(|fuel| {
                if fuel == ResidentialFuel::Electricity || subtotal <= 0.0 {
                    0.0
                } else {
                    cells.get(fuel).get(u) / subtotal * 100.0
                }
            })
        });

        let electric_heating: f64 = cells
            .electricity
            .iter()
            .filter(|(u, _)| u.is_heating())
            .map(|(_, v)| v)
            .sum();
        let electric_space_heat_percent = if electric_heating > 0.0 {
            cells.electricity.space_heat / electric_heating * 100.0
        } else {
            0.0
        };

        let min_electrification =
            fuel_percent.electricity * end_use_percent.electricity.other / 100.0;

        Ok(Self {
            useful_btu_per_capita: total,
            fuel_percent,
            end_use_percent,
            fossil_end_use_percent,
            fossil_fuel_percent,
            electric_space_heat_percent,
            min_electrification,
        })
    }
}

/// Residential baseline for every settlement class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidentialBaseline {
    pub settlements: BySettlement<SettlementBaseline>,
}

impl ResidentialBaseline {
    pub fn derive(parameters: &ResidentialParameters) -> GhgResult<Self> {
        validate(parameters)?;
        let settlements = BySettlement::try_from_fn(|settlement| {
            SettlementBaseline::derive(
                settlement,
                parameters.per_capita.get(settlement),
                parameters,
            )
        })?;
        Ok(Self { settlements })
    }

    pub fn get(&self, settlement: Settlement) -> &SettlementBaseline {
        self.settlements.get(settlement)
    }
}

fn validate(parameters: &ResidentialParameters) -> GhgResult<()> {
    for fuel in ResidentialFuel::ALL {
        let split = parameters.end_use_percent.get(fuel);
        if !is_close!(split.sum(), 100.0) {
            return Err(GhgError::invalid(
                format!("residential.end_use_percent.{:?}", fuel),
                format!("end-use shares sum to {}, expected 100", split.sum()),
            ));
        }
        for (u, efficiency) in parameters.efficiency.get(fuel).iter() {
            if *efficiency <= 0.0 {
                return Err(GhgError::invalid(
                    format!("residential.efficiency.{:?}.{:?}", fuel, u),
                    format!("{} device efficiency must be positive", fuel.fuel()),
                ));
            }
        }
    }
    for (settlement, consumption) in parameters.per_capita.iter() {
        let values = [
            consumption.electricity_mwh,
            consumption.natural_gas_ccf,
            consumption.fuel_oil_gal,
            consumption.lpg_gal,
        ];
        if values.iter().any(|v| *v < 0.0) {
            return Err(GhgError::invalid(
                format!("residential.per_capita.{}", settlement),
                "consumption cannot be negative",
            ));
        }
    }
    if parameters.heat_pump_space_divisor <= 0.0 || parameters.heat_pump_water_divisor <= 0.0 {
        return Err(GhgError::invalid(
            "residential.heat_pump_*_divisor",
            "heat-pump divisors must be positive",
        ));
    }
    Ok(())
}
