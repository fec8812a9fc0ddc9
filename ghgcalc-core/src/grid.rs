//! Electricity grid mix and its emission intensity.
//!
//! Every sector that draws electricity prices it through the same grid mix,
//! which is what couples residential, commercial/industrial, mobile and
//! carbon-capture results to one another.

use crate::units::{pct, BTU_PER_MWH, MMT_PER_LB};
use is_close::is_close;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generation sources in the regional grid mix.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridSource {
    Coal,
    Oil,
    NaturalGas,
    Nuclear,
    Solar,
    Wind,
    Biomass,
    Hydro,
    Geothermal,
    OtherFossil,
}

impl GridSource {
    pub const ALL: [GridSource; 10] = [
        GridSource::Coal,
        GridSource::Oil,
        GridSource::NaturalGas,
        GridSource::Nuclear,
        GridSource::Solar,
        GridSource::Wind,
        GridSource::Biomass,
        GridSource::Hydro,
        GridSource::Geothermal,
        GridSource::OtherFossil,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GridSource::Coal => "Coal",
            GridSource::Oil => "Oil",
            GridSource::NaturalGas => "Natural Gas",
            GridSource::Nuclear => "Nuclear",
            GridSource::Solar => "Solar",
            GridSource::Wind => "Wind",
            GridSource::Biomass => "Biomass",
            GridSource::Hydro => "Hydro",
            GridSource::Geothermal => "Geothermal",
            GridSource::OtherFossil => "Other Fossil Fuel",
        }
    }

    /// Display colour used by the grid-mix pie chart.
    pub fn colour(&self) -> &'static str {
        match self {
            GridSource::Coal => "#4d4d4d",
            GridSource::Oil => "#8c564b",
            GridSource::NaturalGas => "#ff7f0e",
            GridSource::Nuclear => "#9467bd",
            GridSource::Solar => "#ffd92f",
            GridSource::Wind => "#17becf",
            GridSource::Biomass => "#2ca02c",
            GridSource::Hydro => "#1f77b4",
            GridSource::Geothermal => "#d62728",
            GridSource::OtherFossil => "#7f7f7f",
        }
    }
}

impl fmt::Display for GridSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Share of generation by source, in percent.
///
/// The shares are expected to sum to 100 but are never re-normalised: a mix
/// that sums to something else scales electricity emissions accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridMix {
    pub coal: f64,
    pub oil: f64,
    pub natural_gas: f64,
    pub nuclear: f64,
    pub solar: f64,
    pub wind: f64,
    pub biomass: f64,
    pub hydro: f64,
    pub geothermal: f64,
    pub other_fossil: f64,
}

/// Whether a grid mix sums to 100 %.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridMixStatus {
    Balanced,
    Over,
    Under,
}

impl Default for GridMix {
    /// 2015 eGRID subregion generation mix for the region
    fn default() -> Self {
        Self {
            coal: 20.47,
            oil: 0.37,
            natural_gas: 35.34,
            nuclear: 40.21,
            solar: 0.15,
            wind: 0.68,
            biomass: 1.26,
            hydro: 0.93,
            geothermal: 0.0,
            other_fossil: 0.59,
        }
    }
}

impl GridMix {
    /// A mix with every source at zero.
    pub fn empty() -> Self {
        Self {
            coal: 0.0,
            oil: 0.0,
            natural_gas: 0.0,
            nuclear: 0.0,
            solar: 0.0,
            wind: 0.0,
            biomass: 0.0,
            hydro: 0.0,
            geothermal: 0.0,
            other_fossil: 0.0,
        }
    }

    /// A mix drawing 100 % from a single source.
    pub fn only(source: GridSource) -> Self {
        let mut mix = Self::empty();
        *mix.get_mut(source) = 100.0;
        mix
    }

    pub fn get(&self, source: GridSource) -> f64 {
        match source {
            GridSource::Coal => self.coal,
            GridSource::Oil => self.oil,
            GridSource::NaturalGas => self.natural_gas,
            GridSource::Nuclear => self.nuclear,
            GridSource::Solar => self.solar,
            GridSource::Wind => self.wind,
            GridSource::Biomass => self.biomass,
            GridSource::Hydro => self.hydro,
            GridSource::Geothermal => self.geothermal,
            GridSource::OtherFossil => self.other_fossil,
        }
    }

    pub fn get_mut(&mut self, source: GridSource) -> &mut f64 {
        match source {
            GridSource::Coal => &mut self.coal,
            GridSource::Oil => &mut self.oil,
            GridSource::NaturalGas => &mut self.natural_gas,
            GridSource::Nuclear => &mut self.nuclear,
            GridSource::Solar => &mut self.solar,
            GridSource::Wind => &mut self.wind,
            GridSource::Biomass => &mut self.biomass,
            GridSource::Hydro => &mut self.hydro,
            GridSource::Geothermal => &mut self.geothermal,
            GridSource::OtherFossil => &mut self.other_fossil,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridSource, f64)> + '_ {
        GridSource::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    pub fn status(&self) -> GridMixStatus {
        let sum = self.sum();
        if is_close!(sum, 100.0) {
            GridMixStatus::Balanced
        } else if sum > 100.0 {
            GridMixStatus::Over
        } else {
            GridMixStatus::Under
        }
    }

    /// Weighted emission rate of generation, lb CO₂e per MWh generated.
    ///
    /// $$ EF_{grid} = \sum_s \frac{share_s}{100} EF_s $$
    ///
    /// Only fossil sources carry a non-zero factor.
    pub fn lb_co2e_per_mwh(&self, factors: &GridEmissionFactors) -> f64 {
        pct(self.coal) * factors.coal
            + pct(self.oil) * factors.oil
            + pct(self.natural_gas) * factors.natural_gas
            + pct(self.other_fossil) * factors.other_fossil
    }
}

/// Emission factors of fossil generation, lb CO₂e per MWh generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridEmissionFactors {
    /// default: 2201.4
    pub coal: f64,
    /// default: 1780.1
    pub oil: f64,
    /// default: 917.6
    pub natural_gas: f64,
    /// default: 1371.5
    pub other_fossil: f64,
}

impl Default for GridEmissionFactors {
    fn default() -> Self {
        Self {
            coal: 2201.4,
            oil: 1780.1,
            natural_gas: 917.6,
            other_fossil: 1371.5,
        }
    }
}

/// Grid parameters of the inventory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridParameters {
    /// Baseline generation mix
    pub mix: GridMix,

    /// Emission factors per fossil source
    pub factors: GridEmissionFactors,

    /// Fraction of generated electricity lost in transmission and distribution.
    /// Consumption is divided by `(1 - loss_fraction)` to get generation.
    /// unit: fraction
    /// default: 0.0487
    pub loss_fraction: f64,
}

impl Default for GridParameters {
    fn default() -> Self {
        Self {
            mix: GridMix::default(),
            factors: GridEmissionFactors::default(),
            loss_fraction: 0.0487,
        }
    }
}

impl GridParameters {
    /// Emissions from consuming `btu` of electricity supplied by `mix`, MMT CO₂e.
    ///
    /// $$ E = \frac{Btu}{Btu_{MWh}} \cdot \frac{1}{1 - loss} \cdot EF_{grid} \cdot MMT_{lb} $$
    pub fn electricity_ghg(&self, mix: &GridMix, btu: f64) -> f64 {
        btu / BTU_PER_MWH / (1.0 - self.loss_fraction)
            * mix.lb_co2e_per_mwh(&self.factors)
            * MMT_PER_LB
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mix_is_balanced() {
        let mix = GridMix::default();
        assert!((mix.sum() - 100.0).abs() < 1e-9);
        assert_eq!(mix.status(), GridMixStatus::Balanced);
    }

    #[test]
    fn test_status_signals_off_nominal_sums() {
        let mut mix = GridMix::default();
        mix.solar += 5.0;
        assert_eq!(mix.status(), GridMixStatus::Over);
        mix.solar -= 10.0;
        assert_eq!(mix.status(), GridMixStatus::Under);
    }

    #[test]
    fn test_zero_carbon_grid_has_no_emissions() {
        let grid = GridParameters::default();
        for source in [
            GridSource::Nuclear,
            GridSource::Solar,
            GridSource::Wind,
            GridSource::Hydro,
        ] {
            assert_eq!(grid.electricity_ghg(&GridMix::only(source), 1.0e15), 0.0);
        }
    }

    #[test]
    fn test_raw_weights_are_not_renormalised() {
        let grid = GridParameters::default();
        let half = GridMix {
            coal: 50.0,
            ..GridMix::empty()
        };
        let full = GridMix::only(GridSource::Coal);
        let btu = 3.0e12;
        let ratio = grid.electricity_ghg(&half, btu) / grid.electricity_ghg(&full, btu);
        assert!((ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_one_mwh_of_coal_power() {
        let grid = GridParameters::default();
        let ghg = grid.electricity_ghg(&GridMix::only(GridSource::Coal), BTU_PER_MWH);
        let expected = 2201.4 / (1.0 - 0.0487) * MMT_PER_LB;
        assert!((ghg - expected).abs() < 1e-15);
    }
}
