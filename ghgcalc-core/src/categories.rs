//! Closed sets of categories used to index inventory data.
//!
//! Each enumeration has a matching `By*` container with one named field per
//! variant, so parameter files stay readable and every lookup is exhaustive.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuels tracked by the inventory.
///
/// Electricity is listed as a fuel so that sector fuel tables can carry it
/// alongside the combustion fuels, but its emissions always come from the
/// grid mix rather than a direct combustion factor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fuel {
    Electricity,
    NaturalGas,
    /// Residential heating fuel oil and kerosene, tabulated together
    FuelOilKerosene,
    Lpg,
    Coal,
    DistillateFuelOil,
    Kerosene,
    MotorGasoline,
    ResidualFuelOil,
    PetroleumCoke,
    StillGas,
    Naphthas,
}

impl Fuel {
    pub fn name(&self) -> &'static str {
        match self {
            Fuel::Electricity => "Electricity",
            Fuel::NaturalGas => "Natural Gas",
            Fuel::FuelOilKerosene => "Fuel Oil/Kerosene",
            Fuel::Lpg => "LPG",
            Fuel::Coal => "Coal",
            Fuel::DistillateFuelOil => "Distillate Fuel Oil",
            Fuel::Kerosene => "Kerosene",
            Fuel::MotorGasoline => "Motor Gasoline",
            Fuel::ResidualFuelOil => "Residual Fuel Oil",
            Fuel::PetroleumCoke => "Petroleum Coke",
            Fuel::StillGas => "Still Gas",
            Fuel::Naphthas => "Naphthas",
        }
    }

    pub fn is_electric(&self) -> bool {
        matches!(self, Fuel::Electricity)
    }
}

impl fmt::Display for Fuel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settlement classes used to split residential, highway and transit-rail demand.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Settlement {
    Urban,
    Suburban,
    Rural,
}

impl Settlement {
    pub const ALL: [Settlement; 3] = [Settlement::Urban, Settlement::Suburban, Settlement::Rural];

    pub fn name(&self) -> &'static str {
        match self {
            Settlement::Urban => "urban",
            Settlement::Suburban => "suburban",
            Settlement::Rural => "rural",
        }
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value per settlement class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BySettlement<T> {
    pub urban: T,
    pub suburban: T,
    pub rural: T,
}

impl<T> BySettlement<T> {
    pub fn new(urban: T, suburban: T, rural: T) -> Self {
        Self {
            urban,
            suburban,
            rural,
        }
    }

    pub fn get(&self, settlement: Settlement) -> &T {
        match settlement {
            Settlement::Urban => &self.urban,
            Settlement::Suburban => &self.suburban,
            Settlement::Rural => &self.rural,
        }
    }

    /// Build a value per settlement class from a function of the class.
    pub fn from_fn(mut f: impl FnMut(Settlement) -> T) -> Self {
        Self {
            urban: f(Settlement::Urban),
            suburban: f(Settlement::Suburban),
            rural: f(Settlement::Rural),
        }
    }

    pub fn try_from_fn<E>(mut f: impl FnMut(Settlement) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            urban: f(Settlement::Urban)?,
            suburban: f(Settlement::Suburban)?,
            rural: f(Settlement::Rural)?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (Settlement, &T)> {
        Settlement::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

/// End uses of residential energy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndUse {
    SpaceHeat,
    WaterHeat,
    Other,
}

impl EndUse {
    pub const ALL: [EndUse; 3] = [EndUse::SpaceHeat, EndUse::WaterHeat, EndUse::Other];

    pub fn is_heating(&self) -> bool {
        !matches!(self, EndUse::Other)
    }
}

/// A value per end use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ByEndUse<T> {
    pub space_heat: T,
    pub water_heat: T,
    pub other: T,
}

impl<T> ByEndUse<T> {
    pub fn new(space_heat: T, water_heat: T, other: T) -> Self {
        Self {
            space_heat,
            water_heat,
            other,
        }
    }

    pub fn get(&self, end_use: EndUse) -> &T {
        match end_use {
            EndUse::SpaceHeat => &self.space_heat,
            EndUse::WaterHeat => &self.water_heat,
            EndUse::Other => &self.other,
        }
    }

    pub fn from_fn(mut f: impl FnMut(EndUse) -> T) -> Self {
        Self {
            space_heat: f(EndUse::SpaceHeat),
            water_heat: f(EndUse::WaterHeat),
            other: f(EndUse::Other),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (EndUse, &T)> {
        EndUse::ALL.into_iter().map(move |u| (u, self.get(u)))
    }
}

impl ByEndUse<f64> {
    pub fn sum(&self) -> f64 {
        self.space_heat + self.water_heat + self.other
    }
}

/// Fuels burned or drawn by households.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidentialFuel {
    Electricity,
    NaturalGas,
    FuelOil,
    Lpg,
}

impl ResidentialFuel {
    pub const ALL: [ResidentialFuel; 4] = [
        ResidentialFuel::Electricity,
        ResidentialFuel::NaturalGas,
        ResidentialFuel::FuelOil,
        ResidentialFuel::Lpg,
    ];

    pub const FOSSIL: [ResidentialFuel; 3] = [
        ResidentialFuel::NaturalGas,
        ResidentialFuel::FuelOil,
        ResidentialFuel::Lpg,
    ];

    pub fn fuel(&self) -> Fuel {
        match self {
            ResidentialFuel::Electricity => Fuel::Electricity,
            ResidentialFuel::NaturalGas => Fuel::NaturalGas,
            ResidentialFuel::FuelOil => Fuel::FuelOilKerosene,
            ResidentialFuel::Lpg => Fuel::Lpg,
        }
    }
}

/// A value per residential fuel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ByResidentialFuel<T> {
    pub electricity: T,
    pub natural_gas: T,
    pub fuel_oil: T,
    pub lpg: T,
}

impl<T> ByResidentialFuel<T> {
    pub fn get(&self, fuel: ResidentialFuel) -> &T {
        match fuel {
            ResidentialFuel::Electricity => &self.electricity,
            ResidentialFuel::NaturalGas => &self.natural_gas,
            ResidentialFuel::FuelOil => &self.fuel_oil,
            ResidentialFuel::Lpg => &self.lpg,
        }
    }

    pub fn get_mut(&mut self, fuel: ResidentialFuel) -> &mut T {
        match fuel {
            ResidentialFuel::Electricity => &mut self.electricity,
            ResidentialFuel::NaturalGas => &mut self.natural_gas,
            ResidentialFuel::FuelOil => &mut self.fuel_oil,
            ResidentialFuel::Lpg => &mut self.lpg,
        }
    }

    pub fn from_fn(mut f: impl FnMut(ResidentialFuel) -> T) -> Self {
        Self {
            electricity: f(ResidentialFuel::Electricity),
            natural_gas: f(ResidentialFuel::NaturalGas),
            fuel_oil: f(ResidentialFuel::FuelOil),
            lpg: f(ResidentialFuel::Lpg),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResidentialFuel, &T)> {
        ResidentialFuel::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Reporting sectors of the inventory.
///
/// The first seven are emitting sectors; `Sequestration` is the non-positive
/// sequestration and storage term.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sector {
    Residential,
    CommercialIndustrial,
    Highway,
    Aviation,
    Rail,
    OtherMobile,
    NonEnergy,
    Sequestration,
}

impl Sector {
    pub const ALL: [Sector; 8] = [
        Sector::Residential,
        Sector::CommercialIndustrial,
        Sector::Highway,
        Sector::Aviation,
        Sector::Rail,
        Sector::OtherMobile,
        Sector::NonEnergy,
        Sector::Sequestration,
    ];

    pub const EMITTING: [Sector; 7] = [
        Sector::Residential,
        Sector::CommercialIndustrial,
        Sector::Highway,
        Sector::Aviation,
        Sector::Rail,
        Sector::OtherMobile,
        Sector::NonEnergy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Sector::Residential => "Residential",
            Sector::CommercialIndustrial => "Commercial/Industrial",
            Sector::Highway => "Mobile-Highway",
            Sector::Aviation => "Mobile-Aviation",
            Sector::Rail => "Mobile-Rail",
            Sector::OtherMobile => "Mobile-Other",
            Sector::NonEnergy => "Non-Energy",
            Sector::Sequestration => "Sequestration and Storage",
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value per reporting sector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BySector<T> {
    pub residential: T,
    pub commercial_industrial: T,
    pub highway: T,
    pub aviation: T,
    pub rail: T,
    pub other_mobile: T,
    pub non_energy: T,
    pub sequestration: T,
}

impl<T> BySector<T> {
    pub fn get(&self, sector: Sector) -> &T {
        match sector {
            Sector::Residential => &self.residential,
            Sector::CommercialIndustrial => &self.commercial_industrial,
            Sector::Highway => &self.highway,
            Sector::Aviation => &self.aviation,
            Sector::Rail => &self.rail,
            Sector::OtherMobile => &self.other_mobile,
            Sector::NonEnergy => &self.non_energy,
            Sector::Sequestration => &self.sequestration,
        }
    }

    pub fn from_fn(mut f: impl FnMut(Sector) -> T) -> Self {
        Self {
            residential: f(Sector::Residential),
            commercial_industrial: f(Sector::CommercialIndustrial),
            highway: f(Sector::Highway),
            aviation: f(Sector::Aviation),
            rail: f(Sector::Rail),
            other_mobile: f(Sector::OtherMobile),
            non_energy: f(Sector::NonEnergy),
            sequestration: f(Sector::Sequestration),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Sector, &T)> {
        Sector::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl BySector<f64> {
    /// Sum of the seven emitting sectors.
    pub fn gross_emissions(&self) -> f64 {
        Sector::EMITTING.iter().map(|s| *self.get(*s)).sum()
    }

    /// Gross emissions plus the (non-positive) sequestration term.
    pub fn net_emissions(&self) -> f64 {
        self.gross_emissions() + self.sequestration
    }
}
