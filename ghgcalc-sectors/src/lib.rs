//! Per-sector emissions calculators for regional GHG scenarios
//!
//! An [`Engine`] is built once from an inventory. Each sector calculator is a
//! method on the engine taking a [`ScenarioInputs`](ghgcalc_core::ScenarioInputs):
//!
//! | calculator | module |
//! |---|---|
//! | [`Engine::compute_residential`] | [`residential`] |
//! | [`Engine::compute_ci`] | [`commercial`] |
//! | [`Engine::compute_highway`] | [`highway`] |
//! | [`Engine::compute_aviation`] | [`aviation`] |
//! | [`Engine::compute_rail`] | [`rail`] |
//! | [`Engine::compute_other_mobile`] | [`other_mobile`] |
//! | [`Engine::compute_non_energy`] | [`non_energy`] |
//! | [`Engine::compute_sequestration`] | [`sequestration`] |
//!
//! [`Engine::summarize`] evaluates all of them once in dependency order, and
//! the [`views`] shape a summary for charting.

pub mod aviation;
pub mod commercial;
pub mod engine;
pub mod fuel_mix;
pub mod highway;
pub mod non_energy;
pub mod other_mobile;
pub mod rail;
pub mod residential;
pub mod sequestration;
pub mod summary;
pub mod views;

use serde::Serialize;

pub use commercial::CommercialIndustrialEmissions;
pub use engine::{ElectrificationBound, Engine};
pub use non_energy::NonEnergyBreakdown;
pub use other_mobile::OtherMobileEmissions;
pub use rail::RailEmissions;
pub use residential::ResidentialEmissions;
pub use sequestration::SequestrationBreakdown;
pub use summary::{CalibrationRow, ScenarioResults};
pub use views::{BarRow, PieSlice, SequestrationRow, StackedRow, StackedSegment};

/// Emissions of a sector that also draws electricity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectorEmissions {
    /// unit: MMT CO₂e
    pub ghg_mmt: f64,
    /// Delivered electricity
    /// unit: Btu
    pub electricity_btu: f64,
}
