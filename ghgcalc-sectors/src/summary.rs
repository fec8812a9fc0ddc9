//! Whole-scenario evaluation
//!
//! The sector calculators form a DAG: non-energy reads the natural gas drawn
//! by residential and commercial/industrial buildings, and sequestration reads
//! every sector's electricity plus gross emissions. [`Engine::summarize`]
//! evaluates each calculator exactly once in that order.

use crate::commercial::CommercialIndustrialEmissions;
use crate::engine::Engine;
use crate::non_energy::NonEnergyBreakdown;
use crate::other_mobile::OtherMobileEmissions;
use crate::rail::RailEmissions;
use crate::residential::ResidentialEmissions;
use crate::sequestration::SequestrationBreakdown;
use crate::SectorEmissions;
use ghgcalc_core::categories::{BySector, Sector};
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;
use tracing::{debug, warn};

/// Largest acceptable gap between a reported inventory total and the
/// identity scenario, MMT CO₂e.
pub const CALIBRATION_TOLERANCE: f64 = 1.0e-3;

/// Every sector result of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenarioResults {
    pub residential: ResidentialEmissions,
    pub commercial_industrial: CommercialIndustrialEmissions,
    pub highway: SectorEmissions,
    /// unit: MMT CO₂e
    pub aviation: f64,
    pub rail: RailEmissions,
    pub other_mobile: OtherMobileEmissions,
    pub non_energy: NonEnergyBreakdown,
    pub sequestration: SequestrationBreakdown,
}

impl ScenarioResults {
    /// Sector totals, MMT CO₂e.
    pub fn totals(&self) -> BySector<f64> {
        BySector {
            residential: self.residential.ghg_mmt,
            commercial_industrial: self.commercial_industrial.ghg_mmt,
            highway: self.highway.ghg_mmt,
            aviation: self.aviation,
            rail: self.rail.ghg_mmt(),
            other_mobile: self.other_mobile.marine_port.ghg_mmt + self.other_mobile.off_road.ghg_mmt,
            non_energy: self.non_energy.total,
            sequestration: self.sequestration.total,
        }
    }

    /// Electricity drawn by all sectors, Btu.
    pub fn electricity_btu(&self) -> f64 {
        total_electricity_btu(
            &self.residential,
            &self.commercial_industrial,
            &self.highway,
            &self.rail,
            &self.other_mobile,
        )
    }

    pub fn gross_emissions(&self) -> f64 {
        self.totals().gross_emissions()
    }

    pub fn net_emissions(&self) -> f64 {
        self.totals().net_emissions()
    }
}

fn total_electricity_btu(
    residential: &ResidentialEmissions,
    ci: &CommercialIndustrialEmissions,
    highway: &SectorEmissions,
    rail: &RailEmissions,
    other_mobile: &OtherMobileEmissions,
) -> f64 {
    residential.electricity_btu
        + ci.electricity_btu
        + highway.electricity_btu
        + rail.electricity_btu()
        + other_mobile.marine_port.electricity_btu
        + other_mobile.off_road.electricity_btu
}

/// One sector of the calibration report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalibrationRow {
    pub sector: Sector,
    /// Inventory total
    /// unit: MMT CO₂e
    pub reported: f64,
    /// Identity-scenario total
    /// unit: MMT CO₂e
    pub computed: f64,
    /// `computed - reported`
    pub difference: f64,
}

impl CalibrationRow {
    pub fn within_tolerance(&self) -> bool {
        self.difference.abs() <= CALIBRATION_TOLERANCE
    }
}

impl Engine {
    /// Evaluate every calculator once.
    pub fn summarize(&self, inputs: &ScenarioInputs) -> ScenarioResults {
        let residential = self.compute_residential(inputs);
        let commercial_industrial = self.compute_ci(inputs);
        let highway = self.compute_highway(inputs);
        let rail = self.compute_rail_modes(inputs);
        let other_mobile = self.compute_other_mobile_modes(inputs);
        let aviation = self.compute_aviation(inputs);
        let non_energy = self.non_energy_breakdown(
            inputs,
            residential.natural_gas_btu,
            commercial_industrial.natural_gas_btu,
        );

        let gross = residential.ghg_mmt
            + commercial_industrial.ghg_mmt
            + highway.ghg_mmt
            + aviation
            + rail.ghg_mmt()
            + other_mobile.marine_port.ghg_mmt
            + other_mobile.off_road.ghg_mmt
            + non_energy.total;
        let electricity_btu = total_electricity_btu(
            &residential,
            &commercial_industrial,
            &highway,
            &rail,
            &other_mobile,
        );
        let sequestration = self.sequestration_breakdown(inputs, gross, electricity_btu);

        debug!(
            gross_mmt = gross,
            sequestration_mmt = sequestration.total,
            electricity_btu = electricity_btu,
            "Scenario summarized"
        );

        ScenarioResults {
            residential,
            commercial_industrial,
            highway,
            aviation,
            rail,
            other_mobile,
            non_energy,
            sequestration,
        }
    }

    /// Compare the identity scenario against the inventory's reported totals.
    pub fn calibration_report(&self) -> Vec<CalibrationRow> {
        let computed = self.summarize(&self.baseline_scenario()).totals();
        let reported = &self.inventory().reported;
        Sector::ALL
            .iter()
            .map(|sector| {
                let row = CalibrationRow {
                    sector: *sector,
                    reported: *reported.get(*sector),
                    computed: *computed.get(*sector),
                    difference: computed.get(*sector) - reported.get(*sector),
                };
                if !row.within_tolerance() {
                    warn!(
                        sector = %row.sector,
                        reported = row.reported,
                        computed = row.computed,
                        "Identity scenario does not reproduce the reported total"
                    );
                }
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary_matches_standalone_calculators() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.change_pop = 7.5;
        inputs.ci_energy_elec = 60.0;
        inputs.ff_carbon_capture = 30.0;
        let totals = engine.summarize(&inputs).totals();

        assert_eq!(totals.residential, engine.compute_residential(&inputs).ghg_mmt);
        assert_eq!(totals.commercial_industrial, engine.compute_ci(&inputs).ghg_mmt);
        assert_eq!(totals.highway, engine.compute_highway(&inputs).ghg_mmt);
        assert_eq!(totals.aviation, engine.compute_aviation(&inputs));
        assert_eq!(totals.rail, engine.compute_rail(&inputs).ghg_mmt);
        assert_eq!(totals.other_mobile, engine.compute_other_mobile(&inputs).ghg_mmt);
        assert_eq!(totals.non_energy, engine.compute_non_energy(&inputs));
        assert_eq!(totals.sequestration, engine.compute_sequestration(&inputs));
    }

    #[test]
    fn test_net_is_gross_plus_sequestration() {
        let engine = Engine::with_default_inventory().unwrap();
        let results = engine.summarize(&engine.baseline_scenario());
        assert_relative_eq!(
            results.net_emissions(),
            results.gross_emissions() + results.sequestration.total,
            max_relative = 1e-12
        );
        assert!(results.net_emissions() < results.gross_emissions());
    }

    #[test]
    fn test_results_serialise_per_sector() {
        let engine = Engine::with_default_inventory().unwrap();
        let results = engine.summarize(&engine.baseline_scenario());
        let json = serde_json::to_value(results).unwrap();

        assert_eq!(json["aviation"], serde_json::json!(3.9));
        assert_eq!(
            json["sequestration"]["total"].as_f64(),
            Some(results.sequestration.total)
        );
        assert_eq!(
            json["rail"]["freight"]["electricity_btu"].as_f64(),
            Some(results.rail.freight.electricity_btu)
        );
        assert!(json["non_energy"]["natural_gas_fugitive"].is_f64());
    }

    #[test]
    fn test_default_inventory_is_calibrated() {
        let engine = Engine::with_default_inventory().unwrap();
        let report = engine.calibration_report();
        assert_eq!(report.len(), 8);
        for row in report {
            assert!(row.within_tolerance(), "{:?}", row);
        }
    }

    #[test]
    fn test_calibration_flags_drift() {
        let mut inventory = ghgcalc_core::Inventory::default();
        inventory.aviation.baseline_mmt = 4.2;
        let engine = Engine::new(inventory).unwrap();
        let report = engine.calibration_report();
        let aviation = report
            .iter()
            .find(|row| row.sector == Sector::Aviation)
            .unwrap();
        assert!(!aviation.within_tolerance());
        assert_relative_eq!(aviation.difference, 0.3, epsilon = 1e-12);
    }
}
