//! Chart-ready views of a scenario
//!
//! Each view pairs the inventory year (the identity scenario) with the
//! requested scenario. Rendering is left to the caller.

use crate::engine::Engine;
use ghgcalc_core::categories::Sector;
use ghgcalc_core::grid::{GridMixStatus, GridSource};
use ghgcalc_core::ScenarioInputs;
use serde::Serialize;
use tracing::warn;

/// Label of the scenario row in the stacked views.
pub const SCENARIO_LABEL: &str = "Scenario";

/// One bar-chart group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRow {
    pub sector: Sector,
    /// Inventory-year value rounded to 0.1
    /// unit: MMT CO₂e
    pub reference: f64,
    /// Scenario value rounded to 0.1
    /// unit: MMT CO₂e
    pub scenario: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedSegment {
    pub sector: Sector,
    /// unit: MMT CO₂e
    pub value: f64,
}

/// One stacked bar of emitting sectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedRow {
    pub label: String,
    pub segments: Vec<StackedSegment>,
}

impl StackedRow {
    pub fn total(&self) -> f64 {
        self.segments.iter().map(|s| s.value).sum()
    }
}

/// One bar of the sequestration chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequestrationRow {
    pub label: String,
    /// unit: MMT CO₂e (≤ 0)
    pub value: f64,
}

/// One slice of the grid-mix pie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub source: GridSource,
    pub label: &'static str,
    /// unit: %
    pub percent: f64,
    /// Share of the full circle, normalised by the mix total
    /// unit: degrees
    pub angle_degrees: f64,
    pub colour: &'static str,
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

impl Engine {
    fn reference_label(&self) -> String {
        self.inventory().year.to_string()
    }

    fn warn_on_inputs(&self, inputs: &ScenarioInputs) {
        for warning in self.input_warnings(inputs) {
            warn!(warning = %warning, "Scenario input out of range");
        }
    }

    /// Inventory year vs scenario per sector, rounded to one decimal.
    pub fn view_bar(&self, inputs: &ScenarioInputs) -> Vec<BarRow> {
        self.warn_on_inputs(inputs);
        let reference = self.summarize(&self.baseline_scenario()).totals();
        let scenario = self.summarize(inputs).totals();
        Sector::ALL
            .iter()
            .map(|sector| BarRow {
                sector: *sector,
                reference: round_tenth(*reference.get(*sector)),
                scenario: round_tenth(*scenario.get(*sector)),
            })
            .collect()
    }

    /// Emitting sectors stacked, inventory year then scenario.
    pub fn view_stacked_positive(&self, inputs: &ScenarioInputs) -> Vec<StackedRow> {
        self.warn_on_inputs(inputs);
        let row = |label: String, scenario: &ScenarioInputs| {
            let totals = self.summarize(scenario).totals();
            StackedRow {
                label,
                segments: Sector::EMITTING
                    .iter()
                    .map(|sector| StackedSegment {
                        sector: *sector,
                        value: *totals.get(*sector),
                    })
                    .collect(),
            }
        };
        vec![
            row(self.reference_label(), &self.baseline_scenario()),
            row(SCENARIO_LABEL.to_string(), inputs),
        ]
    }

    /// Sequestration and storage, inventory year then scenario.
    pub fn view_stacked_negative(&self, inputs: &ScenarioInputs) -> Vec<SequestrationRow> {
        self.warn_on_inputs(inputs);
        vec![
            SequestrationRow {
                label: self.reference_label(),
                value: self.compute_sequestration(&self.baseline_scenario()),
            },
            SequestrationRow {
                label: SCENARIO_LABEL.to_string(),
                value: self.compute_sequestration(inputs),
            },
        ]
    }

    /// The scenario grid mix as pie slices.
    ///
    /// Angles are normalised by the mix total so the slices always close the
    /// circle; an all-zero mix yields all-zero angles.
    pub fn view_pie(&self, inputs: &ScenarioInputs) -> Vec<PieSlice> {
        let mix = inputs.grid_mix();
        let sum = mix.sum();
        let status = mix.status();
        if status != GridMixStatus::Balanced {
            warn!(sum = sum, status = ?status, "Grid mix does not sum to 100%");
        }
        mix.iter()
            .map(|(source, percent)| PieSlice {
                source,
                label: source.name(),
                percent,
                angle_degrees: if sum > 0.0 {
                    percent / sum * 360.0
                } else {
                    0.0
                },
                colour: source.colour(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ghgcalc_core::grid::GridMix;

    #[test]
    fn test_bar_view_rounds() {
        let engine = Engine::with_default_inventory().unwrap();
        let rows = engine.view_bar(&engine.baseline_scenario());
        assert_eq!(rows.len(), 8);
        let residential = &rows[0];
        assert_eq!(residential.sector, Sector::Residential);
        assert_eq!(residential.reference, 15.2);
        assert_eq!(residential.scenario, 15.2);
    }

    #[test]
    fn test_stacked_rows() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.change_air_travel = 100.0;
        let rows = engine.view_stacked_positive(&inputs);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].label, "2015");
        assert_eq!(rows[1].label, SCENARIO_LABEL);
        assert_eq!(rows[1].segments.len(), 7);
        assert_relative_eq!(rows[1].total() - rows[0].total(), 3.9, max_relative = 1e-9);

        let negative = engine.view_stacked_negative(&inputs);
        assert_eq!(negative.len(), 2);
        assert!(negative.iter().all(|row| row.value <= 0.0));
    }

    #[test]
    fn test_pie_angles_close_the_circle() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        // Over-subscribed mixes are still normalised
        inputs.grid_wind += 20.0;
        let slices = engine.view_pie(&inputs);
        assert_eq!(slices.len(), 10);
        let total: f64 = slices.iter().map(|s| s.angle_degrees).sum();
        assert_relative_eq!(total, 360.0, max_relative = 1e-12);
        let geothermal = slices
            .iter()
            .find(|s| s.source == GridSource::Geothermal)
            .unwrap();
        assert_eq!(geothermal.angle_degrees, 0.0);
    }

    #[test]
    fn test_pie_of_empty_mix() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.set_grid_mix(&GridMix::empty());
        let slices = engine.view_pie(&inputs);
        assert!(slices.iter().all(|s| s.angle_degrees == 0.0));
    }
}
