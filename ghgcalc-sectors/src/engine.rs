//! The calculation engine
//!
//! An [`Engine`] owns an inventory and the baselines derived from it. Both are
//! frozen at construction, so an engine can be shared across threads and
//! every calculator is a pure function of the engine and one
//! [`ScenarioInputs`].

use ghgcalc_core::categories::Settlement;
use ghgcalc_core::grid::GridMixStatus;
use ghgcalc_core::{Baselines, GhgResult, InputWarning, Inventory, ScenarioInputs};
use serde::Serialize;
use tracing::{debug, warn};

/// Inventory constants plus derived baselines.
#[derive(Debug, Clone)]
pub struct Engine {
    inventory: Inventory,
    baselines: Baselines,
}

/// Range of one electrification slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElectrificationBound {
    pub slider: &'static str,
    /// unit: %
    pub min: f64,
    /// Inventory-year value
    /// unit: %
    pub baseline: f64,
}

impl Engine {
    /// Build an engine, validating the inventory.
    ///
    /// This is the only fallible step: once built, calculators cannot fail.
    pub fn new(inventory: Inventory) -> GhgResult<Self> {
        let baselines = Baselines::derive(&inventory)?;
        let mix = &inventory.grid.mix;
        if mix.status() != GridMixStatus::Balanced {
            warn!(
                sum = mix.sum(),
                "Inventory grid mix does not sum to 100%; baseline electricity emissions use the raw weights"
            );
        }
        for settlement in Settlement::ALL {
            let residential = baselines.residential.get(settlement);
            debug!(
                settlement = %settlement,
                electric_percent = residential.electric_percent(),
                min_electrification = residential.min_electrification,
                "Derived residential baseline"
            );
        }
        debug!(
            year = inventory.year,
            ci_electric_percent = baselines.commercial_industrial.electric_percent,
            transit_electric_percent = baselines.rail.transit_electric_percent,
            "Engine ready"
        );
        Ok(Self {
            inventory,
            baselines,
        })
    }

    /// Engine over the built-in 2015 regional inventory.
    pub fn with_default_inventory() -> GhgResult<Self> {
        Self::new(Inventory::default())
    }

    pub fn from_toml_str(s: &str) -> GhgResult<Self> {
        Self::new(Inventory::from_toml_str(s)?)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn baselines(&self) -> &Baselines {
        &self.baselines
    }

    /// Scenario that reproduces the inventory year.
    pub fn baseline_scenario(&self) -> ScenarioInputs {
        ScenarioInputs::baseline(&self.inventory, &self.baselines)
    }

    pub fn input_warnings(&self, inputs: &ScenarioInputs) -> Vec<InputWarning> {
        inputs.warnings(&self.baselines)
    }

    /// Minimum and baseline value of every electrification slider that has a
    /// floor above zero.
    pub fn electrification_bounds(&self) -> Vec<ElectrificationBound> {
        let residential = &self.baselines.residential;
        let bound = |slider, min, baseline| ElectrificationBound {
            slider,
            min,
            baseline,
        };
        vec![
            bound(
                "urb_energy_elec",
                residential.get(Settlement::Urban).min_electrification,
                residential.get(Settlement::Urban).electric_percent(),
            ),
            bound(
                "sub_energy_elec",
                residential.get(Settlement::Suburban).min_electrification,
                residential.get(Settlement::Suburban).electric_percent(),
            ),
            bound(
                "rur_energy_elec",
                residential.get(Settlement::Rural).min_electrification,
                residential.get(Settlement::Rural).electric_percent(),
            ),
            bound(
                "ci_energy_elec",
                self.baselines.commercial_industrial.min_electrification(),
                self.baselines.commercial_industrial.electric_percent,
            ),
            bound(
                "mp_energy_elec_motion",
                self.baselines.marine_port.min_electrification(),
                self.baselines.marine_port.electric_percent,
            ),
            bound(
                "or_energy_elec_motion",
                self.baselines.off_road.min_electrification(),
                self.baselines.off_road.electric_percent,
            ),
        ]
    }

    /// Emissions from consuming `btu` of electricity on the scenario's grid, MMT CO₂e.
    pub fn electricity_ghg(&self, inputs: &ScenarioInputs, btu: f64) -> f64 {
        self.inventory
            .grid
            .electricity_ghg(&inputs.grid_mix(), btu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghgcalc_core::GhgError;

    #[test]
    fn test_bounds_sit_below_baselines() {
        let engine = Engine::with_default_inventory().unwrap();
        let bounds = engine.electrification_bounds();
        assert_eq!(bounds.len(), 6);
        for bound in bounds {
            assert!(bound.min <= bound.baseline, "{:?}", bound);
            assert!(bound.min >= 0.0);
        }
    }

    #[test]
    fn test_invalid_inventory_fails_at_construction() {
        let mut inventory = Inventory::default();
        inventory.other_mobile.marine_port.retain(|f| !f.fuel.is_electric());
        let result = Engine::new(inventory);
        assert!(matches!(result, Err(GhgError::MissingFuel { .. })));
    }

    #[test]
    fn test_input_warnings_serialise_with_kind() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.urb_energy_elec = 0.0;
        let json = serde_json::to_value(engine.input_warnings(&inputs)).unwrap();

        assert_eq!(json.as_array().map(|w| w.len()), Some(1));
        assert_eq!(json[0]["kind"], "electrification_out_of_range");
        assert_eq!(json[0]["slider"], "urb_energy_elec");
        assert_eq!(json[0]["value"], serde_json::json!(0.0));
    }

    #[test]
    fn test_unbalanced_inventory_mix_still_builds() {
        let engine = Engine::from_toml_str("[grid.mix]\ncoal = 0.0").unwrap();
        assert_eq!(engine.inventory().grid.mix.status(), GridMixStatus::Under);
        assert_eq!(engine.inventory().grid.mix.nuclear, 40.21);

        let warnings = engine.input_warnings(&engine.baseline_scenario());
        assert!(matches!(warnings[0], InputWarning::GridMixSum { .. }));
    }

    #[test]
    fn test_engine_from_partial_toml() {
        let engine = Engine::from_toml_str("[aviation]\nbaseline_mmt = 5.0").unwrap();
        assert_eq!(engine.inventory().aviation.baseline_mmt, 5.0);
        assert_eq!(engine.inventory().highway.fleet_mpg, 23.6);
    }
}
