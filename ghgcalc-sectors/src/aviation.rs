//! Aviation GHG calculator

use crate::engine::Engine;
use ghgcalc_core::units::growth;
use ghgcalc_core::ScenarioInputs;

impl Engine {
    /// Aviation scales with population and per-capita air travel.
    pub fn compute_aviation(&self, inputs: &ScenarioInputs) -> f64 {
        self.inventory().aviation.baseline_mmt
            * growth(inputs.change_pop)
            * growth(inputs.change_air_travel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compounding_growth() {
        let engine = Engine::with_default_inventory().unwrap();
        let mut inputs = engine.baseline_scenario();
        inputs.change_pop = 10.0;
        inputs.change_air_travel = -50.0;
        assert_relative_eq!(engine.compute_aviation(&inputs), 3.9 * 1.1 * 0.5, max_relative = 1e-12);
    }
}
