//! File-based configuration
//!
//! An inventory file is a (possibly partial) TOML rendition of
//! [`Inventory`]: any constant left out keeps its 2015 value. A scenario file
//! is a partial set of [`ScenarioInputs`] keys applied over the engine's
//! identity scenario.

use ghgcalc_core::{GhgError, GhgResult, Inventory, ScenarioInputs};
use ghgcalc_sectors::Engine;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

fn read(path: &Path) -> GhgResult<String> {
    fs::read_to_string(path).map_err(|source| GhgError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn load_inventory(path: impl AsRef<Path>) -> GhgResult<Inventory> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading inventory");
    Inventory::from_toml_str(&read(path)?)
}

/// Load an inventory file and build an engine over it.
pub fn load_engine(path: impl AsRef<Path>) -> GhgResult<Engine> {
    Engine::new(load_inventory(path)?)
}

/// Load a scenario file over the identity scenario of `engine`.
///
/// Input warnings are logged but do not fail the load.
pub fn load_scenario(engine: &Engine, path: impl AsRef<Path>) -> GhgResult<ScenarioInputs> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading scenario");
    let inputs = engine.baseline_scenario().with_overrides(&read(path)?)?;
    for warning in engine.input_warnings(&inputs) {
        warn!(path = %path.display(), warning = %warning, "Scenario input out of range");
    }
    Ok(inputs)
}
