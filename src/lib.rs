//! Regional greenhouse-gas inventory and scenario calculator
//!
//! Re-exports the inventory model from `ghgcalc-core` and the calculators
//! from `ghgcalc-sectors`, and adds loading both from TOML files.
//!
//! ```
//! use ghgcalc::Engine;
//!
//! let engine = Engine::with_default_inventory().unwrap();
//! let scenario = engine
//!     .baseline_scenario()
//!     .with_overrides("grid_coal = 0.0\ngrid_solar = 20.62")
//!     .unwrap();
//! let results = engine.summarize(&scenario);
//! assert!(results.net_emissions() < engine.summarize(&engine.baseline_scenario()).net_emissions());
//! ```

pub mod config;

pub use config::{load_engine, load_inventory, load_scenario};
pub use ghgcalc_core::{
    baseline, categories, errors, grid, inventory, scenario, units, Baselines, GhgError,
    GhgResult, InputWarning, Inventory, ScenarioInputs,
};
pub use ghgcalc_sectors::{views, Engine, ScenarioResults};
