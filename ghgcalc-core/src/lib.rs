//! Inventory constants, baseline decomposition and scenario inputs for a
//! regional greenhouse-gas calculator.
//!
//! # Module Organisation
//!
//! - `categories`: fuels, settlement classes, end uses and reporting sectors
//! - `units`: conversion constants
//! - `grid`: the electricity grid mix and its emission intensity
//! - `inventory`: fixed coefficients of the inventory year, loadable from TOML
//! - `baseline`: shares derived once from the inventory
//! - `scenario`: the driver values of one scenario

pub mod baseline;
pub mod categories;
pub mod errors;
pub mod grid;
pub mod inventory;
pub mod scenario;
pub mod units;

pub use baseline::Baselines;
pub use errors::{GhgError, GhgResult};
pub use inventory::Inventory;
pub use scenario::{InputWarning, ScenarioInputs};
