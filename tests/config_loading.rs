use approx::assert_relative_eq;
use ghgcalc::{load_engine, load_inventory, load_scenario, Engine, GhgError, Inventory};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_partial_inventory_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.toml");
    fs::write(
        &path,
        "[aviation]\nbaseline_mmt = 4.5\n\n[grid.factors]\ncoal = 2000.0\n",
    )
    .unwrap();

    let inventory = load_inventory(&path).unwrap();
    assert_eq!(inventory.aviation.baseline_mmt, 4.5);
    assert_eq!(inventory.grid.factors.coal, 2000.0);
    assert_eq!(inventory.grid.factors.oil, Inventory::default().grid.factors.oil);
}

#[test]
fn test_written_inventory_reloads() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("inventory.toml");
    fs::write(&path, Inventory::default().to_toml_string().unwrap()).unwrap();

    let engine = load_engine(&path).unwrap();
    let reference = Engine::with_default_inventory().unwrap();
    let inputs = reference.baseline_scenario();
    assert_relative_eq!(
        engine.summarize(&inputs).net_emissions(),
        reference.summarize(&inputs).net_emissions(),
        max_relative = 1e-12
    );
}

#[test]
fn test_scenario_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    fs::write(&path, "change_pop = 10.0\nair_capture = 25.0\n").unwrap();

    let engine = Engine::with_default_inventory().unwrap();
    let inputs = load_scenario(&engine, &path).unwrap();
    assert_eq!(inputs.change_pop, 10.0);
    assert_eq!(inputs.air_capture, 25.0);
    assert_eq!(inputs.ci_energy_elec, engine.baseline_scenario().ci_energy_elec);
}

#[test]
fn test_scenario_with_typo_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("scenario.toml");
    fs::write(&path, "air_captur = 25.0\n").unwrap();

    let engine = Engine::with_default_inventory().unwrap();
    assert!(matches!(
        load_scenario(&engine, &path),
        Err(GhgError::TomlParse(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let result = load_inventory(dir.path().join("missing.toml"));
    assert!(matches!(result, Err(GhgError::Io { .. })));
}
