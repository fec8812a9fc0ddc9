//! Baseline decomposition of the built-in 2015 inventory.

use approx::assert_relative_eq;
use ghgcalc_core::categories::{EndUse, ResidentialFuel, Settlement};
use ghgcalc_core::{Baselines, GhgError, Inventory};

fn baselines() -> Baselines {
    Baselines::derive(&Inventory::default()).unwrap()
}

mod residential {
    use super::*;

    #[test]
    fn test_fuel_shares_close() {
        let baselines = baselines();
        for settlement in Settlement::ALL {
            let b = baselines.residential.get(settlement);
            let total: f64 = ResidentialFuel::ALL
                .iter()
                .map(|f| *b.fuel_percent.get(*f))
                .sum();
            assert_relative_eq!(total, 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_rural_homes_are_most_electric() {
        let baselines = baselines();
        let urban = baselines.residential.get(Settlement::Urban).electric_percent();
        let rural = baselines.residential.get(Settlement::Rural).electric_percent();
        assert!(rural > urban);
    }

    #[test]
    fn test_minimum_is_electric_other_share() {
        let baselines = baselines();
        for settlement in Settlement::ALL {
            let b = baselines.residential.get(settlement);
            assert_relative_eq!(
                b.min_electrification,
                b.cell_percent(ResidentialFuel::Electricity, EndUse::Other),
                max_relative = 1e-12
            );
            assert!(b.min_electrification < b.electric_percent());
        }
    }
}

mod fuel_mix {
    use super::*;

    #[test]
    fn test_fossil_shares_close() {
        let baselines = baselines();
        for baseline in [
            &baselines.commercial_industrial,
            &baselines.marine_port,
            &baselines.off_road,
        ] {
            let total: f64 = baseline.fossil.iter().map(|s| s.percent).sum();
            assert_relative_eq!(total, 100.0, epsilon = 1e-9);
            assert!(baseline.electric_percent > 0.0 && baseline.electric_percent < 100.0);
        }
    }
}

mod validation {
    use super::*;

    #[test]
    fn test_zero_population_is_rejected() {
        let mut inventory = Inventory::default();
        inventory.population.total = 0.0;
        assert!(matches!(
            Baselines::derive(&inventory),
            Err(GhgError::ZeroBaseline { .. })
        ));
    }

    #[test]
    fn test_settlement_without_fossil_fuel_is_rejected() {
        let mut inventory = Inventory::default();
        let urban = &mut inventory.residential.per_capita.urban;
        urban.natural_gas_ccf = 0.0;
        urban.fuel_oil_gal = 0.0;
        urban.lpg_gal = 0.0;
        assert!(matches!(
            Baselines::derive(&inventory),
            Err(GhgError::ZeroBaseline { .. })
        ));
    }

    #[test]
    fn test_fleet_economy_must_be_positive() {
        let mut inventory = Inventory::default();
        inventory.highway.fleet_mpg = 0.0;
        assert!(matches!(
            Baselines::derive(&inventory),
            Err(GhgError::InvalidInventory { .. })
        ));
    }
}
