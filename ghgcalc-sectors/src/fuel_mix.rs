//! Shared arithmetic for fuel-mix sectors
//!
//! Commercial/industrial energy and the marine-port and off-road modes price a
//! scenario the same way. With $ff$ the scenario fossil share and $ff_0$ the
//! baseline fossil share, each fossil fuel $f$ contributes
//!
//! $$ E_f = U \cdot s \cdot \frac{ff}{100} \cdot \left(1 + \frac{ff - ff_0}{ff_0}\right) \cdot \frac{\phi_f}{100} \cdot \frac{EF_f}{\eta_f} $$
//!
//! where $U$ is baseline useful BBtu, $s$ the activity scale and $\phi_f$ the
//! fuel's share of the fossil subtotal. Electricity is drawn as
//! $U \cdot s \cdot target / 100 / \eta_e$.

use ghgcalc_core::baseline::FuelMixBaseline;
use ghgcalc_core::categories::Fuel;
use ghgcalc_core::units::{pct, BTU_PER_BBTU, MMT_PER_MT};

/// Energy drawn by a fuel-mix sector in one scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelMixDemand {
    /// unit: Btu
    pub electricity_btu: f64,
    /// unit: Btu
    pub natural_gas_btu: f64,
    /// Direct combustion emissions of all fossil fuels
    /// unit: MMT CO₂e
    pub fossil_ghg_mmt: f64,
}

/// Price a fuel-mix sector at an electrification target and activity scale.
pub fn fuel_mix_demand(baseline: &FuelMixBaseline, scale: f64, target_percent: f64) -> FuelMixDemand {
    let useful_bbtu = baseline.useful_bbtu * scale;
    let fossil_percent = 100.0 - target_percent;
    let baseline_fossil_percent = baseline.fossil_percent();
    let fossil_change = (fossil_percent - baseline_fossil_percent) / baseline_fossil_percent;

    let mut fossil_ghg_mmt = 0.0;
    let mut natural_gas_btu = 0.0;
    for share in &baseline.fossil {
        let delivered_bbtu = useful_bbtu
            * pct(fossil_percent)
            * (1.0 + fossil_change)
            * pct(share.percent)
            / share.efficiency;
        fossil_ghg_mmt += delivered_bbtu * share.mt_co2e_per_bbtu * MMT_PER_MT;
        if share.fuel == Fuel::NaturalGas {
            natural_gas_btu += delivered_bbtu * BTU_PER_BBTU;
        }
    }

    FuelMixDemand {
        electricity_btu: useful_bbtu * pct(target_percent) / baseline.electric_efficiency
            * BTU_PER_BBTU,
        natural_gas_btu,
        fossil_ghg_mmt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ghgcalc_core::inventory::FuelUse;

    fn baseline() -> FuelMixBaseline {
        FuelMixBaseline::derive(
            "test",
            &[
                FuelUse::electric(100.0, 1.0),
                FuelUse::new(Fuel::NaturalGas, 200.0, 0.5, 50.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_identity_recovers_delivered_energy() {
        let baseline = baseline();
        let demand = fuel_mix_demand(&baseline, 1.0, baseline.electric_percent);
        assert_relative_eq!(demand.electricity_btu, 100.0 * BTU_PER_BBTU, max_relative = 1e-12);
        assert_relative_eq!(demand.natural_gas_btu, 200.0 * BTU_PER_BBTU, max_relative = 1e-12);
        assert_relative_eq!(demand.fossil_ghg_mmt, 200.0 * 50.0 * MMT_PER_MT, max_relative = 1e-12);
    }

    #[test]
    fn test_full_electrification_zeroes_fossil() {
        let baseline = baseline();
        let demand = fuel_mix_demand(&baseline, 1.0, 100.0);
        assert_eq!(demand.fossil_ghg_mmt, 0.0);
        assert_eq!(demand.natural_gas_btu, 0.0);
        // 200 useful BBtu at 100 % efficiency
        assert_relative_eq!(demand.electricity_btu, 200.0 * BTU_PER_BBTU, max_relative = 1e-12);
    }

    #[test]
    fn test_fossil_term_is_quadratic_in_fossil_share() {
        let baseline = baseline();
        // baseline fossil share is 50 %; halving it quarters fossil use
        let demand = fuel_mix_demand(&baseline, 1.0, 75.0);
        assert_relative_eq!(
            demand.fossil_ghg_mmt,
            200.0 * 50.0 * MMT_PER_MT / 4.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_activity_scale_is_linear() {
        let baseline = baseline();
        let base = fuel_mix_demand(&baseline, 1.0, 60.0);
        let doubled = fuel_mix_demand(&baseline, 2.0, 60.0);
        assert_relative_eq!(doubled.fossil_ghg_mmt, 2.0 * base.fossil_ghg_mmt, max_relative = 1e-12);
        assert_relative_eq!(doubled.electricity_btu, 2.0 * base.electricity_btu, max_relative = 1e-12);
    }
}
