//! Unit conversion constants shared by every calculator.
//!
//! Energy is carried in Btu internally; the commercial/industrial and mobile
//! inventories are tabulated in BBtu (10⁹ Btu).

/// Btu per kWh of electricity
pub const BTU_PER_KWH: f64 = 3412.14;

/// Btu per MWh of electricity
pub const BTU_PER_MWH: f64 = BTU_PER_KWH * 1000.0;

/// Btu per CCF (100 cubic feet) of natural gas
pub const BTU_PER_CCF_NG: f64 = 103_700.0;

/// Btu per gallon of heating fuel oil / kerosene
pub const BTU_PER_GAL_FUEL_OIL: f64 = 138_500.0;

/// Btu per gallon of LPG (propane)
pub const BTU_PER_GAL_LPG: f64 = 91_333.0;

/// Btu per gallon of diesel fuel
pub const BTU_PER_GAL_DIESEL: f64 = 137_381.0;

/// Btu per BBtu
pub const BTU_PER_BBTU: f64 = 1.0e9;

/// Gallons per barrel
pub const GAL_PER_BBL: f64 = 42.0;

/// kCF (thousand cubic feet) per CCF
pub const KCF_PER_CCF: f64 = 0.1;

/// Cubic feet per CCF
pub const CF_PER_CCF: f64 = 100.0;

/// MMcf (million cubic feet) per cubic foot
pub const MMCF_PER_CF: f64 = 1.0e-6;

/// MWh per kWh
pub const MWH_PER_KWH: f64 = 0.001;

/// Million metric tons per pound
pub const MMT_PER_LB: f64 = 4.5359237e-10;

/// Million metric tons per metric ton
pub const MMT_PER_MT: f64 = 1.0e-6;

/// Convert a percentage into a fraction.
#[inline]
pub fn pct(value: f64) -> f64 {
    value / 100.0
}

/// Scale factor for a signed percentage change, `1 + delta/100`.
#[inline]
pub fn growth(delta_percent: f64) -> f64 {
    1.0 + delta_percent / 100.0
}
