//! Slab (bracket) tax for both regimes, assessment year 2026-27 rates.
//!
//! Each table row carries the fixed base amount accumulated by the slabs
//! below it, so tax for an income is a single lookup: find the highest
//! slab whose floor the income exceeds, then
//! `base_tax + (income - floor) * rate`.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::calculations::slabs::{new_regime_tax, old_regime_tax};
//! use regime_core::models::AgeGroup;
//!
//! assert_eq!(new_regime_tax(dec!(925000)), dec!(52500));
//! assert_eq!(old_regime_tax(dec!(950000), AgeGroup::Below60), dec!(102500));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_rupees;
use crate::models::AgeGroup;

/// A single slab row. Income above `floor` is taxed at `rate` on the
/// marginal amount, plus the fixed `base_tax` owed on the slabs below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxSlab {
    pub floor: Decimal,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

/// New-regime table: six tiers, no age banding. Ordered highest floor
/// first for the lookup.
const NEW_REGIME_SLABS: [TaxSlab; 6] = [
    TaxSlab {
        floor: dec!(2400000),
        rate: dec!(0.30),
        base_tax: dec!(400000),
    },
    TaxSlab {
        floor: dec!(2000000),
        rate: dec!(0.25),
        base_tax: dec!(280000),
    },
    TaxSlab {
        floor: dec!(1600000),
        rate: dec!(0.20),
        base_tax: dec!(180000),
    },
    TaxSlab {
        floor: dec!(1200000),
        rate: dec!(0.15),
        base_tax: dec!(100000),
    },
    TaxSlab {
        floor: dec!(800000),
        rate: dec!(0.10),
        base_tax: dec!(40000),
    },
    TaxSlab {
        floor: dec!(400000),
        rate: dec!(0.05),
        base_tax: dec!(0),
    },
];

/// Old-regime table shared by the below-60 and 60-to-80 bands. Only the 5%
/// slab's floor differs between the two bands; the 20% slab keeps the same
/// 12,500 base for both.
const OLD_REGIME_SLABS_BELOW_60: [TaxSlab; 3] = [
    TaxSlab {
        floor: dec!(1000000),
        rate: dec!(0.30),
        base_tax: dec!(112500),
    },
    TaxSlab {
        floor: dec!(500000),
        rate: dec!(0.20),
        base_tax: dec!(12500),
    },
    TaxSlab {
        floor: dec!(250000),
        rate: dec!(0.05),
        base_tax: dec!(0),
    },
];

const OLD_REGIME_SLABS_60_TO_80: [TaxSlab; 3] = [
    TaxSlab {
        floor: dec!(1000000),
        rate: dec!(0.30),
        base_tax: dec!(112500),
    },
    TaxSlab {
        floor: dec!(500000),
        rate: dec!(0.20),
        base_tax: dec!(12500),
    },
    TaxSlab {
        floor: dec!(300000),
        rate: dec!(0.05),
        base_tax: dec!(0),
    },
];

/// Super-senior table: no 5% slab at all.
const OLD_REGIME_SLABS_ABOVE_80: [TaxSlab; 2] = [
    TaxSlab {
        floor: dec!(1000000),
        rate: dec!(0.30),
        base_tax: dec!(100000),
    },
    TaxSlab {
        floor: dec!(500000),
        rate: dec!(0.20),
        base_tax: dec!(0),
    },
];

/// Old-regime basic exemption limit for an age band.
pub fn exemption_limit(age_group: AgeGroup) -> Decimal {
    match age_group {
        AgeGroup::Below60 => dec!(250000),
        AgeGroup::SixtyToEighty => dec!(300000),
        AgeGroup::AboveEighty => dec!(500000),
    }
}

fn old_regime_slabs(age_group: AgeGroup) -> &'static [TaxSlab] {
    match age_group {
        AgeGroup::Below60 => &OLD_REGIME_SLABS_BELOW_60,
        AgeGroup::SixtyToEighty => &OLD_REGIME_SLABS_60_TO_80,
        AgeGroup::AboveEighty => &OLD_REGIME_SLABS_ABOVE_80,
    }
}

fn slab_tax(taxable_income: Decimal, slabs: &[TaxSlab]) -> Decimal {
    slabs
        .iter()
        .find(|slab| taxable_income > slab.floor)
        .map(|slab| (taxable_income - slab.floor) * slab.rate + slab.base_tax)
        .unwrap_or(Decimal::ZERO)
}

/// Old-regime slab tax for a taxable income, rounded to the whole rupee.
///
/// Income at or below the age band's exemption limit owes nothing. Callers
/// floor taxable income at zero before calling; negative input is outside
/// the contract.
pub fn old_regime_tax(taxable_income: Decimal, age_group: AgeGroup) -> Decimal {
    if taxable_income <= exemption_limit(age_group) {
        return Decimal::ZERO;
    }
    round_rupees(slab_tax(taxable_income, old_regime_slabs(age_group)))
}

/// New-regime slab tax for a taxable income, rounded to the whole rupee.
pub fn new_regime_tax(taxable_income: Decimal) -> Decimal {
    round_rupees(slab_tax(taxable_income, &NEW_REGIME_SLABS))
}
