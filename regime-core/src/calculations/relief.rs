//! Rebate, surcharge, cess, and marginal relief.
//!
//! Each function is pure in (tax, income, regime). The income argument is
//! the regime's taxable income, which is also what the rebate ceiling and
//! surcharge tiers are measured against.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::round_rupees;
use crate::models::TaxRegime;

/// Health and education cess rate.
const CESS_RATE: Decimal = dec!(0.04);

/// Width of the marginal-relief window above the rebate ceiling.
const MARGINAL_RELIEF_WINDOW: Decimal = dec!(50000);

/// Surcharge tiers by income, highest first. The tiers depend on income
/// only, never on the regime.
const SURCHARGE_TIERS: [(Decimal, Decimal); 4] = [
    (dec!(50000000), dec!(0.37)),
    (dec!(20000000), dec!(0.25)),
    (dec!(10000000), dec!(0.15)),
    (dec!(5000000), dec!(0.10)),
];

/// Income ceiling for the section 87A rebate.
pub fn rebate_ceiling(regime: TaxRegime) -> Decimal {
    match regime {
        TaxRegime::Old => dec!(500000),
        TaxRegime::New => dec!(1200000),
    }
}

fn max_rebate(regime: TaxRegime) -> Decimal {
    match regime {
        TaxRegime::Old => dec!(12500),
        TaxRegime::New => dec!(60000),
    }
}

/// Section 87A rebate: zero when there is no tax to rebate, the smaller of
/// the tax and the regime's maximum when income is within the ceiling.
pub fn rebate(tax: Decimal, income: Decimal, regime: TaxRegime) -> Decimal {
    if tax.is_zero() {
        return Decimal::ZERO;
    }
    if income <= rebate_ceiling(regime) {
        tax.min(max_rebate(regime))
    } else {
        Decimal::ZERO
    }
}

/// Surcharge on tax-after-rebate, tiered by income, rounded to the whole
/// rupee.
pub fn surcharge(tax_after_rebate: Decimal, income: Decimal) -> Decimal {
    let rate = SURCHARGE_TIERS
        .iter()
        .find(|(floor, _)| income > *floor)
        .map(|(_, rate)| *rate)
        .unwrap_or(Decimal::ZERO);
    round_rupees(tax_after_rebate * rate)
}

/// Health and education cess: exactly 4% of tax-after-rebate plus
/// surcharge. Returned unrounded so the 4% relationship is exact; the
/// worksheet rounds it when assembling a result.
pub fn cess(tax_after_rebate: Decimal, surcharge: Decimal) -> Decimal {
    (tax_after_rebate + surcharge) * CESS_RATE
}

/// Marginal relief for incomes just past the rebate ceiling.
///
/// Crossing the ceiling forfeits the whole rebate at once; within a 50,000
/// window past it, relief caps the tax (here: tax with surcharge and cess
/// already added) at the excess income over the ceiling.
pub fn marginal_relief(tax: Decimal, income: Decimal, regime: TaxRegime) -> Decimal {
    let excess = income - rebate_ceiling(regime);
    if excess > Decimal::ZERO && excess < MARGINAL_RELIEF_WINDOW && tax > excess {
        tax - excess
    } else {
        Decimal::ZERO
    }
}
