//! The per-regime liability worksheet.
//!
//! One pass from gross income to the final payable amount, with every
//! subtraction floored at zero on the way:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Gross total income (salary + counted other income) |
//! | 2    | Salary exemptions (old regime only) |
//! | 3    | Standard deduction (50,000 old / 75,000 new, if claimed) |
//! | 4    | Chapter VI-A deduction stack (old regime only) |
//! | 5    | Employer NPS deduction (both regimes) |
//! | 6    | Taxable income (1 − 2 − 3 − 4 − 5, floored at 0) |
//! | 7    | Basic slab tax |
//! | 8    | Section 87A rebate; tax after rebate (floored at 0) |
//! | 9    | Surcharge on tax after rebate |
//! | 10   | Health & education cess, 4% of (8 + 9) |
//! | 11   | Marginal relief; total liability (8 + 9 + 10 − 11, floored) |
//! | 12   | TDS/TCS credits; final payable (floored at 0) |
//!
//! The deduction asymmetry in steps 2 and 4 is the heart of the regime
//! choice: the new regime admits only the standard deduction and the
//! employer NPS contribution.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::calculations::worksheets::RegimeWorksheet;
//! use regime_core::models::{TaxInput, TaxRegime};
//!
//! let input = TaxInput {
//!     salary_income: dec!(1000000),
//!     standard_deduction: true,
//!     ..TaxInput::default()
//! };
//!
//! let result = RegimeWorksheet::new(TaxRegime::New).calculate(&input);
//!
//! assert_eq!(result.taxable_income, dec!(925000));
//! assert_eq!(result.basic_tax, dec!(52500));
//! assert_eq!(result.rebate, dec!(52500));
//! assert_eq!(result.total_liability, dec!(0));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::calculations::common::{floor_zero, round_rupees};
use crate::calculations::{exemptions, relief, slabs};
use crate::models::{RegimeWorksheetResult, TaxInput, TaxRegime};

/// Standard deduction under the old regime.
const STANDARD_DEDUCTION_OLD: Decimal = dec!(50000);

/// Standard deduction under the new regime.
const STANDARD_DEDUCTION_NEW: Decimal = dec!(75000);

/// Computes the full liability pipeline for one regime.
#[derive(Debug, Clone, Copy)]
pub struct RegimeWorksheet {
    regime: TaxRegime,
}

impl RegimeWorksheet {
    pub fn new(regime: TaxRegime) -> Self {
        Self { regime }
    }

    /// Runs the worksheet top to bottom. The pipeline is total: there is no
    /// failing input, only amounts floored at zero.
    pub fn calculate(&self, input: &TaxInput) -> RegimeWorksheetResult {
        let gross_income = self.gross_total_income(input);
        let total_exemptions = self.salary_exemptions(input);
        let standard_deduction = self.standard_deduction(input);
        let chapter_via_deductions = self.chapter_via_deductions(input);
        let employer_nps_deduction = exemptions::employer_nps_deduction(
            input.employer_nps_contribution,
            input.basic_salary,
            input.employment_sector,
        );

        let taxable_income = floor_zero(
            gross_income
                - total_exemptions
                - standard_deduction
                - chapter_via_deductions
                - employer_nps_deduction,
        );

        let basic_tax = self.basic_tax(taxable_income, input);
        let rebate = relief::rebate(basic_tax, taxable_income, self.regime);
        let tax_after_rebate = floor_zero(basic_tax - rebate);
        let surcharge = relief::surcharge(tax_after_rebate, taxable_income);
        let cess = round_rupees(relief::cess(tax_after_rebate, surcharge));

        let tax_with_levies = tax_after_rebate + surcharge + cess;
        let marginal_relief = relief::marginal_relief(tax_with_levies, taxable_income, self.regime);
        let total_liability = floor_zero(tax_with_levies - marginal_relief);
        let final_liability = floor_zero(total_liability - input.tds_paid - input.tcs_paid);

        RegimeWorksheetResult {
            regime: self.regime,
            gross_income,
            total_exemptions,
            standard_deduction,
            chapter_via_deductions,
            employer_nps_deduction,
            taxable_income,
            basic_tax,
            rebate,
            tax_after_rebate,
            surcharge,
            cess,
            marginal_relief,
            total_liability,
            final_liability,
        }
    }

    /// Gross total income. Agricultural income never enters the total; the
    /// other-income block only counts when its flag is set.
    fn gross_total_income(&self, input: &TaxInput) -> Decimal {
        let mut gross = input.salary_income;
        if input.has_other_income {
            gross += input.other_income
                + input.rental_income
                + input.business_income
                + input.capital_gains;
        }
        gross
    }

    /// Salary exemptions. The new regime admits none.
    fn salary_exemptions(&self, input: &TaxInput) -> Decimal {
        match self.regime {
            TaxRegime::Old => exemptions::total_salary_exemptions(input),
            TaxRegime::New => Decimal::ZERO,
        }
    }

    fn standard_deduction(&self, input: &TaxInput) -> Decimal {
        if !input.standard_deduction {
            return Decimal::ZERO;
        }
        match self.regime {
            TaxRegime::Old => STANDARD_DEDUCTION_OLD,
            TaxRegime::New => STANDARD_DEDUCTION_NEW,
        }
    }

    /// Chapter VI-A stack: old regime only, and only when the taxpayer
    /// opted into itemising it.
    fn chapter_via_deductions(&self, input: &TaxInput) -> Decimal {
        match self.regime {
            TaxRegime::Old if input.has_chapter_via_deductions => {
                exemptions::chapter_via_total(input)
            }
            _ => Decimal::ZERO,
        }
    }

    fn basic_tax(&self, taxable_income: Decimal, input: &TaxInput) -> Decimal {
        match self.regime {
            TaxRegime::Old => slabs::old_regime_tax(taxable_income, input.age_group),
            TaxRegime::New => slabs::new_regime_tax(taxable_income),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::AgeGroup;

    fn salaried_input() -> TaxInput {
        TaxInput {
            salary_income: dec!(1000000),
            basic_salary: dec!(500000),
            standard_deduction: true,
            ..TaxInput::default()
        }
    }

    // =========================================================================
    // taxable income tests
    // =========================================================================

    #[test]
    fn new_regime_ignores_exemptions_and_chapter_via() {
        let input = TaxInput {
            receives_hra: true,
            hra_received: dec!(100000),
            rent_paid: dec!(120000),
            has_chapter_via_deductions: true,
            ppf_investment: dec!(150000),
            ..salaried_input()
        };

        let result = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

        assert_eq!(result.total_exemptions, dec!(0));
        assert_eq!(result.chapter_via_deductions, dec!(0));
        assert_eq!(result.taxable_income, dec!(925000));
    }

    #[test]
    fn old_regime_subtracts_the_full_stack() {
        let input = TaxInput {
            receives_hra: true,
            hra_received: dec!(100000),
            rent_paid: dec!(120000),
            is_metro_city: true,
            has_chapter_via_deductions: true,
            ppf_investment: dec!(150000),
            professional_tax: dec!(2400),
            ..salaried_input()
        };

        let result = RegimeWorksheet::new(TaxRegime::Old).calculate(&input);

        // HRA leg: 120,000 - 50,000 = 70,000, plus professional tax
        assert_eq!(result.total_exemptions, dec!(72400));
        assert_eq!(result.standard_deduction, dec!(50000));
        assert_eq!(result.chapter_via_deductions, dec!(150000));
        // 1,000,000 - 72,400 - 50,000 - 150,000
        assert_eq!(result.taxable_income, dec!(727600));
    }

    #[test]
    fn employer_nps_deductible_in_both_regimes() {
        let input = TaxInput {
            employer_nps_contribution: dec!(60000),
            ..salaried_input()
        };

        let old = RegimeWorksheet::new(TaxRegime::Old).calculate(&input);
        let new = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

        assert_eq!(old.employer_nps_deduction, dec!(60000));
        assert_eq!(new.employer_nps_deduction, dec!(60000));
        assert_eq!(old.taxable_income, dec!(890000));
        assert_eq!(new.taxable_income, dec!(865000));
    }

    #[test]
    fn other_income_only_counts_when_flagged() {
        let mut input = TaxInput {
            rental_income: dec!(300000),
            capital_gains: dec!(50000),
            ..salaried_input()
        };

        let without = RegimeWorksheet::new(TaxRegime::New).calculate(&input);
        input.has_other_income = true;
        let with = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

        assert_eq!(without.gross_income, dec!(1000000));
        assert_eq!(with.gross_income, dec!(1350000));
    }

    #[test]
    fn agriculture_income_stays_exempt() {
        let input = TaxInput {
            has_other_income: true,
            agriculture_income: dec!(400000),
            ..salaried_input()
        };

        let result = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

        assert_eq!(result.gross_income, dec!(1000000));
    }

    #[test]
    fn deductions_never_push_taxable_income_negative() {
        let input = TaxInput {
            salary_income: dec!(40000),
            standard_deduction: true,
            ..TaxInput::default()
        };

        let result = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.total_liability, dec!(0));
    }

    // =========================================================================
    // liability pipeline tests
    // =========================================================================

    #[test]
    fn new_regime_rebate_wipes_out_mid_income_tax() {
        let result = RegimeWorksheet::new(TaxRegime::New).calculate(&salaried_input());

        assert_eq!(result.taxable_income, dec!(925000));
        assert_eq!(result.basic_tax, dec!(52500));
        assert_eq!(result.rebate, dec!(52500));
        assert_eq!(result.tax_after_rebate, dec!(0));
        assert_eq!(result.surcharge, dec!(0));
        assert_eq!(result.cess, dec!(0));
        assert_eq!(result.total_liability, dec!(0));
        assert_eq!(result.final_liability, dec!(0));
    }

    #[test]
    fn old_regime_levies_cess_past_the_rebate_ceiling() {
        let result = RegimeWorksheet::new(TaxRegime::Old).calculate(&salaried_input());

        assert_eq!(result.taxable_income, dec!(950000));
        assert_eq!(result.basic_tax, dec!(102500));
        assert_eq!(result.rebate, dec!(0));
        assert_eq!(result.surcharge, dec!(0));
        assert_eq!(result.cess, dec!(4100));
        assert_eq!(result.total_liability, dec!(106600));
    }

    #[test]
    fn marginal_relief_caps_tax_just_past_the_ceiling() {
        let input = TaxInput {
            salary_income: dec!(1285000),
            ..salaried_input()
        };

        let result = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

        // taxable 1,210,000: basic 101,500, cess 4,060, relief brings the
        // total down to the 10,000 excess over the rebate ceiling
        assert_eq!(result.taxable_income, dec!(1210000));
        assert_eq!(result.basic_tax, dec!(101500));
        assert_eq!(result.rebate, dec!(0));
        assert_eq!(result.cess, dec!(4060));
        assert_eq!(result.marginal_relief, dec!(95560));
        assert_eq!(result.total_liability, dec!(10000));
    }

    #[test]
    fn surcharge_applies_to_high_taxable_income() {
        let input = TaxInput {
            salary_income: dec!(6000000),
            standard_deduction: false,
            ..TaxInput::default()
        };

        let result = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

        // basic: (6,000,000 - 2,400,000) * 30% + 400,000 = 1,480,000
        assert_eq!(result.basic_tax, dec!(1480000));
        // income over 50 lakh: 10% surcharge
        assert_eq!(result.surcharge, dec!(148000));
        assert_eq!(result.cess, dec!(65120));
        assert_eq!(result.total_liability, dec!(1693120));
    }

    #[test]
    fn withholding_reduces_final_liability_but_not_below_zero() {
        let mut input = salaried_input();
        input.tds_paid = dec!(50000);
        input.tcs_paid = dec!(10000);

        let result = RegimeWorksheet::new(TaxRegime::Old).calculate(&input);

        assert_eq!(result.total_liability, dec!(106600));
        assert_eq!(result.final_liability, dec!(46600));

        input.tds_paid = dec!(500000);
        let overpaid = RegimeWorksheet::new(TaxRegime::Old).calculate(&input);

        assert_eq!(overpaid.final_liability, dec!(0));
    }

    #[test]
    fn old_regime_age_band_changes_liability() {
        let input = TaxInput {
            age_group: AgeGroup::AboveEighty,
            ..salaried_input()
        };

        let result = RegimeWorksheet::new(TaxRegime::Old).calculate(&input);

        // (950,000 - 500,000) * 20%, no base amount for super-seniors
        assert_eq!(result.basic_tax, dec!(90000));
        assert_eq!(result.cess, dec!(3600));
        assert_eq!(result.total_liability, dec!(93600));
    }
}
