//! Runs both regime worksheets on one input and picks the cheaper regime.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::calculations::worksheets::compare;
//! use regime_core::models::{TaxInput, TaxRegime};
//!
//! let input = TaxInput {
//!     salary_income: dec!(1000000),
//!     standard_deduction: true,
//!     ..TaxInput::default()
//! };
//!
//! let result = compare(&input);
//!
//! assert_eq!(result.better_regime, TaxRegime::New);
//! assert_eq!(result.savings, dec!(106600));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::exemptions::{
    NPS_CAP, SECTION_80C_CAP, SECTION_80D_CAP, section_80c_total,
};
use crate::calculations::worksheets::RegimeWorksheet;
use crate::currency::format_inr;
use crate::models::{BreakdownLine, ComparisonResult, RegimeWorksheetResult, TaxInput, TaxRegime};

/// Income level above which the employer-NPS and TDS-reporting advice
/// starts to apply.
const ADVICE_INCOME_FLOOR: Decimal = dec!(500000);

/// Computes both regimes for one input snapshot and assembles the
/// comparison: the cheaper regime, the savings, per-regime breakdowns, and
/// the ordered recommendation list.
///
/// The input is sanitised once at this boundary; the worksheets themselves
/// never fail.
pub fn compare(input: &TaxInput) -> ComparisonResult {
    let input = input.clone().sanitized();

    let old_regime = RegimeWorksheet::new(TaxRegime::Old).calculate(&input);
    let new_regime = RegimeWorksheet::new(TaxRegime::New).calculate(&input);

    // Savings compare pre-withholding totals; a tie goes to the new regime.
    let better_regime = if new_regime.total_liability <= old_regime.total_liability {
        TaxRegime::New
    } else {
        TaxRegime::Old
    };
    let savings = (old_regime.total_liability - new_regime.total_liability).abs();

    debug!(
        old_total = %old_regime.total_liability,
        new_total = %new_regime.total_liability,
        better = better_regime.as_str(),
        "regime comparison computed"
    );

    let recommendations =
        recommendations(&input, new_regime.gross_income, better_regime, savings);

    ComparisonResult {
        old_regime_breakdown: breakdown_lines(&old_regime, &input),
        new_regime_breakdown: breakdown_lines(&new_regime, &input),
        old_regime,
        new_regime,
        better_regime,
        savings,
        recommendations,
    }
}

/// Ordered line items for one regime's computation. The new regime omits
/// the exemption and Chapter VI-A lines it never applies.
fn breakdown_lines(result: &RegimeWorksheetResult, input: &TaxInput) -> Vec<BreakdownLine> {
    let mut lines = vec![BreakdownLine::new("Gross Total Income", result.gross_income)];
    if result.regime == TaxRegime::Old {
        lines.push(BreakdownLine::new(
            "Total Exemptions",
            result.total_exemptions,
        ));
    }
    lines.push(BreakdownLine::new(
        "Standard Deduction",
        result.standard_deduction,
    ));
    if result.regime == TaxRegime::Old {
        lines.push(BreakdownLine::new(
            "Chapter VI-A Deductions",
            result.chapter_via_deductions,
        ));
    }
    lines.extend([
        BreakdownLine::new("Taxable Income", result.taxable_income),
        BreakdownLine::new("Basic Tax", result.basic_tax),
        BreakdownLine::new("Rebate u/s 87A", result.rebate),
        BreakdownLine::new("Surcharge", result.surcharge),
        BreakdownLine::new("Health & Education Cess (4%)", result.cess),
        BreakdownLine::new("Marginal Relief", result.marginal_relief),
        BreakdownLine::new("Total Tax Liability", result.total_liability),
        BreakdownLine::new("TDS/TCS Paid", input.tds_paid + input.tcs_paid),
        BreakdownLine::new("Final Tax Payable", result.final_liability),
    ]);
    lines
}

/// Rule-based advice, ordered by priority: the verdict first, then the
/// unused-headroom prompts for whichever regime won, then the withholding
/// reminder. Callers render the list top to bottom.
fn recommendations(
    input: &TaxInput,
    gross_income: Decimal,
    better_regime: TaxRegime,
    savings: Decimal,
) -> Vec<String> {
    let mut advice = vec![format!(
        "The {} tax regime is better for you, saving you {}",
        better_regime.as_str(),
        format_inr(savings)
    )];

    match better_regime {
        TaxRegime::Old => {
            let section_80c = section_80c_total(input);
            if section_80c < SECTION_80C_CAP {
                advice.push(format!(
                    "Invest {} more in 80C options like ELSS, PPF, or EPF to maximize \
                     your tax benefits",
                    format_inr(SECTION_80C_CAP - section_80c)
                ));
            }
            if input.nps_contribution < NPS_CAP {
                advice.push(format!(
                    "Consider investing {} more in NPS to get additional tax benefits \
                     under 80CCD(1B)",
                    format_inr(NPS_CAP - input.nps_contribution)
                ));
            }
            if input.section_80d < SECTION_80D_CAP {
                advice.push(format!(
                    "Get health insurance coverage to utilize remaining {} deduction \
                     under section 80D",
                    format_inr(SECTION_80D_CAP - input.section_80d)
                ));
            }
            if input.receives_hra && input.rent_paid.is_zero() {
                advice.push(
                    "Submit your rent receipts to claim HRA exemption and reduce your \
                     tax liability"
                        .to_string(),
                );
            }
            if input.has_home_loan && input.home_loan_interest.is_zero() {
                advice.push(
                    "Ensure you claim the full interest deduction on your home loan to \
                     reduce your taxable income"
                        .to_string(),
                );
            }
        }
        TaxRegime::New => {
            advice.push(
                "Since you're in the new tax regime with fewer deductions, focus on \
                 maximizing your take-home salary rather than tax-saving investments"
                    .to_string(),
            );
            if input.employer_nps_contribution.is_zero() && input.salary_income > ADVICE_INCOME_FLOOR
            {
                advice.push(
                    "Consider requesting your employer to restructure your salary to \
                     include NPS contributions, as this is deductible even in the new \
                     regime"
                        .to_string(),
                );
            }
        }
    }

    if input.tds_paid.is_zero() && gross_income > ADVICE_INCOME_FLOOR {
        advice.push(
            "Make sure to report all TDS deductions as this directly reduces your \
             final tax payment"
                .to_string(),
        );
    }

    advice
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn salaried_input() -> TaxInput {
        TaxInput {
            salary_income: dec!(1000000),
            basic_salary: dec!(500000),
            standard_deduction: true,
            ..TaxInput::default()
        }
    }

    // =========================================================================
    // compare tests
    // =========================================================================

    #[test]
    fn new_regime_wins_for_plain_salary() {
        let result = compare(&salaried_input());

        assert_eq!(result.better_regime, TaxRegime::New);
        assert_eq!(result.new_regime.total_liability, dec!(0));
        assert_eq!(result.old_regime.total_liability, dec!(106600));
        assert_eq!(result.savings, dec!(106600));
    }

    #[test]
    fn tie_favours_the_new_regime() {
        // below every threshold, both totals are zero
        let input = TaxInput {
            salary_income: dec!(200000),
            ..TaxInput::default()
        };

        let result = compare(&input);

        assert_eq!(result.old_regime.total_liability, dec!(0));
        assert_eq!(result.new_regime.total_liability, dec!(0));
        assert_eq!(result.better_regime, TaxRegime::New);
        assert_eq!(result.savings, dec!(0));
    }

    #[test]
    fn heavy_deductions_swing_the_verdict_to_old() {
        let input = TaxInput {
            salary_income: dec!(1600000),
            has_chapter_via_deductions: true,
            epf_contribution: dec!(150000),
            section_80d: dec!(25000),
            nps_contribution: dec!(50000),
            home_loan_interest: dec!(200000),
            receives_hra: true,
            hra_received: dec!(200000),
            rent_paid: dec!(240000),
            is_metro_city: true,
            ..salaried_input()
        };

        let result = compare(&input);

        assert_eq!(result.better_regime, TaxRegime::Old);
        assert!(result.savings > dec!(0));
    }

    #[test]
    fn negative_inputs_are_sanitised_before_computing() {
        let input = TaxInput {
            salary_income: dec!(-1),
            ..TaxInput::default()
        };

        let result = compare(&input);

        assert_eq!(result.new_regime.gross_income, dec!(0));
        assert_eq!(result.new_regime.final_liability, dec!(0));
    }

    // =========================================================================
    // breakdown tests
    // =========================================================================

    #[test]
    fn old_breakdown_walks_the_full_computation() {
        let result = compare(&salaried_input());
        let labels: Vec<&str> = result
            .old_regime_breakdown
            .iter()
            .map(|line| line.label.as_str())
            .collect();

        assert_eq!(
            labels,
            vec![
                "Gross Total Income",
                "Total Exemptions",
                "Standard Deduction",
                "Chapter VI-A Deductions",
                "Taxable Income",
                "Basic Tax",
                "Rebate u/s 87A",
                "Surcharge",
                "Health & Education Cess (4%)",
                "Marginal Relief",
                "Total Tax Liability",
                "TDS/TCS Paid",
                "Final Tax Payable",
            ]
        );
    }

    #[test]
    fn new_breakdown_omits_the_deduction_lines() {
        let result = compare(&salaried_input());
        let labels: Vec<&str> = result
            .new_regime_breakdown
            .iter()
            .map(|line| line.label.as_str())
            .collect();

        assert_eq!(
            labels,
            vec![
                "Gross Total Income",
                "Standard Deduction",
                "Taxable Income",
                "Basic Tax",
                "Rebate u/s 87A",
                "Surcharge",
                "Health & Education Cess (4%)",
                "Marginal Relief",
                "Total Tax Liability",
                "TDS/TCS Paid",
                "Final Tax Payable",
            ]
        );
    }

    #[test]
    fn breakdown_amounts_match_the_worksheet() {
        let result = compare(&salaried_input());
        let cess_line = result
            .old_regime_breakdown
            .iter()
            .find(|line| line.label == "Health & Education Cess (4%)")
            .unwrap();

        assert_eq!(cess_line.amount, dec!(4100));
    }

    // =========================================================================
    // recommendation tests
    // =========================================================================

    #[test]
    fn verdict_line_comes_first_with_formatted_savings() {
        let result = compare(&salaried_input());

        assert_eq!(
            result.recommendations[0],
            "The new tax regime is better for you, saving you ₹1,06,600"
        );
    }

    #[test]
    fn new_regime_advice_includes_employer_nps_restructuring() {
        let result = compare(&salaried_input());

        assert!(result.recommendations.iter().any(|r| r.contains(
            "restructure your salary to include NPS contributions"
        )));
    }

    #[test]
    fn old_regime_advice_lists_unused_headroom_in_order() {
        let input = TaxInput {
            salary_income: dec!(1600000),
            has_chapter_via_deductions: true,
            epf_contribution: dec!(100000),
            home_loan_interest: dec!(200000),
            nps_contribution: dec!(50000),
            section_80d: dec!(25000),
            receives_hra: true,
            hra_received: dec!(200000),
            rent_paid: dec!(240000),
            is_metro_city: true,
            ..salaried_input()
        };
        let result = compare(&input);

        assert_eq!(result.better_regime, TaxRegime::Old);
        // only the 80C bucket has headroom left: 150,000 - 100,000
        assert_eq!(
            result.recommendations[1],
            "Invest ₹50,000 more in 80C options like ELSS, PPF, or EPF to maximize \
             your tax benefits"
        );
    }

    #[test]
    fn unclaimed_hra_and_home_loan_are_flagged() {
        // receives HRA but reports no rent, and carries a home loan with no
        // interest claimed; the uncapped categories still keep old ahead
        let input = TaxInput {
            salary_income: dec!(1600000),
            has_chapter_via_deductions: true,
            epf_contribution: dec!(150000),
            nps_contribution: dec!(50000),
            section_80d: dec!(25000),
            section_80g: dec!(100000),
            education_loan_interest: dec!(300000),
            receives_hra: true,
            rent_paid: dec!(0),
            has_home_loan: true,
            home_loan_interest: dec!(0),
            ..salaried_input()
        };

        let result = compare(&input);

        assert_eq!(result.better_regime, TaxRegime::Old);
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.starts_with("Submit your rent receipts"))
        );
        assert!(
            result
                .recommendations
                .iter()
                .any(|r| r.starts_with("Ensure you claim the full interest deduction"))
        );
    }

    #[test]
    fn missing_tds_is_flagged_for_higher_incomes() {
        let result = compare(&salaried_input());

        assert_eq!(
            result.recommendations.last().unwrap(),
            "Make sure to report all TDS deductions as this directly reduces your \
             final tax payment"
        );
    }

    #[test]
    fn no_tds_advice_for_modest_incomes() {
        let input = TaxInput {
            salary_income: dec!(400000),
            ..TaxInput::default()
        };

        let result = compare(&input);

        assert!(
            !result
                .recommendations
                .iter()
                .any(|r| r.starts_with("Make sure to report all TDS"))
        );
    }
}
