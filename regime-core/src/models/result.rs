use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxRegime;

/// Everything one regime worksheet produces for a single input snapshot.
///
/// All monetary fields are whole-rupee amounts and never negative: every
/// subtraction in the pipeline is floored at zero before flowing on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegimeWorksheetResult {
    /// Which regime produced this result.
    pub regime: TaxRegime,

    /// Gross total income (salary plus counted other income).
    pub gross_income: Decimal,

    /// Salary exemptions subtracted before tax (HRA, LTA, professional tax,
    /// other). Always zero under the new regime.
    pub total_exemptions: Decimal,

    /// Standard deduction actually applied (0 when the flag is off).
    pub standard_deduction: Decimal,

    /// Capped Chapter VI-A deduction stack. Always zero under the new
    /// regime, which admits none of it.
    pub chapter_via_deductions: Decimal,

    /// Deductible employer NPS contribution (allowed in both regimes).
    pub employer_nps_deduction: Decimal,

    /// Income the slab tables are applied to.
    pub taxable_income: Decimal,

    /// Slab tax before any rebate or levy.
    pub basic_tax: Decimal,

    /// Section 87A rebate granted.
    pub rebate: Decimal,

    /// Basic tax net of rebate.
    pub tax_after_rebate: Decimal,

    /// Surcharge on the tax (income-tiered).
    pub surcharge: Decimal,

    /// Health and education cess, 4% of tax-after-rebate plus surcharge.
    pub cess: Decimal,

    /// Marginal relief for incomes just past the rebate ceiling.
    pub marginal_relief: Decimal,

    /// Total liability for the year, before withholding credits.
    pub total_liability: Decimal,

    /// Liability still payable after TDS and TCS credits.
    pub final_liability: Decimal,
}
