//! HRA exemption and the capped deduction aggregates.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{EmploymentSector, TaxInput};

/// Ceiling on the aggregated 80C bucket (EPF, PPF, ELSS, life insurance,
/// tuition, other).
pub const SECTION_80C_CAP: Decimal = dec!(150000);

/// Ceiling on health insurance premium (80D).
pub const SECTION_80D_CAP: Decimal = dec!(25000);

/// Ceiling on savings account interest (80TTA).
pub const SECTION_80TTA_CAP: Decimal = dec!(10000);

/// Ceiling on own NPS contribution (80CCD(1B)).
pub const NPS_CAP: Decimal = dec!(50000);

/// Ceiling on home loan interest (section 24).
pub const HOME_LOAN_INTEREST_CAP: Decimal = dec!(200000);

/// Caps an aggregate at its statutory ceiling.
pub fn capped(amount: Decimal, ceiling: Decimal) -> Decimal {
    amount.min(ceiling)
}

/// HRA exemption: the least of HRA received, rent paid beyond 10% of basic
/// salary, and 50% (metro) or 40% (non-metro) of basic salary. Zero when
/// rent does not clear the 10%-of-basic bar.
pub fn hra_exemption(
    basic_salary: Decimal,
    hra_received: Decimal,
    rent_paid: Decimal,
    is_metro_city: bool,
) -> Decimal {
    let rent_over_threshold = rent_paid - basic_salary * dec!(0.10);
    if rent_over_threshold <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let salary_share = if is_metro_city {
        basic_salary * dec!(0.50)
    } else {
        basic_salary * dec!(0.40)
    };
    hra_received.min(rent_over_threshold).min(salary_share)
}

/// Capped total of the 80C component bucket.
pub fn section_80c_total(input: &TaxInput) -> Decimal {
    let components = input.epf_contribution
        + input.ppf_investment
        + input.elss_investment
        + input.life_insurance_premium
        + input.tuition_fees
        + input.other_80c;
    capped(components, SECTION_80C_CAP)
}

/// The full Chapter VI-A stack with each category capped (employer NPS is
/// handled separately — it survives into the new regime, this stack does
/// not).
pub fn chapter_via_total(input: &TaxInput) -> Decimal {
    section_80c_total(input)
        + capped(input.section_80d, SECTION_80D_CAP)
        + capped(input.section_80tta, SECTION_80TTA_CAP)
        + input.section_80g
        + capped(input.nps_contribution, NPS_CAP)
        + capped(input.home_loan_interest, HOME_LOAN_INTEREST_CAP)
        + input.education_loan_interest
}

/// Deductible employer NPS contribution: capped at a sector-dependent share
/// of basic salary (14% private, 10% government).
pub fn employer_nps_deduction(
    contribution: Decimal,
    basic_salary: Decimal,
    sector: EmploymentSector,
) -> Decimal {
    if contribution <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    capped(contribution, basic_salary * sector.nps_cap_rate())
}

/// Total salary exemptions for the old regime: HRA exemption (only when the
/// taxpayer receives HRA and reports rent), LTA, professional tax, and any
/// other exemptions.
pub fn total_salary_exemptions(input: &TaxInput) -> Decimal {
    let hra = if input.receives_hra && input.rent_paid > Decimal::ZERO {
        hra_exemption(
            input.basic_salary,
            input.hra_received,
            input.rent_paid,
            input.is_metro_city,
        )
    } else {
        Decimal::ZERO
    };
    hra + input.lta + input.professional_tax + input.other_exemptions
}
