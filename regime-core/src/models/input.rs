use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AgeGroup, EmploymentSector};

/// One complete snapshot of a taxpayer's figures for a financial year.
///
/// Every monetary field is a rupee amount; `Default` gives a zeroed form
/// (all amounts 0, all flags off, age below 60, private sector). The engine
/// never mutates an input — each recomputation takes a fresh snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Gross salary for the year, before any exemption or deduction.
    pub salary_income: Decimal,

    /// Basic-pay component of salary. Drives the HRA exemption and the
    /// employer NPS deduction cap; it is not itself added to income.
    pub basic_salary: Decimal,

    /// Age band of the taxpayer (old-regime exemption limits are age-banded).
    pub age_group: AgeGroup,

    /// Whether any income beyond salary should be counted.
    pub has_other_income: bool,

    /// Interest and other miscellaneous income.
    pub other_income: Decimal,

    /// Net rental income from house property.
    pub rental_income: Decimal,

    /// Business or professional income.
    pub business_income: Decimal,

    /// Capital gains for the year.
    pub capital_gains: Decimal,

    /// Agricultural income. Exempt from income tax, so it is carried for
    /// reporting but never added to gross total income.
    pub agriculture_income: Decimal,

    /// Whether the salary includes a house rent allowance component.
    pub receives_hra: bool,

    /// HRA received for the year.
    pub hra_received: Decimal,

    /// Rent actually paid for the year.
    pub rent_paid: Decimal,

    /// Metro-city residence raises the HRA cap from 40% to 50% of basic.
    pub is_metro_city: bool,

    /// Whether the taxpayer is servicing a home loan. Only used by the
    /// recommendation text; the interest amount below drives the deduction.
    pub has_home_loan: bool,

    /// Leave travel allowance claimed exempt.
    pub lta: Decimal,

    /// Professional tax deducted by the employer.
    pub professional_tax: Decimal,

    /// Any other salary exemptions.
    pub other_exemptions: Decimal,

    /// Claim the standard deduction (50,000 old regime / 75,000 new regime).
    pub standard_deduction: bool,

    /// Whether the Chapter VI-A deduction stack below should be applied
    /// (old regime only).
    pub has_chapter_via_deductions: bool,

    /// Employee provident fund contribution (80C bucket).
    pub epf_contribution: Decimal,

    /// Public provident fund investment (80C bucket).
    pub ppf_investment: Decimal,

    /// Equity-linked savings scheme investment (80C bucket).
    pub elss_investment: Decimal,

    /// Life insurance premium (80C bucket).
    pub life_insurance_premium: Decimal,

    /// Children's tuition fees (80C bucket).
    pub tuition_fees: Decimal,

    /// Anything else claimable under 80C.
    pub other_80c: Decimal,

    /// Health insurance premium (80D, capped at 25,000).
    pub section_80d: Decimal,

    /// Eligible donations (80G, uncapped here).
    pub section_80g: Decimal,

    /// Savings account interest (80TTA, capped at 10,000).
    pub section_80tta: Decimal,

    /// Own NPS contribution (80CCD(1B), capped at 50,000).
    pub nps_contribution: Decimal,

    /// Home loan interest (section 24, capped at 200,000).
    pub home_loan_interest: Decimal,

    /// Education loan interest (80E, uncapped).
    pub education_loan_interest: Decimal,

    /// Sector of employment; sets the employer NPS cap rate.
    pub employment_sector: EmploymentSector,

    /// Employer's NPS contribution. Deductible in BOTH regimes, capped at
    /// a sector-dependent share of basic salary.
    pub employer_nps_contribution: Decimal,

    /// Tax already deducted at source.
    pub tds_paid: Decimal,

    /// Tax already collected at source.
    pub tcs_paid: Decimal,
}

impl TaxInput {
    /// Boundary coercion: floors every monetary field at zero.
    ///
    /// The computation downstream assumes non-negative amounts and never
    /// raises an error for bad numeric input, so negatives are clamped here
    /// once, with a warning, rather than rejected.
    pub fn sanitized(mut self) -> Self {
        let fields: [(&str, &mut Decimal); 27] = [
            ("salary_income", &mut self.salary_income),
            ("basic_salary", &mut self.basic_salary),
            ("other_income", &mut self.other_income),
            ("rental_income", &mut self.rental_income),
            ("business_income", &mut self.business_income),
            ("capital_gains", &mut self.capital_gains),
            ("agriculture_income", &mut self.agriculture_income),
            ("hra_received", &mut self.hra_received),
            ("rent_paid", &mut self.rent_paid),
            ("lta", &mut self.lta),
            ("professional_tax", &mut self.professional_tax),
            ("other_exemptions", &mut self.other_exemptions),
            ("epf_contribution", &mut self.epf_contribution),
            ("ppf_investment", &mut self.ppf_investment),
            ("elss_investment", &mut self.elss_investment),
            ("life_insurance_premium", &mut self.life_insurance_premium),
            ("tuition_fees", &mut self.tuition_fees),
            ("other_80c", &mut self.other_80c),
            ("section_80d", &mut self.section_80d),
            ("section_80g", &mut self.section_80g),
            ("section_80tta", &mut self.section_80tta),
            ("nps_contribution", &mut self.nps_contribution),
            ("home_loan_interest", &mut self.home_loan_interest),
            ("education_loan_interest", &mut self.education_loan_interest),
            (
                "employer_nps_contribution",
                &mut self.employer_nps_contribution,
            ),
            ("tds_paid", &mut self.tds_paid),
            ("tcs_paid", &mut self.tcs_paid),
        ];
        for (name, value) in fields {
            if value.is_sign_negative() && !value.is_zero() {
                warn!(field = name, %value, "negative input clamped to zero");
                *value = Decimal::ZERO;
            }
        }
        self
    }
}
