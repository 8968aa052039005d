//! CSV loader for taxpayer scenario data.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter, and any
//! column other than `salary_income` may be omitted entirely. Empty cells
//! fall back to the engine defaults (zero amounts, flags off).
//!
//! | Column | Required | Type | Notes |
//! |----------------------------|----------|---------|-----------------------------------------|
//! | `salary_income` | yes | decimal | Gross salary for the year |
//! | `basic_salary` | no | decimal | Basic-pay component |
//! | `age_group` | no | string | `below60`, `60to80`, or `above80` |
//! | `sector` | no | string | `private` or `government` |
//! | `has_other_income` | no | bool | `true`/`false` |
//! | `other_income` | no | decimal | |
//! | `rental_income` | no | decimal | |
//! | `business_income` | no | decimal | |
//! | `capital_gains` | no | decimal | |
//! | `agriculture_income` | no | decimal | Exempt; reported only |
//! | `receives_hra` | no | bool | |
//! | `hra_received` | no | decimal | |
//! | `rent_paid` | no | decimal | |
//! | `is_metro_city` | no | bool | |
//! | `has_home_loan` | no | bool | |
//! | `lta` | no | decimal | |
//! | `professional_tax` | no | decimal | |
//! | `other_exemptions` | no | decimal | |
//! | `standard_deduction` | no | bool | |
//! | `has_chapter_via_deductions` | no | bool | |
//! | `epf_contribution` | no | decimal | 80C bucket |
//! | `ppf_investment` | no | decimal | 80C bucket |
//! | `elss_investment` | no | decimal | 80C bucket |
//! | `life_insurance_premium` | no | decimal | 80C bucket |
//! | `tuition_fees` | no | decimal | 80C bucket |
//! | `other_80c` | no | decimal | 80C bucket |
//! | `section_80d` | no | decimal | |
//! | `section_80g` | no | decimal | |
//! | `section_80tta` | no | decimal | |
//! | `nps_contribution` | no | decimal | |
//! | `home_loan_interest` | no | decimal | |
//! | `education_loan_interest` | no | decimal | |
//! | `employer_nps_contribution` | no | decimal | |
//! | `tds_paid` | no | decimal | |
//! | `tcs_paid` | no | decimal | |
//!
//! ### Minimal example
//!
//! ```csv
//! salary_income,standard_deduction
//! 1000000,true
//! ```

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

use regime_core::models::{AgeGroup, EmploymentSector, TaxInput};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    salary_income: Decimal,
    #[serde(default)]
    basic_salary: Option<Decimal>,
    #[serde(default)]
    age_group: Option<String>,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    has_other_income: Option<bool>,
    #[serde(default)]
    other_income: Option<Decimal>,
    #[serde(default)]
    rental_income: Option<Decimal>,
    #[serde(default)]
    business_income: Option<Decimal>,
    #[serde(default)]
    capital_gains: Option<Decimal>,
    #[serde(default)]
    agriculture_income: Option<Decimal>,
    #[serde(default)]
    receives_hra: Option<bool>,
    #[serde(default)]
    hra_received: Option<Decimal>,
    #[serde(default)]
    rent_paid: Option<Decimal>,
    #[serde(default)]
    is_metro_city: Option<bool>,
    #[serde(default)]
    has_home_loan: Option<bool>,
    #[serde(default)]
    lta: Option<Decimal>,
    #[serde(default)]
    professional_tax: Option<Decimal>,
    #[serde(default)]
    other_exemptions: Option<Decimal>,
    #[serde(default)]
    standard_deduction: Option<bool>,
    #[serde(default)]
    has_chapter_via_deductions: Option<bool>,
    #[serde(default)]
    epf_contribution: Option<Decimal>,
    #[serde(default)]
    ppf_investment: Option<Decimal>,
    #[serde(default)]
    elss_investment: Option<Decimal>,
    #[serde(default)]
    life_insurance_premium: Option<Decimal>,
    #[serde(default)]
    tuition_fees: Option<Decimal>,
    #[serde(default)]
    other_80c: Option<Decimal>,
    #[serde(default)]
    section_80d: Option<Decimal>,
    #[serde(default)]
    section_80g: Option<Decimal>,
    #[serde(default)]
    section_80tta: Option<Decimal>,
    #[serde(default)]
    nps_contribution: Option<Decimal>,
    #[serde(default)]
    home_loan_interest: Option<Decimal>,
    #[serde(default)]
    education_loan_interest: Option<Decimal>,
    #[serde(default)]
    employer_nps_contribution: Option<Decimal>,
    #[serde(default)]
    tds_paid: Option<Decimal>,
    #[serde(default)]
    tcs_paid: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading or converting scenario data.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// required column, type mismatch, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// An `age_group` cell contained a value that is not one of the
    /// recognised codes. `row` is 1-based (header = row 0).
    #[error("unrecognised age group '{value}' on row {row}")]
    InvalidAgeGroup { value: String, row: usize },

    /// A `sector` cell contained a value that is not one of the recognised
    /// codes.
    #[error("unrecognised employment sector '{value}' on row {row}")]
    InvalidSector { value: String, row: usize },

    /// The scenario file could not be read at all.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Convert a single CSV row into a TaxInput.
///
/// row_number is 1-based (for error messages).
fn convert_row(row: CsvRow, row_number: usize) -> Result<TaxInput, ScenarioLoadError> {
    let age_group = match row.age_group {
        Some(value) if !value.is_empty() => AgeGroup::parse(&value).ok_or(
            ScenarioLoadError::InvalidAgeGroup {
                value,
                row: row_number,
            },
        )?,
        _ => AgeGroup::default(),
    };
    let employment_sector = match row.sector {
        Some(value) if !value.is_empty() => EmploymentSector::parse(&value).ok_or(
            ScenarioLoadError::InvalidSector {
                value,
                row: row_number,
            },
        )?,
        _ => EmploymentSector::default(),
    };

    let amount = |cell: Option<Decimal>| cell.unwrap_or(Decimal::ZERO);
    let flag = |cell: Option<bool>| cell.unwrap_or(false);

    Ok(TaxInput {
        salary_income: row.salary_income,
        basic_salary: amount(row.basic_salary),
        age_group,
        has_other_income: flag(row.has_other_income),
        other_income: amount(row.other_income),
        rental_income: amount(row.rental_income),
        business_income: amount(row.business_income),
        capital_gains: amount(row.capital_gains),
        agriculture_income: amount(row.agriculture_income),
        receives_hra: flag(row.receives_hra),
        hra_received: amount(row.hra_received),
        rent_paid: amount(row.rent_paid),
        is_metro_city: flag(row.is_metro_city),
        has_home_loan: flag(row.has_home_loan),
        lta: amount(row.lta),
        professional_tax: amount(row.professional_tax),
        other_exemptions: amount(row.other_exemptions),
        standard_deduction: flag(row.standard_deduction),
        has_chapter_via_deductions: flag(row.has_chapter_via_deductions),
        epf_contribution: amount(row.epf_contribution),
        ppf_investment: amount(row.ppf_investment),
        elss_investment: amount(row.elss_investment),
        life_insurance_premium: amount(row.life_insurance_premium),
        tuition_fees: amount(row.tuition_fees),
        other_80c: amount(row.other_80c),
        section_80d: amount(row.section_80d),
        section_80g: amount(row.section_80g),
        section_80tta: amount(row.section_80tta),
        nps_contribution: amount(row.nps_contribution),
        home_loan_interest: amount(row.home_loan_interest),
        education_loan_interest: amount(row.education_loan_interest),
        employment_sector,
        employer_nps_contribution: amount(row.employer_nps_contribution),
        tds_paid: amount(row.tds_paid),
        tcs_paid: amount(row.tcs_paid),
    })
}

/// Parse CSV text (the full file contents as a &str) and return a vector of
/// TaxInput. Rows are returned in file order.
///
/// # Errors
///
/// * [ScenarioLoadError::Parse] – if the CSV is structurally invalid or a
///   required field cannot be deserialised.
/// * [ScenarioLoadError::InvalidAgeGroup] / [ScenarioLoadError::InvalidSector]
///   – if any row contains an unrecognised enum code.
pub fn load_from_str(input: &str) -> Result<Vec<TaxInput>, ScenarioLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1; // 1-based for user-facing messages
            convert_row(row, row_number)
        })
        .collect()
}

/// Read a scenario file from disk and parse it.
pub fn load_from_file(path: &Path) -> Result<Vec<TaxInput>, ScenarioLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScenarioLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}
