use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Employment sector, which sets the ceiling on the deductible employer
/// pension (NPS) contribution as a share of basic salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmploymentSector {
    #[default]
    Private,
    Government,
}

impl EmploymentSector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Government => "government",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "private" => Some(Self::Private),
            "government" => Some(Self::Government),
            _ => None,
        }
    }

    /// Deductible employer NPS contribution cap, as a fraction of basic
    /// salary: 14% for private-sector employees, 10% for government.
    pub fn nps_cap_rate(&self) -> Decimal {
        match self {
            Self::Private => dec!(0.14),
            Self::Government => dec!(0.10),
        }
    }
}
