use serde::{Deserialize, Serialize};

/// One of the two alternative rule sets a resident taxpayer may elect:
/// the old regime with its full deduction stack, or the new regime with a
/// larger standard deduction and almost no other deductions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    Old,
    #[default]
    New,
}

impl TaxRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Old => "old",
            Self::New => "new",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "old" => Some(Self::Old),
            "new" => Some(Self::New),
            _ => None,
        }
    }
}
