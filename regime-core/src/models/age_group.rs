use serde::{Deserialize, Serialize};

/// Taxpayer age band. The old regime grants a higher basic exemption to
/// senior (60-80) and super-senior (80+) citizens; the new regime ignores
/// age entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    #[default]
    Below60,
    SixtyToEighty,
    AboveEighty,
}

impl AgeGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "below60",
            Self::SixtyToEighty => "60to80",
            Self::AboveEighty => "above80",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "below60" => Some(Self::Below60),
            "60to80" => Some(Self::SixtyToEighty),
            "above80" => Some(Self::AboveEighty),
            _ => None,
        }
    }
}
