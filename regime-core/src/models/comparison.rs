use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RegimeWorksheetResult, TaxRegime};

/// One human-labelled amount in a regime breakdown. Lines are ordered the
/// way a return walks through the computation, so callers can render them
/// top to bottom as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub label: String,
    pub amount: Decimal,
}

impl BreakdownLine {
    pub fn new(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// The full output of a regime comparison run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    /// Old-regime worksheet.
    pub old_regime: RegimeWorksheetResult,

    /// New-regime worksheet.
    pub new_regime: RegimeWorksheetResult,

    /// Regime with the lower total liability; a tie favours the new regime.
    pub better_regime: TaxRegime,

    /// Absolute difference between the two total liabilities
    /// (pre-withholding totals, not final payable).
    pub savings: Decimal,

    /// Ordered line items for the old-regime computation.
    pub old_regime_breakdown: Vec<BreakdownLine>,

    /// Ordered line items for the new-regime computation.
    pub new_regime_breakdown: Vec<BreakdownLine>,

    /// Ordered advice strings, highest priority first.
    pub recommendations: Vec<String>,
}
