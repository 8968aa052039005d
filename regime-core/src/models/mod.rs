mod age_group;
mod comparison;
mod employment;
mod input;
mod regime;
mod result;

pub use age_group::AgeGroup;
pub use comparison::{BreakdownLine, ComparisonResult};
pub use employment::EmploymentSector;
pub use input::TaxInput;
pub use regime::TaxRegime;
pub use result::RegimeWorksheetResult;
