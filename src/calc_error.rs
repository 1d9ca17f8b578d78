use thiserror::Error;

use crate::weight::Weight;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Weight must be a finite, non-negative number, got {0}.")]
    InvalidWeight(f64),
    #[error("Invalid weight '{0}'.")]
    UnparsableWeight(String),
    #[error("Plate weight must be greater than zero.")]
    NonPositivePlate,
    #[error("Plate count must not be negative, got {0}.")]
    NegativeCount(i64),
    #[error("Plate {0} is listed more than once.")]
    DuplicatePlate(Weight),
    #[error("Invalid plate entry '{0}', expected <weight>:<count>.")]
    InvalidPlateEntry(String),
    #[error("Percent step must be between 1 and 100, got {0}.")]
    InvalidPercentStep(u32),
    #[error("Rounding increment must be greater than zero.")]
    InvalidIncrement,
    #[error("Target weight {target} cannot be less than the bar weight {bar}.")]
    TargetBelowBar { target: Weight, bar: Weight },
    #[error("Target weight {target} is less than bar and collar weight {minimum}.")]
    TargetBelowCollars { target: Weight, minimum: Weight },
    #[error("Unknown unit '{0}'.")]
    UnknownUnit(String),
    #[error("Unknown preference '{0}', expected 'under' or 'over'.")]
    UnknownPreference(String),
    #[error("Unknown rounding '{0}', expected 'none', 'down', 'up' or 'nearest'.")]
    UnknownRounding(String),
    #[error("Unknown bar kind '{0}'.")]
    UnknownBarKind(String),
}
