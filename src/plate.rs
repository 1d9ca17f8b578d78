use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{calc_error::CalcError, weight::Weight};

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Weight", into = "Weight")]
pub struct Plate {
    weight: Weight,
}

impl Plate {
    ///
    /// # Errors
    /// If the weight is zero.
    ///
    pub fn new(weight: Weight) -> Result<Self, CalcError> {
        if weight.is_zero() {
            return Err(CalcError::NonPositivePlate);
        }
        Ok(Plate { weight })
    }

    ///
    /// # Errors
    /// If `weight` is not a positive, finite number.
    ///
    pub fn from_f64(weight: f64) -> Result<Self, CalcError> {
        if weight <= 0.0 {
            return Err(CalcError::NonPositivePlate);
        }
        Plate::new(Weight::new(weight)?)
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl TryFrom<Weight> for Plate {
    type Error = CalcError;

    fn try_from(weight: Weight) -> Result<Self, Self::Error> {
        Plate::new(weight)
    }
}

impl From<Plate> for Weight {
    fn from(plate: Plate) -> Self {
        plate.weight
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(Plate::new(Weight::ZERO), Err(CalcError::NonPositivePlate));
        assert_eq!(Plate::from_f64(0.0), Err(CalcError::NonPositivePlate));
        assert_eq!(Plate::from_f64(-2.5), Err(CalcError::NonPositivePlate));
    }

    #[test]
    fn orders_by_weight() -> testresult::TestResult {
        let small = Plate::from_f64(2.5)?;
        let big = Plate::from_f64(45.0)?;
        assert!(small < big);
        assert_eq!(small.to_string(), "2.5");
        Ok(())
    }
}
