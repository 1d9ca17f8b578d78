use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{calc_error::CalcError, plate::Plate, weight::Weight};

/// A plate weight together with a number of pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlateCount {
    #[serde(rename = "weight")]
    pub plate: Plate,
    pub count: usize,
}

impl PlateCount {
    #[must_use]
    pub fn new(plate: Plate, count: usize) -> Self {
        PlateCount { plate, count }
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.plate.weight() * self.count
    }
}

impl From<(Plate, usize)> for PlateCount {
    fn from((plate, count): (Plate, usize)) -> Self {
        PlateCount::new(plate, count)
    }
}

impl FromStr for PlateCount {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weight, count) = s
            .split_once(':')
            .ok_or_else(|| CalcError::InvalidPlateEntry(s.to_string()))?;
        let plate = Plate::new(weight.parse::<Weight>()?)?;
        let count = count
            .trim()
            .parse::<i64>()
            .map_err(|_| CalcError::InvalidPlateEntry(s.to_string()))?;
        let count = usize::try_from(count).map_err(|_| CalcError::NegativeCount(count))?;

        Ok(PlateCount { plate, count })
    }
}

impl Display for PlateCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.plate, self.count)
    }
}
