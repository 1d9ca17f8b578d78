use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{calc_error::CalcError, inventory::PlateInventory, plate::Plate, weight::Weight};

/// Kilograms in one pound.
pub const KG_PER_LB: f64 = 0.453_592;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Lb,
    Kg,
}

impl Unit {
    /// Standard home-gym plate set: two pairs of each weight.
    #[must_use]
    pub fn default_plates(self) -> PlateInventory {
        let weights: &[u64] = match self {
            Unit::Lb => &[45_000, 35_000, 25_000, 15_000, 10_000, 5_000, 2_500],
            Unit::Kg => &[25_000, 20_000, 15_000, 10_000, 5_000, 2_500, 1_250],
        };

        weights
            .iter()
            .filter_map(|milli| Plate::new(Weight::from_milli(*milli)).ok())
            .map(|plate| (plate, 2))
            .collect()
    }

    /// Weight of a pair of spring collars.
    #[must_use]
    pub fn default_collar_weight(self) -> Weight {
        match self {
            Unit::Lb => Weight::from_whole(5),
            Unit::Kg => Weight::from_milli(2_500),
        }
    }

    #[must_use]
    pub fn format(self, weight: Weight) -> String {
        format!("{weight} {self}")
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Lb => write!(f, "lb"),
            Unit::Kg => write!(f, "kg"),
        }
    }
}

impl FromStr for Unit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" => Ok(Unit::Lb),
            "kg" | "kgs" => Ok(Unit::Kg),
            _ => Err(CalcError::UnknownUnit(s.to_string())),
        }
    }
}

/// Converts `weight` between units, rounding to the nearest thousandth.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn convert(weight: Weight, from: Unit, to: Unit) -> Weight {
    let milli = weight.milli() as f64;
    let converted = match (from, to) {
        (Unit::Lb, Unit::Kg) => milli * KG_PER_LB,
        (Unit::Kg, Unit::Lb) => milli / KG_PER_LB,
        _ => return weight,
    };

    Weight::from_milli(converted.round() as u64)
}
