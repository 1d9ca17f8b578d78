use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{calc_error::CalcError, unit::Unit, weight::Weight};

#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    #[default]
    Mens,
    Womens,
}

impl BarKind {
    #[must_use]
    pub fn default_weight(&self, unit: Unit) -> Weight {
        match (self, unit) {
            (BarKind::Mens, Unit::Lb) => Weight::from_whole(45),
            (BarKind::Womens, Unit::Lb) => Weight::from_whole(35),
            (BarKind::Mens, Unit::Kg) => Weight::from_whole(20),
            (BarKind::Womens, Unit::Kg) => Weight::from_whole(15),
        }
    }
}

impl Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarKind::Mens => write!(f, "Men's"),
            BarKind::Womens => write!(f, "Women's"),
        }
    }
}

impl FromStr for BarKind {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m" | "mens" => Ok(BarKind::Mens),
            "w" | "womens" => Ok(BarKind::Womens),
            _ => Err(CalcError::UnknownBarKind(s.to_string())),
        }
    }
}
