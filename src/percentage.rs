//! Percentage tables for training-load prescriptions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    calc_error::CalcError,
    weight::{SCALE, Weight},
};

/// How to snap a weight onto multiples of an increment.
///
/// `Nearest` breaks ties towards the even multiple, so with an increment of 5
/// both 42.5 and 37.5 round to 40.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    None,
    #[default]
    Down,
    Up,
    Nearest,
}

impl Rounding {
    ///
    /// # Errors
    /// If the increment is zero and the policy needs one.
    ///
    pub fn apply(self, value: Weight, increment: Weight) -> Result<Weight, CalcError> {
        self.round_ratio(u128::from(value.milli()), 1, increment)
    }

    /// Rounds `numerator / denominator` thousandths.
    fn round_ratio(
        self,
        numerator: u128,
        denominator: u128,
        increment: Weight,
    ) -> Result<Weight, CalcError> {
        if self == Rounding::None {
            return Ok(to_weight(div_ties_even(numerator, denominator)));
        }
        if increment.is_zero() {
            return Err(CalcError::InvalidIncrement);
        }

        let increment = u128::from(increment.milli());
        let step = increment * denominator;
        let multiples = match self {
            Rounding::Down => numerator / step,
            Rounding::Up => numerator.div_ceil(step),
            Rounding::Nearest | Rounding::None => div_ties_even(numerator, step),
        };

        Ok(to_weight(multiples * increment))
    }
}

fn div_ties_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;

    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

fn to_weight(milli: u128) -> Weight {
    Weight::from_milli(u64::try_from(milli).unwrap_or(u64::MAX))
}

impl Display for Rounding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rounding::None => write!(f, "none"),
            Rounding::Down => write!(f, "down"),
            Rounding::Up => write!(f, "up"),
            Rounding::Nearest => write!(f, "nearest"),
        }
    }
}

impl FromStr for Rounding {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(Rounding::None),
            "down" | "floor" => Ok(Rounding::Down),
            "up" | "ceil" => Ok(Rounding::Up),
            "nearest" | "round" => Ok(Rounding::Nearest),
            _ => Err(CalcError::UnknownRounding(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentageRow {
    pub percent: u32,
    pub exact: f64,
    pub rounded: Weight,
}

/// Builds rows for 0%, `step`%, 2 × `step`% and so on up to 100%.
///
/// # Errors
/// If `step` is outside 1..=100, or the rounding policy needs an increment and
/// `increment` is zero.
#[allow(clippy::cast_precision_loss)]
pub fn percentage_table(
    base: Weight,
    step: u32,
    rounding: Rounding,
    increment: Weight,
) -> Result<Vec<PercentageRow>, CalcError> {
    if !(1..=100).contains(&step) {
        return Err(CalcError::InvalidPercentStep(step));
    }
    if rounding != Rounding::None && increment.is_zero() {
        return Err(CalcError::InvalidIncrement);
    }

    (0..=100)
        .step_by(step as usize)
        .map(|percent| {
            let numerator = u128::from(base.milli()) * u128::from(percent);
            Ok(PercentageRow {
                percent,
                exact: numerator as f64 / (100 * SCALE) as f64,
                rounded: rounding.round_ratio(numerator, 100, increment)?,
            })
        })
        .collect()
}
