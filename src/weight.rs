//! Fixed-point weights.
//!
//! Every weight is stored as a whole number of thousandths of the active unit,
//! so plate sums like `2.5 + 1.25` never drift.

use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::calc_error::CalcError;

pub(crate) const SCALE: u64 = 1000;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "f64", into = "f64")]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    /// Builds a weight from a real number, rounded to the nearest thousandth.
    ///
    /// # Errors
    /// If `value` is negative, NaN or too large to represent.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn new(value: f64) -> Result<Self, CalcError> {
        if !value.is_finite() || value < 0.0 {
            return Err(CalcError::InvalidWeight(value));
        }

        let scaled = (value * SCALE as f64).round();
        if scaled >= u64::MAX as f64 {
            return Err(CalcError::InvalidWeight(value));
        }

        Ok(Weight(scaled as u64))
    }

    #[must_use]
    pub const fn from_milli(milli: u64) -> Self {
        Weight(milli)
    }

    #[must_use]
    pub const fn from_whole(whole: u64) -> Self {
        Weight(whole * SCALE)
    }

    #[must_use]
    pub fn milli(self) -> u64 {
        self.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn saturating_sub(self, other: Weight) -> Weight {
        Weight(self.0.saturating_sub(other.0))
    }

    #[must_use]
    pub fn checked_sub(self, other: Weight) -> Option<Weight> {
        self.0.checked_sub(other.0).map(Weight)
    }

    /// Halves the weight, dropping a trailing odd thousandth.
    #[must_use]
    pub fn half(self) -> Weight {
        Weight(self.0 / 2)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl Mul<usize> for Weight {
    type Output = Weight;

    fn mul(self, rhs: usize) -> Weight {
        let rhs = u64::try_from(rhs).unwrap_or(u64::MAX);
        Weight(self.0.saturating_mul(rhs))
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, weight| acc + weight)
    }
}

impl TryFrom<f64> for Weight {
    type Error = CalcError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Weight::new(value)
    }
}

impl From<Weight> for f64 {
    fn from(weight: Weight) -> Self {
        weight.as_f64()
    }
}

impl FromStr for Weight {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| CalcError::UnparsableWeight(s.to_string()))?;
        Weight::new(value)
    }
}

impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_fixed(f, self.0)
    }
}

/// Signed difference between two weights, in thousandths.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Delta(i64);

impl Delta {
    #[must_use]
    pub fn between(achieved: Weight, target: Weight) -> Self {
        let achieved = i128::from(achieved.0);
        let target = i128::from(target.0);
        let diff = (achieved - target).clamp(i128::from(i64::MIN), i128::from(i64::MAX));
        Delta(i64::try_from(diff).unwrap_or_default())
    }

    #[must_use]
    pub fn milli(self) -> i64 {
        self.0
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    #[must_use]
    pub fn is_under(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub fn is_over(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub fn magnitude(self) -> Weight {
        Weight(self.0.unsigned_abs())
    }
}

impl Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            0 => write!(f, "0"),
            d if d > 0 => {
                write!(f, "+")?;
                write_fixed(f, d.unsigned_abs())
            }
            d => {
                write!(f, "-")?;
                write_fixed(f, d.unsigned_abs())
            }
        }
    }
}

fn write_fixed(f: &mut std::fmt::Formatter<'_>, milli: u64) -> std::fmt::Result {
    let whole = milli / SCALE;
    let frac = milli % SCALE;
    if frac == 0 {
        write!(f, "{whole}")
    } else {
        let digits = format!("{frac:03}");
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}
