use serde::{Deserialize, Serialize};

use crate::{
    bar::Bar,
    bar_kind::BarKind,
    barbell::BarbellState,
    calc_error::CalcError,
    inventory::PlateInventory,
    packer::Preference,
    percentage::Rounding,
    plate_count::PlateCount,
    unit::Unit,
    weight::Weight,
};

/// Gym setup read from a JSON file. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GymConfig {
    pub unit: Unit,
    pub bar_kind: BarKind,
    /// Overrides the standard weight of `bar_kind`.
    pub bar_weight: Option<Weight>,
    /// Both collars together.
    pub collar_weight: Weight,
    /// Falls back to the default set for `unit` when absent.
    pub plates: Option<Vec<PlateCount>>,
    pub preference: Preference,
    pub rounding: Rounding,
    pub increment: Weight,
    pub percent_step: u32,
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Lb,
            bar_kind: BarKind::Mens,
            bar_weight: None,
            collar_weight: Weight::ZERO,
            plates: None,
            preference: Preference::Under,
            rounding: Rounding::Down,
            increment: Weight::from_whole(5),
            percent_step: 5,
        }
    }
}

impl GymConfig {
    #[must_use]
    pub fn bar(&self) -> Bar {
        match self.bar_weight {
            Some(weight) => Bar::new(weight, self.bar_kind),
            None => Bar::standard(self.bar_kind, self.unit),
        }
    }

    ///
    /// # Errors
    /// If the configured plate list repeats a weight.
    ///
    pub fn plates(&self) -> Result<PlateInventory, CalcError> {
        match &self.plates {
            Some(plates) => PlateInventory::try_from_counts(plates.iter().copied()),
            None => Ok(self.unit.default_plates()),
        }
    }

    ///
    /// # Errors
    /// If the configured plate list repeats a weight.
    ///
    pub fn barbell(&self) -> Result<BarbellState, CalcError> {
        Ok(BarbellState::new(self.unit)
            .with_bar(self.bar())
            .with_collar(self.collar_weight)
            .with_plates(self.plates()?)
            .with_preference(self.preference))
    }
}
