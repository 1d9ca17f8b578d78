//! Greedy plate packing.
//!
//! Plates are taken heaviest first, as many of each as fit under the target
//! and the inventory allows. With [`Preference::Over`] a second pass may add a
//! single extra plate to land on or just above the target.
//!
//! Greedy is optimal for canonical plate sets (45/35/25/15/10/5/2.5 and the
//! like) but not for arbitrary ones: with only 45s and 25s, a 50 per side
//! target yields 45 rather than 25 + 25.

use std::{fmt::Display, str::FromStr};

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::{
    calc_error::CalcError,
    inventory::PlateInventory,
    selection::{PackResult, PlateSelection},
    weight::Weight,
};

/// Which side of the target to settle on when it cannot be hit exactly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Under,
    Over,
}

impl Display for Preference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Preference::Under => write!(f, "under"),
            Preference::Over => write!(f, "over"),
        }
    }
}

impl FromStr for Preference {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "under" | "u" => Ok(Preference::Under),
            "over" | "o" => Ok(Preference::Over),
            _ => Err(CalcError::UnknownPreference(s.to_string())),
        }
    }
}

/// Chooses plates for one side of the bar so that their sum approximates
/// `target`.
#[must_use]
pub fn pack(target: Weight, inventory: &PlateInventory, preference: Preference) -> PackResult {
    let (mut selection, remaining) = fill_descending(target, inventory);

    if preference == Preference::Over && !remaining.is_zero() {
        nudge_over(target, inventory, &mut selection);
    }

    let result = PackResult::new(selection, target);
    debug!(
        "Packed {} of {} per side ({}, prefer {preference})",
        result.achieved(),
        target,
        result.delta()
    );
    result
}

/// Takes as many of each plate as fit, heaviest first. Returns the selection
/// and the weight still missing, which is never negative.
fn fill_descending(target: Weight, inventory: &PlateInventory) -> (PlateSelection, Weight) {
    let mut selection = PlateSelection::default();
    let mut remaining = target;

    for (plate, available) in inventory.available() {
        let fits = remaining.milli() / plate.weight().milli();
        let usable = usize::try_from(fits).unwrap_or(usize::MAX).min(available);

        if usable > 0 {
            trace!("Taking {usable} x {plate}");
            selection.push(plate, usable);
            remaining = remaining.saturating_sub(plate.weight() * usable);
        }
    }

    (selection, remaining)
}

/// Adds one pair of the lightest plate that brings the selection to at least
/// `target`. Leaves the selection alone if no single plate can.
fn nudge_over(target: Weight, inventory: &PlateInventory, selection: &mut PlateSelection) {
    let achieved = selection.weight();

    let candidate = inventory
        .available()
        .rev()
        .find(|(plate, available)| {
            *available > selection.count(*plate) && achieved + plate.weight() >= target
        })
        .map(|(plate, _)| plate);

    match candidate {
        Some(plate) => {
            trace!("Adding {plate} to go over {target}");
            selection.add_one(plate);
        }
        None => trace!("No single plate reaches {target}, staying under"),
    }
}
