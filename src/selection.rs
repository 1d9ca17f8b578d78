use std::fmt::Display;

use itertools::Itertools;

use crate::{
    inventory::per_side_weight,
    plate::Plate,
    plate_count::PlateCount,
    weight::{Delta, Weight},
};

/// Plates loaded on one side of the bar, heaviest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlateSelection {
    plates: Vec<PlateCount>,
}

impl PlateSelection {
    /// Appends a lighter plate than any already selected.
    pub(crate) fn push(&mut self, plate: Plate, count: usize) {
        debug_assert!(self.plates.last().is_none_or(|last| last.plate > plate));
        if count > 0 {
            self.plates.push(PlateCount::new(plate, count));
        }
    }

    /// Adds a single pair of `plate`, keeping the heaviest-first order.
    pub(crate) fn add_one(&mut self, plate: Plate) {
        match self.plates.iter().position(|entry| entry.plate <= plate) {
            Some(i) if self.plates[i].plate == plate => self.plates[i].count += 1,
            Some(i) => self.plates.insert(i, PlateCount::new(plate, 1)),
            None => self.plates.push(PlateCount::new(plate, 1)),
        }
    }

    /// Takes a single pair of `plate` off. Returns `false` if none was loaded.
    pub fn remove_one(&mut self, plate: Plate) -> bool {
        let Some(i) = self.plates.iter().position(|entry| entry.plate == plate) else {
            return false;
        };

        if self.plates[i].count > 1 {
            self.plates[i].count -= 1;
        } else {
            self.plates.remove(i);
        }
        true
    }

    pub fn clear(&mut self) {
        self.plates.clear();
    }

    #[must_use]
    pub fn count(&self, plate: Plate) -> usize {
        self.plates
            .iter()
            .find(|entry| entry.plate == plate)
            .map_or(0, |entry| entry.count)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Plate, usize)> + '_ {
        self.plates.iter().map(|entry| (entry.plate, entry.count))
    }

    #[must_use]
    pub fn entries(&self) -> &[PlateCount] {
        &self.plates
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        per_side_weight(self.iter())
    }

    /// Plates needed across both sides of the bar.
    #[must_use]
    pub fn both_sides(&self) -> Vec<PlateCount> {
        self.plates
            .iter()
            .map(|entry| PlateCount::new(entry.plate, entry.count * 2))
            .collect()
    }

    /// Plate totals across both sides, one `45's x 4` line per weight.
    #[must_use]
    pub fn both_sides_breakdown(&self) -> String {
        if self.plates.is_empty() {
            return "No plates needed".to_string();
        }

        self.both_sides()
            .iter()
            .map(|entry| format!("{}'s x {}", entry.plate, entry.count))
            .join("\n")
    }
}

/// Merges repeated plates and orders them heaviest first. Zero counts are dropped.
impl FromIterator<PlateCount> for PlateSelection {
    fn from_iter<I: IntoIterator<Item = PlateCount>>(iter: I) -> Self {
        let plates = iter
            .into_iter()
            .filter(|entry| entry.count > 0)
            .into_grouping_map_by(|entry| entry.plate)
            .fold(0, |acc, _, entry| acc + entry.count)
            .into_iter()
            .sorted_by(|(a, _), (b, _)| b.cmp(a))
            .map(PlateCount::from)
            .collect();

        PlateSelection { plates }
    }
}

impl Display for PlateSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.plates.is_empty() {
            return write!(f, "No plates added.");
        }

        for (i, entry) in self.plates.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackResult {
    selection: PlateSelection,
    target: Weight,
    achieved: Weight,
    delta: Delta,
}

impl PackResult {
    #[must_use]
    pub fn new(selection: PlateSelection, target: Weight) -> Self {
        let achieved = selection.weight();
        PackResult {
            selection,
            target,
            achieved,
            delta: Delta::between(achieved, target),
        }
    }

    #[must_use]
    pub fn selection(&self) -> &PlateSelection {
        &self.selection
    }

    #[must_use]
    pub fn into_selection(self) -> PlateSelection {
        self.selection
    }

    #[must_use]
    pub fn target(&self) -> Weight {
        self.target
    }

    #[must_use]
    pub fn achieved(&self) -> Weight {
        self.achieved
    }

    /// Achieved minus target, per side.
    #[must_use]
    pub fn delta(&self) -> Delta {
        self.delta
    }

    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.delta == Delta::default()
    }
}
