use hashbrown::HashMap;
use itertools::Itertools;
use log::warn;

use crate::{
    calc_error::CalcError,
    plate::Plate,
    plate_count::PlateCount,
    unit::{Unit, convert},
    weight::Weight,
};

/// Available pairs of each plate weight.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlateInventory {
    counts: HashMap<Plate, usize>,
}

impl PlateInventory {
    ///
    /// # Errors
    /// If a weight is not positive, a count is negative, or a weight appears twice.
    ///
    pub fn try_from_pairs<I>(pairs: I) -> Result<Self, CalcError>
    where
        I: IntoIterator<Item = (f64, i64)>,
    {
        let entries = pairs
            .into_iter()
            .map(|(weight, count)| {
                let plate = Plate::from_f64(weight)?;
                let count = usize::try_from(count).map_err(|_| CalcError::NegativeCount(count))?;
                Ok(PlateCount::new(plate, count))
            })
            .collect::<Result<Vec<_>, CalcError>>()?;

        Self::try_from_counts(entries)
    }

    ///
    /// # Errors
    /// If the same plate weight is listed more than once.
    ///
    pub fn try_from_counts<I>(entries: I) -> Result<Self, CalcError>
    where
        I: IntoIterator<Item = PlateCount>,
    {
        let mut counts = HashMap::new();
        for entry in entries {
            if counts.insert(entry.plate, entry.count).is_some() {
                return Err(CalcError::DuplicatePlate(entry.plate.weight()));
            }
        }
        Ok(PlateInventory { counts })
    }

    #[must_use]
    pub fn count(&self, plate: Plate) -> usize {
        self.counts.get(&plate).copied().unwrap_or_default()
    }

    pub fn set_count(&mut self, plate: Plate, count: usize) {
        self.counts.insert(plate, count);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Every plate with its count, heaviest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Plate, usize)> + '_ {
        self.counts
            .iter()
            .map(|(plate, count)| (*plate, *count))
            .sorted_by(|(a, _), (b, _)| b.cmp(a))
    }

    /// Plates with at least one pair left, heaviest first.
    pub fn available(&self) -> impl DoubleEndedIterator<Item = (Plate, usize)> + '_ {
        self.iter().filter(|(_, count)| *count > 0)
    }

    #[must_use]
    pub fn per_side_weight(&self) -> Weight {
        per_side_weight(self.iter())
    }

    #[must_use]
    pub fn total_weight(&self, bar: Weight) -> Weight {
        total_weight(bar, self.iter())
    }

    /// Re-expresses every plate weight in `to`. Plates that land on the same
    /// weight after rounding are merged, and plates that round down to nothing
    /// are dropped.
    #[must_use]
    pub fn converted(&self, from: Unit, to: Unit) -> Self {
        self.iter()
            .filter_map(|(plate, count)| match Plate::new(convert(plate.weight(), from, to)) {
                Ok(converted) => Some((converted, count)),
                Err(_) => {
                    warn!("Dropping {plate} {from} plate, it rounds to 0 {to}");
                    None
                }
            })
            .collect()
    }
}

impl FromIterator<(Plate, usize)> for PlateInventory {
    fn from_iter<I: IntoIterator<Item = (Plate, usize)>>(iter: I) -> Self {
        let counts = iter
            .into_iter()
            .fold(HashMap::<Plate, usize>::new(), |mut acc, (plate, count)| {
                *acc.entry(plate).or_default() += count;
                acc
            });
        PlateInventory { counts }
    }
}

impl FromIterator<PlateCount> for PlateInventory {
    fn from_iter<I: IntoIterator<Item = PlateCount>>(iter: I) -> Self {
        iter.into_iter()
            .map(|entry| (entry.plate, entry.count))
            .collect()
    }
}

/// Plate weight on one side of the bar.
pub fn per_side_weight<I>(pairs: I) -> Weight
where
    I: IntoIterator<Item = (Plate, usize)>,
{
    pairs
        .into_iter()
        .map(|(plate, count)| plate.weight() * count)
        .sum()
}

/// Bar plus both sides of plates.
pub fn total_weight<I>(bar: Weight, pairs: I) -> Weight
where
    I: IntoIterator<Item = (Plate, usize)>,
{
    bar + per_side_weight(pairs) * 2
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn plate(weight: f64) -> Plate {
        Plate::from_f64(weight).unwrap_or_else(|_| unreachable!("test plates are positive"))
    }

    #[test]
    fn validates_raw_pairs() {
        assert_eq!(
            PlateInventory::try_from_pairs([(45.0, 2), (25.0, -1)]),
            Err(CalcError::NegativeCount(-1))
        );
        assert_eq!(
            PlateInventory::try_from_pairs([(0.0, 2)]),
            Err(CalcError::NonPositivePlate)
        );
        assert_eq!(
            PlateInventory::try_from_pairs([(45.0, 2), (45.0, 1)]),
            Err(CalcError::DuplicatePlate(Weight::from_whole(45)))
        );
    }

    #[test]
    fn iterates_heaviest_first() -> TestResult {
        let inventory = PlateInventory::try_from_pairs([(2.5, 2), (45.0, 1), (10.0, 0)])?;

        let all = inventory.iter().map(|(p, _)| p).collect::<Vec<_>>();
        assert_eq!(all, vec![plate(45.0), plate(10.0), plate(2.5)]);

        let available = inventory.available().collect::<Vec<_>>();
        assert_eq!(available, vec![(plate(45.0), 1), (plate(2.5), 2)]);
        Ok(())
    }

    #[test]
    fn aggregates_weights() -> TestResult {
        let loaded = PlateInventory::try_from_pairs([(45.0, 2), (5.0, 1), (2.5, 1)])?;

        assert_eq!(loaded.per_side_weight(), Weight::from_milli(97_500));
        assert_eq!(loaded.total_weight(Weight::from_whole(45)), Weight::from_whole(240));
        assert_eq!(
            PlateInventory::default().total_weight(Weight::from_whole(20)),
            Weight::from_whole(20)
        );
        Ok(())
    }

    #[test]
    fn missing_plate_counts_zero() {
        let inventory = Unit::Lb.default_plates();
        assert_eq!(inventory.count(plate(1.0)), 0);
        assert_eq!(inventory.count(plate(45.0)), 2);
    }

    #[test]
    fn conversion_drops_plates_that_round_to_nothing() -> TestResult {
        let inventory = PlateInventory::try_from_pairs([(45.0, 2), (0.001, 4)])?;
        let converted = inventory.converted(Unit::Lb, Unit::Kg);

        assert_eq!(converted.len(), 1);
        assert_eq!(converted.count(plate(20.412)), 2);
        Ok(())
    }

    #[test]
    fn conversion_merges_colliding_plates() -> TestResult {
        let inventory = PlateInventory::try_from_pairs([(1.0, 2), (1.001, 3)])?;
        let converted = inventory.converted(Unit::Lb, Unit::Kg);
        assert_eq!(converted.len(), 1);
        assert_eq!(converted.count(plate(0.454)), 5);
        Ok(())
    }
}
