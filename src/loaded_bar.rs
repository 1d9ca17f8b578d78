//! A barbell loaded by hand, a pair at a time.

use std::fmt::Display;

use crate::{
    bar::Bar,
    inventory::{per_side_weight, total_weight},
    plate::Plate,
    selection::PlateSelection,
    unit::Unit,
    weight::Weight,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadedBar {
    unit: Unit,
    bar: Bar,
    collar: Weight,
    plates: PlateSelection,
}

impl LoadedBar {
    /// An empty bar without collars.
    #[must_use]
    pub fn new(unit: Unit, bar: Bar) -> Self {
        LoadedBar {
            unit,
            bar,
            collar: Weight::ZERO,
            plates: PlateSelection::default(),
        }
    }

    #[must_use]
    pub fn with_collar(self, collar: Weight) -> Self {
        LoadedBar { collar, ..self }
    }

    #[must_use]
    pub fn with_plates(self, plates: PlateSelection) -> Self {
        LoadedBar { plates, ..self }
    }

    #[must_use]
    pub fn add_pair(mut self, plate: Plate) -> Self {
        self.plates.add_one(plate);
        self
    }

    /// Takes a pair of `plate` off. Removing a plate that is not loaded does nothing.
    #[must_use]
    pub fn remove_pair(mut self, plate: Plate) -> Self {
        self.plates.remove_one(plate);
        self
    }

    /// Strips every plate, keeping the bar and collars.
    #[must_use]
    pub fn cleared(mut self) -> Self {
        self.plates.clear();
        self
    }

    #[must_use]
    pub fn unit(&self) -> Unit {
        self.unit
    }

    #[must_use]
    pub fn bar(&self) -> Bar {
        self.bar
    }

    #[must_use]
    pub fn collar(&self) -> Weight {
        self.collar
    }

    #[must_use]
    pub fn plates(&self) -> &PlateSelection {
        &self.plates
    }

    #[must_use]
    pub fn per_side_weight(&self) -> Weight {
        per_side_weight(self.plates.iter())
    }

    #[must_use]
    pub fn total_weight(&self) -> Weight {
        total_weight(self.bar.weight() + self.collar, self.plates.iter())
    }
}

impl Display for LoadedBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: {} total, {} per side",
            self.bar,
            self.unit.format(self.total_weight()),
            self.unit.format(self.per_side_weight())
        )?;
        write!(f, "{}", self.plates)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::bar_kind::BarKind;

    fn mens_bar() -> LoadedBar {
        LoadedBar::new(Unit::Lb, Bar::standard(BarKind::Mens, Unit::Lb))
    }

    #[test]
    fn empty_bar_weighs_the_bar() {
        let bar = mens_bar();
        assert_eq!(bar.total_weight(), Weight::from_whole(45));
        assert_eq!(bar.per_side_weight(), Weight::ZERO);
        assert_eq!(bar.to_string(), "Men's bar (45): 45 lb total, 0 lb per side\nNo plates added.");
    }

    #[test]
    fn pairs_add_up_on_both_sides() -> TestResult {
        let forty_five = Plate::from_f64(45.0)?;
        let bar = mens_bar()
            .add_pair(forty_five)
            .add_pair(Plate::from_f64(2.5)?)
            .add_pair(forty_five);

        assert_eq!(bar.per_side_weight(), Weight::new(92.5)?);
        assert_eq!(bar.total_weight(), Weight::from_whole(230));
        assert_eq!(
            bar.to_string(),
            "Men's bar (45): 230 lb total, 92.5 lb per side\n45 x 2\n2.5 x 1"
        );
        Ok(())
    }

    #[test]
    fn removing_and_clearing() -> TestResult {
        let ten = Plate::from_f64(10.0)?;
        let bar = mens_bar().add_pair(ten).add_pair(ten).remove_pair(ten);
        assert_eq!(bar.plates().count(ten), 1);

        let bar = bar.remove_pair(Plate::from_f64(25.0)?);
        assert_eq!(bar.total_weight(), Weight::from_whole(65));

        let bar = bar.cleared();
        assert!(bar.plates().is_empty());
        assert_eq!(bar.total_weight(), Weight::from_whole(45));
        Ok(())
    }

    #[test]
    fn collars_count_towards_the_total() -> TestResult {
        let bar = LoadedBar::new(Unit::Kg, Bar::standard(BarKind::Womens, Unit::Kg))
            .with_collar(Weight::new(2.5)?)
            .add_pair(Plate::from_f64(20.0)?);

        assert_eq!(bar.total_weight(), Weight::new(57.5)?);
        assert_eq!(bar.per_side_weight(), Weight::from_whole(20));
        Ok(())
    }
}
