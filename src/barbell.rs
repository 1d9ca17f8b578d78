//! Barbell session state.
//!
//! [`BarbellState`] holds everything a caller edits between calculations.
//! Each edit consumes the state and hands back a new one; nothing is kept
//! inside the library between calls.

use std::fmt::Display;

use log::debug;

use crate::{
    bar::Bar,
    bar_kind::BarKind,
    calc_error::CalcError,
    inventory::{PlateInventory, total_weight},
    loaded_bar::LoadedBar,
    packer::{Preference, pack},
    plate::Plate,
    selection::{PackResult, PlateSelection},
    unit::{Unit, convert},
    weight::{Delta, Weight},
};

#[derive(Clone, Debug, PartialEq)]
pub struct BarbellState {
    unit: Unit,
    bar: Bar,
    collar: Weight,
    plates: PlateInventory,
    preference: Preference,
}

impl BarbellState {
    /// Men's bar, no collars and the default plate set for `unit`.
    #[must_use]
    pub fn new(unit: Unit) -> Self {
        BarbellState {
            unit,
            bar: Bar::standard(BarKind::Mens, unit),
            collar: Weight::ZERO,
            plates: unit.default_plates(),
            preference: Preference::Under,
        }
    }

    #[must_use]
    pub fn with_bar(self, bar: Bar) -> Self {
        BarbellState { bar, ..self }
    }

    /// Sets the combined weight of both collars.
    #[must_use]
    pub fn with_collar(self, collar: Weight) -> Self {
        BarbellState { collar, ..self }
    }

    #[must_use]
    pub fn with_plates(self, plates: PlateInventory) -> Self {
        BarbellState { plates, ..self }
    }

    #[must_use]
    pub fn with_preference(self, preference: Preference) -> Self {
        BarbellState { preference, ..self }
    }

    /// Sets the number of pairs of `plate`. A count of zero disables it.
    #[must_use]
    pub fn with_count(mut self, plate: Plate, count: usize) -> Self {
        self.plates.set_count(plate, count);
        self
    }

    #[must_use]
    pub fn reset_plates(self) -> Self {
        let plates = self.unit.default_plates();
        BarbellState { plates, ..self }
    }

    /// Switches units, converting the bar, collars and every plate.
    #[must_use]
    pub fn change_unit(self, unit: Unit) -> Self {
        if unit == self.unit {
            return self;
        }

        BarbellState {
            bar: Bar::new(convert(self.bar.weight(), self.unit, unit), self.bar.kind()),
            collar: convert(self.collar, self.unit, unit),
            plates: self.plates.converted(self.unit, unit),
            unit,
            preference: self.preference,
        }
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
    pub fn plates(&self) -> &PlateInventory {
        &self.plates
    }

    #[must_use]
    pub fn preference(&self) -> Preference {
        self.preference
    }

    /// Works out the plates needed to bring the whole barbell to `target`.
    ///
    /// # Errors
    /// If `target` is lighter than the bar, or than the bar with its collars.
    pub fn load(&self, target: Weight) -> Result<Loadout, CalcError> {
        self.load_on(self.bar, target)
    }

    /// Loads `target` on the standard men's and women's bars for the current
    /// unit, with this state's collars, plates and preference.
    #[must_use]
    pub fn load_on_standard_bars(&self, target: Weight) -> [(Bar, Result<Loadout, CalcError>); 2] {
        [BarKind::Mens, BarKind::Womens].map(|kind| {
            let bar = Bar::standard(kind, self.unit);
            (bar, self.load_on(bar, target))
        })
    }

    /// Puts hand-picked pairs on this state's bar and collars. The plates are
    /// not checked against the inventory.
    #[must_use]
    pub fn build(&self, plates: PlateSelection) -> LoadedBar {
        LoadedBar::new(self.unit, self.bar)
            .with_collar(self.collar)
            .with_plates(plates)
    }

    fn load_on(&self, bar: Bar, target: Weight) -> Result<Loadout, CalcError> {
        let bar_weight = bar.weight();
        if target < bar_weight {
            return Err(CalcError::TargetBelowBar {
                target,
                bar: bar_weight,
            });
        }

        let minimum = bar_weight + self.collar;
        let per_side = target
            .checked_sub(minimum)
            .ok_or(CalcError::TargetBelowCollars { target, minimum })?
            .half();

        debug!("Loading {target} {} on {bar} as {per_side} per side", self.unit);

        Ok(Loadout {
            unit: self.unit,
            bar,
            collar: self.collar,
            target,
            result: pack(per_side, &self.plates, self.preference),
        })
    }
}

impl Default for BarbellState {
    fn default() -> Self {
        BarbellState::new(Unit::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Exact,
    Under(Delta),
    Over(Delta),
}

impl Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadStatus::Exact => write!(f, "Exact match"),
            LoadStatus::Under(delta) => write!(f, "Under target by {}", delta.magnitude()),
            LoadStatus::Over(delta) => write!(f, "Over target by {}", delta.magnitude()),
        }
    }
}

/// A loaded barbell for one target weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Loadout {
    unit: Unit,
    bar: Bar,
    collar: Weight,
    target: Weight,
    result: PackResult,
}

impl Loadout {
    #[must_use]
    pub fn result(&self) -> &PackResult {
        &self.result
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
    pub fn target_total(&self) -> Weight {
        self.target
    }

    #[must_use]
    pub fn achieved_total(&self) -> Weight {
        total_weight(
            self.bar.weight() + self.collar,
            self.result.selection().iter(),
        )
    }

    #[must_use]
    pub fn status(&self) -> LoadStatus {
        let delta = Delta::between(self.achieved_total(), self.target);
        if delta.is_under() {
            LoadStatus::Under(delta)
        } else if delta.is_over() {
            LoadStatus::Over(delta)
        } else {
            LoadStatus::Exact
        }
    }
}

impl Display for Loadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{}: {} ({})",
            self.bar,
            self.unit.format(self.achieved_total()),
            self.status()
        )?;

        let selection = self.result.selection();
        write!(f, "{selection}")?;
        if !selection.is_empty() {
            write!(f, "\nBoth sides:\n{}", selection.both_sides_breakdown())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::plate_count::PlateCount;

    #[test]
    fn loads_225_with_default_plates() -> TestResult {
        let loadout = BarbellState::new(Unit::Lb).load(Weight::from_whole(225))?;

        assert_eq!(loadout.result().target(), Weight::from_whole(90));
        assert_eq!(loadout.achieved_total(), Weight::from_whole(225));
        assert_eq!(loadout.status(), LoadStatus::Exact);
        Ok(())
    }

    #[test]
    fn collars_come_off_the_plate_budget() -> TestResult {
        let state = BarbellState::new(Unit::Lb).with_collar(Unit::Lb.default_collar_weight());
        let loadout = state.load(Weight::from_whole(225))?;

        assert_eq!(loadout.result().target(), Weight::new(87.5)?);
        assert_eq!(loadout.achieved_total(), Weight::from_whole(225));
        Ok(())
    }

    #[test]
    fn rejects_target_below_bar() {
        let state = BarbellState::new(Unit::Kg);
        assert_eq!(
            state.load(Weight::from_whole(15)),
            Err(CalcError::TargetBelowBar {
                target: Weight::from_whole(15),
                bar: Weight::from_whole(20)
            })
        );
    }

    #[test]
    fn rejects_target_below_bar_and_collars() {
        let state = BarbellState::new(Unit::Kg).with_collar(Weight::from_whole(5));
        assert_eq!(
            state.load(Weight::from_whole(22)),
            Err(CalcError::TargetBelowCollars {
                target: Weight::from_whole(22),
                minimum: Weight::from_whole(25)
            })
        );
    }

    #[test]
    fn bar_weight_alone_needs_no_plates() -> TestResult {
        let loadout = BarbellState::new(Unit::Lb).load(Weight::from_whole(45))?;
        assert!(loadout.result().selection().is_empty());
        assert_eq!(loadout.status(), LoadStatus::Exact);
        Ok(())
    }

    #[test]
    fn reports_shortfall_on_the_total() -> TestResult {
        let loadout = BarbellState::new(Unit::Lb).load(Weight::from_whole(1000))?;

        assert_eq!(loadout.achieved_total(), Weight::from_whole(595));
        assert_eq!(
            loadout.status(),
            LoadStatus::Under(Delta::between(Weight::from_whole(595), Weight::from_whole(1000)))
        );
        assert_eq!(loadout.status().to_string(), "Under target by 405");
        Ok(())
    }

    #[test]
    fn prefers_over_when_asked() -> TestResult {
        let state = BarbellState::new(Unit::Lb).with_preference(Preference::Over);
        let loadout = state.load(Weight::from_whole(139))?;

        assert_eq!(loadout.result().target(), Weight::from_whole(47));
        assert_eq!(loadout.achieved_total(), Weight::from_whole(140));
        assert!(matches!(loadout.status(), LoadStatus::Over(_)));
        Ok(())
    }

    #[test]
    fn disabled_plates_are_skipped() -> TestResult {
        let state = BarbellState::new(Unit::Lb).with_count(Plate::from_f64(45.0)?, 0);
        let loadout = state.load(Weight::from_whole(135))?;

        assert_eq!(loadout.result().selection().count(Plate::from_f64(45.0)?), 0);
        assert_eq!(loadout.achieved_total(), Weight::from_whole(135));
        Ok(())
    }

    #[test]
    fn changing_unit_converts_everything() -> TestResult {
        let state = BarbellState::new(Unit::Lb)
            .with_collar(Weight::from_whole(5))
            .change_unit(Unit::Kg);

        assert_eq!(state.unit(), Unit::Kg);
        assert_eq!(state.bar().weight(), Weight::new(20.412)?);
        assert_eq!(state.collar(), Weight::new(2.268)?);
        assert_eq!(state.plates().count(Plate::from_f64(20.412)?), 2);
        Ok(())
    }

    #[test]
    fn renders_both_sides_totals() -> TestResult {
        let loadout = BarbellState::new(Unit::Lb).load(Weight::from_whole(235))?;
        assert_eq!(
            loadout.to_string(),
            "Men's bar (45): 235 lb (Exact match)\n45 x 2\n5 x 1\nBoth sides:\n45's x 4\n5's x 2"
        );

        let bare = BarbellState::new(Unit::Lb).load(Weight::from_whole(45))?;
        assert_eq!(bare.to_string(), "Men's bar (45): 45 lb (Exact match)\nNo plates added.");
        Ok(())
    }

    #[test]
    fn loads_on_both_standard_bars() -> TestResult {
        let [(mens, on_mens), (womens, on_womens)] =
            BarbellState::new(Unit::Lb).load_on_standard_bars(Weight::from_whole(40));

        assert_eq!(mens, Bar::standard(BarKind::Mens, Unit::Lb));
        assert_eq!(
            on_mens,
            Err(CalcError::TargetBelowBar {
                target: Weight::from_whole(40),
                bar: Weight::from_whole(45)
            })
        );

        assert_eq!(womens.weight(), Weight::from_whole(35));
        let on_womens = on_womens?;
        assert_eq!(on_womens.bar(), womens);
        assert_eq!(on_womens.result().target(), Weight::new(2.5)?);
        assert_eq!(on_womens.status(), LoadStatus::Exact);
        Ok(())
    }

    #[test]
    fn builds_from_hand_picked_pairs() -> TestResult {
        let state = BarbellState::new(Unit::Lb).with_collar(Weight::from_whole(5));
        let pairs = [PlateCount::new(Plate::from_f64(45.0)?, 3)];
        let built = state.build(pairs.into_iter().collect());

        assert_eq!(built.bar(), state.bar());
        assert_eq!(built.per_side_weight(), Weight::from_whole(135));
        assert_eq!(built.total_weight(), Weight::from_whole(320));
        Ok(())
    }

    #[test]
    fn reset_restores_unit_defaults() -> TestResult {
        let state = BarbellState::new(Unit::Kg)
            .with_count(Plate::from_f64(25.0)?, 0)
            .reset_plates();

        assert_eq!(state.plates(), &Unit::Kg.default_plates());
        Ok(())
    }
}
