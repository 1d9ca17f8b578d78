use std::fmt::Display;

use crate::{bar_kind::BarKind, unit::Unit, weight::Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bar {
    pub weight: Weight,
    pub kind: BarKind,
}

impl Bar {
    #[must_use]
    pub fn new(weight: Weight, kind: BarKind) -> Self {
        Bar { weight, kind }
    }

    #[must_use]
    pub fn standard(kind: BarKind, unit: Unit) -> Self {
        Bar::new(kind.default_weight(unit), kind)
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn kind(&self) -> BarKind {
        self.kind
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bar ({})", self.kind, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_bars_per_unit() {
        assert_eq!(Bar::standard(BarKind::Mens, Unit::Lb).weight(), Weight::from_whole(45));
        assert_eq!(Bar::standard(BarKind::Womens, Unit::Lb).weight(), Weight::from_whole(35));
        assert_eq!(Bar::standard(BarKind::Mens, Unit::Kg).weight(), Weight::from_whole(20));
        assert_eq!(Bar::standard(BarKind::Womens, Unit::Kg).weight(), Weight::from_whole(15));
    }

    #[test]
    fn displays_kind_and_weight() {
        let bar = Bar::standard(BarKind::Womens, Unit::Lb);
        assert_eq!(bar.to_string(), "Women's bar (35)");
    }

    #[test]
    fn parses_kind() {
        assert_eq!("W".parse::<BarKind>(), Ok(BarKind::Womens));
        assert_eq!("mens".parse::<BarKind>(), Ok(BarKind::Mens));
        assert!("kids".parse::<BarKind>().is_err());
    }
}
