//! Phase-root selection.
//!
//! Picks one compressibility factor from a multi-root [`RootSet`]. The
//! default, [`RootSelection::Largest`], always prefers the vapor-like root.
//! It is a fixed heuristic, not a fugacity-based stability test, and can
//! pick the wrong phase in the liquid region.

use crate::cubic::RootSet;

/// A policy mapping a root set to the chosen Z.
///
/// Returns `None` only for an empty set.
pub trait RootSelector {
    fn select(&self, roots: &RootSet) -> Option<f64>;
}

impl<F> RootSelector for F
where
    F: Fn(&RootSet) -> Option<f64>,
{
    fn select(&self, roots: &RootSet) -> Option<f64> {
        self(roots)
    }
}

/// Built-in selection policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RootSelection {
    /// Largest root (vapor-like).
    #[default]
    Largest,
    /// Smallest root (liquid-like).
    Smallest,
}

impl RootSelector for RootSelection {
    fn select(&self, roots: &RootSet) -> Option<f64> {
        match self {
            RootSelection::Largest => roots.largest(),
            RootSelection::Smallest => roots.smallest(),
        }
    }
}

impl std::str::FromStr for RootSelection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "largest" | "vapor" => Ok(RootSelection::Largest),
            "smallest" | "liquid" => Ok(RootSelection::Smallest),
            _ => Err("unknown root selection"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubic::ROOT_THRESHOLD;

    #[test]
    fn single_root_is_selected_by_every_policy() {
        let roots = RootSet::filtered([0.9], ROOT_THRESHOLD);
        assert_eq!(RootSelection::Largest.select(&roots), Some(0.9));
        assert_eq!(RootSelection::Smallest.select(&roots), Some(0.9));
    }

    #[test]
    fn largest_prefers_vapor_root() {
        let roots = RootSet::filtered([0.23, 0.69, 0.077], ROOT_THRESHOLD);
        assert_eq!(RootSelection::Largest.select(&roots), Some(0.69));
        assert_eq!(RootSelection::Smallest.select(&roots), Some(0.077));
    }

    #[test]
    fn empty_set_selects_nothing() {
        let roots = RootSet::default();
        assert_eq!(RootSelection::default().select(&roots), None);
    }

    #[test]
    fn closures_are_selectors() {
        let middle = |roots: &RootSet| roots.as_slice().get(roots.len() / 2).copied();
        let roots = RootSet::filtered([0.1, 0.2, 0.3], ROOT_THRESHOLD);
        assert_eq!(middle.select(&roots), Some(0.2));
    }

    #[test]
    fn parse_selection() {
        assert_eq!("largest".parse::<RootSelection>(), Ok(RootSelection::Largest));
        assert_eq!("Liquid".parse::<RootSelection>(), Ok(RootSelection::Smallest));
        assert!("middle".parse::<RootSelection>().is_err());
    }
}
