//! Numerical knobs for root finding.

use crate::cubic::{CubicForm, ROOT_THRESHOLD};
use crate::error::{EosError, EosResult};
use crate::selection::RootSelection;

/// Options for the inversion engine.
///
/// `Default` reproduces the functional API exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolverOptions {
    pub form: CubicForm,
    /// Roots at or below this value are discarded.
    pub root_threshold: f64,
    pub selection: RootSelection,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            form: CubicForm::Observed,
            root_threshold: ROOT_THRESHOLD,
            selection: RootSelection::Largest,
        }
    }
}

impl SolverOptions {
    pub fn with_form(mut self, form: CubicForm) -> Self {
        self.form = form;
        self
    }

    pub fn with_selection(mut self, selection: RootSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_root_threshold(mut self, threshold: f64) -> EosResult<Self> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(EosError::InvalidArg {
                what: "root threshold must be finite and non-negative",
            });
        }
        self.root_threshold = threshold;
        Ok(self)
    }
}

impl std::str::FromStr for CubicForm {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "observed" => Ok(CubicForm::Observed),
            "textbook" | "standard" => Ok(CubicForm::Textbook),
            _ => Err("unknown cubic form"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = SolverOptions::default();
        assert_eq!(opts.form, CubicForm::Observed);
        assert_eq!(opts.root_threshold, 0.01);
        assert_eq!(opts.selection, RootSelection::Largest);
    }

    #[test]
    fn builder_methods() {
        let opts = SolverOptions::default()
            .with_form(CubicForm::Textbook)
            .with_selection(RootSelection::Smallest)
            .with_root_threshold(0.001)
            .unwrap();
        assert_eq!(opts.form, CubicForm::Textbook);
        assert_eq!(opts.selection, RootSelection::Smallest);
        assert_eq!(opts.root_threshold, 0.001);
    }

    #[test]
    fn reject_bad_threshold() {
        assert!(SolverOptions::default().with_root_threshold(-0.1).is_err());
        assert!(SolverOptions::default().with_root_threshold(f64::NAN).is_err());
    }

    #[test]
    fn parse_form() {
        assert_eq!("Textbook".parse::<CubicForm>(), Ok(CubicForm::Textbook));
        assert_eq!("observed".parse::<CubicForm>(), Ok(CubicForm::Observed));
        assert!("legacy".parse::<CubicForm>().is_err());
    }
}
