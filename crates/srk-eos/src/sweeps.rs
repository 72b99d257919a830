//! Isotherms and isobars.
//!
//! A sweep evaluates the inversion at every point of a generated range.
//! Individual failures (no physical root, domain errors) are recorded as
//! `None` and counted; the sweep itself only fails when no point succeeds.

use std::fmt;

use srk_core::units::{bar, k};
use thiserror::Error;
use tracing::debug;

use crate::model::SrkModel;
use crate::units::{Quantity, parse_quantity};

/// Type of sweep progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SweepType {
    /// Uniformly spaced points
    #[default]
    Linear,
    /// Logarithmically spaced points
    Logarithmic,
}

impl fmt::Display for SweepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "Linear"),
            Self::Logarithmic => write!(f, "Logarithmic"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("invalid sweep: {0}")]
    InvalidConfiguration(String),
    #[error("every one of the {points} sweep points failed")]
    AllPointsFailed { points: usize },
}

/// Range of one swept quantity, in canonical units (K or bar).
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    pub quantity: Quantity,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
    pub sweep_type: SweepType,
}

impl SweepDefinition {
    pub fn new(
        quantity: Quantity,
        start: f64,
        end: f64,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        if num_points < 2 {
            return Err(SweepError::InvalidConfiguration(
                "sweep must have at least 2 points".to_string(),
            ));
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::InvalidConfiguration(
                "sweep bounds must be finite".to_string(),
            ));
        }
        if (start - end).abs() < 1e-12 {
            return Err(SweepError::InvalidConfiguration(
                "start and end values must be different".to_string(),
            ));
        }
        if sweep_type == SweepType::Logarithmic && (start <= 0.0 || end <= 0.0) {
            return Err(SweepError::InvalidConfiguration(
                "logarithmic sweep bounds must be positive".to_string(),
            ));
        }

        Ok(Self {
            quantity,
            start,
            end,
            num_points,
            sweep_type,
        })
    }

    /// Create a sweep from user text such as `"300K"` and `"80C"`.
    pub fn from_text(
        start: &str,
        end: &str,
        quantity: Quantity,
        num_points: usize,
        sweep_type: SweepType,
    ) -> Result<Self, SweepError> {
        let start = parse_quantity(start, quantity)
            .map_err(|e| SweepError::InvalidConfiguration(format!("start value: {e}")))?;
        let end = parse_quantity(end, quantity)
            .map_err(|e| SweepError::InvalidConfiguration(format!("end value: {e}")))?;
        Self::new(quantity, start, end, num_points, sweep_type)
    }

    /// All points of the sweep; the last point is exactly `end`.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        if n <= 1 {
            return vec![self.start];
        }

        let mut points: Vec<f64> = match self.sweep_type {
            SweepType::Linear => {
                let delta = (self.end - self.start) / (n - 1) as f64;
                (0..n).map(|i| self.start + i as f64 * delta).collect()
            }
            SweepType::Logarithmic => {
                let log_start = self.start.ln();
                let log_delta = (self.end.ln() - log_start) / (n - 1) as f64;
                (0..n)
                    .map(|i| (log_start + i as f64 * log_delta).exp())
                    .collect()
            }
        };
        if let Some(last) = points.last_mut() {
            *last = self.end;
        }
        points
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.quantity.unit();
        write!(
            f,
            "Sweep {} from {} {unit} to {} {unit} ({} points, {})",
            self.quantity, self.start, self.end, self.num_points, self.sweep_type
        )
    }
}

/// One successfully evaluated sweep point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepPoint {
    pub temperature_k: f64,
    pub pressure_bar: f64,
    pub z: f64,
    pub molar_volume_l_per_mol: f64,
    /// Number of admissible roots the cubic had at this point.
    pub root_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SweepResult {
    /// Swept values (bar for an isotherm, K for an isobar).
    pub independent_values: Vec<f64>,
    pub points: Vec<Option<SweepPoint>>,
    pub num_successful: usize,
    pub num_failed: usize,
}

impl SweepResult {
    pub fn successful(&self) -> impl Iterator<Item = &SweepPoint> {
        self.points.iter().flatten()
    }

    pub fn z_values(&self) -> Vec<f64> {
        self.successful().map(|p| p.z).collect()
    }
}

/// Z and V along pressure at fixed temperature `t` [K].
pub fn isotherm(
    model: &SrkModel,
    t: f64,
    pressures: &SweepDefinition,
) -> Result<SweepResult, SweepError> {
    if pressures.quantity != Quantity::Pressure {
        return Err(SweepError::InvalidConfiguration(
            "isotherm sweeps pressure".to_string(),
        ));
    }
    let values = pressures.generate_points();
    run(model, values, |p| (t, p))
}

/// Z and V along temperature at fixed pressure `p` [bar].
pub fn isobar(
    model: &SrkModel,
    p: f64,
    temperatures: &SweepDefinition,
) -> Result<SweepResult, SweepError> {
    if temperatures.quantity != Quantity::Temperature {
        return Err(SweepError::InvalidConfiguration(
            "isobar sweeps temperature".to_string(),
        ));
    }
    let values = temperatures.generate_points();
    run(model, values, |t| (t, p))
}

fn run(
    model: &SrkModel,
    values: Vec<f64>,
    state_at: impl Fn(f64) -> (f64, f64),
) -> Result<SweepResult, SweepError> {
    let mut points = Vec::with_capacity(values.len());
    let mut num_successful = 0;
    let mut num_failed = 0;

    for &value in &values {
        let (t, p) = state_at(value);
        match model.invert(k(t), bar(p)) {
            Ok(inv) => {
                points.push(Some(SweepPoint {
                    temperature_k: t,
                    pressure_bar: p,
                    z: inv.z,
                    molar_volume_l_per_mol: inv.molar_volume(),
                    root_count: inv.roots.len(),
                }));
                num_successful += 1;
            }
            Err(err) => {
                debug!(t, p, %err, "sweep point failed");
                points.push(None);
                num_failed += 1;
            }
        }
    }

    if num_successful == 0 {
        return Err(SweepError::AllPointsFailed {
            points: values.len(),
        });
    }

    Ok(SweepResult {
        independent_values: values,
        points,
        num_successful,
        num_failed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn methane() -> SrkModel {
        SrkModel::for_substance("Methane").unwrap()
    }

    #[test]
    fn linear_sweep_generation() {
        let sweep =
            SweepDefinition::new(Quantity::Temperature, 300.0, 400.0, 5, SweepType::Linear)
                .unwrap();
        let points = sweep.generate_points();
        assert_eq!(points.len(), 5);
        assert!((points[0] - 300.0).abs() < 1e-9);
        assert!((points[2] - 350.0).abs() < 1e-9);
        assert_eq!(points[4], 400.0);
    }

    #[test]
    fn logarithmic_sweep_generation() {
        let sweep =
            SweepDefinition::new(Quantity::Pressure, 1.0, 100.0, 3, SweepType::Logarithmic)
                .unwrap();
        let points = sweep.generate_points();
        assert!((points[0] - 1.0).abs() < 1e-12);
        assert!((points[1] - 10.0).abs() < 1e-9);
        assert_eq!(points[2], 100.0);
    }

    #[test]
    fn sweep_from_text_converts_units() {
        let sweep =
            SweepDefinition::from_text("1 MPa", "50", Quantity::Pressure, 4, SweepType::Linear)
                .unwrap();
        assert!((sweep.start - 10.0).abs() < 1e-12);
        assert_eq!(sweep.end, 50.0);
    }

    #[test]
    fn reject_invalid_definitions() {
        assert!(SweepDefinition::new(Quantity::Pressure, 1.0, 2.0, 1, SweepType::Linear).is_err());
        assert!(SweepDefinition::new(Quantity::Pressure, 5.0, 5.0, 3, SweepType::Linear).is_err());
        assert!(
            SweepDefinition::new(Quantity::Pressure, -1.0, 5.0, 3, SweepType::Logarithmic)
                .is_err()
        );
        assert!(matches!(
            SweepDefinition::from_text("1 psi", "5 bar", Quantity::Pressure, 3, SweepType::Linear),
            Err(SweepError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn degenerate_point_counts_do_not_panic() {
        for num_points in [0, 1] {
            let def = SweepDefinition {
                quantity: Quantity::Pressure,
                start: 10.0,
                end: 50.0,
                num_points,
                sweep_type: SweepType::Linear,
            };
            assert_eq!(def.generate_points(), vec![10.0]);

            let result = isotherm(&methane(), 300.0, &def).unwrap();
            assert_eq!(result.independent_values, vec![10.0]);
            assert_eq!(result.num_successful, 1);
        }

        let log = SweepDefinition {
            sweep_type: SweepType::Logarithmic,
            ..SweepDefinition::new(Quantity::Pressure, 1.0, 10.0, 2, SweepType::Linear).unwrap()
        };
        let single = SweepDefinition { num_points: 1, ..log };
        assert_eq!(single.generate_points(), vec![1.0]);
    }

    #[test]
    fn isotherm_evaluates_every_point() {
        let def = SweepDefinition::new(Quantity::Pressure, 10.0, 50.0, 5, SweepType::Linear)
            .unwrap();
        let result = isotherm(&methane(), 300.0, &def).unwrap();
        assert_eq!(result.num_successful, 5);
        assert_eq!(result.num_failed, 0);
        assert!(result.successful().all(|p| p.temperature_k == 300.0));
        assert_eq!(result.z_values().len(), 5);
    }

    #[test]
    fn isotherm_records_failures_without_aborting() {
        // The lowest pressures have no admissible root at 300 K.
        let def = SweepDefinition::new(Quantity::Pressure, 1e-4, 50.0, 4, SweepType::Logarithmic)
            .unwrap();
        let result = isotherm(&methane(), 300.0, &def).unwrap();
        assert!(result.num_failed >= 1);
        assert!(result.num_successful >= 1);
        assert_eq!(result.points[0], None);
        assert_eq!(result.num_failed + result.num_successful, 4);
    }

    #[test]
    fn isobar_checks_quantity() {
        let def = SweepDefinition::new(Quantity::Pressure, 10.0, 50.0, 3, SweepType::Linear)
            .unwrap();
        assert!(matches!(
            isobar(&methane(), 50.0, &def),
            Err(SweepError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn all_points_failing_is_an_error() {
        let def = SweepDefinition::new(Quantity::Pressure, 1e-5, 1e-4, 3, SweepType::Linear)
            .unwrap();
        assert_eq!(
            isotherm(&methane(), 300.0, &def),
            Err(SweepError::AllPointsFailed { points: 3 })
        );
    }

    #[test]
    fn isobar_sweeps_temperature() {
        let def = SweepDefinition::new(Quantity::Temperature, 250.0, 400.0, 4, SweepType::Linear)
            .unwrap();
        let result = isobar(&methane(), 50.0, &def).unwrap();
        assert_eq!(result.num_successful, 4);
        assert!(result.successful().all(|p| p.pressure_bar == 50.0));
    }
}
