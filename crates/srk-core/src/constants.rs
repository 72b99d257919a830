//! Physical constants shared by every component.

/// Universal gas constant [L·bar/(mol·K)].
///
/// Kept at the four significant figures the substance table and the
/// regression baselines were produced with.
pub const R: f64 = 0.08314;

/// Liters per cubic meter.
pub const L_PER_M3: f64 = 1_000.0;
