//! Unit-aware numeric input.
//!
//! Turns text such as `"300 K"`, `"26.85C"`, `"5 MPa"` or `"0.5 L/mol"` into a
//! value in the working units of the equation of state (K, bar, L/mol). A
//! bare number is taken to be in those units already.

use std::fmt;

use srk_core::constants::L_PER_M3;
use thiserror::Error;

/// Family of a numeric input, fixing its working unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Temperature,
    /// Absolute pressure.
    Pressure,
    MolarVolume,
    /// Plain number, `%` allowed.
    Dimensionless,
}

impl Quantity {
    /// Working unit label.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "K",
            Self::Pressure => "bar",
            Self::MolarVolume => "L/mol",
            Self::Dimensionless => "-",
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::MolarVolume => "molar volume",
            Self::Dimensionless => "dimensionless value",
        };
        f.write_str(label)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("cannot read a number from '{0}'")]
    NotANumber(String),

    #[error("unknown {quantity} unit '{unit}'")]
    UnknownUnit { unit: String, quantity: Quantity },

    /// Gauge/absolute ambiguity, e.g. plain "psi".
    #[error("ambiguous unit '{unit}': use '{instead}'")]
    AmbiguousUnit {
        unit: String,
        instead: &'static str,
    },

    #[error("{quantity} must be positive, got {value} {}", .quantity.unit())]
    NotPositive { value: f64, quantity: Quantity },
}

/// Affine map `value·scale + offset` into the working unit.
#[derive(Debug, Clone, Copy)]
struct Conversion {
    scale: f64,
    offset: f64,
}

impl Conversion {
    const fn scale(scale: f64) -> Self {
        Self { scale, offset: 0.0 }
    }

    fn apply(self, value: f64) -> f64 {
        value * self.scale + self.offset
    }
}

fn temperature_unit(unit: &str) -> Option<Conversion> {
    let conversion = match unit {
        "" | "k" | "kelvin" => Conversion::scale(1.0),
        "c" | "°c" | "degc" | "celsius" => Conversion {
            scale: 1.0,
            offset: 273.15,
        },
        "f" | "°f" | "degf" | "fahrenheit" => Conversion {
            scale: 5.0 / 9.0,
            offset: 459.67 * 5.0 / 9.0,
        },
        "r" | "°r" | "rankine" => Conversion::scale(5.0 / 9.0),
        _ => return None,
    };
    Some(conversion)
}

fn pressure_unit(unit: &str) -> Option<Conversion> {
    let scale = match unit {
        "" | "bar" | "bara" => 1.0,
        "mbar" => 1e-3,
        "pa" => 1e-5,
        "kpa" => 1e-2,
        "mpa" => 10.0,
        "atm" => 1.013_25,
        "psia" => 0.068_947_57,
        _ => return None,
    };
    Some(Conversion::scale(scale))
}

fn molar_volume_unit(unit: &str) -> Option<Conversion> {
    let scale = match unit {
        "" | "l/mol" | "dm3/mol" | "m3/kmol" => 1.0,
        "m3/mol" => L_PER_M3,
        "cm3/mol" | "ml/mol" => 1.0 / L_PER_M3,
        _ => return None,
    };
    Some(Conversion::scale(scale))
}

/// Parse `text` as a `quantity`, returning the value in its working unit.
///
/// Temperatures and pressures must come out strictly positive.
pub fn parse_quantity(text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let text = text.trim();

    if quantity == Quantity::Dimensionless {
        let (number, scale) = match text.strip_suffix('%') {
            Some(number) => (number.trim(), 0.01),
            None => (text, 1.0),
        };
        let value: f64 = number
            .parse()
            .map_err(|_| UnitError::NotANumber(text.to_string()))?;
        return Ok(value * scale);
    }

    let (value, unit) = split_number(text)?;
    let key = unit.to_ascii_lowercase().replace('^', "");

    if quantity == Quantity::Pressure && key == "psi" {
        return Err(UnitError::AmbiguousUnit {
            unit: unit.to_string(),
            instead: "psia",
        });
    }

    let conversion = match quantity {
        Quantity::Temperature => temperature_unit(&key),
        Quantity::Pressure => pressure_unit(&key),
        Quantity::MolarVolume => molar_volume_unit(&key),
        Quantity::Dimensionless => None,
    }
    .ok_or_else(|| UnitError::UnknownUnit {
        unit: unit.to_string(),
        quantity,
    })?;

    let converted = conversion.apply(value);
    if matches!(quantity, Quantity::Temperature | Quantity::Pressure) && converted <= 0.0 {
        return Err(UnitError::NotPositive {
            value: converted,
            quantity,
        });
    }
    Ok(converted)
}

/// Leading number and trailing unit, e.g. `"70F"` → `(70.0, "F")`.
fn split_number(text: &str) -> Result<(f64, &str), UnitError> {
    let end = text
        .char_indices()
        .find(|&(i, c)| !is_number_char(text, i, c))
        .map_or(text.len(), |(i, _)| i);
    let (number, unit) = text.split_at(end);
    let value = number
        .trim()
        .parse()
        .map_err(|_| UnitError::NotANumber(text.to_string()))?;
    Ok((value, unit.trim()))
}

/// Digits, sign, decimal point, and an exponent marker followed by a digit or sign.
fn is_number_char(text: &str, i: usize, c: char) -> bool {
    match c {
        '0'..='9' | '.' | '+' | '-' => true,
        'e' | 'E' => i > 0
            && text[i + 1..]
                .chars()
                .next()
                .is_some_and(|n| n.is_ascii_digit() || n == '-' || n == '+'),
        _ => false,
    }
}
