//! Interactive six-option menu.
//!
//! Reads one answer per line. End of input behaves like choosing "Exit".
//! Unknown substances, unparsable numbers and failed evaluations print a
//! message and return to the menu.

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use srk_eos::catalog;
use srk_eos::{CalculationInput, Quantity, SolverOptions, Substance, calculate_for, parse_quantity};
use tracing::debug;

use crate::error::CliResult;
use crate::output;

/// Outcome of one prompt: a value, or how the menu should proceed instead.
type Answer<T> = Result<T, ControlFlow<()>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Evaluation {
    Pressure,
    Volume,
    Compressibility,
}

pub struct Menu<R, W> {
    input: R,
    output: W,
    options: SolverOptions,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W, options: SolverOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn run(&mut self) -> CliResult<()> {
        writeln!(self.output, "SRK Equation of State Calculator")?;
        writeln!(self.output, "================================")?;
        writeln!(self.output)?;

        loop {
            self.write_options()?;
            let flow = match self.read_line()? {
                Some(choice) => self.dispatch(&choice)?,
                None => ControlFlow::Break(()),
            };
            writeln!(self.output)?;
            if flow.is_break() {
                break;
            }
        }

        writeln!(
            self.output,
            "Thank you for using the SRK Equation of State Calculator!"
        )?;
        self.output.flush()?;
        Ok(())
    }

    fn write_options(&mut self) -> CliResult<()> {
        writeln!(self.output, "Options:")?;
        writeln!(self.output, "1. List available chemicals")?;
        writeln!(self.output, "2. Select chemical and view properties")?;
        writeln!(self.output, "3. Calculate pressure (given T and V)")?;
        writeln!(self.output, "4. Calculate volume (given T and P)")?;
        writeln!(self.output, "5. Calculate compressibility factor (given T and P)")?;
        writeln!(self.output, "6. Exit")?;
        write!(self.output, "Enter option: ")?;
        Ok(())
    }

    fn dispatch(&mut self, choice: &str) -> CliResult<ControlFlow<()>> {
        debug!(choice, "menu selection");
        match choice.parse::<u8>() {
            Ok(1) => {
                output::write_names(&mut self.output, &catalog::names())?;
                Ok(ControlFlow::Continue(()))
            }
            Ok(2) => self.show(),
            Ok(3) => self.evaluate(Evaluation::Pressure),
            Ok(4) => self.evaluate(Evaluation::Volume),
            Ok(5) => self.evaluate(Evaluation::Compressibility),
            Ok(6) => Ok(ControlFlow::Break(())),
            _ => {
                writeln!(self.output, "Invalid option. Please try again.")?;
                Ok(ControlFlow::Continue(()))
            }
        }
    }

    fn show(&mut self) -> CliResult<ControlFlow<()>> {
        let substance = match self.ask_substance()? {
            Ok(substance) => substance,
            Err(flow) => return Ok(flow),
        };
        let entry = catalog::resolve(substance.name())?;
        output::write_substance(&mut self.output, &entry)?;
        Ok(ControlFlow::Continue(()))
    }

    fn evaluate(&mut self, evaluation: Evaluation) -> CliResult<ControlFlow<()>> {
        let substance = match self.ask_substance()? {
            Ok(substance) => substance,
            Err(flow) => return Ok(flow),
        };
        let t = match self.ask_quantity("Enter temperature (K): ", Quantity::Temperature)? {
            Ok(t) => t,
            Err(flow) => return Ok(flow),
        };
        let (label, quantity) = match evaluation {
            Evaluation::Pressure => ("Enter molar volume (L/mol): ", Quantity::MolarVolume),
            Evaluation::Volume | Evaluation::Compressibility => {
                ("Enter pressure (bar): ", Quantity::Pressure)
            }
        };
        let second = match self.ask_quantity(label, quantity)? {
            Ok(value) => value,
            Err(flow) => return Ok(flow),
        };

        let input = match evaluation {
            Evaluation::Pressure => CalculationInput::PressureFromVolume { t, v: second },
            Evaluation::Volume => CalculationInput::VolumeFromPressure { t, p: second },
            Evaluation::Compressibility => {
                CalculationInput::CompressibilityFromPressure { t, p: second }
            }
        };

        match calculate_for(substance, input, &self.options) {
            Ok(report) => output::write_result_line(&mut self.output, input, &report)?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn ask_substance(&mut self) -> CliResult<Answer<Substance>> {
        let Some(name) = self.prompt("Enter chemical name: ")? else {
            return Ok(Err(ControlFlow::Break(())));
        };
        match name.parse::<Substance>() {
            Ok(substance) => Ok(Ok(substance)),
            Err(_) => {
                writeln!(self.output, "Chemical not found in database.")?;
                Ok(Err(ControlFlow::Continue(())))
            }
        }
    }

    fn ask_quantity(&mut self, label: &str, quantity: Quantity) -> CliResult<Answer<f64>> {
        let Some(text) = self.prompt(label)? else {
            return Ok(Err(ControlFlow::Break(())));
        };
        match parse_quantity(&text, quantity) {
            Ok(value) => Ok(Ok(value)),
            Err(err) => {
                writeln!(self.output, "Invalid input: {err}")?;
                Ok(Err(ControlFlow::Continue(())))
            }
        }
    }

    fn prompt(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.read_line()
    }

    /// Next trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> CliResult<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn session(script: &str) -> String {
        let mut out = Vec::new();
        Menu::new(Cursor::new(script), &mut out, SolverOptions::default())
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn exit_immediately() {
        let out = session("6\n");
        assert!(out.starts_with("SRK Equation of State Calculator\n"));
        assert!(out.ends_with("Thank you for using the SRK Equation of State Calculator!\n"));
        assert_eq!(out.matches("Enter option: ").count(), 1);
    }

    #[test]
    fn end_of_input_exits() {
        let out = session("");
        assert!(out.contains("Thank you for using"));
    }

    #[test]
    fn invalid_option_reprompts() {
        let out = session("9\nabc\n6\n");
        assert_eq!(out.matches("Invalid option. Please try again.").count(), 2);
        assert_eq!(out.matches("Enter option: ").count(), 3);
    }

    #[test]
    fn list_chemicals() {
        let out = session("1\n6\n");
        assert!(out.contains("Available chemicals:"));
        assert!(out.contains("Water, Ammonia, HydrogenSulfide, Methanol, Ethanol"));
    }

    #[test]
    fn show_substance_properties() {
        let out = session("2\nNitrogen\n6\n");
        assert!(out.contains("Selected: Nitrogen"));
        assert!(out.contains("Critical Temperature: "));
        assert!(out.contains("Acentric factor: "));
    }

    #[test]
    fn unknown_substance_returns_to_menu() {
        let out = session("4\nKryptonite\n6\n");
        assert!(out.contains("Chemical not found in database."));
        assert!(!out.contains("Enter temperature (K): "));
        assert_eq!(out.matches("Enter option: ").count(), 2);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let out = session("2\nmethane\n6\n");
        assert!(out.contains("Chemical not found in database."));
    }

    #[test]
    fn volume_calculation() {
        let out = session("4\nMethane\n300\n50\n6\n");
        assert!(out.contains("Enter pressure (bar): "));
        assert!(out.contains("Calculated molar volume: 0.88"), "{out}");
    }

    #[test]
    fn compressibility_calculation_accepts_units() {
        let out = session("5\nMethane\n26.85 C\n5 MPa\n6\n");
        assert!(out.contains("Calculated compressibility factor (Z): 1.77"), "{out}");
    }

    #[test]
    fn pressure_calculation() {
        let out = session("3\nNitrogen\n300\n1.0\n6\n");
        assert!(out.contains("Enter molar volume (L/mol): "));
        assert!(out.contains("Calculated pressure: "));
    }

    #[test]
    fn failed_evaluation_is_reported_and_loop_continues() {
        let out = session("5\nMethane\n300\n1e-4\n6\n");
        assert!(out.contains("Error: "), "{out}");
        assert_eq!(out.matches("Enter option: ").count(), 2);
    }

    #[test]
    fn bad_number_is_reported() {
        let out = session("3\nMethane\nwarm\n6\n");
        assert!(out.contains("Invalid input: "));
        assert!(out.contains("Thank you for using"));
    }
}
