//! Text and JSON rendering of results.

use std::io::Write;

use serde::Serialize;
use srk_eos::{CalculationInput, CatalogEntry, EosReport, SweepDefinition, SweepResult};

use crate::error::CliResult;

/// Substance names, five per line.
pub fn write_names<W: Write>(out: &mut W, names: &[&str]) -> CliResult<()> {
    writeln!(out, "Available chemicals:")?;
    writeln!(out, "-------------------")?;
    for row in names.chunks(5) {
        writeln!(out, "{}", row.join(", "))?;
    }
    Ok(())
}

pub fn write_catalog<W: Write>(out: &mut W, entries: &[CatalogEntry]) -> CliResult<()> {
    if entries.is_empty() {
        writeln!(out, "No matching substances")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<16} {:<8} {:>9} {:>9} {:>7}",
        "Name", "Formula", "Tc [K]", "Pc [bar]", "omega"
    )?;
    for entry in entries {
        let c = entry.constants;
        writeln!(
            out,
            "{:<16} {:<8} {:>9.2} {:>9.2} {:>7.3}",
            entry.name,
            entry.formula,
            c.tc(),
            c.pc(),
            c.omega()
        )?;
    }
    Ok(())
}

pub fn write_substance<W: Write>(out: &mut W, entry: &CatalogEntry) -> CliResult<()> {
    writeln!(out, "Selected: {}", entry.name)?;
    writeln!(out, "Critical Temperature: {} K", entry.constants.tc())?;
    writeln!(out, "Critical Pressure: {} bar", entry.constants.pc())?;
    writeln!(out, "Acentric factor: {}", entry.constants.omega())?;
    Ok(())
}

/// The headline result line for `input`.
pub fn write_result_line<W: Write>(
    out: &mut W,
    input: CalculationInput,
    report: &EosReport,
) -> CliResult<()> {
    match input {
        CalculationInput::PressureFromVolume { .. } => {
            writeln!(out, "Calculated pressure: {:.6} bar", report.pressure_bar)?
        }
        CalculationInput::VolumeFromPressure { .. } => writeln!(
            out,
            "Calculated molar volume: {:.6} L/mol",
            report.molar_volume_l_per_mol
        )?,
        CalculationInput::CompressibilityFromPressure { .. } => {
            writeln!(out, "Calculated compressibility factor (Z): {:.6}", report.z)?
        }
    }
    Ok(())
}

/// Result line followed by the state and intermediate values.
pub fn write_report<W: Write>(
    out: &mut W,
    input: CalculationInput,
    report: &EosReport,
) -> CliResult<()> {
    write_result_line(out, input, report)?;
    writeln!(out, "  substance   {}", report.substance)?;
    writeln!(out, "  T           {} K", report.temperature_k)?;
    writeln!(out, "  P           {:.6} bar", report.pressure_bar)?;
    writeln!(out, "  V           {:.6} L/mol", report.molar_volume_l_per_mol)?;
    writeln!(out, "  Z           {:.6}", report.z)?;
    writeln!(out, "  a           {:.6}", report.parameters.a)?;
    writeln!(out, "  b           {:.6}", report.parameters.b)?;
    if report.roots.len() > 1 {
        let roots: Vec<String> = report.roots.iter().map(|z| format!("{z:.6}")).collect();
        writeln!(out, "  roots       {}", roots.join(", "))?;
    }
    Ok(())
}

pub fn write_sweep<W: Write>(
    out: &mut W,
    definition: &SweepDefinition,
    result: &SweepResult,
) -> CliResult<()> {
    writeln!(out, "{definition}")?;
    writeln!(
        out,
        "{:>12} {:>12} {:>12} {:>14} {:>6}",
        "T [K]", "P [bar]", "Z", "V [L/mol]", "roots"
    )?;
    for (value, point) in result.independent_values.iter().zip(&result.points) {
        match point {
            Some(p) => writeln!(
                out,
                "{:>12.4} {:>12.4} {:>12.6} {:>14.6} {:>6}",
                p.temperature_k, p.pressure_bar, p.z, p.molar_volume_l_per_mol, p.root_count
            )?,
            None => writeln!(out, "{:>12} failed at {value}", "")?,
        }
    }
    writeln!(
        out,
        "{} succeeded, {} failed",
        result.num_successful, result.num_failed
    )?;
    Ok(())
}

pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
