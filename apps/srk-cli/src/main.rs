use clap::{Parser, Subcommand};
use srk_cli::output;
use srk_cli::{CliResult, Menu};
use srk_eos::{
    CalculationInput, CubicForm, Quantity, ROOT_THRESHOLD, RootSelection, SolverOptions, SrkModel,
    SweepDefinition, SweepType, UnitError, calculate, catalog, isobar, isotherm, parse_quantity,
    search,
};
use std::io::{self, Write};
use tracing::Level;

#[derive(Parser)]
#[command(name = "srk-cli")]
#[command(about = "SRK equation of state calculator for pure substances", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Cubic coefficient form (observed, textbook)
    #[arg(long, global = true, default_value = "observed")]
    form: CubicForm,

    /// Root chosen when the cubic has several admissible roots (largest, smallest)
    #[arg(long, global = true, default_value = "largest")]
    select: RootSelection,

    /// Roots at or below this value are discarded
    #[arg(long, global = true, default_value_t = ROOT_THRESHOLD)]
    threshold: f64,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// List the built-in substances
    List {
        /// Case-insensitive filter on name or formula
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Show critical constants of one substance
    Show {
        /// Substance name (case-sensitive, e.g. Methane)
        name: String,
    },
    /// Pressure from temperature and molar volume
    Pressure {
        name: String,
        /// Temperature (default K; C, F, R accepted)
        #[arg(long, value_parser = temperature)]
        t: f64,
        /// Molar volume (default L/mol; m3/mol, cm3/mol accepted)
        #[arg(long, value_parser = molar_volume)]
        v: f64,
    },
    /// Molar volume from temperature and pressure
    Volume {
        name: String,
        #[arg(long, value_parser = temperature)]
        t: f64,
        /// Pressure (default bar; Pa, kPa, MPa, atm, psia accepted)
        #[arg(long, value_parser = pressure)]
        p: f64,
    },
    /// Compressibility factor from temperature and pressure
    Z {
        name: String,
        #[arg(long, value_parser = temperature)]
        t: f64,
        #[arg(long, value_parser = pressure)]
        p: f64,
    },
    /// Evaluate Z and V along an isotherm or isobar
    Sweep {
        name: String,
        #[command(subcommand)]
        kind: SweepCommands,
    },
    /// Interactive menu
    Menu,
}

#[derive(Subcommand)]
enum SweepCommands {
    /// Sweep pressure at fixed temperature
    Isotherm {
        #[arg(long, value_parser = temperature)]
        t: f64,
        /// First pressure
        #[arg(long)]
        from: String,
        /// Last pressure
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 10)]
        points: usize,
        /// Logarithmic spacing
        #[arg(long)]
        log: bool,
    },
    /// Sweep temperature at fixed pressure
    Isobar {
        #[arg(long, value_parser = pressure)]
        p: f64,
        /// First temperature
        #[arg(long)]
        from: String,
        /// Last temperature
        #[arg(long)]
        to: String,
        #[arg(long, default_value_t = 10)]
        points: usize,
        #[arg(long)]
        log: bool,
    },
}

fn temperature(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::Temperature)
}

fn pressure(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::Pressure)
}

fn molar_volume(s: &str) -> Result<f64, UnitError> {
    parse_quantity(s, Quantity::MolarVolume)
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = SolverOptions::default()
        .with_form(cli.form)
        .with_selection(cli.select)
        .with_root_threshold(cli.threshold)?;
    let json = cli.json;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List { filter } => cmd_list(&mut out, filter.as_deref(), json),
        Commands::Show { name } => cmd_show(&mut out, &name, json),
        Commands::Pressure { name, t, v } => cmd_calculate(
            &mut out,
            &name,
            CalculationInput::PressureFromVolume { t, v },
            &options,
            json,
        ),
        Commands::Volume { name, t, p } => cmd_calculate(
            &mut out,
            &name,
            CalculationInput::VolumeFromPressure { t, p },
            &options,
            json,
        ),
        Commands::Z { name, t, p } => cmd_calculate(
            &mut out,
            &name,
            CalculationInput::CompressibilityFromPressure { t, p },
            &options,
            json,
        ),
        Commands::Sweep { name, kind } => cmd_sweep(&mut out, &name, kind, options, json),
        Commands::Menu => {
            let stdin = io::stdin();
            Menu::new(stdin.lock(), out, options).run()
        }
    }
}

fn cmd_list<W: Write>(out: &mut W, filter: Option<&str>, json: bool) -> CliResult<()> {
    let entries = match filter {
        Some(query) => search(query),
        None => catalog(),
    };
    if json {
        output::write_json(out, &entries)
    } else {
        output::write_catalog(out, &entries)
    }
}

fn cmd_show<W: Write>(out: &mut W, name: &str, json: bool) -> CliResult<()> {
    let entry = srk_eos::catalog::resolve(name)?;
    if json {
        output::write_json(out, &entry)
    } else {
        output::write_substance(out, &entry)
    }
}

fn cmd_calculate<W: Write>(
    out: &mut W,
    name: &str,
    input: CalculationInput,
    options: &SolverOptions,
    json: bool,
) -> CliResult<()> {
    let report = calculate(name, input, options)?;
    if json {
        output::write_json(out, &report)
    } else {
        output::write_report(out, input, &report)
    }
}

fn cmd_sweep<W: Write>(
    out: &mut W,
    name: &str,
    kind: SweepCommands,
    options: SolverOptions,
    json: bool,
) -> CliResult<()> {
    let model = SrkModel::for_substance(name)?.with_options(options);
    let spacing = |log: bool| {
        if log {
            SweepType::Logarithmic
        } else {
            SweepType::Linear
        }
    };

    let (definition, result) = match kind {
        SweepCommands::Isotherm {
            t,
            from,
            to,
            points,
            log,
        } => {
            let def =
                SweepDefinition::from_text(&from, &to, Quantity::Pressure, points, spacing(log))?;
            let result = isotherm(&model, t, &def)?;
            (def, result)
        }
        SweepCommands::Isobar {
            p,
            from,
            to,
            points,
            log,
        } => {
            let def = SweepDefinition::from_text(
                &from,
                &to,
                Quantity::Temperature,
                points,
                spacing(log),
            )?;
            let result = isobar(&model, p, &def)?;
            (def, result)
        }
    };

    if json {
        output::write_json(out, &result)
    } else {
        output::write_sweep(out, &definition, &result)
    }
}
