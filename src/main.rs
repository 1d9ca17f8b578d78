use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, warn};
use plates_rs::{
    bar::Bar,
    bar_kind::BarKind,
    barbell::{BarbellState, Loadout},
    calc_error::CalcError,
    config::GymConfig,
    inventory::PlateInventory,
    loaded_bar::LoadedBar,
    packer::{Preference, pack},
    percentage::{PercentageRow, Rounding, percentage_table},
    plate_count::PlateCount,
    selection::{PackResult, PlateSelection},
    unit::{Unit, convert},
    weight::Weight,
};
use tabled::{builder::Builder, settings::Style};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file describing the bar, collars and plates.
    #[arg(short, long, value_name = "FILE", global = true)]
    config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "warn",
        global = true
    )]
    log_level: LevelFilter,
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct PlateArgs {
    /// Available plates as <weight>:<pairs>, e.g. 45:2,25:2
    #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(PlateCount))]
    plates: Vec<PlateCount>,
    #[arg(short, long)]
    unit: Option<Unit>,
    /// Settle under or over the target when it cannot be hit exactly.
    #[arg(long)]
    prefer: Option<Preference>,
}

#[derive(clap::Args)]
struct BarArgs {
    /// m for a men's bar, w for a women's bar.
    #[arg(short, long)]
    bar: Option<BarKind>,
    #[arg(long)]
    bar_weight: Option<Weight>,
    /// Weight of both collars together.
    #[arg(long)]
    collar: Option<Weight>,
}

#[derive(Subcommand)]
enum Command {
    /// Choose plates for a per-side target.
    Pack {
        target: Weight,
        #[command(flatten)]
        plates: PlateArgs,
    },
    /// Load a barbell to a total weight.
    Load {
        total: Weight,
        #[command(flatten)]
        bar: BarArgs,
        #[command(flatten)]
        plates: PlateArgs,
    },
    /// Add up plates loaded by hand, given as <weight>:<pairs>. No pairs means an empty bar.
    Build {
        #[arg(value_delimiter = ',', value_parser = clap::value_parser!(PlateCount))]
        pairs: Vec<PlateCount>,
        #[command(flatten)]
        bar: BarArgs,
        #[arg(short, long)]
        unit: Option<Unit>,
    },
    /// Print a percentage table of a base weight.
    Percent {
        base: Weight,
        #[arg(short, long)]
        step: Option<u32>,
        #[arg(short, long)]
        rounding: Option<Rounding>,
        #[arg(short, long)]
        increment: Option<Weight>,
        /// Also show how to load each row on a men's and a women's bar.
        #[arg(long)]
        loads: bool,
        #[command(flatten)]
        plates: PlateArgs,
    },
    /// Convert a weight between pounds and kilograms.
    Convert {
        weight: Weight,
        #[arg(long)]
        from: Unit,
        #[arg(long)]
        to: Unit,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    let config = load_config(args.config_file.as_deref())?;
    debug!("Using {config:?}");

    match args.command {
        Command::Pack { target, plates } => {
            let state = barbell(&config, &plates)?;
            let result = pack(target, state.plates(), state.preference());
            print_pack(&result, state.unit());
        }
        Command::Load { total, bar, plates } => {
            let state = with_bar_args(barbell(&config, &plates)?, &bar);
            let loadout = state.load(total)?;
            print_loadout(&loadout);
        }
        Command::Build { pairs, bar, unit } => {
            let state = config.barbell().context("invalid plates in config file")?;
            let state = with_bar_args(with_unit(state, &config, unit), &bar);
            let built = state.build(pairs.into_iter().collect());
            print_built(&built);
        }
        Command::Percent {
            base,
            step,
            rounding,
            increment,
            loads,
            plates,
        } => {
            let state = barbell(&config, &plates)?;
            let rows = percentage_table(
                base,
                step.unwrap_or(config.percent_step),
                rounding.unwrap_or(config.rounding),
                increment.unwrap_or(config.increment),
            )?;
            if loads {
                print_percentage_loads(&rows, &state)?;
            } else {
                print_percentages(&rows, state.unit());
            }
        }
        Command::Convert { weight, from, to } => {
            println!("{} = {}", from.format(weight), to.format(convert(weight, from, to)));
        }
    }

    Ok(())
}

/// Reads the JSON config, or warns and falls back to defaults when none is given.
fn load_config(path: Option<&Path>) -> anyhow::Result<GymConfig> {
    let Some(path) = path else {
        warn!("No config file provided, use --config-file to describe your gym");
        return Ok(GymConfig::default());
    };

    let file = File::open(path)
        .with_context(|| format!("could not open config file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")
}

/// Builds the session state from the config file, then applies command-line overrides.
fn barbell(config: &GymConfig, args: &PlateArgs) -> anyhow::Result<BarbellState> {
    let state = config.barbell().context("invalid plates in config file")?;
    let mut state = with_unit(state, config, args.unit);

    if !args.plates.is_empty() {
        let plates = PlateInventory::try_from_counts(args.plates.iter().copied())?;
        state = state.with_plates(plates);
    }

    if let Some(preference) = args.prefer {
        state = state.with_preference(preference);
    }

    Ok(state)
}

/// Switches to `unit`, falling back to its standard bar and plates where the
/// config file did not name them.
fn with_unit(mut state: BarbellState, config: &GymConfig, unit: Option<Unit>) -> BarbellState {
    let Some(unit) = unit.filter(|unit| *unit != state.unit()) else {
        return state;
    };

    state = state.change_unit(unit);
    if config.plates.is_none() {
        state = state.reset_plates();
    }
    if config.bar_weight.is_none() {
        state = state.with_bar(Bar::standard(config.bar_kind, unit));
    }
    state
}

fn with_bar_args(mut state: BarbellState, args: &BarArgs) -> BarbellState {
    if let Some(kind) = args.bar {
        let unit = state.unit();
        state = state.with_bar(Bar::standard(kind, unit));
    }
    if let Some(weight) = args.bar_weight {
        let kind = state.bar().kind();
        state = state.with_bar(Bar::new(weight, kind));
    }
    if let Some(collar) = args.collar {
        state = state.with_collar(collar);
    }
    state
}

fn print_selection(selection: &PlateSelection, unit: Unit) {
    if selection.is_empty() {
        println!("{selection}");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Plate", "Per side", "Both sides"]);
    for (entry, both) in selection.entries().iter().zip(selection.both_sides()) {
        builder.push_record([
            unit.format(entry.plate.weight()),
            entry.count.to_string(),
            both.count.to_string(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    println!("{table}");
}

fn print_pack(result: &PackResult, unit: Unit) {
    print_selection(result.selection(), unit);
    println!("Target per side:   {}", unit.format(result.target()));
    println!(
        "Achieved per side: {} ({})",
        unit.format(result.achieved()),
        result.delta()
    );
    if result.delta().is_under() {
        println!("Cannot reach the target with the available plates.");
    }
}

fn print_loadout(loadout: &Loadout) {
    let unit = loadout.unit();

    print_selection(loadout.result().selection(), unit);
    println!("Bar:      {}", loadout.bar());
    if !loadout.collar().is_zero() {
        println!("Collars:  {}", unit.format(loadout.collar()));
    }
    println!("Target:   {}", unit.format(loadout.target_total()));
    println!("Achieved: {}", unit.format(loadout.achieved_total()));
    println!("{}", loadout.status());
}

fn print_built(built: &LoadedBar) {
    let unit = built.unit();

    print_selection(built.plates(), unit);
    println!("Bar:      {}", built.bar());
    if !built.collar().is_zero() {
        println!("Collars:  {}", unit.format(built.collar()));
    }
    println!("Per side: {}", unit.format(built.per_side_weight()));
    println!("Total:    {}", unit.format(built.total_weight()));
}

fn print_percentage_loads(rows: &[PercentageRow], state: &BarbellState) -> anyhow::Result<()> {
    let unit = state.unit();
    let mut builder = Builder::default();
    let bars = [BarKind::Mens, BarKind::Womens].map(|kind| Bar::standard(kind, unit).to_string());
    let header = ["Percent", "Exact", "Rounded"].map(str::to_string);
    builder.push_record(header.into_iter().chain(bars));

    for row in rows {
        let mut record = vec![
            format!("{}%", row.percent),
            format_exact(row.exact, unit),
            unit.format(row.rounded),
        ];
        for (_, loadout) in state.load_on_standard_bars(row.rounded) {
            record.push(match loadout {
                Ok(loadout) => format!(
                    "{}\nTotal: {}",
                    loadout.result().selection().both_sides_breakdown(),
                    unit.format(loadout.achieved_total())
                ),
                Err(CalcError::TargetBelowBar { .. } | CalcError::TargetBelowCollars { .. }) => {
                    "Target below bar".to_string()
                }
                Err(e) => return Err(e.into()),
            });
        }
        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    println!("{table}");
    Ok(())
}

fn print_percentages(rows: &[PercentageRow], unit: Unit) {
    let mut builder = Builder::default();
    builder.push_record(["Percent", "Exact", "Rounded"]);
    for row in rows {
        builder.push_record([
            format!("{}%", row.percent),
            format_exact(row.exact, unit),
            unit.format(row.rounded),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    println!("{table}");
}

/// Exact percentages, to two decimals.
fn format_exact(exact: f64, unit: Unit) -> String {
    format!("{exact:.2} {unit}")
}
