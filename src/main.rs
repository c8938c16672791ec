use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use daily_macros_rs::cli::Cli;
use daily_macros_rs::error::Result;
use daily_macros_rs::interface::{render_report, write_json, write_report, DayReport};
use daily_macros_rs::menu::load_menu;
use daily_macros_rs::nutrition::NutritionTable;
use daily_macros_rs::planner::{check_menu, compute_day};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let table = NutritionTable::from_path(&cli.nutrition)?;
    info!("Loaded {} foods from {}", table.len(), cli.nutrition.display());

    let menu = load_menu(&cli.menu)?;
    check_menu(&table, &menu)?;

    let reports = cli
        .day_list()
        .into_iter()
        .map(|day| -> Result<DayReport> {
            let totals = compute_day(&table, &menu, &day)?;
            Ok(DayReport::new(day, &totals))
        })
        .collect::<Result<Vec<_>>>()?;

    let report = render_report(&reports);
    info!("\n{}", report);
    write_report(&cli.output, &report)?;

    if let Some(path) = &cli.json {
        write_json(path, &reports)?;
        info!("Wrote JSON totals to {}", path.display());
    }

    Ok(())
}
