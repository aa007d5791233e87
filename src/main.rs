use std::path::PathBuf;
use std::process::ExitCode;

use assign2groups::{
    assign, output_path_for, AssignConfig, AssignmentTable, Cost, TableWriter,
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "assign2groups")]
#[command(about = "Assign participants to groups.")]
#[command(version)]
struct Cli {
    #[arg(
        value_name = "CSV_FILE",
        help = "First row must contain group names and sizes (in the format '<group name>=<group size>', \
                e.g. 'Group A=5') from the second column on. Second row downwards should contain participant \
                names in the first column and their preferences (0 (highest) to 255 (lowest)) for each group. \
                Preferences do not need to be complete, nor start at 0, e.g. Name,Preferences: \
                'Name,1,,,1,3,9' is a valid input for a row."
    )]
    csv_file: PathBuf,
    #[arg(long, value_enum, default_value = "info", help = "Log level")]
    log_level: LogLevel,
    #[arg(
        long,
        value_name = "COST",
        default_value_t = assign2groups::DEFAULT_BAD_ASSIGNMENT_COST,
        help = "Cost of assigning a participant to a group they stated no preference for"
    )]
    bad_assignment_cost: Cost,
    #[arg(
        long,
        short,
        value_name = "PATH",
        help = "Where to write the result (default: '<input stem>_assigned.<ext>' next to the input)"
    )]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Critical => "error",
        }
    }
}

fn enable_tracing(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.directive())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> assign2groups::Result<()> {
    let table = AssignmentTable::from_path(&cli.csv_file)?;
    tracing::debug!(
        "read {} groups and {} participants from {}",
        table.groups.len(),
        table.participants.len(),
        cli.csv_file.display()
    );

    let config = AssignConfig::new().with_bad_assignment_cost(cli.bad_assignment_cost);
    let outcome = assign(&table.groups, &table.participants, &config)?;
    tracing::info!("average assigned preference: {:.2}", outcome.mean_cost);
    let unstated = outcome.unstated_count();
    if unstated > 0 {
        tracing::warn!(
            "{} participant(s) assigned to a group without a stated preference",
            unstated
        );
    }

    let out_path = cli
        .output
        .clone()
        .unwrap_or_else(|| output_path_for(&cli.csv_file));
    tracing::info!("write result to {}", out_path.display());
    let mut writer = TableWriter::create(&out_path)?;
    writer.write_outcome(&table.corner, &outcome)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    enable_tracing(cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
