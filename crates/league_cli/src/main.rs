//! League Stats CLI
//!
//! Match results file → leaders, averages and standings

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "cli")]
use league_cli::{render, ImportConfig, ReportDocument};
#[cfg(feature = "cli")]
use std::path::PathBuf;
#[cfg(feature = "cli")]
use tracing::info;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "league-stats")]
#[command(about = "Compute league statistics from match results", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Args)]
struct InputArgs {
    /// Match results file (falls back to LEAGUE_CSV_PATH, then PremierLeague.csv)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Field delimiter
    #[arg(long, default_value_t = ';')]
    delimiter: char,

    /// Skip the first line as a header
    #[arg(long, default_value = "false")]
    has_headers: bool,

    /// Aggregate matches in parallel
    #[arg(long, default_value = "false")]
    parallel: bool,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Leaders, averages and standings
    Report {
        #[command(flatten)]
        input: InputArgs,

        /// Also write the report as JSON to this path
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// League table only
    Standings {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Average goals table only
    Averages {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Most goals, home goals, away goals and best goal ratio
    Leaders {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Report { input, json } => {
            let (config, report) = load_report(&input)?;
            print!("{}", render::full_report(&report));

            if let Some(json_path) = json {
                let document = ReportDocument::new(&config.path, report);
                league_cli::write_report(&json_path, &document)?;
                println!("\n📄 Report saved to: {}", json_path.display());
            }
        }

        Commands::Standings { input } => {
            let (_, report) = load_report(&input)?;
            print!("{}", render::caption("League table (by rank):"));
            print!("{}", render::standings_table(&report.standings));
        }

        Commands::Averages { input } => {
            let (_, report) = load_report(&input)?;
            print!(
                "{}",
                render::caption("Average team performance (by goals scored per match, descending):")
            );
            print!("{}", render::averages_table(&report.averages));
        }

        Commands::Leaders { input } => {
            let (_, report) = load_report(&input)?;
            print!("{}", render::leaders(&report));
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn init_tracing(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn load_report(input: &InputArgs) -> Result<(ImportConfig, league_core::LeagueReport)> {
    let delimiter = u8::try_from(input.delimiter).with_context(|| {
        format!("Delimiter must be a single-byte character: {:?}", input.delimiter)
    })?;
    let config = ImportConfig::resolve(input.csv.clone())
        .with_delimiter(delimiter)
        .with_headers(input.has_headers);

    let season = league_cli::import_file(&config)
        .with_context(|| format!("Failed to import matches from {}", config.path.display()))?;
    info!(matches = season.match_count(), teams = season.team_count(), "matches imported");

    let report = league_cli::analyze(&season, input.parallel)
        .context("Failed to compute league statistics")?;
    Ok((config, report))
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("league-stats CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
