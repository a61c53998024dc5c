use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use bikeshare_explorer::{
    io,
    prompt::{parse_city, parse_day, parse_month},
    session::run_report,
    visualization::format_trip_page,
    Column, ExplorerConfig, FilterSelection, Session,
};

#[derive(Parser)]
#[command(
    name = "bikeshare",
    about = "Bikeshare Explorer - interactive statistics over bike-share trip logs",
    version,
    author
)]
struct Cli {
    /// TOML config file with data_dir, page_size and [cities]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the city CSV files (overrides the config file)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Defaults to `explore`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively choose filters, view statistics and browse raw trips
    Explore,

    /// Print statistics for one city without prompting
    Report {
        /// City to analyze, e.g. "chicago" or "new york city"
        #[arg(long)]
        city: String,

        /// Month filter: all, or January through June
        #[arg(short, long, default_value = "all")]
        month: String,

        /// Day filter: all, or Monday through Sunday
        #[arg(long, default_value = "all")]
        day: String,

        /// Also print the first N filtered trips
        #[arg(long)]
        raw: Option<usize>,

        /// Write the filtered trips to a CSV file
        #[arg(short, long)]
        export: Option<PathBuf>,
    },

    /// List the configured cities and their data files
    Cities,
}

fn load_config(cli: &Cli) -> Result<ExplorerConfig> {
    let mut config = match &cli.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Explore) {
        Commands::Explore => {
            let stdin = std::io::stdin();
            let mut session = Session::new(config, stdin.lock(), std::io::stdout());
            session.run()?;
        }

        Commands::Report {
            city,
            month,
            day,
            raw,
            export,
        } => {
            let city = parse_city(&city, &config)?;
            let selection = FilterSelection::new(city, parse_month(&month)?, parse_day(&day)?);

            let mut stdout = std::io::stdout().lock();
            let dataset = run_report(&config, &selection, &mut stdout)?;

            if let Some(n) = raw {
                let columns: Vec<Column> = dataset.columns.iter().copied().collect();
                let shown = &dataset.trips[..n.min(dataset.len())];
                writeln!(stdout, "\n{}", format!("First {} trips", shown.len()).bold().cyan())?;
                write!(stdout, "{}", format_trip_page(shown, &columns, 0))?;
            }

            if let Some(path) = export {
                io::write_trips(&dataset, &path)?;
                writeln!(
                    stdout,
                    "{} Exported {} trips -> {}",
                    "Success:".green().bold(),
                    dataset.len(),
                    path.display()
                )?;
            }
        }

        Commands::Cities => {
            println!("\n{}", "Configured Cities".bold().cyan());
            println!("{}", "=".repeat(40));
            for city in config.city_names() {
                let path = config.city_path(city)?;
                let status = if path.exists() {
                    "ok".green()
                } else {
                    "missing".yellow()
                };
                println!("  {city:<16} {} [{status}]", path.display());
            }
        }
    }

    Ok(())
}
