//! tickfeed CLI - Replays delimited trade files.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "tickfeed")]
#[command(about = "Replay delimited trade files as an ordered feed", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only errors on stderr, no summary)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a trade file, printing every record
    Replay {
        /// Trade file to read
        file: PathBuf,

        /// Field delimiter (single character, or "tab")
        #[arg(short, long)]
        delimiter: Option<String>,

        /// JSON file with the field layout (delimiter and column indices)
        #[arg(long)]
        layout: Option<PathBuf>,

        /// Column of the symbol field
        #[arg(long)]
        symbol_field: Option<usize>,

        /// Column of the clock text field
        #[arg(long)]
        time_field: Option<usize>,

        /// Column of the price field
        #[arg(long)]
        price_field: Option<usize>,

        /// Column of the size field
        #[arg(long)]
        size_field: Option<usize>,

        /// Delay between records in milliseconds
        #[arg(long, default_value = "0")]
        pace_ms: u64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Price decimals in table output
        #[arg(long, default_value = "4")]
        decimals: usize,

        /// Trading day (YYYY-MM-DD) used to add absolute timestamps to JSON output
        #[arg(long)]
        date: Option<String>,
    },

    /// Convert clock text to milliseconds since midnight and back
    Clock {
        /// Clock text (HH:MM:SS or HH:MM:SS:mmm)
        texts: Vec<String>,

        /// Milliseconds since midnight to format
        #[arg(short, long)]
        millis: Vec<u64>,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Replay {
            file,
            delimiter,
            layout,
            symbol_field,
            time_field,
            price_field,
            size_field,
            pace_ms,
            format,
            decimals,
            date,
        } => {
            let options = commands::replay::ReplayOptions {
                delimiter,
                layout_file: layout,
                columns: [symbol_field, time_field, price_field, size_field],
                pace_ms,
                format,
                decimals,
                date,
            };
            commands::replay::replay(&file, options, cli.quiet).await
        }
        Commands::Clock { texts, millis } => commands::clock::clock(&texts, &millis),
    }
}
