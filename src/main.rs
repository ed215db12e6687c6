//! partsy: BOM to supplier order sheet
//!
//! Looks up every BOM line in a YAML parts database and writes the order
//! codes in a supplier's bulk-order format.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use partsy::{
    cli::{self, SchemaKind},
    config::{load_or_default, CheckConfig, LookupConfig},
    parsers::InputFormat,
    writers::OutputFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "partsy")]
#[command(version)]
#[command(about = "Look up supplier order codes for a bill of materials", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Order sheet written
    1  Error occurred
    2  Some BOM items are not in the parts database (nothing written)

EXAMPLES:
    # KiCad BOM to a Farnell order sheet
    partsy lookup -i board.csv -o order.csv

    # Order parts for ten boards, with prices
    partsy lookup -i board.csv -q 10 -O csv

    # Check a parts database
    partsy check -D parts/partsy.yaml")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `lookup` subcommand
#[derive(Parser)]
struct LookupArgs {
    /// BOM file (stdin if not specified or `-`)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input format (auto detects from the header row)
    #[arg(short = 'I', long)]
    input_format: Option<InputFormat>,

    /// Order sheet file (stdout if not specified or `-`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'O', long)]
    output_format: Option<OutputFormat>,

    /// Parts database file [default: partsy.yaml]
    #[arg(short = 'D', long, env = "PARTSY_DATABASE")]
    database: Option<PathBuf>,

    /// Number of boards; multiplies every quantity [default: 1]
    #[arg(short, long)]
    qty: Option<u32>,

    /// BOM field delimiter (sniffed from the header line if not specified)
    #[arg(long)]
    delimiter: Option<char>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a BOM into a supplier order sheet
    Lookup(LookupArgs),

    /// Load a parts database and report ambiguous designations
    Check {
        /// Parts database file [default: partsy.yaml]
        #[arg(short = 'D', long, env = "PARTSY_DATABASE")]
        database: Option<PathBuf>,
    },

    /// Generate JSON Schema for the parts database or config file
    Schema {
        /// Which file format to describe
        #[arg(value_enum, default_value_t)]
        kind: SchemaKind,

        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .partsy.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the order sheet
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match cli.command {
        Commands::Lookup(args) => {
            let (mut app, loaded_from) = load_or_default(cli.config.as_deref())?;
            if let Some(path) = &loaded_from {
                tracing::debug!("Using config file {}", path.display());
            }
            if let Some(database) = args.database {
                app.database.path = database;
            }
            if let Some(format) = args.input_format {
                app.input.format = format;
            }
            if let Some(format) = args.output_format {
                app.output.format = format;
            }
            if let Some(qty) = args.qty {
                app.behavior.quantity = qty;
            }
            if args.delimiter.is_some() {
                app.input.delimiter = args.delimiter;
            }
            app.behavior.quiet |= cli.quiet;

            let config = LookupConfig::from_app(&app, args.input, args.output);
            let exit_code = cli::run_lookup(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Check { database } => {
            let (app, _) = load_or_default(cli.config.as_deref())?;
            let config = CheckConfig {
                database: database.unwrap_or(app.database.path),
                quiet: cli.quiet || app.behavior.quiet,
            };
            let exit_code = cli::run_check(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Schema { kind, output } => cli::run_schema(kind, output),

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref()),
            ConfigAction::Path => cli::run_config_path(cli.config.as_deref()),
            ConfigAction::Init => {
                let cwd = std::env::current_dir().context("cannot determine current directory")?;
                cli::run_config_init(&cwd)
            }
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "partsy", &mut io::stdout());
            Ok(())
        }
    }
}
