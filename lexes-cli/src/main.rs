//! lexes CLI - translate LexisNexis connector-dialect boolean queries
//! into a search-backend clause tree.
//!
//! The dialect has exactly one operation - translate a query - so this
//! CLI takes its flags directly rather than routing through a
//! `Subcommand` enum the way a multi-operation tool would.

mod config;
mod error;

use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use error::{LexesCliError, Result};
use lexes_par::{translate, Options};

/// Translate a LexisNexis connector-dialect boolean query into a
/// search-backend clause tree.
#[derive(Parser, Debug)]
#[command(name = "lexes")]
#[command(author = "Lexes Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Translate LexisNexis boolean queries to a search-backend clause tree")]
struct Cli {
    /// Query input file (defaults to stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file for the translated document (defaults to stdout).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Target field name for term/phrase/prefix/wildcard leaves.
    #[arg(long)]
    field: Option<String>,

    /// Projection field to add to `_source` (repeatable).
    #[arg(long = "retrieve", action = clap::ArgAction::Append)]
    retrieve: Vec<String>,

    /// Insert an implicit `or` between adjacent terms lacking an
    /// operator (this is the default; present for symmetry with
    /// `--no-operators`).
    #[arg(long, conflicts_with = "no_operators")]
    operators: bool,

    /// Reject adjacent terms lacking an explicit operator instead of
    /// implicitly `or`-joining them.
    #[arg(long)]
    no_operators: bool,

    /// Emit the highlight block in the output document.
    #[arg(long)]
    highlight: bool,

    /// Path to a TOML config file supplying alternate option defaults.
    #[arg(short, long, env = "LEXES_CONFIG")]
    config: Option<PathBuf>,

    /// Raise logging verbosity from info to debug.
    #[arg(short, long, env = "LEXES_VERBOSE")]
    verbose: bool,

    /// Disable ANSI color in log output.
    #[arg(long, env = "LEXES_NO_COLOR")]
    no_color: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let options = resolve_options(&cli, config);

    let query = read_query(cli.input.as_deref())?;
    tracing::debug!(query_len = query.len(), field = %options.field, "translating query");

    let document = translate(&query, &options)?;
    write_output(cli.output.as_deref(), &document)
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let layer = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| LexesCliError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// CLI flags override config-file defaults where both are present.
fn resolve_options(cli: &Cli, config: Config) -> Options {
    let mut options = config.to_options();

    if let Some(field) = &cli.field {
        options.field = field.clone();
    }
    if !cli.retrieve.is_empty() {
        options.retrieve = cli.retrieve.clone();
    }
    if cli.no_operators {
        options.insert_operators = false;
    } else if cli.operators {
        options.insert_operators = true;
    }
    if cli.highlight {
        options.highlight = true;
    }

    options
}

fn read_query(input: Option<&std::path::Path>) -> Result<String> {
    let mut buf = String::new();
    match input {
        Some(path) => {
            buf = std::fs::read_to_string(path)?;
        }
        None => {
            std::io::stdin().read_to_string(&mut buf)?;
        }
    }
    Ok(buf.trim_end_matches('\n').to_string())
}

fn write_output(output: Option<&std::path::Path>, document: &serde_json::Value) -> Result<()> {
    let rendered = serde_json::to_string_pretty(document)?;
    match output {
        Some(path) => {
            std::fs::write(path, rendered + "\n")?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{rendered}")?;
        }
    }
    Ok(())
}
