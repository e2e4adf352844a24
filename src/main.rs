//! Learning progress tracker CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use progress_tracker::config::{load_config, write_default_config, Config, OutputFormat, CONFIG_FILENAME};
use progress_tracker::reporter::{ConsoleReporter, JsonReporter, Reporter};
use progress_tracker::session::run_session;
use progress_tracker::LearningPlatform;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Learning progress tracker: register students, record points, report statistics
#[derive(Parser, Debug)]
#[command(name = "tracker")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output results as JSON, one object per line
    #[arg(long, short)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose output (debug logs on stderr, completion bars)
    #[arg(long, short)]
    verbose: bool,

    /// Path to config file (default: search .trackerrc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .trackerrc.json with default settings
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Some(Commands::Init { dir }) = args.command {
        return run_init(dir.as_deref());
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let config = load_config(&cwd, args.config.as_deref())?.merge_with_cli(args.json, args.no_color);
    if !config.color {
        colored::control::set_override(false);
    }
    tracing::debug!(?config, "effective config");

    let platform = LearningPlatform::with_channel(config.notifications);
    let reporter = build_reporter(&config, args.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), platform, reporter)?;
    Ok(ExitCode::SUCCESS)
}

/// Logs go to stderr so stdout stays the session transcript
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn build_reporter(config: &Config, verbose: bool) -> Reporter {
    match config.format {
        OutputFormat::Json => {
            let json = JsonReporter::new();
            Reporter::Json(if config.pretty_json { json.pretty() } else { json })
        }
        OutputFormat::Text => {
            let mut console = ConsoleReporter::new();
            if !config.color {
                console = console.without_colors();
            }
            if verbose {
                console = console.verbose();
            }
            Reporter::Console(console)
        }
    }
}

fn run_init(dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let written = write_default_config(dir)?;
    println!("{} {}", "Created".green(), written.display());
    Ok(ExitCode::SUCCESS)
}
