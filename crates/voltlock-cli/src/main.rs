//! Voltlock CLI - interactive two-wire circuit puzzle sessions.
//!
//! Reads one command per line, applies it to the single circuit
//! configuration, and prints both wire outputs after every edit. All puzzle
//! semantics live in the library crates; this binary is presentation glue.

mod app;
mod command;

use std::io::{BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use voltlock::SolverConfig;

use app::App;
use command::parse_command;

#[derive(Debug, Parser)]
#[command(name = "voltlock", version, about = "Two-wire circuit puzzle solver")]
struct Cli {
    /// Configuration file (TOML, or YAML by extension).
    #[arg(long, value_name = "PATH")]
    config: Option<std::path::PathBuf>,

    /// Override the configured match tolerance.
    #[arg(long, value_name = "TOLERANCE")]
    tolerance: Option<f64>,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &Path) -> Result<SolverConfig, voltlock::ConfigError> {
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    if is_yaml {
        SolverConfig::from_yaml_file(path)
    } else {
        SolverConfig::from_toml_file(path)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: cannot load {}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        },
        None => SolverConfig::load("voltlock.toml").unwrap_or_default(),
    };

    tracing::debug!(
        tolerance = cli.tolerance.unwrap_or(config.solver.tolerance),
        decimals = config.display.decimals,
        "session starting"
    );

    let color = !cli.no_color && config.display.color;
    let mut app = App::new(&config, cli.tolerance, color);

    println!("voltlock - type 'help' for commands");
    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        print!("voltlock> ");
        if std::io::stdout().flush().is_err() {
            break;
        }
        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        match parse_command(&line) {
            Ok(Some(command)) => {
                if !app.execute(command) {
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => println!("error: {}", err),
        }
    }
    ExitCode::SUCCESS
}
