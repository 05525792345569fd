use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use service2run::config::Config;
use service2run::identity::SystemIdentities;
use service2run::logging::{init_tracing, level_for_verbosity};
use service2run::{render, translate, Invocation, RunOptions};

#[derive(Parser, Debug)]
#[command(
    name = "service2run",
    about = "Print a systemd-run command line equivalent to a unit's [Service] section",
    version
)]
struct Cli {
    /// Unit file to translate. Reads standard input when omitted.
    #[arg(value_name = "UNIT")]
    unit: Option<PathBuf>,

    /// Configuration file (default: ~/.config/service2run/config.toml).
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Program to name instead of the configured one.
    #[arg(long, value_name = "NAME")]
    program: Option<String>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(&level_for_verbosity(&config.logging.level, cli.verbose));

    let mut options = config.run.run_options();
    if let Some(program) = cli.program {
        options = options.with_program(program);
    }

    let invocation = run(cli.unit, &options)?;
    println!("{}", render(&invocation)?);
    Ok(())
}

fn run(unit: Option<PathBuf>, options: &RunOptions) -> Result<Invocation> {
    match unit {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open unit file '{}'", path.display()))?;
            tracing::debug!(path = %path.display(), "Reading unit file");
            translate(BufReader::new(file), options, &SystemIdentities)
                .with_context(|| format!("failed to translate '{}'", path.display()))
        }
        None => {
            tracing::debug!("Reading unit from standard input");
            translate(io::stdin().lock(), options, &SystemIdentities)
                .context("failed to translate standard input")
        }
    }
}
