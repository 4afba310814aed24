// command line interface

use crate::*;
use clap::{ArgAction, Parser};
use std::{path::PathBuf, process::ExitCode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "sqlcheck",
    version,
    about = "Check illegal sql statements in a specific file"
)]
struct Cli {
    /// path to the sql file
    file: PathBuf,

    /// prefix of tables that may be created, altered, dropped or truncated
    #[arg(long)]
    table_prefix: Option<String>,

    /// exit with status 0 even when violations are found
    #[arg(long)]
    no_fail: bool,

    /// more logging (-v debug, -vv trace)
    #[arg(long, short, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(prefix) = &self.table_prefix {
            config.table_prefix = prefix.clone();
        }
        if self.no_fail {
            config.fail_on_violation = false;
        }
        match self.verbose {
            0 => {}
            1 => config.log = "debug".to_string(),
            _ => config.log = "trace".to_string(),
        }
    }
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    cli.apply(&mut config);
    init_logging(&config.log, cli.verbose > 0)?;

    let checker = Checker::new(config.policy()?);
    debug!(prefix = checker.policy().table_prefix(), "Policy loaded");

    let summary = checker.check_file(&cli.file, &mut ConsoleReporter::stdio())?;
    Ok(ExitCode::from(exit_status(&summary, config.fail_on_violation)))
}

fn exit_status(summary: &CheckSummary, fail_on_violation: bool) -> u8 {
    if fail_on_violation && !summary.is_clean() {
        1
    } else {
        0
    }
}

// RUST_LOG wins unless -v was given
fn init_logging(level: &str, verbose: bool) -> Result {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) if !verbose => filter,
        _ => EnvFilter::try_new(level).map_err(|e| Error::Config(format!("log filter: {e}")))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
