//! DFI Supply CLI
//!
//! Prints the total DFI supply after a given number of blocks.
//!
//! ## Usage
//!
//! ```bash
//! $ dfi-supply 894000
//! 501187195.02173325
//! ```
//!
//! Diagnostics go to stderr and are controlled with `RUST_LOG`
//! (default `warn`); stdout only ever carries the result line.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use dfi_economics::{format_amount, parse_height, EmissionSchedule};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const BIN_NAME: &str = "dfi-supply";

#[derive(Parser, Debug)]
#[command(name = BIN_NAME)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Total DFI supply after a given number of blocks", long_about = None)]
struct Cli {
    /// Blocks produced so far; heights 0..height have paid their reward
    #[arg(value_parser = parse_height)]
    height: u64,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false))
        .init();
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| BIN_NAME.to_string())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let schedule = EmissionSchedule::mainnet();
    let supply = schedule.total_supply(cli.height);

    tracing::debug!(
        height = cli.height,
        supply = %supply,
        cached_epochs = schedule.cached_epochs(),
        "computed total supply"
    );

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", format_amount(supply)).context("write supply to stdout")?;
    stdout.flush().context("flush stdout")
}

fn main() -> ExitCode {
    // Logging starts after parsing: a rejected invocation prints the usage line only.
    let Ok(cli) = Cli::try_parse() else {
        eprintln!("Usage: {} <height>", program_name());
        return ExitCode::FAILURE;
    };
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
