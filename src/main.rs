//! menu-guard CLI entry point
//!
//! Prints the length of a sample sequence, then requests menu options in
//! order until one is rejected.

use anyhow::Context;
use clap::Parser;
use menu_guard::cli::args::Args;
use menu_guard::version::get_build_info;
use menu_guard::{run, DriverConfig};

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new().parse_filters(args.log_level()).init();

    if args.build_info {
        println!("{}", get_build_info());
        return ExitCode::SUCCESS;
    }

    match run_driver(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_driver(args: &Args) -> anyhow::Result<()> {
    let config = DriverConfig::from_args(args);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();

    let report = run(config, &mut out, &mut err).context("writing to the console")?;
    out.flush().context("flushing standard output")?;

    let summary = report.summary();
    log::info!(
        "{} selected, {} rejected, {} not attempted",
        summary.selected,
        summary.rejected,
        summary.not_attempted
    );

    Ok(())
}
