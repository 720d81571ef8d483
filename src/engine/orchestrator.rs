//! Driver that runs the length query and the menu selections.
//!
//! The selections run as one unguarded sequence: the first rejected option
//! aborts every call after it. The rejection is caught here, reported on the
//! error stream, and recorded in the run report. Console write failures are
//! not caught and propagate to the caller.

use crate::array::{array_length, SAMPLE_VALUES};
use crate::cli::args::Args;
use crate::engine::result::RunReport;
use crate::menu::Menu;
use crate::{CallOutcome, Error};
use log::{debug, info, warn};
use std::io::Write;

/// Options requested by the default run
pub const DEFAULT_OPTIONS: [i32; 4] = [1, 2, 3, 4];

/// Driver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Sequence handed to the length query
    pub values: Vec<i32>,
    /// Menu options requested, in order
    pub options: Vec<i32>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            values: SAMPLE_VALUES.to_vec(),
            options: DEFAULT_OPTIONS.to_vec(),
        }
    }
}

impl DriverConfig {
    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Self {
        let mut config = DriverConfig::default();

        if let Some(ref values) = args.values {
            config.values = values.clone();
        }
        if !args.options.is_empty() {
            config.options = args.options.clone();
        }

        config
    }
}

/// Driver
pub struct Driver {
    config: DriverConfig,
    menu: Menu,
}

impl Driver {
    /// Create a new driver with the given configuration
    pub fn new(config: DriverConfig) -> Self {
        Driver {
            config,
            menu: Menu::new(),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Run the length query, then the menu selections.
    pub fn run<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> Result<RunReport, Error> {
        let len = array_length(&self.config.values);
        info!("array of {} values", len);
        writeln!(out, "Array length is {}", len)?;

        let mut report = RunReport::new(len);

        match self.select_all(out, &mut report) {
            Ok(()) => {
                info!("all {} menu options selected", report.outcomes.len());
            }
            Err(Error::InvalidOption(e)) => {
                let failed_at = report.outcomes.len();
                warn!("menu option {} rejected: {}", e.option, e);
                writeln!(err, "Menu option invalid: {}", e)?;

                report.not_attempted = self.config.options[failed_at + 1..].to_vec();
                if !report.not_attempted.is_empty() {
                    debug!("skipping remaining options {:?}", report.not_attempted);
                }
                report.add_outcome(CallOutcome::Rejected(e));
            }
            Err(e) => return Err(e),
        }

        Ok(report)
    }

    /// Request each option in turn, stopping at the first error
    fn select_all<O: Write>(&self, out: &mut O, report: &mut RunReport) -> Result<(), Error> {
        for &option in &self.config.options {
            let selected = self.menu.display_option(option, out)?;
            report.add_outcome(CallOutcome::Selected(selected));
        }
        Ok(())
    }
}
