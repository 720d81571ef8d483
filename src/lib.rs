//! menu-guard library
//!
//! Menu option validation with typed error handling.
//!
//! This library provides:
//! - Length queries over integer sequences
//! - Range validation of menu options with a typed rejection error
//! - A driver that runs a fixed sequence of selections, stopping at the
//!   first rejected option and reporting it on the error stream
//!
//! # Example
//!
//! ```no_run
//! use menu_guard::{run, DriverConfig};
//!
//! let mut stdout = std::io::stdout();
//! let mut stderr = std::io::stderr();
//! let report = run(DriverConfig::default(), &mut stdout, &mut stderr).expect("console write failed");
//! println!("Options selected: {}", report.summary().selected);
//! ```

pub mod array;
pub mod cli;
pub mod engine;
pub mod menu;
pub mod version;

use menu::MenuOption;
use std::fmt;
use std::io::Write;
use thiserror::Error;

// Re-exports for public API
pub use array::array_length;
pub use engine::orchestrator::{Driver, DriverConfig};
pub use engine::result::{RunReport, RunSummary};
pub use menu::{validate, Menu, INVALID_OPTION_MESSAGE, MAX_OPTION, MIN_OPTION};

/// A menu option fell outside the allowed range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvalidOptionError {
    /// Human-readable reason
    pub message: String,
    /// The rejected value
    pub option: i32,
}

impl InvalidOptionError {
    pub fn new(option: i32) -> Self {
        InvalidOptionError {
            message: INVALID_OPTION_MESSAGE.to_string(),
            option,
        }
    }
}

/// Error types for menu-guard operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Option rejected by the validator
    #[error(transparent)]
    InvalidOption(#[from] InvalidOptionError),

    /// Writing to the console failed
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Terminal state of a single validator call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// Option was in range and its confirmation was printed
    Selected(MenuOption),
    /// Option was out of range
    Rejected(InvalidOptionError),
}

impl CallOutcome {
    /// The option value that was requested
    pub fn option(&self) -> i32 {
        match self {
            CallOutcome::Selected(option) => option.value(),
            CallOutcome::Rejected(err) => err.option,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, CallOutcome::Selected(_))
    }
}

impl fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallOutcome::Selected(option) => write!(f, "SELECTED: {}", option),
            CallOutcome::Rejected(err) => write!(f, "REJECTED: {} ({})", err.option, err),
        }
    }
}

/// Run the driver.
///
/// Writes the array length and every confirmation to `out`, and the rejection
/// (if any) to `err`. A rejected option is recovered here and recorded in the
/// returned report; only console write failures are returned as `Err`.
///
/// # Example
///
/// ```
/// use menu_guard::{run, DriverConfig};
///
/// let config = DriverConfig {
///     values: vec![1, 2, 3],
///     options: vec![2, 7, 1],
/// };
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let report = run(config, &mut out, &mut err).unwrap();
///
/// assert_eq!(report.array_length, 3);
/// assert_eq!(report.not_attempted, vec![1]);
/// ```
pub fn run<O: Write, E: Write>(config: DriverConfig, out: &mut O, err: &mut E) -> Result<RunReport, Error> {
    Driver::new(config).run(out, err)
}
