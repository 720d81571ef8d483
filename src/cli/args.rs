//! Command line arguments for menu-guard.
//!
//! With no arguments the program runs the built-in sample values and
//! options.

use clap::Parser;

/// Validate menu options and report the first invalid one
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "menu-guard")]
#[command(version)]
#[command(about = "Validate menu options and report the first invalid one")]
pub struct Args {
    /// Integer sequence to measure (comma-separated, may be empty)
    #[arg(long, value_name = "N,...", num_args = 0..=1, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Option<Vec<i32>>,

    /// Menu option to request; repeat or comma-separate for several
    #[arg(short = 'o', long = "option", value_name = "N", value_delimiter = ',', allow_hyphen_values = true)]
    pub options: Vec<i32>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print build information and exit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    /// Default log filter for the chosen verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "off",
            1 => "info",
            _ => "debug",
        }
    }
}
