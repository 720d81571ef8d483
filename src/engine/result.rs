//! Run results and summaries.

use crate::{CallOutcome, InvalidOptionError};

/// Summary statistics for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub selected: u32,
    pub rejected: u32,
    pub not_attempted: u32,
    pub total: u32,
}

/// Everything observed during one driver run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Length of the integer sequence
    pub array_length: usize,
    /// Outcome of each attempted call, in order
    pub outcomes: Vec<CallOutcome>,
    /// Options that were never attempted because an earlier call failed
    pub not_attempted: Vec<i32>,
}

impl RunReport {
    pub fn new(array_length: usize) -> Self {
        RunReport {
            array_length,
            outcomes: Vec::new(),
            not_attempted: Vec::new(),
        }
    }

    /// Record a completed call
    pub fn add_outcome(&mut self, outcome: CallOutcome) {
        self.outcomes.push(outcome);
    }

    /// The rejection that stopped the run, if any
    pub fn failure(&self) -> Option<&InvalidOptionError> {
        self.outcomes.iter().find_map(|outcome| match outcome {
            CallOutcome::Rejected(err) => Some(err),
            CallOutcome::Selected(_) => None,
        })
    }

    /// Options whose confirmation was printed, in order
    pub fn selected_options(&self) -> Vec<i32> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_selected())
            .map(CallOutcome::option)
            .collect()
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        for outcome in &self.outcomes {
            summary.total += 1;

            match outcome {
                CallOutcome::Selected(_) => summary.selected += 1,
                CallOutcome::Rejected(_) => summary.rejected += 1,
            }
        }

        summary.not_attempted = self.not_attempted.len() as u32;
        summary.total += summary.not_attempted;
        summary
    }
}
