//! Verification report types for structured output.

use crate::issue::{Issue, Severity};
use serde::{Deserialize, Serialize};

/// Summary statistics for a verification run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerifySummary {
    /// Number of problem-level issues.
    pub problem_count: usize,
    /// Number of warning-level issues.
    pub warning_count: usize,
}

/// Complete report for a verification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyReport {
    /// True if no problems were found.
    pub ok: bool,
    /// Problem-level issues (very likely wrong).
    pub problems: Vec<Issue>,
    /// Warning-level issues (advisory).
    pub warnings: Vec<Issue>,
    /// Summary statistics.
    pub summary: VerifySummary,
}

impl VerifyReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self {
            ok: true,
            problems: Vec::new(),
            warnings: Vec::new(),
            summary: VerifySummary::default(),
        }
    }

    /// Adds an issue to the report and updates the summary.
    pub fn add_issue(&mut self, issue: Issue) {
        match issue.severity {
            Severity::Warning => {
                self.summary.warning_count += 1;
                self.warnings.push(issue);
            }
            Severity::Problem => {
                self.summary.problem_count += 1;
                self.ok = false;
                self.problems.push(issue);
            }
        }
    }

    /// Merges another report into this one.
    pub fn merge(&mut self, other: VerifyReport) {
        for issue in other.problems {
            self.add_issue(issue);
        }
        for issue in other.warnings {
            self.add_issue(issue);
        }
    }

    /// Returns true if there are any problems.
    pub fn has_problems(&self) -> bool {
        !self.ok
    }

    /// Returns true if there are any warnings.
    pub fn has_warnings(&self) -> bool {
        self.summary.warning_count > 0
    }

    /// Returns the total issue count.
    pub fn total_issues(&self) -> usize {
        self.summary.problem_count + self.summary.warning_count
    }

    /// Iterates over all issues, problems first.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.problems.iter().chain(self.warnings.iter())
    }
}

impl Default for VerifyReport {
    fn default() -> Self {
        Self::new()
    }
}
