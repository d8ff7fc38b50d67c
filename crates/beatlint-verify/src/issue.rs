//! Issue and issue template types for structured output.

use serde::{Deserialize, Serialize};

/// Severity level for verification issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Advisory; plausible to be intentional.
    Warning,
    /// Very likely wrong; should block publishing in the surrounding system.
    Problem,
}

/// An immutable, check-owned message template.
///
/// The format string uses positional `{0}`/`{1}` placeholders bound when an
/// [`Issue`] is created. Every template a check can fire is enumerable
/// through [`crate::Check::possible_templates`], whether or not it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IssueTemplate {
    /// Identifier of the owning check.
    pub check_id: &'static str,
    /// Identifier of this template within the check (e.g., "concurrent-same").
    pub id: &'static str,
    /// Severity of issues created from this template.
    pub severity: Severity,
    /// Positional message format string.
    pub message_format: &'static str,
}

impl IssueTemplate {
    /// Creates a new template.
    pub const fn new(
        check_id: &'static str,
        id: &'static str,
        severity: Severity,
        message_format: &'static str,
    ) -> Self {
        Self {
            check_id,
            id,
            severity,
            message_format,
        }
    }

    /// Binds an ordered argument list, producing a fresh issue.
    pub fn issue(&self, arguments: Vec<String>) -> Issue {
        let message = render_message(self.message_format, &arguments);
        Issue {
            check_id: self.check_id.to_string(),
            template_id: self.id.to_string(),
            severity: self.severity,
            message,
            arguments,
            time: None,
        }
    }
}

/// A single verification finding.
///
/// Issues are produced fresh on every run and never mutated afterwards.
/// Consumers should match on `check_id`/`template_id` and `arguments` rather
/// than the rendered message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Identifier of the check that produced this issue.
    pub check_id: String,

    /// Identifier of the template within the check.
    pub template_id: String,

    /// Severity level, inherited from the template.
    pub severity: Severity,

    /// Rendered message.
    pub message: String,

    /// The argument values bound into the message, in template order.
    pub arguments: Vec<String>,

    /// Timestamp the issue points at, in milliseconds, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
}

impl Issue {
    /// Builder method to set the timestamp.
    pub fn with_time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }
}

/// Substitutes `{n}` placeholders with the nth argument.
///
/// Placeholders with no matching argument, and braces that do not form a
/// placeholder, are left verbatim. Template arity is fixed at the owning
/// check, so a mismatch indicates a bug there rather than a runtime error.
fn render_message(format: &str, arguments: &[String]) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut rest = format;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if close > 0 && after[..close].bytes().all(|b| b.is_ascii_digit()) => {
                match after[..close].parse::<usize>().ok().and_then(|i| arguments.get(i)) {
                    Some(argument) => out.push_str(argument),
                    None => {
                        out.push('{');
                        out.push_str(&after[..close]);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
