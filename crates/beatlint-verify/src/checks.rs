//! Check trait and concrete check modules.

use crate::context::VerifierContext;
use crate::issue::{Issue, IssueTemplate};
use serde::{Deserialize, Serialize};

pub mod compose;
pub mod resources;

#[cfg(test)]
mod tests;

/// Broad grouping of checks, for filtering and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckCategory {
    /// Placement and interaction of hit objects.
    Compose,
    /// Timing points and rhythm structure.
    Timing,
    /// Files shared across the set (video, audio, storyboard).
    Resources,
    /// Difficulty naming and song metadata.
    Metadata,
}

/// Whether a check inspects one difficulty or the whole set.
///
/// A runner executes `Set` checks once per set rather than once per
/// difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckScope {
    /// Runs against a single difficulty's objects.
    Difficulty,
    /// Compares the current difficulty against its siblings.
    Set,
}

/// Self-describing metadata of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckMetadata {
    /// Unique identifier (e.g., "compose/concurrent-objects").
    pub id: &'static str,
    /// Category grouping.
    pub category: CheckCategory,
    /// Human-readable description.
    pub description: &'static str,
    /// Single-difficulty or whole-set.
    pub scope: CheckScope,
}

/// A self-contained verification unit producing issues from a context.
pub trait Check: Send + Sync {
    /// Identifying metadata.
    fn metadata(&self) -> CheckMetadata;

    /// Every template this check can fire, whether or not it does.
    fn possible_templates(&self) -> Vec<IssueTemplate>;

    /// Runs the check, returning all issues found.
    ///
    /// Pure: reads the context, produces a fresh list, keeps no state
    /// between calls. Degenerate input (empty map, singleton set) yields an
    /// empty list rather than an error.
    fn run(&self, context: &VerifierContext<'_>) -> Vec<Issue>;
}

/// Returns all checks known to this crate.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    let mut checks = Vec::new();
    checks.extend(compose::all_checks());
    checks.extend(resources::all_checks());
    checks
}
