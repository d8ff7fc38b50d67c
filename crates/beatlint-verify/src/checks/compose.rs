//! Compose checks: placement and interaction of hit objects.

use crate::checks::{Check, CheckCategory, CheckMetadata, CheckScope};
use crate::context::VerifierContext;
use crate::issue::{Issue, IssueTemplate, Severity};
use beatlint_map::HitObject;

/// Returns all compose checks.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![Box::new(ConcurrentObjectsCheck)]
}

/// Objects closer than this (exclusive), without overlapping, get a warning.
const NEAR_MISS_THRESHOLD_MS: f64 = 10.0;

const CHECK_ID: &str = "compose/concurrent-objects";

/// Two objects of the same kind with overlapping time ranges.
pub const CONCURRENT_SAME: IssueTemplate = IssueTemplate::new(
    CHECK_ID,
    "concurrent-same",
    Severity::Problem,
    "{0}s are concurrent here.",
);

/// Two objects of different kinds with overlapping time ranges.
pub const CONCURRENT_DIFFERENT: IssueTemplate = IssueTemplate::new(
    CHECK_ID,
    "concurrent-different",
    Severity::Problem,
    "{0} and {1} are concurrent here.",
);

/// Two objects of the same kind closer than the near-miss threshold.
pub const ALMOST_CONCURRENT_SAME: IssueTemplate = IssueTemplate::new(
    CHECK_ID,
    "almost-concurrent-same",
    Severity::Warning,
    "{0}s are less than {1}ms apart.",
);

/// Two objects of different kinds closer than the near-miss threshold.
pub const ALMOST_CONCURRENT_DIFFERENT: IssueTemplate = IssueTemplate::new(
    CHECK_ID,
    "almost-concurrent-different",
    Severity::Warning,
    "{0} and {1} are less than {2}ms apart.",
);

/// Detects pairs of hit objects whose active time ranges overlap, and pairs
/// that lie suspiciously close together.
///
/// Overlapping interactive objects are usually unintentional and unplayable
/// or ambiguous; near-misses under 10 ms are flagged as advisory.
pub struct ConcurrentObjectsCheck;

impl Check for ConcurrentObjectsCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: CHECK_ID,
            category: CheckCategory::Compose,
            description: "Concurrent hit objects",
            scope: CheckScope::Difficulty,
        }
    }

    fn possible_templates(&self) -> Vec<IssueTemplate> {
        vec![
            CONCURRENT_SAME,
            CONCURRENT_DIFFERENT,
            ALMOST_CONCURRENT_SAME,
            ALMOST_CONCURRENT_DIFFERENT,
        ]
    }

    fn run(&self, context: &VerifierContext<'_>) -> Vec<Issue> {
        let objects = &context.beatmap().hit_objects;
        let mut issues = Vec::new();

        // Every unordered pair in map order; clusters are not merged, so
        // three mutually overlapping objects yield three issues.
        for (i, object) in objects.iter().enumerate() {
            for other in &objects[i + 1..] {
                if let Some(issue) = classify_pair(object, other) {
                    issues.push(issue);
                }
            }
        }

        issues
    }
}

/// Classifies one pair of objects, most severe condition first.
fn classify_pair(a: &HitObject, b: &HitObject) -> Option<Issue> {
    // Column-pinned objects in different columns never interact.
    if let (Some(column_a), Some(column_b)) = (a.column(), b.column()) {
        if column_a != column_b {
            return None;
        }
    }

    // Negative or zero when the closed intervals touch or overlap.
    let gap = a.start_time().max(b.start_time()) - a.end_time().min(b.end_time());
    let time = a.start_time().max(b.start_time());

    if gap <= 0.0 {
        Some(concurrent_issue(a, b).with_time(time))
    } else if gap < NEAR_MISS_THRESHOLD_MS {
        Some(almost_concurrent_issue(a, b).with_time(time))
    } else {
        None
    }
}

fn concurrent_issue(a: &HitObject, b: &HitObject) -> Issue {
    if a.kind() == b.kind() {
        CONCURRENT_SAME.issue(vec![a.kind().label().to_string()])
    } else {
        CONCURRENT_DIFFERENT.issue(vec![
            a.kind().label().to_string(),
            b.kind().label().to_string(),
        ])
    }
}

fn almost_concurrent_issue(a: &HitObject, b: &HitObject) -> Issue {
    let threshold = NEAR_MISS_THRESHOLD_MS.to_string();
    if a.kind() == b.kind() {
        ALMOST_CONCURRENT_SAME.issue(vec![a.kind().label().to_string(), threshold])
    } else {
        ALMOST_CONCURRENT_DIFFERENT.issue(vec![
            a.kind().label().to_string(),
            b.kind().label().to_string(),
            threshold,
        ])
    }
}
