//! Resource checks: files shared across the difficulty set.

use crate::checks::{Check, CheckCategory, CheckMetadata, CheckScope};
use crate::context::VerifierContext;
use crate::issue::{Issue, IssueTemplate, Severity};

/// Returns all resource checks.
pub fn all_checks() -> Vec<Box<dyn Check>> {
    vec![Box::new(VideoUsageCheck)]
}

const CHECK_ID: &str = "resources/video-usage";

/// A difficulty lacks the video that others carry.
pub const MISSING_VIDEO: IssueTemplate = IssueTemplate::new(
    CHECK_ID,
    "missing-video",
    Severity::Problem,
    "Video is missing in \"{0}\".",
);

/// A sibling uses a different video file.
pub const DIFFERENT_VIDEO: IssueTemplate = IssueTemplate::new(
    CHECK_ID,
    "different-video",
    Severity::Warning,
    "Video file differs from the current difficulty in \"{0}\" (current: \"{1}\", other: \"{2}\"). Ensure this makes sense.",
);

/// The same video file starts at a different offset on a sibling.
pub const DIFFERENT_START_TIME: IssueTemplate = IssueTemplate::new(
    CHECK_ID,
    "different-start-time",
    Severity::Problem,
    "Video start time of \"{0}\" differs in \"{1}\" (current: {2} ms, other: {3} ms).",
);

/// Detects disagreement in video usage across the difficulties of a set.
///
/// A storyboard video is a set-wide resource; the current difficulty is the
/// fixed reference and each sibling is compared against it independently.
/// Running the check from another difficulty's perspective may therefore
/// surface a different, symmetric issue set.
pub struct VideoUsageCheck;

impl Check for VideoUsageCheck {
    fn metadata(&self) -> CheckMetadata {
        CheckMetadata {
            id: CHECK_ID,
            category: CheckCategory::Resources,
            description: "Inconsistent video usage",
            scope: CheckScope::Set,
        }
    }

    fn possible_templates(&self) -> Vec<IssueTemplate> {
        vec![MISSING_VIDEO, DIFFERENT_VIDEO, DIFFERENT_START_TIME]
    }

    fn run(&self, context: &VerifierContext<'_>) -> Vec<Issue> {
        let mut issues = Vec::new();

        let Some(reference) = context.resources().video() else {
            // Nothing to compare against locally: a single issue names the
            // current difficulty if any sibling carries a video.
            if context
                .siblings()
                .any(|(_, resources)| resources.video().is_some())
            {
                issues.push(
                    MISSING_VIDEO.issue(vec![context.beatmap().info.difficulty_name.clone()]),
                );
            }
            return issues;
        };

        for (beatmap, resources) in context.siblings() {
            let name = beatmap.info.difficulty_name.clone();
            match resources.video() {
                None => {
                    issues.push(MISSING_VIDEO.issue(vec![name]));
                }
                Some(other) if !other.path.eq_ignore_ascii_case(&reference.path) => {
                    issues.push(DIFFERENT_VIDEO.issue(vec![
                        name,
                        reference.path.clone(),
                        other.path.clone(),
                    ]));
                }
                Some(other) if other.start_time != reference.start_time => {
                    issues.push(DIFFERENT_START_TIME.issue(vec![
                        reference.path.clone(),
                        name,
                        format_ms(reference.start_time),
                        format_ms(other.start_time),
                    ]));
                }
                Some(_) => {}
            }
        }

        issues
    }
}

/// Millisecond offsets are rendered as whole numbers in messages.
fn format_ms(value: f64) -> String {
    format!("{value:.0}")
}
