use super::compose::ConcurrentObjectsCheck;
use super::resources::VideoUsageCheck;
use super::Check;
use crate::context::VerifierContext;
use crate::issue::{Issue, Severity};
use beatlint_map::{Beatmap, DifficultyRating, HitObject, MapResources};
use pretty_assertions::assert_eq;

fn circle(start_time: f64) -> HitObject {
    HitObject::Circle { start_time }
}

fn slider(start_time: f64, span_duration: f64) -> HitObject {
    HitObject::Slider {
        start_time,
        span_duration,
        repeats: 0,
    }
}

fn hold(start_time: f64, duration: f64, column: u32) -> HitObject {
    HitObject::HoldNote {
        start_time,
        duration,
        column,
    }
}

fn run_concurrent(objects: Vec<HitObject>) -> Vec<Issue> {
    let beatmaps = vec![Beatmap::builder("Test").hit_objects(objects).build()];
    let resources = vec![MapResources::new()];
    let context =
        VerifierContext::new(0, &beatmaps, &resources, DifficultyRating::Normal).unwrap();
    ConcurrentObjectsCheck.run(&context)
}

/// Builds a set from `(difficulty_name, video)` pairs and runs the video
/// check from the perspective of `current`.
fn run_video(current: usize, difficulties: &[(&str, Option<(&str, f64)>)]) -> Vec<Issue> {
    let beatmaps: Vec<_> = difficulties
        .iter()
        .map(|(name, _)| Beatmap::builder(*name).build())
        .collect();
    let resources: Vec<_> = difficulties
        .iter()
        .map(|(_, video)| match video {
            Some((path, start_time)) => MapResources::with_video(*path, *start_time),
            None => MapResources::new(),
        })
        .collect();
    let context =
        VerifierContext::new(current, &beatmaps, &resources, DifficultyRating::Normal).unwrap();
    VideoUsageCheck.run(&context)
}

fn assert_single(issues: &[Issue], template_id: &str, severity: Severity) {
    assert_eq!(issues.len(), 1, "expected exactly one issue: {issues:?}");
    assert_eq!(issues[0].template_id, template_id);
    assert_eq!(issues[0].severity, severity);
}

// =============================================================================
// Concurrent objects
// =============================================================================

#[test]
fn test_circles_separate() {
    assert_eq!(run_concurrent(vec![circle(100.0), circle(150.0)]), vec![]);
}

#[test]
fn test_empty_map_yields_nothing() {
    assert_eq!(run_concurrent(vec![]), vec![]);
}

#[test]
fn test_circles_at_same_instant_are_concurrent() {
    let issues = run_concurrent(vec![circle(100.0), circle(100.0)]);
    assert_single(&issues, "concurrent-same", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Circle"]);
    assert_eq!(issues[0].time, Some(100.0));
}

#[test]
fn test_circles_nine_ms_apart_are_near_miss() {
    let issues = run_concurrent(vec![circle(100.0), circle(109.0)]);
    assert_single(&issues, "almost-concurrent-same", Severity::Warning);
    assert_eq!(issues[0].arguments, vec!["Circle", "10"]);
}

#[test]
fn test_circles_ten_ms_apart_are_clean() {
    // The near-miss threshold is exclusive.
    assert_eq!(run_concurrent(vec![circle(100.0), circle(110.0)]), vec![]);
}

#[test]
fn test_circles_one_ms_apart_are_near_miss() {
    let issues = run_concurrent(vec![circle(100.0), circle(101.0)]);
    assert_single(&issues, "almost-concurrent-same", Severity::Warning);
}

#[test]
fn test_sliders_separate() {
    assert_eq!(
        run_concurrent(vec![slider(100.0, 300.75), slider(500.0, 400.75)]),
        vec![]
    );
}

#[test]
fn test_sliders_overlapping_are_concurrent() {
    let issues = run_concurrent(vec![slider(100.0, 300.75), slider(300.0, 400.75)]);
    assert_single(&issues, "concurrent-same", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Slider"]);
}

#[test]
fn test_adjacent_intervals_are_concurrent() {
    // One ends exactly where the other starts; touching endpoints count as
    // overlap, not as a near miss.
    let issues = run_concurrent(vec![slider(100.0, 300.0), slider(400.0, 200.0)]);
    assert_single(&issues, "concurrent-same", Severity::Problem);
}

#[test]
fn test_slider_and_circle_concurrent() {
    let issues = run_concurrent(vec![slider(100.0, 300.75), circle(300.0)]);
    assert_single(&issues, "concurrent-different", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Slider", "Circle"]);
    assert_eq!(issues[0].time, Some(300.0));
}

#[test]
fn test_slider_and_circle_near_miss() {
    // Slider ends at 400.75; the circle at 408 leaves a 7.25 ms gap.
    let issues = run_concurrent(vec![slider(100.0, 300.75), circle(408.0)]);
    assert_single(&issues, "almost-concurrent-different", Severity::Warning);
    assert_eq!(issues[0].arguments, vec!["Slider", "Circle", "10"]);
}

#[test]
fn test_repeats_extend_the_active_range() {
    // One span ends at 300, but two repeats extend the slider to 700,
    // swallowing the circle at 650.
    let objects = vec![
        HitObject::Slider {
            start_time: 100.0,
            span_duration: 200.0,
            repeats: 2,
        },
        circle(650.0),
    ];
    let issues = run_concurrent(objects);
    assert_single(&issues, "concurrent-different", Severity::Problem);
}

#[test]
fn test_cluster_produces_one_issue_per_pair() {
    let issues = run_concurrent(vec![
        slider(100.0, 300.75),
        slider(200.0, 300.75),
        circle(300.0),
    ]);

    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|issue| issue.severity == Severity::Problem));

    let same: Vec<_> = issues
        .iter()
        .filter(|issue| issue.template_id == "concurrent-same")
        .collect();
    let different: Vec<_> = issues
        .iter()
        .filter(|issue| issue.template_id == "concurrent-different")
        .collect();
    assert_eq!(same.len(), 1);
    assert_eq!(different.len(), 2);
}

#[test]
fn test_pair_order_does_not_change_classification() {
    let forward = run_concurrent(vec![slider(100.0, 300.75), circle(300.0)]);
    let backward = run_concurrent(vec![circle(300.0), slider(100.0, 300.75)]);

    assert_eq!(forward.len(), 1);
    assert_eq!(backward.len(), 1);
    assert_eq!(forward[0].template_id, backward[0].template_id);
    assert_eq!(forward[0].severity, backward[0].severity);
    // Argument order follows map order, so the labels swap.
    assert_eq!(forward[0].arguments, vec!["Slider", "Circle"]);
    assert_eq!(backward[0].arguments, vec!["Circle", "Slider"]);
}

#[test]
fn test_hold_notes_in_different_columns_never_interact() {
    assert_eq!(
        run_concurrent(vec![hold(100.0, 500.0, 0), hold(100.0, 500.0, 1)]),
        vec![]
    );
}

#[test]
fn test_hold_notes_in_same_column_are_concurrent() {
    let issues = run_concurrent(vec![hold(100.0, 500.0, 2), hold(300.0, 500.0, 2)]);
    assert_single(&issues, "concurrent-same", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Hold note"]);
}

#[test]
fn test_column_exemption_needs_columns_on_both_objects() {
    // A circle carries no column, so it conflicts with hold notes in any
    // column.
    let issues = run_concurrent(vec![hold(100.0, 500.0, 3), circle(300.0)]);
    assert_single(&issues, "concurrent-different", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Hold note", "Circle"]);
}

#[test]
fn test_concurrent_check_is_idempotent() {
    let beatmaps = vec![Beatmap::builder("Test")
        .hit_objects(vec![slider(100.0, 300.75), circle(300.0), circle(305.0)])
        .build()];
    let resources = vec![MapResources::new()];
    let context =
        VerifierContext::new(0, &beatmaps, &resources, DifficultyRating::Normal).unwrap();

    let check = ConcurrentObjectsCheck;
    assert_eq!(check.run(&context), check.run(&context));
}

// =============================================================================
// Video usage
// =============================================================================

#[test]
fn test_consistent_video_usage() {
    let issues = run_video(
        0,
        &[
            ("Diff 1", Some(("video.mp4", 1000.0))),
            ("Diff 2", Some(("video.mp4", 1000.0))),
        ],
    );
    assert_eq!(issues, vec![]);
}

#[test]
fn test_different_video_file() {
    let issues = run_video(
        0,
        &[
            ("Diff 1", Some(("videoA.mp4", 0.0))),
            ("Diff 2", Some(("videoB.mp4", 500.0))),
        ],
    );
    assert_single(&issues, "different-video", Severity::Warning);
    assert_eq!(issues[0].arguments, vec!["Diff 2", "videoA.mp4", "videoB.mp4"]);
}

#[test]
fn test_path_comparison_ignores_case() {
    let issues = run_video(
        0,
        &[
            ("Diff 1", Some(("Video.MP4", 0.0))),
            ("Diff 2", Some(("video.mp4", 0.0))),
        ],
    );
    assert_eq!(issues, vec![]);
}

#[test]
fn test_different_start_time() {
    let issues = run_video(
        0,
        &[
            ("Diff 1", Some(("video.mp4", 0.0))),
            ("Diff 2", Some(("video.mp4", 500.0))),
        ],
    );
    assert_single(&issues, "different-start-time", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["video.mp4", "Diff 2", "0", "500"]);
}

#[test]
fn test_other_difficulty_missing_video() {
    let issues = run_video(0, &[("Diff 1", Some(("video.mp4", 0.0))), ("Diff 2", None)]);
    assert_single(&issues, "missing-video", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Diff 2"]);
}

#[test]
fn test_current_difficulty_missing_video() {
    let issues = run_video(0, &[("Diff 1", None), ("Diff 2", Some(("video.mp4", 0.0)))]);
    assert_single(&issues, "missing-video", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Diff 1"]);
}

#[test]
fn test_current_missing_reports_once_regardless_of_sibling_count() {
    let issues = run_video(
        0,
        &[
            ("Diff 1", None),
            ("Diff 2", Some(("video.mp4", 0.0))),
            ("Diff 3", Some(("video.mp4", 0.0))),
        ],
    );
    assert_single(&issues, "missing-video", Severity::Problem);
    assert_eq!(issues[0].arguments, vec!["Diff 1"]);
}

#[test]
fn test_both_difficulties_missing_video() {
    assert_eq!(run_video(0, &[("Diff 1", None), ("Diff 2", None)]), vec![]);
}

#[test]
fn test_singleton_set_yields_nothing() {
    assert_eq!(run_video(0, &[("Solo", Some(("video.mp4", 0.0)))]), vec![]);
}

#[test]
fn test_each_disagreeing_sibling_reported_independently() {
    let issues = run_video(
        0,
        &[
            ("Diff 1", Some(("video.mp4", 0.0))),
            ("Diff 2", None),
            ("Diff 3", Some(("other.mp4", 0.0))),
            ("Diff 4", Some(("video.mp4", 250.0))),
        ],
    );

    assert_eq!(issues.len(), 3);
    assert_eq!(issues[0].template_id, "missing-video");
    assert_eq!(issues[0].arguments, vec!["Diff 2"]);
    assert_eq!(issues[1].template_id, "different-video");
    assert_eq!(issues[1].arguments, vec!["Diff 3", "video.mp4", "other.mp4"]);
    assert_eq!(issues[2].template_id, "different-start-time");
    assert_eq!(issues[2].arguments, vec!["video.mp4", "Diff 4", "0", "250"]);
}

#[test]
fn test_perspective_changes_the_issue_set() {
    // The current difficulty is the fixed reference, so the outlier's
    // perspective reports fewer issues than a majority perspective. This
    // asymmetry is deliberate.
    let set: &[(&str, Option<(&str, f64)>)] = &[
        ("Outlier", Some(("videoA.mp4", 0.0))),
        ("Diff 2", Some(("videoB.mp4", 0.0))),
        ("Diff 3", Some(("videoB.mp4", 0.0))),
    ];

    let from_outlier = run_video(0, set);
    assert_eq!(from_outlier.len(), 2);

    let from_majority = run_video(1, set);
    assert_eq!(from_majority.len(), 1);
    assert_eq!(from_majority[0].arguments[0], "Outlier");
}

#[test]
fn test_video_check_is_idempotent() {
    let beatmaps = vec![
        Beatmap::builder("Diff 1").build(),
        Beatmap::builder("Diff 2").build(),
    ];
    let resources = vec![
        MapResources::with_video("video.mp4", 0.0),
        MapResources::with_video("video.mp4", 500.0),
    ];
    let context =
        VerifierContext::new(0, &beatmaps, &resources, DifficultyRating::Normal).unwrap();

    let check = VideoUsageCheck;
    assert_eq!(check.run(&context), check.run(&context));
}
