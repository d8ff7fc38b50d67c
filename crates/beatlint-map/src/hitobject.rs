//! Hit object variants and their derived time ranges.

use serde::{Deserialize, Serialize};

/// Category tag distinguishing hit object kinds.
///
/// Used by verification messages to group objects by type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitObjectKind {
    Circle,
    Slider,
    Spinner,
    HoldNote,
}

impl HitObjectKind {
    /// Human-readable label used in issue messages.
    pub fn label(&self) -> &'static str {
        match self {
            HitObjectKind::Circle => "Circle",
            HitObjectKind::Slider => "Slider",
            HitObjectKind::Spinner => "Spinner",
            HitObjectKind::HoldNote => "Hold note",
        }
    }
}

impl std::fmt::Display for HitObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A placed, timed object within a beatmap.
///
/// All times are milliseconds from the start of the track. Instant objects
/// occupy a single timestamp; duration objects span `[start_time, end_time]`
/// where the end time is always derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HitObject {
    /// Instant tap object.
    Circle { start_time: f64 },
    /// Curve traversed `repeats + 1` times; `repeats == 0` is a single pass.
    Slider {
        start_time: f64,
        span_duration: f64,
        repeats: u32,
    },
    /// Fixed-length spin.
    Spinner { start_time: f64, duration: f64 },
    /// Held note pinned to a playfield column.
    HoldNote {
        start_time: f64,
        duration: f64,
        column: u32,
    },
}

impl HitObject {
    /// Start of the object's active time range, in milliseconds.
    pub fn start_time(&self) -> f64 {
        match *self {
            HitObject::Circle { start_time }
            | HitObject::Slider { start_time, .. }
            | HitObject::Spinner { start_time, .. }
            | HitObject::HoldNote { start_time, .. } => start_time,
        }
    }

    /// End of the object's active time range, in milliseconds.
    ///
    /// Instant objects end where they start. Sliders traverse their span
    /// once plus once per repeat.
    pub fn end_time(&self) -> f64 {
        match *self {
            HitObject::Circle { start_time } => start_time,
            HitObject::Slider {
                start_time,
                span_duration,
                repeats,
            } => start_time + span_duration * f64::from(repeats + 1),
            HitObject::Spinner {
                start_time,
                duration,
            }
            | HitObject::HoldNote {
                start_time,
                duration,
                ..
            } => start_time + duration,
        }
    }

    /// Returns true if the object spans a time range rather than an instant.
    pub fn has_duration(&self) -> bool {
        !matches!(self, HitObject::Circle { .. })
    }

    /// The playfield column this object is pinned to, if any.
    ///
    /// Objects in different columns never interact.
    pub fn column(&self) -> Option<u32> {
        match *self {
            HitObject::HoldNote { column, .. } => Some(column),
            _ => None,
        }
    }

    /// Category tag for message grouping.
    pub fn kind(&self) -> HitObjectKind {
        match self {
            HitObject::Circle { .. } => HitObjectKind::Circle,
            HitObject::Slider { .. } => HitObjectKind::Slider,
            HitObject::Spinner { .. } => HitObjectKind::Spinner,
            HitObject::HoldNote { .. } => HitObjectKind::HoldNote,
        }
    }
}
