//! Error types for map construction.

use crate::hitobject::HitObjectKind;
use thiserror::Error;

/// Errors detected when validating a constructed beatmap.
///
/// The verification engine assumes its inputs already passed this layer, so
/// loaders are expected to call [`crate::Beatmap::validate`] before handing
/// maps over.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// A duration object whose derived end time precedes its start time.
    #[error("{kind} at {start_time} ms has a negative duration")]
    NegativeDuration {
        kind: HitObjectKind,
        start_time: f64,
    },

    /// A time value that is not a finite number.
    #[error("{kind} at {start_time} ms has a non-finite time value")]
    NonFiniteTime {
        kind: HitObjectKind,
        start_time: f64,
    },
}
