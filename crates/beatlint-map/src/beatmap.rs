//! Beatmap, metadata, and builder.

use crate::difficulty::DifficultyRating;
use crate::error::MapError;
use crate::hitobject::HitObject;
use serde::{Deserialize, Serialize};

/// Metadata identifying one difficulty within a set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeatmapInfo {
    /// Display name of the difficulty (e.g., "Insane").
    pub difficulty_name: String,

    /// Ordinal difficulty tier.
    pub rating: DifficultyRating,
}

/// One playable difficulty of a song.
///
/// Hit objects are stored in map order and treated as immutable for the
/// duration of a verification pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    /// Difficulty metadata.
    pub info: BeatmapInfo,

    /// Placed objects, in map order. No de-duplication is assumed.
    pub hit_objects: Vec<HitObject>,
}

impl Beatmap {
    /// Creates a new beatmap builder.
    pub fn builder(difficulty_name: impl Into<String>) -> BeatmapBuilder {
        BeatmapBuilder::new(difficulty_name)
    }

    /// Parses a beatmap from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the beatmap to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Checks structural invariants of every hit object.
    ///
    /// Each object must have finite times and `end_time >= start_time`.
    /// Zero-length durations are legal.
    pub fn validate(&self) -> Result<(), MapError> {
        for object in &self.hit_objects {
            let (start, end) = (object.start_time(), object.end_time());
            if !start.is_finite() || !end.is_finite() {
                return Err(MapError::NonFiniteTime {
                    kind: object.kind(),
                    start_time: start,
                });
            }
            if end < start {
                return Err(MapError::NegativeDuration {
                    kind: object.kind(),
                    start_time: start,
                });
            }
        }
        Ok(())
    }

    /// Returns the number of hit objects.
    pub fn object_count(&self) -> usize {
        self.hit_objects.len()
    }
}

/// Builder for constructing [`Beatmap`] instances.
#[derive(Debug, Clone)]
pub struct BeatmapBuilder {
    difficulty_name: String,
    rating: DifficultyRating,
    hit_objects: Vec<HitObject>,
}

impl BeatmapBuilder {
    /// Creates a new beatmap builder.
    pub fn new(difficulty_name: impl Into<String>) -> Self {
        Self {
            difficulty_name: difficulty_name.into(),
            rating: DifficultyRating::default(),
            hit_objects: Vec::new(),
        }
    }

    /// Sets the difficulty tier.
    pub fn rating(mut self, rating: DifficultyRating) -> Self {
        self.rating = rating;
        self
    }

    /// Appends a hit object.
    pub fn hit_object(mut self, object: HitObject) -> Self {
        self.hit_objects.push(object);
        self
    }

    /// Appends all hit objects from an iterator.
    pub fn hit_objects(mut self, objects: impl IntoIterator<Item = HitObject>) -> Self {
        self.hit_objects.extend(objects);
        self
    }

    /// Builds the beatmap.
    pub fn build(self) -> Beatmap {
        Beatmap {
            info: BeatmapInfo {
                difficulty_name: self.difficulty_name,
                rating: self.rating,
            },
            hit_objects: self.hit_objects,
        }
    }
}
