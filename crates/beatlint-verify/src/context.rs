//! The immutable per-run context handed to every check.

use beatlint_map::{Beatmap, DifficultyRating, MapResources};
use thiserror::Error;

/// Errors detected when assembling a [`VerifierContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The sibling set contains no difficulties at all.
    #[error("the difficulty set is empty")]
    EmptySet,

    /// Beatmaps and resource handles are not positionally aligned.
    #[error("{beatmaps} beatmaps but {resources} resource handles")]
    MisalignedResources { beatmaps: usize, resources: usize },

    /// The current-difficulty index does not point into the set.
    #[error("current index {index} out of range for a set of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Everything a check needs to inspect one difficulty and its siblings.
///
/// Built once per verification pass and read-only for its duration. The
/// current difficulty is addressed by index into the sibling set, so "skip
/// self" comparisons use identity rather than structural equality - two
/// difficulties with coincidentally identical content stay distinct.
#[derive(Debug, Clone, Copy)]
pub struct VerifierContext<'a> {
    all_beatmaps: &'a [Beatmap],
    all_resources: &'a [MapResources],
    current_index: usize,
    rating: DifficultyRating,
}

impl<'a> VerifierContext<'a> {
    /// Assembles a context for the difficulty at `current_index`.
    ///
    /// `all_beatmaps[i]` and `all_resources[i]` must describe the same
    /// difficulty; the current difficulty is part of the set.
    pub fn new(
        current_index: usize,
        all_beatmaps: &'a [Beatmap],
        all_resources: &'a [MapResources],
        rating: DifficultyRating,
    ) -> Result<Self, ContextError> {
        if all_beatmaps.is_empty() {
            return Err(ContextError::EmptySet);
        }
        if all_beatmaps.len() != all_resources.len() {
            return Err(ContextError::MisalignedResources {
                beatmaps: all_beatmaps.len(),
                resources: all_resources.len(),
            });
        }
        if current_index >= all_beatmaps.len() {
            return Err(ContextError::IndexOutOfRange {
                index: current_index,
                len: all_beatmaps.len(),
            });
        }
        Ok(Self {
            all_beatmaps,
            all_resources,
            current_index,
            rating,
        })
    }

    /// Assembles a context for a lone difficulty with no siblings.
    pub fn single(
        beatmap: &'a Beatmap,
        resources: &'a MapResources,
        rating: DifficultyRating,
    ) -> Self {
        Self {
            all_beatmaps: std::slice::from_ref(beatmap),
            all_resources: std::slice::from_ref(resources),
            current_index: 0,
            rating,
        }
    }

    /// The difficulty under verification.
    pub fn beatmap(&self) -> &'a Beatmap {
        &self.all_beatmaps[self.current_index]
    }

    /// The current difficulty's resource handle.
    pub fn resources(&self) -> &'a MapResources {
        &self.all_resources[self.current_index]
    }

    /// The current difficulty's tier.
    pub fn rating(&self) -> DifficultyRating {
        self.rating
    }

    /// All difficulties of the set, current included, in set order.
    pub fn all_beatmaps(&self) -> &'a [Beatmap] {
        self.all_beatmaps
    }

    /// Resource handles positionally aligned with [`Self::all_beatmaps`].
    pub fn all_resources(&self) -> &'a [MapResources] {
        self.all_resources
    }

    /// Index of the current difficulty within the set.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Iterates over every *other* difficulty of the set, in set order.
    pub fn siblings(&self) -> impl Iterator<Item = (&'a Beatmap, &'a MapResources)> + '_ {
        let current = self.current_index;
        self.all_beatmaps
            .iter()
            .zip(self.all_resources.iter())
            .enumerate()
            .filter(move |(index, _)| *index != current)
            .map(|(_, pair)| pair)
    }
}
