//! Difficulty rating tiers.

use serde::{Deserialize, Serialize};

/// Ordinal difficulty tier of a beatmap.
///
/// Verification checks may scale thresholds by tier; the ordering is part of
/// the contract (`Easy < Normal < ... < ExpertPlus`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyRating {
    Easy,
    #[default]
    Normal,
    Hard,
    Insane,
    Expert,
    ExpertPlus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_ordering() {
        assert!(DifficultyRating::Easy < DifficultyRating::Normal);
        assert!(DifficultyRating::Expert < DifficultyRating::ExpertPlus);
    }
}
