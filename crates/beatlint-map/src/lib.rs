//! beatlint Beatmap Data Model
//!
//! This crate provides the parsed-beatmap types consumed by the beatlint
//! verification engine. A *beatmap* is one playable difficulty of a song;
//! sibling difficulties sharing the same song form a *set*.
//!
//! # Overview
//!
//! - [`HitObject`]: a placed, timed object within a beatmap. Instant objects
//!   occupy a single timestamp; duration objects span a derived time range.
//! - [`Beatmap`]: a difficulty's metadata plus its hit objects, in map order.
//! - [`MapResources`]: the per-difficulty resource handle (storyboard layers,
//!   background video, audio track).
//! - [`DifficultyRating`]: the ordinal difficulty tier of a beatmap.
//!
//! # Example
//!
//! ```
//! use beatlint_map::{Beatmap, DifficultyRating, HitObject};
//!
//! let beatmap = Beatmap::builder("Insane")
//!     .rating(DifficultyRating::Insane)
//!     .hit_object(HitObject::Circle { start_time: 1000.0 })
//!     .hit_object(HitObject::Slider {
//!         start_time: 1500.0,
//!         span_duration: 200.0,
//!         repeats: 1,
//!     })
//!     .build();
//!
//! assert_eq!(beatmap.hit_objects[1].end_time(), 1900.0);
//! assert!(beatmap.validate().is_ok());
//! ```
//!
//! # Modules
//!
//! - [`beatmap`]: Beatmap, metadata, and builder
//! - [`difficulty`]: Difficulty rating tiers
//! - [`error`]: Error types for map construction
//! - [`hitobject`]: Hit object variants and derived time ranges
//! - [`storyboard`]: Storyboard elements and the per-difficulty resource handle

pub mod beatmap;
pub mod difficulty;
pub mod error;
pub mod hitobject;
pub mod storyboard;

// Re-export commonly used types at the crate root
pub use beatmap::{Beatmap, BeatmapBuilder, BeatmapInfo};
pub use difficulty::DifficultyRating;
pub use error::MapError;
pub use hitobject::{HitObject, HitObjectKind};
pub use storyboard::{MapResources, Storyboard, StoryboardVideo};
