//! Storyboard elements and the per-difficulty resource handle.

use serde::{Deserialize, Serialize};

/// A background video placed on the storyboard's video layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryboardVideo {
    /// Path of the video file, relative to the set directory.
    pub path: String,

    /// Playback start offset in milliseconds.
    pub start_time: f64,
}

impl StoryboardVideo {
    /// Creates a new storyboard video element.
    pub fn new(path: impl Into<String>, start_time: f64) -> Self {
        Self {
            path: path.into(),
            start_time,
        }
    }
}

/// The storyboard attached to one difficulty.
///
/// Only the video layer is modelled; other layers carry no verification
/// semantics yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Storyboard {
    /// Elements on the video layer, in storyboard order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub videos: Vec<StoryboardVideo>,
}

impl Storyboard {
    /// Creates an empty storyboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a video element to the video layer.
    pub fn add_video(&mut self, video: StoryboardVideo) {
        self.videos.push(video);
    }

    /// The difficulty's background video, if any.
    ///
    /// The first element on the video layer wins; later elements are
    /// ignored by resource checks.
    pub fn video(&self) -> Option<&StoryboardVideo> {
        self.videos.first()
    }
}

/// Per-difficulty resource handle.
///
/// Exposes the lookups that resource checks need: the storyboard's video
/// layer and the audio track. One handle exists per difficulty, positionally
/// aligned with its [`crate::Beatmap`] in the set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapResources {
    /// The difficulty's storyboard.
    pub storyboard: Storyboard,

    /// Path of the audio track, relative to the set directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
}

impl MapResources {
    /// Creates an empty resource handle (no storyboard elements, no audio).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resource handle whose storyboard carries a single video.
    pub fn with_video(path: impl Into<String>, start_time: f64) -> Self {
        let mut storyboard = Storyboard::new();
        storyboard.add_video(StoryboardVideo::new(path, start_time));
        Self {
            storyboard,
            audio_file: None,
        }
    }

    /// The difficulty's background video, if any.
    pub fn video(&self) -> Option<&StoryboardVideo> {
        self.storyboard.video()
    }
}
