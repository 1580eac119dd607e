//! Core types for the playback engine

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of songs kept in playback history
pub const DEFAULT_HISTORY_SIZE: usize = 100;

/// A song in the library, a playlist, a queue or history
///
/// Library songs are the canonical instances. Songs placed into a playlist are
/// independent copies made with [`Song::detached_copy`], so votes cast on one
/// never show up on the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Song duration (whole seconds, never zero)
    pub duration: Duration,

    /// Party-mode votes accumulated by this instance
    pub votes: u32,
}

impl Song {
    /// Create a song with no votes
    pub fn new(title: impl Into<String>, artist: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            duration,
            votes: 0,
        }
    }

    /// Copy title, artist and duration into a fresh instance with zero votes
    pub fn detached_copy(&self) -> Self {
        Self::new(self.title.clone(), self.artist.clone(), self.duration)
    }

    /// Duration in whole seconds
    pub fn duration_secs(&self) -> u64 {
        self.duration.as_secs()
    }

    /// Case-insensitive exact match on the artist name
    pub fn is_by(&self, artist: &str) -> bool {
        self.artist.to_lowercase() == artist.to_lowercase()
    }
}

/// Configuration for the playback engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum history size (default: 100)
    pub history_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.history_size, 100);
    }

    #[test]
    fn new_song_has_no_votes() {
        let song = Song::new("Levitating", "Dua Lipa", Duration::from_secs(203));
        assert_eq!(song.votes, 0);
        assert_eq!(song.duration_secs(), 203);
    }

    #[test]
    fn detached_copy_drops_votes() {
        let mut song = Song::new("Peaches", "Justin Bieber", Duration::from_secs(198));
        song.votes = 4;

        let copy = song.detached_copy();
        assert_eq!(copy.title, "Peaches");
        assert_eq!(copy.artist, "Justin Bieber");
        assert_eq!(copy.duration, song.duration);
        assert_eq!(copy.votes, 0);
    }

    #[test]
    fn artist_match_ignores_case() {
        let song = Song::new("Blinding Lights", "The Weeknd", Duration::from_secs(200));
        assert!(song.is_by("the weeknd"));
        assert!(song.is_by("THE WEEKND"));
        assert!(!song.is_by("Weeknd"));
    }
}
