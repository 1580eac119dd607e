//! Playback history tracking
//!
//! Keeps a bounded record of played songs, oldest first

use crate::types::{Song, DEFAULT_HISTORY_SIZE};
use std::collections::VecDeque;

/// Playback history with bounded size
///
/// Ring buffer: once full, every push discards the oldest entry.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = back)
    songs: VecDeque<Song>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            songs: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Record a played song
    ///
    /// If history is full, oldest song is discarded
    pub fn push(&mut self, song: Song) {
        if self.max_size == 0 {
            return;
        }
        if self.songs.len() >= self.max_size {
            self.songs.pop_front();
        }
        self.songs.push_back(song);
    }

    /// Most recently played song
    pub fn last(&self) -> Option<&Song> {
        self.songs.back()
    }

    /// All songs in play order (oldest first)
    pub fn get_all(&self) -> Vec<&Song> {
        self.songs.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}
