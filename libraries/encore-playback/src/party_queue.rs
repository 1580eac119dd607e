//! Vote-ranked party queue
//!
//! Holds library indices, not songs, so ranking always uses the live vote count
//! of the library song. Every offer re-sorts the whole queue with a stable sort,
//! which means entries with equal votes keep the order they had after the
//! previous offer.

use std::cmp::Reverse;

/// Queue of library indices ordered by descending vote count
#[derive(Debug, Clone, Default)]
pub struct PartyQueue {
    /// Front = highest votes
    entries: Vec<usize>,
}

impl PartyQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a library index, then re-rank every entry
    ///
    /// `votes_of` resolves the current vote count of a library index. The same
    /// index may be offered more than once and is then queued more than once.
    pub fn offer<F>(&mut self, index: usize, votes_of: F)
    where
        F: Fn(usize) -> u32,
    {
        self.entries.push(index);
        // sort_by_key is stable
        self.entries.sort_by_key(|&entry| Reverse(votes_of(entry)));
    }

    /// Remove and return the highest-ranked index
    pub fn poll(&mut self) -> Option<usize> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Highest-ranked index without removing it
    pub fn peek(&self) -> Option<usize> {
        self.entries.first().copied()
    }

    /// Entries in poll order
    pub fn entries(&self) -> &[usize] {
        &self.entries
    }

    /// Number of queued entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
