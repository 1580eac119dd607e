//! Encore - Playback State
//!
//! In-process playback-state engine for Encore.
//!
//! This crate provides:
//! - Song library (append-only catalog, case-insensitive artist filter)
//! - Named playlists with circular next/previous navigation
//! - Party mode: a vote-ranked queue of library songs
//! - Pending queue: songs explicitly queued to play next (FIFO)
//! - Playback history (bounded, oldest evicted first)
//! - Playlist shuffle (uniform random permutation)
//!
//! # Choosing the next song
//!
//! [`PlaybackEngine::play_next`] checks its sources in a fixed order:
//!
//! ```text
//! party queue (party mode only) → pending queue → active playlist → nothing
//! ```
//!
//! Every song it returns is also appended to history.
//!
//! # Example
//!
//! ```rust
//! use encore_playback::{EngineConfig, PlaybackEngine};
//!
//! let mut engine = PlaybackEngine::with_seed_catalog(EngineConfig::default());
//!
//! engine.create_playlist("Road Trip");
//! engine.add_song_to_playlist("Road Trip", 0);
//! engine.add_song_to_playlist("Road Trip", 1);
//! engine.set_active_playlist("Road Trip").unwrap();
//!
//! // Queued songs play before the playlist
//! engine.enqueue(2);
//! assert_eq!(engine.play_next().unwrap().title, "Levitating");
//!
//! // Then the playlist advances from its cursor
//! assert_eq!(engine.play_next().unwrap().title, "Blinding Lights");
//! assert_eq!(engine.history().len(), 2);
//! ```
//!
//! # Example: Party Mode
//!
//! ```rust
//! use encore_playback::PlaybackEngine;
//!
//! let mut engine = PlaybackEngine::default();
//! engine.add_to_library("Gasoline", "Connor Price", 240).unwrap();
//! engine.add_to_library("Lucid Dreams", "Juice WRLD", 239).unwrap();
//!
//! engine.vote(1);
//! engine.toggle_party_mode();
//!
//! assert_eq!(engine.play_next().unwrap().title, "Lucid Dreams");
//! ```
//!
//! The engine is single-threaded and never blocks. Nothing it does is fatal:
//! unknown names and out-of-range indices are ignored (the operation returns
//! `false`), and empty sources are reported as `None`.

pub mod catalog;
mod engine;
mod error;
mod history;
mod party_queue;
pub mod playlist;
pub mod shuffle;
pub mod types;

// Public exports
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use history::History;
pub use party_queue::PartyQueue;
pub use playlist::Playlist;
pub use types::{EngineConfig, Song, DEFAULT_HISTORY_SIZE};
