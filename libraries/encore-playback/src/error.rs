//! Error types for the playback engine

use thiserror::Error;

/// Playback errors
///
/// Most engine operations treat an unknown name or index as a no-op. Only the
/// operations whose caller needs to know about the failure return one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// No playlist is registered under this name
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Song duration must be a positive number of seconds
    #[error("Invalid duration: {0}s")]
    InvalidDuration(u32),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
