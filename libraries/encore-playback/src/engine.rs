//! Playback engine - core orchestration
//!
//! Owns the library, named playlists, party queue, pending queue and history,
//! and decides which song plays next.

use crate::{
    catalog,
    error::{PlaybackError, Result},
    history::History,
    party_queue::PartyQueue,
    playlist::Playlist,
    shuffle::shuffle,
    types::{EngineConfig, Song},
};
use std::collections::{BTreeMap, VecDeque};
use std::time::Duration;
use tracing::{debug, info};

/// Playback state for a single caller
///
/// The library is append-only, so library indices held by the party queue and
/// the pending queue stay valid forever. Those two queues resolve indices to
/// the live library song; playlists hold their own detached copies.
///
/// Not internally synchronized: share it between callers behind one `Mutex`.
#[derive(Debug, Clone)]
pub struct PlaybackEngine {
    /// Catalog order = insertion order
    library: Vec<Song>,

    /// Playlists by name
    playlists: BTreeMap<String, Playlist>,

    /// Vote-ranked library indices (party mode)
    party_queue: PartyQueue,

    /// Library indices queued to play next (FIFO)
    pending: VecDeque<usize>,

    /// Recently played songs
    history: History,

    /// Party mode enabled
    party_mode: bool,

    /// Always a key of `playlists` when set
    active_playlist: Option<String>,
}

impl PlaybackEngine {
    /// Create an engine with an empty library
    pub fn new(config: EngineConfig) -> Self {
        Self {
            library: Vec::new(),
            playlists: BTreeMap::new(),
            party_queue: PartyQueue::new(),
            pending: VecDeque::new(),
            history: History::new(config.history_size),
            party_mode: false,
            active_playlist: None,
        }
    }

    /// Create an engine whose library starts with the built-in catalog
    pub fn with_seed_catalog(config: EngineConfig) -> Self {
        let mut engine = Self::new(config);
        engine.library = catalog::seed_songs();
        engine
    }

    // ===== Library =====

    /// Add a song to the library and return its index
    pub fn add_to_library(
        &mut self,
        title: impl Into<String>,
        artist: impl Into<String>,
        duration_secs: u32,
    ) -> Result<usize> {
        if duration_secs == 0 {
            return Err(PlaybackError::InvalidDuration(duration_secs));
        }

        let song = Song::new(title, artist, Duration::from_secs(duration_secs.into()));
        debug!(title = %song.title, artist = %song.artist, "Added song to library");
        self.library.push(song);
        Ok(self.library.len() - 1)
    }

    /// All library songs in catalog order
    pub fn library(&self) -> &[Song] {
        &self.library
    }

    /// Library song at `index`
    pub fn song(&self, index: usize) -> Option<&Song> {
        self.library.get(index)
    }

    /// Library songs whose artist matches, ignoring case
    pub fn filter_by_artist<'a>(
        &'a self,
        artist: &'a str,
    ) -> impl Iterator<Item = &'a Song> + 'a {
        self.library.iter().filter(move |song| song.is_by(artist))
    }

    // ===== Playlists =====

    /// Create an empty playlist, replacing any playlist with the same name
    pub fn create_playlist(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.playlists.insert(name.clone(), Playlist::new()).is_some() {
            debug!(playlist = %name, "Replaced existing playlist");
        }
    }

    /// Append a copy of a library song to a playlist
    ///
    /// Returns `false` without changing anything if the playlist or the index
    /// does not exist.
    pub fn add_song_to_playlist(&mut self, playlist_name: &str, index: usize) -> bool {
        let (Some(playlist), Some(song)) =
            (self.playlists.get_mut(playlist_name), self.library.get(index))
        else {
            debug!(playlist = playlist_name, index, "Ignored add to playlist");
            return false;
        };

        playlist.append(song.detached_copy());
        true
    }

    /// Rebuild a playlist in random order
    ///
    /// The rebuilt playlist holds fresh copies (votes reset) and its cursor
    /// starts at the new head. Returns `false` if the playlist does not exist.
    pub fn shuffle_playlist(&mut self, name: &str) -> bool {
        let Some(playlist) = self.playlists.get_mut(name) else {
            debug!(playlist = name, "Ignored shuffle of unknown playlist");
            return false;
        };

        let songs: Vec<Song> = playlist.iter().cloned().collect();
        *playlist = shuffle(songs).iter().map(Song::detached_copy).collect();
        info!(playlist = name, songs = playlist.len(), "Shuffled playlist");
        true
    }

    /// Playlist by name
    pub fn playlist(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(name)
    }

    /// All playlists, ordered by name
    pub fn playlists(&self) -> impl Iterator<Item = (&str, &Playlist)> {
        self.playlists
            .iter()
            .map(|(name, playlist)| (name.as_str(), playlist))
    }

    /// Make a playlist the fallback source for [`play_next`](Self::play_next)
    ///
    /// Leaves the active playlist unchanged if `name` is unknown.
    pub fn set_active_playlist(&mut self, name: &str) -> Result<()> {
        if !self.playlists.contains_key(name) {
            return Err(PlaybackError::PlaylistNotFound(name.to_string()));
        }

        self.active_playlist = Some(name.to_string());
        debug!(playlist = name, "Active playlist set");
        Ok(())
    }

    /// Name of the active playlist
    pub fn active_playlist(&self) -> Option<&str> {
        self.active_playlist.as_deref()
    }

    // ===== Queues =====

    /// Queue a library song to play before the active playlist
    ///
    /// Returns `false` if the index is out of bounds.
    pub fn enqueue(&mut self, index: usize) -> bool {
        if index >= self.library.len() {
            debug!(index, "Ignored enqueue of unknown song");
            return false;
        }

        self.pending.push_back(index);
        true
    }

    /// Songs waiting in the pending queue, next first
    pub fn pending(&self) -> impl Iterator<Item = &Song> {
        self.pending.iter().map(move |&index| &self.library[index])
    }

    /// Add one vote to a library song
    ///
    /// In party mode the song is offered to the party queue straight away.
    /// Otherwise the vote only counts once party mode is next enabled.
    /// Returns `false` if the index is out of bounds.
    pub fn vote(&mut self, index: usize) -> bool {
        let Some(song) = self.library.get_mut(index) else {
            debug!(index, "Ignored vote for unknown song");
            return false;
        };

        song.votes += 1;
        debug!(title = %song.title, votes = song.votes, "Vote registered");

        if self.party_mode {
            let library = &self.library;
            self.party_queue.offer(index, |i| library[i].votes);
        }
        true
    }

    /// Flip party mode and return the new state
    ///
    /// Enabling discards the old party queue and rebuilds it from every library
    /// song with at least one vote.
    pub fn toggle_party_mode(&mut self) -> bool {
        self.party_mode = !self.party_mode;

        if self.party_mode {
            let library = &self.library;
            self.party_queue = PartyQueue::new();
            for (index, song) in library.iter().enumerate() {
                if song.votes > 0 {
                    self.party_queue.offer(index, |i| library[i].votes);
                }
            }
            info!(queued = self.party_queue.len(), "Party mode enabled");
        } else {
            info!("Party mode disabled");
        }

        self.party_mode
    }

    /// Check if party mode is enabled
    pub fn is_party_mode(&self) -> bool {
        self.party_mode
    }

    /// Songs in the party queue, next first
    pub fn party_queue(&self) -> Vec<&Song> {
        self.party_queue
            .entries()
            .iter()
            .map(|&index| &self.library[index])
            .collect()
    }

    // ===== Playback =====

    /// Pick the next song and record it in history
    ///
    /// Sources in order of precedence:
    /// 1. Party queue (party mode only), highest votes first
    /// 2. Pending queue, oldest first
    /// 3. Active playlist, advancing its cursor (wraps at the end)
    pub fn play_next(&mut self) -> Option<Song> {
        let song = if self.party_mode && !self.party_queue.is_empty() {
            self.party_queue
                .poll()
                .map(|index| self.library[index].clone())
        } else if let Some(index) = self.pending.pop_front() {
            Some(self.library[index].clone())
        } else {
            self.active_playlist_mut()
                .filter(|playlist| playlist.current_song().is_some())
                .and_then(|playlist| playlist.advance().cloned())
        };

        match &song {
            Some(song) => self.record(song),
            None => debug!("No song to play"),
        }
        song
    }

    /// Step a playlist's cursor back and record the song in history
    ///
    /// Wraps from the first song to the last. Returns `Ok(None)` for an empty
    /// playlist.
    pub fn play_previous(&mut self, name: &str) -> Result<Option<Song>> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlaybackError::PlaylistNotFound(name.to_string()))?;

        let song = playlist.retreat().cloned();
        if let Some(song) = &song {
            self.record(song);
        }
        Ok(song)
    }

    /// Activate a playlist and record its current song in history
    ///
    /// The cursor does not move. Returns `Ok(None)` for an empty playlist.
    pub fn play_playlist(&mut self, name: &str) -> Result<Option<Song>> {
        self.set_active_playlist(name)?;

        let song = self
            .playlists
            .get(name)
            .and_then(Playlist::current_song)
            .cloned();
        if let Some(song) = &song {
            self.record(song);
        }
        Ok(song)
    }

    /// Played songs, oldest first
    pub fn history(&self) -> Vec<&Song> {
        self.history.get_all()
    }

    /// Most recently played song
    pub fn last_played(&self) -> Option<&Song> {
        self.history.last()
    }

    fn active_playlist_mut(&mut self) -> Option<&mut Playlist> {
        let name = self.active_playlist.as_deref()?;
        self.playlists.get_mut(name)
    }

    fn record(&mut self, song: &Song) {
        info!(title = %song.title, artist = %song.artist, "Now playing");
        self.history.push(song.clone());
    }
}

impl Default for PlaybackEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(titles: &[&str]) -> PlaybackEngine {
        let mut engine = PlaybackEngine::default();
        for title in titles {
            engine.add_to_library(*title, "Test Artist", 180).unwrap();
        }
        engine
    }

    fn title(song: Option<Song>) -> Option<String> {
        song.map(|s| s.title)
    }

    #[test]
    fn new_engine_is_idle() {
        let mut engine = PlaybackEngine::default();
        assert!(engine.library().is_empty());
        assert!(!engine.is_party_mode());
        assert!(engine.active_playlist().is_none());
        assert!(engine.play_next().is_none());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn seed_catalog_engine() {
        let engine = PlaybackEngine::with_seed_catalog(EngineConfig::default());
        assert_eq!(engine.library().len(), 10);
        assert_eq!(engine.song(0).unwrap().title, "Chalk Outlines");
    }

    #[test]
    fn add_to_library_returns_index() {
        let mut engine = PlaybackEngine::default();
        assert_eq!(engine.add_to_library("A", "X", 100), Ok(0));
        assert_eq!(engine.add_to_library("B", "Y", 120), Ok(1));
        assert_eq!(engine.song(1).unwrap().duration_secs(), 120);
    }

    #[test]
    fn zero_duration_rejected() {
        let mut engine = PlaybackEngine::default();
        assert_eq!(
            engine.add_to_library("A", "X", 0),
            Err(PlaybackError::InvalidDuration(0))
        );
        assert!(engine.library().is_empty());
    }

    #[test]
    fn filter_by_artist_ignores_case_and_keeps_order() {
        let engine = PlaybackEngine::with_seed_catalog(EngineConfig::default());
        let titles: Vec<&str> = engine
            .filter_by_artist("the WEEKND")
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, ["Blinding Lights", "Save Your Tears"]);
        assert_eq!(engine.filter_by_artist("Nobody").count(), 0);
    }

    #[test]
    fn add_song_to_playlist_ignores_bad_input() {
        let mut engine = engine_with(&["A"]);
        engine.create_playlist("P");

        assert!(!engine.add_song_to_playlist("missing", 0));
        assert!(!engine.add_song_to_playlist("P", 5));
        assert!(engine.playlist("P").unwrap().is_empty());

        assert!(engine.add_song_to_playlist("P", 0));
        assert_eq!(engine.playlist("P").unwrap().len(), 1);
    }

    #[test]
    fn playlist_copies_are_decoupled_from_library_votes() {
        let mut engine = engine_with(&["A"]);
        engine.vote(0);
        engine.create_playlist("P");
        engine.add_song_to_playlist("P", 0);
        engine.vote(0);

        assert_eq!(engine.song(0).unwrap().votes, 2);
        assert_eq!(engine.playlist("P").unwrap().head().unwrap().votes, 0);
    }

    #[test]
    fn create_playlist_overwrites() {
        let mut engine = engine_with(&["A"]);
        engine.create_playlist("P");
        engine.add_song_to_playlist("P", 0);
        engine.create_playlist("P");

        assert!(engine.playlist("P").unwrap().is_empty());
        assert_eq!(engine.playlists().count(), 1);
    }

    #[test]
    fn shuffle_playlist_keeps_songs_and_resets_cursor() {
        let mut engine = engine_with(&["A", "B", "C", "D"]);
        engine.create_playlist("P");
        for i in 0..4 {
            engine.add_song_to_playlist("P", i);
        }
        engine.set_active_playlist("P").unwrap();
        engine.play_next();

        assert!(engine.shuffle_playlist("P"));

        let playlist = engine.playlist("P").unwrap();
        let mut titles: Vec<&str> = playlist.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            playlist.current_song().unwrap().title,
            playlist.head().unwrap().title
        );
        assert!(playlist.links_consistent());
        titles.sort_unstable();
        assert_eq!(titles, ["A", "B", "C", "D"]);
    }

    #[test]
    fn shuffle_unknown_playlist_is_noop() {
        let mut engine = PlaybackEngine::default();
        assert!(!engine.shuffle_playlist("missing"));
        assert_eq!(engine.playlists().count(), 0);
    }

    #[test]
    fn enqueue_out_of_bounds_is_noop() {
        let mut engine = engine_with(&["A"]);
        assert!(!engine.enqueue(1));
        assert_eq!(engine.pending().count(), 0);
    }

    #[test]
    fn vote_out_of_bounds_is_noop() {
        let mut engine = engine_with(&["A"]);
        assert!(!engine.vote(3));
        assert_eq!(engine.song(0).unwrap().votes, 0);
    }

    #[test]
    fn vote_in_party_mode_offers_immediately() {
        let mut engine = engine_with(&["A", "B"]);
        engine.toggle_party_mode();
        assert!(engine.party_queue().is_empty());

        engine.vote(1);
        let queued: Vec<&str> = engine
            .party_queue()
            .into_iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(queued, ["B"]);
    }

    #[test]
    fn disabling_party_mode_falls_back_to_pending() {
        let mut engine = engine_with(&["A", "B"]);
        engine.vote(0);
        engine.toggle_party_mode();
        engine.enqueue(1);

        assert!(!engine.toggle_party_mode());
        assert_eq!(title(engine.play_next()), Some("B".to_string()));
    }

    #[test]
    fn reenabling_party_mode_rebuilds_queue() {
        let mut engine = engine_with(&["A", "B"]);
        engine.vote(0);
        engine.toggle_party_mode();
        engine.vote(0);
        assert_eq!(engine.party_queue().len(), 2);

        engine.toggle_party_mode();
        engine.toggle_party_mode();
        assert_eq!(engine.party_queue().len(), 1);
    }

    #[test]
    fn inactive_empty_playlist_plays_nothing() {
        let mut engine = PlaybackEngine::default();
        engine.create_playlist("P");
        engine.set_active_playlist("P").unwrap();

        assert!(engine.play_next().is_none());
        assert!(engine.history().is_empty());
    }

    #[test]
    fn play_next_wraps_active_playlist() {
        let mut engine = engine_with(&["A", "B"]);
        engine.create_playlist("P");
        engine.add_song_to_playlist("P", 0);
        engine.add_song_to_playlist("P", 1);
        engine.set_active_playlist("P").unwrap();

        assert_eq!(title(engine.play_next()), Some("B".to_string()));
        assert_eq!(title(engine.play_next()), Some("A".to_string()));
        assert_eq!(title(engine.play_next()), Some("B".to_string()));
    }

    #[test]
    fn play_previous_records_history() {
        let mut engine = engine_with(&["A", "B", "C"]);
        engine.create_playlist("P");
        for i in 0..3 {
            engine.add_song_to_playlist("P", i);
        }

        assert_eq!(
            engine.play_previous("P").map(title),
            Ok(Some("C".to_string()))
        );
        assert_eq!(engine.last_played().unwrap().title, "C");
        assert_eq!(
            engine.play_previous("missing"),
            Err(PlaybackError::PlaylistNotFound("missing".to_string()))
        );
    }

    #[test]
    fn play_previous_on_empty_playlist() {
        let mut engine = PlaybackEngine::default();
        engine.create_playlist("P");
        assert_eq!(engine.play_previous("P"), Ok(None));
        assert!(engine.history().is_empty());
    }

    #[test]
    fn play_playlist_activates_without_advancing() {
        let mut engine = engine_with(&["A", "B"]);
        engine.create_playlist("P");
        engine.add_song_to_playlist("P", 0);
        engine.add_song_to_playlist("P", 1);

        assert_eq!(engine.play_playlist("P").map(title), Ok(Some("A".to_string())));
        assert_eq!(engine.active_playlist(), Some("P"));
        assert_eq!(engine.history().len(), 1);

        // Next advances from the song that was just recorded
        assert_eq!(title(engine.play_next()), Some("B".to_string()));
    }

    #[test]
    fn play_playlist_unknown_keeps_active() {
        let mut engine = PlaybackEngine::default();
        engine.create_playlist("P");
        engine.set_active_playlist("P").unwrap();

        assert!(engine.play_playlist("missing").is_err());
        assert_eq!(engine.active_playlist(), Some("P"));
    }

    #[test]
    fn history_respects_configured_size() {
        let mut engine = PlaybackEngine::new(EngineConfig { history_size: 2 });
        engine.add_to_library("A", "X", 100).unwrap();
        for _ in 0..5 {
            engine.enqueue(0);
            engine.play_next();
        }
        assert_eq!(engine.history().len(), 2);
    }
}
