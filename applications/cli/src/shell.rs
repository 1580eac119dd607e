/// Interactive shell over the playback engine
use crate::{
    commands::{parse_line, Command},
    config::ShellConfig,
};
use encore_playback::{PlaybackEngine, Song};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub struct Shell {
    engine: PlaybackEngine,
    prompt: String,
}

fn describe(song: &Song) -> String {
    format!("{} by {}", song.title, song.artist)
}

impl Shell {
    pub fn new(config: &ShellConfig) -> Self {
        let engine = if config.seed_catalog {
            PlaybackEngine::with_seed_catalog(config.engine.clone())
        } else {
            PlaybackEngine::new(config.engine.clone())
        };

        Self {
            engine,
            prompt: config.prompt.clone(),
        }
    }

    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write!(out, "{}", self.prompt)?;
            out.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                debug!("End of input");
                break;
            }

            match parse_line(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                Ok(Some(command)) => self.execute(command, &mut out)?,
                Err(e) => {
                    debug!(input = line.trim_end(), "Rejected command");
                    writeln!(out, "{}", e.to_string().trim_end())?;
                }
            }
        }

        Ok(())
    }

    /// Run one command against the engine and print the outcome
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        let engine = &mut self.engine;

        match command {
            Command::Add {
                title,
                artist,
                seconds,
            } => match engine.add_to_library(title, artist, seconds) {
                Ok(index) => writeln!(out, "Added song to library at index {}", index)?,
                Err(e) => writeln!(out, "{}", e)?,
            },

            Command::NewPlaylist { name } => {
                writeln!(out, "Created playlist '{}'", name)?;
                engine.create_playlist(name);
            }

            Command::AddToPlaylist { name, index } => {
                if engine.playlist(&name).is_none() {
                    writeln!(out, "Playlist not found: {}", name)?;
                } else if engine.add_song_to_playlist(&name, index) {
                    let song = &engine.library()[index];
                    writeln!(out, "Added {} to '{}'", describe(song), name)?;
                } else {
                    writeln!(out, "No song at index {}", index)?;
                }
            }

            Command::Filter { artist } => {
                let songs: Vec<&Song> = engine.filter_by_artist(&artist).collect();
                if songs.is_empty() {
                    writeln!(out, "No songs found by {}", artist)?;
                } else {
                    writeln!(out, "Songs by {}:", artist)?;
                    for song in songs {
                        writeln!(out, "- {} ({} sec)", song.title, song.duration_secs())?;
                    }
                }
            }

            Command::Shuffle { name } => {
                if engine.shuffle_playlist(&name) {
                    writeln!(out, "Shuffled playlist '{}'", name)?;
                } else {
                    writeln!(out, "Playlist not found: {}", name)?;
                }
            }

            Command::History => {
                let history = engine.history();
                if history.is_empty() {
                    writeln!(out, "No songs played recently")?;
                } else {
                    writeln!(out, "Recently played:")?;
                    for song in history {
                        writeln!(out, "- {}", describe(song))?;
                    }
                }
            }

            Command::Enqueue { index } => {
                if engine.enqueue(index) {
                    writeln!(out, "Queued {}", describe(&engine.library()[index]))?;
                } else {
                    writeln!(out, "No song at index {}", index)?;
                }
            }

            Command::Vote { index } => {
                if engine.vote(index) {
                    let song = &engine.library()[index];
                    writeln!(out, "Voted for {} ({} votes)", describe(song), song.votes)?;
                } else {
                    writeln!(out, "No song at index {}", index)?;
                }
            }

            Command::Next => match engine.play_next() {
                Some(song) => writeln!(out, "Now playing: {}", describe(&song))?,
                None => writeln!(out, "No song to play")?,
            },

            Command::Current { name } => match engine.playlist(&name) {
                None => writeln!(out, "Playlist not found: {}", name)?,
                Some(playlist) => match playlist.current_song() {
                    Some(song) => writeln!(out, "Current song: {}", describe(song))?,
                    None => writeln!(out, "Playlist '{}' is empty", name)?,
                },
            },

            Command::Prev { name } => match engine.play_previous(&name) {
                Ok(Some(song)) => writeln!(out, "Now playing: {}", describe(&song))?,
                Ok(None) => writeln!(out, "Playlist '{}' is empty", name)?,
                Err(e) => writeln!(out, "{}", e)?,
            },

            Command::Party => {
                if engine.toggle_party_mode() {
                    writeln!(out, "Party mode enabled!")?;
                } else {
                    writeln!(out, "Party mode disabled!")?;
                }
            }

            Command::Library => {
                writeln!(out, "Songs in library:")?;
                for (index, song) in engine.library().iter().enumerate() {
                    writeln!(
                        out,
                        "{}. {} ({} sec, {} votes)",
                        index,
                        describe(song),
                        song.duration_secs(),
                        song.votes
                    )?;
                }
            }

            Command::Playlists => {
                let active = engine.active_playlist();
                let mut any = false;
                for (name, playlist) in engine.playlists() {
                    any = true;
                    let marker = if active == Some(name) { " (active)" } else { "" };
                    writeln!(out, "Playlist: {}{}", name, marker)?;
                    for song in playlist {
                        writeln!(out, "  - {} ({} sec)", describe(song), song.duration_secs())?;
                    }
                }
                if !any {
                    writeln!(out, "No playlists available")?;
                }
            }

            Command::Play { name } => match engine.play_playlist(&name) {
                Ok(Some(song)) => writeln!(out, "Now playing: {}", describe(&song))?,
                Ok(None) => writeln!(out, "Playlist '{}' is empty", name)?,
                Err(e) => writeln!(out, "{}", e)?,
            },

            Command::Quit => {}
        }

        Ok(())
    }
}
