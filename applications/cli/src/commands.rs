/// Shell command grammar
///
/// One command per input line, parsed with clap. Arguments containing spaces
/// are wrapped in double quotes: `add "Save Your Tears" "The Weeknd" 215`.
use crate::error::{CliError, Result};
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a song to the library
    Add {
        title: String,
        artist: String,
        /// Duration in seconds
        seconds: u32,
    },
    /// Create an empty playlist (replaces one with the same name)
    NewPlaylist { name: String },
    /// Copy a library song into a playlist
    AddToPlaylist { name: String, index: usize },
    /// List library songs by an artist
    Filter { artist: String },
    /// Shuffle a playlist
    Shuffle { name: String },
    /// Show recently played songs
    History,
    /// Queue a library song to play next
    Enqueue { index: usize },
    /// Vote for a library song (party mode)
    Vote { index: usize },
    /// Play the next song
    Next,
    /// Show a playlist's current song
    Current { name: String },
    /// Play a playlist's previous song
    Prev { name: String },
    /// Toggle party mode
    Party,
    /// Show the song library
    Library,
    /// Show all playlists
    Playlists,
    /// Start playing a playlist
    Play { name: String },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into words, honouring double quotes
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_word = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut word));
                    in_word = false;
                }
            }
            c => {
                word.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(CliError::UnterminatedQuote(line.to_string()));
    }
    if in_word {
        words.push(word);
    }
    Ok(words)
}

/// Parse one input line
///
/// Blank lines yield `Ok(None)`. `help` and bad input come back as
/// [`CliError::Usage`] carrying clap's rendered text.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let words = split_words(line)?;
    if words.is_empty() {
        return Ok(None);
    }

    CommandLine::try_parse_from(words)
        .map(|parsed| Some(parsed.command))
        .map_err(|e| CliError::Usage(e.render().to_string()))
}
