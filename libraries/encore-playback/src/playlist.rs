//! Circular playlist navigation
//!
//! A playlist is a doubly-linked list of songs with a movable cursor. Nodes live
//! in an arena and link to each other by index, so the list never needs `unsafe`
//! or reference counting. Songs are only ever appended, which keeps every index
//! stable for the lifetime of the playlist.
//!
//! ```text
//!   head                    current                  tail
//!    │                         │                       │
//!  [ A ] ⇄ [ B ] ⇄ [ C ] ⇄ [ D ] ⇄ [ E ]
//!    ▲                                                 │
//!    └──────────── advance() past tail wraps ──────────┘
//! ```

use crate::types::Song;

/// Index of a node inside the playlist arena
type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    song: Song,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

/// Doubly-linked, circularly navigable playlist
///
/// `current` is `None` only while the playlist is empty.
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    nodes: Vec<Node>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    current: Option<NodeId>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a song at the tail
    ///
    /// The first song appended becomes head, tail and current at once.
    pub fn append(&mut self, song: Song) {
        let id = self.nodes.len();
        self.nodes.push(Node {
            song,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(id),
            None => {
                self.head = Some(id);
                self.current = Some(id);
            }
        }
        self.tail = Some(id);
    }

    /// Move the cursor forward, wrapping from tail to head
    ///
    /// Returns `None` only when the playlist is empty.
    pub fn advance(&mut self) -> Option<&Song> {
        let current = self.current?;
        let next = self.nodes[current].next.or(self.head)?;
        self.current = Some(next);
        Some(&self.nodes[next].song)
    }

    /// Move the cursor backward, wrapping from head to tail
    ///
    /// Returns `None` only when the playlist is empty.
    pub fn retreat(&mut self) -> Option<&Song> {
        let current = self.current?;
        let prev = self.nodes[current].prev.or(self.tail)?;
        self.current = Some(prev);
        Some(&self.nodes[prev].song)
    }

    /// Song under the cursor
    pub fn current_song(&self) -> Option<&Song> {
        self.current.map(|id| &self.nodes[id].song)
    }

    /// First song
    pub fn head(&self) -> Option<&Song> {
        self.head.map(|id| &self.nodes[id].song)
    }

    /// Last song
    pub fn tail(&self) -> Option<&Song> {
        self.tail.map(|id| &self.nodes[id].song)
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate songs by following links (head to tail, or reversed)
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            playlist: self,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    /// Check every link invariant
    ///
    /// Walks the list in both directions and confirms that neighbours point back
    /// at each other, the ends are open and the cursor sits on a reachable node.
    pub fn links_consistent(&self) -> bool {
        if self.nodes.is_empty() {
            return self.head.is_none() && self.tail.is_none() && self.current.is_none();
        }

        let (Some(head), Some(tail), Some(current)) = (self.head, self.tail, self.current) else {
            return false;
        };
        if self.nodes[head].prev.is_some() || self.nodes[tail].next.is_some() {
            return false;
        }

        let mut visited = 0;
        let mut cursor_reachable = false;
        let mut node = Some(head);
        let mut last = None;
        while let Some(id) = node {
            if visited == self.nodes.len() {
                // cycle
                return false;
            }
            if self.nodes[id].prev != last {
                return false;
            }
            cursor_reachable |= id == current;
            visited += 1;
            last = Some(id);
            node = self.nodes[id].next;
        }

        last == Some(tail) && visited == self.nodes.len() && cursor_reachable
    }
}

impl FromIterator<Song> for Playlist {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut playlist = Playlist::new();
        for song in iter {
            playlist.append(song);
        }
        playlist
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Song;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Link-following iterator over a [`Playlist`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    playlist: &'a Playlist,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.playlist.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.song)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.playlist.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.song)
    }
}

impl ExactSizeIterator for Iter<'_> {}
