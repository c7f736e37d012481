// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Setlist service view.
//!
//! A setlist plays each song in its own key: the entry's `key_override`
//! when set, else the song's original key. This module resolves those keys
//! and renders every song of a setlist in order.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{SetlistFile, SongConfig};
use crate::lyrics::{self, ViewLine};

/// Resolve the key a song is shown in.
///
/// A non-blank override wins, then the original key, else empty.
pub fn effective_key(original_key: Option<&str>, key_override: Option<&str>) -> String {
    let non_blank = |k: &&str| !k.trim().is_empty();
    key_override
        .filter(non_blank)
        .or_else(|| original_key.filter(non_blank))
        .unwrap_or_default()
        .to_string()
}

/// A song transposed into its effective key and laid out for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSong {
    /// Song title
    pub title: String,
    /// Key the lyrics are written in
    pub original_key: Option<String>,
    /// Key the lines below are shown in (empty if unknown)
    pub effective_key: String,
    /// Tempo as written
    pub tempo: Option<String>,
    /// Display lines
    pub lines: Vec<ViewLine>,
}

/// Render one song, optionally into another key.
///
/// Lyrics are only transposed when both the original key and the effective
/// key are known; otherwise they are shown as written.
pub fn render_song(song: &SongConfig, key: Option<&str>) -> RenderedSong {
    let original = song.key();
    let effective = effective_key(original, key);

    let lines = match original {
        Some(from) if !effective.is_empty() => lyrics::render(&song.lyrics, Some(from), &effective),
        _ => lyrics::build_chordpro_view(&song.lyrics),
    };
    debug!(title = %song.title, from = ?original, to = %effective, lines = lines.len(), "rendered song");

    RenderedSong {
        title: song.title.clone(),
        original_key: song.original_key.clone(),
        effective_key: effective,
        tempo: song.tempo.clone(),
        lines,
    }
}

/// Every song of a setlist, rendered in service order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceView {
    /// Setlist name
    pub name: String,
    /// Service date
    pub date: Option<String>,
    /// Rendered songs
    pub songs: Vec<RenderedSong>,
}

impl ServiceView {
    /// Load a setlist file and each song it references.
    ///
    /// Song paths are resolved relative to the setlist file's directory.
    pub fn build<P: AsRef<Path>>(setlist_path: P) -> Result<Self> {
        let setlist_path = setlist_path.as_ref();
        let setlist = SetlistFile::load(setlist_path)?;
        setlist
            .validate()
            .with_context(|| format!("Invalid setlist {:?}", setlist_path))?;

        let base = setlist_path.parent().unwrap_or_else(|| Path::new("."));
        let songs = setlist
            .songs
            .iter()
            .map(|entry| {
                let path = base.join(&entry.file);
                crate::config::validate_song(&path)
                    .with_context(|| format!("Setlist entry {:?}", entry.file))
                    .map(|file| file.song)
            })
            .collect::<Result<Vec<_>>>()?;

        info!(setlist = %setlist.setlist.name, songs = songs.len(), "loaded setlist");
        Ok(Self::from_parts(&setlist, &songs))
    }

    /// Render already-loaded songs, paired with setlist entries by position.
    ///
    /// Pairs stop at the shorter of the two lists; a length mismatch is
    /// logged as a warning.
    pub fn from_parts(setlist: &SetlistFile, songs: &[SongConfig]) -> Self {
        if setlist.songs.len() != songs.len() {
            warn!(
                setlist = %setlist.setlist.name,
                entries = setlist.songs.len(),
                songs = songs.len(),
                "setlist entries and loaded songs differ in count"
            );
        }
        let songs = setlist
            .songs
            .iter()
            .zip(songs)
            .map(|(entry, song)| render_song(song, entry.key_override.as_deref()))
            .collect();

        Self {
            name: setlist.setlist.name.clone(),
            date: setlist.setlist.date.clone(),
            songs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SetlistConfig, SetlistEntry};

    fn song(title: &str, key: Option<&str>, lyrics: &str) -> SongConfig {
        SongConfig {
            title: title.to_string(),
            original_key: key.map(str::to_string),
            lyrics: lyrics.to_string(),
            ..SongConfig::default()
        }
    }

    #[test]
    fn test_effective_key() {
        assert_eq!(effective_key(Some("G"), Some("A")), "A");
        assert_eq!(effective_key(Some("G"), None), "G");
        assert_eq!(effective_key(Some("G"), Some("")), "G");
        assert_eq!(effective_key(None, Some("D")), "D");
        assert_eq!(effective_key(None, None), "");
        assert_eq!(effective_key(Some(" "), None), "");
    }

    #[test]
    fn test_render_song_with_override() {
        let rendered = render_song(&song("Grace", Some("G"), "[G]Grace"), Some("A"));
        assert_eq!(rendered.effective_key, "A");
        assert_eq!(
            rendered.lines,
            vec![ViewLine::ChordLyrics {
                chords: "A    ".to_string(),
                lyrics: "Grace".to_string()
            }]
        );
    }

    #[test]
    fn test_render_song_in_original_key() {
        let rendered = render_song(&song("Grace", Some("Bb"), "Bb  F"), None);
        assert_eq!(rendered.effective_key, "Bb");
        assert_eq!(
            rendered.lines,
            vec![ViewLine::Chords {
                chords: "Bb  F".to_string()
            }]
        );
    }

    #[test]
    fn test_render_song_without_original_key() {
        let rendered = render_song(&song("Grace", None, "G  C"), Some("A"));
        assert_eq!(rendered.effective_key, "A");
        assert_eq!(
            rendered.lines,
            vec![ViewLine::Chords {
                chords: "G  C".to_string()
            }]
        );
    }

    #[test]
    fn test_service_view_from_parts() {
        let setlist = SetlistFile {
            setlist: SetlistConfig {
                name: "Sunday".to_string(),
                date: Some("2026-10-18".to_string()),
            },
            songs: vec![
                SetlistEntry {
                    file: "one.yaml".to_string(),
                    key_override: Some("D".to_string()),
                },
                SetlistEntry {
                    file: "two.yaml".to_string(),
                    key_override: None,
                },
            ],
        };
        let songs = vec![song("One", Some("C"), "C G"), song("Two", Some("E"), "E B")];

        let view = ServiceView::from_parts(&setlist, &songs);
        assert_eq!(view.name, "Sunday");
        assert_eq!(view.songs.len(), 2);
        assert_eq!(view.songs[0].effective_key, "D");
        assert_eq!(
            view.songs[0].lines,
            vec![ViewLine::Chords {
                chords: "D A".to_string()
            }]
        );
        assert_eq!(view.songs[1].effective_key, "E");
        assert_eq!(
            view.songs[1].lines,
            vec![ViewLine::Chords {
                chords: "E B".to_string()
            }]
        );
    }

    #[test]
    fn test_service_view_mismatched_lengths_truncate() {
        let setlist = SetlistFile {
            setlist: SetlistConfig {
                name: "Short".to_string(),
                date: None,
            },
            songs: vec![
                SetlistEntry {
                    file: "one.yaml".to_string(),
                    key_override: None,
                },
                SetlistEntry {
                    file: "two.yaml".to_string(),
                    key_override: None,
                },
            ],
        };

        let view = ServiceView::from_parts(&setlist, &[song("One", Some("C"), "C G")]);
        assert_eq!(view.songs.len(), 1);
        assert_eq!(view.songs[0].title, "One");

        let extra = vec![song("A", None, ""), song("B", None, ""), song("C", None, "")];
        let view = ServiceView::from_parts(&setlist, &extra);
        assert_eq!(view.songs.len(), 2);
        assert_eq!(view.songs[1].title, "B");
    }
}
