// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! chordsheet - ChordPro-style lyric sheets for worship setlists.
//!
//! The core is two pure functions over plain strings:
//!
//! ```
//! use chordsheet::{build_chordpro_view, transpose_lyrics, ViewLine};
//!
//! let sheet = transpose_lyrics("[C]Amazing [G]grace", Some("C"), "D");
//! assert_eq!(sheet, "[D]Amazing [A]grace");
//!
//! let view = build_chordpro_view(&sheet);
//! assert!(matches!(view[0], ViewLine::ChordLyrics { .. }));
//! ```
//!
//! Song and setlist files, the service view and the file watcher are built
//! on top of those.

pub mod config;
pub mod lyrics;
pub mod music;
pub mod setlist;

pub use lyrics::{build_chordpro_view, transpose_lyrics, SectionKind, ViewLine};
pub use music::{is_chord_token, transpose_chord, Note};
