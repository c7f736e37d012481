// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Lyric sheet processing.
//!
//! This module provides:
//! - Key transposition over annotated lyric text
//! - The ChordPro-style display model built from that text
//! - Section label classification

pub mod section;
pub mod transpose;
pub mod view;

pub use section::SectionKind;
pub use transpose::{transpose_line, transpose_lyrics};
pub use view::{build_chordpro_view, classify_line, split_chord_line, ViewLine};

/// Transpose a sheet and build its display model in one pass.
///
/// `from_key` is the key the sheet is written in; `to_key` the key to show.
pub fn render(text: &str, from_key: Option<&str>, to_key: &str) -> Vec<ViewLine> {
    build_chordpro_view(&transpose_lyrics(text, from_key, to_key))
}
