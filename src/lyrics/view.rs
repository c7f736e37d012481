// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! ChordPro-style line model for display.
//!
//! Each input line becomes exactly one [`ViewLine`]. Lines are classified
//! independently, in this order:
//!
//! 1. blank            -> `Text("")`
//! 2. `{Label}`        -> `Section`
//! 3. `# ...`, `; ...` -> `Comment`
//! 4. only chords      -> `Chords` (raw line, columns intact)
//! 5. `[C]inline`      -> `ChordLyrics` (chord row over lyric row)
//! 6. anything else    -> `Text` (raw line)
//!
//! Transposition happens before this step; the builder never changes chord
//! names.

use serde::{Deserialize, Serialize};

use super::section::SectionKind;
use crate::music::is_chord_token;

/// One renderable line of a chord sheet.
///
/// Serialized with a `type` tag: `{"type":"chordLyrics","chords":..,"lyrics":..}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewLine {
    /// `{Chorus}` marker, label trimmed
    Section { label: String },
    /// `#` or `;` line with the marker removed
    Comment { text: String },
    /// Inline chords lifted onto their own row above the lyrics
    ChordLyrics { chords: String, lyrics: String },
    /// A line made only of chord symbols
    Chords { chords: String },
    /// Plain text, including blank lines
    Text { text: String },
}

impl ViewLine {
    /// Tag name as used in the serialized form
    pub fn kind(&self) -> &'static str {
        match self {
            ViewLine::Section { .. } => "section",
            ViewLine::Comment { .. } => "comment",
            ViewLine::ChordLyrics { .. } => "chordLyrics",
            ViewLine::Chords { .. } => "chords",
            ViewLine::Text { .. } => "text",
        }
    }

    /// Section kind for `Section` lines
    pub fn section_kind(&self) -> Option<SectionKind> {
        match self {
            ViewLine::Section { label } => Some(SectionKind::classify(label)),
            _ => None,
        }
    }

    fn text(text: impl Into<String>) -> Self {
        ViewLine::Text { text: text.into() }
    }
}

/// Build the display model for a whole sheet.
pub fn build_chordpro_view(text: &str) -> Vec<ViewLine> {
    text.split('\n')
        .map(|raw| classify_line(raw.strip_suffix('\r').unwrap_or(raw)))
        .collect()
}

/// Classify a single line (without its line terminator).
pub fn classify_line(line: &str) -> ViewLine {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return ViewLine::text("");
    }

    if let Some(inner) = trimmed.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
        return ViewLine::Section {
            label: inner.trim().to_string(),
        };
    }

    if let Some(rest) = trimmed.strip_prefix(['#', ';']) {
        return ViewLine::Comment {
            text: rest.trim_start().to_string(),
        };
    }

    if trimmed.split_whitespace().all(is_chord_token) {
        return ViewLine::Chords {
            chords: line.to_string(),
        };
    }

    if line.contains('[') && line.contains(']') {
        let (chords, lyrics) = split_chord_line(line);
        if !chords.trim().is_empty() {
            return ViewLine::ChordLyrics { chords, lyrics };
        }
    }

    ViewLine::text(line)
}

/// Lift inline `[chord]` groups out of a lyric line.
///
/// Returns `(chords, lyrics)`. Each chord starts at the lyric column where
/// its bracket opened, or directly after the previous chord when that one
/// still overhangs the column. Columns are counted in `char`s, and a tab in
/// the lyrics is mirrored as a tab in the chord row.
/// A `[` with no closing `]` stays in the lyrics as a literal character.
pub fn split_chord_line(line: &str) -> (String, String) {
    let mut chords = String::with_capacity(line.len());
    let mut lyrics = String::with_capacity(line.len());
    let mut chord_cols = 0usize;
    let mut lyric_cols = 0usize;
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        if c == '[' {
            let after = &rest[1..];
            if let Some(close) = after.find(']') {
                let label = after[..close].trim();
                while chord_cols < lyric_cols {
                    chords.push(' ');
                    chord_cols += 1;
                }
                chords.push_str(label);
                chord_cols += label.chars().count();
                rest = &after[close + 1..];
                continue;
            }
        }

        lyrics.push(c);
        lyric_cols += 1;
        if chord_cols < lyric_cols {
            chords.push(if c == '\t' { '\t' } else { ' ' });
            chord_cols += 1;
        }
        rest = &rest[c.len_utf8()..];
    }

    (chords, lyrics)
}
