// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord symbol recognition and transposition.
//!
//! A chord symbol is a root (`A`-`G`, either case, optionally followed by
//! `b` or `#`) and a short alphanumeric quality suffix (`m`, `7`, `maj7`,
//! `sus4`). Recognition is a heuristic over lyric text, not a full chord
//! grammar: a capitalized word such as `Be` classifies as a chord, while
//! `Amazing` does not because its suffix is too long.

use std::fmt;

use super::note::Note;

/// Longest quality suffix still treated as part of a chord
pub const MAX_SUFFIX_LEN: usize = 4;

/// A chord symbol split into root spelling and suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chord<'a> {
    /// Root as written (e.g. "Bb", "c#")
    pub root: &'a str,
    /// Everything after the root, verbatim
    pub suffix: &'a str,
}

impl<'a> Chord<'a> {
    /// Split a token into root and suffix.
    ///
    /// Returns `None` unless the token starts with a note letter. The
    /// accidental is taken greedily, so `Bbm` splits as `Bb` + `m`.
    pub fn split(token: &'a str) -> Option<Self> {
        let bytes = token.as_bytes();
        let first = *bytes.first()?;
        if !matches!(first.to_ascii_uppercase(), b'A'..=b'G') {
            return None;
        }
        let root_len = match bytes.get(1) {
            Some(b'b') | Some(b'#') => 2,
            _ => 1,
        };
        let (root, suffix) = token.split_at(root_len);
        Some(Chord { root, suffix })
    }

    /// Normalized root, if the written root is a recognized spelling
    pub fn root_note(&self) -> Option<Note> {
        Note::parse(self.root)
    }
}

impl fmt::Display for Chord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root, self.suffix)
    }
}

/// Decide whether a whitespace-delimited token reads as a chord symbol.
///
/// Slash lists such as `G/B` must be split by the caller first; the `/`
/// makes the whole token fail the suffix check.
pub fn is_chord_token(token: &str) -> bool {
    let t = token.trim();
    if t.is_empty() {
        return false;
    }
    let Some(chord) = Chord::split(t) else {
        return false;
    };
    let suffix = chord.suffix;
    if suffix.chars().count() > MAX_SUFFIX_LEN {
        return false;
    }
    suffix.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Transpose one chord symbol from `from_key` to `to_key`.
///
/// Unrecognized keys or roots return the chord unchanged. The suffix is kept
/// byte for byte; the root is rewritten in its canonical sharp spelling, so
/// `Eb` comes back as `D#` even for a zero interval.
pub fn transpose_chord(chord: &str, from_key: &str, to_key: &str) -> String {
    let (Some(from), Some(to)) = (Note::parse(from_key), Note::parse(to_key)) else {
        return chord.to_string();
    };
    let Some(parsed) = Chord::split(chord) else {
        return chord.to_string();
    };
    let Some(root) = parsed.root_note() else {
        return chord.to_string();
    };

    let new_root = root.transpose(from.interval_to(to) as i8);
    format!("{}{}", new_root, parsed.suffix)
}
