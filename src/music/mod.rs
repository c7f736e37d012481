// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory utilities for chordsheet.
//!
//! This module provides the pitch-class model used for keys and chord
//! roots, and the chord-symbol heuristics used over lyric text.

pub mod chord;
pub mod note;

pub use chord::{is_chord_token, transpose_chord, Chord};
pub use note::{Note, Semitones, UnknownNote};
