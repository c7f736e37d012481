// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Pitch classes and key names.
//!
//! Keys and chord roots are both expressed as a [`Note`]. Parsing accepts the
//! twelve sharp spellings plus the five common flat aliases; everything is
//! displayed in the canonical sharp spelling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Semitone offset type
pub type Semitones = i8;

/// Note names (pitch classes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    C,
    Cs, // C# / Db
    D,
    Ds, // D# / Eb
    E,
    F,
    Fs, // F# / Gb
    G,
    Gs, // G# / Ab
    A,
    As, // A# / Bb
    B,
}

/// A key or root name that is not one of the twelve recognized spellings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized note name: {0:?}")]
pub struct UnknownNote(pub String);

impl Note {
    /// All notes in chromatic order
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::Cs,
        Note::D,
        Note::Ds,
        Note::E,
        Note::F,
        Note::Fs,
        Note::G,
        Note::Gs,
        Note::A,
        Note::As,
        Note::B,
    ];

    /// Get the pitch class (0-11) for this note
    pub fn pitch_class(self) -> u8 {
        self as u8
    }

    /// Get note from pitch class
    pub fn from_pitch_class(pc: u8) -> Self {
        Note::ALL[(pc % 12) as usize]
    }

    /// Parse a key or root name (e.g. "C", "c#", "Db", " bb ").
    ///
    /// Only the sharp spellings and the flats `Db Eb Gb Ab Bb` are
    /// recognized. `Cb`, `E#` and double accidentals are rejected.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_uppercase();
        match s.as_str() {
            "C" => Some(Note::C),
            "C#" | "DB" => Some(Note::Cs),
            "D" => Some(Note::D),
            "D#" | "EB" => Some(Note::Ds),
            "E" => Some(Note::E),
            "F" => Some(Note::F),
            "F#" | "GB" => Some(Note::Fs),
            "G" => Some(Note::G),
            "G#" | "AB" => Some(Note::Gs),
            "A" => Some(Note::A),
            "A#" | "BB" => Some(Note::As),
            "B" => Some(Note::B),
            _ => None,
        }
    }

    /// Canonical (sharp) spelling
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::Cs => "C#",
            Note::D => "D",
            Note::Ds => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::Fs => "F#",
            Note::G => "G",
            Note::Gs => "G#",
            Note::A => "A",
            Note::As => "A#",
            Note::B => "B",
        }
    }

    /// Transpose by semitones
    pub fn transpose(self, semitones: Semitones) -> Self {
        let new_pc = (self.pitch_class() as i16 + semitones as i16).rem_euclid(12) as u8;
        Note::from_pitch_class(new_pc)
    }

    /// Get interval in semitones to another note (ascending)
    pub fn interval_to(self, other: Note) -> u8 {
        (other.pitch_class() as i16 - self.pitch_class() as i16).rem_euclid(12) as u8
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Note {
    type Err = UnknownNote;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Note::parse(s).ok_or_else(|| UnknownNote(s.to_string()))
    }
}

impl Serialize for Note {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
