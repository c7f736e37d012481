// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song section kinds, derived from `{Label}` markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Structural part of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Verse,
    Chorus,
    Bridge,
    Intro,
    Outro,
    PreChorus,
    /// Any label that matches none of the above
    Other,
}

impl SectionKind {
    /// Classify a section label by case-insensitive prefix.
    ///
    /// `Verse 2` is a verse, `CHORUS x2` a chorus.
    pub fn classify(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        if lower.starts_with("verse") {
            SectionKind::Verse
        } else if lower.starts_with("chorus") {
            SectionKind::Chorus
        } else if lower.starts_with("bridge") {
            SectionKind::Bridge
        } else if lower.starts_with("intro") {
            SectionKind::Intro
        } else if lower.starts_with("outro") {
            SectionKind::Outro
        } else if lower.starts_with("pre-chorus") {
            SectionKind::PreChorus
        } else {
            SectionKind::Other
        }
    }

    /// Get a human-readable name for this section kind
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Verse => "Verse",
            SectionKind::Chorus => "Chorus",
            SectionKind::Bridge => "Bridge",
            SectionKind::Intro => "Intro",
            SectionKind::Outro => "Outro",
            SectionKind::PreChorus => "Pre-Chorus",
            SectionKind::Other => "Other",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
