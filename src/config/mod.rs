// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song and setlist files.
//!
//! This module provides data structures for loading and saving songs
//! (lyrics plus key metadata) and setlists (ordered song references with
//! per-service key overrides). Files are YAML or TOML, chosen by extension.

pub mod watcher;

pub use watcher::{validate_song, SongEvent, SongWatcher};

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::music::Note;

/// Problems with a song or setlist file beyond plain parse failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File extension is not .yaml, .yml or .toml
    #[error("unsupported file format: {0:?} (expected .yaml, .yml or .toml)")]
    UnsupportedFormat(PathBuf),
    /// A key field holds something that is not a note name
    #[error("invalid {field} {value:?}: expected a note name such as C, F# or Bb")]
    InvalidKey { field: &'static str, value: String },
}

/// On-disk format of a song or setlist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Toml,
}

impl FileFormat {
    /// Pick the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("toml") => Ok(FileFormat::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    fn parse<T: DeserializeOwned>(self, contents: &str) -> Result<T> {
        match self {
            FileFormat::Yaml => serde_yaml::from_str(contents).context("Failed to parse YAML"),
            FileFormat::Toml => toml::from_str(contents).context("Failed to parse TOML"),
        }
    }

    fn render<T: Serialize>(self, value: &T) -> Result<String> {
        match self {
            FileFormat::Yaml => serde_yaml::to_string(value).context("Failed to serialize YAML"),
            FileFormat::Toml => toml::to_string_pretty(value).context("Failed to serialize TOML"),
        }
    }
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let format = FileFormat::from_path(path)?;
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {:?}", path))?;
    format
        .parse(&contents)
        .with_context(|| format!("Failed to load {:?}", path))
}

fn save_file<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let format = FileFormat::from_path(path)?;
    let contents = format.render(value)?;
    fs::write(path, contents).with_context(|| format!("Failed to write file: {:?}", path))
}

/// A key field is valid when absent, blank, or a recognized note name
fn check_key(field: &'static str, value: Option<&str>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() && Note::parse(v).is_none() => Err(ConfigError::InvalidKey {
            field,
            value: v.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Root of a song file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongFile {
    /// Song metadata and lyrics
    pub song: SongConfig,
}

impl SongFile {
    /// Load a song from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref())
    }

    /// Parse a song from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        FileFormat::Yaml.parse(yaml)
    }

    /// Parse a song from TOML string
    pub fn from_toml(toml: &str) -> Result<Self> {
        FileFormat::Toml.parse(toml)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        FileFormat::Yaml.render(self)
    }

    /// Save the song, format chosen by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_file(self, path.as_ref())
    }
}

/// A song: lyrics with inline chords plus the key they are written in
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongConfig {
    /// Song title
    pub title: String,
    /// Key the lyrics are written in (e.g., "G", "Bb")
    #[serde(default)]
    pub original_key: Option<String>,
    /// Tempo as written on the chart ("72", "slow 6/8")
    #[serde(default)]
    pub tempo: Option<String>,
    /// Reference recording
    #[serde(default)]
    pub youtube_url: Option<String>,
    /// ChordPro-style lyric text
    #[serde(default)]
    pub lyrics: String,
}

impl Default for SongConfig {
    fn default() -> Self {
        Self {
            title: "Untitled".to_string(),
            original_key: None,
            tempo: None,
            youtube_url: None,
            lyrics: String::new(),
        }
    }
}

impl SongConfig {
    /// Check that the original key, if any, is a recognized note name
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_key("original_key", self.original_key.as_deref())
    }

    /// Original key, `None` when missing or blank
    pub fn key(&self) -> Option<&str> {
        self.original_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}

/// Root of a setlist file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetlistFile {
    /// Setlist metadata
    pub setlist: SetlistConfig,
    /// Songs in service order
    #[serde(default)]
    pub songs: Vec<SetlistEntry>,
}

impl SetlistFile {
    /// Load a setlist from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file(path.as_ref())
    }

    /// Parse a setlist from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        FileFormat::Yaml.parse(yaml)
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        FileFormat::Yaml.render(self)
    }

    /// Save the setlist, format chosen by extension
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_file(self, path.as_ref())
    }

    /// Check every key override
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.songs
            .iter()
            .try_for_each(|entry| check_key("key_override", entry.key_override.as_deref()))
    }
}

/// Setlist-level metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetlistConfig {
    /// Setlist name
    pub name: String,
    /// Service date, free-form ("2026-10-18")
    #[serde(default)]
    pub date: Option<String>,
}

/// One song in a setlist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SetlistEntry {
    /// Song file path (relative to the setlist file)
    pub file: String,
    /// Key to play this song in for this service
    #[serde(default)]
    pub key_override: Option<String>,
}
