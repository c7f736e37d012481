// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! File watcher for live re-rendering of songs.
//!
//! Watches a song file (or a directory of songs) and reloads it whenever it
//! is saved, so a chart can be edited in any text editor while the rendered
//! view stays current.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::{FileFormat, SongFile};

/// Default quiet period before a modified file is reloaded
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Events emitted by the song watcher
#[derive(Debug, Clone)]
pub enum SongEvent {
    /// Song file was modified and successfully reloaded
    Reloaded(PathBuf, Box<SongFile>),
    /// Song file was modified but failed to load
    Error(String),
    /// A new file was created in the watch directory
    FileCreated(PathBuf),
    /// A file was deleted from the watch directory
    FileDeleted(PathBuf),
}

/// Song file watcher with debouncing and validation
pub struct SongWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<SongEvent>,
    watched_path: PathBuf,
}

impl SongWatcher {
    /// Create a new watcher for the specified path
    ///
    /// # Arguments
    /// * `path` - Song file or directory to watch
    /// * `debounce_ms` - Debounce duration in milliseconds (default: 500)
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let watched_path = path.as_ref().to_path_buf();
        let debounce_duration = Duration::from_millis(debounce_ms.unwrap_or(DEFAULT_DEBOUNCE_MS));

        let (event_tx, event_rx): (Sender<SongEvent>, Receiver<SongEvent>) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        let mode = if watched_path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&watched_path, mode)
            .map_err(|e| anyhow!("Failed to watch path {:?}: {}", watched_path, e))?;

        let root = watched_path.clone();
        std::thread::spawn(move || debounce_loop(root, notify_rx, event_tx, debounce_duration));

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&self) -> Option<SongEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending events
    pub fn recv_all(&self) -> Vec<SongEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next event is received
    pub fn recv(&self) -> Option<SongEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the path being watched
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

fn debounce_loop(
    root: PathBuf,
    notify_rx: Receiver<Event>,
    event_tx: Sender<SongEvent>,
    debounce: Duration,
) {
    let mut last_event_time: Option<Instant> = None;
    let mut pending_paths: Vec<PathBuf> = Vec::new();

    loop {
        match notify_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(event) => match event.kind {
                EventKind::Create(_) => {
                    for path in event.paths {
                        let _ = event_tx.send(SongEvent::FileCreated(path));
                    }
                }
                EventKind::Remove(_) => {
                    for path in event.paths {
                        let _ = event_tx.send(SongEvent::FileDeleted(path));
                    }
                }
                EventKind::Modify(_) => {
                    for path in event.paths {
                        if !pending_paths.contains(&path) {
                            pending_paths.push(path);
                        }
                    }
                    last_event_time = Some(Instant::now());
                }
                _ => {}
            },
            Err(mpsc::RecvTimeoutError::Timeout) => {
                let Some(last_time) = last_event_time else {
                    continue;
                };
                if last_time.elapsed() < debounce {
                    continue;
                }
                for path in pending_paths.drain(..) {
                    if !is_song_path(&path) && path != root {
                        continue;
                    }
                    let event = match validate_song(&path) {
                        Ok(song) => {
                            debug!(path = ?path, "song reloaded");
                            SongEvent::Reloaded(path, Box::new(song))
                        }
                        Err(e) => {
                            warn!(path = ?path, error = %e, "song reload failed");
                            SongEvent::Error(format!("Failed to load {:?}: {:#}", path, e))
                        }
                    };
                    if event_tx.send(event).is_err() {
                        return;
                    }
                }
                last_event_time = None;
            }
            // Watcher was dropped
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}

fn is_song_path(path: &Path) -> bool {
    FileFormat::from_path(path).is_ok()
}

/// Load a song and check its key without watching it
pub fn validate_song<P: AsRef<Path>>(path: P) -> Result<SongFile> {
    let song = SongFile::load(path)?;
    song.song.validate()?;
    Ok(song)
}
