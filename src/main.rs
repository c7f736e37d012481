// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{anyhow, Context, Result};
use chordsheet::config::{validate_song, SongEvent, SongWatcher};
use chordsheet::lyrics::transpose_lyrics;
use chordsheet::music::Note;
use chordsheet::setlist::{render_song, RenderedSong, ServiceView};
use chordsheet::ViewLine;
use std::env;
use std::fs;
use tracing::info;

fn print_usage() {
    println!("chordsheet - ChordPro lyric sheets and setlists");
    println!();
    println!("Usage: chordsheet [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --view <SONG> [KEY] [--json]     Render a song file, optionally in another key");
    println!("  --transpose <FILE> <FROM> <TO>   Transpose a plain lyrics file to stdout");
    println!("  --service <SETLIST> [--json]     Render every song of a setlist");
    println!("  --watch <SONG> [KEY]             Re-render a song each time it is saved");
    println!("  --check <SONG>                   Validate a song file");
    println!("  --keys                           List recognized keys");
    println!("  --help                           Show this help message");
    println!();
    println!("Set RUST_LOG=debug for diagnostic output.");
}

fn setup_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!("failed to initialise tracing: {err}"))
}

/// Split positional arguments from the `--json` flag
fn split_json_flag(args: &[String]) -> (Vec<&str>, bool) {
    let json = args.iter().any(|a| a == "--json");
    let positional = args
        .iter()
        .filter(|a| a.as_str() != "--json")
        .map(String::as_str)
        .collect();
    (positional, json)
}

fn print_lines(lines: &[ViewLine]) {
    for line in lines {
        match line {
            ViewLine::Section { label } => println!("[{}]", label),
            ViewLine::Comment { text } => println!("# {}", text),
            ViewLine::ChordLyrics { chords, lyrics } => {
                println!("{}", chords.trim_end());
                println!("{}", lyrics);
            }
            ViewLine::Chords { chords } => println!("{}", chords),
            ViewLine::Text { text } => println!("{}", text),
        }
    }
}

fn print_song(song: &RenderedSong) {
    println!("{}", song.title);
    let original = song.original_key.as_deref().unwrap_or("-");
    let tempo = song.tempo.as_deref().unwrap_or("-");
    if song.effective_key.is_empty() || song.effective_key == original {
        println!("Key: {} · Tempo: {}", original, tempo);
    } else {
        println!("Key: {} (original {}) · Tempo: {}", song.effective_key, original, tempo);
    }
    println!();
    print_lines(&song.lines);
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize view")?;
    println!("{}", json);
    Ok(())
}

fn view_song(path: &str, key: Option<&str>, json: bool) -> Result<()> {
    let file = validate_song(path)?;
    let rendered = render_song(&file.song, key);
    if json {
        print_json(&rendered)
    } else {
        print_song(&rendered);
        Ok(())
    }
}

fn transpose_file(path: &str, from: &str, to: &str) -> Result<()> {
    for key in [from, to] {
        key.parse::<Note>()?;
    }
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    print!("{}", transpose_lyrics(&text, Some(from), to));
    Ok(())
}

fn service(path: &str, json: bool) -> Result<()> {
    let view = ServiceView::build(path)?;
    if json {
        return print_json(&view);
    }

    println!("{}", view.name);
    if let Some(date) = &view.date {
        println!("{}", date);
    }
    for (i, song) in view.songs.iter().enumerate() {
        println!();
        println!("{}. ────────────────────────────────", i + 1);
        print_song(song);
    }
    Ok(())
}

fn watch(path: &str, key: Option<&str>) -> Result<()> {
    let file = validate_song(path)?;
    print_song(&render_song(&file.song, key));

    let watcher = SongWatcher::new(path, None)?;
    info!(path = %watcher.watched_path().display(), "watching for changes (press Ctrl+C to stop)");

    while let Some(event) = watcher.recv() {
        match event {
            SongEvent::Reloaded(_, file) => {
                println!();
                print_song(&render_song(&file.song, key));
            }
            SongEvent::Error(message) => eprintln!("Error: {}", message),
            SongEvent::FileCreated(_) | SongEvent::FileDeleted(_) => {}
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    setup_tracing()?;
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("chordsheet - ChordPro lyric sheets and setlists");
        println!("Run with --help for usage information");
        return Ok(());
    }

    let (rest, json) = split_json_flag(&args[2..]);

    match args[1].as_str() {
        "--view" => {
            let Some(path) = rest.first() else {
                eprintln!("Error: --view requires a song file");
                std::process::exit(1);
            };
            view_song(path, rest.get(1).copied(), json)?;
        }
        "--transpose" => {
            if rest.len() < 3 {
                eprintln!("Error: --transpose requires a file, a source key and a target key");
                std::process::exit(1);
            }
            transpose_file(rest[0], rest[1], rest[2])?;
        }
        "--service" => {
            let Some(path) = rest.first() else {
                eprintln!("Error: --service requires a setlist file");
                std::process::exit(1);
            };
            service(path, json)?;
        }
        "--watch" => {
            let Some(path) = rest.first() else {
                eprintln!("Error: --watch requires a song file");
                std::process::exit(1);
            };
            watch(path, rest.get(1).copied())?;
        }
        "--check" => {
            let Some(path) = rest.first() else {
                eprintln!("Error: --check requires a song file");
                std::process::exit(1);
            };
            let file = validate_song(path)?;
            println!("OK: {} ({} lines)", file.song.title, file.song.lyrics.lines().count());
        }
        "--keys" => {
            let names: Vec<&str> = Note::ALL.iter().map(|n| n.name()).collect();
            println!("{}", names.join(" "));
            println!("Flat spellings accepted: Db Eb Gb Ab Bb");
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
