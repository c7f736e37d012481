// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Key changes over whole lyric sheets.
//!
//! Two chord styles are handled line by line:
//! - inline groups, `[G]Praise the [C/E]Lord`, where each `/` segment is
//!   transposed on its own
//! - bare chord rows, `G      C    D`, where whitespace runs are kept so
//!   the chords stay over the same lyric columns
//!
//! Line structure is never changed: the output has exactly as many `\n`
//! separators as the input.

use tracing::debug;

use crate::music::{is_chord_token, transpose_chord, Note};

/// Transpose every chord in `text` from `from_key` to `to_key`.
///
/// Returns the text unchanged when there is no source key, when both keys
/// are the same string, or when either key is not a recognized note name.
pub fn transpose_lyrics(text: &str, from_key: Option<&str>, to_key: &str) -> String {
    let Some(from_key) = from_key.filter(|k| !k.trim().is_empty()) else {
        return text.to_string();
    };
    if from_key == to_key {
        return text.to_string();
    }
    if Note::parse(from_key).is_none() || Note::parse(to_key).is_none() {
        debug!(from_key, to_key, "unrecognized key, lyrics left as written");
        return text.to_string();
    }

    text.split('\n')
        .map(|line| transpose_line(line, from_key, to_key))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Transpose a single line in whichever chord style it uses
pub fn transpose_line(line: &str, from_key: &str, to_key: &str) -> String {
    if line.contains('[') && line.contains(']') {
        transpose_inline_groups(line, from_key, to_key)
    } else {
        transpose_chord_row(line, from_key, to_key)
    }
}

/// Rewrite each non-empty `[...]` group; the first `]` closes a group.
fn transpose_inline_groups(line: &str, from_key: &str, to_key: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    let mut rest = line;

    while let Some(open) = rest.find('[') {
        out.push_str(&rest[..open]);
        out.push('[');
        let after = &rest[open + 1..];
        match after.find(']') {
            Some(close) if close > 0 => {
                out.push_str(&transpose_slash_list(&after[..close], from_key, to_key));
                out.push(']');
                rest = &after[close + 1..];
            }
            // `[]` or no closing bracket: the `[` is plain text
            _ => rest = after,
        }
    }

    out.push_str(rest);
    out
}

/// `G/B` style group contents. Segments come back trimmed.
fn transpose_slash_list(inner: &str, from_key: &str, to_key: &str) -> String {
    inner
        .split('/')
        .map(|part| {
            let part = part.trim();
            if is_chord_token(part) {
                transpose_chord(part, from_key, to_key)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn transpose_chord_row(line: &str, from_key: &str, to_key: &str) -> String {
    let mut out = String::with_capacity(line.len() + 8);
    for run in whitespace_runs(line) {
        if is_chord_token(run) {
            out.push_str(&transpose_chord(run, from_key, to_key));
        } else {
            out.push_str(run);
        }
    }
    out
}

/// Split a line into alternating whitespace and non-whitespace runs.
/// Concatenating the runs gives back the line.
fn whitespace_runs(line: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut prev: Option<bool> = None;

    for (i, c) in line.char_indices() {
        let ws = c.is_whitespace();
        if prev.is_some_and(|p| p != ws) {
            runs.push(&line[start..i]);
            start = i;
        }
        prev = Some(ws);
    }
    if start < line.len() {
        runs.push(&line[start..]);
    }
    runs
}
