//! Managed `.gitignore` block.
//!
//! gcp-encrypt owns the lines between `### GCP ENCRYPT BEGIN` and
//! `### GCP ENCRYPT END`. Everything else in the file belongs to the user and
//! is copied through untouched, in place.
//!
//! ```text
//! target/
//!
//! ### GCP ENCRYPT BEGIN
//! config/secrets.yml
//! .env
//! ### GCP ENCRYPT END
//! ```
//!
//! Only the first begin marker counts. A begin marker that is never closed
//! leaves the merge inside the block until end of input, so every line after
//! it is dropped and no block body is written. That input is not repaired.

use std::path::Path;
use tracing::debug;

use crate::core::constants::{GITIGNORE_BEGIN, GITIGNORE_END, GITIGNORE_FILE};
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Begin marker not seen yet.
    Before,
    /// Begin marker seen, end marker not seen yet.
    Inside,
    /// End marker seen.
    After,
}

/// Split into lines, dropping trailing empty lines.
///
/// `"a\nb\n"` yields `a`, `b` with no phantom empty last line.
fn lines(contents: &str) -> impl Iterator<Item = &str> {
    let trimmed = contents.trim_end_matches('\n');
    trimmed.split('\n').filter(move |_| !trimmed.is_empty())
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_body<S: AsRef<str>>(out: &mut String, files: &[S]) {
    for file in files {
        push_line(out, file.as_ref());
    }
}

/// Produce new `.gitignore` contents whose managed block lists exactly `files`.
///
/// Pure function. `files` are written in the given order without sorting or
/// deduplication. When there is no begin marker a new block is appended,
/// separated from existing content by one blank line. Applying the same
/// `files` twice gives the same result as applying them once.
pub fn merge<S: AsRef<str>>(existing: &str, files: &[S]) -> String {
    let mut out = String::with_capacity(existing.len() + 64);
    let mut phase = Phase::Before;

    for line in lines(existing) {
        match phase {
            Phase::Before => {
                push_line(&mut out, line);
                if line == GITIGNORE_BEGIN {
                    phase = Phase::Inside;
                }
            }
            Phase::Inside => {
                if line == GITIGNORE_END {
                    push_body(&mut out, files);
                    push_line(&mut out, line);
                    phase = Phase::After;
                }
            }
            Phase::After => push_line(&mut out, line),
        }
    }

    if phase == Phase::Before {
        if !out.is_empty() {
            out.push('\n');
        }
        push_line(&mut out, GITIGNORE_BEGIN);
        push_body(&mut out, files);
        push_line(&mut out, GITIGNORE_END);
    }

    out
}

/// Entries of the managed block, or `None` when there is no closed block.
pub fn managed_entries(contents: &str) -> Option<Vec<String>> {
    let mut body: Option<Vec<String>> = None;

    for line in lines(contents) {
        if let Some(entries) = body.as_mut() {
            if line == GITIGNORE_END {
                return body;
            }
            entries.push(line.to_string());
        } else if line == GITIGNORE_BEGIN {
            body = Some(Vec::new());
        }
    }

    None
}

/// Read `<root>/.gitignore`, treating a missing file as empty.
pub fn read(root: &Path) -> Result<String> {
    let path = root.join(GITIGNORE_FILE);
    if !path.exists() {
        return Ok(String::new());
    }
    Ok(std::fs::read_to_string(path)?)
}

/// Rewrite `<root>/.gitignore` with a managed block listing `files`.
///
/// The file is always written. Returns whether the contents changed.
pub fn update<S: AsRef<str>>(root: &Path, files: &[S]) -> Result<bool> {
    let path = root.join(GITIGNORE_FILE);
    let existing = read(root)?;
    let updated = merge(&existing, files);
    let changed = updated != existing;

    debug!(path = %path.display(), files = files.len(), changed, "writing gitignore");
    std::fs::write(&path, &updated)?;

    Ok(changed)
}
