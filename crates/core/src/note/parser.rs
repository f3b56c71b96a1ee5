//! Front-matter parsing for note files.

use std::path::Path;
use thiserror::Error;

use super::types::{Frontmatter, Note};

/// Signal that a single file was skipped during a scan.
///
/// Skips are never fatal: one warning is logged naming the file and the scan
/// moves on without it.
#[derive(Debug, Error)]
pub enum ParseSkip {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML frontmatter in {path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Parse one note file into a [`Note`].
///
/// A read failure (permissions, race-deleted file) or a front-matter block
/// that does not decode as YAML (e.g. an unrendered template left in it)
/// yields a [`ParseSkip`]; callers omit the file and continue.
pub fn parse_note(path: &Path) -> Result<Note, ParseSkip> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        tracing::warn!("Unable to read {} - skipping", display_name(path));
        ParseSkip::Io { path: path.display().to_string(), source }
    })?;

    let (metadata, body) = split_frontmatter(&content).map_err(|source| {
        tracing::warn!("Unable to parse {} - skipping", display_name(path));
        ParseSkip::Frontmatter { path: path.display().to_string(), source }
    })?;

    Ok(Note { path: path.to_path_buf(), metadata, body })
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Split a leading `---` delimited YAML block from the body.
///
/// Frontmatter is delimited by `---` at the start of the document:
/// ```markdown
/// ---
/// key: value
/// ---
/// # Document content
/// ```
///
/// A document without the opening delimiter, or without a closing one, is all
/// body with empty front matter.
fn split_frontmatter(content: &str) -> Result<(Frontmatter, String), serde_yaml::Error> {
    let trimmed = content.trim_start();
    if !trimmed.starts_with("---") {
        return Ok((Frontmatter::default(), content.to_string()));
    }

    let after_first = &trimmed[3..];

    // Skip the newline after the opening ---
    let after_newline = after_first
        .strip_prefix('\n')
        .or_else(|| after_first.strip_prefix("\r\n"))
        .unwrap_or(after_first);

    let Some((yaml_content, body)) = split_at_closing_delimiter(after_newline) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let metadata: Frontmatter = if yaml_content.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml_content.trim())?
    };

    Ok((metadata, body.to_string()))
}

/// Split at the first line that is exactly `---`, returning the text before
/// that line and the text after it (the body).
fn split_at_closing_delimiter(content: &str) -> Option<(&str, &str)> {
    let mut pos = 0;
    for line in content.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Some((&content[..pos], &content[pos + line.len()..]));
        }
        pos += line.len();
    }
    None
}
