//! Note data types.

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::HashMap;
use std::path::PathBuf;

/// Parsed YAML front matter from a note.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Fields as key-value pairs.
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

/// One parsed note file.
///
/// Constructed fresh on every scan and never mutated afterwards; the path is
/// the only identity a note carries across scans.
#[derive(Debug, Clone)]
pub struct Note {
    /// Absolute path to the note file.
    pub path: PathBuf,
    /// Front-matter fields (empty when the note has none).
    pub metadata: Frontmatter,
    /// Body text after the front-matter block.
    pub body: String,
}

impl Note {
    /// File name of the note, e.g. `meeting.md`.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Note title: the file name without its extension.
    pub fn title(&self) -> String {
        self.path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Normalized `tags` front-matter value.
    ///
    /// A sequence becomes its elements joined with commas, null or non-scalar
    /// elements contributing an empty string; a lone scalar becomes its string
    /// form. Any other shape yields `None` and is ignored for filtering.
    pub fn tags(&self) -> Option<String> {
        match self.metadata.fields.get("tags")? {
            Value::Sequence(elements) => Some(
                elements.iter().map(scalar_string).collect::<Vec<_>>().join(","),
            ),
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}
