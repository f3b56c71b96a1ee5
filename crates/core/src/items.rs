//! Display items produced by queries.

use std::path::PathBuf;

use serde::Serialize;

use crate::config::Settings;
use crate::note::Note;
use crate::uri;

/// An action the host can execute for an item.
///
/// Executing is the host's concern: `Open` is handed to the detached-process
/// launcher, `CopyUri` to whatever clipboard the host has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemAction {
    /// Launch the external opener with these arguments.
    Open { args: Vec<String> },
    /// Place this URI on the clipboard.
    CopyUri { uri: String },
}

/// Display representation of one note (or affordance) in query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteItem {
    pub title: String,
    pub subtext: String,
    pub path: PathBuf,
    pub actions: Vec<ItemAction>,
}

impl NoteItem {
    /// Build the display item for a parsed note.
    ///
    /// Subtext is the note path, with the comma-joined tags appended when
    /// present.
    pub fn from_note(note: &Note, settings: &Settings) -> Self {
        let subtext = match note.tags() {
            Some(tags) if !tags.is_empty() => {
                format!("{} - {}", note.path.display(), tags)
            }
            _ => note.path.display().to_string(),
        };

        let note_uri = uri::open_note_uri(&settings.vault_name(), &note.file_name());
        let mut args = settings.open_command();
        args.push(note_uri.clone());

        Self {
            title: note.title(),
            subtext,
            path: note.path.clone(),
            actions: vec![
                ItemAction::Open { args },
                ItemAction::CopyUri { uri: note_uri },
            ],
        }
    }
}

/// A query match with its rank.
///
/// Filtering is boolean, so every match carries the default zero score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
    #[serde(flatten)]
    pub item: NoteItem,
    pub score: f64,
}

impl ScoredItem {
    pub fn unranked(item: NoteItem) -> Self {
        Self { item, score: 0.0 }
    }
}
