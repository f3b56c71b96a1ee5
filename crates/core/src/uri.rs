//! Obsidian URI construction.

/// URI opening an existing note: `obsidian://open?vault=<V>&file=<name>`.
pub fn open_note_uri(vault: &str, file: &str) -> String {
    format!(
        "obsidian://open?vault={}&file={}",
        urlencoding::encode(vault),
        urlencoding::encode(file)
    )
}

/// URI creating a new note: `obsidian://new?vault=<V>&name=<name>`.
pub fn new_note_uri(vault: &str, name: &str) -> String {
    format!(
        "obsidian://new?vault={}&name={}",
        urlencoding::encode(vault),
        urlencoding::encode(name)
    )
}
