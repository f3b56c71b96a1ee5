//! Recursive vault scanner producing parsed notes.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::note::{Note, parse_note};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("vault root is not a directory: {0}")]
    NotADirectory(String),
}

/// Walks the vault tree and parses every markdown file it finds.
///
/// Each call to [`NoteScanner::scan`] re-walks the tree from scratch; no
/// state is cached between scans.
#[derive(Debug, Clone)]
pub struct NoteScanner {
    root: PathBuf,
}

impl NoteScanner {
    /// Create a scanner for the given vault root.
    pub fn new(root: &Path) -> Result<Self, ScanError> {
        let root = root
            .canonicalize()
            .map_err(|_| ScanError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.display().to_string()));
        }

        Ok(Self { root })
    }

    /// Lazily yield every parseable note under the root.
    ///
    /// Order is filesystem enumeration order. Files the parser skips are
    /// dropped here; the parser has already logged the diagnostic. Entries
    /// the walker cannot read are dropped the same way.
    pub fn scan(&self) -> impl Iterator<Item = Note> + '_ {
        WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(is_visible)
            .filter_map(|entry| {
                let entry = entry.ok()?;
                if !entry.file_type().is_file() || !is_markdown_file(entry.path()) {
                    return None;
                }
                parse_note(entry.path()).ok()
            })
    }

    /// The canonicalized vault root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Skip hidden files and directories, but never the root itself.
fn is_visible(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 {
        return true;
    }
    !entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).is_some_and(|e| e == "md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_vault() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();

        fs::write(root.join("note1.md"), "# Note 1").unwrap();
        fs::write(root.join("note2.md"), "---\ntags: [work]\n---\n# Note 2").unwrap();

        fs::create_dir(root.join("subdir")).unwrap();
        fs::write(root.join("subdir/note3.md"), "# Note 3").unwrap();

        fs::create_dir(root.join(".hidden")).unwrap();
        fs::write(root.join(".hidden/secret.md"), "# Secret").unwrap();

        fs::write(root.join("readme.txt"), "Not markdown").unwrap();

        dir
    }

    #[test]
    fn scan_finds_markdown_files() {
        let vault = create_test_vault();
        let scanner = NoteScanner::new(vault.path()).unwrap();
        let names: Vec<_> = scanner.scan().map(|n| n.file_name()).collect();

        assert_eq!(names.len(), 3);
        assert!(names.contains(&"note1.md".to_string()));
        assert!(names.contains(&"note2.md".to_string()));
        assert!(names.contains(&"note3.md".to_string()));
    }

    #[test]
    fn scan_skips_hidden_directories() {
        let vault = create_test_vault();
        let scanner = NoteScanner::new(vault.path()).unwrap();
        assert!(!scanner.scan().any(|n| n.file_name() == "secret.md"));
    }

    #[test]
    fn scan_skips_non_markdown() {
        let vault = create_test_vault();
        let scanner = NoteScanner::new(vault.path()).unwrap();
        assert!(!scanner.scan().any(|n| n.file_name() == "readme.txt"));
    }

    #[test]
    fn scan_omits_unparsable_notes() {
        let vault = create_test_vault();
        fs::write(vault.path().join("broken.md"), "---\ntags: [a, b\n---\nbody")
            .unwrap();

        let scanner = NoteScanner::new(vault.path()).unwrap();
        let names: Vec<_> = scanner.scan().map(|n| n.file_name()).collect();

        assert_eq!(names.len(), 3);
        assert!(!names.contains(&"broken.md".to_string()));
    }

    #[test]
    fn scan_is_restartable() {
        let vault = create_test_vault();
        let scanner = NoteScanner::new(vault.path()).unwrap();
        assert_eq!(scanner.scan().count(), scanner.scan().count());
    }

    #[test]
    fn missing_root_is_an_error() {
        let result = NoteScanner::new(Path::new("/nonexistent/path"));
        assert!(matches!(result.unwrap_err(), ScanError::MissingRoot(_)));
    }
}
