//! Query matching over indexed and freshly scanned notes.

use crate::config::Settings;
use crate::filter::filter_string;
use crate::items::{NoteItem, ScoredItem};
use crate::vault::NoteScanner;

/// AND-match: every token must be a substring of the filter string.
///
/// An empty token list matches everything, which is what an empty indexed
/// query means.
pub(crate) fn matches_tokens(filter: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|token| filter.contains(token.as_str()))
}

/// Live query: re-scan the vault now and match against the latest state.
///
/// Unlike the indexed path, the whole trimmed query is matched as one
/// substring, not tokenized. This is the freshest possible view at the cost
/// of a full tree walk per query; matches carry the default zero score. An
/// unusable root simply yields no matches.
pub fn search_live(settings: &Settings, query: &str) -> Vec<ScoredItem> {
    let needle = query.trim().to_lowercase();
    let Ok(scanner) = NoteScanner::new(&settings.vault_root) else {
        return Vec::new();
    };

    let toggles = settings.toggles();
    scanner
        .scan()
        .filter(|note| filter_string(note, &toggles).contains(&needle))
        .map(|note| ScoredItem::unranked(NoteItem::from_note(&note, settings)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn tokens_all_required() {
        let tokens = vec!["work".to_string(), "urgent".to_string()];
        assert!(matches_tokens("a.md,work,urgent", &tokens));
        assert!(!matches_tokens("a.md,work", &tokens));
    }

    #[test]
    fn empty_tokens_match_everything() {
        assert!(matches_tokens("anything", &[]));
    }

    #[test]
    fn live_search_sees_fresh_files() {
        let vault = TempDir::new().unwrap();
        let settings =
            Settings { vault_root: vault.path().to_path_buf(), ..Default::default() };

        assert!(search_live(&settings, "fresh").is_empty());

        fs::write(vault.path().join("fresh.md"), "").unwrap();
        let found = search_live(&settings, "fresh");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].item.title, "fresh");
        assert_eq!(found[0].score, 0.0);
    }

    #[test]
    fn live_search_matches_whole_query_not_tokens() {
        let vault = TempDir::new().unwrap();
        fs::write(vault.path().join("work-notes.md"), "").unwrap();
        let settings =
            Settings { vault_root: vault.path().to_path_buf(), ..Default::default() };

        // Tokenized AND would match this; the live path needs the literal
        // substring and does not.
        assert!(search_live(&settings, "work md").is_empty());
        assert_eq!(search_live(&settings, "work-notes").len(), 1);
    }

    #[test]
    fn unusable_root_yields_no_matches() {
        let settings = Settings {
            vault_root: PathBuf::from("/nonexistent/vault"),
            ..Default::default()
        };
        assert!(search_live(&settings, "anything").is_empty());
    }
}
