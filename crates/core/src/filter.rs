//! Filter-string derivation for query matching.

use crate::note::Note;

/// Which note fields contribute to the filter string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterToggles {
    /// Include the comma-joined `tags` front-matter value.
    pub filter_by_tags: bool,
    /// Include the full body text.
    pub filter_by_body: bool,
}

impl Default for FilterToggles {
    fn default() -> Self {
        Self { filter_by_tags: true, filter_by_body: false }
    }
}

/// Derive the lowercase haystack queries are matched against.
///
/// The base is the file name; tags and body are appended according to the
/// toggles. Pure: no I/O, no side effects.
pub fn filter_string(note: &Note, toggles: &FilterToggles) -> String {
    let mut filters = note.file_name();
    if toggles.filter_by_tags {
        if let Some(tags) = note.tags() {
            filters.push_str(&tags);
        }
    }
    if toggles.filter_by_body {
        filters.push_str(&note.body);
    }
    filters.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Frontmatter;
    use rstest::rstest;
    use std::path::PathBuf;

    fn note(yaml: &str, body: &str) -> Note {
        let metadata: Frontmatter = if yaml.is_empty() {
            Frontmatter::default()
        } else {
            serde_yaml::from_str(yaml).unwrap()
        };
        Note { path: PathBuf::from("/vault/A.md"), metadata, body: body.to_string() }
    }

    #[rstest]
    #[case(false, false, "a.md")]
    #[case(true, false, "a.mdwork,urgent")]
    #[case(false, true, "a.mdbody text")]
    #[case(true, true, "a.mdwork,urgentbody text")]
    fn toggles_select_fields(
        #[case] by_tags: bool,
        #[case] by_body: bool,
        #[case] expected: &str,
    ) {
        let note = note("tags: [Work, Urgent]\n", "Body Text");
        let toggles = FilterToggles { filter_by_tags: by_tags, filter_by_body: by_body };
        assert_eq!(filter_string(&note, &toggles), expected);
    }

    #[test]
    fn output_is_lowercase() {
        let note = note("tags: [WORK]\n", "SHOUTING body");
        let toggles = FilterToggles { filter_by_tags: true, filter_by_body: true };
        let filter = filter_string(&note, &toggles);
        assert_eq!(filter, filter.to_lowercase());
    }

    #[test]
    fn missing_tags_leaves_base_only() {
        let note = note("", "irrelevant");
        let toggles = FilterToggles::default();
        assert_eq!(filter_string(&note, &toggles), "a.md");
    }

    #[test]
    fn scalar_tag_appended() {
        let note = note("tags: Inbox\n", "");
        let toggles = FilterToggles::default();
        assert_eq!(filter_string(&note, &toggles), "a.mdinbox");
    }
}
