//! Shared result printing for the search commands.

use vaultfind_core::items::NoteItem;

/// Truncate a string to `max` characters with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}\u{2026}")
    }
}

/// Print items as an aligned title/path table.
pub fn print_table(items: &[NoteItem]) {
    if items.is_empty() {
        println!("(no results found)");
        return;
    }

    let title_width =
        items.iter().map(|i| i.title.chars().count()).max().unwrap_or(0).min(40);

    for item in items {
        println!(
            "{:<width$}  {}",
            truncate(&item.title, title_width),
            item.path.display(),
            width = title_width
        );
    }
}

/// Print items as JSON, exiting on serialization failure.
pub fn print_json<T: serde::Serialize>(items: &T) {
    match serde_json::to_string_pretty(items) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error serializing results: {e}");
            std::process::exit(1);
        }
    }
}

/// Print paths only, one per line.
pub fn print_quiet(items: &[NoteItem]) {
    for item in items {
        println!("{}", item.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_passthrough() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn truncate_long_adds_ellipsis() {
        assert_eq!(truncate("abcdefghij", 5), "abcd\u{2026}");
    }
}
