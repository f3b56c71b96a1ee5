//! Interactive watch mode: keep the index fresh, answer queries from stdin.

use std::io::BufRead;
use std::path::PathBuf;

use vaultfind_core::config::Settings;
use vaultfind_core::service::VaultService;

pub fn run(settings: &Settings, config_path: Option<PathBuf>) {
    let mut service = VaultService::start(settings.clone(), config_path);
    eprintln!(
        "watching {} ({} notes indexed); type a query, Ctrl-D to exit",
        settings.vault_root.display(),
        service.note_count()
    );

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(_) => break,
        };
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        let items = service.quick_query(query);
        if items.is_empty() {
            println!("(no results found)");
            continue;
        }
        for item in items {
            println!("{}", item.subtext);
        }
    }

    service.shutdown();
}
