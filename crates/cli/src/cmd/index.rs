//! One-shot index rebuild.

use serde::Serialize;

use vaultfind_core::config::Settings;
use vaultfind_core::index::IndexStore;

use super::output;
use crate::OutputArgs;

#[derive(Debug, Serialize)]
struct IndexOutput {
    notes: usize,
    duration_ms: u64,
}

pub fn run(settings: &Settings, args: &OutputArgs) {
    let store = IndexStore::new();
    let stats = match store.rebuild(settings) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("Error building index: {e}");
            eprintln!("Hint: check the vault_root setting ('vfind doctor').");
            std::process::exit(1);
        }
    };

    if args.json {
        output::print_json(&IndexOutput {
            notes: stats.notes,
            duration_ms: stats.duration_ms,
        });
    } else {
        println!("Indexed {} notes in {} ms", stats.notes, stats.duration_ms);
    }
}
