//! Indexed search: builds the index once, then matches query tokens.

use vaultfind_core::config::Settings;
use vaultfind_core::index::IndexStore;

use super::output;
use crate::SearchArgs;

pub fn run(settings: &Settings, args: &SearchArgs) {
    let store = IndexStore::new();
    if let Err(e) = store.rebuild(settings) {
        eprintln!("Error building index: {e}");
        eprintln!("Hint: check the vault_root setting ('vfind doctor').");
        std::process::exit(1);
    }

    let items = store.search(&args.query);

    if args.json {
        output::print_json(&items);
    } else if args.quiet {
        output::print_quiet(&items);
    } else {
        output::print_table(&items);
    }
}
