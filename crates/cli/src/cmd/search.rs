//! Live search: re-scans the vault on every invocation.

use vaultfind_core::config::Settings;
use vaultfind_core::service::trigger_query;

use super::output;
use crate::SearchArgs;

pub fn run(settings: &Settings, args: &SearchArgs) {
    let items = trigger_query(settings, &args.query);

    if args.json {
        output::print_json(&items);
        return;
    }

    let flat: Vec<_> = items.into_iter().map(|s| s.item).collect();
    if args.quiet {
        output::print_quiet(&flat);
    } else {
        output::print_table(&flat);
    }
}
