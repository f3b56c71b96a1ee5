//! Print a note URI (the copy-URI affordance, pipeable to a clipboard tool).

use vaultfind_core::config::Settings;
use vaultfind_core::uri;

use crate::UriArgs;

pub fn run(settings: &Settings, args: &UriArgs) {
    let vault = settings.vault_name();
    let uri = if args.new {
        uri::new_note_uri(&vault, &args.name)
    } else {
        uri::open_note_uri(&vault, &args.name)
    };
    println!("{uri}");
}
