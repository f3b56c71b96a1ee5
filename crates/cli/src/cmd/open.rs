//! Open a note through the external opener.

use vaultfind_core::config::Settings;
use vaultfind_core::{launcher, uri};

use crate::NameArgs;

pub fn run(settings: &Settings, args: &NameArgs) {
    let note_uri = uri::open_note_uri(&settings.vault_name(), &args.name);
    let mut command = settings.open_command();
    command.push(note_uri);

    if let Err(e) = launcher::run_detached(&command) {
        eprintln!("Error launching '{}': {e}", command.join(" "));
        std::process::exit(1);
    }
}
