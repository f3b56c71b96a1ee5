//! Configuration validation.

use std::path::Path;

use vaultfind_core::config::Settings;

pub fn run(config_path: Option<&Path>, settings: &Settings) {
    match config_path {
        Some(p) => println!("config file   : {}", p.display()),
        None => println!("config file   : (default location)"),
    }
    println!("open override : {}", settings.open_override);
    println!("filter tags   : {}", settings.filter_by_tags);
    println!("filter body   : {}", settings.filter_by_body);
    println!("log level     : {}", settings.logging.level);

    if settings.vault_root.as_os_str().is_empty() {
        println!("vault root    : (not configured)");
        eprintln!("No vault root configured; every query will return no notes.");
        std::process::exit(1);
    }

    let exists = settings.vault_root.is_dir();
    println!(
        "vault root    : {} ({})",
        settings.vault_root.display(),
        if exists { "ok" } else { "missing" }
    );

    if !exists {
        eprintln!(
            "Vault root {} is not a directory; the index will stay empty.",
            settings.vault_root.display()
        );
        std::process::exit(1);
    }
}
