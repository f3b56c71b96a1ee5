//! Get or set persisted settings.

use std::path::{Path, PathBuf};

use vaultfind_core::config::{ConfigLoader, Settings, reconfigure};

use crate::{ConfigAction, ConfigArgs};

pub fn run(config_path: Option<&Path>, settings: &Settings, args: &ConfigArgs) {
    match &args.action {
        ConfigAction::Get => print_settings(settings),
        ConfigAction::Set { key, value } => set(config_path, settings, key, value),
    }
}

fn print_settings(settings: &Settings) {
    println!("vault_root = {}", settings.vault_root.display());
    println!("open_override = {}", settings.open_override);
    println!("filter_by_tags = {}", settings.filter_by_tags);
    println!("filter_by_body = {}", settings.filter_by_body);
}

fn set(config_path: Option<&Path>, settings: &Settings, key: &str, value: &str) {
    let mut new = settings.clone();
    match key {
        "vault_root" => new.vault_root = PathBuf::from(value),
        "open_override" => new.open_override = value.to_string(),
        "filter_by_tags" => new.filter_by_tags = parse_bool(key, value),
        "filter_by_body" => new.filter_by_body = parse_bool(key, value),
        _ => {
            eprintln!(
                "Unknown key '{key}' (expected vault_root, open_override, \
                 filter_by_tags, or filter_by_body)"
            );
            std::process::exit(1);
        }
    }

    let effects = reconfigure(settings, &new);
    if effects.persist {
        if let Err(e) = ConfigLoader::save(&new, config_path) {
            eprintln!("Error saving config: {e}");
            std::process::exit(1);
        }
    }
    if effects.restart_watcher {
        println!("vault_root changed; running watchers pick it up on restart");
    }
}

fn parse_bool(key: &str, value: &str) -> bool {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => true,
        "false" | "0" | "no" | "off" => false,
        _ => {
            eprintln!("Invalid boolean '{value}' for {key}");
            std::process::exit(1);
        }
    }
}
