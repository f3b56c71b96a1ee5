//! Core library for vaultfind.
//!
//! Indexes a vault of markdown notes (YAML front matter + body), keeps the
//! index synchronized with note creation/deletion via a background filesystem
//! watcher, and answers case-insensitive substring queries either from the
//! cached index or from a fresh scan of the tree.

pub mod config;
pub mod filter;
pub mod index;
pub mod items;
pub mod launcher;
pub mod note;
pub mod service;
pub mod uri;
pub mod vault;
pub mod watcher;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
