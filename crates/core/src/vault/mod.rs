//! Vault tree scanning.

pub mod scanner;

pub use scanner::{NoteScanner, ScanError};
