//! In-memory note index and query evaluation.
//!
//! The index maps every note in the vault to a precomputed lowercase filter
//! string and a display item. It is rebuilt wholesale on every watcher
//! trigger and replaced atomically, so readers always see a complete
//! snapshot. Queries either consult the index (fast path) or re-scan the
//! vault (live path).

pub mod search;
pub mod store;

pub use search::search_live;
pub use store::{IndexEntry, IndexStore, RebuildError, RebuildStats};
