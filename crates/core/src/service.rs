//! Vault search service: configuration, index, and watcher wiring.

use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::config::{ConfigError, ConfigLoader, Effects, Settings, reconfigure};
use crate::index::store::{IndexStore, RebuildError, RebuildStats};
use crate::index::search_live;
use crate::items::{ItemAction, NoteItem, ScoredItem};
use crate::uri;
use crate::watcher::VaultWatcher;

/// State shared between the query context and the watcher thread.
#[derive(Debug)]
struct ServiceState {
    store: IndexStore,
    settings: RwLock<Settings>,
}

impl ServiceState {
    fn settings(&self) -> Settings {
        self.settings
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    fn set_settings(&self, new: Settings) {
        if let Ok(mut guard) = self.settings.write() {
            *guard = new;
        }
    }

    /// Rebuild with the current settings, downgrading failure to a warning.
    /// A bad root leaves the prior snapshot and keeps the service usable.
    fn rebuild_logged(&self) {
        if let Err(error) = self.store.rebuild(&self.settings()) {
            tracing::warn!("index rebuild failed: {error}");
        }
    }
}

/// Drives the index, the watcher, and both query paths.
///
/// The two query methods are independent capabilities served by the same
/// engine: [`VaultService::quick_query`] answers from the cached index,
/// [`VaultService::handle_query`] re-scans the vault per query.
pub struct VaultService {
    state: Arc<ServiceState>,
    config_path: Option<PathBuf>,
    watcher: Option<VaultWatcher>,
}

impl VaultService {
    /// Start the service: initial rebuild plus the background watcher.
    ///
    /// An unconfigured or unusable root degrades to an empty index with no
    /// watcher; queries still answer (with the create affordance only).
    pub fn start(settings: Settings, config_path: Option<PathBuf>) -> Self {
        let state = Arc::new(ServiceState {
            store: IndexStore::new(),
            settings: RwLock::new(settings),
        });
        state.rebuild_logged();

        let mut service = Self { state, config_path, watcher: None };
        service.watcher = service.spawn_watcher();
        service
    }

    /// Apply a settings change, executing only the effects it requires.
    ///
    /// A root change stops the old watcher (joining its thread), rebuilds
    /// against the new root, and starts a fresh watcher; a toggle change only
    /// persists and affects future filter computations.
    pub fn reconfigure(&mut self, new: Settings) -> Result<Effects, ConfigError> {
        let old = self.state.settings();
        let effects = reconfigure(&old, &new);
        self.state.set_settings(new);

        if effects.persist {
            ConfigLoader::save(&self.state.settings(), self.config_path.as_deref())?;
        }

        if effects.restart_watcher {
            if let Some(watcher) = self.watcher.take() {
                watcher.stop();
            }
            self.state.rebuild_logged();
            self.watcher = self.spawn_watcher();
        }

        Ok(effects)
    }

    /// Fast path: match whitespace tokens against the cached index.
    pub fn quick_query(&self, query: &str) -> Vec<NoteItem> {
        self.state.store.search(query)
    }

    /// Full path: live scan plus the create-new-note affordance.
    pub fn handle_query(&self, query: &str) -> Vec<ScoredItem> {
        trigger_query(&self.state.settings(), query)
    }

    /// Force a rebuild outside the watcher, returning its stats.
    pub fn rebuild(&self) -> Result<RebuildStats, RebuildError> {
        self.state.store.rebuild(&self.state.settings())
    }

    /// Current settings snapshot.
    pub fn settings(&self) -> Settings {
        self.state.settings()
    }

    pub fn note_count(&self) -> usize {
        self.state.store.len()
    }

    /// Stop the watcher and join its thread; no callbacks fire afterwards.
    pub fn shutdown(&mut self) {
        if let Some(watcher) = self.watcher.take() {
            watcher.stop();
        }
    }

    fn spawn_watcher(&self) -> Option<VaultWatcher> {
        let settings = self.state.settings();
        if settings.vault_root.as_os_str().is_empty() {
            tracing::warn!("no vault root configured; file watching disabled");
            return None;
        }

        let state = Arc::clone(&self.state);
        match VaultWatcher::start(&settings.vault_root, move || state.rebuild_logged()) {
            Ok(watcher) => Some(watcher),
            Err(error) => {
                tracing::warn!("file watching disabled: {error}");
                None
            }
        }
    }
}

impl Drop for VaultService {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Evaluate a full (trigger) query against the live vault state.
///
/// An empty or whitespace query returns the placeholder prompt item alone.
/// Otherwise live matches come first, followed by one "Create new Note" item
/// carrying the literal query as the prospective name; the affordance is
/// always appended, even when a note of that name already exists.
pub fn trigger_query(settings: &Settings, query: &str) -> Vec<ScoredItem> {
    let stripped = query.trim();
    if stripped.is_empty() {
        return vec![ScoredItem::unranked(prompt_item(settings))];
    }

    let mut items = search_live(settings, query);
    items.push(ScoredItem::unranked(create_item(settings, stripped)));
    items
}

/// Shown when the query is empty: an invitation, not a result.
fn prompt_item(settings: &Settings) -> NoteItem {
    NoteItem {
        title: "Vault search".to_string(),
        subtext: "Search for a note in the vault".to_string(),
        path: settings.vault_root.clone(),
        actions: Vec::new(),
    }
}

/// The trailing create-new-note affordance.
fn create_item(settings: &Settings, name: &str) -> NoteItem {
    let new_uri = uri::new_note_uri(&settings.vault_name(), name);
    let mut args = settings.open_command();
    args.push(new_uri.clone());

    NoteItem {
        title: "Create new Note".to_string(),
        subtext: format!("{}/{}", settings.vault_root.display(), name),
        path: settings.vault_root.join(name),
        actions: vec![
            ItemAction::Open { args },
            ItemAction::CopyUri { uri: new_uri },
        ],
    }
}
