//! Background filesystem watcher that triggers re-indexing.

use std::path::Path;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WatcherError {
    #[error("failed to watch {path}: {source}")]
    Subscribe {
        path: String,
        #[source]
        source: notify::Error,
    },
}

/// Window over which a burst of events is coalesced into one batch.
const BATCH_WINDOW: Duration = Duration::from_millis(100);

/// Watches a vault root for note creation and deletion.
///
/// Modify events are deliberately ignored: the index cares about file
/// existence and names, and reacting to every save would rebuild the index on
/// each keystroke. The callback fires once per qualifying event batch, on a
/// dedicated background thread.
pub struct VaultWatcher {
    watcher: RecommendedWatcher,
    handle: JoinHandle<()>,
}

impl VaultWatcher {
    /// Start watching `path`, invoking `callback` on every create/delete
    /// batch under it.
    ///
    /// A subscription failure (e.g. a root that does not exist) is returned
    /// to the caller so configuration validation can surface it.
    pub fn start<F>(path: &Path, callback: F) -> Result<Self, WatcherError>
    where
        F: Fn() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(tx, Config::default()).map_err(|e| {
            WatcherError::Subscribe { path: path.display().to_string(), source: e }
        })?;
        watcher.watch(path, RecursiveMode::Recursive).map_err(|e| {
            WatcherError::Subscribe { path: path.display().to_string(), source: e }
        })?;

        let handle = thread::spawn(move || run_event_loop(&rx, &callback));

        Ok(Self { watcher, handle })
    }

    /// Stop watching and block until the background thread has exited.
    ///
    /// No callback fires after this returns, so a new watcher may be started
    /// for a different root without the two ever overlapping.
    pub fn stop(self) {
        let Self { watcher, handle } = self;
        // Dropping the notify handle disconnects the channel, which wakes the
        // event loop out of its blocking recv.
        drop(watcher);
        let _ = handle.join();
    }
}

/// Drain event batches until the channel disconnects.
fn run_event_loop<F: Fn()>(rx: &Receiver<notify::Result<Event>>, callback: &F) {
    while let Ok(first) = rx.recv() {
        let mut triggered = qualifies(&first);

        // Coalesce the burst that usually accompanies a create or delete.
        thread::sleep(BATCH_WINDOW);
        while let Ok(event) = rx.try_recv() {
            triggered = qualifies(&event) || triggered;
        }

        if triggered {
            callback();
        }
    }
}

/// Only create and delete events re-index; modify events never do.
fn qualifies(event: &notify::Result<Event>) -> bool {
    match event {
        Ok(event) => {
            matches!(event.kind, EventKind::Create(_) | EventKind::Remove(_))
        }
        Err(error) => {
            // Transient watch errors keep the loop alive.
            tracing::warn!("file watcher error: {error}");
            false
        }
    }
}
