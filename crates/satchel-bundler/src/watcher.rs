//! Per-file watch subscriptions for the rebuild loop.
//!
//! A [`WatchSession`] owns every subscription of one generation: the
//! watcher of the previous pass is dropped wholesale when a new session
//! replaces it, so repeated rebuilds never accumulate watch handles.

use std::path::PathBuf;
use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::debug;

use crate::{Error, Result};

/// One generation of file watches.
pub struct WatchSession {
    _watcher: RecommendedWatcher,
    rx: Receiver<PathBuf>,
}

impl WatchSession {
    /// Subscribe to every file in `files`, non-recursively.
    ///
    /// Only content-affecting events (create/modify/remove) are forwarded;
    /// access events are discarded at the source.
    pub fn subscribe(files: &[PathBuf]) -> Result<Self> {
        let (tx, rx) = channel();

        let mut watcher = notify::recommended_watcher(move |outcome: notify::Result<Event>| {
            if let Ok(event) = outcome {
                if matches!(
                    event.kind,
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
                ) {
                    for path in event.paths {
                        let _ = tx.send(path);
                    }
                }
            }
        })?;

        for file in files {
            watcher.watch(file, RecursiveMode::NonRecursive)?;
        }
        debug!(files = files.len(), "watch session subscribed");

        Ok(Self {
            _watcher: watcher,
            rx,
        })
    }

    /// Block until a watched file changes.
    ///
    /// Events queued behind the first are drained, so a burst of rapid
    /// changes coalesces into a single rebuild.
    pub fn recv(&self) -> Result<PathBuf> {
        let first = self.rx.recv().map_err(|_| Error::WatchClosed)?;
        while self.rx.try_recv().is_ok() {}
        Ok(first)
    }

    /// Like [`recv`](Self::recv), giving up after `timeout`.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<Option<PathBuf>> {
        match self.rx.recv_timeout(timeout) {
            Ok(path) => {
                while self.rx.try_recv().is_ok() {}
                Ok(Some(path))
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => Ok(None),
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => Err(Error::WatchClosed),
        }
    }
}

impl std::fmt::Debug for WatchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchSession").finish_non_exhaustive()
    }
}
