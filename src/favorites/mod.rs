//! Authoritative favorites set, observable as a latest-value broadcast.

pub mod persist;

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use crate::state::FavoritesSet;

/// Shared state behind every [`FavoritesStore`] clone.
#[derive(Debug)]
struct Inner {
    /// Latest-value channel carrying the set.
    tx: watch::Sender<FavoritesSet>,
    /// Preference file; `None` keeps favorites in memory only.
    prefs_path: Option<PathBuf>,
    /// Held across a change and its write so the file never lags the set.
    write_lock: Mutex<()>,
}

/// Single source of truth for "is favorited".
///
/// Clones share one set. Screens subscribe through [`FavoritesStore::get_favorites`]
/// and re-stamp their lists on every emission.
#[derive(Clone, Debug)]
pub struct FavoritesStore {
    /// Shared channel and persistence target.
    inner: Arc<Inner>,
}

impl FavoritesStore {
    /// Store without persistence, starting from `initial`.
    pub fn in_memory(initial: FavoritesSet) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner {
                tx,
                prefs_path: None,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// What: Store persisted to a preference file.
    ///
    /// Inputs:
    /// - `path`: Preference file; its `favorites` key seeds the set
    ///
    /// Output:
    /// - Store whose writes are saved back to `path`.
    pub fn open(path: PathBuf) -> Self {
        let initial = persist::load_favorites(&path);
        tracing::debug!(path = %path.display(), count = initial.len(), "[Favorites] Loaded favorites");
        let (tx, _rx) = watch::channel(initial);
        Self {
            inner: Arc::new(Inner {
                tx,
                prefs_path: Some(path),
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Receiver that sees the current set immediately and every change after.
    pub fn get_favorites(&self) -> watch::Receiver<FavoritesSet> {
        self.inner.tx.subscribe()
    }

    /// Copy of the current set.
    pub fn snapshot(&self) -> FavoritesSet {
        self.inner.tx.borrow().clone()
    }

    /// Whether `id` is currently favorited.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.inner.tx.borrow().contains(id)
    }

    /// What: Flip membership of `id`.
    ///
    /// Output:
    /// - `true` when `id` is a favorite after the call.
    ///
    /// Details:
    /// - The change and the file write happen under one lock, so concurrent
    ///   toggles of different ids all reach both the set and the file.
    pub fn toggle_favorite(&self, id: &str) -> bool {
        let mut now_favorite = false;
        self.update(|set| {
            now_favorite = if set.remove(id) {
                false
            } else {
                set.insert(id.to_string());
                true
            };
            true
        });
        tracing::debug!(id, favorite = now_favorite, "[Favorites] Toggled");
        now_favorite
    }

    /// Add `id`; no notification when it is already present.
    pub fn add_favorite(&self, id: &str) {
        self.update(|set| set.insert(id.to_string()));
    }

    /// Remove `id`; no notification when it is absent.
    pub fn remove_favorite(&self, id: &str) {
        self.update(|set| set.remove(id));
    }

    /// What: Apply `modify` and persist the result while holding the write lock.
    ///
    /// Inputs:
    /// - `modify`: Mutation returning whether the set changed
    ///
    /// Output:
    /// - Whether subscribers were notified.
    fn update(&self, modify: impl FnOnce(&mut FavoritesSet) -> bool) -> bool {
        let _guard = self.lock_writes();
        let changed = self.inner.tx.send_if_modified(modify);
        if changed {
            self.persist();
        }
        changed
    }

    /// Write lock; a panic in another writer leaves the set valid, so poisoning is ignored.
    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.inner
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Save the current set when backed by a file; failures are logged.
    ///
    /// Callers hold the write lock.
    fn persist(&self) {
        let Some(path) = self.inner.prefs_path.as_ref() else {
            return;
        };
        let ids = self.snapshot();
        match persist::save_favorites(path, &ids) {
            Ok(()) => tracing::trace!(path = %path.display(), count = ids.len(), "[Favorites] Persisted"),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "[Favorites] Failed to persist favorites");
            }
        }
    }
}

impl Default for FavoritesStore {
    fn default() -> Self {
        Self::in_memory(FavoritesSet::new())
    }
}
