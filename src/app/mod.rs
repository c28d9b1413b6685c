//! Shelf application orchestration
//!
//! Every user action goes validate -> mutate store -> re-project. The
//! app owns the edit session and the dissolve sequencer, and serializes
//! mutations: a pending removal is flushed before any new mutation
//! touches the store, so a resolved index never goes stale under a
//! later commit.

mod dissolve;
mod session;

pub use dissolve::{Commit, DissolveScope, DissolveSequencer, PendingRemoval, DISSOLVE_DELAY};
pub use session::EditSession;

use crate::model::Entry;
use crate::store::{ShelfStore, StorageSlot};
use crate::validation::is_playlist_url;
use crate::view::{project, DisplayModel};
use std::time::Instant;
use thiserror::Error;

/// Errors surfaced to the user interface
#[derive(Debug, Error)]
pub enum ShelfError {
    /// The URL does not match the playlist URL pattern
    #[error("Please enter a valid Spotify playlist URL.")]
    InvalidUrl,

    /// A display position that resolves to no entry
    #[error("no entry at display position {0}")]
    Position(usize),

    /// Underlying storage failure
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Orchestrates the shelf: store, edit session, delete sequencing
pub struct App<S: StorageSlot> {
    store: ShelfStore<S>,
    session: EditSession,
    sequencer: DissolveSequencer,
}

impl<S: StorageSlot> App<S> {
    /// Create an app over a store
    pub fn new(store: ShelfStore<S>) -> Self {
        Self {
            store,
            session: EditSession::new(),
            sequencer: DissolveSequencer::new(),
        }
    }

    /// The underlying store
    pub fn store(&self) -> &ShelfStore<S> {
        &self.store
    }

    /// Rebuild the display model from persisted state
    pub fn view(&self) -> Result<DisplayModel, ShelfError> {
        Ok(project(&self.store.load()?))
    }

    /// Validate and append a new entry
    pub fn add(&mut self, url: &str, label: &str) -> Result<(), ShelfError> {
        if !is_playlist_url(url) {
            return Err(ShelfError::InvalidUrl);
        }
        self.flush_pending()?;
        self.store.append(Entry::new(url, label))?;
        log::info!("Saved playlist under label '{}'", label);
        Ok(())
    }

    /// Open an edit session on the entry at a display position
    ///
    /// Resolves the display position to the true store index once, at
    /// invocation time, and returns the current entry for prefill.
    pub fn begin_edit(&mut self, display_index: usize) -> Result<Entry, ShelfError> {
        self.flush_pending()?;
        let entries = self.store.load()?;
        let view = project(&entries);
        let store_index = view
            .resolve(display_index)
            .ok_or(ShelfError::Position(display_index))?;
        self.session.begin(store_index);
        Ok(entries[store_index].clone())
    }

    /// Validate and commit the open edit session
    ///
    /// An invalid URL aborts without touching the store and leaves the
    /// session open. A valid confirm replaces the entry (a stale
    /// out-of-bounds index no-ops) and closes the session either way.
    pub fn confirm_edit(&mut self, url: &str, label: &str) -> Result<(), ShelfError> {
        if !is_playlist_url(url) {
            return Err(ShelfError::InvalidUrl);
        }
        if let Some(store_index) = self.session.current() {
            self.store.replace(store_index, Entry::new(url, label))?;
            log::info!("Updated entry at index {}", store_index);
        }
        self.session.close();
        Ok(())
    }

    /// Close the edit session without mutating
    pub fn cancel_edit(&mut self) {
        self.session.close();
    }

    /// Store index of the open edit session, if any
    pub fn editing(&self) -> Option<usize> {
        self.session.current()
    }

    /// Request removal of the entry at a display position
    ///
    /// Resolves the true store index, decides whether the whole section
    /// dissolves (the entry is the last one carrying its label) or just
    /// the row, and starts the animation clock. Any previously pending
    /// removal commits first; an open edit session is abandoned.
    pub fn request_delete(
        &mut self,
        display_index: usize,
        now: Instant,
    ) -> Result<PendingRemoval, ShelfError> {
        self.flush_pending()?;
        self.session.close();

        let entries = self.store.load()?;
        let view = project(&entries);
        let store_index = view
            .resolve(display_index)
            .ok_or(ShelfError::Position(display_index))?;
        let entry = entries[store_index].clone();

        let label_count = entries.iter().filter(|e| e.label == entry.label).count();
        let scope = if label_count == 1 {
            DissolveScope::Section {
                label: entry.label.clone(),
            }
        } else {
            DissolveScope::Row { display_index }
        };

        log::debug!(
            "Dissolve requested for store index {} ({:?})",
            store_index,
            scope
        );
        Ok(self.sequencer.begin(store_index, entry, scope, now).clone())
    }

    /// Commit the pending removal once its deadline has passed
    ///
    /// Returns `true` when the animation finished and the display must
    /// be rebuilt.
    pub fn poll_delete(&mut self, now: Instant) -> Result<bool, ShelfError> {
        let entries = self.store.load()?;
        match self.sequencer.poll(&entries, now) {
            Some(commit) => {
                self.apply_commit(commit)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// The removal currently animating, if any
    pub fn pending_removal(&self) -> Option<&PendingRemoval> {
        self.sequencer.pending()
    }

    fn flush_pending(&mut self) -> Result<(), ShelfError> {
        if !self.sequencer.is_animating() {
            return Ok(());
        }
        let entries = self.store.load()?;
        if let Some(commit) = self.sequencer.flush(&entries) {
            log::debug!("Flushing pending removal ahead of a new mutation");
            self.apply_commit(commit)?;
        }
        Ok(())
    }

    fn apply_commit(&mut self, commit: Commit) -> Result<(), ShelfError> {
        if let Some(store_index) = commit.store_index {
            self.store.remove_at(store_index)?;
            log::info!("Removed entry at index {}", store_index);
        }
        Ok(())
    }
}
