use crate::model::Entry;
use std::time::{Duration, Instant};

/// How long a dissolve animates before the removal commits
pub const DISSOLVE_DELAY: Duration = Duration::from_millis(700);

/// What the dissolve animation covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DissolveScope {
    /// One row fades out
    Row {
        /// Flat display position of the row
        display_index: usize,
    },

    /// The entry is the last of its label, so the whole section fades out
    Section {
        /// Label of the dissolving section
        label: String,
    },
}

/// A removal that has been requested but not yet committed
#[derive(Debug, Clone)]
pub struct PendingRemoval {
    /// Store index resolved at request time
    pub store_index: usize,

    /// Entry captured at request time, used to revalidate the index
    /// when the commit finally runs
    pub entry: Entry,

    /// Row or whole-section animation
    pub scope: DissolveScope,

    requested_at: Instant,
}

impl PendingRemoval {
    /// Whether the dissolve deadline has passed
    pub fn due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.requested_at) >= DISSOLVE_DELAY
    }
}

/// Outcome of leaving the animating state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// Revalidated index to remove; `None` when the entry is already gone
    pub store_index: Option<usize>,
}

/// Delete sequencing state machine
///
/// Idle until a removal is requested, animating until the commit, then
/// idle again. At most one removal is ever pending; callers commit the
/// current one (via `poll` or `flush`) before requesting another.
#[derive(Debug, Default)]
pub struct DissolveSequencer {
    pending: Option<PendingRemoval>,
}

impl DissolveSequencer {
    /// Create an idle sequencer
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a removal is animating
    pub fn is_animating(&self) -> bool {
        self.pending.is_some()
    }

    /// The removal currently animating, if any
    pub fn pending(&self) -> Option<&PendingRemoval> {
        self.pending.as_ref()
    }

    /// Enter the animating state for one entry
    pub fn begin(
        &mut self,
        store_index: usize,
        entry: Entry,
        scope: DissolveScope,
        now: Instant,
    ) -> &PendingRemoval {
        self.pending.insert(PendingRemoval {
            store_index,
            entry,
            scope,
            requested_at: now,
        })
    }

    /// Commit the pending removal if its deadline has passed
    pub fn poll(&mut self, entries: &[Entry], now: Instant) -> Option<Commit> {
        if self.pending.as_ref().is_some_and(|p| p.due(now)) {
            self.take_commit(entries)
        } else {
            None
        }
    }

    /// Commit the pending removal immediately, deadline or not
    ///
    /// Mutations run this before touching the store so the resolved
    /// index can never go stale under a later commit.
    pub fn flush(&mut self, entries: &[Entry]) -> Option<Commit> {
        self.take_commit(entries)
    }

    fn take_commit(&mut self, entries: &[Entry]) -> Option<Commit> {
        let pending = self.pending.take()?;

        // The index resolved at request time is only trusted while the
        // entry at it is still the captured one; otherwise fall back to
        // the first identical entry, or drop the removal entirely.
        let store_index = if entries.get(pending.store_index) == Some(&pending.entry) {
            Some(pending.store_index)
        } else {
            entries.iter().position(|e| *e == pending.entry)
        };

        if store_index.is_none() {
            log::debug!("Pending removal target vanished, committing as no-op");
        }

        Some(Commit { store_index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(url: &str, label: &str) -> Entry {
        Entry::new(url, label)
    }

    #[test]
    fn test_idle_poll_returns_nothing() {
        let mut seq = DissolveSequencer::new();
        assert!(!seq.is_animating());
        assert_eq!(seq.poll(&[], Instant::now()), None);
    }

    #[test]
    fn test_not_due_before_delay() {
        let mut seq = DissolveSequencer::new();
        let entries = vec![entry("https://open.spotify.com/playlist/a", "X")];
        let t0 = Instant::now();

        seq.begin(0, entries[0].clone(), DissolveScope::Section { label: "X".into() }, t0);
        assert!(seq.is_animating());

        let early = t0 + Duration::from_millis(699);
        assert_eq!(seq.poll(&entries, early), None);
        assert!(seq.is_animating());
    }

    #[test]
    fn test_commits_at_deadline() {
        let mut seq = DissolveSequencer::new();
        let entries = vec![entry("https://open.spotify.com/playlist/a", "X")];
        let t0 = Instant::now();

        seq.begin(0, entries[0].clone(), DissolveScope::Section { label: "X".into() }, t0);

        let commit = seq.poll(&entries, t0 + DISSOLVE_DELAY).unwrap();
        assert_eq!(commit.store_index, Some(0));
        assert!(!seq.is_animating());
    }

    #[test]
    fn test_flush_commits_before_deadline() {
        let mut seq = DissolveSequencer::new();
        let entries = vec![
            entry("https://open.spotify.com/playlist/a", "X"),
            entry("https://open.spotify.com/playlist/b", "Y"),
        ];

        seq.begin(
            1,
            entries[1].clone(),
            DissolveScope::Row { display_index: 1 },
            Instant::now(),
        );

        let commit = seq.flush(&entries).unwrap();
        assert_eq!(commit.store_index, Some(1));
        assert!(!seq.is_animating());
    }

    #[test]
    fn test_commit_relocates_shifted_entry() {
        let mut seq = DissolveSequencer::new();
        let target = entry("https://open.spotify.com/playlist/b", "Y");
        let t0 = Instant::now();

        seq.begin(1, target.clone(), DissolveScope::Section { label: "Y".into() }, t0);

        // The entry ahead of the target was removed in the meantime.
        let shifted = vec![target];
        let commit = seq.poll(&shifted, t0 + DISSOLVE_DELAY).unwrap();
        assert_eq!(commit.store_index, Some(0));
    }

    #[test]
    fn test_commit_noop_when_entry_vanished() {
        let mut seq = DissolveSequencer::new();
        let target = entry("https://open.spotify.com/playlist/b", "Y");
        let t0 = Instant::now();

        seq.begin(0, target, DissolveScope::Section { label: "Y".into() }, t0);

        let remaining = vec![entry("https://open.spotify.com/playlist/a", "X")];
        let commit = seq.poll(&remaining, t0 + DISSOLVE_DELAY).unwrap();
        assert_eq!(commit.store_index, None);
        assert!(!seq.is_animating());
    }
}
