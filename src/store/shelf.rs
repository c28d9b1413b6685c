use super::slot::StorageSlot;
use crate::model::Entry;
use anyhow::{Context, Result};

/// Ordered, persisted collection of shelf entries
///
/// Insertion order is the canonical order. Indices passed to `replace`
/// and `remove_at` refer to that order; out-of-bounds indices are
/// silently ignored.
pub struct ShelfStore<S: StorageSlot> {
    slot: S,
}

impl<S: StorageSlot> ShelfStore<S> {
    /// Create a store over the given slot
    pub fn new(slot: S) -> Self {
        Self { slot }
    }

    /// Load all entries in insertion order
    ///
    /// An absent or malformed blob loads as the empty sequence, never
    /// an error. Slot read failures still propagate.
    pub fn load(&self) -> Result<Vec<Entry>> {
        let Some(blob) = self.slot.read()? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&blob) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                log::debug!("Discarding malformed shelf blob: {}", e);
                Ok(Vec::new())
            }
        }
    }

    /// Append an entry at the end and persist
    pub fn append(&self, entry: Entry) -> Result<()> {
        let mut entries = self.load()?;
        entries.push(entry);
        self.persist(&entries)
    }

    /// Overwrite the entry at `index` and persist
    ///
    /// Out-of-bounds index is a no-op.
    pub fn replace(&self, index: usize, entry: Entry) -> Result<()> {
        let mut entries = self.load()?;
        match entries.get_mut(index) {
            Some(slot) => *slot = entry,
            None => {
                log::debug!("replace: index {} out of bounds, ignoring", index);
                return Ok(());
            }
        }
        self.persist(&entries)
    }

    /// Remove the entry at `index` and persist, keeping the relative
    /// order of all other entries
    ///
    /// Out-of-bounds index is a no-op.
    pub fn remove_at(&self, index: usize) -> Result<()> {
        let mut entries = self.load()?;
        if index >= entries.len() {
            log::debug!("remove_at: index {} out of bounds, ignoring", index);
            return Ok(());
        }
        entries.remove(index);
        self.persist(&entries)
    }

    /// Number of stored entries
    pub fn len(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Check if the shelf is empty
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    fn persist(&self, entries: &[Entry]) -> Result<()> {
        let blob = serde_json::to_string(entries).context("Failed to serialize shelf")?;
        self.slot.write(&blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySlot;

    fn entry(url: &str, label: &str) -> Entry {
        Entry::new(url, label)
    }

    #[test]
    fn test_empty_slot_loads_empty() {
        let store = ShelfStore::new(MemorySlot::new());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_blob_loads_empty() {
        let store = ShelfStore::new(MemorySlot::with_blob("not json at all {"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let store = ShelfStore::new(MemorySlot::new());
        store.append(entry("https://open.spotify.com/playlist/a1", "Chill")).unwrap();
        store.append(entry("https://open.spotify.com/playlist/b2", "Focus")).unwrap();
        store.append(entry("https://open.spotify.com/playlist/c3", "Chill")).unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].url, "https://open.spotify.com/playlist/a1");
        assert_eq!(entries[1].url, "https://open.spotify.com/playlist/b2");
        assert_eq!(entries[2].url, "https://open.spotify.com/playlist/c3");
    }

    #[test]
    fn test_replace_in_bounds() {
        let store = ShelfStore::new(MemorySlot::new());
        store.append(entry("https://open.spotify.com/playlist/a1", "Chill")).unwrap();
        store.append(entry("https://open.spotify.com/playlist/b2", "Focus")).unwrap();

        store
            .replace(1, entry("https://open.spotify.com/playlist/z9", "Night"))
            .unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries[0].label, "Chill");
        assert_eq!(entries[1].url, "https://open.spotify.com/playlist/z9");
        assert_eq!(entries[1].label, "Night");
    }

    #[test]
    fn test_replace_out_of_bounds_is_noop() {
        let store = ShelfStore::new(MemorySlot::new());
        store.append(entry("https://open.spotify.com/playlist/a1", "Chill")).unwrap();

        store
            .replace(5, entry("https://open.spotify.com/playlist/z9", "Night"))
            .unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Chill");
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let store = ShelfStore::new(MemorySlot::new());
        store.append(entry("https://open.spotify.com/playlist/a1", "Chill")).unwrap();
        store.append(entry("https://open.spotify.com/playlist/b2", "Focus")).unwrap();
        store.append(entry("https://open.spotify.com/playlist/c3", "Night")).unwrap();

        store.remove_at(1).unwrap();

        let entries = store.load().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Chill");
        assert_eq!(entries[1].label, "Night");
    }

    #[test]
    fn test_remove_out_of_bounds_is_noop() {
        let store = ShelfStore::new(MemorySlot::new());
        store.append(entry("https://open.spotify.com/playlist/a1", "Chill")).unwrap();

        store.remove_at(3).unwrap();

        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn test_loads_existing_json_blob() {
        let blob = r#"[{"url":"https://open.spotify.com/playlist/a1","label":"Chill"}]"#;
        let store = ShelfStore::new(MemorySlot::with_blob(blob));

        let entries = store.load().unwrap();
        assert_eq!(
            entries,
            vec![entry("https://open.spotify.com/playlist/a1", "Chill")]
        );
    }
}
