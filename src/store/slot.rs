use anyhow::{Context, Result};
use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;

/// Single key-value slot holding the serialized shelf
///
/// Storage slot trait - allows swapping the on-disk slot for an
/// in-memory one in tests.
pub trait StorageSlot {
    /// Read the raw blob, `None` when the slot has never been written
    fn read(&self) -> Result<Option<String>>;

    /// Overwrite the slot with a new blob
    fn write(&self, blob: &str) -> Result<()>;
}

/// File-backed slot used by the binary
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Create a slot at the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let blob = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read shelf file: {:?}", self.path))?;
        Ok(Some(blob))
    }

    fn write(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create shelf directory: {:?}", parent))?;
        }
        fs::write(&self.path, blob)
            .with_context(|| format!("Failed to write shelf file: {:?}", self.path))?;
        Ok(())
    }
}

/// In-memory slot for tests
#[derive(Debug, Default)]
pub struct MemorySlot {
    blob: RefCell<Option<String>>,
}

impl MemorySlot {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot pre-seeded with a blob
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write(&self, blob: &str) -> Result<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
