//! Persisted shelf storage
//!
//! The shelf is one ordered sequence of entries serialized as a single
//! JSON blob into a storage slot. Every mutation is a full
//! read-modify-write of the blob; nothing is cached between operations.

mod shelf;
mod slot;

pub use shelf::ShelfStore;
pub use slot::{FileSlot, MemorySlot, StorageSlot};
