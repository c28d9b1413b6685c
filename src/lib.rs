//! Playlist Shelf - labeled Spotify playlist links, grouped by label
//!
//! Saves (url, label) entries into a single persisted blob and renders
//! them grouped by label, with edit and delete actions and a timed
//! dissolve animation before a delete commits.

pub mod app;
pub mod model;
pub mod render;
pub mod store;
pub mod validation;
pub mod view;

pub use app::{App, ShelfError, DISSOLVE_DELAY};
pub use model::Entry;
pub use store::{FileSlot, MemorySlot, ShelfStore, StorageSlot};
