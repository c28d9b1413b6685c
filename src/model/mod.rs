//! Data model for the shelf
//!
//! This module defines data structures that are independent of
//! both the storage slot and the rendered view.

mod entry;

pub use entry::Entry;
