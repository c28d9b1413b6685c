//! Playlist URL validation
//!
//! The same check guards both the create and the edit path; callers
//! abort the mutation when it fails.

mod url;

pub use url::is_playlist_url;
