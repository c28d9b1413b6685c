use regex::Regex;
use std::sync::OnceLock;

static PLAYLIST_URL: OnceLock<Regex> = OnceLock::new();

fn pattern() -> &'static Regex {
    // Matches URLs like https://open.spotify.com/playlist/xxxxxxxxxxxxxx
    // (with optional query params)
    PLAYLIST_URL.get_or_init(|| {
        Regex::new(r"^https?://open\.spotify\.com/playlist/[A-Za-z0-9]+(\?.*)?$").unwrap()
    })
}

/// Check whether a string is a valid Spotify playlist URL
pub fn is_playlist_url(candidate: &str) -> bool {
    pattern().is_match(candidate)
}
