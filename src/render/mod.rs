//! Terminal rendering of the display model
//!
//! Pure string building over a `DisplayModel`; printing is the
//! binary's job. Rows are numbered by 1-based display position, which
//! is what the edit and remove commands accept.

use crate::app::{DissolveScope, PendingRemoval};
use crate::view::DisplayModel;

const DISSOLVE_MARK: &str = "  (dissolving...)";

/// Render the grouped shelf
///
/// While a removal is animating, the affected row (or the heading and
/// every row of the affected section) carries a dissolve marker.
pub fn render(view: &DisplayModel, pending: Option<&PendingRemoval>) -> String {
    if view.is_empty() {
        return String::from("No playlists saved yet.\n");
    }

    let mut out = String::new();
    let mut position = 0usize;

    for section in &view.sections {
        let section_dissolving = matches!(
            pending.map(|p| &p.scope),
            Some(DissolveScope::Section { label }) if *label == section.label
        );

        out.push_str(&section.label);
        if section_dissolving {
            out.push_str(DISSOLVE_MARK);
        }
        out.push('\n');

        for row in &section.rows {
            let row_dissolving = section_dissolving
                || matches!(
                    pending.map(|p| &p.scope),
                    Some(DissolveScope::Row { display_index }) if *display_index == position
                );

            out.push_str(&format!("  {}. {}", position + 1, row.url));
            if row_dissolving {
                out.push_str(DISSOLVE_MARK);
            }
            out.push('\n');
            position += 1;
        }
    }

    out
}
