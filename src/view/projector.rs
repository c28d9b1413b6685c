use super::display::{DisplayModel, Row, Section};
use crate::model::Entry;
use std::collections::HashMap;

/// Group the flat store into a label-ordered display model
///
/// One pass over the store in natural order: the first occurrence of a
/// label opens a new section, and every entry appends a row (carrying
/// its store index) to its label's section. Flattening the result in
/// section order recovers the display positions, so resolving any
/// displayed position always finds the underlying entry even though
/// grouping reorders items across label boundaries.
pub fn project(entries: &[Entry]) -> DisplayModel {
    let mut sections: Vec<Section> = Vec::new();
    let mut by_label: HashMap<&str, usize> = HashMap::new();

    for (store_index, entry) in entries.iter().enumerate() {
        let section_index = *by_label.entry(entry.label.as_str()).or_insert_with(|| {
            sections.push(Section {
                label: entry.label.clone(),
                rows: Vec::new(),
            });
            sections.len() - 1
        });

        sections[section_index].rows.push(Row {
            url: entry.url.clone(),
            store_index,
        });
    }

    DisplayModel { sections }
}
