/// One rendered link row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Playlist URL
    pub url: String,

    /// True index of this entry in the store
    pub store_index: usize,
}

/// All rows sharing one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Section heading
    pub label: String,

    /// Rows in store order
    pub rows: Vec<Row>,
}

/// Label-grouped view of the shelf
///
/// Flattening the sections in order assigns each row its display
/// position: section order is first-seen label order, row order within
/// a section is store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayModel {
    /// Sections in first-seen label order
    pub sections: Vec<Section>,
}

impl DisplayModel {
    /// Total number of displayed rows
    pub fn row_count(&self) -> usize {
        self.sections.iter().map(|s| s.rows.len()).sum()
    }

    /// Check if there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Resolve a flat display position to the true store index
    ///
    /// Returns `None` when the position is out of range.
    pub fn resolve(&self, display_index: usize) -> Option<usize> {
        self.flat_rows().nth(display_index).map(|(_, row)| row.store_index)
    }

    /// Label of the section containing a display position
    pub fn label_at(&self, display_index: usize) -> Option<&str> {
        self.flat_rows()
            .nth(display_index)
            .map(|(section, _)| section.label.as_str())
    }

    /// Iterate rows in display order, paired with their section
    pub fn flat_rows(&self) -> impl Iterator<Item = (&Section, &Row)> {
        self.sections
            .iter()
            .flat_map(|section| section.rows.iter().map(move |row| (section, row)))
    }
}
