/// Edit-modal session context
///
/// Holds the true store index being edited, resolved when the edit is
/// invoked. Scoped to the app instance, and cleared on every close
/// path so a stale index can never be reused.
#[derive(Debug, Default)]
pub struct EditSession {
    editing: Option<usize>,
}

impl EditSession {
    /// Create a closed session
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the session on a store index
    pub fn begin(&mut self, store_index: usize) {
        self.editing = Some(store_index);
    }

    /// Store index currently being edited, if any
    pub fn current(&self) -> Option<usize> {
        self.editing
    }

    /// Whether an edit is in progress
    pub fn is_open(&self) -> bool {
        self.editing.is_some()
    }

    /// Close the session, dropping the index
    pub fn close(&mut self) {
        self.editing = None;
    }
}
