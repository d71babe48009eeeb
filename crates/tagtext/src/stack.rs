//! The LIFO stack of styles opened and not yet closed.

use crate::entry::StyleEntry;

/// Active style stack for one compilation pass.
///
/// Entries are never modified once pushed. Popping an empty stack does nothing.
#[derive(Clone, Debug, Default)]
pub struct StyleStack {
    entries: Vec<StyleEntry>,
}

impl StyleStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<StyleEntry>) {
        self.entries.push(entry.into());
    }

    /// Remove and return the most recently pushed entry, if any.
    pub fn pop(&mut self) -> Option<StyleEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&StyleEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn snapshot_bottom_to_top(&self) -> &[StyleEntry] {
        &self.entries
    }

    /// True when the top entry is a gradient.
    pub fn is_gradient_active(&self) -> bool {
        self.peek().is_some_and(StyleEntry::is_gradient)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
