pub mod key;

use std::collections::HashMap;

pub use key::SelectionKey;

/// Session-long map from [`SelectionKey`] to its checked flag.
///
/// Entries are created on first write and never removed; iteration follows
/// first-insertion order so exports list titles in the order they were picked.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    entries: Vec<(SelectionKey, bool)>,
    index: HashMap<SelectionKey, usize>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: SelectionKey, checked: bool) {
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = checked,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, checked));
            }
        }
    }

    /// Stored flag, `false` when the key was never written.
    pub fn is_selected(&self, key: &SelectionKey) -> bool {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1)
            .unwrap_or(false)
    }

    /// Keys whose flag is `true`, in insertion order.
    pub fn selected_keys(&self) -> impl Iterator<Item = &SelectionKey> {
        self.entries
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(key, _)| key)
    }

    /// Number of keys ever written, checked or not.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
