//! Suggestion list state machine
//!
//! Holds the ordered suggestion list and tracks at most one active entry.
//! Every transition publishes a fresh snapshot instead of editing records in
//! place, so a snapshot handed to a renderer never changes underneath it.

use std::sync::Arc;

use super::suggestion::Suggestion;

/// Observable state of the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    Empty,
    NoneActive,
    OneActive(usize),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SuggestionList {
    items: Arc<Vec<Suggestion>>,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ListState {
        match (self.items.is_empty(), self.active_index()) {
            (true, _) => ListState::Empty,
            (false, Some(index)) => ListState::OneActive(index),
            (false, None) => ListState::NoneActive,
        }
    }

    /// Replace the whole list
    ///
    /// Entries are re-indexed in the given order. With `highlight_first` the
    /// first entry becomes active, otherwise every entry starts inactive.
    pub fn replace_all(&mut self, suggestions: Vec<Suggestion>, highlight_first: bool) {
        let items = suggestions
            .iter()
            .enumerate()
            .map(|(index, s)| Suggestion {
                index,
                active: highlight_first && index == 0,
                ..s.clone()
            })
            .collect();
        self.items = Arc::new(items);
    }

    /// Make the entry at `index` the only active one
    ///
    /// Returns false, leaving the list untouched, when `index` is out of range.
    pub fn activate_at(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            log::warn!(
                "Ignoring activation of suggestion {} (list has {})",
                index,
                self.items.len()
            );
            return false;
        }
        self.remap(|s| s.index == index);
        true
    }

    /// Deactivate every entry
    pub fn clear_active(&mut self) {
        if self.active_index().is_some() {
            self.remap(|_| false);
        }
    }

    /// Drop every entry; a no-op on an empty list
    pub fn clear_all(&mut self) {
        if !self.items.is_empty() {
            self.items = Arc::new(Vec::new());
        }
    }

    /// Take the record at `index` for committing
    ///
    /// The list is deactivated first; the list itself is left in place for the
    /// caller to clear.
    pub fn commit_at(&mut self, index: usize) -> Option<Suggestion> {
        let record = self.items.get(index)?.with_active(false);
        self.clear_active();
        Some(record)
    }

    pub fn active(&self) -> Option<&Suggestion> {
        self.items.iter().find(|s| s.active)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active().map(|s| s.index)
    }

    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Suggestion> {
        self.items.iter()
    }

    /// Shared snapshot of the current list
    pub fn snapshot(&self) -> Arc<Vec<Suggestion>> {
        Arc::clone(&self.items)
    }

    fn remap(&mut self, is_active: impl Fn(&Suggestion) -> bool) {
        let items = self
            .items
            .iter()
            .map(|s| s.with_active(is_active(s)))
            .collect();
        self.items = Arc::new(items);
    }
}

#[cfg(test)]
#[path = "suggestion_list_tests.rs"]
mod suggestion_list_tests;
