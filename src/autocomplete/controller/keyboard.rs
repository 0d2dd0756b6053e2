//! Keyboard navigation
//!
//! Only Enter, Up, Down and Esc are handled; every other key passes through.
//! Moving past either end of the list lands on the user's own text before
//! re-entering the list, so the cycle per direction is
//! suggestion → … → typed text → suggestion.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::AutocompleteController;

impl AutocompleteController {
    /// Handle a key press on the input
    ///
    /// Returns true if the key was handled and its default action must be
    /// suppressed.
    pub fn handle_key_down(&mut self, key: &KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }

        match key.code {
            KeyCode::Enter => self.handle_enter_key(),
            KeyCode::Down => self.handle_down_key(),
            KeyCode::Up => self.handle_up_key(),
            KeyCode::Esc => self.clear_suggestions(),
            _ => return false,
        }
        true
    }

    fn handle_enter_key(&mut self) {
        match self.suggestions.active_index() {
            Some(index) => {
                if let Some(suggestion) = self.suggestions.commit_at(index) {
                    self.commit_suggestion(suggestion);
                }
            }
            None => self.commit_raw_value(),
        }
    }

    fn handle_down_key(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }

        let last = self.suggestions.len() - 1;
        match self.suggestions.active_index() {
            None => self.select_active_at_index(0),
            Some(index) if index == last => self.select_user_input_value(),
            Some(index) => self.select_active_at_index(index + 1),
        }
    }

    fn handle_up_key(&mut self) {
        if self.suggestions.is_empty() {
            return;
        }

        let last = self.suggestions.len() - 1;
        match self.suggestions.active_index() {
            None => self.select_active_at_index(last),
            Some(0) => self.select_user_input_value(),
            Some(index) => self.select_active_at_index(index - 1),
        }
    }

    /// Highlight `index` and mirror its description into the value
    fn select_active_at_index(&mut self, index: usize) {
        let Some(description) = self.suggestions.get(index).map(|s| s.description.clone()) else {
            return;
        };
        self.suggestions.activate_at(index);
        self.emit_change(&description);
    }

    /// Leave the list and put the user's own text back
    fn select_user_input_value(&mut self) {
        self.suggestions.clear_active();
        let typed = self.user_input_value.clone();
        self.emit_change(&typed);
    }
}

#[cfg(test)]
#[path = "keyboard_tests.rs"]
mod keyboard_tests;
