//! Pointer and touch interaction
//!
//! On most platforms the input's blur fires before a row's click. Pressing a
//! row raises a guard that keeps blur from clearing the list; the guard drops
//! on release, on leaving the row, or one tick after a click so the blur of
//! that same click still observes it.

use super::AutocompleteController;
use crate::autocomplete::suggestion::Suggestion;

impl AutocompleteController {
    pub fn handle_suggestion_pointer_down(&mut self) {
        self.pointer_down_on_suggestion = true;
    }

    pub fn handle_suggestion_pointer_up(&mut self) {
        self.pointer_down_on_suggestion = false;
    }

    pub fn handle_suggestion_touch_start(&mut self) {
        self.pointer_down_on_suggestion = true;
    }

    pub fn handle_suggestion_touch_end(&mut self) {
        self.pointer_down_on_suggestion = false;
    }

    /// Hovering a row highlights it, like keyboard activation but without
    /// touching the value
    pub fn handle_suggestion_hover_enter(&mut self, index: usize) {
        self.suggestions.activate_at(index);
    }

    pub fn handle_suggestion_hover_leave(&mut self) {
        self.pointer_down_on_suggestion = false;
        self.suggestions.clear_active();
    }

    /// Commit the clicked row; the guard is reset on the next tick
    pub fn handle_suggestion_click(&mut self, suggestion: &Suggestion) {
        self.commit_suggestion(suggestion.with_active(false));
        self.guard_reset_pending = true;
    }

    /// Blur clears the list unless a row is being pressed
    pub fn handle_input_blur(&mut self) {
        if !self.pointer_down_on_suggestion {
            self.clear_suggestions();
        }
    }
}

#[cfg(test)]
#[path = "pointer_tests.rs"]
mod pointer_tests;
