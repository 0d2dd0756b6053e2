//! Terminal event routing
//!
//! Keys go through the input's key-down chain first. Only keys the controller
//! leaves alone reach the text area, and an edit there is reported back through
//! the input's change chain.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use geocomplete::autocomplete::{InputPropsOptions, UiEvent};

use super::mouse;
use super::state::{App, Focus};

impl App {
    /// Handle one terminal event and apply what the controller reported
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse_event) => mouse::handle_mouse(self, mouse_event),
            _ => {}
        }
        self.process_notifications();
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        self.focus = Focus::Input;

        let props = self.controller.input_props(InputPropsOptions::default());
        if props.disabled {
            return;
        }

        let key_down = UiEvent::KeyDown(key);
        let outcome = self.controller.dispatch(&props.on_key_down, &key_down);
        if outcome.default_prevented {
            return;
        }

        if !self.textarea.input(key) {
            return;
        }

        let change = UiEvent::Change(self.query().to_string());
        self.controller.dispatch(&props.on_change, &change);
    }

    /// Returns true if the key was consumed before reaching the input
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        // Esc closes an open list first, and only quits once nothing is showing
        if key.code == KeyCode::Esc && !self.controller.is_expanded() {
            self.should_quit = true;
            return true;
        }

        false
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
