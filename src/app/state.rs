use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use ratatui::style::Style;
use tui_textarea::TextArea;

use geocomplete::autocomplete::{AutocompleteController, AutocompleteOptions, Handlers};
use geocomplete::worker::WorkerChannels;

use crate::layout::LayoutRegions;

/// Upper bound on how long the event loop waits for input
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Which component has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Outside,
}

/// Outcome shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Selected { description: String, place_id: String },
    Error(u16),
}

/// What the controller reported through its handlers since the last drain
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Notification {
    Change(String),
    Selected { description: String, place_id: String },
    Error(u16),
}

/// Application state
pub struct App {
    pub controller: AutocompleteController,
    pub textarea: TextArea<'static>,
    pub focus: Focus,
    pub layout_regions: LayoutRegions,
    /// Row under the mouse cursor
    pub hovered: Option<usize>,
    /// Row the left button went down on
    pub pressed: Option<usize>,
    pub status: Option<Status>,
    pub(super) notifications: Rc<RefCell<Vec<Notification>>>,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(options: AutocompleteOptions) -> Self {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let controller = AutocompleteController::new(options, handlers(&notifications));

        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Start typing an address");

        Self {
            controller,
            textarea,
            focus: Focus::Input,
            layout_regions: LayoutRegions::default(),
            hovered: None,
            pressed: None,
            status: None,
            notifications,
            should_quit: false,
        }
    }

    /// Connect the controller to a running fetch worker
    pub fn attach_worker(&mut self, channels: WorkerChannels) {
        self.controller.set_channels(channels);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// How long the event loop may block before the next tick is due
    pub fn poll_timeout(&self) -> Duration {
        match self.controller.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(MAX_POLL_INTERVAL),
            None => MAX_POLL_INTERVAL,
        }
    }

    /// Advance timers and apply settled fetches
    pub fn tick(&mut self) {
        self.controller.tick();
        self.controller.poll_responses();
        self.process_notifications();
    }

    /// Mirror what the controller reported into the input and status bar
    pub(super) fn process_notifications(&mut self) {
        let notifications: Vec<Notification> = self.notifications.borrow_mut().drain(..).collect();

        for notification in notifications {
            match notification {
                Notification::Change(value) => self.set_query(&value),
                Notification::Selected {
                    description,
                    place_id,
                } => {
                    self.set_query(&description);
                    self.status = Some(Status::Selected {
                        description,
                        place_id,
                    });
                }
                Notification::Error(status) => self.status = Some(Status::Error(status)),
            }
        }
    }

    /// Replace the input text without going through the change handler
    fn set_query(&mut self, value: &str) {
        if self.query() == value {
            return;
        }
        self.textarea.delete_line_by_head();
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(value);
    }
}

/// Handlers that queue every notification for the next drain
///
/// Fetch errors also clear the list so a stale list never lingers.
fn handlers(notifications: &Rc<RefCell<Vec<Notification>>>) -> Handlers {
    let on_change = Rc::clone(notifications);
    let on_select = Rc::clone(notifications);
    let on_error = Rc::clone(notifications);

    Handlers::new(move |value| {
        on_change
            .borrow_mut()
            .push(Notification::Change(value.to_string()));
    })
    .on_select(move |description, place_id, _suggestion| {
        on_select.borrow_mut().push(Notification::Selected {
            description: description.to_string(),
            place_id: place_id.to_string(),
        });
    })
    .on_error(move |status, clear| {
        on_error.borrow_mut().push(Notification::Error(status));
        clear.clear();
    })
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
