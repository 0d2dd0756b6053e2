//! Mouse handling
//!
//! Translates terminal mouse events into the row and input events the
//! controller understands. Pressing a row suppresses the input's blur the way
//! a browser does when the press's default action is prevented.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use geocomplete::autocomplete::{EventOutcome, InputPropsOptions, SuggestionItemOptions, UiEvent};

use super::state::{App, Focus};
use crate::layout::{Region, region_at};

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
            handle_hover(app, region)
        }
        MouseEventKind::Down(MouseButton::Left) => handle_press(app, region),
        MouseEventKind::Up(MouseButton::Left) => handle_release(app, region),
        _ => {}
    }
}

fn handle_hover(app: &mut App, region: Option<Region>) {
    let row = match region {
        Some(Region::Suggestion(index)) => Some(index),
        _ => None,
    };
    if row == app.hovered {
        return;
    }

    if let Some(previous) = app.hovered.take() {
        dispatch_row(app, previous, UiEvent::PointerLeave);
    }
    if let Some(index) = row {
        dispatch_row(app, index, UiEvent::PointerEnter);
        app.hovered = Some(index);
    }
}

fn handle_press(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::Suggestion(index)) => {
            app.pressed = Some(index);
            let outcome = dispatch_row(app, index, UiEvent::PointerDown);
            if !outcome.default_prevented {
                blur_input(app);
            }
        }
        Some(Region::Input) => app.focus = Focus::Input,
        _ => blur_input(app),
    }
}

fn handle_release(app: &mut App, region: Option<Region>) {
    let Some(pressed) = app.pressed.take() else {
        return;
    };

    dispatch_row(app, pressed, UiEvent::PointerUp);

    if region == Some(Region::Suggestion(pressed)) {
        dispatch_row(app, pressed, UiEvent::Click);
        app.hovered = None;
    }
}

fn blur_input(app: &mut App) {
    if app.focus != Focus::Input {
        return;
    }
    app.focus = Focus::Outside;

    let props = app.controller.input_props(InputPropsOptions::default());
    app.controller.dispatch(&props.on_blur, &UiEvent::Blur);
}

/// Run the row's chain for `event`; rows that no longer exist are ignored
fn dispatch_row(app: &mut App, index: usize, event: UiEvent) -> EventOutcome {
    let Some(suggestion) = app.controller.suggestions().get(index).cloned() else {
        return EventOutcome::default();
    };

    let props = app
        .controller
        .suggestion_item_props(&suggestion, SuggestionItemOptions::default());
    match props.handler_for(&event) {
        Some(chain) => app.controller.dispatch(chain, &event),
        None => EventOutcome::default(),
    }
}

#[cfg(test)]
#[path = "mouse_tests.rs"]
mod mouse_tests;
