use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use serde_json::json;

use geocomplete::autocomplete::AutocompleteOptions;
use geocomplete::provider::FeatureCollection;
use geocomplete::worker::FetchResponse;

use super::App;

pub const TEST_WIDTH: u16 = 60;
pub const TEST_HEIGHT: u16 = 16;

pub fn test_app() -> App {
    App::new(AutocompleteOptions::default())
}

/// App showing `labels` as suggestions, laid out once so rows can be hit
pub fn test_app_with(labels: &[&str]) -> App {
    let mut app = test_app();
    show(&mut app, labels);
    render(&mut app);
    app
}

pub fn show(app: &mut App, labels: &[&str]) {
    let features: Vec<_> = labels
        .iter()
        .map(|label| {
            json!({
                "properties": {
                    "label": label,
                    "gid": format!(
                        "openaddresses:address:{}",
                        label.to_lowercase().replace(' ', "-")
                    ),
                }
            })
        })
        .collect();
    let collection: FeatureCollection =
        serde_json::from_value(json!({ "features": features })).unwrap();

    let request_id = app.controller.current_request_id();
    app.controller
        .apply_response(FetchResponse::Success { request_id, collection });
}

pub fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal.backend().to_string()
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_event(key(KeyCode::Char(c)));
    }
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn left_down(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn left_up(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

pub fn moved(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Moved, column, row)
}
