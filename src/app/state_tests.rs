use std::time::Duration;

use geocomplete::provider::ProviderError;

use super::*;
use crate::app::test_helpers::{show, test_app};

#[test]
fn test_new_app() {
    let app = test_app();

    assert_eq!(app.focus, Focus::Input);
    assert_eq!(app.query(), "");
    assert!(app.status.is_none());
    assert!(!app.should_quit());
    assert!(app.poll_timeout() <= MAX_POLL_INTERVAL);
}

#[test]
fn test_poll_timeout_follows_pending_fetch() {
    let mut app = App::new(AutocompleteOptions {
        debounce: Duration::from_millis(10),
        ..AutocompleteOptions::default()
    });

    app.controller.handle_input_change("Ber");

    assert!(app.poll_timeout() <= Duration::from_millis(10));
}

#[test]
fn test_change_notification_updates_query() {
    let mut app = test_app();

    app.controller.handle_input_change("Unter den Linden");
    app.process_notifications();

    assert_eq!(app.query(), "Unter den Linden");
}

#[test]
fn test_select_notification_sets_status_and_query() {
    let mut app = test_app();
    show(&mut app, &["Alexanderplatz"]);
    let suggestion = app.controller.suggestions().get(0).cloned().unwrap();

    app.controller.commit_suggestion(suggestion);
    app.process_notifications();

    assert_eq!(app.query(), "Alexanderplatz");
    assert_eq!(
        app.status,
        Some(Status::Selected {
            description: "Alexanderplatz".to_string(),
            place_id: "openaddresses:address:alexanderplatz".to_string(),
        })
    );
}

#[test]
fn test_fetch_error_sets_status_and_clears_list() {
    let mut app = test_app();
    show(&mut app, &["Alexanderplatz"]);

    let request_id = app.controller.current_request_id();
    app.controller.apply_response(geocomplete::worker::FetchResponse::Failure {
        request_id,
        error: ProviderError::Api {
            status: 502,
            message: "bad gateway".to_string(),
        },
    });
    app.tick();

    assert_eq!(app.status, Some(Status::Error(502)));
    assert!(app.controller.suggestions().is_empty());
}

#[test]
fn test_tick_without_work_changes_nothing() {
    let mut app = test_app();

    app.tick();

    assert_eq!(app.query(), "");
    assert!(app.status.is_none());
}
