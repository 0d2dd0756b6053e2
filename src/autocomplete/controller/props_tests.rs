//! Tests for the attribute and handler bundles

use std::cell::RefCell;
use std::rc::Rc;

use insta::assert_snapshot;

use super::*;
use crate::autocomplete::events::{EventOutcome, Handler};
use crate::autocomplete::{AutocompleteOptions, CallerHandler};
use crate::test_utils::test_helpers::{
    Call, controller_with, key, populated_controller,
};
use crossterm::event::KeyCode;

fn recorder(log: &Rc<RefCell<Vec<String>>>, label: &'static str) -> CallerHandler {
    let log = Rc::clone(log);
    Rc::new(move |_event: &UiEvent| log.borrow_mut().push(label.to_string()))
}

#[test]
fn test_input_props_collapsed() {
    let (controller, _calls) = controller_with(AutocompleteOptions::default(), false);
    let props = controller.input_props(InputPropsOptions::default());

    assert_snapshot!(
        render_attributes(&props.attributes()),
        @r#"type="text" autocomplete="off" role="combobox" aria-autocomplete="list" aria-expanded="false" disabled="false" value="""#
    );
}

#[test]
fn test_input_props_expanded_with_active_descendant() {
    let (mut controller, _calls) = populated_controller(&["Alpha", "Beta"], false);
    controller.handle_key_down(&key(KeyCode::Down));
    let props = controller.input_props(InputPropsOptions::default());

    assert_snapshot!(
        render_attributes(&props.attributes()),
        @r#"type="text" autocomplete="off" role="combobox" aria-autocomplete="list" aria-expanded="true" aria-activedescendant="geocomplete-suggestion-test:address:alpha" disabled="false" value="Alpha""#
    );
}

#[test]
fn test_input_props_caller_attributes_override_defaults_but_not_value() {
    let (mut controller, _calls) = controller_with(AutocompleteOptions::default(), false);
    controller.set_value("Berlin");
    controller.set_ready(false);

    let mut options = InputPropsOptions::default();
    options.attributes.insert("placeholder".into(), "Search".into());
    options.attributes.insert("autocomplete".into(), "street-address".into());
    options.attributes.insert("value".into(), "ignored".into());
    let props = controller.input_props(options);

    assert_snapshot!(
        render_attributes(&props.attributes()),
        @r#"type="text" autocomplete="street-address" role="combobox" aria-autocomplete="list" aria-expanded="false" disabled="true" placeholder="Search" value="Berlin""#
    );
}

#[test]
fn test_suggestion_item_props() {
    let (mut controller, _calls) = populated_controller(&["Alpha", "Beta"], false);
    controller.handle_suggestion_hover_enter(1);
    let beta = controller.suggestions().get(1).cloned().unwrap();

    let mut options = SuggestionItemOptions::default();
    options.attributes.insert("class".into(), "row".into());
    let props = controller.suggestion_item_props(&beta, options);

    assert_eq!(props.key, "test:address:beta");
    assert_snapshot!(
        render_attributes(&props.attributes()),
        @r#"id="geocomplete-suggestion-test:address:beta" role="option" aria-selected="true" class="row""#
    );
}

#[test]
fn test_chains_start_with_controller_handler() {
    let (controller, _calls) = populated_controller(&["Alpha"], false);
    let log = Rc::new(RefCell::new(Vec::new()));
    let options = InputPropsOptions {
        on_key_down: Some(recorder(&log, "caller")),
        ..InputPropsOptions::default()
    };
    let props = controller.input_props(options);

    assert_eq!(props.on_key_down.len(), 2);
    assert!(matches!(
        props.on_key_down.handlers()[0],
        Handler::Internal(InternalAction::InputKeyDown)
    ));
    assert!(matches!(props.on_key_down.handlers()[1], Handler::Caller(_)));
    assert_eq!(props.on_blur.len(), 1);
    assert_eq!(props.on_change.len(), 1);
}

#[test]
fn test_dispatch_runs_controller_then_caller() {
    let (mut controller, calls) = populated_controller(&["Alpha", "Beta"], false);
    let log = Rc::new(RefCell::new(Vec::new()));
    let options = InputPropsOptions {
        on_key_down: Some(recorder(&log, "caller")),
        ..InputPropsOptions::default()
    };
    let props = controller.input_props(options);
    let event = UiEvent::KeyDown(key(KeyCode::Down));

    let chain = props.handler_for(&event).unwrap();
    let outcome = controller.dispatch(chain, &event);

    assert_eq!(outcome, EventOutcome { default_prevented: true });
    assert_eq!(*calls.borrow(), vec![Call::Change("Alpha".to_string())]);
    assert_eq!(*log.borrow(), vec!["caller".to_string()]);
}

#[test]
fn test_dispatch_unhandled_key_keeps_default() {
    let (mut controller, _calls) = populated_controller(&["Alpha"], false);
    let props = controller.input_props(InputPropsOptions::default());
    let event = UiEvent::KeyDown(key(KeyCode::Char('b')));

    let outcome = controller.dispatch(&props.on_key_down, &event);

    assert!(!outcome.default_prevented);
}

#[test]
fn test_dispatch_change_event() {
    let (mut controller, calls) = controller_with(AutocompleteOptions::default(), false);
    let props = controller.input_props(InputPropsOptions::default());
    let event = UiEvent::Change("Ber".to_string());

    controller.dispatch(&props.on_change, &event);

    assert_eq!(controller.user_input_value(), "Ber");
    assert_eq!(*calls.borrow(), vec![Call::Change("Ber".to_string())]);
}

#[test]
fn test_row_pointer_down_prevents_default_and_guards_blur() {
    let (mut controller, _calls) = populated_controller(&["Alpha"], false);
    let alpha = controller.suggestions().get(0).cloned().unwrap();
    let log = Rc::new(RefCell::new(Vec::new()));
    let options = SuggestionItemOptions {
        on_pointer_down: Some(recorder(&log, "down")),
        ..SuggestionItemOptions::default()
    };
    let row = controller.suggestion_item_props(&alpha, options);
    let input = controller.input_props(InputPropsOptions::default());

    let outcome = controller.dispatch(&row.on_pointer_down, &UiEvent::PointerDown);
    controller.dispatch(&input.on_blur, &UiEvent::Blur);

    assert!(outcome.default_prevented);
    assert_eq!(controller.suggestions().len(), 1);
    assert_eq!(*log.borrow(), vec!["down".to_string()]);
}

#[test]
fn test_row_click_commits_the_row() {
    let (mut controller, calls) = populated_controller(&["Alpha", "Beta"], true);
    let beta = controller.suggestions().get(1).cloned().unwrap();
    let row = controller.suggestion_item_props(&beta, SuggestionItemOptions::default());

    let chain = row.handler_for(&UiEvent::Click).unwrap();
    controller.dispatch(chain, &UiEvent::Click);

    assert!(controller.suggestions().is_empty());
    assert!(matches!(calls.borrow()[0], Call::Select { index: 1, .. }));
}

#[test]
fn test_handler_for_unrelated_events() {
    let (controller, _calls) = populated_controller(&["Alpha"], false);
    let alpha = controller.suggestions().get(0).cloned().unwrap();
    let input = controller.input_props(InputPropsOptions::default());
    let row = controller.suggestion_item_props(&alpha, SuggestionItemOptions::default());

    assert!(input.handler_for(&UiEvent::Click).is_none());
    assert!(row.handler_for(&UiEvent::Blur).is_none());
    assert!(row.handler_for(&UiEvent::TouchStart).is_some());
}
