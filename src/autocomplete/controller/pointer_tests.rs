//! Tests for pointer, touch and blur handling

use std::time::Instant;

use super::*;
use crate::test_utils::test_helpers::{Call, populated_controller};

#[test]
fn test_blur_clears_list() {
    let (mut controller, _calls) = populated_controller(&["Alpha", "Beta"], false);

    controller.handle_input_blur();

    assert!(controller.suggestions().is_empty());
}

#[test]
fn test_blur_during_press_keeps_list() {
    let (mut controller, _calls) = populated_controller(&["Alpha", "Beta"], false);

    controller.handle_suggestion_pointer_down();
    controller.handle_input_blur();

    assert_eq!(controller.suggestions().len(), 2);
}

#[test]
fn test_blur_during_touch_keeps_list() {
    let (mut controller, _calls) = populated_controller(&["Alpha"], false);

    controller.handle_suggestion_touch_start();
    assert!(controller.pointer_down_on_suggestion());
    controller.handle_input_blur();
    assert_eq!(controller.suggestions().len(), 1);

    controller.handle_suggestion_touch_end();
    assert!(!controller.pointer_down_on_suggestion());
    controller.handle_input_blur();
    assert!(controller.suggestions().is_empty());
}

#[test]
fn test_pointer_up_drops_guard() {
    let (mut controller, _calls) = populated_controller(&["Alpha"], false);

    controller.handle_suggestion_pointer_down();
    controller.handle_suggestion_pointer_up();

    assert!(!controller.pointer_down_on_suggestion());
}

#[test]
fn test_hover_activates_without_changing_value() {
    let (mut controller, calls) = populated_controller(&["Alpha", "Beta"], false);

    controller.handle_suggestion_hover_enter(1);

    assert_eq!(controller.suggestions().active_index(), Some(1));
    assert_eq!(controller.value(), "");
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_hover_out_of_range_is_ignored() {
    let (mut controller, _calls) = populated_controller(&["Alpha"], false);

    controller.handle_suggestion_hover_enter(4);

    assert_eq!(controller.suggestions().active_index(), None);
}

#[test]
fn test_hover_leave_clears_active_and_guard() {
    let (mut controller, _calls) = populated_controller(&["Alpha", "Beta"], false);
    controller.handle_suggestion_hover_enter(0);
    controller.handle_suggestion_pointer_down();

    controller.handle_suggestion_hover_leave();

    assert_eq!(controller.suggestions().active_index(), None);
    assert!(!controller.pointer_down_on_suggestion());
    assert_eq!(controller.suggestions().len(), 2);
}

#[test]
fn test_press_blur_click_sequence_commits() {
    let (mut controller, calls) = populated_controller(&["Alpha", "Beta"], true);
    let beta = controller.suggestions().get(1).cloned().unwrap();

    controller.handle_suggestion_pointer_down();
    controller.handle_input_blur();
    controller.handle_suggestion_click(&beta);

    assert_eq!(
        *calls.borrow(),
        vec![Call::Select {
            value: "Beta".to_string(),
            place_id: "test:address:beta".to_string(),
            index: 1,
        }]
    );
    assert!(controller.suggestions().is_empty());
    assert_eq!(controller.value(), "Beta");
}

#[test]
fn test_click_resets_guard_on_next_tick() {
    let (mut controller, _calls) = populated_controller(&["Alpha"], false);
    let alpha = controller.suggestions().get(0).cloned().unwrap();

    controller.handle_suggestion_pointer_down();
    controller.handle_suggestion_click(&alpha);
    assert!(controller.pointer_down_on_suggestion());

    controller.tick_at(Instant::now());
    assert!(!controller.pointer_down_on_suggestion());
}

#[test]
fn test_click_commits_inactive_record() {
    let (mut controller, calls) = populated_controller(&["Alpha"], false);
    controller.handle_suggestion_hover_enter(0);
    let alpha = controller.suggestions().get(0).cloned().unwrap();
    assert!(alpha.active);

    controller.handle_suggestion_click(&alpha);

    assert_eq!(*calls.borrow(), vec![Call::Change("Alpha".to_string())]);
}
