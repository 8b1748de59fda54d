//! Interaction state machine tests: open/close, hover cursor, keyboard
//! routing, and the change events handed to the host.

use combobox::prelude::*;

fn make(mode: Mode, count: usize) -> (Select, Vec<OptionRef>) {
    let options: Vec<OptionRef> = (0..count)
        .map(|i| SelectOption::shared(i as i64 + 1, format!("option {}", i + 1)))
        .collect();
    let select = Select::new(mode);
    select.set_options(options.clone());
    (select, options)
}

fn press(select: &Select, key: Key) -> (EventResult, SelectEvents) {
    select.handle_key(&KeyCombo::key(key))
}

#[test]
fn test_toggle_key_opens_and_escape_closes() {
    let (select, _) = make(Mode::Single, 4);
    assert!(!select.is_open());

    let (result, events) = press(&select, Key::Enter);
    assert_eq!(result, EventResult::Consumed);
    assert!(events.is_empty());
    assert!(select.is_open());

    let (result, _) = press(&select, Key::Escape);
    assert_eq!(result, EventResult::Consumed);
    assert!(!select.is_open());
}

#[test]
fn test_cursor_resets_to_zero_on_close() {
    let (select, _) = make(Mode::Single, 4);
    press(&select, Key::Space);
    press(&select, Key::Down);
    press(&select, Key::Down);
    assert_eq!(select.cursor(), 2);

    press(&select, Key::Escape);
    assert_eq!(select.cursor(), 0);
}

#[test]
fn test_cursor_stays_in_bounds() {
    let (select, _) = make(Mode::Single, 3);
    press(&select, Key::Enter);

    press(&select, Key::Up);
    assert_eq!(select.cursor(), 0);

    for _ in 0..10 {
        press(&select, Key::Down);
    }
    assert_eq!(select.cursor(), 2);

    press(&select, Key::Home);
    assert_eq!(select.cursor(), 0);
    press(&select, Key::End);
    assert_eq!(select.cursor(), 2);
}

#[test]
fn test_keyboard_commit_single() {
    // options = [A,B,C,D], selection = A; open, down twice, commit -> C,
    // closed, cursor reset.
    let (select, opts) = make(Mode::Single, 4);
    select
        .set_selection(Selection::Single(Some(opts[0].clone())))
        .unwrap();

    select.toggle(); // container click
    assert!(select.is_open());
    press(&select, Key::Down);
    press(&select, Key::Down);
    assert_eq!(select.cursor(), 2);

    let (result, events) = press(&select, Key::Enter);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(
        events.change,
        Some(ChangeEvent {
            selection: Selection::Single(Some(opts[2].clone())),
        })
    );
    assert!(!select.is_open());
    assert_eq!(select.cursor(), 0);
}

#[test]
fn test_single_recommit_emits_nothing_and_stays_open() {
    let (select, opts) = make(Mode::Single, 4);
    select
        .set_selection(Selection::Single(Some(opts[0].clone())))
        .unwrap();

    press(&select, Key::Enter);
    assert!(select.is_open());

    // Cursor sits on the already selected option.
    let (result, events) = press(&select, Key::Enter);
    assert_eq!(result, EventResult::Consumed);
    assert!(events.is_empty());
    assert!(select.is_open());
}

#[test]
fn test_multi_keyboard_commit_is_append_only() {
    let (select, opts) = make(Mode::Multi, 4);
    select
        .set_selection(Selection::Multi(vec![opts[0].clone()]))
        .unwrap();

    press(&select, Key::Enter);
    // Cursor on the already selected option: keyboard never toggles off.
    let (_, events) = press(&select, Key::Enter);
    assert!(events.is_empty());
    assert!(select.is_open());

    press(&select, Key::Down);
    let (_, events) = press(&select, Key::Enter);
    assert_eq!(
        events.change,
        Some(ChangeEvent {
            selection: Selection::Multi(vec![opts[0].clone(), opts[1].clone()]),
        })
    );
    // Multi stays open for further toggling.
    assert!(select.is_open());
}

#[test]
fn test_empty_options_navigation_and_commit_are_noops() {
    let (select, _) = make(Mode::Single, 0);
    press(&select, Key::Enter);
    assert!(select.is_open());

    press(&select, Key::Down);
    press(&select, Key::Up);
    press(&select, Key::End);
    assert_eq!(select.cursor(), 0);

    let (result, events) = press(&select, Key::Enter);
    assert_eq!(result, EventResult::Consumed);
    assert!(events.is_empty());
    assert!(select.is_open());
}

#[test]
fn test_multi_click_toggles_in_order() {
    // Click A -> [A], click B -> [A,B], click A again -> [B].
    let (select, opts) = make(Mode::Multi, 5);
    select.open();

    let events = select.click_option(0);
    let next = events.change.unwrap().selection;
    assert_eq!(next, Selection::Multi(vec![opts[0].clone()]));
    select.set_selection(next).unwrap();
    assert!(select.is_open());

    let events = select.click_option(1);
    let next = events.change.unwrap().selection;
    assert_eq!(next, Selection::Multi(vec![opts[0].clone(), opts[1].clone()]));
    select.set_selection(next).unwrap();

    let events = select.click_option(0);
    let next = events.change.unwrap().selection;
    assert_eq!(next, Selection::Multi(vec![opts[1].clone()]));
}

#[test]
fn test_single_click_option_closes_on_change_only() {
    let (select, opts) = make(Mode::Single, 3);
    select
        .set_selection(Selection::Single(Some(opts[1].clone())))
        .unwrap();
    select.open();

    // Clicking the already selected option neither closes nor emits.
    let events = select.click_option(1);
    assert!(events.is_empty());
    assert!(select.is_open());

    let events = select.click_option(2);
    assert_eq!(
        events.change,
        Some(ChangeEvent {
            selection: Selection::Single(Some(opts[2].clone())),
        })
    );
    assert!(!select.is_open());
}

#[test]
fn test_click_option_out_of_range_is_noop() {
    let (select, _) = make(Mode::Single, 2);
    select.open();
    assert!(select.click_option(5).is_empty());
    assert!(select.is_open());
}

#[test]
fn test_clear_never_touches_open_state() {
    let (select, opts) = make(Mode::Multi, 3);
    select
        .set_selection(Selection::Multi(vec![opts[0].clone(), opts[1].clone()]))
        .unwrap();

    // Closed.
    let events = select.clear_selection();
    assert_eq!(
        events.change.unwrap().selection,
        Selection::Multi(vec![])
    );
    assert!(!select.is_open());

    // Open.
    select.open();
    select.clear_selection();
    assert!(select.is_open());
}

#[test]
fn test_clear_on_empty_selection_emits_nothing() {
    let (select, _) = make(Mode::Single, 3);
    assert!(select.clear_selection().is_empty());
}

#[test]
fn test_remove_badge() {
    let (select, opts) = make(Mode::Multi, 3);
    select
        .set_selection(Selection::Multi(vec![opts[0].clone(), opts[2].clone()]))
        .unwrap();

    let events = select.remove_badge(0);
    assert_eq!(
        events.change.unwrap().selection,
        Selection::Multi(vec![opts[2].clone()])
    );

    // Out of range badge index is a no-op.
    assert!(select.remove_badge(5).is_empty());
}

#[test]
fn test_remove_badge_is_multi_only() {
    let (select, opts) = make(Mode::Single, 3);
    select
        .set_selection(Selection::Single(Some(opts[0].clone())))
        .unwrap();
    assert!(select.remove_badge(0).is_empty());
}

#[test]
fn test_blur_force_closes_and_resets_cursor() {
    let (select, _) = make(Mode::Single, 4);
    press(&select, Key::Enter);
    press(&select, Key::Down);
    assert_eq!(select.cursor(), 1);

    select.on_blur();
    assert!(!select.is_open());
    assert_eq!(select.cursor(), 0);
}

#[test]
fn test_modifier_keys_are_ignored() {
    let (select, _) = make(Mode::Single, 3);
    let (result, _) = select.handle_key(&KeyCombo::key(Key::Enter).ctrl());
    assert_eq!(result, EventResult::Ignored);
    assert!(!select.is_open());

    let (result, _) = select.handle_key(&KeyCombo::key(Key::Down).alt());
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_unrelated_keys_pass_through() {
    let (select, _) = make(Mode::Single, 3);
    let (result, _) = press(&select, Key::Char('q'));
    assert_eq!(result, EventResult::Ignored);

    select.open();
    let (result, _) = press(&select, Key::Char('q'));
    assert_eq!(result, EventResult::Ignored);
}

#[test]
fn test_mode_mismatch_is_rejected() {
    let (select, opts) = make(Mode::Single, 3);
    let err = select
        .set_selection(Selection::Multi(vec![opts[0].clone()]))
        .unwrap_err();
    assert_eq!(
        err,
        SelectionModeError::ModeMismatch {
            expected: Mode::Single,
            got: Mode::Multi,
        }
    );
}

#[test]
fn test_dirty_tracking() {
    let (select, _) = make(Mode::Single, 3);
    select.clear_dirty();
    assert!(!select.is_dirty());

    select.open();
    assert!(select.is_dirty());
    select.clear_dirty();

    // Closing again without a transition leaves the flag untouched.
    select.close();
    assert!(select.is_dirty());
    select.clear_dirty();
    select.close();
    assert!(!select.is_dirty());
}
