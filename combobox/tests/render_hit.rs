//! Render tests: hit region recording and pointer routing through the
//! regions the renderer wrote.

use combobox::prelude::*;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

const AREA: Rect = Rect {
    x: 2,
    y: 1,
    width: 40,
    height: 1,
};

fn make(mode: Mode, count: usize) -> (Select, Vec<OptionRef>) {
    let options: Vec<OptionRef> = (0..count)
        .map(|i| SelectOption::shared(i as i64 + 1, format!("option {}", i + 1)))
        .collect();
    let select = Select::with_placeholder(mode, "Pick something");
    select.set_options(options.clone());
    (select, options)
}

fn draw(select: &Select) -> Terminal<TestBackend> {
    let backend = TestBackend::new(60, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| select.render(frame, AREA, true))
        .unwrap();
    terminal
}

fn row(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

#[test]
fn test_trigger_click_toggles_open() {
    let (select, _) = make(Mode::Single, 4);
    draw(&select);

    let (result, events) = select.handle_click(AREA.x, AREA.y);
    assert_eq!(result, EventResult::Consumed);
    assert!(events.is_empty());
    assert!(select.is_open());

    draw(&select);
    let (result, _) = select.handle_click(AREA.x, AREA.y);
    assert_eq!(result, EventResult::Consumed);
    assert!(!select.is_open());
}

#[test]
fn test_clear_click_clears_without_toggling() {
    let (select, opts) = make(Mode::Single, 4);
    select
        .set_selection(Selection::Single(Some(opts[0].clone())))
        .unwrap();
    draw(&select);

    let clear = select.regions().clear.unwrap();
    let (result, events) = select.handle_click(clear.x, clear.y);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(events.change.unwrap().selection, Selection::Single(None));
    // The clear control is its own target; the container toggle never ran.
    assert!(!select.is_open());

    select.open();
    draw(&select);
    let clear = select.regions().clear.unwrap();
    select.handle_click(clear.x, clear.y);
    assert!(select.is_open());
}

#[test]
fn test_option_row_click_selects_and_closes() {
    let (select, opts) = make(Mode::Single, 4);
    select.open();
    draw(&select);

    let dropdown = select.regions().dropdown.unwrap();
    assert_eq!(dropdown.height, 4);

    let (result, events) = select.handle_click(dropdown.x + 3, dropdown.y + 2);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(
        events.change.unwrap().selection,
        Selection::Single(Some(opts[2].clone()))
    );
    assert!(!select.is_open());
}

#[test]
fn test_hover_moves_cursor() {
    let (select, _) = make(Mode::Single, 4);
    select.open();
    draw(&select);

    let dropdown = select.regions().dropdown.unwrap();
    let result = select.handle_hover(dropdown.x + 1, dropdown.y + 3);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(select.cursor(), 3);

    // Hovering outside the dropdown changes nothing.
    let result = select.handle_hover(55, 11);
    assert_eq!(result, EventResult::Ignored);
    assert_eq!(select.cursor(), 3);
}

#[test]
fn test_badge_remove_click() {
    let (select, opts) = make(Mode::Multi, 4);
    select
        .set_selection(Selection::Multi(vec![opts[0].clone(), opts[2].clone()]))
        .unwrap();
    draw(&select);

    let badges = select.regions().badges;
    assert_eq!(badges.len(), 2);

    let (index, rect) = badges[1];
    assert_eq!(index, 1);
    let (result, events) = select.handle_click(rect.x, rect.y);
    assert_eq!(result, EventResult::Consumed);
    assert_eq!(
        events.change.unwrap().selection,
        Selection::Multi(vec![opts[0].clone()])
    );
    assert!(!select.is_open());
}

#[test]
fn test_click_outside_is_ignored() {
    let (select, _) = make(Mode::Single, 4);
    draw(&select);

    let (result, events) = select.handle_click(55, 10);
    assert_eq!(result, EventResult::Ignored);
    assert!(events.is_empty());
}

#[test]
fn test_closed_render_shows_value_and_caret() {
    let (select, opts) = make(Mode::Single, 4);
    select
        .set_selection(Selection::Single(Some(opts[0].clone())))
        .unwrap();
    let terminal = draw(&select);

    let trigger_row = row(&terminal, AREA.y);
    assert!(trigger_row.contains("option 1"));
    assert!(trigger_row.contains("▼"));
}

#[test]
fn test_open_render_marks_selected_and_placeholder() {
    let (select, opts) = make(Mode::Multi, 4);
    select
        .set_selection(Selection::Multi(vec![opts[1].clone()]))
        .unwrap();
    select.open();
    let terminal = draw(&select);

    assert!(row(&terminal, AREA.y).contains("▲"));
    // Row for the selected option carries the check marker.
    assert!(row(&terminal, AREA.y + 2).contains("✓ option 2"));
    assert!(row(&terminal, AREA.y + 1).contains("  option 1"));
}

#[test]
fn test_empty_selection_renders_placeholder() {
    let (select, _) = make(Mode::Single, 4);
    let terminal = draw(&select);
    assert!(row(&terminal, AREA.y).contains("Pick something"));
}

#[test]
fn test_empty_options_open_records_no_dropdown() {
    let (select, _) = make(Mode::Single, 0);
    select.open();
    draw(&select);
    assert!(select.regions().dropdown.is_none());
}
