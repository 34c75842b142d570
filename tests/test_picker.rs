use chrono::{NaiveDate, Weekday};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_datepicker::datepicker::selection::RangeSelection;
use rat_datepicker::datepicker::{DatePicker, DatePickerState, PickerSelection};
use rat_datepicker::event::PickerOutcome;
use rat_event::{HandleEvent, Popup};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn click(x: u16, y: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), x, y)
}

fn render<Selection: PickerSelection>(
    buf: &mut Buffer,
    area: Rect,
    state: &mut DatePickerState<Selection>,
) {
    let (w, p) = DatePicker::<Selection>::new()
        .week_start(Weekday::Mon)
        .into_widgets();
    w.render(area, buf, state);
    p.render(area, buf, state);
}

#[test]
fn test_render0() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 25));
    let anchor = Rect::new(2, 1, 26, 1);

    // closed panel leaves no hit areas
    render(&mut buf, anchor, &mut state);
    assert_eq!(state.area, anchor);
    assert_eq!(state.panel, Rect::default());
    assert!(state.area_days.iter().all(|v| v.is_empty()));

    state.set_panel_active(true);
    render(&mut buf, anchor, &mut state);
    assert_eq!(state.month(), d(2024, 2, 1));
    assert_eq!(state.panel, Rect::new(2, 2, 26, 7));
    assert!(!state.area_prev.is_empty());
    assert!(!state.area_next.is_empty());

    // every february day has a hit box, padding days have none
    for day0 in 0..29 {
        assert!(!state.area_days[day0].is_empty());
    }
    assert!(state.area_days[29].is_empty());
    assert!(state.area_days[30].is_empty());
}

#[test]
fn test_panel_position_fixed_while_open() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);
    state.set_panel_active(true);

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 25));
    render(&mut buf, Rect::new(2, 1, 26, 1), &mut state);
    let panel = state.panel;
    assert_eq!(panel, Rect::new(2, 2, 26, 7));

    // the anchor moves, the panel doesn't follow
    render(&mut buf, Rect::new(2, 5, 26, 1), &mut state);
    assert_eq!(state.panel, panel);
    render(&mut buf, Rect::new(40, 10, 26, 1), &mut state);
    assert_eq!(state.panel, panel);

    // reopening computes a fresh position
    state.set_panel_active(false);
    render(&mut buf, Rect::new(2, 5, 26, 1), &mut state);
    assert_eq!(state.panel, Rect::default());

    state.set_panel_active(true);
    render(&mut buf, Rect::new(2, 5, 26, 1), &mut state);
    assert_eq!(state.panel, Rect::new(2, 6, 26, 7));
}

#[test]
fn test_panel_height_follows_month() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);
    state.set_panel_active(true);

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 25));
    let anchor = Rect::new(2, 1, 26, 1);
    render(&mut buf, anchor, &mut state);
    // february 2024 fills 5 weeks
    assert_eq!(state.panel, Rect::new(2, 2, 26, 7));

    // september 2024 fills 6 weeks, only the height changes
    state.scroll_to(d(2024, 9, 1));
    render(&mut buf, anchor, &mut state);
    assert_eq!(state.panel, Rect::new(2, 2, 26, 8));
}

#[test]
fn test_pick_day() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);
    state.set_panel_active(true);

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 25));
    render(&mut buf, Rect::new(2, 1, 26, 1), &mut state);

    // click the 15th
    let cell = state.area_days[14];
    assert!(!cell.is_empty());
    let r = state.handle(&click(cell.x, cell.y), Popup);
    assert_eq!(r, PickerOutcome::Value);
    assert_eq!(state.value_iso(), Some("2024-02-15".to_string()));
    assert!(!state.is_panel_active());
}

#[test]
fn test_pick_bounds() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.min_date = Some(d(2024, 2, 10));
    state.max_date = Some(d(2024, 2, 20));

    // out of bounds days are not selectable
    assert_eq!(state.select_day(d(2024, 2, 5)), PickerOutcome::Unchanged);
    assert_eq!(state.select_day(d(2024, 2, 21)), PickerOutcome::Unchanged);
    assert_eq!(state.value_iso(), Some("2024-02-14".to_string()));

    assert_eq!(state.select_day(d(2024, 2, 10)), PickerOutcome::Value);
    assert_eq!(state.value_iso(), Some("2024-02-10".to_string()));
}

#[test]
fn test_keys() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);

    // space opens, esc closes
    let r = state.handle(&key(KeyCode::Char(' ')), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert!(state.is_panel_active());
    assert_eq!(state.month(), d(2024, 2, 1));

    let r = state.handle(&key(KeyCode::Esc), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert!(!state.is_panel_active());

    // esc on a closed panel changes nothing
    let r = state.handle(&key(KeyCode::Esc), Popup);
    assert_eq!(r, PickerOutcome::Continue);

    // enter opens too
    let r = state.handle(&key(KeyCode::Enter), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert!(state.is_panel_active());

    // delete clears the value
    let r = state.handle(&key(KeyCode::Delete), Popup);
    assert_eq!(r, PickerOutcome::Value);
    assert!(state.is_empty());
    let r = state.handle(&key(KeyCode::Delete), Popup);
    assert_eq!(r, PickerOutcome::Continue);
}

#[test]
fn test_month_nav() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);

    // page keys only work while the panel is open
    let r = state.handle(&key(KeyCode::PageDown), Popup);
    assert_eq!(r, PickerOutcome::Continue);

    state.set_panel_active(true);
    assert_eq!(state.month(), d(2024, 2, 1));

    let r = state.handle(&key(KeyCode::PageDown), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(state.month(), d(2024, 3, 1));
    let r = state.handle(&key(KeyCode::PageUp), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(state.month(), d(2024, 2, 1));

    // navigation doesn't touch the value
    assert_eq!(state.value_iso(), Some("2024-02-14".to_string()));
}

#[test]
fn test_mouse_nav() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);
    state.set_panel_active(true);

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 25));
    render(&mut buf, Rect::new(2, 1, 26, 1), &mut state);

    let r = state.handle(&click(state.area_prev.x, state.area_prev.y), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(state.month(), d(2024, 1, 1));
    let r = state.handle(&click(state.area_next.x, state.area_next.y), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(state.month(), d(2024, 2, 1));

    // scroll wheel over the panel
    let r = state.handle(
        &mouse(MouseEventKind::ScrollUp, state.panel.x + 5, state.panel.y + 3),
        Popup,
    );
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(state.month(), d(2024, 1, 1));
    let r = state.handle(
        &mouse(MouseEventKind::ScrollDown, state.panel.x + 5, state.panel.y + 3),
        Popup,
    );
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(state.month(), d(2024, 2, 1));
}

#[test]
fn test_outside_click() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);
    state.set_panel_active(true);

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 25));
    render(&mut buf, Rect::new(2, 1, 26, 1), &mut state);

    // a click outside anchor and panel closes without a pick
    let r = state.handle(&click(70, 20), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert!(!state.is_panel_active());
    assert_eq!(state.value_iso(), Some("2024-02-14".to_string()));
}

#[test]
fn test_pick_range() {
    let mut state = DatePickerState::<RangeSelection>::named("c1");
    state.focus.set(true);
    state.set_value_iso("2024-02-14", "2024-02-14");
    state.set_panel_active(true);

    let mut buf = Buffer::empty(Rect::new(0, 0, 80, 25));
    render(&mut buf, Rect::new(2, 1, 26, 1), &mut state);

    // first click drafts, the panel stays open
    let cell = state.area_days[9];
    let r = state.handle(&click(cell.x, cell.y), Popup);
    assert_eq!(r, PickerOutcome::Draft);
    assert!(state.is_panel_active());
    assert_eq!(
        state.value_iso(),
        Some(("2024-02-10".to_string(), String::new()))
    );

    // hovering previews the would-be range
    let cell = state.area_days[19];
    let r = state.handle(&mouse(MouseEventKind::Moved, cell.x, cell.y), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(
        state.selection.borrow().preview_range(),
        Some((d(2024, 2, 10), d(2024, 2, 20)))
    );

    // leaving the grid drops the preview
    let r = state.handle(&mouse(MouseEventKind::Moved, 70, 20), Popup);
    assert_eq!(r, PickerOutcome::Changed);
    assert_eq!(state.selection.borrow().preview_range(), None);

    // second click completes and closes
    let cell = state.area_days[19];
    let r = state.handle(&click(cell.x, cell.y), Popup);
    assert_eq!(r, PickerOutcome::Value);
    assert!(!state.is_panel_active());
    assert_eq!(
        state.value_iso(),
        Some(("2024-02-10".to_string(), "2024-02-20".to_string()))
    );
}

#[test]
fn test_disabled() {
    let mut state: DatePickerState = DatePickerState::named("c1");
    state.set_value_iso("2024-02-14");
    state.focus.set(true);
    state.disabled = true;

    let r = state.handle(&key(KeyCode::Char(' ')), Popup);
    assert_eq!(r, PickerOutcome::Continue);
    assert!(!state.is_panel_active());

    let r = state.handle(&key(KeyCode::Delete), Popup);
    assert_eq!(r, PickerOutcome::Continue);
    assert_eq!(state.value_iso(), Some("2024-02-14".to_string()));
}
