use crate::mini_salsa::theme::THEME;
use crate::mini_salsa::{layout_grid, run_ui, setup_logging, MiniSalsaState};
use chrono::{Locale, NaiveDate};
use log::debug;
use rat_datepicker::datepicker::{DatePicker, DatePickerState};
use rat_datepicker::event::{Outcome, PickerOutcome};
use rat_event::{try_flow, HandleEvent, Popup, Regular};
use rat_focus::{Focus, FocusBuilder};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::{Block, BorderType, StatefulWidget};
use ratatui::Frame;

mod mini_salsa;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut data = Data {};

    let mut state = State {
        c1: DatePickerState::named("c1"),
        c2: DatePickerState::named("c2"),
    };
    state.c1.set_value_iso("2024-02-29");
    state.c2.min_date = NaiveDate::from_ymd_opt(2024, 1, 1);
    state.c2.max_date = NaiveDate::from_ymd_opt(2024, 12, 31);

    run_ui(
        "picker1",
        |_| {},
        handle_input,
        repaint_input,
        &mut data,
        &mut state,
    )
}

struct Data {}

struct State {
    c1: DatePickerState,
    c2: DatePickerState,
}

fn repaint_input(
    frame: &mut Frame<'_>,
    area: Rect,
    _data: &mut Data,
    istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let lg = layout_grid::<2, 3>(
        area,
        Layout::horizontal([
            Constraint::Length(25), //
            Constraint::Fill(1),
            Constraint::Length(25),
        ])
        .flex(Flex::Start),
        Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .spacing(1),
    );

    let (w1, p1) = DatePicker::new()
        .styles(THEME.datepicker_style())
        .placeholder("pick a date")
        .popup_boundary(area)
        .into_widgets();
    w1.render(lg[1][1], frame.buffer_mut(), &mut state.c1);

    let (w2, p2) = DatePicker::new()
        .styles(THEME.datepicker_style())
        .locale(Locale::de_AT)
        .block(Block::bordered().border_type(BorderType::Rounded))
        .popup_block(Block::bordered().border_type(BorderType::Rounded))
        .popup_boundary(area)
        .into_widgets();
    w2.render(lg[1][2], frame.buffer_mut(), &mut state.c2);

    p1.render(lg[1][1], frame.buffer_mut(), &mut state.c1);
    p2.render(lg[1][2], frame.buffer_mut(), &mut state.c2);

    if let Some(value) = state.c1.value_iso() {
        istate.status[0] = format!("c1 {}", value);
    }

    Ok(())
}

fn focus(state: &mut State) -> Focus {
    let mut fb = FocusBuilder::new(None);
    fb.widget(&state.c1);
    fb.widget(&state.c2);
    fb.build()
}

fn handle_input(
    event: &crossterm::event::Event,
    _data: &mut Data,
    istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<Outcome, anyhow::Error> {
    let mut focus = focus(state);
    istate.focus_outcome = focus.handle(event, Regular);

    // popup handling first
    try_flow!(match state.c1.handle(event, Popup) {
        PickerOutcome::Value => {
            debug!("c1 {:?}", state.c1.value_iso());
            Outcome::Changed
        }
        r => r.into(),
    });
    try_flow!(match state.c2.handle(event, Popup) {
        PickerOutcome::Value => {
            debug!("c2 {:?}", state.c2.value_iso());
            Outcome::Changed
        }
        r => r.into(),
    });

    Ok(Outcome::Continue)
}
