use crate::mini_salsa::theme::THEME;
use crate::mini_salsa::{layout_grid, run_ui, setup_logging, MiniSalsaState};
use log::debug;
use rat_datepicker::datepicker::selection::RangeSelection;
use rat_datepicker::datepicker::{DatePicker, DatePickerState};
use rat_datepicker::event::{Outcome, PickerOutcome};
use rat_event::{try_flow, HandleEvent, Popup, Regular};
use rat_focus::{Focus, FocusBuilder};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::widgets::StatefulWidget;
use ratatui::Frame;

mod mini_salsa;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let mut data = Data {};

    let mut state = State {
        c1: DatePickerState::named("c1"),
    };

    run_ui(
        "picker_range1",
        |_| {},
        handle_input,
        repaint_input,
        &mut data,
        &mut state,
    )
}

struct Data {}

struct State {
    c1: DatePickerState<RangeSelection>,
}

fn repaint_input(
    frame: &mut Frame<'_>,
    area: Rect,
    _data: &mut Data,
    istate: &mut MiniSalsaState,
    state: &mut State,
) -> Result<(), anyhow::Error> {
    let lg = layout_grid::<2, 2>(
        area,
        Layout::horizontal([
            Constraint::Length(25), //
            Constraint::Fill(1),
            Constraint::Length(25),
        ])
        .flex(Flex::Start),
        Layout::vertical([
            Constraint::Length(4), //
            Constraint::Length(1),
        ])
        .spacing(1),
    );

    let (w1, p1) = DatePicker::new()
        .styles(THEME.datepicker_style())
        .placeholder("pick a range")
        .popup_boundary(area)
        .into_widgets();
    w1.render(lg[1][1], frame.buffer_mut(), &mut state.c1);

    p1.render(lg[1][1], frame.buffer_mut(), &mut state.c1);

    if let Some((start, end)) = state.c1.value_iso() {
        istate.status[0] = format!("c1 {} .. {}", start, end);
    }

    Ok(())
}

fn focus(state: &mut State) -> Focus {
    let mut fb = FocusBuilder::new(None);
    fb.widget(&state.c1);
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
        PickerOutcome::Draft => {
            debug!("c1 draft {:?}", state.c1.value_iso());
            Outcome::Changed
        }
        r => r.into(),
    });

    Ok(Outcome::Continue)
}
