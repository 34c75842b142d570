use crate::datepicker::event::PickerOutcome;
use crate::datepicker::picker::{handle_nav, handle_open};
use crate::datepicker::{DatePickerState, PickerSelection};
use crate::format;
use chrono::{Days, Locale, NaiveDate};
use rat_event::util::{item_at, mouse_trap};
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Popup};
use rat_focus::HasFocus;
use std::cmp::max;

/// Picks a single date.
///
/// A day click commits the date and closes the panel.
#[derive(Debug, Default, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct SingleSelection {
    selected: Option<NaiveDate>,
}

impl PickerSelection for SingleSelection {
    fn clear(&mut self) -> bool {
        let old = self.selected;
        self.selected = None;
        old.is_some()
    }

    fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    fn is_selected(&self, date: NaiveDate) -> bool {
        self.selected == Some(date)
    }

    fn is_previewed(&self, _date: NaiveDate) -> bool {
        false
    }

    fn lead_selection(&self) -> Option<NaiveDate> {
        self.selected
    }

    fn display_text(&self, locale: Locale) -> Option<String> {
        self.selected.map(|v| format::format_display(v, locale))
    }
}

impl SingleSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the date. True on change.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        let old = self.selected;
        self.selected = Some(date);
        old != self.selected
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// ISO text of the picked date.
    pub fn value_iso(&self) -> Option<String> {
        self.selected.map(format::format_iso)
    }

    /// Set from ISO text. Invalid input clears the selection.
    pub fn set_value_iso(&mut self, text: &str) -> bool {
        let old = self.selected;
        self.selected = format::parse_iso(text);
        old != self.selected
    }
}

impl HandleEvent<crossterm::event::Event, Popup, PickerOutcome>
    for DatePickerState<SingleSelection>
{
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Popup) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }

        if self.lost_focus() {
            self.set_panel_active(false);
            // focus change triggers the repaint.
        }

        let r = if self.is_focused() {
            match event {
                ct_event!(key press ' ') | ct_event!(keycode press Enter) => {
                    self.flip_panel_active();
                    PickerOutcome::Changed
                }
                ct_event!(keycode press Esc) => {
                    if self.set_panel_active(false) {
                        PickerOutcome::Changed
                    } else {
                        PickerOutcome::Continue
                    }
                }
                ct_event!(keycode press Delete) | ct_event!(keycode press Backspace) => {
                    if self.clear() {
                        PickerOutcome::Value
                    } else {
                        PickerOutcome::Continue
                    }
                }
                ct_event!(keycode press CONTROL-Home) => self.today_shortcut(),
                ct_event!(keycode press PageUp) if self.is_panel_active() => self.prev_month(),
                ct_event!(keycode press PageDown) if self.is_panel_active() => self.next_month(),
                _ => PickerOutcome::Continue,
            }
        } else {
            PickerOutcome::Continue
        };

        if !r.is_consumed() {
            self.handle(event, MouseOnly)
        } else {
            r
        }
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, PickerOutcome>
    for DatePickerState<SingleSelection>
{
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> PickerOutcome {
        if self.disabled {
            return PickerOutcome::Continue;
        }

        let r0 = handle_open(self, event);
        let r1 = handle_nav(self, event);
        let r2 = handle_pick(self, event);
        let mut r = max(r0, max(r1, r2));

        r = r.or_else(|| mouse_trap(event, self.popup.area).into());

        self.popup.active.set_lost(false);
        self.popup.active.set_gained(false);
        r
    }
}

fn handle_pick(
    state: &mut DatePickerState<SingleSelection>,
    event: &crossterm::event::Event,
) -> PickerOutcome {
    match event {
        ct_event!(mouse down Left for x, y)
            if state.popup.widget_area.contains((*x, *y).into()) =>
        {
            if let Some(n) = item_at(&state.area_days, *x, *y) {
                state.select_day(state.month() + Days::new(n as u64))
            } else {
                PickerOutcome::Unchanged
            }
        }
        _ => PickerOutcome::Continue,
    }
}
