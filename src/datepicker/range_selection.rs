use crate::datepicker::event::PickerOutcome;
use crate::datepicker::picker::{handle_nav, handle_open};
use crate::datepicker::{DatePickerState, PickerSelection};
use crate::format;
use crate::grid::is_within;
use chrono::{Days, Locale, NaiveDate};
use rat_event::util::{item_at, mouse_trap};
use rat_event::{ct_event, ConsumedEvent, HandleEvent, MouseOnly, Popup};
use rat_focus::HasFocus;
use std::cmp::max;

/// Picks a date range.
///
/// The first day click starts a draft, the second completes the
/// range and closes the panel. A draft in reverse order is fine,
/// the stored range is always ordered. While drafting, the day
/// under the mouse shows a preview of the would-be range.
#[derive(Debug, Default, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde_derive::Serialize, serde_derive::Deserialize)
)]
pub struct RangeSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(skip))]
    preview: Option<NaiveDate>,
}

impl PickerSelection for RangeSelection {
    fn clear(&mut self) -> bool {
        let old = self.start.is_some() || self.end.is_some() || self.preview.is_some();
        self.start = None;
        self.end = None;
        self.preview = None;
        old
    }

    fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    fn is_selected(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => is_within(date, start, end),
            (Some(start), None) => date == start,
            _ => false,
        }
    }

    fn is_previewed(&self, date: NaiveDate) -> bool {
        if let Some((start, end)) = self.preview_range() {
            is_within(date, start, end)
        } else {
            false
        }
    }

    fn lead_selection(&self) -> Option<NaiveDate> {
        self.end.or(self.start)
    }

    fn display_text(&self, locale: Locale) -> Option<String> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(format!(
                "{} – {}",
                format::format_display(start, locale),
                format::format_display(end, locale)
            )),
            (Some(start), None) => Some(format!("{} – ", format::format_display(start, locale))),
            _ => None,
        }
    }
}

impl RangeSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range started but not completed?
    pub fn is_draft(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    /// Select a day.
    ///
    /// Starts a draft when the selection is empty or complete.
    /// Completes the draft otherwise. Completing with a day before
    /// the draft start swaps the endpoints, so the stored range is
    /// always ordered. True on change.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        let old = (self.start, self.end);

        match (self.start, self.end) {
            (Some(start), None) => {
                if date < start {
                    self.start = Some(date);
                    self.end = Some(start);
                } else {
                    self.end = Some(date);
                }
                self.preview = None;
            }
            _ => {
                self.start = Some(date);
                self.end = None;
            }
        }

        old != (self.start, self.end)
    }

    /// Hover preview while drafting. Ignored otherwise.
    /// True on change.
    pub fn set_preview(&mut self, preview: Option<NaiveDate>) -> bool {
        let old = self.preview;
        self.preview = if self.is_draft() { preview } else { None };
        old != self.preview
    }

    /// Ordered span from the draft start to the preview day.
    pub fn preview_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end, self.preview) {
            (Some(start), None, Some(preview)) => {
                if preview < start {
                    Some((preview, start))
                } else {
                    Some((start, preview))
                }
            }
            _ => None,
        }
    }

    /// The completed range.
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// ISO text of the range.
    ///
    /// A complete range gives both endpoints, a draft gives the
    /// start and an empty string.
    pub fn value_iso(&self) -> Option<(String, String)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                Some((format::format_iso(start), format::format_iso(end)))
            }
            (Some(start), None) => Some((format::format_iso(start), String::new())),
            _ => None,
        }
    }

    /// Set from ISO text. An empty end gives a draft.
    /// Invalid or unordered input clears the selection.
    pub fn set_value_iso(&mut self, start: &str, end: &str) -> bool {
        let old = (self.start, self.end);

        self.start = None;
        self.end = None;
        self.preview = None;

        if let Some(start) = format::parse_iso(start) {
            if end.is_empty() {
                self.start = Some(start);
            } else if let Some(end) = format::parse_iso(end) {
                if start <= end {
                    self.start = Some(start);
                    self.end = Some(end);
                }
            }
        }

        old != (self.start, self.end)
    }
}

impl HandleEvent<crossterm::event::Event, Popup, PickerOutcome>
    for DatePickerState<RangeSelection>
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
    for DatePickerState<RangeSelection>
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
    state: &mut DatePickerState<RangeSelection>,
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
        ct_event!(mouse moved for x, y)
            if state.popup.widget_area.contains((*x, *y).into()) =>
        {
            let preview = item_at(&state.area_days, *x, *y)
                .map(|n| state.month() + Days::new(n as u64));
            state.set_preview(preview).into()
        }
        ct_event!(mouse moved) => {
            // leaving the grid drops the preview
            if state.set_preview(None) {
                PickerOutcome::Changed
            } else {
                PickerOutcome::Continue
            }
        }
        _ => PickerOutcome::Continue,
    }
}
