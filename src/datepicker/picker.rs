use crate::_private::NonExhaustive;
use crate::datepicker::event::PickerOutcome;
use crate::datepicker::selection::{RangeSelection, SingleSelection};
use crate::datepicker::{DatePickerStyle, PickerSelection};
use crate::format;
use crate::grid;
use crate::overlay;
use crate::util::{block_size, revert_style};
use chrono::{Datelike, Days, Local, Locale, Months, NaiveDate, Weekday};
use log::debug;
use rat_event::util::MouseFlags;
use rat_event::{ct_event, HandleEvent, Popup};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus, Navigation};
use rat_popup::event::PopupOutcome;
use rat_popup::{PopupConstraint, PopupCore, PopupCoreState};
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::BlockExt;
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::cell::RefCell;
use std::cmp::max;
use std::marker::PhantomData;
use std::rc::Rc;

/// Date-picker.
///
/// A collapsed anchor field plus a popup panel with a month
/// calendar. Picks a single date or a date range depending on
/// the selection model.
///
/// This doesn't render itself. [into_widgets](DatePicker::into_widgets)
/// creates the anchor part and the popup part, which are rendered
/// separately.
#[derive(Debug, Clone)]
pub struct DatePicker<'a, Selection = SingleSelection> {
    style: Style,
    focus_style: Option<Style>,
    select_style: Option<Style>,
    preview_style: Option<Style>,
    day_style: Option<Style>,
    dim_style: Option<Style>,
    weekday_style: Option<Style>,
    title_style: Option<Style>,
    placeholder_style: Option<Style>,
    block: Option<Block<'a>>,
    placeholder: Option<Line<'a>>,

    locale: Locale,
    week_start: Option<Weekday>,
    disabled: bool,

    gap: u16,
    boundary: Option<Rect>,
    popup: PopupCore<'a>,

    _phantom: PhantomData<Selection>,
}

/// Renders the anchor field.
#[derive(Debug)]
pub struct DatePickerWidget<'a, Selection> {
    style: Style,
    focus_style: Option<Style>,
    placeholder_style: Option<Style>,
    block: Option<Block<'a>>,
    placeholder: Option<Line<'a>>,

    locale: Locale,
    disabled: bool,

    _phantom: PhantomData<Selection>,
}

/// Renders the panel. This is called after the rest of the
/// area is rendered and overwrites to display itself.
#[derive(Debug)]
pub struct DatePickerPopup<'a, Selection> {
    style: Style,
    select_style: Option<Style>,
    preview_style: Option<Style>,
    day_style: Option<Style>,
    dim_style: Option<Style>,
    weekday_style: Option<Style>,
    title_style: Option<Style>,

    locale: Locale,
    week_start: Option<Weekday>,

    gap: u16,
    boundary: Option<Rect>,
    popup: PopupCore<'a>,

    _phantom: PhantomData<Selection>,
}

/// State & event-handling.
#[derive(Debug)]
pub struct DatePickerState<Selection = SingleSelection> {
    /// Area of the anchor field.
    /// __read only__. renewed with each render.
    pub area: Rect,
    /// Area inside the anchor block.
    /// __read only__. renewed with each render.
    pub inner: Rect,
    /// Panel area. Computed when the panel opens and kept until
    /// it closes, it doesn't track the anchor afterwards.
    /// __read only__
    pub panel: Rect,
    /// Day hit boxes, indexed by day-of-month minus 1.
    /// Padding days have no hit box.
    /// __read only__. renewed with each render.
    pub area_days: [Rect; 31],
    /// Previous-month mark.
    /// __read only__. renewed with each render.
    pub area_prev: Rect,
    /// Next-month mark.
    /// __read only__. renewed with each render.
    pub area_next: Rect,
    /// Popup state.
    pub popup: PopupCoreState,

    /// The value, shared with any controller.
    pub selection: Rc<RefCell<Selection>>,
    /// Lower bound for selectable days.
    pub min_date: Option<NaiveDate>,
    /// Upper bound for selectable days.
    pub max_date: Option<NaiveDate>,
    /// Don't handle events.
    /// __read only__. renewed with each render.
    pub disabled: bool,

    /// First day of the displayed month.
    month: NaiveDate,

    /// Focus flag.
    /// __read+write__
    pub focus: FocusFlag,
    /// Mouse util.
    pub mouse: MouseFlags,

    pub non_exhaustive: NonExhaustive,
}

/// Shared access to the picker value.
///
/// Cheap to clone, all clones share the same value as the
/// picker state they came from.
#[derive(Debug)]
pub struct DatePickerController<Selection = SingleSelection> {
    selection: Rc<RefCell<Selection>>,
}

impl<Selection> Default for DatePicker<'_, Selection> {
    fn default() -> Self {
        Self {
            style: Default::default(),
            focus_style: None,
            select_style: None,
            preview_style: None,
            day_style: None,
            dim_style: None,
            weekday_style: None,
            title_style: None,
            placeholder_style: None,
            block: None,
            placeholder: None,
            locale: Default::default(),
            week_start: None,
            disabled: false,
            gap: 0,
            boundary: None,
            popup: Default::default(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, Selection> DatePicker<'a, Selection> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all styles.
    pub fn styles(mut self, styles: DatePickerStyle) -> Self {
        self.style = styles.style;
        if styles.title.is_some() {
            self.title_style = styles.title;
        }
        if styles.weekday.is_some() {
            self.weekday_style = styles.weekday;
        }
        if styles.day.is_some() {
            self.day_style = styles.day;
        }
        if styles.dim.is_some() {
            self.dim_style = styles.dim;
        }
        if styles.select.is_some() {
            self.select_style = styles.select;
        }
        if styles.preview.is_some() {
            self.preview_style = styles.preview;
        }
        if styles.focus.is_some() {
            self.focus_style = styles.focus;
        }
        if styles.placeholder.is_some() {
            self.placeholder_style = styles.placeholder;
        }
        if styles.block.is_some() {
            self.block = styles.block;
        }
        if let Some(offset) = styles.popup.offset {
            self.popup = self.popup.offset(offset);
        }
        self.popup = self.popup.styles(styles.popup);
        self
    }

    /// Base style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for the focused anchor.
    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = Some(style);
        self
    }

    /// Style for selected days.
    pub fn select_style(mut self, style: Style) -> Self {
        self.select_style = Some(style);
        self
    }

    /// Style for the hover preview of a range draft.
    pub fn preview_style(mut self, style: Style) -> Self {
        self.preview_style = Some(style);
        self
    }

    /// Style for day cells.
    pub fn day_style(mut self, style: Style) -> Self {
        self.day_style = Some(style);
        self
    }

    /// Style for padding days and days outside the bounds.
    pub fn dim_style(mut self, style: Style) -> Self {
        self.dim_style = Some(style);
        self
    }

    /// Style for the weekday header.
    pub fn weekday_style(mut self, style: Style) -> Self {
        self.weekday_style = Some(style);
        self
    }

    /// Style for the month title.
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = Some(style);
        self
    }

    /// Style for the placeholder text.
    pub fn placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = Some(style);
        self
    }

    /// Anchor border.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Placeholder text for an empty value.
    pub fn placeholder(mut self, placeholder: impl Into<Line<'a>>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Locale for display text and the default week-start.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Override the week-start derived from the locale.
    pub fn week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = Some(week_start);
        self
    }

    /// Don't handle events. The value stays visible.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Gap between the anchor and the panel.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Base style for the panel.
    pub fn popup_style(mut self, style: Style) -> Self {
        self.popup = self.popup.style(style);
        self
    }

    /// Border for the panel.
    pub fn popup_block(mut self, block: Block<'a>) -> Self {
        self.popup = self.popup.block(block);
        self
    }

    /// Boundary for panel placement. Defaults to the full buffer.
    pub fn popup_boundary(mut self, boundary: Rect) -> Self {
        self.boundary = Some(boundary);
        self.popup = self.popup.boundary(boundary);
        self
    }

    /// Extra offset for the panel.
    pub fn popup_offset(mut self, offset: (i16, i16)) -> Self {
        self.popup = self.popup.offset(offset);
        self
    }

    /// Inherent width of the anchor.
    pub fn width(&self) -> u16 {
        26 + block_size(&self.block).width
    }

    /// Inherent height of the anchor.
    pub fn height(&self) -> u16 {
        1 + block_size(&self.block).height
    }

    /// DatePicker itself doesn't render.
    ///
    /// This builds the anchor and the panel widget from the
    /// parameters set for DatePicker.
    pub fn into_widgets(self) -> (DatePickerWidget<'a, Selection>, DatePickerPopup<'a, Selection>) {
        (
            DatePickerWidget {
                style: self.style,
                focus_style: self.focus_style,
                placeholder_style: self.placeholder_style,
                block: self.block,
                placeholder: self.placeholder,
                locale: self.locale,
                disabled: self.disabled,
                _phantom: PhantomData,
            },
            DatePickerPopup {
                style: self.style,
                select_style: self.select_style,
                preview_style: self.preview_style,
                day_style: self.day_style,
                dim_style: self.dim_style,
                weekday_style: self.weekday_style,
                title_style: self.title_style,
                locale: self.locale,
                week_start: self.week_start,
                gap: self.gap,
                boundary: self.boundary,
                popup: self.popup,
                _phantom: PhantomData,
            },
        )
    }
}

impl<Selection> StatefulWidget for DatePickerWidget<'_, Selection>
where
    Selection: PickerSelection,
{
    type State = DatePickerState<Selection>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_picker(&self, area, buf, state);
    }
}

fn render_picker<Selection: PickerSelection>(
    widget: &DatePickerWidget<'_, Selection>,
    area: Rect,
    buf: &mut Buffer,
    state: &mut DatePickerState<Selection>,
) {
    state.area = area;
    state.disabled = widget.disabled;

    let inner = widget.block.inner_if_some(area);
    state.inner = inner;

    let style = widget.style;
    let focus_style = widget.focus_style.unwrap_or(revert_style(widget.style));

    if widget.block.is_some() {
        widget.block.render(area, buf);
    } else {
        buf.set_style(inner, style);
    }
    if state.is_focused() && !state.disabled {
        buf.set_style(inner, focus_style);
    }

    let text_area = Rect::new(
        inner.x,
        inner.y,
        inner.width.saturating_sub(3),
        inner.height,
    );

    if let Some(text) = state.selection.display_text(widget.locale) {
        Span::from(text).render(text_area, buf);
    } else if let Some(placeholder) = &widget.placeholder {
        let placeholder_style = widget.placeholder_style.unwrap_or(style.dim());
        buf.set_style(text_area, placeholder_style);
        placeholder.render(text_area, buf);
    }

    let dy = if (inner.height & 1) == 1 {
        inner.height / 2
    } else {
        inner.height.saturating_sub(1) / 2
    };
    let bc = if state.is_panel_active() {
        " ◆ "
    } else {
        " ▼ "
    };
    Span::from(bc).render(
        Rect::new(inner.right().saturating_sub(3), inner.y + dy, 3, 1).intersection(inner),
        buf,
    );
}

impl<Selection> StatefulWidget for DatePickerPopup<'_, Selection>
where
    Selection: PickerSelection,
{
    type State = DatePickerState<Selection>;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_panel(&self, area, buf, state);
    }
}

fn render_panel<Selection: PickerSelection>(
    widget: &DatePickerPopup<'_, Selection>,
    area: Rect,
    buf: &mut Buffer,
    state: &mut DatePickerState<Selection>,
) {
    state.area_days = [Rect::default(); 31];
    state.area_prev = Rect::default();
    state.area_next = Rect::default();

    if !state.popup.is_active() {
        state.panel = Rect::default();
        state.popup.clear_areas();
        return;
    }

    let week_start = widget
        .week_start
        .unwrap_or_else(|| format::week_start(widget.locale));
    let month_grid = grid::month_grid(state.month, week_start);

    let block = widget.popup.get_block_size();
    let width = max(area.width, 7 * 3 + block.width);
    let height = 2 + month_grid.week_len() as u16 + block.height;

    if state.panel.is_empty() {
        // fixed once at open time, doesn't track the anchor
        let boundary = widget.boundary.unwrap_or(buf.area);
        state.panel = overlay::keep_in_boundary(
            overlay::panel_area(area, widget.gap, width, height),
            boundary,
        );
        debug!("picker panel at {:?}", state.panel);
    } else {
        // the month can change while open, the height follows
        state.panel.height = height;
    }

    widget
        .popup
        .ref_constraint(PopupConstraint::Position(state.panel.x, state.panel.y))
        .render(
            Rect::new(0, 0, state.panel.width, state.panel.height),
            buf,
            &mut state.popup,
        );

    let inner = state.popup.widget_area;
    if inner.is_empty() {
        return;
    }

    let title_style = widget.title_style.unwrap_or(widget.style);
    let weekday_style = widget.weekday_style.unwrap_or(widget.style);
    let day_style = widget.day_style.unwrap_or(widget.style);
    let dim_style = widget.dim_style.unwrap_or(widget.style.dim());
    let select_style = widget
        .select_style
        .unwrap_or(revert_style(widget.style));
    let preview_style = widget
        .preview_style
        .unwrap_or(widget.style.underlined());

    // title with month navigation marks
    let title_area = Rect::new(inner.x, inner.y, inner.width, 1).intersection(inner);
    state.area_prev = Rect::new(inner.x, inner.y, 2, 1).intersection(inner);
    state.area_next = Rect::new(inner.right().saturating_sub(2), inner.y, 2, 1).intersection(inner);

    Line::from(
        state
            .month
            .format_localized("%B %Y", widget.locale)
            .to_string(),
    )
    .style(title_style)
    .centered()
    .render(title_area, buf);
    Span::from("« ").style(title_style).render(state.area_prev, buf);
    Span::from(" »").style(title_style).render(state.area_next, buf);

    // weekday header
    if let Some(first_week) = month_grid.weeks().first() {
        let mut x = inner.x;
        for day in first_week {
            let cell = Rect::new(x, inner.y + 1, 2, 1).intersection(inner);
            let name = day.format_localized("%a", widget.locale).to_string();
            Span::from(format!("{:2}", name))
                .style(weekday_style)
                .render(cell, buf);
            x += 3;
        }
    }

    // day grid
    let mut y = inner.y + 2;
    for week in month_grid.weeks() {
        let mut x = inner.x;
        for (i, day) in week.iter().enumerate() {
            let cell = Rect::new(x, y, 2, 1).intersection(inner);
            let text = day.format_localized("%e", widget.locale).to_string();

            if month_grid.is_padding(*day) {
                Span::from(text).style(dim_style).render(cell, buf);
            } else {
                let style = day_cell_style(
                    state,
                    *day,
                    day_style,
                    select_style,
                    preview_style,
                    dim_style,
                );
                state.area_days[day.day0() as usize] = cell;
                Span::from(text).style(style).render(cell, buf);

                // bridge the gap between two highlighted days
                if i < 6 {
                    let next = *day + Days::new(1);
                    let selected =
                        state.selection.is_selected(*day) && state.selection.is_selected(next);
                    let previewed =
                        state.selection.is_previewed(*day) && state.selection.is_previewed(next);
                    if selected || previewed {
                        let gap_area = Rect::new(cell.x + 2, cell.y, 1, 1).intersection(inner);
                        Span::from(" ").style(style).render(gap_area, buf);
                    }
                }
            }

            x += 3;
        }
        y += 1;
    }
}

fn day_cell_style<Selection: PickerSelection>(
    state: &DatePickerState<Selection>,
    day: NaiveDate,
    day_style: Style,
    select_style: Style,
    preview_style: Style,
    dim_style: Style,
) -> Style {
    if grid::is_outside_bounds(day, state.min_date, state.max_date) {
        dim_style
    } else if state.selection.is_selected(day) {
        day_style.patch(select_style)
    } else if state.selection.is_previewed(day) {
        day_style.patch(preview_style)
    } else {
        day_style
    }
}

impl<Selection: PickerSelection + Clone> Clone for DatePickerState<Selection> {
    fn clone(&self) -> Self {
        Self {
            area: self.area,
            inner: self.inner,
            panel: self.panel,
            area_days: self.area_days,
            area_prev: self.area_prev,
            area_next: self.area_next,
            popup: self.popup.clone(),
            selection: Rc::new(RefCell::new(self.selection.borrow().clone())),
            min_date: self.min_date,
            max_date: self.max_date,
            disabled: self.disabled,
            month: self.month,
            focus: FocusFlag::named(self.focus.name()),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl<Selection: PickerSelection + Default> Default for DatePickerState<Selection> {
    fn default() -> Self {
        Self {
            area: Default::default(),
            inner: Default::default(),
            panel: Default::default(),
            area_days: [Rect::default(); 31],
            area_prev: Default::default(),
            area_next: Default::default(),
            popup: Default::default(),
            selection: Default::default(),
            min_date: None,
            max_date: None,
            disabled: false,
            month: Default::default(),
            focus: Default::default(),
            mouse: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl<Selection: PickerSelection> HasFocus for DatePickerState<Selection> {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.widget_with_flags(self.focus(), self.area(), 0, self.navigable());
        builder.widget_with_flags(self.focus(), self.popup.area, 1, Navigation::Mouse);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        self.area
    }

    fn navigable(&self) -> Navigation {
        if self.disabled {
            Navigation::None
        } else {
            Navigation::Regular
        }
    }
}

impl<Selection: PickerSelection> RelocatableState for DatePickerState<Selection> {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        self.area_prev = relocate_area(self.area_prev, shift, clip);
        self.area_next = relocate_area(self.area_next, shift, clip);
        relocate_areas(&mut self.area_days, shift, clip);
        self.popup.relocate(shift, clip);
    }
}

impl<Selection: PickerSelection + Default> DatePickerState<Selection> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self {
            focus: FocusFlag::named(name),
            ..Default::default()
        }
    }
}

impl<Selection: PickerSelection> DatePickerState<Selection> {
    /// A controller sharing this picker's value.
    pub fn controller(&self) -> DatePickerController<Selection> {
        DatePickerController {
            selection: self.selection.clone(),
        }
    }

    /// Panel open?
    pub fn is_panel_active(&self) -> bool {
        self.popup.is_active()
    }

    /// Open/close the panel.
    ///
    /// Opening shows the month of the current value, or today's
    /// month for an empty value. True on change.
    pub fn set_panel_active(&mut self, active: bool) -> bool {
        let r = self.popup.set_active(active);
        if r {
            if active {
                let date = self.selection.lead_selection().unwrap_or_else(today);
                self.month = grid::first_day_of_month(date);
            } else {
                self.panel = Rect::default();
            }
        }
        r
    }

    /// Flip the panel state.
    pub fn flip_panel_active(&mut self) {
        let active = !self.is_panel_active();
        self.set_panel_active(active);
    }

    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    /// Show the month containing the date. True on change.
    pub fn scroll_to(&mut self, date: NaiveDate) -> bool {
        let old = self.month;
        self.month = grid::first_day_of_month(date);
        old != self.month
    }

    /// Show the previous month.
    pub fn prev_month(&mut self) -> PickerOutcome {
        self.month = self.month - Months::new(1);
        PickerOutcome::Changed
    }

    /// Show the next month.
    pub fn next_month(&mut self) -> PickerOutcome {
        self.month = self.month + Months::new(1);
        PickerOutcome::Changed
    }

    /// Clear the value. True if something was cleared, clearing
    /// an empty value reports no change.
    pub fn clear(&mut self) -> bool {
        self.selection.clear()
    }

    /// Nothing selected?
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Selection lead, or the sole selected day.
    pub fn lead_selection(&self) -> Option<NaiveDate> {
        self.selection.lead_selection()
    }
}

impl DatePickerState<SingleSelection> {
    /// Select a day, commit the value and close the panel.
    ///
    /// Days outside the min/max bounds are not selectable.
    pub fn select_day(&mut self, date: NaiveDate) -> PickerOutcome {
        if grid::is_outside_bounds(date, self.min_date, self.max_date) {
            return PickerOutcome::Unchanged;
        }

        let changed = self.selection.borrow_mut().select(date);
        let closed = self.set_panel_active(false);

        if changed {
            PickerOutcome::Value
        } else if closed {
            PickerOutcome::Changed
        } else {
            PickerOutcome::Unchanged
        }
    }

    /// Select today.
    pub fn today_shortcut(&mut self) -> PickerOutcome {
        self.select_day(today())
    }

    /// ISO text of the value.
    pub fn value_iso(&self) -> Option<String> {
        self.selection.borrow().value_iso()
    }

    /// Set the value from ISO text. Invalid input gives an
    /// empty value.
    pub fn set_value_iso(&mut self, text: &str) -> bool {
        self.selection.borrow_mut().set_value_iso(text)
    }
}

impl DatePickerState<RangeSelection> {
    /// Select a day. Starts the range or completes it, completion
    /// closes the panel.
    ///
    /// Days outside the min/max bounds are not selectable.
    pub fn select_day(&mut self, date: NaiveDate) -> PickerOutcome {
        if grid::is_outside_bounds(date, self.min_date, self.max_date) {
            return PickerOutcome::Unchanged;
        }

        let changed = self.selection.borrow_mut().select(date);

        if self.selection.borrow().is_draft() {
            if changed {
                PickerOutcome::Draft
            } else {
                PickerOutcome::Unchanged
            }
        } else {
            let closed = self.set_panel_active(false);
            if changed {
                PickerOutcome::Value
            } else if closed {
                PickerOutcome::Changed
            } else {
                PickerOutcome::Unchanged
            }
        }
    }

    /// Select today.
    pub fn today_shortcut(&mut self) -> PickerOutcome {
        self.select_day(today())
    }

    /// Hover preview while drafting. Days outside the min/max
    /// bounds don't preview. True on change.
    pub fn set_preview(&mut self, preview: Option<NaiveDate>) -> bool {
        let preview =
            preview.filter(|v| !grid::is_outside_bounds(*v, self.min_date, self.max_date));
        self.selection.borrow_mut().set_preview(preview)
    }

    /// ISO text of the range. A draft gives the start and an
    /// empty string.
    pub fn value_iso(&self) -> Option<(String, String)> {
        self.selection.borrow().value_iso()
    }

    /// Set the range from ISO text. Invalid or unordered input
    /// gives an empty value.
    pub fn set_value_iso(&mut self, start: &str, end: &str) -> bool {
        self.selection.borrow_mut().set_value_iso(start, end)
    }
}

impl<Selection> Clone for DatePickerController<Selection> {
    fn clone(&self) -> Self {
        Self {
            selection: self.selection.clone(),
        }
    }
}

impl<Selection: PickerSelection> DatePickerController<Selection> {
    /// Nothing selected?
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Selection lead, or the sole selected day.
    pub fn lead_selection(&self) -> Option<NaiveDate> {
        self.selection.lead_selection()
    }

    /// Clear the value. True if something was cleared.
    pub fn clear(&mut self) -> bool {
        self.selection.clear()
    }

    /// Localized display text.
    pub fn display_text(&self, locale: Locale) -> Option<String> {
        self.selection.display_text(locale)
    }
}

impl DatePickerController<SingleSelection> {
    pub fn selected(&self) -> Option<NaiveDate> {
        self.selection.borrow().selected()
    }

    pub fn value_iso(&self) -> Option<String> {
        self.selection.borrow().value_iso()
    }

    pub fn set_value_iso(&mut self, text: &str) -> bool {
        self.selection.borrow_mut().set_value_iso(text)
    }
}

impl DatePickerController<RangeSelection> {
    pub fn range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.selection.borrow().range()
    }

    pub fn value_iso(&self) -> Option<(String, String)> {
        self.selection.borrow().value_iso()
    }

    pub fn set_value_iso(&mut self, start: &str, end: &str) -> bool {
        self.selection.borrow_mut().set_value_iso(start, end)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(crate) fn handle_open<Selection: PickerSelection>(
    state: &mut DatePickerState<Selection>,
    event: &crossterm::event::Event,
) -> PickerOutcome {
    match event {
        ct_event!(mouse down Left for x, y) if state.area.contains((*x, *y).into()) => {
            if !state.gained_focus() && !state.popup.active.lost() {
                state.flip_panel_active();
                PickerOutcome::Changed
            } else {
                PickerOutcome::Continue
            }
        }
        ct_event!(mouse down Left for x, y)
        | ct_event!(mouse down Right for x, y)
        | ct_event!(mouse down Middle for x, y)
            if !state.area.contains((*x, *y).into()) =>
        {
            match state.popup.handle(event, Popup) {
                PopupOutcome::Hide => {
                    state.set_panel_active(false);
                    PickerOutcome::Changed
                }
                r => r.into(),
            }
        }
        _ => PickerOutcome::Continue,
    }
}

pub(crate) fn handle_nav<Selection: PickerSelection>(
    state: &mut DatePickerState<Selection>,
    event: &crossterm::event::Event,
) -> PickerOutcome {
    if !state.is_panel_active() {
        return PickerOutcome::Continue;
    }

    match event {
        ct_event!(mouse down Left for x, y) if state.area_prev.contains((*x, *y).into()) => {
            state.prev_month()
        }
        ct_event!(mouse down Left for x, y) if state.area_next.contains((*x, *y).into()) => {
            state.next_month()
        }
        ct_event!(scroll up for x, y) if state.popup.area.contains((*x, *y).into()) => {
            state.prev_month()
        }
        ct_event!(scroll down for x, y) if state.popup.area.contains((*x, *y).into()) => {
            state.next_month()
        }
        _ => PickerOutcome::Continue,
    }
}

/// Handle events for the picker and its panel.
/// Call before other handlers to deal with intersections
/// with other widgets.
pub fn handle_popup<Selection: PickerSelection>(
    state: &mut DatePickerState<Selection>,
    focus: bool,
    event: &crossterm::event::Event,
) -> PickerOutcome
where
    DatePickerState<Selection>: HandleEvent<crossterm::event::Event, Popup, PickerOutcome>,
{
    state.focus.set(focus);
    HandleEvent::handle(state, event, Popup)
}

/// Handle only mouse-events.
pub fn handle_mouse_events<Selection: PickerSelection>(
    state: &mut DatePickerState<Selection>,
    event: &crossterm::event::Event,
) -> PickerOutcome
where
    DatePickerState<Selection>:
        HandleEvent<crossterm::event::Event, rat_event::MouseOnly, PickerOutcome>,
{
    HandleEvent::handle(state, event, rat_event::MouseOnly)
}
