use crate::_private::NonExhaustive;
use rat_popup::PopupStyle;
use ratatui::style::Style;
use ratatui::widgets::Block;

/// Composite style for the date-picker.
#[derive(Debug, Clone)]
pub struct DatePickerStyle {
    /// Base style.
    pub style: Style,
    /// Month title.
    pub title: Option<Style>,
    /// Weekday header.
    pub weekday: Option<Style>,
    /// Day cells.
    pub day: Option<Style>,
    /// Padding days and days outside the picker bounds.
    pub dim: Option<Style>,
    /// Selected day(s).
    pub select: Option<Style>,
    /// Hover preview for a range draft.
    pub preview: Option<Style>,
    /// Focused anchor.
    pub focus: Option<Style>,
    /// Placeholder text in the anchor.
    pub placeholder: Option<Style>,
    /// Anchor border.
    pub block: Option<Block<'static>>,
    /// Popup panel.
    pub popup: PopupStyle,

    pub non_exhaustive: NonExhaustive,
}

impl Default for DatePickerStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            title: None,
            weekday: None,
            day: None,
            dim: None,
            select: None,
            preview: None,
            focus: None,
            placeholder: None,
            block: None,
            popup: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}
