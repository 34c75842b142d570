use rat_event::{ConsumedEvent, Outcome};
use rat_popup::event::PopupOutcome;

/// Result value for event-handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PickerOutcome {
    /// The given event was not handled at all.
    Continue,
    /// The event was handled, no repaint necessary.
    Unchanged,
    /// The event was handled, repaint necessary.
    Changed,
    /// A range start has been set, the range is not complete yet.
    Draft,
    /// The picked value has changed.
    Value,
}

impl ConsumedEvent for PickerOutcome {
    fn is_consumed(&self) -> bool {
        *self != PickerOutcome::Continue
    }
}

impl From<Outcome> for PickerOutcome {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Continue => PickerOutcome::Continue,
            Outcome::Unchanged => PickerOutcome::Unchanged,
            Outcome::Changed => PickerOutcome::Changed,
        }
    }
}

impl From<PickerOutcome> for Outcome {
    fn from(value: PickerOutcome) -> Self {
        match value {
            PickerOutcome::Continue => Outcome::Continue,
            PickerOutcome::Unchanged => Outcome::Unchanged,
            PickerOutcome::Changed => Outcome::Changed,
            PickerOutcome::Draft => Outcome::Changed,
            PickerOutcome::Value => Outcome::Changed,
        }
    }
}

impl From<PopupOutcome> for PickerOutcome {
    fn from(value: PopupOutcome) -> Self {
        match value {
            PopupOutcome::Continue => PickerOutcome::Continue,
            PopupOutcome::Unchanged => PickerOutcome::Unchanged,
            PopupOutcome::Changed => PickerOutcome::Changed,
            PopupOutcome::Hide => PickerOutcome::Changed,
        }
    }
}

impl From<bool> for PickerOutcome {
    fn from(value: bool) -> Self {
        if value {
            PickerOutcome::Changed
        } else {
            PickerOutcome::Unchanged
        }
    }
}
