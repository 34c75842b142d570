//!
//! Date-picker widget.
//!
//! A collapsed anchor field shows the current value. Activating
//! it opens a popup panel with a month calendar. The value model
//! is a [PickerSelection], the picker state is generic over it,
//! so the pick-mode is fixed by the type.
//!

use chrono::{Locale, NaiveDate};

pub(crate) mod event;
mod picker;
mod range_selection;
mod single_selection;
mod style;

pub use picker::*;
pub use style::*;

/// Value model for a date-picker.
pub trait PickerSelection {
    /// Clear the selection. True if anything was cleared.
    fn clear(&mut self) -> bool;

    /// Nothing selected?
    fn is_empty(&self) -> bool;

    /// Is the given day selected.
    fn is_selected(&self, date: NaiveDate) -> bool;

    /// Is the given day part of the hover preview.
    fn is_previewed(&self, date: NaiveDate) -> bool;

    /// Selection lead, or the sole selected day.
    fn lead_selection(&self) -> Option<NaiveDate>;

    /// Localized display text for the anchor field.
    fn display_text(&self, locale: Locale) -> Option<String>;
}

pub mod selection {
    use crate::datepicker::PickerSelection;
    use chrono::{Locale, NaiveDate};
    use std::cell::RefCell;
    use std::rc::Rc;

    pub use super::range_selection::*;
    pub use super::single_selection::*;

    impl<T: PickerSelection> PickerSelection for Rc<RefCell<T>> {
        fn clear(&mut self) -> bool {
            self.borrow_mut().clear()
        }

        fn is_empty(&self) -> bool {
            self.borrow().is_empty()
        }

        fn is_selected(&self, date: NaiveDate) -> bool {
            self.borrow().is_selected(date)
        }

        fn is_previewed(&self, date: NaiveDate) -> bool {
            self.borrow().is_previewed(date)
        }

        fn lead_selection(&self) -> Option<NaiveDate> {
            self.borrow().lead_selection()
        }

        fn display_text(&self, locale: Locale) -> Option<String> {
            self.borrow().display_text(locale)
        }
    }
}
