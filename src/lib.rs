#![doc = include_str!("../readme.md")]
//
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

pub mod event {
    //!
    //! Event-handler traits and Keybindings.
    //!
    //! See [rat-event](https://docs.rs/rat-event/latest/rat_event/)
    //!
    pub use rat_event::*;

    pub use crate::datepicker::event::PickerOutcome;
    pub use rat_popup::event::PopupOutcome;
}

/// Module for focus-handling functionality.
/// See [rat-focus](https://docs.rs/rat-focus)
pub mod focus {
    pub use rat_focus::{
        handle_focus, impl_has_focus, match_focus, on_gained, on_lost, Focus, FocusBuilder,
        FocusFlag, HasFocus, Navigation,
    };
}

/// Trait for relocatable widgets.
/// See also [rat-reloc](https://docs.rs/rat-reloc/latest/rat_reloc/)
pub mod reloc {
    pub use rat_reloc::{
        impl_relocatable_state, relocate_area, relocate_areas, relocate_position,
        relocate_positions, RelocatableState,
    };
}

/// PopupCore helps with managing popup widgets.
/// See also [rat-popup](https://docs.rs/rat-popup/latest/rat_popup/)
pub mod popup {
    pub use rat_popup::{Placement, PopupConstraint, PopupCore, PopupCoreState, PopupStyle};
}

pub mod datepicker;
pub mod format;
pub mod grid;
pub mod overlay;
pub mod util;

mod _private {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct NonExhaustive;
}
