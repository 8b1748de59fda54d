//! A combo-box (selectable dropdown list) control for terminal UIs.
//!
//! The crate is split along the same lines as the control itself:
//!
//! - [`select::selection`] - the pure selection model: given the current
//!   selection and a candidate option, compute the next selection. Single
//!   and multi mode are separate payload shapes of one tagged variant.
//! - [`select::Select`] - the interaction state machine: open/closed state
//!   and the hover cursor, owned by the component itself.
//! - [`select::events`] - pointer and keyboard event routing that drives
//!   the selection model and reports computed changes to the host.
//! - [`select::render`] - ratatui rendering of the trigger row and the
//!   open dropdown, recording hit regions for pointer routing.
//!
//! The control is *controlled*: the host supplies the option list and the
//! current selection each render, and applies the [`select::ChangeEvent`]s
//! the control emits. The control never owns persisted selection state.

pub mod events;
pub mod keybinds;
pub mod select;

pub mod prelude {
    pub use crate::events::{ComponentEvents, EventResult, Modifiers};
    pub use crate::keybinds::{Key, KeyCombo};
    pub use crate::select::{
        ChangeEvent, Mode, OptionRef, Select, SelectEvents, SelectId, SelectOption, Selection,
        SelectionModeError, same_option,
    };
}
