//! Select component - a single/multi-mode dropdown select control.

pub mod events;
pub mod item;
pub mod render;
pub mod selection;
mod state;

pub use events::{ChangeEvent, SelectEvents};
pub use item::{OptionRef, SelectOption, same_option};
pub use selection::{Mode, Selection, SelectionModeError};
pub use state::{HitRegions, Select, SelectId};
