//! Selection model: pure next-state decisions over single/multi selections.
//!
//! Single and multi mode are mutually exclusive payload shapes of one
//! tagged variant, so a selection can never carry both a lone value and a
//! sequence at once. All operations are pure: they read `self` and return
//! the next selection, leaving the caller (the interaction state machine)
//! to decide what to do with it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::item::{OptionRef, same_option};

/// Selection mode, fixed per control instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// Zero-or-one selected option.
    Single,
    /// An ordered sequence of selected options.
    Multi,
}

/// Error returned when a host-supplied selection does not fit the control.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionModeError {
    #[error("selection shape does not match control mode: expected {expected:?}, got {got:?}")]
    ModeMismatch { expected: Mode, got: Mode },
}

/// The host-owned current choice(s), shaped per mode.
///
/// Membership and equality are by option handle identity, not by field
/// values (see [`super::item::OptionRef`]).
#[derive(Debug, Clone)]
pub enum Selection {
    /// Zero-or-one selected option.
    Single(Option<OptionRef>),
    /// Selected options in first-selected-first order, no duplicates.
    Multi(Vec<OptionRef>),
}

impl Selection {
    /// The empty selection for a mode.
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Single => Selection::Single(None),
            Mode::Multi => Selection::Multi(Vec::new()),
        }
    }

    /// The mode this selection is shaped for.
    pub fn mode(&self) -> Mode {
        match self {
            Selection::Single(_) => Mode::Single,
            Selection::Multi(_) => Mode::Multi,
        }
    }

    /// Number of selected options.
    pub fn len(&self) -> usize {
        match self {
            Selection::Single(current) => usize::from(current.is_some()),
            Selection::Multi(current) => current.len(),
        }
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All selected options, in selection order.
    pub fn selected(&self) -> Vec<OptionRef> {
        match self {
            Selection::Single(current) => current.iter().cloned().collect(),
            Selection::Multi(current) => current.clone(),
        }
    }

    /// Check whether an option is part of the selection.
    pub fn is_selected(&self, option: &OptionRef) -> bool {
        match self {
            Selection::Single(current) => {
                current.as_ref().is_some_and(|c| same_option(c, option))
            }
            Selection::Multi(current) => current.iter().any(|c| same_option(c, option)),
        }
    }

    /// Apply a candidate and return the next selection.
    ///
    /// Single mode replaces the current value; re-applying the already
    /// selected option returns `None`, meaning "unchanged, do not emit a
    /// change". Multi mode toggles membership: a selected candidate is
    /// removed (preserving the order of the others), an unselected one is
    /// appended at the end.
    pub fn apply(&self, candidate: &OptionRef) -> Option<Selection> {
        match self {
            Selection::Single(current) => {
                if current.as_ref().is_some_and(|c| same_option(c, candidate)) {
                    None
                } else {
                    Some(Selection::Single(Some(candidate.clone())))
                }
            }
            Selection::Multi(current) => {
                let next = if self.is_selected(candidate) {
                    current
                        .iter()
                        .filter(|c| !same_option(c, candidate))
                        .cloned()
                        .collect()
                } else {
                    let mut next = current.clone();
                    next.push(candidate.clone());
                    next
                };
                Some(Selection::Multi(next))
            }
        }
    }

    /// Apply a candidate without ever removing it.
    ///
    /// This is the keyboard-commit path: in multi mode an already selected
    /// candidate is left alone (`None`, no change) rather than toggled off.
    /// Single mode behaves exactly like [`Selection::apply`].
    pub fn insert(&self, candidate: &OptionRef) -> Option<Selection> {
        match self {
            Selection::Single(_) => self.apply(candidate),
            Selection::Multi(_) => {
                if self.is_selected(candidate) {
                    None
                } else {
                    self.apply(candidate)
                }
            }
        }
    }

    /// The empty selection of the same mode.
    pub fn cleared(&self) -> Selection {
        Selection::empty(self.mode())
    }
}

impl PartialEq for Selection {
    /// Identity-based equality: selections are equal when they hold the
    /// same option handles in the same order.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Selection::Single(a), Selection::Single(b)) => match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => same_option(a, b),
                _ => false,
            },
            (Selection::Multi(a), Selection::Multi(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| same_option(a, b))
            }
            _ => false,
        }
    }
}
