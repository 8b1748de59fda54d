//! Event handling for the Select component.
//!
//! Pointer routing walks the renderer-recorded hit regions from the most
//! nested part outwards: clear glyph, badge remove glyphs, trigger body,
//! dropdown rows. The first hit consumes the event, so a click on an inner
//! control never falls through to the container toggle.

use log::debug;
use ratatui::layout::{Position, Rect};

use crate::events::{ComponentEvents, EventResult};
use crate::keybinds::{Key, KeyCombo};

use super::selection::{Mode, Selection};
use super::state::Select;

/// Event fired when the control computes a new selection for the host.
///
/// The control does not apply the value itself; the host stores it and
/// feeds it back through [`Select::set_selection`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// The next selection value.
    pub selection: Selection,
}

/// Pending events to be dispatched after input handling.
#[derive(Debug, Clone, Default)]
pub struct SelectEvents {
    pub change: Option<ChangeEvent>,
}

impl SelectEvents {
    fn changed(selection: Selection) -> Self {
        Self {
            change: Some(ChangeEvent { selection }),
        }
    }

    /// Check if no events are pending.
    pub fn is_empty(&self) -> bool {
        self.change.is_none()
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    rect.contains(Position::new(x, y))
}

impl Select {
    // -------------------------------------------------------------------------
    // Pointer input
    // -------------------------------------------------------------------------

    /// Handle a click at the given terminal position.
    /// Returns events that should be dispatched to the host.
    pub fn handle_click(&self, x: u16, y: u16) -> (EventResult, SelectEvents) {
        let regions = self.regions();

        // Clear control: separate interaction target, open state untouched.
        if let Some(rect) = regions.clear
            && contains(rect, x, y)
        {
            return (EventResult::Consumed, self.clear_selection());
        }

        // Badge remove glyphs (multi mode): toggle off without closing.
        for (index, rect) in &regions.badges {
            if contains(*rect, x, y) {
                return (EventResult::Consumed, self.remove_badge(*index));
            }
        }

        // Open dropdown rows.
        if self.is_open()
            && let Some(rect) = regions.dropdown
            && contains(rect, x, y)
        {
            let index = (y - rect.y) as usize;
            return (EventResult::Consumed, self.click_option(index));
        }

        // Container body: toggle open/closed.
        if let Some(rect) = regions.trigger
            && contains(rect, x, y)
        {
            self.toggle();
            return (EventResult::Consumed, SelectEvents::default());
        }

        (EventResult::Ignored, SelectEvents::default())
    }

    /// Handle pointer movement: hovering an option row moves the cursor.
    pub fn handle_hover(&self, x: u16, y: u16) -> EventResult {
        if !self.is_open() {
            return EventResult::Ignored;
        }
        let regions = self.regions();
        if let Some(rect) = regions.dropdown
            && contains(rect, x, y)
        {
            let index = (y - rect.y) as usize;
            if index < self.options_count() {
                self.set_cursor(index);
            }
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    /// Apply the option at a dropdown row index as if clicked.
    ///
    /// Single mode closes the dropdown when the selection actually changed;
    /// multi mode stays open so further options can be toggled.
    pub fn click_option(&self, index: usize) -> SelectEvents {
        let Some(candidate) = self.option(index) else {
            return SelectEvents::default();
        };
        match self.selection().apply(&candidate) {
            Some(next) => {
                if self.mode() == Mode::Single {
                    self.close();
                }
                debug!("{}: option {} applied", self.id_string(), candidate.label);
                SelectEvents::changed(next)
            }
            // Re-selecting the already selected option: no change, no close.
            None => SelectEvents::default(),
        }
    }

    /// Remove the selected option at a selection-order index (badge glyph).
    pub fn remove_badge(&self, index: usize) -> SelectEvents {
        if self.mode() != Mode::Multi {
            return SelectEvents::default();
        }
        let selection = self.selection();
        let Some(option) = selection.selected().get(index).cloned() else {
            return SelectEvents::default();
        };
        match selection.apply(&option) {
            Some(next) => SelectEvents::changed(next),
            None => SelectEvents::default(),
        }
    }

    /// Clear the whole selection. Never touches the open/closed state.
    pub fn clear_selection(&self) -> SelectEvents {
        let selection = self.selection();
        if selection.is_empty() {
            return SelectEvents::default();
        }
        debug!("{}: selection cleared", self.id_string());
        SelectEvents::changed(selection.cleared())
    }

    // -------------------------------------------------------------------------
    // Keyboard input
    // -------------------------------------------------------------------------

    /// Handle keyboard input while the control is focused.
    /// Returns events that should be dispatched to the host.
    pub fn handle_key(&self, key: &KeyCombo) -> (EventResult, SelectEvents) {
        // Ignore keys with ctrl/alt modifiers
        if key.modifiers.ctrl || key.modifiers.alt {
            return (EventResult::Ignored, SelectEvents::default());
        }

        if !self.is_open() {
            // Closed state - toggle open on Enter or Space
            match key.key {
                Key::Enter | Key::Space => {
                    self.open();
                    (EventResult::Consumed, SelectEvents::default())
                }
                _ => (EventResult::Ignored, SelectEvents::default()),
            }
        } else {
            // Open state - navigate, commit, close
            match key.key {
                Key::Up => {
                    self.cursor_up();
                    (EventResult::Consumed, SelectEvents::default())
                }
                Key::Down => {
                    self.cursor_down();
                    (EventResult::Consumed, SelectEvents::default())
                }
                Key::Home => {
                    self.cursor_first();
                    (EventResult::Consumed, SelectEvents::default())
                }
                Key::End => {
                    self.cursor_last();
                    (EventResult::Consumed, SelectEvents::default())
                }
                Key::Enter | Key::Space => (EventResult::Consumed, self.commit_cursor()),
                Key::Escape => {
                    self.close();
                    (EventResult::Consumed, SelectEvents::default())
                }
                _ => (EventResult::Ignored, SelectEvents::default()),
            }
        }
    }

    /// Commit the option under the hover cursor.
    ///
    /// Multi mode only ever appends here; toggling off is a pointer
    /// affordance. With an empty option list the commit is a no-op.
    fn commit_cursor(&self) -> SelectEvents {
        let Some(candidate) = self.option(self.cursor()) else {
            return SelectEvents::default();
        };
        let next = match self.mode() {
            Mode::Single => self.selection().apply(&candidate),
            Mode::Multi => self.selection().insert(&candidate),
        };
        match next {
            Some(next) => {
                if self.mode() == Mode::Single {
                    self.close();
                }
                debug!("{}: option {} committed", self.id_string(), candidate.label);
                SelectEvents::changed(next)
            }
            None => SelectEvents::default(),
        }
    }
}

impl ComponentEvents for Select {
    fn on_click(&self, x: u16, y: u16) -> EventResult {
        // Basic click handling - events are handled separately via handle_click
        let (result, _events) = self.handle_click(x, y);
        result
    }

    fn on_hover(&self, x: u16, y: u16) -> EventResult {
        self.handle_hover(x, y)
    }

    fn on_key(&self, key: &KeyCombo) -> EventResult {
        let (result, _events) = self.handle_key(key);
        result
    }

    fn on_blur(&self) {
        // Close dropdown when focus leaves
        self.close();
    }
}
