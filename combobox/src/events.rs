//! Component event handling types and traits.
//!
//! Events flow from the host's input loop into components through the
//! [`ComponentEvents`] trait. A component returns [`EventResult::Consumed`]
//! to stop propagation: a click on an inner control (a clear glyph, a badge
//! remove glyph) must not also reach the container's own toggle handler.

use crate::keybinds::KeyCombo;

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was handled.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        ctrl: false,
        alt: false,
    };

    /// Check that no modifier is held.
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

/// Trait for components that can handle events.
///
/// All methods have default implementations that ignore the event, so
/// components only implement the events they care about. Keyboard events
/// are dispatched to the focused component only; pointer events are
/// dispatched by position.
pub trait ComponentEvents {
    /// Handle a click at the given terminal position.
    fn on_click(&self, _x: u16, _y: u16) -> EventResult {
        EventResult::Ignored
    }

    /// Handle pointer movement at the given terminal position.
    fn on_hover(&self, _x: u16, _y: u16) -> EventResult {
        EventResult::Ignored
    }

    /// Handle a key event while this component is focused.
    fn on_key(&self, _key: &KeyCombo) -> EventResult {
        EventResult::Ignored
    }

    /// Called when the component loses focus.
    fn on_blur(&self) {}
}
