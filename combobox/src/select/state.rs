//! Select component state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use ratatui::layout::Rect;

use super::item::OptionRef;
use super::selection::{Mode, Selection, SelectionModeError};

/// Unique identifier for a Select component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelectId(usize);

impl SelectId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for SelectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__select_{}", self.0)
    }
}

/// Hit regions recorded by the renderer for pointer routing.
///
/// The renderer writes these every frame; click and hover handlers read
/// them to map a terminal position back to the control part under it.
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    /// The trigger row (the container body).
    pub trigger: Option<Rect>,
    /// The clear glyph inside the trigger.
    pub clear: Option<Rect>,
    /// Remove glyph of each selected badge, with the selection-order index
    /// of the option it removes (multi mode only).
    pub badges: Vec<(usize, Rect)>,
    /// The open dropdown; one option row per line.
    pub dropdown: Option<Rect>,
}

/// Internal state for a Select component.
#[derive(Debug)]
struct SelectInner {
    /// Ordered option handles, host-supplied per render.
    options: Vec<OptionRef>,
    /// Host-supplied current selection (the control never mutates it).
    selection: Selection,
    /// Placeholder text shown when nothing is selected.
    placeholder: String,
    /// Hit regions from the last render.
    regions: HitRegions,
}

/// A dropdown select control with single or multi selection.
///
/// `Select` owns only transient interaction state: whether the dropdown is
/// open and which option row the hover cursor is on. The option list and
/// the selection are supplied by the host each render; event handlers
/// compute the next selection and report it through
/// [`super::SelectEvents`], leaving the host as the sole owner of
/// persisted selection state.
#[derive(Debug)]
pub struct Select {
    /// Unique identifier for this select instance
    id: SelectId,
    /// Selection mode, fixed for the lifetime of the control
    mode: Mode,
    /// Internal state
    inner: Arc<RwLock<SelectInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Whether the dropdown is open
    is_open: Arc<AtomicBool>,
    /// Hover cursor position while open (keyboard/pointer highlight)
    cursor: Arc<AtomicUsize>,
}

impl Select {
    /// Create a new select in the given mode, with nothing selected.
    pub fn new(mode: Mode) -> Self {
        Self {
            id: SelectId::new(),
            mode,
            inner: Arc::new(RwLock::new(SelectInner {
                options: Vec::new(),
                selection: Selection::empty(mode),
                placeholder: String::new(),
                regions: HitRegions::default(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
            is_open: Arc::new(AtomicBool::new(false)),
            cursor: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a select with a placeholder.
    pub fn with_placeholder(mode: Mode, placeholder: impl Into<String>) -> Self {
        let select = Self::new(mode);
        select.set_placeholder(placeholder);
        select.clear_dirty();
        select
    }

    /// Get the unique ID for this select.
    pub fn id(&self) -> SelectId {
        self.id
    }

    /// Get the ID as a string (for logging and host-side routing).
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the selection mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    // -------------------------------------------------------------------------
    // Host-supplied render inputs
    // -------------------------------------------------------------------------

    /// Get the option handles.
    pub fn options(&self) -> Vec<OptionRef> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the option handle at an index.
    pub fn option(&self, index: usize) -> Option<OptionRef> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.options.get(index).cloned())
    }

    /// Get the number of options.
    pub fn options_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    /// Set the option handles for the next render.
    ///
    /// Handles must stay identity-stable across renders for selection and
    /// highlight comparisons to hold; clone the `Arc`s, do not rebuild the
    /// records.
    pub fn set_options(&self, options: Vec<OptionRef>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.options = options;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the current selection snapshot.
    pub fn selection(&self) -> Selection {
        self.inner
            .read()
            .map(|guard| guard.selection.clone())
            .unwrap_or(Selection::empty(self.mode))
    }

    /// Set the current selection, as owned by the host.
    ///
    /// Fails when the selection's shape does not match the control's mode;
    /// a control never switches mode during its lifetime.
    pub fn set_selection(&self, selection: Selection) -> Result<(), SelectionModeError> {
        if selection.mode() != self.mode {
            return Err(SelectionModeError::ModeMismatch {
                expected: self.mode,
                got: selection.mode(),
            });
        }
        if let Ok(mut guard) = self.inner.write() {
            guard.selection = selection;
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    /// Get the placeholder text.
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.placeholder = placeholder.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Open the dropdown.
    pub fn open(&self) {
        if !self.is_open.swap(true, Ordering::SeqCst) {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the dropdown.
    ///
    /// The hover cursor resets to 0 exactly on the open-to-closed
    /// transition, whatever caused it (escape, blur, commit, toggle).
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            self.cursor.store(0, Ordering::SeqCst);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the dropdown open/closed.
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------------
    // Hover cursor (when open)
    // -------------------------------------------------------------------------

    /// Get the current hover cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }

    /// Set the hover cursor position, clamped to the option range.
    pub fn set_cursor(&self, index: usize) {
        let count = self.options_count();
        if count == 0 {
            return;
        }
        let clamped = index.min(count - 1);
        if self.cursor.swap(clamped, Ordering::SeqCst) != clamped {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Move the hover cursor up one row.
    pub fn cursor_up(&self) {
        let current = self.cursor();
        if current > 0 {
            self.set_cursor(current - 1);
        }
    }

    /// Move the hover cursor down one row.
    pub fn cursor_down(&self) {
        let current = self.cursor();
        if current + 1 < self.options_count() {
            self.set_cursor(current + 1);
        }
    }

    /// Move the hover cursor to the first row.
    pub fn cursor_first(&self) {
        self.set_cursor(0);
    }

    /// Move the hover cursor to the last row.
    pub fn cursor_last(&self) {
        let count = self.options_count();
        if count > 0 {
            self.set_cursor(count - 1);
        }
    }

    // -------------------------------------------------------------------------
    // Hit regions (written by the renderer)
    // -------------------------------------------------------------------------

    /// Get the hit regions from the last render.
    pub fn regions(&self) -> HitRegions {
        self.inner
            .read()
            .map(|guard| guard.regions.clone())
            .unwrap_or_default()
    }

    /// Record the hit regions for pointer routing (called during render).
    pub(super) fn set_regions(&self, regions: HitRegions) {
        if let Ok(mut guard) = self.inner.write() {
            guard.regions = regions;
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the select state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Select {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            mode: self.mode,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            is_open: Arc::clone(&self.is_open),
            cursor: Arc::clone(&self.cursor),
        }
    }
}
