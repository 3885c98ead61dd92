//! Single-open-panel accordion state.
//!
//! Radio-button semantics over however many panels the page ships: at most
//! one panel is expanded, and activating the expanded panel collapses it.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

/// Which accordion panel, if any, is currently expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The index of the expanded panel, or `None` when all are collapsed.
    #[must_use]
    pub fn open_panel(&self) -> Option<usize> {
        self.open
    }

    /// Activate the panel at `index`.
    ///
    /// Returns `true` when the panel ends up expanded, `false` when the
    /// activation collapsed it (it was already the open one).
    pub fn activate(&mut self, index: usize) -> bool {
        if self.open == Some(index) {
            self.open = None;
            false
        } else {
            self.open = Some(index);
            true
        }
    }
}
