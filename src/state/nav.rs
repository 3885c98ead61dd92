//! Swipe-gesture interpreter for the slide-in navigation panel.
//!
//! A gesture is a touch-start / touch-end pair; only the horizontal travel
//! matters. Swiping left always closes the panel. Swiping right opens it
//! only while the page is near the top, so an accidental swipe mid-read
//! does not cover the content. The scroll position is tracked
//! continuously from the scroll listener, and the swipe decision reads the
//! last observed value rather than re-measuring at touch-end.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{SCROLL_LOCK_PX, SWIPE_THRESHOLD_PX};

/// What a completed swipe gesture asks the panel to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeAction {
    /// Slide the panel in.
    Open,
    /// Slide the panel out.
    Close,
}

/// Tracks one in-flight horizontal swipe and the last observed scroll offset.
#[derive(Clone, Copy, Debug, Default)]
pub struct SwipeTracker {
    touch_start_x: f64,
    scrolled_down: bool,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the latest vertical scroll offset.
    pub fn observe_scroll(&mut self, offset_y: f64) {
        self.scrolled_down = offset_y >= SCROLL_LOCK_PX;
    }

    /// Whether the page is currently scrolled past the open-suppression line.
    #[must_use]
    pub fn is_scrolled_down(&self) -> bool {
        self.scrolled_down
    }

    /// Record the horizontal coordinate where a touch began.
    pub fn touch_start(&mut self, x: f64) {
        self.touch_start_x = x;
    }

    /// Complete the gesture and interpret it.
    ///
    /// Returns `Some(Close)` for a leftward swipe of at least the threshold,
    /// `Some(Open)` for a rightward swipe of at least the threshold while the
    /// page is near the top, and `None` otherwise.
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeAction> {
        let delta = x - self.touch_start_x;
        if delta <= -SWIPE_THRESHOLD_PX {
            Some(SwipeAction::Close)
        } else if delta >= SWIPE_THRESHOLD_PX && !self.scrolled_down {
            Some(SwipeAction::Open)
        } else {
            None
        }
    }
}
