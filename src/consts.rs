//! Shared numeric constants for gestures, animation timing, and the fixed
//! impact statistics.

// ── Swipe gesture ───────────────────────────────────────────────

/// Minimum horizontal travel in pixels before a touch counts as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Vertical scroll offset past which swipe-to-open is suppressed.
pub const SCROLL_LOCK_PX: f64 = 200.0;

// ── Count-up animation ──────────────────────────────────────────

/// Default duration of one count-up timeline, in milliseconds.
pub const COUNT_UP_DURATION_MS: f64 = 5000.0;

/// Stagger between consecutive statistic timelines, in milliseconds.
pub const COUNT_UP_STAGGER_MS: f64 = 300.0;

// ── Reveal detection ────────────────────────────────────────────

/// Fraction of the statistics section that must be visible to trigger
/// the reveal.
pub const REVEAL_VISIBLE_FRACTION: f64 = 0.1;

/// Polling cadence for the visibility fallback, in milliseconds.
pub const VISIBILITY_POLL_MS: i32 = 250;

// ── Fixed impact statistics ─────────────────────────────────────

/// Whānau supported across the programme to date (display-only).
pub const FAMILIES_SUPPORTED: f64 = 12_500.0;

/// Average participant satisfaction rating out of 5 (display-only).
pub const SATISFACTION_RATING: f64 = 4.8;
