//! Engagement counters and the count-up reveal animation.
//!
//! Two counters persist across visits in localStorage: page views and
//! validated form submissions. Both are non-negative and only ever grow; a
//! missing or garbled stored value reads as zero. The reveal animation is a
//! per-statistic state machine advanced by `tick(now)` with frame timestamps,
//! so the whole timeline is testable without a real frame clock.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

/// localStorage key for the page-view counter.
pub const PAGE_VIEWS_KEY: &str = "whanauTalkPageViews";

/// localStorage key for the form-submission counter.
pub const FORM_SUBMISSIONS_KEY: &str = "whanauTalkFormSubmissions";

/// The two persistent engagement counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngagementCounters {
    pub page_views: u64,
    pub form_submissions: u64,
}

impl EngagementCounters {
    /// Rebuild the counters from their stored string forms.
    ///
    /// An absent or unparseable value is treated as zero.
    #[must_use]
    pub fn from_stored(page_views: Option<&str>, form_submissions: Option<&str>) -> Self {
        Self {
            page_views: parse_stored(page_views),
            form_submissions: parse_stored(form_submissions),
        }
    }

    /// Count this page load. Returns the new total.
    pub fn record_page_view(&mut self) -> u64 {
        self.page_views += 1;
        self.page_views
    }

    /// Count a validated form submission. Returns the new total.
    pub fn record_form_submission(&mut self) -> u64 {
        self.form_submissions += 1;
        self.form_submissions
    }
}

fn parse_stored(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Where a statistic's animation currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not started; no tick received yet.
    #[default]
    Idle,
    /// Running (or waiting out its stagger delay).
    Counting,
    /// Finished; the displayed value is exactly the target.
    Settled,
}

/// One statistic's count-up timeline: 0 up to `target` over `duration_ms`,
/// after an optional stagger delay.
#[derive(Clone, Copy, Debug)]
pub struct CountUp {
    target: f64,
    duration_ms: f64,
    delay_ms: f64,
    started_at: Option<f64>,
    phase: Phase,
}

impl CountUp {
    #[must_use]
    pub fn new(target: f64, duration_ms: f64, delay_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            delay_ms,
            started_at: None,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance the timeline to `now_ms` (a frame timestamp) and return the
    /// value to display.
    ///
    /// The first tick records the start of the timeline. While the stagger
    /// delay is still running the value holds at 0. Once elapsed time covers
    /// the duration the timeline settles and every later tick returns the
    /// target exactly.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if self.phase == Phase::Settled {
            return self.target;
        }
        let start = *self.started_at.get_or_insert(now_ms);
        self.phase = Phase::Counting;

        if self.duration_ms <= 0.0 {
            self.phase = Phase::Settled;
            return self.target;
        }
        let elapsed = now_ms - start - self.delay_ms;
        if elapsed <= 0.0 {
            return 0.0;
        }
        let progress = (elapsed / self.duration_ms).min(1.0);
        if progress >= 1.0 {
            self.phase = Phase::Settled;
            return self.target;
        }
        ease_out_cubic(progress) * self.target
    }
}

/// Cubic ease-out: fast start, smooth deceleration into the target.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

/// Round to an integer and insert thousands separators: `1234567` → `"1,234,567"`.
#[must_use]
pub fn format_grouped(value: f64) -> String {
    let digits = format!("{:.0}", value.max(0.0));
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Fixed one-decimal rendering for non-integer statistics.
#[must_use]
pub fn format_one_decimal(value: f64) -> String {
    format!("{value:.1}")
}
