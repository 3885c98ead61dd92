use super::*;

// =============================================================
// EngagementCounters
// =============================================================

#[test]
fn missing_storage_reads_as_zero() {
    let c = EngagementCounters::from_stored(None, None);
    assert_eq!(c.page_views, 0);
    assert_eq!(c.form_submissions, 0);
}

#[test]
fn stored_values_are_parsed() {
    let c = EngagementCounters::from_stored(Some("5"), Some("12"));
    assert_eq!(c.page_views, 5);
    assert_eq!(c.form_submissions, 12);
}

#[test]
fn garbled_storage_reads_as_zero() {
    let c = EngagementCounters::from_stored(Some("five"), Some("-3"));
    assert_eq!(c.page_views, 0);
    assert_eq!(c.form_submissions, 0);
}

#[test]
fn first_load_yields_one_view_and_no_submissions() {
    let mut c = EngagementCounters::from_stored(None, None);
    assert_eq!(c.record_page_view(), 1);
    assert_eq!(c.page_views, 1);
    assert_eq!(c.form_submissions, 0);
}

#[test]
fn load_with_prior_views_increments_to_six() {
    let mut c = EngagementCounters::from_stored(Some("5"), None);
    assert_eq!(c.record_page_view(), 6);
}

#[test]
fn submission_increments_exactly_once_per_call() {
    let mut c = EngagementCounters::default();
    assert_eq!(c.record_form_submission(), 1);
    assert_eq!(c.record_form_submission(), 2);
    assert_eq!(c.page_views, 0);
}

// =============================================================
// Easing
// =============================================================

#[test]
fn ease_out_cubic_endpoints() {
    assert!((ease_out_cubic(0.0) - 0.0).abs() < f64::EPSILON);
    assert!((ease_out_cubic(1.0) - 1.0).abs() < f64::EPSILON);
}

#[test]
fn ease_out_cubic_decelerates() {
    // The first half covers more ground than the second half.
    let first = ease_out_cubic(0.5);
    let second = ease_out_cubic(1.0) - first;
    assert!(first > second);
}

// =============================================================
// CountUp timeline
// =============================================================

#[test]
fn starts_idle_then_counts() {
    let mut c = CountUp::new(42.0, 5000.0, 0.0);
    assert_eq!(c.phase(), Phase::Idle);
    c.tick(1000.0);
    assert_eq!(c.phase(), Phase::Counting);
}

#[test]
fn value_strictly_increases_and_reaches_target() {
    let mut c = CountUp::new(42.0, 5000.0, 0.0);
    let mut last = c.tick(0.0);
    assert!((last - 0.0).abs() < f64::EPSILON);
    for step in 1..=9 {
        let v = c.tick(f64::from(step) * 500.0);
        assert!(v > last, "value must strictly increase mid-animation");
        assert!(v < 42.0);
        last = v;
    }
    let final_value = c.tick(5000.0);
    assert!((final_value - 42.0).abs() < f64::EPSILON);
    assert!(c.is_settled());
}

#[test]
fn settled_ticks_hold_the_exact_target() {
    let mut c = CountUp::new(42.0, 5000.0, 0.0);
    c.tick(0.0);
    c.tick(6000.0);
    assert!(c.is_settled());
    assert!((c.tick(9999.0) - 42.0).abs() < f64::EPSILON);
    assert!(c.is_settled());
}

#[test]
fn delay_holds_value_at_zero() {
    let mut c = CountUp::new(100.0, 5000.0, 300.0);
    assert!((c.tick(0.0) - 0.0).abs() < f64::EPSILON);
    assert!((c.tick(300.0) - 0.0).abs() < f64::EPSILON);
    assert_eq!(c.phase(), Phase::Counting);
    assert!(c.tick(301.0) > 0.0);
}

#[test]
fn delayed_timeline_settles_after_delay_plus_duration() {
    let mut c = CountUp::new(10.0, 5000.0, 900.0);
    c.tick(0.0);
    c.tick(5899.0);
    assert!(!c.is_settled());
    let v = c.tick(5900.0);
    assert!((v - 10.0).abs() < f64::EPSILON);
    assert!(c.is_settled());
}

#[test]
fn non_positive_duration_settles_immediately() {
    let mut c = CountUp::new(7.0, 0.0, 0.0);
    assert!((c.tick(123.0) - 7.0).abs() < f64::EPSILON);
    assert!(c.is_settled());
}

#[test]
fn fractional_target_animates() {
    let mut c = CountUp::new(4.8, 5000.0, 0.0);
    c.tick(0.0);
    let mid = c.tick(2500.0);
    assert!(mid > 0.0 && mid < 4.8);
    let done = c.tick(5000.0);
    assert!((done - 4.8).abs() < f64::EPSILON);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn grouped_formatting_inserts_separators() {
    assert_eq!(format_grouped(0.0), "0");
    assert_eq!(format_grouped(999.0), "999");
    assert_eq!(format_grouped(1000.0), "1,000");
    assert_eq!(format_grouped(12_500.0), "12,500");
    assert_eq!(format_grouped(1_234_567.0), "1,234,567");
}

#[test]
fn grouped_formatting_rounds_fractional_frames() {
    assert_eq!(format_grouped(41.6), "42");
    assert_eq!(format_grouped(999.7), "1,000");
}

#[test]
fn grouped_formatting_clamps_negatives_to_zero() {
    assert_eq!(format_grouped(-3.0), "0");
}

#[test]
fn one_decimal_formatting() {
    assert_eq!(format_one_decimal(4.8), "4.8");
    assert_eq!(format_one_decimal(4.0), "4.0");
    assert_eq!(format_one_decimal(4.76), "4.8");
}

// =============================================================
// Storage keys
// =============================================================

#[test]
fn storage_keys_are_distinct_and_stable() {
    assert_ne!(PAGE_VIEWS_KEY, FORM_SUBMISSIONS_KEY);
    assert_eq!(PAGE_VIEWS_KEY, "whanauTalkPageViews");
    assert_eq!(FORM_SUBMISSIONS_KEY, "whanauTalkFormSubmissions");
}
