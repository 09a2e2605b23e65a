//! Tests for `TimeRange` construction, ordering, and containment.

use meeting_engine::{MeetingError, TimeRange, END_OF_DAY, START_OF_DAY};

fn range(start: u32, end: u32) -> TimeRange {
    TimeRange::from_start_end(start, end, false).unwrap()
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn constructs_valid_range() {
    let r = range(600, 660);
    assert_eq!(r.start(), 600);
    assert_eq!(r.end(), 660);
    assert_eq!(r.duration(), 60);
    assert!(!r.is_inclusive_of_end_of_day());
}

#[test]
fn zero_length_range_is_allowed() {
    let r = range(720, 720);
    assert_eq!(r.duration(), 0);
}

#[test]
fn start_after_end_is_rejected() {
    let err = TimeRange::from_start_end(700, 600, false).unwrap_err();
    assert!(matches!(err, MeetingError::InvalidRange { start: 700, end: 600 }));
}

#[test]
fn end_past_end_of_day_is_rejected() {
    let err = TimeRange::from_start_end(1400, 1441, false).unwrap_err();
    assert!(matches!(err, MeetingError::InvalidRange { .. }));
}

#[test]
fn from_start_duration_matches_from_start_end() {
    assert_eq!(TimeRange::from_start_duration(540, 30).unwrap(), range(540, 570));
    assert!(TimeRange::from_start_duration(1430, 30).is_err());
    assert!(TimeRange::from_start_duration(u32::MAX, 1).is_err());
}

#[test]
fn whole_day_spans_the_day_inclusively() {
    let day = TimeRange::WHOLE_DAY;
    assert_eq!(day.start(), START_OF_DAY);
    assert_eq!(day.end(), END_OF_DAY);
    assert_eq!(day.duration(), 1440);
    assert!(day.is_inclusive_of_end_of_day());
}

// ── contains / overlaps ─────────────────────────────────────────────────────

#[test]
fn contains_includes_equal_bounds() {
    assert!(range(600, 700).contains(&range(600, 700)));
    assert!(range(600, 700).contains(&range(600, 650)));
    assert!(range(600, 700).contains(&range(650, 700)));
    assert!(TimeRange::WHOLE_DAY.contains(&range(0, 1440)));
}

#[test]
fn contains_rejects_partial_overlap() {
    assert!(!range(600, 700).contains(&range(650, 750)));
    assert!(!range(600, 700).contains(&range(550, 650)));
    assert!(!range(600, 650).contains(&range(600, 700)));
}

#[test]
fn overlaps_uses_half_open_semantics() {
    assert!(range(600, 700).overlaps(&range(650, 750)));
    assert!(range(650, 750).overlaps(&range(600, 700)));
    assert!(range(0, 1440).overlaps(&range(700, 701)));
    // Back-to-back ranges share no minute.
    assert!(!range(600, 660).overlaps(&range(660, 720)));
    assert!(!range(660, 720).overlaps(&range(600, 660)));
}

#[test]
fn contains_minute_honours_end_of_day_flag() {
    let tail = TimeRange::from_start_end(1380, END_OF_DAY, true).unwrap();
    let open_tail = range(1380, END_OF_DAY);
    assert!(tail.contains_minute(1380));
    assert!(tail.contains_minute(END_OF_DAY));
    assert!(!open_tail.contains_minute(END_OF_DAY));
    assert!(!open_tail.contains_minute(1379));
}

// ── Ordering ────────────────────────────────────────────────────────────────

#[test]
fn orders_by_start_then_shorter_first() {
    let mut ranges = vec![range(600, 700), range(0, 30), range(600, 650), range(300, 1440)];
    ranges.sort();
    assert_eq!(
        ranges,
        vec![range(0, 30), range(300, 1440), range(600, 650), range(600, 700)]
    );
}

#[test]
fn end_of_day_flag_takes_part_in_equality() {
    let open = range(1380, END_OF_DAY);
    let closed = TimeRange::from_start_end(1380, END_OF_DAY, true).unwrap();
    assert_ne!(open, closed);
    assert!(open < closed);
}

// ── Serde ───────────────────────────────────────────────────────────────────

#[test]
fn deserialization_validates_bounds() {
    let ok: TimeRange = serde_json::from_str(r#"{"start":600,"end":660}"#).unwrap();
    assert_eq!(ok, range(600, 660));

    let bad = serde_json::from_str::<TimeRange>(r#"{"start":700,"end":600}"#);
    assert!(bad.is_err());
}

#[test]
fn serialization_carries_end_of_day_flag() {
    let json = serde_json::to_string(&TimeRange::WHOLE_DAY).unwrap();
    assert_eq!(json, r#"{"start":0,"end":1440,"inclusive_of_end_of_day":true}"#);
}
