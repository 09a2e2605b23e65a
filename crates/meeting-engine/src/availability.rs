//! Meeting-availability queries.
//!
//! Filters the events that concern a set of attendees, sorts their time ranges,
//! drops ranges nested inside an earlier one, then reports the gaps between the
//! remaining busy ranges that are long enough for the requested meeting.
//!
//! Optional attendees are honoured whenever at least one slot fits everybody;
//! otherwise the query falls back to the mandatory attendees alone.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::event::{Event, MeetingRequest};
use crate::time_range::{Minute, TimeRange, END_OF_DAY, START_OF_DAY};

/// Stateless query engine. All inputs are borrowed and never modified.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityEngine;

impl AvailabilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Find every free range of at least `request.duration()` minutes.
    ///
    /// The result is sorted by start time and never contains overlapping ranges.
    /// Resolution order:
    ///
    /// 1. With optional attendees, try mandatory ∪ optional first and return the
    ///    result if it is non-empty.
    /// 2. If that fails and nobody is mandatory, return no slots rather than the
    ///    unconstrained day.
    /// 3. Otherwise answer for the mandatory attendees only.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        let mandatory = request.mandatory_attendees();
        let duration = request.duration();

        if !request.optional_attendees().is_empty() {
            let everyone = request.all_attendees();
            let slots = self.free_ranges(events, &everyone, duration);
            if !slots.is_empty() {
                debug!(
                    slots = slots.len(),
                    attendees = everyone.len(),
                    "slots found for mandatory and optional attendees"
                );
                return slots;
            }
            if mandatory.is_empty() {
                debug!("no slot fits the optional attendees and none are mandatory");
                return Vec::new();
            }
            debug!("no slot fits the optional attendees; retrying with mandatory attendees only");
        }

        let slots = self.free_ranges(events, mandatory, duration);
        debug!(
            slots = slots.len(),
            attendees = mandatory.len(),
            "slots found for mandatory attendees"
        );
        slots
    }

    /// Busy ranges of `attendees`, sorted by start, with nested ranges removed.
    ///
    /// An event counts as busy when at least one of `attendees` attends it.
    /// Partially overlapping ranges are kept as-is.
    pub fn busy_ranges(&self, events: &[Event], attendees: &HashSet<String>) -> Vec<TimeRange> {
        let mut ranges: Vec<TimeRange> = events
            .iter()
            .filter(|event| event.involves_any(attendees))
            .map(Event::time_range)
            .collect();
        let relevant = ranges.len();

        ranges.sort();
        remove_nested(&mut ranges);

        trace!(
            events = events.len(),
            relevant,
            busy = ranges.len(),
            "computed busy ranges"
        );
        ranges
    }

    /// Free ranges of at least `duration` minutes for a fixed attendee set,
    /// without the optional-attendee fallback.
    pub fn free_ranges(
        &self,
        events: &[Event],
        attendees: &HashSet<String>,
        duration: i64,
    ) -> Vec<TimeRange> {
        let busy = self.busy_ranges(events, attendees);
        gaps_between(&busy)
            .into_iter()
            .filter(|gap| i64::from(gap.duration()) >= duration)
            .collect()
    }
}

/// Shorthand for [`AvailabilityEngine::query`].
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    AvailabilityEngine::new().query(events, request)
}

/// Drop every range contained in the last kept range.
///
/// Requires `ranges` sorted by start. Once a kept range fails to contain its
/// successor, the successor ends strictly later, so it cannot contain anything
/// further along either.
fn remove_nested(ranges: &mut Vec<TimeRange>) {
    ranges.dedup_by(|later, kept| kept.contains(later));
}

/// Gaps before, between and after `busy` ranges, clipped to the day.
///
/// Only the trailing gap includes the end-of-day boundary. Empty and negative
/// gaps (back-to-back or overlapping neighbours) are skipped.
fn gaps_between(busy: &[TimeRange]) -> Vec<TimeRange> {
    let (Some(first), Some(last)) = (busy.first(), busy.last()) else {
        return vec![TimeRange::WHOLE_DAY];
    };

    let mut gaps = Vec::with_capacity(busy.len() + 1);
    push_gap(&mut gaps, START_OF_DAY, first.start(), false);
    for pair in busy.windows(2) {
        push_gap(&mut gaps, pair[0].end(), pair[1].start(), false);
    }
    push_gap(&mut gaps, last.end(), END_OF_DAY, true);
    gaps
}

fn push_gap(gaps: &mut Vec<TimeRange>, start: Minute, end: Minute, inclusive_of_end_of_day: bool) {
    if start < end {
        gaps.push(TimeRange::new_unchecked(start, end, inclusive_of_end_of_day));
    }
}
