//! Minute-of-day intervals.
//!
//! A [`TimeRange`] covers `[start, end)` within a single day, where minutes run
//! from [`START_OF_DAY`] (0) to the exclusive sentinel [`END_OF_DAY`] (1440).
//! The last range of a day may additionally be flagged as inclusive of the
//! end-of-day boundary, which is how [`TimeRange::WHOLE_DAY`] and the trailing
//! free slot of a query are reported.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeetingError, Result};

/// A minute of the day, `0..=1440`.
pub type Minute = u32;

/// First minute of the day.
pub const START_OF_DAY: Minute = 0;

/// Exclusive end-of-day sentinel (24:00).
pub const END_OF_DAY: Minute = 24 * 60;

/// An immutable interval of minutes within one day.
///
/// Ordering is by `start`, then `end` ascending, so ranges sharing a start sort
/// shorter-first. The end-of-day flag only breaks ties between otherwise
/// identical ranges, which keeps `Ord` consistent with `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRange")]
pub struct TimeRange {
    start: Minute,
    end: Minute,
    inclusive_of_end_of_day: bool,
}

/// Unvalidated wire shape; deserialization goes through [`TimeRange::from_start_end`].
#[derive(Deserialize)]
struct RawTimeRange {
    start: Minute,
    end: Minute,
    #[serde(default)]
    inclusive_of_end_of_day: bool,
}

impl TryFrom<RawTimeRange> for TimeRange {
    type Error = MeetingError;

    fn try_from(raw: RawTimeRange) -> Result<Self> {
        TimeRange::from_start_end(raw.start, raw.end, raw.inclusive_of_end_of_day)
    }
}

impl TimeRange {
    /// `[0, 1440]`, inclusive of the end-of-day boundary.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: END_OF_DAY,
        inclusive_of_end_of_day: true,
    };

    /// Build a range from an inclusive start and an exclusive end.
    ///
    /// Fails with [`MeetingError::InvalidRange`] when `start > end` or either
    /// bound lies outside `[0, 1440]`.
    pub fn from_start_end(
        start: Minute,
        end: Minute,
        inclusive_of_end_of_day: bool,
    ) -> Result<Self> {
        if start > end || end > END_OF_DAY {
            return Err(MeetingError::InvalidRange { start, end });
        }
        Ok(Self::new_unchecked(start, end, inclusive_of_end_of_day))
    }

    /// Build a range of `duration` minutes beginning at `start`.
    pub fn from_start_duration(start: Minute, duration: Minute) -> Result<Self> {
        match start.checked_add(duration) {
            Some(end) => Self::from_start_end(start, end, false),
            None => Err(MeetingError::InvalidRange {
                start,
                end: Minute::MAX,
            }),
        }
    }

    /// Callers guarantee `start <= end <= END_OF_DAY`.
    pub(crate) fn new_unchecked(start: Minute, end: Minute, inclusive_of_end_of_day: bool) -> Self {
        debug_assert!(start <= end && end <= END_OF_DAY);
        Self {
            start,
            end,
            inclusive_of_end_of_day,
        }
    }

    pub fn start(&self) -> Minute {
        self.start
    }

    pub fn end(&self) -> Minute {
        self.end
    }

    /// Whether this range is the terminal range of a day and includes 24:00.
    pub fn is_inclusive_of_end_of_day(&self) -> bool {
        self.inclusive_of_end_of_day
    }

    pub fn duration(&self) -> Minute {
        self.end - self.start
    }

    /// True when `self` fully encloses `other`, equal bounds included.
    pub fn contains(&self, other: &TimeRange) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// True when the two ranges share at least one minute (half-open semantics).
    ///
    /// Back-to-back ranges such as `[600, 660)` and `[660, 720)` do not overlap.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Point membership. Minute 1440 only belongs to end-of-day-inclusive ranges.
    pub fn contains_minute(&self, minute: Minute) -> bool {
        self.start <= minute
            && (minute < self.end || (self.inclusive_of_end_of_day && minute == self.end))
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.inclusive_of_end_of_day { ']' } else { ')' };
        write!(f, "[{}, {}{}", self.start, self.end, close)
    }
}
