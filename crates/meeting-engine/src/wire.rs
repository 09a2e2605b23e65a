//! JSON boundary for front ends (CLI, WASM).
//!
//! A query document carries the events and the meeting request:
//!
//! ```json
//! {
//!   "events": [
//!     {"title": "Standup", "when": {"start": "09:00", "end": "09:15"}, "attendees": ["A", "B"]}
//!   ],
//!   "request": {"attendees": ["A"], "optional_attendees": ["B"], "duration": 30}
//! }
//! ```
//!
//! Minutes may be written either as integers (`540`) or as `HH:MM` clock
//! strings; `"24:00"` stands for the end of the day.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityEngine;
use crate::error::{MeetingError, Result};
use crate::event::{Event, MeetingRequest};
use crate::time_range::{Minute, TimeRange, END_OF_DAY};

// ---------------------------------------------------------------------------
// Input documents
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(untagged)]
enum MinuteInput {
    Minute(Minute),
    Clock(String),
    /// Anything else (negative, fractional, wrong type); rejected by `resolve`.
    Other(serde_json::Value),
}

impl MinuteInput {
    fn resolve(&self, field: &str) -> Result<Minute> {
        match self {
            MinuteInput::Minute(m) => Ok(*m),
            MinuteInput::Clock(s) => parse_clock(s),
            MinuteInput::Other(value) => Err(MeetingError::InvalidTime(format!(
                "{}: {} is not a minute of the day (use 0..=1440 or \"HH:MM\")",
                field, value
            ))),
        }
    }
}

#[derive(Deserialize)]
struct RangeInput {
    start: MinuteInput,
    end: MinuteInput,
    #[serde(default)]
    inclusive_of_end_of_day: bool,
}

#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    title: String,
    when: RangeInput,
    #[serde(default)]
    attendees: Vec<String>,
}

#[derive(Deserialize)]
struct RequestInput {
    #[serde(default, alias = "mandatory_attendees")]
    attendees: Vec<String>,
    #[serde(default)]
    optional_attendees: Vec<String>,
    duration: i64,
}

#[derive(Deserialize)]
struct QueryDocument {
    #[serde(default)]
    events: Vec<EventInput>,
    request: RequestInput,
}

/// A decoded, validated query.
#[derive(Debug, Clone)]
pub struct QueryInput {
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One available slot as reported to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotDto {
    pub start: String,
    pub end: String,
    pub start_minute: Minute,
    pub end_minute: Minute,
    pub duration_minutes: Minute,
}

impl From<&TimeRange> for SlotDto {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_minute(range.start()),
            end: format_minute(range.end()),
            start_minute: range.start(),
            end_minute: range.end(),
            duration_minutes: range.duration(),
        }
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parse an `HH:MM` clock string into a minute of the day.
///
/// `"24:00"` is accepted as [`END_OF_DAY`].
pub fn parse_clock(s: &str) -> Result<Minute> {
    let trimmed = s.trim();
    if trimmed == "24:00" {
        return Ok(END_OF_DAY);
    }
    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|e| MeetingError::InvalidTime(format!("'{}': {}", s, e)))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Render a minute of the day as `HH:MM` (1440 renders as `24:00`).
pub fn format_minute(minute: Minute) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Decode and validate a query document.
pub fn decode_query(json: &str) -> Result<QueryInput> {
    let doc: QueryDocument = serde_json::from_str(json)?;

    let events = doc
        .events
        .into_iter()
        .map(|input| {
            let when = TimeRange::from_start_end(
                input.when.start.resolve("start")?,
                input.when.end.resolve("end")?,
                input.when.inclusive_of_end_of_day,
            )?;
            Ok(Event::new(input.title, when, input.attendees))
        })
        .collect::<Result<Vec<_>>>()?;

    let request = MeetingRequest::new(doc.request.attendees, doc.request.duration)
        .with_optional_attendees(doc.request.optional_attendees);

    Ok(QueryInput { events, request })
}

/// Decode a query document and run it.
pub fn run_query(json: &str) -> Result<Vec<SlotDto>> {
    let input = decode_query(json)?;
    let slots = AvailabilityEngine::new().query(&input.events, &input.request);
    Ok(slots.iter().map(SlotDto::from).collect())
}

/// Serialize slots as a JSON array of [`SlotDto`].
pub fn encode_slots(slots: &[TimeRange]) -> Result<String> {
    let dtos: Vec<SlotDto> = slots.iter().map(SlotDto::from).collect();
    Ok(serde_json::to_string(&dtos)?)
}
