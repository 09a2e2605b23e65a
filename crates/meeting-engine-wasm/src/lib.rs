//! WASM bindings for meeting-engine.
//!
//! Exposes meeting-slot queries to JavaScript via `wasm-bindgen`. Queries and
//! results cross the boundary as JSON strings in the format documented in
//! [`meeting_engine::wire`].
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use meeting_engine::{wire, AvailabilityEngine};
use wasm_bindgen::prelude::*;

/// Find meeting slots for a query document.
///
/// `query_json` must be an object with `events` and `request` keys. Returns a
/// JSON string containing an array of
/// `{start, end, start_minute, end_minute, duration_minutes}` objects.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(query_json: &str) -> Result<String, JsValue> {
    let query = wire::decode_query(query_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let slots = AvailabilityEngine::new().query(&query.events, &query.request);

    wire::encode_slots(&slots)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Format a minute of the day as `HH:MM`.
#[wasm_bindgen(js_name = "formatMinute")]
pub fn format_minute(minute: u32) -> String {
    wire::format_minute(minute)
}
