//! WASM bindings for meeting-engine.
//!
//! Exposes the meeting query and free-window computation to JavaScript via
//! `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p meeting-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/meeting-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/meeting_engine_wasm.wasm
//! ```

use std::collections::BTreeSet;

use meeting_engine::{Event, MeetingRequest, TimeRange};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// A window as seen from JavaScript; `end` is included so callers need not
/// recompute it.
#[derive(Serialize)]
struct WindowDto {
    start: i32,
    end: i32,
    duration: i32,
}

impl From<&TimeRange> for WindowDto {
    fn from(r: &TimeRange) -> Self {
        Self {
            start: r.start(),
            end: r.end(),
            duration: r.duration(),
        }
    }
}

// ---------------------------------------------------------------------------
// JSON-in, JSON-out implementations (plain `String` errors so they run natively)
// ---------------------------------------------------------------------------

fn parse_events_json(json: &str) -> Result<Vec<Event>, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))
}

fn windows_json(windows: &[TimeRange]) -> Result<String, String> {
    let dtos: Vec<WindowDto> = windows.iter().map(WindowDto::from).collect();
    serde_json::to_string(&dtos).map_err(|e| format!("Serialization error: {}", e))
}

fn meeting_times_json(events_json: &str, request_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let request: MeetingRequest = serde_json::from_str(request_json)
        .map_err(|e| format!("Invalid request JSON: {}", e))?;

    windows_json(&meeting_engine::find_meeting_times(&events, &request))
}

fn free_windows_json(
    events_json: &str,
    attendees_json: &str,
    duration: i32,
) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let attendees: BTreeSet<String> = serde_json::from_str(attendees_json)
        .map_err(|e| format!("Invalid attendees JSON: {}", e))?;

    let busy = meeting_engine::collect_busy_times(&attendees, &events);
    windows_json(&meeting_engine::find_free_windows(&busy, duration))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every window of the day in which the requested meeting can be held.
///
/// `events_json` is a JSON array of `{title, when: {start, duration}, attendees}`
/// objects; `request_json` is a `{duration, attendees, optional_attendees}`
/// object. Returns a JSON array of `{start, end, duration}` objects.
#[wasm_bindgen(js_name = "findMeetingTimes")]
pub fn find_meeting_times(events_json: &str, request_json: &str) -> Result<String, JsValue> {
    meeting_times_json(events_json, request_json).map_err(|e| JsValue::from_str(&e))
}

/// Find the free windows of at least `duration` minutes shared by a group.
///
/// `attendees_json` is a JSON array of attendee names.
#[wasm_bindgen(js_name = "findFreeWindows")]
pub fn find_free_windows(
    events_json: &str,
    attendees_json: &str,
    duration: i32,
) -> Result<String, JsValue> {
    free_windows_json(events_json, attendees_json, duration).map_err(|e| JsValue::from_str(&e))
}
