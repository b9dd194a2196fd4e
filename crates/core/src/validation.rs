//! Format checks for incoming request fields.
//!
//! These are shape checks only. `valid_date` does not verify that the date
//! exists on a calendar and `valid_time` looks for an `HH:MM` token anywhere
//! in the string. Postgres rejects anything that survives these checks but
//! cannot be cast.

use std::sync::LazyLock;

use chrono::NaiveTime;
use regex::Regex;

use crate::models::{meeting::MeetingPayload, room::Room};

static DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date regex"));

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{2}:\d{2}").expect("Invalid time regex"));

/// `YYYY-MM-DD`, digits only. `2021-13-40` passes.
pub fn valid_date(date: &str) -> bool {
    DATE_REGEX.is_match(date)
}

/// True if `time` contains an `HH:MM` token.
pub fn valid_time(time: &str) -> bool {
    TIME_REGEX.is_match(time)
}

pub fn valid_room(room_id: i32, rooms: &[Room]) -> bool {
    rooms.iter().any(|room| room.room_id == room_id)
}

/// Room, date, start and end time are all present and well formed. The name
/// only has to be present since `mtg_name` is `NOT NULL`. Overlap is checked
/// separately.
pub fn valid_meeting_payload(payload: &MeetingPayload, rooms: &[Room]) -> bool {
    payload.room_id.is_some_and(|id| valid_room(id, rooms))
        && payload.mtg_name.is_some()
        && payload.mtg_date.as_deref().is_some_and(valid_date)
        && payload.start_time.as_deref().is_some_and(valid_time)
        && payload.end_time.as_deref().is_some_and(valid_time)
}

/// False only when both ends parse as `HH:MM[:SS]` and `start >= end`.
pub fn ordered_interval(start: &str, end: &str) -> bool {
    match (parse_time(start), parse_time(end)) {
        (Some(start), Some(end)) => start < end,
        _ => true,
    }
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}
