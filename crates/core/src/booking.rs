//! # Booking Rules
//!
//! Decides whether a meeting may be inserted and which rooms are free. All
//! reads and writes go through a [`BookingStore`], so the rules can run
//! against Postgres or a mock.
//!
//! A meeting is created only if its payload is valid and no meeting in the
//! same room and date overlaps its `[start_time, end_time)` interval. When a
//! payload is both invalid and clashes with an existing booking, the clash is
//! reported.

use tracing::{debug, info};

use crate::{
    errors::{BookingError, BookingResult},
    models::{
        meeting::{Meeting, MeetingPayload, NewMeeting, Slot},
        room::{Room, RoomsQuery},
    },
    store::BookingStore,
    validation::{ordered_interval, valid_date, valid_meeting_payload, valid_time},
};

/// Result of a `GET /api/v1/rooms` lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomListing {
    All(Vec<Room>),
    Available(Vec<Room>),
}

/// True if no meeting in the slot's room and date overlaps its interval.
/// Intervals that only touch at an endpoint do not overlap.
pub async fn room_available<S>(store: &mut S, slot: &Slot) -> BookingResult<bool>
where
    S: BookingStore + ?Sized,
{
    let conflicts = store
        .conflicting_meetings(slot.room_id, &slot.mtg_date, &slot.start_time, &slot.end_time)
        .await?;

    if !conflicts.is_empty() {
        debug!(
            "Room {} has {} conflicting meeting(s) on {}",
            slot.room_id,
            conflicts.len(),
            slot.mtg_date
        );
    }

    Ok(conflicts.is_empty())
}

/// Rooms with no meeting overlapping `[start, end)` on `date`.
pub async fn available_rooms<S>(
    store: &mut S,
    date: &str,
    start: &str,
    end: &str,
) -> BookingResult<Vec<Room>>
where
    S: BookingStore + ?Sized,
{
    Ok(store.available_rooms(date, start, end).await?)
}

/// Free rooms when the query names a well-formed window, every room otherwise.
pub async fn list_rooms<S>(store: &mut S, query: &RoomsQuery) -> BookingResult<RoomListing>
where
    S: BookingStore + ?Sized,
{
    match (&query.date, &query.start_time, &query.end_time) {
        (Some(date), Some(start), Some(end))
            if valid_date(date) && valid_time(start) && valid_time(end) =>
        {
            let rooms = available_rooms(store, date, start, end).await?;
            Ok(RoomListing::Available(rooms))
        }
        _ => Ok(RoomListing::All(store.all_rooms().await?)),
    }
}

/// Validates the payload, checks the slot and inserts the meeting.
///
/// # Errors
///
/// * `BookingError::RoomBooked` - the slot overlaps an existing meeting
/// * `BookingError::InvalidPayload` - a field is missing or malformed, the room
///   does not exist, or the interval ends before it starts
/// * `BookingError::Database` - the store failed
pub async fn create_meeting<S>(store: &mut S, payload: &MeetingPayload) -> BookingResult<Meeting>
where
    S: BookingStore + ?Sized,
{
    // Only slots that pass the format checks are sent to the store.
    if let Some(slot) = payload.slot().filter(queryable) {
        if !room_available(store, &slot).await? {
            return Err(BookingError::RoomBooked);
        }
    }

    let rooms = store.all_rooms().await?;
    if !valid_meeting_payload(payload, &rooms) {
        return Err(BookingError::InvalidPayload);
    }

    let meeting = new_meeting(payload)?;
    if !ordered_interval(&meeting.start_time, &meeting.end_time) {
        return Err(BookingError::InvalidPayload);
    }

    let created = store
        .create_meeting(&meeting)
        .await?
        .ok_or(BookingError::RoomBooked)?;

    info!(
        "Booked meeting {} in room {} on {} {}-{}",
        created.mtg_id, created.room_id, created.mtg_date, created.start_time, created.end_time
    );
    Ok(created)
}

/// Deletes a meeting. The affected-row count alone decides success, so a
/// meeting removed by a concurrent request is reported as not found.
pub async fn delete_meeting<S>(store: &mut S, mtg_id: i32) -> BookingResult<()>
where
    S: BookingStore + ?Sized,
{
    match store.delete_meeting(mtg_id).await? {
        0 => Err(BookingError::MeetingNotFound(mtg_id.to_string())),
        _ => {
            info!("Deleted meeting {}", mtg_id);
            Ok(())
        }
    }
}

pub async fn find_meeting<S>(store: &mut S, mtg_id: i32) -> BookingResult<Meeting>
where
    S: BookingStore + ?Sized,
{
    store
        .find_meeting(mtg_id)
        .await?
        .ok_or_else(|| BookingError::MeetingNotFound(mtg_id.to_string()))
}

pub async fn meetings_for_room<S>(store: &mut S, room_id: i32) -> BookingResult<Vec<Meeting>>
where
    S: BookingStore + ?Sized,
{
    Ok(store.meetings_for_room(room_id).await?)
}

pub async fn all_meetings<S>(store: &mut S) -> BookingResult<Vec<Meeting>>
where
    S: BookingStore + ?Sized,
{
    Ok(store.all_meetings().await?)
}

fn queryable(slot: &Slot) -> bool {
    valid_date(&slot.mtg_date) && valid_time(&slot.start_time) && valid_time(&slot.end_time)
}

fn new_meeting(payload: &MeetingPayload) -> BookingResult<NewMeeting> {
    let (Some(room_id), Some(mtg_name), Some(mtg_date), Some(start_time), Some(end_time)) = (
        payload.room_id,
        payload.mtg_name.clone(),
        payload.mtg_date.clone(),
        payload.start_time.clone(),
        payload.end_time.clone(),
    ) else {
        return Err(BookingError::InvalidPayload);
    };

    Ok(NewMeeting {
        room_id,
        host_name: payload.host_name.clone(),
        mtg_name,
        mtg_date,
        start_time,
        end_time,
    })
}
