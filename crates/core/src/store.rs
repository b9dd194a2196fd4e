//! Storage seams for the booking rules.
//!
//! A [`BookingStore`] owns one database connection for the lifetime of a
//! request. A [`StorageProvider`] hands those out and is shared by the whole
//! server.

use async_trait::async_trait;
use eyre::Result;

use crate::models::{
    meeting::{Meeting, NewMeeting},
    room::Room,
};

#[async_trait]
pub trait BookingStore: Send {
    async fn find_meeting(&mut self, mtg_id: i32) -> Result<Option<Meeting>>;

    /// Meetings in `room_id` on `date` whose `[start, end)` overlaps the given interval.
    async fn conflicting_meetings(
        &mut self,
        room_id: i32,
        date: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Meeting>>;

    /// Rooms with no meeting overlapping the interval on `date`.
    async fn available_rooms(&mut self, date: &str, start: &str, end: &str) -> Result<Vec<Room>>;

    async fn meetings_for_room(&mut self, room_id: i32) -> Result<Vec<Meeting>>;

    async fn all_meetings(&mut self) -> Result<Vec<Meeting>>;

    async fn all_rooms(&mut self) -> Result<Vec<Room>>;

    /// Inserts the meeting, returning `None` if its slot was taken by the time
    /// the insert ran.
    async fn create_meeting(&mut self, meeting: &NewMeeting) -> Result<Option<Meeting>>;

    /// Deletes by id and returns the number of rows removed.
    async fn delete_meeting(&mut self, mtg_id: i32) -> Result<u64>;
}

#[async_trait]
pub trait StorageProvider: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn BookingStore>>;
}
