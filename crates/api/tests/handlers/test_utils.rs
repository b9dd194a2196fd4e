use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use chrono::{NaiveDate, NaiveTime};
use eyre::{eyre, Result};
use roombooker_api::ApiState;
use roombooker_core::{
    models::{
        meeting::{Meeting, NewMeeting},
        room::Room,
    },
    store::{BookingStore, StorageProvider},
};
use roombooker_db::mock::repositories::{MockBookingStore, MockStorageProvider};

/// Server whose every request gets a fresh `MockBookingStore` set up by `configure`.
pub fn server_with<F>(configure: F) -> TestServer
where
    F: Fn(&mut MockBookingStore) + Send + 'static,
{
    let mut provider = MockStorageProvider::new();
    provider.expect_acquire().returning(move || {
        let mut store = MockBookingStore::new();
        configure(&mut store);
        let store: Box<dyn BookingStore> = Box::new(store);
        Ok(store)
    });

    server_for(Arc::new(provider))
}

/// Server whose storage can never be reached.
pub fn unreachable_server() -> TestServer {
    let mut provider = MockStorageProvider::new();
    provider
        .expect_acquire()
        .returning(|| Err(eyre!("pool timed out while waiting for an open connection")));

    server_for(Arc::new(provider))
}

pub fn server_for(storage: Arc<dyn StorageProvider>) -> TestServer {
    let state = Arc::new(ApiState::new(storage));
    TestServer::new(roombooker_api::app(state)).expect("Failed to build test server")
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room { room_id: 1, room_name: "Everest".to_string() },
        Room { room_id: 2, room_name: "Kilimanjaro".to_string() },
        Room { room_id: 3, room_name: "Denali".to_string() },
    ]
}

pub fn meeting(mtg_id: i32, room_id: i32, start: (u32, u32), end: (u32, u32)) -> Meeting {
    Meeting {
        mtg_id,
        room_id,
        host_name: None,
        mtg_name: "standup".to_string(),
        mtg_date: NaiveDate::from_ymd_opt(2021, 6, 30).unwrap(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
    }
}

/// Shared in-memory store with the same overlap semantics as the Postgres
/// queries. Used for multi-request scenarios.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    rooms: Vec<Room>,
    meetings: Vec<Meeting>,
    next_id: i32,
}

impl InMemoryStore {
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        let store = Self::default();
        store.inner.lock().unwrap().rooms = rooms;
        store
    }

    fn conflicts(inner: &Inner, room_id: Option<i32>, date: &str, start: &str, end: &str) -> Result<Vec<Meeting>> {
        let date = parse_date(date)?;
        let (start, end) = (parse_time(start)?, parse_time(end)?);

        Ok(inner
            .meetings
            .iter()
            .filter(|m| room_id.is_none_or(|id| m.room_id == id))
            .filter(|m| m.mtg_date == date && m.start_time < end && start < m.end_time)
            .cloned()
            .collect())
    }
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| eyre!("invalid date {date}: {e}"))
}

fn parse_time(time: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|e| eyre!("invalid time {time}: {e}"))
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn find_meeting(&mut self, mtg_id: i32) -> Result<Option<Meeting>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.meetings.iter().find(|m| m.mtg_id == mtg_id).cloned())
    }

    async fn conflicting_meetings(
        &mut self,
        room_id: i32,
        date: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Meeting>> {
        let inner = self.inner.lock().unwrap();
        Self::conflicts(&inner, Some(room_id), date, start, end)
    }

    async fn available_rooms(&mut self, date: &str, start: &str, end: &str) -> Result<Vec<Room>> {
        let inner = self.inner.lock().unwrap();
        let busy: Vec<i32> = Self::conflicts(&inner, None, date, start, end)?
            .into_iter()
            .map(|m| m.room_id)
            .collect();

        Ok(inner
            .rooms
            .iter()
            .filter(|r| !busy.contains(&r.room_id))
            .cloned()
            .collect())
    }

    async fn meetings_for_room(&mut self, room_id: i32) -> Result<Vec<Meeting>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.meetings.iter().filter(|m| m.room_id == room_id).cloned().collect())
    }

    async fn all_meetings(&mut self) -> Result<Vec<Meeting>> {
        Ok(self.inner.lock().unwrap().meetings.clone())
    }

    async fn all_rooms(&mut self) -> Result<Vec<Room>> {
        Ok(self.inner.lock().unwrap().rooms.clone())
    }

    async fn create_meeting(&mut self, new_meeting: &NewMeeting) -> Result<Option<Meeting>> {
        let mut inner = self.inner.lock().unwrap();
        let clash = Self::conflicts(
            &inner,
            Some(new_meeting.room_id),
            &new_meeting.mtg_date,
            &new_meeting.start_time,
            &new_meeting.end_time,
        )?;
        if !clash.is_empty() {
            return Ok(None);
        }

        inner.next_id += 1;
        let meeting = Meeting {
            mtg_id: inner.next_id,
            room_id: new_meeting.room_id,
            host_name: new_meeting.host_name.clone(),
            mtg_name: new_meeting.mtg_name.clone(),
            mtg_date: parse_date(&new_meeting.mtg_date)?,
            start_time: parse_time(&new_meeting.start_time)?,
            end_time: parse_time(&new_meeting.end_time)?,
        };
        inner.meetings.push(meeting.clone());

        Ok(Some(meeting))
    }

    async fn delete_meeting(&mut self, mtg_id: i32) -> Result<u64> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.meetings.len();
        inner.meetings.retain(|m| m.mtg_id != mtg_id);
        Ok((before - inner.meetings.len()) as u64)
    }
}

#[async_trait]
impl StorageProvider for InMemoryStore {
    async fn acquire(&self) -> Result<Box<dyn BookingStore>> {
        Ok(Box::new(self.clone()))
    }
}
