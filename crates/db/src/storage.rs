//! Postgres-backed [`BookingStore`].
//!
//! A [`PgStorage`] holds one pooled connection. The connection returns to the
//! pool when the storage is dropped, which the API does at the end of every
//! request whether or not the handler succeeded.

use async_trait::async_trait;
use eyre::Result;
use roombooker_core::{
    models::{
        meeting::{Meeting, NewMeeting},
        room::Room,
    },
    store::{BookingStore, StorageProvider},
};
use sqlx::{pool::PoolConnection, Postgres};

use crate::{
    repositories::{meeting, room},
    DbPool,
};

pub struct PgStorage {
    conn: PoolConnection<Postgres>,
}

impl PgStorage {
    pub async fn connect(pool: &DbPool) -> Result<Self> {
        let conn = pool.acquire().await?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl BookingStore for PgStorage {
    async fn find_meeting(&mut self, mtg_id: i32) -> Result<Option<Meeting>> {
        let meeting = meeting::get_meeting_by_id(&mut self.conn, mtg_id).await?;
        Ok(meeting.map(Meeting::from))
    }

    async fn conflicting_meetings(
        &mut self,
        room_id: i32,
        date: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Meeting>> {
        let meetings =
            meeting::get_conflicting_meetings(&mut self.conn, room_id, date, start, end).await?;
        Ok(meetings.into_iter().map(Meeting::from).collect())
    }

    async fn available_rooms(&mut self, date: &str, start: &str, end: &str) -> Result<Vec<Room>> {
        let rooms = room::get_available_rooms(&mut self.conn, date, start, end).await?;
        Ok(rooms.into_iter().map(Room::from).collect())
    }

    async fn meetings_for_room(&mut self, room_id: i32) -> Result<Vec<Meeting>> {
        let meetings = meeting::get_meetings_by_room_id(&mut self.conn, room_id).await?;
        Ok(meetings.into_iter().map(Meeting::from).collect())
    }

    async fn all_meetings(&mut self) -> Result<Vec<Meeting>> {
        let meetings = meeting::get_all_meetings(&mut self.conn).await?;
        Ok(meetings.into_iter().map(Meeting::from).collect())
    }

    async fn all_rooms(&mut self) -> Result<Vec<Room>> {
        let rooms = room::get_all_rooms(&mut self.conn).await?;
        Ok(rooms.into_iter().map(Room::from).collect())
    }

    async fn create_meeting(&mut self, new_meeting: &NewMeeting) -> Result<Option<Meeting>> {
        let created = meeting::create_meeting(&mut self.conn, new_meeting).await?;
        Ok(created.map(Meeting::from))
    }

    async fn delete_meeting(&mut self, mtg_id: i32) -> Result<u64> {
        meeting::delete_meeting(&mut self.conn, mtg_id).await
    }
}

/// Hands out one [`PgStorage`] per request from a shared pool.
#[derive(Clone)]
pub struct PgStorageProvider {
    pool: DbPool,
}

impl PgStorageProvider {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageProvider for PgStorageProvider {
    async fn acquire(&self) -> Result<Box<dyn BookingStore>> {
        let storage = PgStorage::connect(&self.pool).await?;
        Ok(Box::new(storage))
    }
}
