use chrono::{NaiveDate, NaiveTime};
use roombooker_core::models::{meeting::Meeting, room::Room};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbRoom {
    pub room_id: i32,
    pub room_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMeeting {
    pub mtg_id: i32,
    pub room_id: i32,
    pub host_name: Option<String>,
    pub mtg_name: String,
    pub mtg_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl From<DbRoom> for Room {
    fn from(row: DbRoom) -> Self {
        Room {
            room_id: row.room_id,
            room_name: row.room_name,
        }
    }
}

impl From<DbMeeting> for Meeting {
    fn from(row: DbMeeting) -> Self {
        Meeting {
            mtg_id: row.mtg_id,
            room_id: row.room_id,
            host_name: row.host_name,
            mtg_name: row.mtg_name,
            mtg_date: row.mtg_date,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}
