use chrono::{NaiveDate, NaiveTime};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub mtg_id: i32,
    pub room_id: i32,
    pub host_name: Option<String>,
    pub mtg_name: String,
    pub mtg_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Body of `POST /api/v1/meetings` as sent by the client.
///
/// Every field is optional so that a missing field is reported as an invalid
/// payload instead of failing deserialization. `room_id` may be sent as a
/// number or as a string holding one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MeetingPayload {
    #[serde(default, deserialize_with = "room_id_from_number_or_string")]
    pub room_id: Option<i32>,
    pub host_name: Option<String>,
    pub mtg_name: Option<String>,
    pub mtg_date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

impl MeetingPayload {
    /// The requested slot, if every part of it is present.
    pub fn slot(&self) -> Option<Slot> {
        Some(Slot {
            room_id: self.room_id?,
            mtg_date: self.mtg_date.clone()?,
            start_time: self.start_time.clone()?,
            end_time: self.end_time.clone()?,
        })
    }
}

fn room_id_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|id| i32::try_from(id).ok())
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("room_id out of range: {number}"))),
        Some(Value::String(text)) => text
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("room_id is not an integer: {text:?}"))),
        Some(other) => Err(D::Error::custom(format!("invalid room_id: {other}"))),
    }
}

/// A room, a date and a time interval, either requested or already booked.
///
/// Dates and times stay in their request form; the store casts them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub room_id: i32,
    pub mtg_date: String,
    pub start_time: String,
    pub end_time: String,
}

/// A validated meeting ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMeeting {
    pub room_id: i32,
    pub host_name: Option<String>,
    pub mtg_name: String,
    pub mtg_date: String,
    pub start_time: String,
    pub end_time: String,
}

impl NewMeeting {
    pub fn slot(&self) -> Slot {
        Slot {
            room_id: self.room_id,
            mtg_date: self.mtg_date.clone(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingsResponse {
    pub meetings: Vec<Meeting>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingResponse {
    pub meeting: Meeting,
}
