use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_id: i32,
    pub room_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllRoomsResponse {
    pub all_rooms: Vec<Room>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableRoomsResponse {
    pub available_rooms: Vec<Room>,
}

/// Optional availability filter accepted by `GET /api/v1/rooms`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomsQuery {
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}
