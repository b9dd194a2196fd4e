//! # API Documentation Handlers
//!
//! `GET /api/v1` describes the available endpoints. Every path the router does
//! not know redirects here.

use axum::{response::Redirect, Json};
use serde::Serialize;

pub const DOCS_PATH: &str = "/api/v1";

#[derive(Debug, Serialize)]
pub struct ApiDocs {
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub rooms: &'static str,
    pub available_rooms: AvailableRoomsDoc,
    pub meetings_for_room: &'static str,
    pub all_meetings: &'static str,
    pub new_meeting: NewMeetingDoc,
    pub delete_meeting: &'static str,
}

#[derive(Debug, Serialize)]
pub struct AvailableRoomsDoc {
    pub path: &'static str,
    pub params: &'static str,
    pub example: &'static str,
    pub note: &'static str,
}

#[derive(Debug, Serialize)]
pub struct NewMeetingDoc {
    pub path: &'static str,
    pub fmt: &'static str,
    pub sample_request_body: &'static str,
}

pub static API_DOCS: ApiDocs = ApiDocs {
    endpoints: Endpoints {
        rooms: "GET /api/v1/rooms",
        available_rooms: AvailableRoomsDoc {
            path: "GET /api/v1/rooms?date=&start_time=&end_time=",
            params: "[date: yyyy-mm-dd, start_time: hh:mm, end_time: hh:mm]",
            example: "GET /api/v1/rooms?date=2008-12-21&start_time=09:00&end_time=09:30",
            note: "All params must have valid inputs or else the API will return the all_rooms listing instead.",
        },
        meetings_for_room: "GET /api/v1/rooms/:room_id",
        all_meetings: "GET /api/v1/meetings",
        new_meeting: NewMeetingDoc {
            path: "POST /api/v1/meetings",
            fmt: "requires a JSON payload like: { room_id: int, host_name: str (OPTIONAL), \
                  mtg_name: str, mtg_date: date, start_time: time, end_time: time }",
            sample_request_body: "{ \"room_id\": 1, \"host_name\": \"nicholas licalzi\", \
                                  \"mtg_name\": \"weekly standup\", \"mtg_date\": \"2021-06-30\", \
                                  \"start_time\": \"09:00:00\", \"end_time\": \"09:30:00\" }",
        },
        delete_meeting: "DELETE /api/v1/meetings/:mtg_id",
    },
};

pub async fn api_docs() -> Json<&'static ApiDocs> {
    Json(&API_DOCS)
}

pub async fn redirect_to_docs() -> Redirect {
    Redirect::to(DOCS_PATH)
}
