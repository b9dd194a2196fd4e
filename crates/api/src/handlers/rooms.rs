//! # Room Handlers

use axum::{
    extract::{Path, Query},
    response::{IntoResponse, Response},
    Json,
};
use roombooker_core::{
    booking::{self, RoomListing},
    models::{
        meeting::MeetingsResponse,
        room::{AllRoomsResponse, AvailableRoomsResponse, RoomsQuery},
    },
};

use crate::middleware::{error_handling::AppError, storage::Storage};

/// `GET /api/v1/rooms[?date=&start_time=&end_time=]`
///
/// Returns `available_rooms` when all three parameters are well formed and
/// `all_rooms` otherwise, including when the query string cannot be parsed.
pub async fn list_rooms(
    mut storage: Storage,
    query: Option<Query<RoomsQuery>>,
) -> Result<Response, AppError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();

    let response = match booking::list_rooms(&mut *storage, &query).await? {
        RoomListing::Available(available_rooms) => {
            Json(AvailableRoomsResponse { available_rooms }).into_response()
        }
        RoomListing::All(all_rooms) => Json(AllRoomsResponse { all_rooms }).into_response(),
    };

    Ok(response)
}

/// `GET /api/v1/rooms/:room_id`
///
/// A non-numeric id matches no room, so the listing is empty.
pub async fn meetings_for_room(
    mut storage: Storage,
    Path(room_id): Path<String>,
) -> Result<Json<MeetingsResponse>, AppError> {
    let meetings = match room_id.parse::<i32>() {
        Ok(id) => booking::meetings_for_room(&mut *storage, id).await?,
        Err(_) => Vec::new(),
    };

    Ok(Json(MeetingsResponse { meetings }))
}
