//! # Meeting Handlers
//!
//! Listing, booking and cancelling meetings. Booking goes through
//! [`booking::create_meeting`], which reports a clashing slot before it
//! reports a malformed payload.

use axum::{body::Bytes, extract::Path, http::StatusCode, Json};
use roombooker_core::{
    booking,
    errors::BookingError,
    models::meeting::{CreateMeetingResponse, MeetingPayload, MeetingsResponse},
};
use tracing::debug;

use crate::middleware::{error_handling::AppError, storage::Storage};

/// `GET /api/v1/meetings`
pub async fn list_meetings(mut storage: Storage) -> Result<Json<MeetingsResponse>, AppError> {
    let meetings = booking::all_meetings(&mut *storage).await?;

    Ok(Json(MeetingsResponse { meetings }))
}

/// `POST /api/v1/meetings`
///
/// The body is parsed by hand so that malformed JSON is reported with the
/// same invalid-payload message as a missing field.
///
/// # Errors
///
/// * `BookingError::RoomBooked` - the requested slot overlaps another meeting
/// * `BookingError::InvalidPayload` - the body is not a valid meeting
pub async fn create_meeting(
    mut storage: Storage,
    body: Bytes,
) -> Result<(StatusCode, Json<CreateMeetingResponse>), AppError> {
    let payload: MeetingPayload = serde_json::from_slice(&body).map_err(|e| {
        debug!("Rejected meeting body: {}", e);
        BookingError::InvalidPayload
    })?;

    let meeting = booking::create_meeting(&mut *storage, &payload).await?;

    Ok((StatusCode::CREATED, Json(CreateMeetingResponse { meeting })))
}

/// `DELETE /api/v1/meetings/:mtg_id`
///
/// Ids that are not integers cannot exist and are reported as not found.
pub async fn delete_meeting(
    mut storage: Storage,
    Path(mtg_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = mtg_id
        .parse::<i32>()
        .map_err(|_| BookingError::MeetingNotFound(mtg_id.clone()))?;

    booking::delete_meeting(&mut *storage, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
