use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("ERROR: meeting room is already booked for the specified time. Please try another room.")]
    RoomBooked,

    #[error(
        "ERROR: invalid payload. Please ensure that your request body is properly formatted. \
         GET /api/v1 for formatting details."
    )]
    InvalidPayload,

    #[error("ERROR: meeting with id {0} not found.")]
    MeetingNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),
}

impl BookingError {
    /// Whether the failure was caused by the request rather than the store.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, BookingError::Database(_))
    }
}

pub type BookingResult<T> = Result<T, BookingError>;
