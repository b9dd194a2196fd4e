pub mod docs;
pub mod meetings;
pub mod rooms;
