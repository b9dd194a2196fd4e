pub mod docs;
pub mod health;
pub mod meetings;
pub mod rooms;
