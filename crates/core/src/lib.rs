//! # RoomBooker Core
//!
//! Domain types, request validation and the booking rules shared by the API
//! and database crates. Nothing in here talks to Postgres directly; storage is
//! reached through the traits in [`store`].

pub mod booking;
pub mod errors;
pub mod models;
pub mod store;
pub mod validation;
