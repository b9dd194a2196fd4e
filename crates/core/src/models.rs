pub mod meeting;
pub mod room;
