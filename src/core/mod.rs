pub mod api;
pub mod draft;
pub mod models;
pub mod payload;
