//! API module - routes, handlers, and request/response models

pub mod handlers;
pub mod models;
pub mod routes;
