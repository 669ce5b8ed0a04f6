//! Database client module

pub mod client;

pub use client::DbClient;
