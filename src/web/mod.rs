//! HTTP API for uploading graphs and querying their shortest paths.

pub mod api;
pub mod models;
pub mod server;
