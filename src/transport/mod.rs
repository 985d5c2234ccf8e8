//! The `transport` module is responsible for the relay's HTTP surface.
//!
//! It defines the response bodies exchanged with clients and the axum
//! router that maps `POST /send` and `GET /messages` onto the shared
//! `MessageLog`, plus helpers to run that router on a listener.

pub mod http;
pub mod message;

pub use http::{router, serve, start_http_server};
