//! # msgrelay
//!
//! `msgrelay` is a minimal, in-memory message relay served over HTTP.
//! Clients `POST /send` arbitrary JSON documents and `GET /messages` to read
//! back everything submitted so far, in submission order. Nothing is
//! persisted; the log lives exactly as long as the process.
//!
//! ## Core Modules
//!
//! - `store`: the append-only `MessageLog` and the opaque `Message` type.
//! - `transport`: the axum router, handlers and response bodies.
//! - `config`: loading settings from defaults, file, environment and CLI.
//! - `utils`: the shared error type and logging setup.

pub mod config;
pub mod store;
pub mod transport;
pub mod utils;
