//! The `store` module holds the relay's only state: the in-memory log of
//! submitted messages.
//!
//! Nothing here touches the network. The transport layer parses request
//! bodies into `Message` values, appends them to a shared `MessageLog` and
//! reads snapshots back for listing.

pub mod log;
pub mod message;

pub use log::MessageLog;
pub use message::Message;

#[cfg(test)]
mod tests;
