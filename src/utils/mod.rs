//! The `utils` module provides the error type and logging setup shared
//! across the `msgrelay` crate.

pub mod error;
pub mod logging;

pub use error::{RelayError, RelayResult};

#[cfg(test)]
mod tests;
