//! The message log
//!
//! `MessageLog` is the single piece of shared state in the relay: an
//! append-only, insertion-ordered list of every accepted message.
//!
//! Concurrency and usage notes:
//! - One `std::sync::Mutex` guards the vector. Appends are serialized in
//!   lock-acquisition order, and a snapshot is taken under the same lock, so
//!   readers never see a half-appended element.
//! - The lock is only held for a push or a clone and is never held across an
//!   `.await`; handlers share the log as `Arc<MessageLog>`.
//! - Growth is unbounded. Nothing is ever evicted or rewritten.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::store::message::Message;

#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<Message>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to the end of the log and returns the new length,
    /// which is also the 1-based position of the message.
    pub fn append(&self, message: Message) -> usize {
        let mut messages = self.lock();
        messages.push(message);
        messages.len()
    }

    /// Returns every message accepted so far, in submission order.
    pub fn snapshot(&self) -> Vec<Message> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic elsewhere cannot leave a partial push behind, so a poisoned
    // lock still guards a consistent vector.
    fn lock(&self) -> MutexGuard<'_, Vec<Message>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
