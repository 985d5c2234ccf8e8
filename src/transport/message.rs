use serde::{Deserialize, Serialize};

/// Acknowledgment returned for every accepted submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitAck {
    pub status: String,
}

impl SubmitAck {
    pub const RECEIVED: &'static str = "Message received!";

    pub fn received() -> Self {
        Self {
            status: Self::RECEIVED.to_string(),
        }
    }
}

/// Body of every client error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
