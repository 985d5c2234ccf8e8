use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A message submitted by a client.
///
/// The payload is opaque: whatever JSON document the caller sent is kept
/// verbatim, with no required fields and no validation. It serializes back
/// to exactly the same JSON it was parsed from.
///
/// # Example
///
/// ```rust
/// use msgrelay::store::Message;
/// use serde_json::json;
///
/// let msg = Message::from(json!({ "text": "hi" }));
/// assert_eq!(serde_json::to_string(&msg).unwrap(), r#"{"text":"hi"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Message(Value);

impl Message {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn into_payload(self) -> Value {
        self.0
    }
}

impl From<Value> for Message {
    fn from(payload: Value) -> Self {
        Self::new(payload)
    }
}
