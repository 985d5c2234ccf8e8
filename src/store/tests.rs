use std::sync::Arc;
use std::thread;

use serde_json::json;

use super::{Message, MessageLog};

#[test]
fn test_log_new_is_empty() {
    let log = MessageLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
    assert!(log.snapshot().is_empty());
}

#[test]
fn test_append_returns_position() {
    let log = MessageLog::new();
    assert_eq!(log.append(Message::from(json!({ "text": "hi" }))), 1);
    assert_eq!(log.append(Message::from(json!({ "text": "bye" }))), 2);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_snapshot_preserves_submission_order() {
    let log = MessageLog::new();
    for i in 0..10 {
        log.append(Message::from(json!({ "seq": i })));
    }

    let seqs: Vec<_> = log
        .snapshot()
        .iter()
        .map(|m| m.payload()["seq"].as_i64().unwrap())
        .collect();
    assert_eq!(seqs, (0..10).collect::<Vec<_>>());
}

#[test]
fn test_snapshot_is_detached_from_later_appends() {
    let log = MessageLog::new();
    log.append(Message::from(json!({ "text": "hi" })));

    let before = log.snapshot();
    log.append(Message::from(json!({ "text": "bye" })));

    assert_eq!(before, vec![Message::from(json!({ "text": "hi" }))]);
    assert_eq!(log.len(), 2);
}

#[test]
fn test_payload_is_stored_verbatim() {
    let payload = json!({
        "nested": { "list": [1, 2.5, null, "x"], "flag": true },
        "": "empty key",
    });
    let log = MessageLog::new();
    log.append(Message::from(payload.clone()));

    let stored = log.snapshot().remove(0);
    assert_eq!(stored.into_payload(), payload);
}

#[test]
fn test_message_serializes_transparently() {
    let msg = Message::from(json!({ "text": "hi" }));
    assert_eq!(serde_json::to_string(&msg).unwrap(), r#"{"text":"hi"}"#);

    let parsed: Message = serde_json::from_str(r#"[1,"two"]"#).unwrap();
    assert_eq!(parsed.payload(), &json!([1, "two"]));
}

#[test]
fn test_concurrent_appends_keep_per_thread_order() {
    let log = Arc::new(MessageLog::new());
    let handles: Vec<_> = (0..4)
        .map(|writer| {
            let log = log.clone();
            thread::spawn(move || {
                for seq in 0..250 {
                    log.append(Message::from(json!({ "writer": writer, "seq": seq })));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let snapshot = log.snapshot();
    assert_eq!(snapshot.len(), 1000);

    for writer in 0..4 {
        let seqs: Vec<_> = snapshot
            .iter()
            .filter(|m| m.payload()["writer"] == writer)
            .map(|m| m.payload()["seq"].as_i64().unwrap())
            .collect();
        assert_eq!(seqs, (0..250).collect::<Vec<_>>());
    }
}
