//! `message:send`: the generic dispatch path, routed by message `type`.

use cellar_common::Logger;
use serde_json::{json, Value};

use crate::message::GenericMessage;

pub const UNKNOWN_MESSAGE_TYPE: &str = "Unknown message type";

pub fn handle(payload: Option<&Value>, logger: &Logger) -> Value {
    let message = payload
        .cloned()
        .and_then(|raw| serde_json::from_value::<GenericMessage>(raw).ok());
    let Some(message) = message else {
        logger.warn("Malformed message, expected {type, payload}", &[]);
        return unknown();
    };

    logger.info("Handling IPC message:", &[&message.kind]);
    match message.kind.as_str() {
        "ping" => json!({ "success": true, "data": "pong" }),
        other => {
            logger.warn("Unknown message type:", &[&other]);
            unknown()
        }
    }
}

fn unknown() -> Value {
    json!({ "success": false, "error": UNKNOWN_MESSAGE_TYPE })
}
