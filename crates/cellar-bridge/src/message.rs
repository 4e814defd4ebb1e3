//! Wire types between the client stub and the registry.
//!
//! Requests arrive as JSON through `window.ipc.postMessage`:
//! `{"channel": "...", "payload": ..., "id": 7}`. Replies go back through
//! `window.__cellarBridge.settle({id, ok, value | error})`.

use cellar_common::BridgeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One operation invocation from content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeRequest {
    pub channel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    /// Correlation id assigned by the stub. Requests without one get no reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
}

impl BridgeRequest {
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            payload: None,
            id: None,
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, BridgeError> {
        serde_json::from_str(raw).map_err(|e| BridgeError::InvalidRequest(e.to_string()))
    }
}

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeResponse {
    Ok(Value),
    Err(String),
}

impl BridgeResponse {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// The success value, if any.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }
}

impl From<BridgeError> for BridgeResponse {
    fn from(err: BridgeError) -> Self {
        Self::Err(err.to_string())
    }
}

/// A response paired with the id of the request it answers.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeReply {
    pub id: Option<u64>,
    pub response: BridgeResponse,
}

#[derive(Serialize)]
struct WireReply<'a> {
    id: Option<u64>,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

impl BridgeReply {
    /// `{id, ok, value}` or `{id, ok, error}`.
    pub fn to_wire(&self) -> Value {
        let wire = match &self.response {
            BridgeResponse::Ok(value) => WireReply {
                id: self.id,
                ok: true,
                value: Some(value),
                error: None,
            },
            BridgeResponse::Err(error) => WireReply {
                id: self.id,
                ok: false,
                value: None,
                error: Some(error),
            },
        };
        serde_json::to_value(wire).unwrap_or(Value::Null)
    }
}

/// Payload of `message:send`: the generic, `type`-routed dispatch path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GenericMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
    #[serde(default)]
    pub id: Option<Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_minimal_request() {
        let req = BridgeRequest::from_json(r#"{"channel":"app:get-info"}"#).unwrap();
        assert_eq!(req, BridgeRequest::new("app:get-info"));
    }

    #[test]
    fn parses_full_request() {
        let req = BridgeRequest::from_json(
            r#"{"channel":"data:save-transaction","payload":{"total":42.5},"id":3}"#,
        )
        .unwrap();
        assert_eq!(req.channel, "data:save-transaction");
        assert_eq!(req.payload, Some(json!({"total": 42.5})));
        assert_eq!(req.id, Some(3));
    }

    #[test]
    fn rejects_malformed_request() {
        let err = BridgeRequest::from_json("not json").unwrap_err();
        assert!(matches!(err, BridgeError::InvalidRequest(_)));
        assert!(BridgeRequest::from_json(r#"{"payload":1}"#).is_err());
    }

    #[test]
    fn ok_reply_wire_shape() {
        let reply = BridgeReply {
            id: Some(9),
            response: BridgeResponse::Ok(json!("1.0.1")),
        };
        assert_eq!(reply.to_wire(), json!({"id": 9, "ok": true, "value": "1.0.1"}));
    }

    #[test]
    fn err_reply_wire_shape() {
        let reply = BridgeReply {
            id: None,
            response: BridgeError::UnknownOperation("fs:read".into()).into(),
        };
        assert_eq!(
            reply.to_wire(),
            json!({"id": null, "ok": false, "error": "No handler registered for 'fs:read'"})
        );
    }

    #[test]
    fn generic_message_defaults() {
        let msg: GenericMessage = serde_json::from_value(json!({"type": "ping"})).unwrap();
        assert_eq!(msg.kind, "ping");
        assert_eq!(msg.payload, Value::Null);
        assert_eq!(msg.id, None);
    }
}
