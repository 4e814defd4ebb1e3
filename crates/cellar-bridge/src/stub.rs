//! The intermediary script injected into content.
//!
//! It defines `window.cellarAPI`, one promise-returning method per catalogued
//! operation, and `window.__cellarBridge.settle`, which the host calls to
//! resolve a pending request. The transport is held in a closure; content
//! never receives a generic send function.

use crate::message::BridgeReply;
use crate::operation::Operation;

const PRELUDE: &str = r#"(function () {
  'use strict';
  if (window.cellarAPI) { return; }
  var pending = new Map();
  var nextId = 1;
  function invoke(channel, payload) {
    return new Promise(function (resolve, reject) {
      var id = nextId++;
      pending.set(id, { resolve: resolve, reject: reject });
      var request = { channel: channel, id: id };
      if (payload !== undefined) { request.payload = payload; }
      try {
        window.ipc.postMessage(JSON.stringify(request));
      } catch (err) {
        pending.delete(id);
        reject(err);
      }
    });
  }
  function settle(reply) {
    var entry = reply && pending.get(reply.id);
    if (!entry) { return; }
    pending.delete(reply.id);
    if (reply.ok) { entry.resolve(reply.value); } else { entry.reject(new Error(reply.error)); }
  }
  var api = {
"#;

const EPILOGUE: &str = r#"  };
  Object.defineProperty(window, 'cellarAPI', {
    value: Object.freeze(api), writable: false, configurable: false
  });
  Object.defineProperty(window, '__cellarBridge', {
    value: Object.freeze({ settle: settle }), writable: false, configurable: false
  });
})();
"#;

/// Build the client stub from the operation catalog.
pub fn client_stub_script() -> String {
    let mut script = String::from(PRELUDE);
    let last = Operation::ALL.len() - 1;
    for (i, op) in Operation::ALL.into_iter().enumerate() {
        let channel = serde_json::to_string(op.channel()).unwrap_or_default();
        let separator = if i == last { "" } else { "," };
        let (params, args) = if op.takes_payload() {
            ("data", format!("{channel}, data"))
        } else {
            ("", channel)
        };
        script.push_str(&format!(
            "    {}: function ({params}) {{ return invoke({args}); }}{separator}\n",
            op.stub_method()
        ));
    }
    script.push_str(EPILOGUE);
    script
}

/// Script that resolves the pending promise for `reply` with its wire form.
/// `None` when the request carried no id.
pub fn settle_script(reply: &BridgeReply) -> Option<String> {
    reply.id?;
    Some(format!(
        "window.__cellarBridge && window.__cellarBridge.settle({});",
        reply.to_wire()
    ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::message::BridgeResponse;

    #[test]
    fn stub_has_one_method_per_operation() {
        let script = client_stub_script();
        for op in Operation::ALL {
            let method = format!("    {}: function (", op.stub_method());
            assert_eq!(script.matches(&method).count(), 1, "{}", op.stub_method());
            assert!(script.contains(&format!("invoke(\"{}\"", op.channel())));
        }
    }

    #[test]
    fn payload_methods_forward_argument() {
        let script = client_stub_script();
        assert!(script.contains(
            "saveTransaction: function (data) { return invoke(\"data:save-transaction\", data); },"
        ));
        assert!(script
            .contains("sendMessage: function (data) { return invoke(\"message:send\", data); }\n"));
        assert!(script.contains("getAppInfo: function () { return invoke(\"app:get-info\"); },"));
    }

    #[test]
    fn stub_freezes_api_and_hides_transport() {
        let script = client_stub_script();
        assert!(script.contains("Object.freeze(api)"));
        assert!(script.contains("Object.freeze({ settle: settle })"));
        // Only the two frozen globals are defined.
        assert_eq!(script.matches("Object.defineProperty(window").count(), 2);
        assert!(!script.contains("invoke: invoke"));
        assert!(!script.contains("postMessage: "));
    }

    fn settled_reply(script: &str) -> serde_json::Value {
        let json = script
            .strip_prefix("window.__cellarBridge && window.__cellarBridge.settle(")
            .and_then(|rest| rest.strip_suffix(");"))
            .unwrap();
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn settle_ok_embeds_wire_reply() {
        let reply = BridgeReply {
            id: Some(4),
            response: BridgeResponse::Ok(json!({"success": true, "data": "pong"})),
        };
        let script = settle_script(&reply).unwrap();
        assert_eq!(
            settled_reply(&script),
            json!({"id": 4, "ok": true, "value": {"success": true, "data": "pong"}})
        );
    }

    #[test]
    fn settle_err_carries_message() {
        let reply = BridgeReply {
            id: Some(5),
            response: BridgeResponse::Err("No handler registered for 'x'</script>".into()),
        };
        let script = settle_script(&reply).unwrap();
        assert_eq!(
            settled_reply(&script),
            json!({"id": 5, "ok": false, "error": "No handler registered for 'x'</script>"})
        );
    }

    #[test]
    fn stub_settles_from_wire_fields() {
        let script = client_stub_script();
        assert!(script.contains("function settle(reply)"));
        assert!(script.contains("entry.resolve(reply.value)"));
        assert!(script.contains("entry.reject(new Error(reply.error))"));
    }

    #[test]
    fn no_id_no_settle() {
        let reply = BridgeReply {
            id: None,
            response: BridgeResponse::Ok(json!(null)),
        };
        assert_eq!(settle_script(&reply), None);
    }
}
