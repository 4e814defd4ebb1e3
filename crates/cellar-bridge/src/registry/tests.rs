use std::path::PathBuf;

use cellar_common::{LogJournal, LogLevel, Logger};
use cellar_config::CellarConfig;
use cellar_host::testing::{FakeWindow, FakeWindowing};
use cellar_host::{HostSettings, MainWindowController};
use cellar_platform::LifecyclePolicy;
use serde_json::json;

use super::*;

fn logger() -> Logger {
    Logger::with_journal("IpcManager", LogLevel::Debug, LogJournal::new(128))
}

fn config() -> CellarConfig {
    let mut config = CellarConfig::default();
    config.content.index_path = Some(PathBuf::from("/opt/cellar/dist/index.html"));
    config
}

fn registry() -> BridgeRegistry {
    BridgeRegistry::from_config(&config(), logger())
}

fn controller() -> MainWindowController<FakeWindow> {
    MainWindowController::new(
        HostSettings::from_config(&config(), ""),
        LifecyclePolicy::QuitOnEmpty,
        logger(),
    )
}

fn controller_with_window() -> MainWindowController<FakeWindow> {
    let mut ctl = controller();
    ctl.start(&mut FakeWindowing::default()).unwrap();
    ctl
}

fn call(
    registry: &BridgeRegistry,
    target: &mut dyn WindowTarget,
    channel: &str,
    payload: Option<Value>,
) -> BridgeResponse {
    let mut request = BridgeRequest::new(channel).with_id(1);
    request.payload = payload;
    registry.dispatch(&request, target).response
}

// -- App operations --

#[test]
fn get_info_reports_identity() {
    let reg = registry();
    let mut ctl = controller();
    let response = call(&reg, &mut ctl, "app:get-info", None);

    let info = response.value().unwrap();
    assert_eq!(info["name"], "Liquor Store Management System");
    assert_eq!(info["platform"], cellar_platform::platform_name());
    assert_eq!(info["arch"], cellar_platform::arch_name());
}

#[test]
fn version_and_info_version_agree() {
    let reg = registry();
    let mut ctl = controller();
    let info = call(&reg, &mut ctl, "app:get-info", None);
    let version = call(&reg, &mut ctl, "app:get-version", None);

    assert_eq!(info.value().unwrap()["version"], *version.value().unwrap());
    assert_eq!(*version.value().unwrap(), json!(env!("CARGO_PKG_VERSION")));
}

#[test]
fn platform_matches_info() {
    let reg = registry();
    let mut ctl = controller();
    let platform = call(&reg, &mut ctl, "app:get-platform", None);
    assert_eq!(
        *platform.value().unwrap(),
        json!(cellar_platform::platform_name())
    );
}

// -- Window operations --

#[test]
fn window_operations_without_window_are_silent_no_ops() {
    let reg = registry();
    let mut ctl = controller();

    for channel in ["window:minimize", "window:toggle-maximize", "window:close"] {
        assert_eq!(
            call(&reg, &mut ctl, channel, None),
            BridgeResponse::Ok(Value::Null),
            "{channel}"
        );
    }
    assert_eq!(
        call(&reg, &mut ctl, "window:is-maximized", None),
        BridgeResponse::Ok(json!(false))
    );
    assert!(!ctl.should_exit());
}

#[test]
fn window_operations_without_focus_are_silent_no_ops() {
    let reg = registry();
    let mut ctl = controller_with_window();
    ctl.main_window_mut().unwrap().focused = false;

    for channel in ["window:minimize", "window:toggle-maximize", "window:close"] {
        assert!(call(&reg, &mut ctl, channel, None).is_ok());
    }
    assert_eq!(
        call(&reg, &mut ctl, "window:is-maximized", None),
        BridgeResponse::Ok(json!(false))
    );

    let window = ctl.main_window().unwrap();
    assert!(!window.minimized);
    assert!(!window.maximized);
    assert!(!window.closed);
}

#[test]
fn toggle_maximize_twice_restores_state() {
    let reg = registry();
    let mut ctl = controller_with_window();

    let is_max = |reg: &BridgeRegistry, ctl: &mut MainWindowController<FakeWindow>| {
        call(reg, ctl, "window:is-maximized", None)
    };

    assert_eq!(is_max(&reg, &mut ctl), BridgeResponse::Ok(json!(false)));
    call(&reg, &mut ctl, "window:toggle-maximize", None);
    assert_eq!(is_max(&reg, &mut ctl), BridgeResponse::Ok(json!(true)));
    call(&reg, &mut ctl, "window:toggle-maximize", None);
    assert_eq!(is_max(&reg, &mut ctl), BridgeResponse::Ok(json!(false)));
}

#[test]
fn minimize_acts_on_focused_window() {
    let reg = registry();
    let mut ctl = controller_with_window();
    call(&reg, &mut ctl, "window:minimize", None);
    assert!(ctl.main_window().unwrap().minimized);
}

#[test]
fn close_clears_main_window() {
    let reg = registry();
    let mut ctl = controller_with_window();

    assert!(call(&reg, &mut ctl, "window:close", None).is_ok());
    assert!(ctl.main_window().is_none());
    assert!(ctl.should_exit());
}

// -- Data operations --

#[test]
fn get_products_placeholder() {
    let reg = registry();
    let mut ctl = controller();
    assert_eq!(
        call(&reg, &mut ctl, "data:get-products", None),
        BridgeResponse::Ok(json!({
            "success": true,
            "data": [],
            "message": "Products retrieved successfully"
        }))
    );
}

#[test]
fn save_transaction_echoes_payload() {
    let reg = registry();
    let mut ctl = controller();
    let response = call(
        &reg,
        &mut ctl,
        "data:save-transaction",
        Some(json!({"total": 42})),
    );

    let value = response.value().unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"]["total"], 42);
    assert!(value["data"]["id"].is_string());
}

// -- Generic and unknown dispatch --

#[test]
fn ping_through_message_send() {
    let reg = registry();
    let mut ctl = controller();
    assert_eq!(
        call(&reg, &mut ctl, "message:send", Some(json!({"type": "ping"}))),
        BridgeResponse::Ok(json!({"success": true, "data": "pong"}))
    );
}

#[test]
fn unknown_message_types_fail_gracefully() {
    let reg = registry();
    let mut ctl = controller();
    for kind in ["app:get-info", "fs:read-file", "eval", ""] {
        assert_eq!(
            call(&reg, &mut ctl, "message:send", Some(json!({"type": kind}))),
            BridgeResponse::Ok(json!({"success": false, "error": "Unknown message type"})),
            "{kind}"
        );
    }
}

#[test]
fn unknown_channel_returns_error_reply() {
    let reg = registry();
    let mut ctl = controller();
    let reply = reg.dispatch(&BridgeRequest::new("fs:read-file").with_id(12), &mut ctl);

    assert_eq!(reply.id, Some(12));
    assert_eq!(
        reply.response,
        BridgeResponse::Err("No handler registered for 'fs:read-file'".into())
    );
}

#[test]
fn every_catalogued_channel_dispatches() {
    let reg = registry();
    let mut ctl = controller_with_window();
    // Close last so the other window operations still have a target.
    let mut ops: Vec<_> = Operation::ALL
        .into_iter()
        .filter(|op| *op != Operation::WindowClose)
        .collect();
    ops.push(Operation::WindowClose);

    for op in ops {
        assert!(call(&reg, &mut ctl, op.channel(), None).is_ok(), "{op}");
    }
}

// -- Raw messages --

#[test]
fn raw_request_round_trip() {
    let reg = registry();
    let mut ctl = controller();
    let reply = reg
        .handle_raw(r#"{"channel":"app:get-version","id":3}"#, &mut ctl)
        .unwrap();

    assert_eq!(reply.id, Some(3));
    assert_eq!(reply.response, BridgeResponse::Ok(json!(env!("CARGO_PKG_VERSION"))));
}

#[test]
fn malformed_raw_message_is_dropped_with_warning() {
    let log = logger();
    let reg = BridgeRegistry::from_config(&config(), log.clone());
    let mut ctl = controller();

    assert!(reg.handle_raw("{not json", &mut ctl).is_none());
    assert_eq!(log.journal().count(LogLevel::Warn), 1);
}
