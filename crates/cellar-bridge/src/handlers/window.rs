//! Window commands. Each acts on the focused window; with none focused they
//! do nothing and still succeed.

use cellar_host::WindowTarget;
use serde_json::Value;

pub fn minimize(target: &mut dyn WindowTarget) -> Value {
    target.minimize_focused();
    Value::Null
}

pub fn toggle_maximize(target: &mut dyn WindowTarget) -> Value {
    target.toggle_maximize_focused();
    Value::Null
}

pub fn close(target: &mut dyn WindowTarget) -> Value {
    target.close_focused();
    Value::Null
}

pub fn is_maximized(target: &dyn WindowTarget) -> Value {
    Value::Bool(target.focused_is_maximized())
}
