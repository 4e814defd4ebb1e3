//! Answering bridge requests from the content.

use cellar_bridge::settle_script;

use super::core::CellarApp;

impl CellarApp {
    pub(super) fn handle_ipc(&mut self, body: &str) {
        let Some(reply) = self.bridge.handle_raw(body, &mut self.controller) else {
            return;
        };
        let Some(script) = settle_script(&reply) else {
            return;
        };

        // `window:close` may have taken the window with it.
        let Some(window) = self.controller.main_window() else {
            return;
        };
        if let Err(e) = window.evaluate_script(&script) {
            tracing::warn!(error = %e, "failed to deliver bridge reply");
        }
    }
}
