//! Content loading, readiness, and the development reload retry.

use std::time::Instant;

use super::MainWindowController;
use crate::window::{LoadTarget, NativeWindow};

impl<W: NativeWindow> MainWindowController<W> {
    pub(super) fn load_application(&mut self) {
        let target = self.load_target();
        let Some(window) = self.window.as_mut() else {
            return;
        };

        self.logger.info("Loading application from:", &[&target]);
        if let Err(e) = window.load(&target) {
            self.logger.error("Failed to load application:", &[&e]);
            self.handle_load_error();
        }
    }

    /// Content finished loading. Shows the window the first time; opens dev
    /// tools in development.
    pub fn on_ready_to_show(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        self.consecutive_failures = 0;
        if self.shown {
            return;
        }

        window.show();
        self.shown = true;
        self.logger.info("Main window loaded successfully", &[]);

        if self.settings.development {
            window.open_devtools();
        }
    }

    /// The page failed to load after navigation had started.
    pub fn on_load_failed(&mut self, code: i32, description: &str) {
        self.logger.error("Failed to load:", &[&code, &description]);
        self.handle_load_error();
    }

    /// Fire the scheduled retry if its deadline has passed. Returns whether
    /// a reload was attempted.
    pub fn poll_retry(&mut self, now: Instant) -> bool {
        match self.pending_retry {
            Some(deadline) if deadline <= now => self.pending_retry = None,
            _ => return false,
        }

        let (Some(url), Some(window)) = (self.settings.dev_url.as_ref(), self.window.as_mut())
        else {
            return false;
        };

        let target = LoadTarget::Url(url.clone());
        self.logger.info("Retrying load:", &[&target]);
        if let Err(e) = window.load(&target) {
            self.logger.error("Failed to load application:", &[&e]);
            self.handle_load_error();
        }
        true
    }

    /// Schedule a single retry in development; production only logs.
    fn handle_load_error(&mut self) {
        let Some(url) = self.settings.dev_url.as_deref() else {
            self.logger
                .debug("Not in development, load error is final", &[]);
            return;
        };
        if self.pending_retry.is_some() {
            return;
        }

        match self.settings.retry.delay_for(self.consecutive_failures) {
            Some(delay) => {
                self.pending_retry = Some(Instant::now() + delay);
                self.consecutive_failures += 1;
                let millis = format!("{}ms", delay.as_millis());
                self.logger.info("Retrying dev server in", &[&millis, &url]);
            }
            None => {
                self.logger.error(
                    "Giving up on dev server after retries:",
                    &[&self.consecutive_failures, &url],
                );
            }
        }
    }
}
