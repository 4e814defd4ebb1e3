//! Draining webview events and scheduling the next wake-up.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::CellarApp;
use super::types::{HostEvent, POLL_INTERVAL};

impl CellarApp {
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        self.drain_host_events();

        let now = Instant::now();
        self.controller.poll_retry(now);

        if self.controller.should_exit() {
            event_loop.exit();
            return;
        }

        let mut wake = now + POLL_INTERVAL;
        if let Some(retry_at) = self.controller.next_retry_at() {
            wake = wake.min(retry_at);
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(wake));
    }

    fn drain_host_events(&mut self) {
        let events = match self.events.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => return,
        };

        for event in events {
            match event {
                HostEvent::Ipc(body) => self.handle_ipc(&body),
                HostEvent::PageStarted(url) => {
                    tracing::debug!(url = %url, "page load started");
                }
                HostEvent::PageFinished(url) => {
                    tracing::debug!(url = %url, "page load finished");
                    self.controller.on_ready_to_show();
                }
            }
        }
    }
}
