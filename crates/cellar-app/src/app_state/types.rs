use std::time::Duration;

/// How often webview callbacks are drained when nothing else wakes the loop.
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Something a webview callback observed, queued for the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// Raw `window.ipc.postMessage` body.
    Ipc(String),
    PageStarted(String),
    PageFinished(String),
}
