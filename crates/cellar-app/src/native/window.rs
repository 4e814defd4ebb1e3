//! `NativeWindow` backed by a winit window with a wry webview child.

use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use winit::window::{Window, WindowId};
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use cellar_common::HostError;
use cellar_host::{LoadTarget, NativeWindow, NavigationGuard, WindowSpec};

use super::probe::content_url;
use crate::app_state::HostEvent;

/// The main window. The webview is built on the first load so it starts
/// directly on the content URL.
pub struct WryWindow {
    window: Window,
    webview: Option<WebView>,
    spec: WindowSpec,
    guard: NavigationGuard,
    events: Arc<Mutex<Vec<HostEvent>>>,
}

impl WryWindow {
    pub fn new(
        window: Window,
        spec: WindowSpec,
        guard: NavigationGuard,
        events: Arc<Mutex<Vec<HostEvent>>>,
    ) -> Self {
        Self {
            window,
            webview: None,
            spec,
            guard,
            events,
        }
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// Run `script` in the content. Used to settle bridge replies.
    pub fn evaluate_script(&self, script: &str) -> Result<(), HostError> {
        let webview = self.webview.as_ref().ok_or(HostError::NoWindow)?;
        webview
            .evaluate_script(script)
            .map_err(|e| HostError::Display(e.to_string()))
    }

    /// Stretch the webview over the window's client area.
    pub fn fit_webview(&self) {
        if let Some(webview) = &self.webview {
            if let Err(e) = webview.set_bounds(self.client_bounds()) {
                warn!(error = %e, "failed to resize webview");
            }
        }
    }

    fn client_bounds(&self) -> wry::Rect {
        let size = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        wry::Rect {
            position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
            size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(size.width, size.height)),
        }
    }

    fn build_webview(&self, url: &str) -> Result<WebView, wry::Error> {
        let nav_guard = self.guard.clone();
        let popup_guard = self.guard.clone();
        let ipc_events = Arc::clone(&self.events);
        let load_events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_bounds(self.client_bounds())
            .with_devtools(self.spec.devtools)
            .with_initialization_script(&self.spec.intermediary_script)
            .with_navigation_handler(move |url| nav_guard.allow_navigation(&url))
            .with_new_window_req_handler(move |url| popup_guard.allow_new_window(&url))
            .with_ipc_handler(move |request| {
                let body = request.body().to_string();
                debug!(body_len = body.len(), "IPC message from content");
                if let Ok(mut events) = ipc_events.lock() {
                    events.push(HostEvent::Ipc(body));
                }
            })
            .with_on_page_load_handler(move |event, url| {
                let event = match event {
                    PageLoadEvent::Started => HostEvent::PageStarted(url),
                    PageLoadEvent::Finished => HostEvent::PageFinished(url),
                };
                if let Ok(mut events) = load_events.lock() {
                    events.push(event);
                }
            })
            .with_url(url);

        if let Some(color) = self.spec.background {
            builder = builder.with_background_color(color);
        }

        builder.build_as_child(&self.window)
    }
}

impl NativeWindow for WryWindow {
    fn load(&mut self, target: &LoadTarget) -> Result<(), HostError> {
        let url = content_url(target)?;
        let load_failed = |e: wry::Error| HostError::Load {
            target: target.to_string(),
            reason: e.to_string(),
        };

        if let Some(webview) = &self.webview {
            webview.load_url(&url).map_err(load_failed)?;
        } else {
            let webview = self.build_webview(&url).map_err(load_failed)?;
            self.webview = Some(webview);
        }
        debug!(url = %url, "content load started");
        Ok(())
    }

    fn show(&mut self) {
        self.window.set_visible(true);
        self.window.focus_window();
    }

    fn close(&mut self) {
        self.window.set_visible(false);
        self.webview = None;
    }

    fn minimize(&mut self) {
        self.window.set_minimized(true);
    }

    fn maximize(&mut self) {
        self.window.set_maximized(true);
    }

    fn unmaximize(&mut self) {
        self.window.set_maximized(false);
    }

    fn is_maximized(&self) -> bool {
        self.window.is_maximized()
    }

    fn is_focused(&self) -> bool {
        self.window.has_focus()
    }

    fn open_devtools(&mut self) {
        if let Some(webview) = &self.webview {
            webview.open_devtools();
        }
    }
}
