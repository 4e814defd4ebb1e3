//! `WindowingSystem` over the active winit event loop.

use std::sync::{Arc, Mutex};

use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use cellar_common::HostError;
use cellar_host::{NavigationGuard, Size, WindowSpec, WindowingSystem};

use super::window::WryWindow;
use crate::app_state::HostEvent;

/// Borrowed for the duration of one controller call.
pub struct WinitWindowing<'a> {
    event_loop: &'a ActiveEventLoop,
    events: &'a Arc<Mutex<Vec<HostEvent>>>,
}

impl<'a> WinitWindowing<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop, events: &'a Arc<Mutex<Vec<HostEvent>>>) -> Self {
        Self { event_loop, events }
    }
}

impl WindowingSystem for WinitWindowing<'_> {
    type Window = WryWindow;

    /// winit reports whole-monitor bounds, so task bars are not excluded.
    fn primary_work_area(&self) -> Result<Size, HostError> {
        let monitor = self
            .event_loop
            .primary_monitor()
            .or_else(|| self.event_loop.available_monitors().next())
            .ok_or_else(|| HostError::Display("no monitor available".into()))?;
        let size = monitor.size().to_logical::<u32>(monitor.scale_factor());
        Ok(Size::new(size.width, size.height))
    }

    fn create_window(
        &mut self,
        spec: &WindowSpec,
        guard: NavigationGuard,
    ) -> Result<WryWindow, HostError> {
        // The webview never grants content native access. Anything other than
        // the locked-down posture cannot be honoured.
        if !spec.security.is_locked_down() {
            return Err(HostError::WindowCreation(
                "only the locked-down security posture is supported".into(),
            ));
        }

        let attributes = Window::default_attributes()
            .with_title(spec.title.clone())
            .with_inner_size(LogicalSize::new(spec.size.width, spec.size.height))
            .with_min_inner_size(LogicalSize::new(spec.min_size.width, spec.min_size.height))
            .with_position(LogicalPosition::new(spec.position.x, spec.position.y))
            .with_visible(spec.visible)
            .with_decorations(spec.frame);

        let window = self
            .event_loop
            .create_window(attributes)
            .map_err(|e| HostError::WindowCreation(e.to_string()))?;

        tracing::info!(
            width = spec.size.width,
            height = spec.size.height,
            x = spec.position.x,
            y = spec.position.y,
            "main window created"
        );
        Ok(WryWindow::new(
            window,
            spec.clone(),
            guard,
            Arc::clone(self.events),
        ))
    }
}
