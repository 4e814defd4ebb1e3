//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use cellar_host::LifecycleDirective;

use super::core::CellarApp;
use crate::native::WinitWindowing;

impl ApplicationHandler for CellarApp {
    /// First call starts the app; later calls are re-activation.
    // TODO: desktop winit sends `resumed` once, so a closed window under
    // `PersistUntilReactivated` is never re-created. Hook the macOS dock
    // reopen event here once winit exposes it.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let mut system = WinitWindowing::new(event_loop, &self.events);
        let result = if self.started {
            self.controller.activate(&mut system)
        } else {
            self.started = true;
            self.controller.start(&mut system)
        };

        if let Err(e) = result {
            tracing::error!(error = %e, "Application startup failed");
            self.fatal = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        // Late events for a window that was already replaced.
        let is_main = self
            .controller
            .main_window()
            .is_some_and(|w| w.id() == window_id);
        if !is_main {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                if self.controller.close_main_window() == LifecycleDirective::Exit {
                    event_loop.exit();
                }
            }

            WindowEvent::Destroyed => {
                if self.controller.on_window_destroyed() == LifecycleDirective::Exit {
                    event_loop.exit();
                }
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(window) = self.controller.main_window() {
                        window.fit_webview();
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.controller.should_exit() {
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}
