//! Startup, re-activation and teardown of the main window.

use cellar_common::HostError;
use cellar_platform::LifecyclePolicy;

use super::{LifecycleDirective, MainWindowController};
use crate::window::{NativeWindow, WindowingSystem};

impl<W: NativeWindow> MainWindowController<W> {
    /// Called once the windowing subsystem is ready. Creates the main window
    /// unless one already exists.
    ///
    /// Errors are fatal: they are logged here and the caller is expected to
    /// terminate the process.
    pub fn start<S>(&mut self, system: &mut S) -> Result<(), HostError>
    where
        S: WindowingSystem<Window = W>,
    {
        if self.window.is_some() {
            self.logger.debug("Main window already exists, start ignored", &[]);
            return Ok(());
        }

        self.logger.info("Initializing", &[&self.settings.app_name]);
        match self.create_main_window(system) {
            Ok(()) => {
                self.logger.info("Application initialized successfully", &[]);
                Ok(())
            }
            Err(e) => {
                self.logger.error("Failed to initialize application:", &[&e]);
                Err(e)
            }
        }
    }

    /// Re-activation signal (dock click). Recreates the window when none
    /// exists, otherwise does nothing.
    pub fn activate<S>(&mut self, system: &mut S) -> Result<(), HostError>
    where
        S: WindowingSystem<Window = W>,
    {
        if self.window.is_some() {
            return Ok(());
        }
        self.should_exit = false;
        self.create_main_window(system)
    }

    /// Build, register and start loading the main window. A no-op while a
    /// window already exists.
    pub fn create_main_window<S>(&mut self, system: &mut S) -> Result<(), HostError>
    where
        S: WindowingSystem<Window = W>,
    {
        if self.window.is_some() {
            return Ok(());
        }

        let result = self.build_window(system);
        if let Err(e) = &result {
            self.logger.error("Failed to create main window:", &[e]);
        }
        result
    }

    fn build_window<S>(&mut self, system: &mut S) -> Result<(), HostError>
    where
        S: WindowingSystem<Window = W>,
    {
        let work_area = system.primary_work_area()?;
        let spec = self.window_spec(work_area);
        let window = system.create_window(&spec, self.guard.clone())?;

        self.window = Some(window);
        self.shown = false;
        self.pending_retry = None;
        self.consecutive_failures = 0;

        self.load_application();
        Ok(())
    }

    /// Close the main window if there is one.
    ///
    /// The handle is cleared before the window is torn down.
    pub fn close_main_window(&mut self) -> LifecycleDirective {
        let Some(mut window) = self.window.take() else {
            return LifecycleDirective::Continue;
        };
        self.clear_window_state();
        window.close();
        drop(window);

        self.logger.info("Main window closed", &[]);
        self.on_all_windows_closed()
    }

    /// The platform destroyed the window without going through
    /// [`close_main_window`](Self::close_main_window).
    pub fn on_window_destroyed(&mut self) -> LifecycleDirective {
        if self.window.take().is_none() {
            return LifecycleDirective::Continue;
        }
        self.clear_window_state();
        self.logger.info("Main window destroyed", &[]);
        self.on_all_windows_closed()
    }

    fn clear_window_state(&mut self) {
        self.shown = false;
        self.pending_retry = None;
        self.consecutive_failures = 0;
    }

    fn on_all_windows_closed(&mut self) -> LifecycleDirective {
        match self.policy {
            LifecyclePolicy::QuitOnEmpty => {
                self.logger.info("All windows closed, quitting", &[]);
                self.should_exit = true;
                LifecycleDirective::Exit
            }
            LifecyclePolicy::PersistUntilReactivated => {
                self.logger
                    .info("All windows closed, waiting for re-activation", &[]);
                LifecycleDirective::Continue
            }
        }
    }
}
