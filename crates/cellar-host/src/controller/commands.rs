//! Focused-window commands issued by the bridge.

use super::MainWindowController;
use crate::target::WindowTarget;
use crate::window::NativeWindow;

impl<W: NativeWindow> MainWindowController<W> {
    fn focused(&self) -> Option<&W> {
        self.window.as_ref().filter(|w| w.is_focused())
    }

    fn focused_mut(&mut self) -> Option<&mut W> {
        self.window.as_mut().filter(|w| w.is_focused())
    }
}

impl<W: NativeWindow> WindowTarget for MainWindowController<W> {
    fn minimize_focused(&mut self) -> bool {
        match self.focused_mut() {
            Some(window) => {
                window.minimize();
                true
            }
            None => false,
        }
    }

    fn toggle_maximize_focused(&mut self) -> bool {
        match self.focused_mut() {
            Some(window) => {
                if window.is_maximized() {
                    window.unmaximize();
                } else {
                    window.maximize();
                }
                true
            }
            None => false,
        }
    }

    fn close_focused(&mut self) -> bool {
        if self.focused().is_none() {
            return false;
        }
        self.close_main_window();
        true
    }

    fn focused_is_maximized(&self) -> bool {
        self.focused().is_some_and(|w| w.is_maximized())
    }
}
